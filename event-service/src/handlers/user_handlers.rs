use axum::{
    extract::{Extension, Path, State},
    Json,
};
use gatherly_shared::models::{RsvpStats, User};
use gatherly_shared::store::{GuestStore, UserStore};
use log::info;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ProfileResponse, UpdateProfileRequest};

// GET /users (admin)
pub async fn get_users<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<User>>>
where
    S: UserStore,
{
    let users = store.get_users().await?;
    Ok(Json(users))
}

// GET /users/profile
pub async fn get_profile<S>(
    State(store): State<Arc<S>>,
    Extension(user_id): Extension<String>,
) -> Result<Json<ProfileResponse>>
where
    S: UserStore + GuestStore,
{
    let user = store.get_user(&user_id).await?;
    let guests = store.get_guests_by_owner(&user_id).await?;

    Ok(Json(ProfileResponse { user, guests }))
}

// PUT /users/profile
pub async fn update_profile<S>(
    State(store): State<Arc<S>>,
    Extension(user_id): Extension<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>>
where
    S: UserStore,
{
    let mut user = store.get_user(&user_id).await?;

    // Identity fields (id, email, role, isVerified) are not client-writable
    if let Some(name) = request.name {
        user.name = name;
    }
    if let Some(phone) = request.phone {
        user.phone = Some(phone);
    }
    if let Some(rsvp_status) = request.rsvp_status {
        user.rsvp_status = rsvp_status;
    }
    if let Some(travel_details) = request.travel_details {
        user.travel_details = Some(travel_details);
    }
    if let Some(dietary_restrictions) = request.dietary_restrictions {
        user.dietary_restrictions = dietary_restrictions;
    }
    if let Some(emergency_contact) = request.emergency_contact {
        user.emergency_contact = Some(emergency_contact);
    }

    let updated = store.update_user(user).await?;

    info!("Profile updated for user {}", user_id);

    Ok(Json(updated))
}

// PATCH /users/:id/verify (admin)
pub async fn verify_user<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<User>>
where
    S: UserStore,
{
    let mut user = store.get_user(&id).await?;
    user.is_verified = true;

    let updated = store.update_user(user).await?;

    info!("User {} verified by admin", id);

    Ok(Json(updated))
}

// GET /users/rsvp-stats (admin)
pub async fn rsvp_stats<S>(State(store): State<Arc<S>>) -> Result<Json<RsvpStats>>
where
    S: UserStore,
{
    let stats = store.rsvp_stats().await?;
    Ok(Json(stats))
}
