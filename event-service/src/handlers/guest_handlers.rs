use axum::{
    extract::{Extension, Path, State},
    Json,
};
use gatherly_shared::models::{now_str, Guest, MessageResponse};
use gatherly_shared::store::GuestStore;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CreateGuestRequest, UpdateGuestRequest};

/// Fetches a guest and checks ownership. A guest belonging to another user is
/// reported as missing, never as forbidden, so ids don't leak existence.
async fn get_owned_guest<S>(store: &Arc<S>, id: &str, user_id: &str) -> Result<Guest>
where
    S: GuestStore,
{
    let guest = store
        .get_guest(id)
        .await
        .map_err(|_| AppError::not_found("Guest not found".to_string()))?;

    if guest.user_id != user_id {
        return Err(AppError::not_found("Guest not found".to_string()));
    }

    Ok(guest)
}

// GET /guests
pub async fn get_guests<S>(
    State(store): State<Arc<S>>,
    Extension(user_id): Extension<String>,
) -> Result<Json<Vec<Guest>>>
where
    S: GuestStore,
{
    let guests = store.get_guests_by_owner(&user_id).await?;
    Ok(Json(guests))
}

// POST /guests
pub async fn create_guest<S>(
    State(store): State<Arc<S>>,
    Extension(user_id): Extension<String>,
    Json(request): Json<CreateGuestRequest>,
) -> Result<Json<Guest>>
where
    S: GuestStore,
{
    if request.name.trim().is_empty() {
        return Err(AppError::bad_request("Guest name is required".to_string()));
    }

    let guest = Guest {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        name: request.name,
        age: request.age,
        relationship: request.relationship,
        dietary_restrictions: request.dietary_restrictions,
        created_at: now_str(),
    };

    let created = store.create_guest(guest).await?;

    info!("Guest {} added for user {}", created.id, user_id);

    Ok(Json(created))
}

// PUT /guests/:id
pub async fn update_guest<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Extension(user_id): Extension<String>,
    Json(request): Json<UpdateGuestRequest>,
) -> Result<Json<Guest>>
where
    S: GuestStore,
{
    let mut guest = get_owned_guest(&store, &id, &user_id).await?;

    if let Some(name) = request.name {
        guest.name = name;
    }
    if let Some(age) = request.age {
        guest.age = Some(age);
    }
    if let Some(relationship) = request.relationship {
        guest.relationship = Some(relationship);
    }
    if let Some(dietary_restrictions) = request.dietary_restrictions {
        guest.dietary_restrictions = dietary_restrictions;
    }

    let updated = store.update_guest(guest).await?;

    Ok(Json(updated))
}

// DELETE /guests/:id
pub async fn delete_guest<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Extension(user_id): Extension<String>,
) -> Result<Json<MessageResponse>>
where
    S: GuestStore,
{
    let guest = get_owned_guest(&store, &id, &user_id).await?;

    store.delete_guest(&guest.id).await?;

    info!("Guest {} deleted by user {}", id, user_id);

    Ok(Json(MessageResponse {
        message: "Guest deleted successfully".to_string(),
    }))
}
