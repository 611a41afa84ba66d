use axum::{
    extract::{Extension, Path, State},
    Json,
};
use gatherly_shared::models::{
    now_str, MessageResponse, MiniEvent, Participation, ParticipationStatus,
};
use gatherly_shared::store::{MiniEventStore, ParticipationStore};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CreateMiniEventRequest, UpdateMiniEventRequest};

// GET /mini-events
pub async fn get_mini_events<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<MiniEvent>>>
where
    S: MiniEventStore,
{
    let events = store.get_mini_events().await?;
    Ok(Json(events))
}

// POST /mini-events (admin)
pub async fn create_mini_event<S>(
    State(store): State<Arc<S>>,
    Json(request): Json<CreateMiniEventRequest>,
) -> Result<Json<MiniEvent>>
where
    S: MiniEventStore,
{
    if request.title.trim().is_empty() {
        return Err(AppError::bad_request("Title is required".to_string()));
    }

    let event = MiniEvent {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        description: request.description,
        event_type: request.event_type,
        max_participants: request.max_participants,
        start_time: request.start_time,
        end_time: request.end_time,
        location: request.location,
        is_active: true,
        created_at: now_str(),
    };

    let created = store.create_mini_event(event).await?;

    info!("Mini event {} created", created.id);

    Ok(Json(created))
}

// PUT /mini-events/:id (admin)
pub async fn update_mini_event<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMiniEventRequest>,
) -> Result<Json<MiniEvent>>
where
    S: MiniEventStore,
{
    let mut event = store
        .get_mini_event(&id)
        .await
        .map_err(|_| AppError::not_found("Mini event not found".to_string()))?;

    if let Some(title) = request.title {
        event.title = title;
    }
    if let Some(description) = request.description {
        event.description = Some(description);
    }
    if let Some(event_type) = request.event_type {
        event.event_type = event_type;
    }
    if let Some(max_participants) = request.max_participants {
        event.max_participants = max_participants;
    }
    if let Some(start_time) = request.start_time {
        event.start_time = Some(start_time);
    }
    if let Some(end_time) = request.end_time {
        event.end_time = Some(end_time);
    }
    if let Some(location) = request.location {
        event.location = Some(location);
    }
    if let Some(is_active) = request.is_active {
        event.is_active = is_active;
    }

    let updated = store.update_mini_event(event).await?;

    Ok(Json(updated))
}

// DELETE /mini-events/:id (admin)
pub async fn delete_mini_event<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>>
where
    S: MiniEventStore,
{
    store
        .delete_mini_event(&id)
        .await
        .map_err(|_| AppError::not_found("Mini event not found".to_string()))?;

    info!("Mini event {} deleted", id);

    Ok(Json(MessageResponse {
        message: "Mini event deleted successfully".to_string(),
    }))
}

// POST /mini-events/:id/join
pub async fn join_mini_event<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Extension(user_id): Extension<String>,
) -> Result<Json<Participation>>
where
    S: MiniEventStore + ParticipationStore,
{
    // The mini-event must exist and still be listed
    let event = store
        .get_mini_event(&id)
        .await
        .map_err(|_| AppError::not_found("Mini event not found".to_string()))?;

    let participation = Participation {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        mini_event_id: event.id.clone(),
        status: ParticipationStatus::Registered,
        score: None,
        notes: None,
        created_at: now_str(),
    };

    // The store rejects a second join for the same (user, event) pair
    let created = store.create_participation(participation).await?;

    info!("User {} joined mini event {}", user_id, event.id);

    Ok(Json(created))
}

// GET /mini-events/my-participations
pub async fn my_participations<S>(
    State(store): State<Arc<S>>,
    Extension(user_id): Extension<String>,
) -> Result<Json<Vec<Participation>>>
where
    S: ParticipationStore,
{
    let participations = store.get_participations_by_user(&user_id).await?;
    Ok(Json(participations))
}
