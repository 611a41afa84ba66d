use axum::{
    extract::{Path, State},
    Json,
};
use gatherly_shared::models::{now_str, MessageResponse, ScheduleItem};
use gatherly_shared::store::ScheduleStore;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CreateScheduleRequest, UpdateScheduleRequest};

// GET /schedule
pub async fn get_schedule<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<ScheduleItem>>>
where
    S: ScheduleStore,
{
    let items = store.get_schedule_items().await?;
    Ok(Json(items))
}

// POST /schedule (admin)
pub async fn create_schedule_item<S>(
    State(store): State<Arc<S>>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<Json<ScheduleItem>>
where
    S: ScheduleStore,
{
    if request.title.trim().is_empty() {
        return Err(AppError::bad_request("Title is required".to_string()));
    }

    let item = ScheduleItem {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        description: request.description,
        start_time: request.start_time,
        end_time: request.end_time,
        location: request.location,
        item_type: request.item_type,
        is_required: request.is_required,
        created_at: now_str(),
    };

    let created = store.create_schedule_item(item).await?;

    info!("Schedule item {} created", created.id);

    Ok(Json(created))
}

// PUT /schedule/:id (admin)
pub async fn update_schedule_item<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateScheduleRequest>,
) -> Result<Json<ScheduleItem>>
where
    S: ScheduleStore,
{
    let mut item = store
        .get_schedule_item(&id)
        .await
        .map_err(|_| AppError::not_found("Schedule item not found".to_string()))?;

    if let Some(title) = request.title {
        item.title = title;
    }
    if let Some(description) = request.description {
        item.description = Some(description);
    }
    if let Some(start_time) = request.start_time {
        item.start_time = start_time;
    }
    if let Some(end_time) = request.end_time {
        item.end_time = end_time;
    }
    if let Some(location) = request.location {
        item.location = Some(location);
    }
    if let Some(item_type) = request.item_type {
        item.item_type = item_type;
    }
    if let Some(is_required) = request.is_required {
        item.is_required = is_required;
    }

    let updated = store.update_schedule_item(item).await?;

    Ok(Json(updated))
}

// DELETE /schedule/:id (admin)
pub async fn delete_schedule_item<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>>
where
    S: ScheduleStore,
{
    store
        .delete_schedule_item(&id)
        .await
        .map_err(|_| AppError::not_found("Schedule item not found".to_string()))?;

    info!("Schedule item {} deleted", id);

    Ok(Json(MessageResponse {
        message: "Schedule item deleted successfully".to_string(),
    }))
}
