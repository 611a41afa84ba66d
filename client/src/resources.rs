use gatherly_shared::models::{Guest, MiniEvent, Participation, ScheduleItem};
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};

/// A collection resource served under a fixed path.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync {
    const PATH: &'static str;

    fn id(&self) -> &str;
}

impl Resource for Guest {
    const PATH: &'static str = "/guests";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for ScheduleItem {
    const PATH: &'static str = "/schedule";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for MiniEvent {
    const PATH: &'static str = "/mini-events";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Fetch-on-mount list state plus confirm-then-apply mutations: the local
/// list changes only after the server call resolves, so a failed call leaves
/// it untouched and records the error.
pub struct ResourceController<R: Resource> {
    api: Arc<ApiClient>,
    items: Vec<R>,
    last_error: Option<String>,
}

impl<R: Resource> ResourceController<R> {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            items: Vec::new(),
            last_error: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail<T>(&mut self, operation: &str, error: ApiError) -> Result<T, ApiError> {
        error!("{} {} failed: {}", operation, R::PATH, error);
        self.last_error = Some(error.to_string());
        Err(error)
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.api.get::<Vec<R>>(R::PATH).await {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
                Ok(())
            }
            Err(e) => self.fail("refresh", e),
        }
    }

    pub async fn create(&mut self, payload: serde_json::Value) -> Result<R, ApiError> {
        match self.api.post::<R>(R::PATH, payload).await {
            Ok(created) => {
                self.items.push(created.clone());
                Ok(created)
            }
            Err(e) => self.fail("create", e),
        }
    }

    pub async fn update(&mut self, id: &str, updates: serde_json::Value) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        match self.api.put::<R>(&path, updates).await {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(e) => self.fail("update", e),
        }
    }

    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        match self.api.delete(&path).await {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                Ok(())
            }
            Err(e) => self.fail("remove", e),
        }
    }
}

impl ResourceController<MiniEvent> {
    /// Registers the current user for a mini-event. The server rejects a
    /// second registration for the same pair; the event list is unaffected
    /// either way.
    pub async fn join(&mut self, id: &str) -> Result<Participation, ApiError> {
        let path = format!("{}/{}/join", MiniEvent::PATH, id);
        match self.api.post::<Participation>(&path, json!({})).await {
            Ok(participation) => Ok(participation),
            Err(e) => self.fail("join", e),
        }
    }

    pub async fn my_participations(&self) -> Result<Vec<Participation>, ApiError> {
        self.api
            .get::<Vec<Participation>>("/mini-events/my-participations")
            .await
    }
}
