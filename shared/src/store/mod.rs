use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Guest, MiniEvent, Participation, RsvpStats, ScheduleItem, User};

pub mod memory;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<User>;

    /// Looks up a user by email (case-insensitive) or phone number.
    async fn get_user_by_identifier(&self, identifier: &str) -> Result<User>;

    async fn get_users(&self) -> Result<Vec<User>>;

    async fn create_user(&self, user: User) -> Result<User>;

    async fn update_user(&self, user: User) -> Result<User>;

    async fn rsvp_stats(&self) -> Result<RsvpStats>;
}

#[async_trait]
pub trait GuestStore: Send + Sync {
    async fn get_guest(&self, id: &str) -> Result<Guest>;

    async fn get_guests_by_owner(&self, user_id: &str) -> Result<Vec<Guest>>;

    async fn create_guest(&self, guest: Guest) -> Result<Guest>;

    async fn update_guest(&self, guest: Guest) -> Result<Guest>;

    async fn delete_guest(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Returns all schedule items ordered by start time.
    async fn get_schedule_items(&self) -> Result<Vec<ScheduleItem>>;

    async fn get_schedule_item(&self, id: &str) -> Result<ScheduleItem>;

    async fn create_schedule_item(&self, item: ScheduleItem) -> Result<ScheduleItem>;

    async fn update_schedule_item(&self, item: ScheduleItem) -> Result<ScheduleItem>;

    async fn delete_schedule_item(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait MiniEventStore: Send + Sync {
    /// Returns active mini-events only; deactivated ones stay hidden from guests.
    async fn get_mini_events(&self) -> Result<Vec<MiniEvent>>;

    async fn get_mini_event(&self, id: &str) -> Result<MiniEvent>;

    async fn create_mini_event(&self, event: MiniEvent) -> Result<MiniEvent>;

    async fn update_mini_event(&self, event: MiniEvent) -> Result<MiniEvent>;

    async fn delete_mini_event(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait ParticipationStore: Send + Sync {
    /// Creates a participation. Fails with `Conflict` if one already exists for
    /// the same (user_id, mini_event_id) pair.
    async fn create_participation(&self, participation: Participation) -> Result<Participation>;

    async fn get_participations_by_user(&self, user_id: &str) -> Result<Vec<Participation>>;
}

/// Full store surface the event service router is wired against.
pub trait EventStore:
    UserStore + GuestStore + ScheduleStore + MiniEventStore + ParticipationStore
{
}

impl<T> EventStore for T where
    T: UserStore + GuestStore + ScheduleStore + MiniEventStore + ParticipationStore
{
}
