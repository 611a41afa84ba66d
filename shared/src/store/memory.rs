use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::models::{Guest, MiniEvent, Participation, RsvpStats, RsvpStatus, ScheduleItem, User};
use crate::store::{
    GuestStore, MiniEventStore, ParticipationStore, Result, ScheduleStore, StoreError, UserStore,
};

/// In-memory document store. This is the only store implementation shipped:
/// the app runs against seeded demo data and loses state on restart.
#[derive(Default)]
pub struct MemoryEventStore {
    users: RwLock<HashMap<String, User>>,
    guests: RwLock<HashMap<String, Guest>>,
    schedule: RwLock<HashMap<String, ScheduleItem>>,
    mini_events: RwLock<HashMap<String, MiniEvent>>,
    participations: RwLock<HashMap<String, Participation>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(entity: &str) -> StoreError {
    StoreError::Internal(format!("{} lock poisoned", entity))
}

#[async_trait]
impl UserStore for MemoryEventStore {
    async fn get_user(&self, id: &str) -> Result<User> {
        let users = self.users.read().map_err(|_| poisoned("users"))?;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("User {} not found", id)))
    }

    async fn get_user_by_identifier(&self, identifier: &str) -> Result<User> {
        let users = self.users.read().map_err(|_| poisoned("users"))?;
        users
            .values()
            .find(|u| {
                u.email.eq_ignore_ascii_case(identifier)
                    || u.phone.as_deref() == Some(identifier)
            })
            .cloned()
            .ok_or_else(|| StoreError::NotFound("User not found".to_string()))
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().map_err(|_| poisoned("users"))?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn create_user(&self, user: User) -> Result<User> {
        let mut users = self.users.write().map_err(|_| poisoned("users"))?;
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::Conflict(format!(
                "User with email {} already exists",
                user.email
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User> {
        let mut users = self.users.write().map_err(|_| poisoned("users"))?;
        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound(format!("User {} not found", user.id)));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn rsvp_stats(&self) -> Result<RsvpStats> {
        let users = self.users.read().map_err(|_| poisoned("users"))?;
        let mut stats = RsvpStats::default();
        for user in users.values() {
            match user.rsvp_status {
                RsvpStatus::Pending => stats.pending += 1,
                RsvpStatus::Accepted => stats.accepted += 1,
                RsvpStatus::Declined => stats.declined += 1,
            }
        }
        Ok(stats)
    }
}

#[async_trait]
impl GuestStore for MemoryEventStore {
    async fn get_guest(&self, id: &str) -> Result<Guest> {
        let guests = self.guests.read().map_err(|_| poisoned("guests"))?;
        guests
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Guest {} not found", id)))
    }

    async fn get_guests_by_owner(&self, user_id: &str) -> Result<Vec<Guest>> {
        let guests = self.guests.read().map_err(|_| poisoned("guests"))?;
        let mut owned: Vec<Guest> = guests
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(owned)
    }

    async fn create_guest(&self, guest: Guest) -> Result<Guest> {
        let mut guests = self.guests.write().map_err(|_| poisoned("guests"))?;
        guests.insert(guest.id.clone(), guest.clone());
        Ok(guest)
    }

    async fn update_guest(&self, guest: Guest) -> Result<Guest> {
        let mut guests = self.guests.write().map_err(|_| poisoned("guests"))?;
        if !guests.contains_key(&guest.id) {
            return Err(StoreError::NotFound(format!(
                "Guest {} not found",
                guest.id
            )));
        }
        guests.insert(guest.id.clone(), guest.clone());
        Ok(guest)
    }

    async fn delete_guest(&self, id: &str) -> Result<()> {
        let mut guests = self.guests.write().map_err(|_| poisoned("guests"))?;
        guests
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Guest {} not found", id)))
    }
}

#[async_trait]
impl ScheduleStore for MemoryEventStore {
    async fn get_schedule_items(&self) -> Result<Vec<ScheduleItem>> {
        let schedule = self.schedule.read().map_err(|_| poisoned("schedule"))?;
        let mut items: Vec<ScheduleItem> = schedule.values().cloned().collect();
        // RFC3339 strings sort chronologically
        items.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(items)
    }

    async fn get_schedule_item(&self, id: &str) -> Result<ScheduleItem> {
        let schedule = self.schedule.read().map_err(|_| poisoned("schedule"))?;
        schedule
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Schedule item {} not found", id)))
    }

    async fn create_schedule_item(&self, item: ScheduleItem) -> Result<ScheduleItem> {
        let mut schedule = self.schedule.write().map_err(|_| poisoned("schedule"))?;
        schedule.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn update_schedule_item(&self, item: ScheduleItem) -> Result<ScheduleItem> {
        let mut schedule = self.schedule.write().map_err(|_| poisoned("schedule"))?;
        if !schedule.contains_key(&item.id) {
            return Err(StoreError::NotFound(format!(
                "Schedule item {} not found",
                item.id
            )));
        }
        schedule.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn delete_schedule_item(&self, id: &str) -> Result<()> {
        let mut schedule = self.schedule.write().map_err(|_| poisoned("schedule"))?;
        schedule
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Schedule item {} not found", id)))
    }
}

#[async_trait]
impl MiniEventStore for MemoryEventStore {
    async fn get_mini_events(&self) -> Result<Vec<MiniEvent>> {
        let events = self.mini_events.read().map_err(|_| poisoned("mini_events"))?;
        let mut active: Vec<MiniEvent> = events
            .values()
            .filter(|e| e.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(active)
    }

    async fn get_mini_event(&self, id: &str) -> Result<MiniEvent> {
        let events = self.mini_events.read().map_err(|_| poisoned("mini_events"))?;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Mini event {} not found", id)))
    }

    async fn create_mini_event(&self, event: MiniEvent) -> Result<MiniEvent> {
        let mut events = self.mini_events.write().map_err(|_| poisoned("mini_events"))?;
        events.insert(event.id.clone(), event.clone());
        Ok(event)
    }

    async fn update_mini_event(&self, event: MiniEvent) -> Result<MiniEvent> {
        let mut events = self.mini_events.write().map_err(|_| poisoned("mini_events"))?;
        if !events.contains_key(&event.id) {
            return Err(StoreError::NotFound(format!(
                "Mini event {} not found",
                event.id
            )));
        }
        events.insert(event.id.clone(), event.clone());
        Ok(event)
    }

    async fn delete_mini_event(&self, id: &str) -> Result<()> {
        let mut events = self.mini_events.write().map_err(|_| poisoned("mini_events"))?;
        events
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Mini event {} not found", id)))
    }
}

#[async_trait]
impl ParticipationStore for MemoryEventStore {
    async fn create_participation(&self, participation: Participation) -> Result<Participation> {
        let mut participations = self
            .participations
            .write()
            .map_err(|_| poisoned("participations"))?;
        let duplicate = participations.values().any(|p| {
            p.user_id == participation.user_id && p.mini_event_id == participation.mini_event_id
        });
        if duplicate {
            return Err(StoreError::Conflict(
                "Already participating in this event".to_string(),
            ));
        }
        participations.insert(participation.id.clone(), participation.clone());
        Ok(participation)
    }

    async fn get_participations_by_user(&self, user_id: &str) -> Result<Vec<Participation>> {
        let participations = self
            .participations
            .read()
            .map_err(|_| poisoned("participations"))?;
        let mut mine: Vec<Participation> = participations
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(mine)
    }
}
