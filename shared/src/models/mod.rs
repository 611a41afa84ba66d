use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Returns the current time as an RFC3339 string, the timestamp format used
/// across all stored entities and wire payloads.
pub fn now_str() -> String {
    Utc::now().to_rfc3339()
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guest,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleItemType {
    Ceremony,
    Reception,
    Activity,
    Meal,
    Other,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MiniEventType {
    Game,
    Activity,
    Contest,
    Photo,
    Other,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    Registered,
    Completed,
    Cancelled,
}

/// Travel information a guest fills in once their RSVP is accepted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelDetails {
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub accommodation: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub relationship: Option<String>,
}

/// An invited attendee. `is_verified` is flipped only by an admin; `rsvp_status`
/// only by the user themselves.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub travel_details: Option<TravelDetails>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
    pub created_at: String,
}

/// A companion brought along by a user. Always owned by `user_id`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ScheduleItemType,
    pub is_required: bool,
    pub created_at: String,
}

/// An optional sub-activity guests may opt into, distinct from the main
/// schedule.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MiniEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: MiniEventType,
    pub max_participants: u32,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// Registration of a user for a mini-event. Unique per (user_id, mini_event_id).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: String,
    pub user_id: String,
    pub mini_event_id: String,
    pub status: ParticipationStatus,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

/// Aggregated RSVP counts for the admin dashboard.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpStats {
    pub pending: u32,
    pub accepted: u32,
    pub declined: u32,
}
