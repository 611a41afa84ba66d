use gatherly_shared::models::{
    EmergencyContact, Guest, MiniEventType, RsvpStatus, ScheduleItemType, TravelDetails, User,
};
use serde::{Deserialize, Serialize};

// Auth

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub identifier: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub user_id: String,
    pub otp: String,
}

#[derive(Serialize, Debug)]
pub struct VerifyOtpResponse {
    pub token: String,
    pub user: User,
    pub message: String,
}

// Users

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: Option<RsvpStatus>,
    pub travel_details: Option<TravelDetails>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub emergency_contact: Option<EmergencyContact>,
}

#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub guests: Vec<Guest>,
}

// Guests

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub relationship: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
}

// Schedule

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type", default = "default_schedule_type")]
    pub item_type: ScheduleItemType,
    #[serde(default)]
    pub is_required: bool,
}

fn default_schedule_type() -> ScheduleItemType {
    ScheduleItemType::Other
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<ScheduleItemType>,
    pub is_required: Option<bool>,
}

// Mini-events

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateMiniEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default = "default_mini_event_type")]
    pub event_type: MiniEventType,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

fn default_mini_event_type() -> MiniEventType {
    MiniEventType::Activity
}

fn default_max_participants() -> u32 {
    50
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMiniEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<MiniEventType>,
    pub max_participants: Option<u32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}
