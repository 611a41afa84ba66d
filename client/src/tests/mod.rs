use gatherly_shared::models::{Role, RsvpStatus, User};
use serde_json::{json, Value};

mod resources_test;

pub fn test_user(id: &str, role: Role, is_verified: bool) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        name: id.to_string(),
        phone: None,
        role,
        is_verified,
        rsvp_status: RsvpStatus::Pending,
        travel_details: None,
        dietary_restrictions: vec![],
        emergency_contact: None,
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
    }
}

/// Wire-shaped user object, as the service serializes it.
pub fn user_json(id: &str, email: &str, role: &str, is_verified: bool) -> Value {
    json!({
        "id": id,
        "email": email,
        "name": "Test User",
        "role": role,
        "isVerified": is_verified,
        "rsvpStatus": "pending",
        "dietaryRestrictions": [],
        "createdAt": "2024-01-01T00:00:00+00:00"
    })
}
