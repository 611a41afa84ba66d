use log::info;
use uuid::Uuid;

use crate::models::{
    now_str, EmergencyContact, MiniEvent, MiniEventType, Role, RsvpStatus, ScheduleItem,
    ScheduleItemType, TravelDetails, User,
};
use crate::store::{MiniEventStore, Result, ScheduleStore, UserStore};

fn user(email: &str, name: &str, role: Role, is_verified: bool, rsvp_status: RsvpStatus) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: name.to_string(),
        phone: None,
        role,
        is_verified,
        rsvp_status,
        travel_details: None,
        dietary_restrictions: vec![],
        emergency_contact: None,
        created_at: now_str(),
    }
}

/// Loads the demo dataset into the store. The in-memory store starts empty, so
/// both the service binary and the handler tests run against this data.
pub async fn seed_demo_data<S>(store: &S) -> Result<()>
where
    S: UserStore + ScheduleStore + MiniEventStore,
{
    store
        .create_user(user(
            "admin@event.com",
            "Event Administrator",
            Role::Admin,
            true,
            RsvpStatus::Accepted,
        ))
        .await?;

    let mut john = user(
        "john@example.com",
        "John Smith",
        Role::Guest,
        true,
        RsvpStatus::Accepted,
    );
    john.phone = Some("+15550100".to_string());
    john.travel_details = Some(TravelDetails {
        arrival_date: Some("2024-03-15T00:00:00Z".to_string()),
        departure_date: Some("2024-03-17T00:00:00Z".to_string()),
        flight_number: Some("AA123".to_string()),
        accommodation: Some("Grand Hotel".to_string()),
    });
    john.dietary_restrictions = vec!["vegetarian".to_string()];
    john.emergency_contact = Some(EmergencyContact {
        name: "Jane Smith".to_string(),
        phone: "+1234567890".to_string(),
        relationship: Some("spouse".to_string()),
    });
    store.create_user(john).await?;

    store
        .create_user(user(
            "jane@example.com",
            "Jane Doe",
            Role::Guest,
            false,
            RsvpStatus::Pending,
        ))
        .await?;

    let mut mike = user(
        "mike@example.com",
        "Mike Johnson",
        Role::Guest,
        true,
        RsvpStatus::Accepted,
    );
    mike.travel_details = Some(TravelDetails {
        arrival_date: Some("2024-03-14T00:00:00Z".to_string()),
        departure_date: Some("2024-03-18T00:00:00Z".to_string()),
        flight_number: None,
        accommodation: None,
    });
    store.create_user(mike).await?;

    store
        .create_user(user(
            "sarah@example.com",
            "Sarah Wilson",
            Role::Guest,
            true,
            RsvpStatus::Declined,
        ))
        .await?;

    store
        .create_schedule_item(ScheduleItem {
            id: Uuid::new_v4().to_string(),
            title: "Welcome Ceremony".to_string(),
            description: Some("Opening ceremony and welcome drinks".to_string()),
            start_time: "2024-03-15T17:00:00Z".to_string(),
            end_time: "2024-03-15T18:30:00Z".to_string(),
            location: Some("Main Hall".to_string()),
            item_type: ScheduleItemType::Ceremony,
            is_required: true,
            created_at: now_str(),
        })
        .await?;

    store
        .create_schedule_item(ScheduleItem {
            id: Uuid::new_v4().to_string(),
            title: "Gala Dinner".to_string(),
            description: Some("Formal dinner with speeches".to_string()),
            start_time: "2024-03-15T19:00:00Z".to_string(),
            end_time: "2024-03-15T22:00:00Z".to_string(),
            location: Some("Garden Terrace".to_string()),
            item_type: ScheduleItemType::Meal,
            is_required: false,
            created_at: now_str(),
        })
        .await?;

    store
        .create_mini_event(MiniEvent {
            id: Uuid::new_v4().to_string(),
            title: "Photo Scavenger Hunt".to_string(),
            description: Some("Team photo challenge across the venue".to_string()),
            event_type: MiniEventType::Photo,
            max_participants: 50,
            start_time: Some("2024-03-16T10:00:00Z".to_string()),
            end_time: Some("2024-03-16T12:00:00Z".to_string()),
            location: Some("Venue grounds".to_string()),
            is_active: true,
            created_at: now_str(),
        })
        .await?;

    store
        .create_mini_event(MiniEvent {
            id: Uuid::new_v4().to_string(),
            title: "Trivia Night".to_string(),
            description: Some("Pub-style trivia, teams of four".to_string()),
            event_type: MiniEventType::Game,
            max_participants: 40,
            start_time: Some("2024-03-16T20:00:00Z".to_string()),
            end_time: Some("2024-03-16T22:00:00Z".to_string()),
            location: Some("Lounge".to_string()),
            is_active: true,
            created_at: now_str(),
        })
        .await?;

    info!("Seeded demo data: 5 users, 2 schedule items, 2 mini-events");
    Ok(())
}
