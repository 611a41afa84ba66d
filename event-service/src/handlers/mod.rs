pub mod auth_handlers;
pub mod guest_handlers;
pub mod mini_event_handlers;
pub mod schedule_handlers;
pub mod user_handlers;
