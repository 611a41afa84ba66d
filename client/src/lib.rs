//! Application core for the Gatherly client: API gateway, session storage,
//! the login/OTP/session state machine, view gating, and the resource
//! controllers every list view is built on.

pub mod api;
pub mod auth;
pub mod resources;
pub mod session;
pub mod view;

#[cfg(test)]
mod tests;
