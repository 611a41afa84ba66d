pub mod auth;
pub mod models;
pub mod seed;
pub mod store;

#[cfg(feature = "test_utils")]
pub mod test_utils;
