//! HTTP route handlers.

pub mod health;
pub mod home;
pub mod metrics;
