//! Data models shared across database access and API handlers.

pub mod activity_log;
pub mod evidence;
pub mod reports;
pub mod taxonomy;
pub mod user;
