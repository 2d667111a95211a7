//! HTTP handlers for gismap-service.

pub mod health;
pub mod notifications;
pub mod open;
pub mod users;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use notifications::{list_notifications, mark_read, send_notifications};
pub use open::open_page;
pub use users::{create_user, list_users};
