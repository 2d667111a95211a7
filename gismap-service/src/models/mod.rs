pub mod notification;
pub mod user;

pub use notification::Notification;
pub use user::User;
