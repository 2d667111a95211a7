use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// One message from one sender to one receiver. Names are copied at send
/// time and never follow later changes to the users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Receiver id.
    #[serde(rename = "userId")]
    pub receiver_id: String,
    pub receiver_name: String,
    pub sender_id: String,
    pub sender_name: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(sender: &User, receiver: &User, message: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            receiver_id: receiver.id.clone(),
            receiver_name: receiver.name.clone(),
            sender_id: sender.id.clone(),
            sender_name: sender.name.clone(),
            message,
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
