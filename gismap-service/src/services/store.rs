//! In-memory storage for users and notifications.
//!
//! Each collection sits behind its own lock. Operations that touch both
//! always take the users lock first.

use crate::models::{Notification, User};
use crate::services::metrics;
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Whether [`Store::create_or_get_user`] added a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOutcome {
    Created,
    Existing,
}

impl UserOutcome {
    pub fn message(self) -> &'static str {
        match self {
            UserOutcome::Created => "User created",
            UserOutcome::Existing => "User exists",
        }
    }
}

#[derive(Clone, Default)]
pub struct Store {
    users: Arc<RwLock<Vec<User>>>,
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user whose name matches ignoring case, creating it first
    /// if there is none.
    pub async fn create_or_get_user(&self, name: &str) -> Result<(User, UserOutcome), AppError> {
        if name.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!("Name is required")));
        }

        let mut users = self.users.write().await;

        if let Some(existing) = users.iter().find(|u| u.has_name(name)) {
            tracing::debug!(user_id = %existing.id, "User already registered");
            return Ok((existing.clone(), UserOutcome::Existing));
        }

        let user = User::new(name.to_string());
        users.push(user.clone());
        metrics::record_user_created();

        tracing::info!(user_id = %user.id, total_users = users.len(), "User created");
        Ok((user, UserOutcome::Created))
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Creates one notification per receiver id that names a known user.
    /// Unknown receiver ids are dropped without being reported; duplicates
    /// get one notification each.
    pub async fn send_notifications(
        &self,
        sender_id: &str,
        receiver_ids: &[String],
        message: &str,
    ) -> Result<Vec<Notification>, AppError> {
        if sender_id.is_empty() || message.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "senderId, userIds, and message are required"
            )));
        }

        let users = self.users.read().await;

        let sender = users.iter().find(|u| u.id == sender_id).ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!("Invalid senderId (user not found)"))
        })?;

        let receivers: Vec<&User> = receiver_ids
            .iter()
            .filter_map(|id| users.iter().find(|u| &u.id == id))
            .collect();

        let dropped = receiver_ids.len() - receivers.len();
        if dropped > 0 {
            metrics::record_dropped_receivers(dropped);
            tracing::debug!(sender_id = %sender.id, dropped, "Ignoring unknown receiver ids");
        }

        if receivers.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "No valid userIds provided"
            )));
        }

        let created: Vec<Notification> = receivers
            .into_iter()
            .map(|receiver| Notification::new(sender, receiver, message.to_string()))
            .collect();

        self.notifications
            .write()
            .await
            .extend(created.iter().cloned());
        metrics::record_notifications_sent(created.len());

        tracing::info!(
            sender_id = %sender.id,
            count = created.len(),
            "Notifications sent"
        );
        Ok(created)
    }

    /// Notifications addressed to `user_id`, oldest first.
    pub async fn notifications_for(&self, user_id: &str) -> Vec<Notification> {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|n| n.receiver_id == user_id)
            .cloned()
            .collect()
    }

    /// Marks a notification read. Repeating the call is harmless.
    pub async fn mark_read(&self, notification_id: &str) -> Result<Notification, AppError> {
        let mut notifications = self.notifications.write().await;

        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Notification not found")))?;

        if !notification.read {
            notification.mark_read();
            metrics::record_notification_read();
            tracing::info!(notification_id = %notification.id, "Notification marked as read");
        }

        Ok(notification.clone())
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn notification_count(&self) -> usize {
        self.notifications.read().await.len()
    }
}
