//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

impl Severity {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Normal => "dialog-information",
            Self::Destructive => "dialog-error",
        }
    }
}

/// Port for transient, dismissible user-facing messages.
///
/// Fire-and-forget: callers do not wait on acknowledgement, and a failed
/// notification never fails the operation that emitted it.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `body` - Optional description
    /// * `severity` - Normal or destructive
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn notify(
        &self,
        title: &str,
        body: Option<&str>,
        severity: Severity,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        body: Option<&str>,
        severity: Severity,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, body, severity).await
    }
}
