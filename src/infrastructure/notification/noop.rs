//! No-op notification adapter

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier, Severity};

/// No-op notifier that swallows every notification
///
/// Used when desktop notifications are disabled.
pub struct NoopNotifier;

impl NoopNotifier {
    /// Create a new no-op notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(
        &self,
        _title: &str,
        _body: Option<&str>,
        _severity: Severity,
    ) -> Result<(), NotificationError> {
        // Do nothing
        Ok(())
    }
}
