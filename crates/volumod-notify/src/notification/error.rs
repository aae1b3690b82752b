//! Fan-out errors.

use thiserror::Error;

use volumod_core::AppError;
use volumod_core::types::{NotificationId, UserId};

/// Failure of a fan-out call.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A single-recipient write failed, or the role directory failed before
    /// any recipient was attempted.
    #[error("notification store error: {0}")]
    Store(#[from] AppError),

    /// Every recipient was attempted and every write failed.
    #[error("notification delivered to none of {} recipients: {last_error}", failed.len())]
    Undelivered {
        /// Recipients whose write failed, in attempt order.
        failed: Vec<UserId>,
        /// Error from the last failed write.
        #[source]
        last_error: AppError,
    },

    /// Some recipients got the notification and some did not. Delivered
    /// notifications are not rolled back.
    #[error("notification delivered to {} of {} recipients", delivered.len(), delivered.len() + failed.len())]
    PartialFailure {
        /// Notifications that were stored.
        delivered: Vec<NotificationId>,
        /// Recipients whose write failed, in attempt order.
        failed: Vec<UserId>,
    },
}

impl DispatchError {
    /// Recipients that did not receive the notification. Empty for
    /// [`DispatchError::Store`].
    pub fn failed_recipients(&self) -> &[UserId] {
        match self {
            Self::Store(_) => &[],
            Self::Undelivered { failed, .. } | Self::PartialFailure { failed, .. } => failed,
        }
    }
}
