use thiserror::Error;

/// Errors surfaced by data store collaborators.
///
/// The store itself never fails: absent components and keys are normal
/// results (`None` / empty map), not errors. The only error kind that exists
/// is a listener failing while it handles an update notification, and that
/// error never escapes the notification loop: it is logged and the
/// remaining listeners are still invoked.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A registered listener failed while handling an update event.
    #[error("Listener notification failed: {0}")]
    ListenerFailed(String),
}

impl StoreError {
    /// Builds a [`StoreError::ListenerFailed`] from any message.
    pub fn listener_failed<S: Into<String>>(message: S) -> Self {
        StoreError::ListenerFailed(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
