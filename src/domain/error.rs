// SPDX-License-Identifier: MPL-2.0
//! Review error taxonomy.
//!
//! Every variant is recoverable: the session keeps its current state and
//! the user can carry on. None of them ends the process.

use thiserror::Error;

/// Errors surfaced while sampling, deleting, or acting on a swipe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Access to the media library was refused.
    #[error("Access to the media library was denied")]
    PermissionDenied,

    /// The library holds no matching media.
    #[error("The media library is empty")]
    EmptyLibrary,

    /// A count or page request failed, or came back empty.
    #[error("Could not fetch media: {0}")]
    TransientFetchFailure(String),

    /// The store refused or failed to delete the asset.
    #[error("Could not delete media: {0}")]
    DeleteFailure(String),

    /// A keep/delete action handler failed.
    #[error("Action failed: {0}")]
    CallbackFault(String),
}

impl ReviewError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ReviewError::PermissionDenied => "error-permission-denied",
            ReviewError::EmptyLibrary => "error-empty-library",
            ReviewError::TransientFetchFailure(_) => "error-fetch-failed",
            ReviewError::DeleteFailure(_) => "error-delete-failed",
            ReviewError::CallbackFault(_) => "error-action-failed",
        }
    }

    /// Whether the user has to act (grant access, pick another folder) before
    /// retrying can help.
    #[must_use]
    pub fn needs_user_action(&self) -> bool {
        matches!(
            self,
            ReviewError::PermissionDenied | ReviewError::EmptyLibrary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18n_keys() {
        assert_eq!(
            ReviewError::PermissionDenied.i18n_key(),
            "error-permission-denied"
        );
        assert_eq!(ReviewError::EmptyLibrary.i18n_key(), "error-empty-library");
        assert_eq!(
            ReviewError::DeleteFailure("x".into()).i18n_key(),
            "error-delete-failed"
        );
    }

    #[test]
    fn display_includes_detail() {
        let err = ReviewError::TransientFetchFailure("cursor vanished".into());
        assert!(err.to_string().contains("cursor vanished"));
    }

    #[test]
    fn user_action_errors() {
        assert!(ReviewError::PermissionDenied.needs_user_action());
        assert!(ReviewError::EmptyLibrary.needs_user_action());
        assert!(!ReviewError::CallbackFault("boom".into()).needs_user_action());
    }
}
