// SPDX-License-Identifier: MPL-2.0
//! Media store port definition.
//!
//! This module defines the [`MediaStore`] trait: the media library capability
//! the review core depends on. Infrastructure adapters implement it; see
//! `infrastructure::directory_store` and `infrastructure::memory_store`.

use crate::domain::asset::{AssetId, AssetPage, MediaKind};
use crate::domain::error::ReviewError;
use thiserror::Error;

// =============================================================================
// StoreError
// =============================================================================

/// Errors that a media store can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The caller may not access the library.
    #[error("Permission denied")]
    PermissionDenied,

    /// The `after` cursor no longer names an asset in the store.
    #[error("Cursor not found: {0}")]
    CursorNotFound(AssetId),

    /// An asset to delete does not exist.
    #[error("Asset not found: {0}")]
    NotFound(AssetId),

    /// The underlying storage failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            StoreError::PermissionDenied
        } else {
            StoreError::Io(err.to_string())
        }
    }
}

impl StoreError {
    /// Maps a failed read (count/page) into the review taxonomy.
    #[must_use]
    pub fn into_fetch_error(self) -> ReviewError {
        match self {
            StoreError::PermissionDenied => ReviewError::PermissionDenied,
            other => ReviewError::TransientFetchFailure(other.to_string()),
        }
    }

    /// Maps a failed delete into the review taxonomy.
    #[must_use]
    pub fn into_delete_error(self) -> ReviewError {
        ReviewError::DeleteFailure(self.to_string())
    }
}

// =============================================================================
// PermissionStatus
// =============================================================================

/// Answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

// =============================================================================
// PageRequest
// =============================================================================

/// Parameters of a page request: up to `first` assets of `kind`,
/// starting right after `after` (or at the beginning when `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub kind: MediaKind,
    pub first: usize,
    pub after: Option<AssetId>,
}

impl PageRequest {
    /// A page starting at the beginning of the enumeration.
    #[must_use]
    pub fn from_start(kind: MediaKind, first: usize) -> Self {
        Self {
            kind,
            first,
            after: None,
        }
    }

    /// A page starting right after `cursor`.
    #[must_use]
    pub fn after(kind: MediaKind, first: usize, cursor: AssetId) -> Self {
        Self {
            kind,
            first,
            after: Some(cursor),
        }
    }
}

// =============================================================================
// MediaStore Trait
// =============================================================================

/// Port for a paginated, deletable media library.
///
/// Calls are blocking; callers run them off the UI thread (see
/// `application::runtime`). Implementations must be `Send + Sync` so a single
/// store can be shared as `Arc<dyn MediaStore>`.
///
/// No transactional guarantee is expected between calls: the library may
/// change between a `count` and the following `page` requests.
///
/// # Example
///
/// ```
/// use iced_swipe::application::port::{MediaStore, PageRequest};
/// use iced_swipe::domain::asset::MediaKind;
/// use iced_swipe::infrastructure::memory_store::MemoryStore;
///
/// let store = MemoryStore::with_photos(5);
/// assert_eq!(store.count(MediaKind::Photo).unwrap(), 5);
///
/// let first = store.page(&PageRequest::from_start(MediaKind::Photo, 2)).unwrap();
/// let cursor = first.last().unwrap().id().clone();
/// let next = store.page(&PageRequest::after(MediaKind::Photo, 2, cursor)).unwrap();
/// assert_eq!(next.assets[0].id().as_str(), "photo-0002");
/// ```
pub trait MediaStore: Send + Sync {
    /// Asks for access to the library.
    fn request_permission(&self) -> PermissionStatus;

    /// Number of assets of `kind`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the library cannot be read.
    fn count(&self, kind: MediaKind) -> Result<usize, StoreError>;

    /// Returns up to `request.first` assets following `request.after`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CursorNotFound`] if the cursor is gone, or
    /// another [`StoreError`] if the library cannot be read.
    fn page(&self, request: &PageRequest) -> Result<AssetPage, StoreError>;

    /// Removes the given assets from the library.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if any asset could not be removed.
    fn delete(&self, ids: &[AssetId]) -> Result<(), StoreError>;
}
