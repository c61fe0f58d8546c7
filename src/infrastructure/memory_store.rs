// SPDX-License-Identifier: MPL-2.0
//! In-process media store.
//!
//! [`MemoryStore`] keeps an ordered list of assets in memory. It backs the
//! sampler benchmarks and, with [`MemoryStore::recording`], the tests that
//! need to check which requests the core issues and in which order.

use crate::application::port::{MediaStore, PageRequest, PermissionStatus, StoreError};
use crate::domain::asset::{AssetId, AssetPage, AssetRef, MediaKind};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A call received by a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    RequestPermission,
    Count(MediaKind),
    Page(PageRequest),
    Delete(Vec<AssetId>),
}

#[derive(Debug, Clone)]
struct Entry {
    asset: AssetRef,
    kind: MediaKind,
}

impl Entry {
    fn matches(&self, kind: MediaKind) -> bool {
        kind == MediaKind::All || self.kind == kind
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<Entry>,
    calls: Vec<StoreCall>,
    record_calls: bool,
    permission_denied: bool,
    fail_deletes: bool,
}

/// Thread-safe in-memory [`MediaStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `count` photos named `photo-0000`, `photo-0001`, …
    #[must_use]
    pub fn with_photos(count: usize) -> Self {
        let store = Self::new();
        for i in 0..count {
            let id = format!("photo-{i:04}");
            let uri = format!("mem://{id}");
            store.push(AssetRef::new(id, uri), MediaKind::Photo);
        }
        store
    }

    /// Turns on the call log read by [`MemoryStore::calls`].
    ///
    /// Off by default so long-running loops do not grow the log.
    #[must_use]
    pub fn recording(self) -> Self {
        self.lock().record_calls = true;
        self
    }

    /// Appends an asset at the end of the enumeration.
    pub fn push(&self, asset: AssetRef, kind: MediaKind) {
        self.lock().entries.push(Entry { asset, kind });
    }

    /// Removes an asset without recording a call, as if another app deleted it.
    pub fn remove(&self, id: &AssetId) -> bool {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|entry| entry.asset.id() != id);
        inner.entries.len() != before
    }

    /// Makes every call after this one fail as if access had been revoked.
    pub fn deny_permission(&self, denied: bool) {
        self.lock().permission_denied = denied;
    }

    /// Makes deletes fail with an I/O error.
    pub fn fail_deletes(&self, fail: bool) {
        self.lock().fail_deletes = fail;
    }

    /// Returns the position of `id` in enumeration order.
    #[must_use]
    pub fn position_of(&self, id: &AssetId) -> Option<usize> {
        self.lock()
            .entries
            .iter()
            .position(|entry| entry.asset.id() == id)
    }

    /// Number of assets regardless of kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All calls received since recording was turned on.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Forgets the recorded calls.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave `Inner` half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn record(&mut self, call: impl FnOnce() -> StoreCall) {
        if self.record_calls {
            self.calls.push(call());
        }
    }
}

impl MediaStore for MemoryStore {
    fn request_permission(&self) -> PermissionStatus {
        let mut inner = self.lock();
        inner.record(|| StoreCall::RequestPermission);
        if inner.permission_denied {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        }
    }

    fn count(&self, kind: MediaKind) -> Result<usize, StoreError> {
        let mut inner = self.lock();
        inner.record(|| StoreCall::Count(kind));
        if inner.permission_denied {
            return Err(StoreError::PermissionDenied);
        }
        Ok(inner.entries.iter().filter(|e| e.matches(kind)).count())
    }

    fn page(&self, request: &PageRequest) -> Result<AssetPage, StoreError> {
        let mut inner = self.lock();
        inner.record(|| StoreCall::Page(request.clone()));
        if inner.permission_denied {
            return Err(StoreError::PermissionDenied);
        }

        let matching: Vec<&AssetRef> = inner
            .entries
            .iter()
            .filter(|e| e.matches(request.kind))
            .map(|e| &e.asset)
            .collect();

        let start = match &request.after {
            None => 0,
            Some(cursor) => {
                matching
                    .iter()
                    .position(|asset| asset.id() == cursor)
                    .ok_or_else(|| StoreError::CursorNotFound(cursor.clone()))?
                    + 1
            }
        };

        Ok(AssetPage {
            assets: matching
                .iter()
                .skip(start)
                .take(request.first)
                .map(|asset| (*asset).clone())
                .collect(),
            total_count: matching.len(),
        })
    }

    fn delete(&self, ids: &[AssetId]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.record(|| StoreCall::Delete(ids.to_vec()));
        if inner.permission_denied {
            return Err(StoreError::PermissionDenied);
        }
        if inner.fail_deletes {
            return Err(StoreError::Io("delete rejected".to_string()));
        }
        if let Some(missing) = ids
            .iter()
            .find(|id| !inner.entries.iter().any(|e| e.asset.id() == *id))
        {
            return Err(StoreError::NotFound(missing.clone()));
        }
        inner.entries.retain(|e| !ids.contains(e.asset.id()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_filters_by_kind() {
        let store = MemoryStore::with_photos(3);
        store.push(AssetRef::new("clip", "mem://clip"), MediaKind::Video);

        assert_eq!(store.count(MediaKind::Photo), Ok(3));
        assert_eq!(store.count(MediaKind::Video), Ok(1));
        assert_eq!(store.count(MediaKind::All), Ok(4));
    }

    #[test]
    fn page_after_cursor() {
        let store = MemoryStore::with_photos(10);
        let page = store
            .page(&PageRequest::after(MediaKind::Photo, 3, AssetId::new("photo-0004")))
            .expect("page");
        let ids: Vec<&str> = page.assets.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, vec!["photo-0005", "photo-0006", "photo-0007"]);
        assert_eq!(page.total_count, 10);
    }

    #[test]
    fn page_past_end_is_short() {
        let store = MemoryStore::with_photos(3);
        let page = store
            .page(&PageRequest::after(MediaKind::Photo, 100, AssetId::new("photo-0001")))
            .expect("page");
        assert_eq!(page.len(), 1);

        let page = store
            .page(&PageRequest::after(MediaKind::Photo, 100, AssetId::new("photo-0002")))
            .expect("page");
        assert!(page.is_empty());
    }

    #[test]
    fn unknown_cursor_is_an_error() {
        let store = MemoryStore::with_photos(3);
        let result = store.page(&PageRequest::after(MediaKind::Photo, 1, AssetId::new("gone")));
        assert_eq!(result, Err(StoreError::CursorNotFound(AssetId::new("gone"))));
    }

    #[test]
    fn delete_removes_and_records() {
        let store = MemoryStore::with_photos(3).recording();
        let id = AssetId::new("photo-0001");
        store.delete(std::slice::from_ref(&id)).expect("delete");

        assert_eq!(store.len(), 2);
        assert!(store.position_of(&id).is_none());
        assert_eq!(store.calls(), vec![StoreCall::Delete(vec![id])]);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let store = MemoryStore::with_photos(1);
        let result = store.delete(&[AssetId::new("nope")]);
        assert_eq!(result, Err(StoreError::NotFound(AssetId::new("nope"))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn denied_permission_blocks_reads() {
        let store = MemoryStore::with_photos(2);
        store.deny_permission(true);
        assert_eq!(store.request_permission(), PermissionStatus::Denied);
        assert_eq!(store.count(MediaKind::Photo), Err(StoreError::PermissionDenied));
    }

    #[test]
    fn injected_delete_failure() {
        let store = MemoryStore::with_photos(2);
        store.fail_deletes(true);
        assert!(matches!(
            store.delete(&[AssetId::new("photo-0000")]),
            Err(StoreError::Io(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn calls_are_not_logged_unless_recording() {
        let store = MemoryStore::with_photos(20);
        for _ in 0..1_000 {
            let _ = store.request_permission();
            let _ = store.count(MediaKind::Photo);
            let _ = store.page(&PageRequest::from_start(MediaKind::Photo, 5));
        }
        assert!(store.calls().is_empty());

        let store = MemoryStore::with_photos(20).recording();
        let _ = store.count(MediaKind::Photo);
        assert_eq!(store.calls(), vec![StoreCall::Count(MediaKind::Photo)]);
    }
}
