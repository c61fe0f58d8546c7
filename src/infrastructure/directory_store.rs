// SPDX-License-Identifier: MPL-2.0
//! Folder-backed media store.
//!
//! [`DirectoryStore`] scans a directory for supported media files, sorts them
//! according to the configured [`SortOrder`], and serves them as pages. The
//! folder is re-scanned on every call, so files added or removed by other
//! programs are picked up on the next request.

use crate::application::port::{MediaStore, PageRequest, PermissionStatus, StoreError};
use crate::config::SortOrder;
use crate::domain::asset::{AssetId, AssetPage, AssetRef, MediaKind};
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif", "ico",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "webm", "avi"];
}

/// Returns the media kind of `path` from its extension, if supported.
#[must_use]
pub fn detect_kind(path: &Path) -> Option<MediaKind> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Photo)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

fn kind_matches(file_kind: MediaKind, wanted: MediaKind) -> bool {
    wanted == MediaKind::All || file_kind == wanted
}

/// A [`MediaStore`] over the files of one folder.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    sort_order: SortOrder,
    recursive: bool,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>, sort_order: SortOrder) -> Self {
        Self {
            root: root.into(),
            sort_order,
            recursive: false,
        }
    }

    /// Also scans sub-folders.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans the folder and returns matching files in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the root cannot be read.
    pub fn scan(&self, kind: MediaKind) -> Result<Vec<PathBuf>, StoreError> {
        let mut media_files = Vec::new();
        self.collect(&self.root, kind, &mut media_files, true)?;
        sort_media_files(&mut media_files, self.sort_order);
        Ok(media_files)
    }

    fn collect(
        &self,
        dir: &Path,
        kind: MediaKind,
        out: &mut Vec<PathBuf>,
        is_root: bool,
    ) -> Result<(), StoreError> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if is_root => return Err(err.into()),
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable folder");
                return Ok(());
            }
        };

        for entry in entries {
            let Some(entry) = readable(dir, entry) else {
                continue;
            };
            let path = entry.path();
            let Some(file_type) = readable(&path, entry.file_type()) else {
                continue;
            };

            if file_type.is_dir() {
                if self.recursive {
                    self.collect(&path, kind, out, false)?;
                }
            } else if path.is_file()
                && detect_kind(&path).is_some_and(|file_kind| kind_matches(file_kind, kind))
            {
                out.push(path);
            }
        }
        Ok(())
    }

    /// Asset id of `path`: its path relative to the root, with `/` separators.
    fn id_for(&self, path: &Path) -> AssetId {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        AssetId::new(parts.join("/"))
    }

    fn asset_for(&self, path: &Path) -> AssetRef {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        AssetRef::new(
            self.id_for(path).as_str(),
            format!("file://{}", absolute.display()),
        )
    }

    /// Resolves an id to a path inside the root, rejecting anything that
    /// would escape it.
    fn resolve(&self, id: &AssetId) -> Result<PathBuf, StoreError> {
        let relative = Path::new(id.as_str());
        let stays_inside = !id.as_str().is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !stays_inside {
            tracing::warn!(%id, "rejecting asset id outside the library");
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(self.root.join(relative))
    }
}

impl MediaStore for DirectoryStore {
    fn request_permission(&self) -> PermissionStatus {
        match std::fs::read_dir(&self.root) {
            Ok(_) => PermissionStatus::Granted,
            Err(err) => {
                tracing::warn!(root = %self.root.display(), error = %err, "library not readable");
                PermissionStatus::Denied
            }
        }
    }

    fn count(&self, kind: MediaKind) -> Result<usize, StoreError> {
        Ok(self.scan(kind)?.len())
    }

    fn page(&self, request: &PageRequest) -> Result<AssetPage, StoreError> {
        let media_files = self.scan(request.kind)?;

        let start = match &request.after {
            None => 0,
            Some(cursor) => {
                media_files
                    .iter()
                    .position(|path| self.id_for(path) == *cursor)
                    .ok_or_else(|| StoreError::CursorNotFound(cursor.clone()))?
                    + 1
            }
        };

        Ok(AssetPage {
            assets: media_files
                .iter()
                .skip(start)
                .take(request.first)
                .map(|path| self.asset_for(path))
                .collect(),
            total_count: media_files.len(),
        })
    }

    fn delete(&self, ids: &[AssetId]) -> Result<(), StoreError> {
        for id in ids {
            let path = self.resolve(id)?;
            if !path.is_file() {
                return Err(StoreError::NotFound(id.clone()));
            }
            std::fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "removed file");
        }
        Ok(())
    }
}

/// One bad entry is logged and skipped instead of failing the whole scan.
fn readable<T>(path: &Path, result: std::io::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable entry");
            None
        }
    }
}

/// Sorts media file paths according to the specified sort order. Ties (and
/// files whose timestamps cannot be read) are broken by path.
fn sort_media_files(media_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            media_files.sort_by_cached_key(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                (name, path.clone())
            });
        }
        SortOrder::ModifiedDate => {
            media_files.sort_by_cached_key(|path| {
                let time = path
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (time, path.clone())
            });
        }
        SortOrder::CreatedDate => {
            media_files.sort_by_cached_key(|path| {
                let time = path
                    .metadata()
                    .and_then(|m| m.created().or_else(|_| m.modified()))
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (time, path.clone())
            });
        }
    }
}
