// SPDX-License-Identifier: MPL-2.0
//! Media library asset types.
//!
//! These types represent pure data handed out by a media store. The store
//! owns the underlying media; the rest of the application only holds
//! references to it.

use std::fmt;

// =============================================================================
// AssetId
// =============================================================================

/// Opaque identifier of an asset inside its store.
///
/// Also used as the pagination cursor: a page requested "after" an id starts
/// with the asset that follows it in the store's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// AssetRef
// =============================================================================

/// Handle to a single media item: its store id and an addressable URI.
///
/// Immutable once obtained. A new sample supersedes the previous reference
/// instead of mutating it.
///
/// # Example
///
/// ```
/// use iced_swipe::domain::asset::AssetRef;
///
/// let asset = AssetRef::new("holiday/beach.jpg", "file:///photos/holiday/beach.jpg");
/// assert_eq!(asset.id().as_str(), "holiday/beach.jpg");
/// assert_eq!(asset.file_path().unwrap().to_str(), Some("/photos/holiday/beach.jpg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    id: AssetId,
    uri: String,
}

impl AssetRef {
    /// Creates a new asset reference.
    #[must_use]
    pub fn new(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: AssetId::new(id),
            uri: uri.into(),
        }
    }

    /// Returns the store identifier.
    #[must_use]
    pub fn id(&self) -> &AssetId {
        &self.id
    }

    /// Returns the URI of the media item.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the local file path when the URI uses the `file://` scheme.
    #[must_use]
    pub fn file_path(&self) -> Option<std::path::PathBuf> {
        self.uri
            .strip_prefix("file://")
            .map(std::path::PathBuf::from)
    }

    /// Returns the last path segment of the id, for display.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.id
            .as_str()
            .rsplit('/')
            .next()
            .unwrap_or(self.id.as_str())
    }
}

// =============================================================================
// AssetPage
// =============================================================================

/// A window into a store's enumeration.
///
/// `assets` follow the store-defined order; `total_count` is the number of
/// matching assets in the whole store at the time the page was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetPage {
    pub assets: Vec<AssetRef>,
    pub total_count: usize,
}

impl AssetPage {
    /// Returns the last asset of the page, used as the cursor for the next request.
    #[must_use]
    pub fn last(&self) -> Option<&AssetRef> {
        self.assets.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }
}

// =============================================================================
// MediaKind
// =============================================================================

/// Which kind of media a store query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    /// Still photos only.
    #[default]
    Photo,
    /// Videos only.
    Video,
    /// Photos and videos.
    All,
}

// =============================================================================
// SampledAsset
// =============================================================================

/// Result of a random draw: the asset plus the logical position it was drawn from.
///
/// `index` is only meaningful for display; it goes stale as soon as the
/// library changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledAsset {
    pub asset: AssetRef,
    pub index: usize,
    pub total: usize,
}

impl SampledAsset {
    /// One-based "n / total" label.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_only_for_file_scheme() {
        let local = AssetRef::new("a.jpg", "file:///tmp/a.jpg");
        assert_eq!(
            local.file_path(),
            Some(std::path::PathBuf::from("/tmp/a.jpg"))
        );

        let remote = AssetRef::new("a.jpg", "ph://ABCD-1234");
        assert!(remote.file_path().is_none());
    }

    #[test]
    fn display_name_uses_last_segment() {
        let nested = AssetRef::new("2023/summer/a.jpg", "file:///x/2023/summer/a.jpg");
        assert_eq!(nested.display_name(), "a.jpg");

        let flat = AssetRef::new("b.png", "file:///x/b.png");
        assert_eq!(flat.display_name(), "b.png");
    }

    #[test]
    fn page_last_is_cursor() {
        let page = AssetPage {
            assets: vec![AssetRef::new("a", "mem://a"), AssetRef::new("b", "mem://b")],
            total_count: 10,
        };
        assert_eq!(page.last().map(|a| a.id().as_str()), Some("b"));
        assert_eq!(page.len(), 2);
        assert!(AssetPage::default().is_empty());
    }

    #[test]
    fn position_label_is_one_based() {
        let sampled = SampledAsset {
            asset: AssetRef::new("a", "mem://a"),
            index: 0,
            total: 12,
        };
        assert_eq!(sampled.position_label(), "1 / 12");
    }

    #[test]
    fn media_kind_serializes_kebab_case() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            kind: MediaKind,
        }
        let text = toml::to_string(&Wrapper {
            kind: MediaKind::Photo,
        })
        .expect("serialize");
        assert!(text.contains("kind = \"photo\""));

        let parsed: Wrapper = toml::from_str("kind = \"all\"").expect("deserialize");
        assert_eq!(parsed.kind, MediaKind::All);
    }
}
