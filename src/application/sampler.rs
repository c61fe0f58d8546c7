// SPDX-License-Identifier: MPL-2.0
//! Random asset sampling over a paginated media store.
//!
//! Loading a whole library just to pick one photo is wasteful, so the
//! [`AssetSampler`] draws in two stages:
//!
//! 1. Count the library and draw a random window start in `[0, total - batch]`.
//! 2. Fetch `start + 1` assets from the beginning; the last one is the cursor.
//! 3. Fetch `batch` assets after the cursor.
//! 4. Pick uniformly inside the window made of the cursor followed by that
//!    page, truncated to `batch` entries.
//!
//! The window therefore covers positions `[start, start + batch - 1]`, and the
//! reported index is `start + picked`.

use crate::application::port::{MediaStore, PageRequest};
use crate::domain::asset::{AssetRef, MediaKind, SampledAsset};
use crate::domain::error::ReviewError;
use rand::Rng;
use std::ops::RangeInclusive;

/// Default number of assets fetched around the random start.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Smallest accepted batch size.
pub const MIN_BATCH_SIZE: usize = 1;

/// Largest accepted batch size.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub batch_size: usize,
    pub kind: MediaKind,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            kind: MediaKind::Photo,
        }
    }
}

impl SamplerConfig {
    /// Creates a config, clamping the batch size into the supported range.
    #[must_use]
    pub fn new(batch_size: usize, kind: MediaKind) -> Self {
        Self {
            batch_size: batch_size.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE),
            kind,
        }
    }
}

// =============================================================================
// SampleWindow
// =============================================================================

/// The stretch of the library a single draw picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    /// Position of the cursor asset, first entry of the window.
    pub start: usize,
    /// Window length, `min(batch_size, total)`.
    pub batch_size: usize,
    /// Library size when the window was planned.
    pub total: usize,
}

impl SampleWindow {
    /// Builds a window at an explicit start.
    ///
    /// `batch_size` is capped at `total` and `start` at `total - batch_size`.
    #[must_use]
    pub fn new(total: usize, batch_size: usize, start: usize) -> Self {
        let batch_size = batch_size.max(1).min(total);
        let max_start = total.saturating_sub(batch_size);
        Self {
            start: start.min(max_start),
            batch_size,
            total,
        }
    }

    /// Draws a window start uniformly over `[0, total - batch]`.
    ///
    /// Returns `None` for an empty library.
    pub fn plan<R: Rng + ?Sized>(total: usize, batch_limit: usize, rng: &mut R) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let batch_size = batch_limit.max(1).min(total);
        let max_start = total - batch_size;
        let start = if max_start > 0 {
            rng.gen_range(0..=max_start)
        } else {
            0
        };
        Some(Self {
            start,
            batch_size,
            total,
        })
    }

    /// Request that ends on the cursor asset.
    #[must_use]
    pub fn cursor_request(&self, kind: MediaKind) -> PageRequest {
        PageRequest::from_start(kind, self.start + 1)
    }

    /// Positions this window can yield.
    #[must_use]
    pub fn positions(&self) -> RangeInclusive<usize> {
        self.start..=(self.start + self.batch_size - 1)
    }
}

// =============================================================================
// AssetSampler
// =============================================================================

/// Picks a random asset from a [`MediaStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetSampler {
    config: SamplerConfig,
}

impl AssetSampler {
    #[must_use]
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> SamplerConfig {
        self.config
    }

    /// Draws a random asset, or `None` if the library is empty, unreadable,
    /// or changed under the draw. Failures are logged.
    pub fn sample<S, R>(&self, store: &S, rng: &mut R) -> Option<SampledAsset>
    where
        S: MediaStore + ?Sized,
        R: Rng + ?Sized,
    {
        match self.try_sample(store, rng) {
            Ok(sampled) => Some(sampled),
            Err(err) => {
                tracing::warn!(error = %err, "sampling yielded no asset");
                None
            }
        }
    }

    /// Draws a random asset and reports why it could not.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::PermissionDenied`] if the store refuses access
    /// - [`ReviewError::EmptyLibrary`] if there is nothing to pick
    /// - [`ReviewError::TransientFetchFailure`] if a page request fails or
    ///   comes back empty
    pub fn try_sample<S, R>(&self, store: &S, rng: &mut R) -> Result<SampledAsset, ReviewError>
    where
        S: MediaStore + ?Sized,
        R: Rng + ?Sized,
    {
        if !store.request_permission().is_granted() {
            return Err(ReviewError::PermissionDenied);
        }

        let total = store
            .count(self.config.kind)
            .map_err(|e| e.into_fetch_error())?;
        let window = SampleWindow::plan(total, self.config.batch_size, rng)
            .ok_or(ReviewError::EmptyLibrary)?;

        self.sample_window(store, window, rng)
    }

    /// Runs the two page requests for a planned window and picks inside it.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::TransientFetchFailure`] (or
    /// [`ReviewError::PermissionDenied`]) when a page request fails, or when
    /// the store shrank so much that the window is empty.
    pub fn sample_window<S, R>(
        &self,
        store: &S,
        window: SampleWindow,
        rng: &mut R,
    ) -> Result<SampledAsset, ReviewError>
    where
        S: MediaStore + ?Sized,
        R: Rng + ?Sized,
    {
        let kind = self.config.kind;
        let head = store
            .page(&window.cursor_request(kind))
            .map_err(|e| e.into_fetch_error())?;
        let Some(cursor) = head.last().cloned() else {
            return Err(ReviewError::TransientFetchFailure(
                "cursor page came back empty".to_string(),
            ));
        };
        // The library may have shrunk since the count; the cursor is wherever
        // the head page actually ended.
        let start = head.len() - 1;

        let tail = store
            .page(&PageRequest::after(kind, window.batch_size, cursor.id().clone()))
            .map_err(|e| e.into_fetch_error())?;
        if tail.is_empty() && start + 1 < tail.total_count {
            return Err(ReviewError::TransientFetchFailure(
                "page after cursor came back empty".to_string(),
            ));
        }

        let total = tail.total_count;
        let candidates: Vec<AssetRef> = std::iter::once(cursor)
            .chain(tail.assets)
            .take(window.batch_size)
            .collect();
        let picked = rng.gen_range(0..candidates.len());
        let index = start + picked;

        tracing::debug!(
            total = window.total,
            start,
            window = candidates.len(),
            index,
            "sampled asset"
        );

        let asset = candidates
            .into_iter()
            .nth(picked)
            .ok_or_else(|| ReviewError::TransientFetchFailure("pick out of range".to_string()))?;
        Ok(SampledAsset {
            asset,
            index,
            total: total.max(index + 1),
        })
    }
}
