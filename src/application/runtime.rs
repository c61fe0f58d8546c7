// SPDX-License-Identifier: MPL-2.0
//! Async bridge between the session and a blocking [`MediaStore`].
//!
//! Store calls run on tokio's blocking pool so the UI thread never waits on
//! the filesystem.

use crate::application::port::MediaStore;
use crate::application::sampler::{AssetSampler, SamplerConfig};
use crate::domain::asset::{AssetId, SampledAsset};
use crate::domain::error::ReviewError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Shared handle to a store.
pub type SharedStore = Arc<dyn MediaStore>;

/// Draws a random asset off the UI thread.
///
/// An empty library is reported as `Ok(None)`.
///
/// # Errors
///
/// Returns the sampler's [`ReviewError`], or
/// [`ReviewError::TransientFetchFailure`] if the blocking task panicked.
pub async fn run_sample(
    store: SharedStore,
    config: SamplerConfig,
) -> Result<Option<SampledAsset>, ReviewError> {
    tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::from_entropy();
        match AssetSampler::new(config).try_sample(store.as_ref(), &mut rng) {
            Ok(sampled) => Ok(Some(sampled)),
            Err(ReviewError::EmptyLibrary) => Ok(None),
            Err(err) => Err(err),
        }
    })
    .await
    .map_err(|e| ReviewError::TransientFetchFailure(e.to_string()))?
}

/// Deletes one asset off the UI thread.
///
/// # Errors
///
/// Returns [`ReviewError::DeleteFailure`] if the store refused, or if the
/// blocking task panicked.
pub async fn run_delete(store: SharedStore, id: AssetId) -> Result<(), ReviewError> {
    tokio::task::spawn_blocking(move || {
        store
            .delete(std::slice::from_ref(&id))
            .map_err(|e| e.into_delete_error())
    })
    .await
    .map_err(|e| ReviewError::DeleteFailure(e.to_string()))?
}
