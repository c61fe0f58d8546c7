// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core review types with no framework dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here knows about Iced, the filesystem, or the async runtime.
//!
//! # Modules
//!
//! - [`asset`]: Media library handles ([`AssetRef`](asset::AssetRef),
//!   [`AssetPage`](asset::AssetPage), [`SampledAsset`](asset::SampledAsset))
//! - [`error`]: Review error taxonomy ([`ReviewError`](error::ReviewError))
//! - [`gesture`]: Swipe value objects ([`GestureState`](gesture::GestureState),
//!   [`SwipeOutcome`](gesture::SwipeOutcome), [`SwipeConfig`](gesture::SwipeConfig))
//! - [`spring`]: Damped spring used for the return animation

pub mod asset;
pub mod error;
pub mod gesture;
pub mod spring;

pub use asset::{AssetId, AssetPage, AssetRef, MediaKind, SampledAsset};
pub use error::ReviewError;
pub use gesture::{GestureState, SwipeConfig, SwipeOutcome};
