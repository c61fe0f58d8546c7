// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Review**: Sampling batch size and deletion behavior
//! - **Gesture**: Swipe threshold and visual feedback scaling

pub use crate::application::sampler::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, MIN_BATCH_SIZE};

// ==========================================================================
// Review Defaults
// ==========================================================================

/// Deletes go to the store unless disabled.
pub const DEFAULT_REAL_DELETE: bool = true;

/// The "n / total" label is hidden by default.
pub const DEFAULT_SHOW_INDEX_LABEL: bool = false;

/// The photo fades while dragged.
pub const DEFAULT_FADE_ON_DRAG: bool = true;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

pub use crate::domain::gesture::gesture_defaults::{
    FEEDBACK_DIVISOR as DEFAULT_FEEDBACK_DIVISOR,
    MAX_FADE_DISTANCE as DEFAULT_MAX_FADE_DISTANCE,
    ROTATION_DIVISOR as DEFAULT_ROTATION_DIVISOR, SWIPE_THRESHOLD as DEFAULT_SWIPE_THRESHOLD,
};

/// Minimum swipe threshold in pixels.
pub const MIN_SWIPE_THRESHOLD: f32 = 20.0;

/// Maximum swipe threshold in pixels.
pub const MAX_SWIPE_THRESHOLD: f32 = 600.0;

/// Smallest divisor accepted for rotation, feedback and fade scaling.
pub const MIN_DIVISOR: f32 = 1.0;
