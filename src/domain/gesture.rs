// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture value objects.
//!
//! [`GestureState`] is the read-only visual state handed to the renderer,
//! [`SwipeOutcome`] the classification of a release, and [`SwipeConfig`] the
//! tunable constants that map drag distance to both.

// =============================================================================
// Gesture Defaults
// =============================================================================

/// Default gesture constants, in logical pixels.
pub mod gesture_defaults {
    /// Horizontal distance past which a release commits.
    pub const SWIPE_THRESHOLD: f32 = 100.0;
    /// `rotation = translate_x / ROTATION_DIVISOR` (radians).
    pub const ROTATION_DIVISOR: f32 = 1000.0;
    /// Horizontal distance at which the keep/delete label is fully opaque.
    pub const FEEDBACK_DIVISOR: f32 = 400.0;
    /// Drag distance at which the photo has faded out completely.
    pub const MAX_FADE_DISTANCE: f32 = 300.0;
}

// =============================================================================
// SwipeOutcome
// =============================================================================

/// Classification of a completed release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Swipe right or green button.
    Keep,
    /// Swipe left or red button.
    Delete,
    /// Released inside the threshold; nothing happens.
    Cancel,
}

impl SwipeOutcome {
    /// Classifies a horizontal offset against a threshold.
    ///
    /// The threshold itself does not commit: `|translate_x| <= threshold` cancels.
    #[must_use]
    pub fn classify(translate_x: f32, threshold: f32) -> Self {
        if translate_x > threshold {
            Self::Keep
        } else if translate_x < -threshold {
            Self::Delete
        } else {
            Self::Cancel
        }
    }

    /// Returns `true` for `Keep` and `Delete`.
    #[must_use]
    pub fn is_commit(self) -> bool {
        !matches!(self, Self::Cancel)
    }
}

// =============================================================================
// SwipeConfig
// =============================================================================

/// Tunable mapping from drag distance to outcome and feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub threshold: f32,
    pub rotation_divisor: f32,
    pub feedback_divisor: f32,
    pub max_fade_distance: f32,
    /// Fade the photo out as it is dragged away from its origin.
    pub fade_on_drag: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: gesture_defaults::SWIPE_THRESHOLD,
            rotation_divisor: gesture_defaults::ROTATION_DIVISOR,
            feedback_divisor: gesture_defaults::FEEDBACK_DIVISOR,
            max_fade_distance: gesture_defaults::MAX_FADE_DISTANCE,
            fade_on_drag: true,
        }
    }
}

impl SwipeConfig {
    /// Rotation (radians) for a horizontal offset.
    #[must_use]
    pub fn rotation_for(&self, translate_x: f32) -> f32 {
        translate_x / self.rotation_divisor
    }

    /// Opacity of the "keep" label. Zero whenever `translate_x <= 0`.
    #[must_use]
    pub fn keep_opacity_for(&self, translate_x: f32) -> f32 {
        (translate_x.max(0.0) / self.feedback_divisor).min(1.0)
    }

    /// Opacity of the "delete" label. Zero whenever `translate_x >= 0`.
    #[must_use]
    pub fn nope_opacity_for(&self, translate_x: f32) -> f32 {
        ((-translate_x).max(0.0) / self.feedback_divisor).min(1.0)
    }

    /// Photo opacity for a drag delta, or fully opaque when fading is off.
    #[must_use]
    pub fn image_opacity_for(&self, dx: f32, dy: f32) -> f32 {
        if !self.fade_on_drag {
            return 1.0;
        }
        (1.0 - dx.hypot(dy) / self.max_fade_distance).max(0.0)
    }
}

// =============================================================================
// GestureState
// =============================================================================

/// Visual state of the photo card, derived from the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Tilt in radians.
    pub rotation: f32,
    pub keep_opacity: f32,
    pub nope_opacity: f32,
    pub image_opacity: f32,
}

impl GestureState {
    /// Rest position: centered, upright, no feedback, fully opaque.
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotation: 0.0,
        keep_opacity: 0.0,
        nope_opacity: 0.0,
        image_opacity: 1.0,
    };

    /// Returns `true` when the card sits exactly at rest.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        *self == Self::REST
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn classify_respects_threshold() {
        assert_eq!(SwipeOutcome::classify(150.0, 100.0), SwipeOutcome::Keep);
        assert_eq!(SwipeOutcome::classify(-150.0, 100.0), SwipeOutcome::Delete);
        assert_eq!(SwipeOutcome::classify(50.0, 100.0), SwipeOutcome::Cancel);
        assert_eq!(SwipeOutcome::classify(100.0, 100.0), SwipeOutcome::Cancel);
        assert_eq!(SwipeOutcome::classify(-100.0, 100.0), SwipeOutcome::Cancel);
    }

    #[test]
    fn is_commit_excludes_cancel() {
        assert!(SwipeOutcome::Keep.is_commit());
        assert!(SwipeOutcome::Delete.is_commit());
        assert!(!SwipeOutcome::Cancel.is_commit());
    }

    #[test]
    fn feedback_opacities_are_mutually_exclusive() {
        let config = SwipeConfig::default();
        for x in [-500.0, -200.0, -1.0, 0.0, 1.0, 200.0, 500.0] {
            let keep = config.keep_opacity_for(x);
            let nope = config.nope_opacity_for(x);
            assert!(keep == 0.0 || nope == 0.0, "both non-zero at {x}");
        }
    }

    #[test]
    fn feedback_opacity_reaches_one_at_divisor() {
        let config = SwipeConfig::default();
        assert_abs_diff_eq!(config.keep_opacity_for(200.0), 0.5);
        assert_abs_diff_eq!(config.keep_opacity_for(400.0), 1.0);
        assert_abs_diff_eq!(config.nope_opacity_for(-400.0), 1.0);
        assert_abs_diff_eq!(config.keep_opacity_for(800.0), 1.0);
        assert_abs_diff_eq!(config.nope_opacity_for(-800.0), 1.0);
    }

    #[test]
    fn image_fades_with_euclidean_distance() {
        let config = SwipeConfig::default();
        assert_abs_diff_eq!(config.image_opacity_for(0.0, 0.0), 1.0);
        // 3-4-5 triangle scaled to 150 px.
        assert_abs_diff_eq!(config.image_opacity_for(90.0, 120.0), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(config.image_opacity_for(-400.0, 0.0), 0.0);
    }

    #[test]
    fn image_fade_can_be_disabled() {
        let config = SwipeConfig {
            fade_on_drag: false,
            ..SwipeConfig::default()
        };
        assert_abs_diff_eq!(config.image_opacity_for(250.0, 250.0), 1.0);
    }

    #[test]
    fn rotation_is_subtle() {
        let config = SwipeConfig::default();
        assert_abs_diff_eq!(config.rotation_for(150.0), 0.15);
    }

    #[test]
    fn rest_state() {
        assert!(GestureState::default().is_at_rest());
        let moved = GestureState {
            translate_x: 1.0,
            ..GestureState::REST
        };
        assert!(!moved.is_at_rest());
    }
}
