// SPDX-License-Identifier: MPL-2.0
//! Visual building blocks shared by the views.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`drag`] - Pointer and touch drag tracking
//! - [`styles`] - Centralized styling (buttons, containers)

pub mod design_tokens;
pub mod drag;
pub mod styles;
pub mod theming;
