// SPDX-License-Identifier: MPL-2.0
//! `iced_swipe` is a swipe-to-review photo sorter built with the Iced GUI framework.
//!
//! A random photo from a library is shown full-screen. Swiping right (or the
//! green button) keeps it, swiping left (or the red button) deletes it, and
//! the next random photo is drawn.
//!
//! # Layers
//!
//! - [`domain`] - Assets, gesture math, springs and review errors
//! - [`application`] - Sampling, the swipe controller and the review session
//! - [`infrastructure`] - [`MediaStore`](application::port::MediaStore) adapters
//! - [`app`], [`ui`] - The Iced front-end

#![doc(html_root_url = "https://docs.rs/iced_swipe/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
