// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media_store`]: Paginated media library with deletion
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no filesystem types)
//! - Traits are `Send + Sync` so adapters can be shared across tasks
//! - No `async fn`: blocking calls are moved onto tokio's blocking pool by
//!   `application::runtime`

pub mod media_store;

pub use media_store::{MediaStore, PageRequest, PermissionStatus, StoreError};
