// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`directory_store`]: A folder of photos on disk (implements [`MediaStore`])
//! - [`memory_store`]: An in-process list for tests and benchmarks (implements [`MediaStore`])
//!
//! [`MediaStore`]: crate::application::port::MediaStore

pub mod directory_store;
pub mod memory_store;

pub use directory_store::DirectoryStore;
pub use memory_store::MemoryStore;
