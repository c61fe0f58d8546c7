// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`sampler`]: Uniform random draw over a paginated library
//! - [`swipe`]: Gesture state machine producing keep/delete outcomes
//! - [`session`]: Coordinates outcomes with store work through tickets
//! - [`runtime`]: Runs store work on tokio's blocking pool
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_swipe::application::sampler::{AssetSampler, SamplerConfig};
//! use iced_swipe::infrastructure::memory_store::MemoryStore;
//! use rand::SeedableRng;
//!
//! let store = MemoryStore::with_photos(250);
//! let sampler = AssetSampler::new(SamplerConfig::default());
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let sampled = sampler.sample(&store, &mut rng).unwrap();
//! assert!(sampled.index < 250);
//! ```

pub mod port;
pub mod runtime;
pub mod sampler;
pub mod session;
pub mod swipe;
