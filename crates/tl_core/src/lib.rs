//! # tl_core - Timeline Checkpoint Extraction Engine
//!
//! Converts a raw match timeline into a compact set of early-game
//! performance indicators for one player: fixed-mark stat checkpoints,
//! first-occurrence milestone timings, windowed vision counts, and a
//! windowed turret-plate count.
//!
//! The engine is a pure, synchronous computation over an already-fetched
//! timeline: no I/O, no ambient configuration, no shared state. Fetching
//! the timeline, HTTP routing and authentication are external
//! collaborators.
//!
//! ## Pipeline
//! raw timeline → [`normalizer::normalize`] → four independent extractors
//! ([`analysis`]) → [`api::assemble`] → response record.

pub mod analysis;
pub mod api;
pub mod error;
pub mod items;
pub mod models;
pub mod normalizer;

pub use api::{extract_timeline_lite, TimelineLiteRequest, TimelineLiteResponse};
pub use error::{Result, TimelineError};
pub use items::{ItemCatalog, SetItemCatalog};
pub use models::{NormalizedTimeline, RawTimeline};
pub use normalizer::normalize;
