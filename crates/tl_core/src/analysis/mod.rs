//! # Analysis Module
//!
//! The four extractors over a normalized timeline. They are independent of
//! one another and order-free; each is a pure function of the frames and
//! events plus the target participant id.
//!
//! ## Submodules
//!
//! - `checkpoints` - fixed-mark stat snapshots with KDA reconstruction
//! - `milestones` - first-occurrence timings (kill, death, full item, back)
//! - `vision` - windowed ward placement/kill counts
//! - `plates` - windowed turret-plate credit count

pub mod checkpoints;
pub mod milestones;
pub mod plates;
pub mod vision;

pub use checkpoints::{extract_checkpoints, CheckpointSnapshot, CHECKPOINT_MARKS_MIN, MS_PER_MIN};
pub use milestones::{detect_milestones, BackSignal, MilestoneSet, PurchaseAfterGrace};
pub use plates::{aggregate_plates, PLATE_CUTOFF_MIN};
pub use vision::{aggregate_vision, VisionCounts, VISION_CUTOFF_MIN};
