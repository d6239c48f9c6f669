//! # Vision Window Aggregator
//!
//! Counts ward placements and ward kills attributed to the target within
//! the fixed early-game window. The cutoff is exclusive: an event exactly
//! at the cutoff minute is outside the window.

use crate::models::timeline::{Event, EventKind, ParticipantId};

use super::checkpoints::MS_PER_MIN;

/// Fixed protocol cutoff for the vision window.
pub const VISION_CUTOFF_MIN: u32 = 15;

/// Vision-event counts scoped to one cutoff. `control_wards` is the
/// control-ward subset of `wards_placed`, so it never exceeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisionCounts {
    pub wards_placed: u32,
    pub wards_killed: u32,
    pub control_wards: u32,
}

/// Tallies vision events for `target` with `timestamp < cutoff_min * 60000`.
pub fn aggregate_vision(
    events: &[Event],
    target: ParticipantId,
    cutoff_min: u32,
) -> VisionCounts {
    let cutoff_ms = u64::from(cutoff_min) * MS_PER_MIN;
    let mut counts = VisionCounts::default();

    for event in events.iter().take_while(|e| e.timestamp_ms < cutoff_ms) {
        match &event.kind {
            EventKind::WardPlaced { creator, ward_type } if *creator == target => {
                counts.wards_placed += 1;
                if ward_type.is_control() {
                    counts.control_wards += 1;
                }
            }
            EventKind::WardKilled { killer, .. } if *killer == target => {
                counts.wards_killed += 1;
            }
            _ => {}
        }
    }

    counts
}
