//! # Plate Window Aggregator
//!
//! Counts turret-plate destructions credited to the target participant
//! within the fixed early-game window. Credit policy is individual: only
//! events whose provider-reported killer is the target count; plates the
//! provider credits to the team with no killer id do not. The cutoff is
//! exclusive, mirroring the vision window.

use crate::models::timeline::{Event, EventKind, ParticipantId};

use super::checkpoints::MS_PER_MIN;

/// Fixed protocol cutoff for the plate window.
pub const PLATE_CUTOFF_MIN: u32 = 14;

/// Counts plate events for `target` with `timestamp < cutoff_min * 60000`.
pub fn aggregate_plates(events: &[Event], target: ParticipantId, cutoff_min: u32) -> u32 {
    let cutoff_ms = u64::from(cutoff_min) * MS_PER_MIN;
    events
        .iter()
        .take_while(|e| e.timestamp_ms < cutoff_ms)
        .filter(|e| {
            matches!(
                e.kind,
                EventKind::TurretPlateDestroyed { killer, .. } if killer == Some(target)
            )
        })
        .count() as u32
}
