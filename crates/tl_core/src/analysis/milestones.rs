//! # Milestone Detector
//!
//! Single forward scan over the ordered event sequence, recording the first
//! occurrence of each milestone category for the target participant. Ties
//! at identical timestamps resolve by original event order; a category that
//! never occurs stays `None` (never `0` or `-1`).
//!
//! The "first back" category has no unambiguous provider signal, so it is a
//! pluggable predicate ([`BackSignal`]); the default treats the first item
//! purchase after a short grace period as the recall proxy.

use crate::items::ItemCatalog;
use crate::models::timeline::{Event, EventKind, ParticipantId};

use super::checkpoints::MS_PER_MIN;

/// Grace period excluding the starting-shop purchases at game start.
pub const BACK_GRACE_MS: u64 = 60_000;

/// First-occurrence minute marks for one participant. Absent means the
/// category never occurred before match end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MilestoneSet {
    pub first_back_min: Option<f64>,
    pub first_full_item_min: Option<f64>,
    pub first_kill_min: Option<f64>,
    pub first_death_min: Option<f64>,
}

/// Decides whether an event counts as the target returning to spawn. The
/// exact source rule is a policy choice, kept behind this seam so it can be
/// corrected without reshaping the detector.
pub trait BackSignal {
    fn is_back_signal(&self, event: &Event, target: ParticipantId) -> bool;
}

/// Default back policy: the first item purchase by the target at or after
/// [`BACK_GRACE_MS`]. Starting-shop purchases at time zero never qualify.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseAfterGrace {
    pub grace_ms: u64,
}

impl Default for PurchaseAfterGrace {
    fn default() -> Self {
        Self {
            grace_ms: BACK_GRACE_MS,
        }
    }
}

impl BackSignal for PurchaseAfterGrace {
    fn is_back_signal(&self, event: &Event, target: ParticipantId) -> bool {
        event.timestamp_ms >= self.grace_ms
            && matches!(event.kind, EventKind::ItemPurchased { participant, .. } if participant == target)
    }
}

/// Converts a game-time instant to minutes, rounded to one decimal.
pub fn minutes(timestamp_ms: u64) -> f64 {
    (timestamp_ms as f64 / MS_PER_MIN as f64 * 10.0).round() / 10.0
}

/// Scans `events` once and extracts the four first-occurrence timings for
/// `target`.
pub fn detect_milestones(
    events: &[Event],
    target: ParticipantId,
    catalog: &dyn ItemCatalog,
    back: &dyn BackSignal,
) -> MilestoneSet {
    let mut milestones = MilestoneSet::default();

    for event in events {
        match &event.kind {
            EventKind::ChampionKill { killer, victim, .. } => {
                if *killer == Some(target) && milestones.first_kill_min.is_none() {
                    milestones.first_kill_min = Some(minutes(event.timestamp_ms));
                }
                if *victim == target && milestones.first_death_min.is_none() {
                    milestones.first_death_min = Some(minutes(event.timestamp_ms));
                }
            }
            EventKind::ItemPurchased {
                participant,
                item_id,
            } => {
                if *participant == target
                    && milestones.first_full_item_min.is_none()
                    && catalog.is_completed_item(*item_id)
                {
                    milestones.first_full_item_min = Some(minutes(event.timestamp_ms));
                }
            }
            _ => {}
        }

        if milestones.first_back_min.is_none() && back.is_back_signal(event, target) {
            milestones.first_back_min = Some(minutes(event.timestamp_ms));
        }
    }

    milestones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::SetItemCatalog;

    fn make_kill(timestamp_ms: u64, killer: ParticipantId, victim: ParticipantId) -> Event {
        Event {
            timestamp_ms,
            kind: EventKind::ChampionKill {
                killer: Some(killer),
                victim,
                assists: vec![],
            },
        }
    }

    fn make_purchase(timestamp_ms: u64, participant: ParticipantId, item_id: u32) -> Event {
        Event {
            timestamp_ms,
            kind: EventKind::ItemPurchased {
                participant,
                item_id,
            },
        }
    }

    fn detect(events: &[Event], catalog: &SetItemCatalog) -> MilestoneSet {
        detect_milestones(events, 1, catalog, &PurchaseAfterGrace::default())
    }

    #[test]
    fn test_first_kill_and_death() {
        let events = vec![
            make_kill(4 * MS_PER_MIN, 1, 6),
            make_kill(7 * MS_PER_MIN, 1, 7),
            make_kill(8 * MS_PER_MIN, 6, 1),
        ];
        let milestones = detect(&events, &SetItemCatalog::default());
        assert_eq!(milestones.first_kill_min, Some(4.0));
        assert_eq!(milestones.first_death_min, Some(8.0));
    }

    #[test]
    fn test_no_kill_events_means_absent() {
        let milestones = detect(&[], &SetItemCatalog::default());
        assert_eq!(milestones.first_kill_min, None);
        assert_eq!(milestones.first_death_min, None);
        assert_eq!(milestones.first_full_item_min, None);
        assert_eq!(milestones.first_back_min, None);
    }

    #[test]
    fn test_other_participants_do_not_count() {
        let events = vec![make_kill(4 * MS_PER_MIN, 2, 6)];
        let milestones = detect(&events, &SetItemCatalog::default());
        assert_eq!(milestones.first_kill_min, None);
    }

    #[test]
    fn test_first_full_item_uses_catalog() {
        let catalog = SetItemCatalog::new([3031]);
        let events = vec![
            // Component at 6 minutes, completed item at 12.
            make_purchase(6 * MS_PER_MIN, 1, 1038),
            make_purchase(12 * MS_PER_MIN, 1, 3031),
        ];
        let milestones = detect(&events, &catalog);
        assert_eq!(milestones.first_full_item_min, Some(12.0));
    }

    #[test]
    fn test_first_back_skips_starting_shop() {
        let events = vec![
            make_purchase(0, 1, 1055),
            make_purchase(6 * MS_PER_MIN, 1, 1038),
        ];
        let milestones = detect(&events, &SetItemCatalog::default());
        assert_eq!(milestones.first_back_min, Some(6.0));
    }

    #[test]
    fn test_back_signal_is_pluggable() {
        struct Never;
        impl BackSignal for Never {
            fn is_back_signal(&self, _: &Event, _: ParticipantId) -> bool {
                false
            }
        }
        let events = vec![make_purchase(6 * MS_PER_MIN, 1, 1038)];
        let milestones = detect_milestones(&events, 1, &SetItemCatalog::default(), &Never);
        assert_eq!(milestones.first_back_min, None);
    }

    #[test]
    fn test_tie_resolves_by_event_order() {
        // Two qualifying kills at the same timestamp: the earlier one in
        // sequence order defines the milestone (same minute either way,
        // but the scan must not look past the first).
        let events = vec![
            make_kill(5 * MS_PER_MIN, 1, 6),
            make_kill(5 * MS_PER_MIN, 1, 7),
        ];
        let milestones = detect(&events, &SetItemCatalog::default());
        assert_eq!(milestones.first_kill_min, Some(5.0));
    }

    #[test]
    fn test_minutes_rounds_to_one_decimal() {
        assert_eq!(minutes(90_000), 1.5);
        assert_eq!(minutes(100_000), 1.7);
    }
}
