//! # Checkpoint Extractor
//!
//! Snapshots the target participant's cumulative stats at fixed game-time
//! marks.
//!
//! ## Algorithm
//! 1. For mark `M` minutes, the effective time is `T = M * 60000` ms.
//! 2. A mark outside the available frame range (the match ended before
//!    `T`, or `T` precedes the first frame) is `None`: absence of data,
//!    distinct from a true zero snapshot.
//! 3. Otherwise select the latest frame with `timestamp <= T`.
//! 4. `cs`/`gold`/`xp` come from the selected frame; the KDA tally counts
//!    kill events up to the *frame's own* timestamp (not `T`) so the tally
//!    stays consistent with the snapshot it accompanies.

use std::collections::BTreeMap;

use crate::error::{Result, TimelineError};
use crate::models::timeline::{Event, EventKind, Frame, ParticipantId};

pub const MS_PER_MIN: u64 = 60_000;

/// The fixed early-game marks of the response contract.
pub const CHECKPOINT_MARKS_MIN: [u32; 2] = [10, 15];

/// One participant's derived stats at one mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointSnapshot {
    pub cs: u32,
    pub gold: u32,
    pub xp: u32,
    /// Formatted as `"kills/deaths/assists"`, e.g. `"3/2/1"`.
    pub kda: String,
}

/// Extracts one snapshot per mark. Marks beyond the available frame range
/// map to `None`.
pub fn extract_checkpoints(
    frames: &[Frame],
    events: &[Event],
    target: ParticipantId,
    marks_min: &[u32],
) -> Result<BTreeMap<u32, Option<CheckpointSnapshot>>> {
    let mut checkpoints = BTreeMap::new();
    for &mark in marks_min {
        let cutoff_ms = u64::from(mark) * MS_PER_MIN;
        let snapshot = match frame_at_or_before(frames, cutoff_ms) {
            Some(frame) => Some(snapshot_at(frame, events, target)?),
            None => None,
        };
        checkpoints.insert(mark, snapshot);
    }
    Ok(checkpoints)
}

/// Latest frame with `timestamp <= cutoff`, or `None` when the mark lies
/// outside the available frame range (the last frame precedes the cutoff,
/// meaning the match ended before the mark was reached). Frames are
/// ordered, so the reverse scan's first hit is the latest match; for
/// duplicate timestamps that is also the one later in the original
/// sequence.
fn frame_at_or_before(frames: &[Frame], cutoff_ms: u64) -> Option<&Frame> {
    match frames.last() {
        Some(last) if last.timestamp_ms < cutoff_ms => None,
        _ => frames.iter().rev().find(|f| f.timestamp_ms <= cutoff_ms),
    }
}

fn snapshot_at(frame: &Frame, events: &[Event], target: ParticipantId) -> Result<CheckpointSnapshot> {
    let state = frame.participant(target).ok_or_else(|| {
        TimelineError::MalformedTimeline(format!(
            "frame at {}ms has no entry for participant {target}",
            frame.timestamp_ms
        ))
    })?;

    let (kills, deaths, assists) = tally_kda(events, target, frame.timestamp_ms);

    Ok(CheckpointSnapshot {
        cs: state.cs,
        gold: state.gold,
        xp: state.xp,
        kda: format!("{kills}/{deaths}/{assists}"),
    })
}

/// Counts kill-event involvement for `target` up to and including
/// `until_ms`.
fn tally_kda(events: &[Event], target: ParticipantId, until_ms: u64) -> (u32, u32, u32) {
    let mut kills = 0;
    let mut deaths = 0;
    let mut assists = 0;

    for event in events.iter().take_while(|e| e.timestamp_ms <= until_ms) {
        if let EventKind::ChampionKill {
            killer,
            victim,
            assists: assisting,
        } = &event.kind
        {
            if *killer == Some(target) {
                kills += 1;
            }
            if *victim == target {
                deaths += 1;
            }
            if assisting.contains(&target) {
                assists += 1;
            }
        }
    }

    (kills, deaths, assists)
}
