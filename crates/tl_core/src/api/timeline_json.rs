//! # Timeline-Lite JSON API Layer
//!
//! Request/response structures matching the timeline-lite wire contract,
//! plus the one-call extraction entry point. The engine does not speak
//! HTTP: the caller hands it an already-fetched raw timeline and the three
//! identifying fields, which are echoed back unchanged.
//!
//! The response layout is stable regardless of which values are absent:
//! absent data serializes as explicit `null`, never as an omitted key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{
    aggregate_plates, aggregate_vision, detect_milestones, extract_checkpoints, BackSignal,
    CheckpointSnapshot, MilestoneSet, VisionCounts, CHECKPOINT_MARKS_MIN, PLATE_CUTOFF_MIN,
    VISION_CUTOFF_MIN,
};
use crate::error::Result;
use crate::items::ItemCatalog;
use crate::models::raw::RawTimeline;
use crate::models::timeline::ParticipantId;
use crate::normalizer::normalize;

/// The identifying fields of a timeline-lite request, as validated and
/// forwarded by the HTTP collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLiteRequest {
    pub match_id: String,
    pub puuid: String,
    pub region: String,
}

/// One checkpoint in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointBody {
    pub cs: u32,
    pub gold: u32,
    pub xp: u32,
    pub kda: String,
}

impl From<CheckpointSnapshot> for CheckpointBody {
    fn from(snapshot: CheckpointSnapshot) -> Self {
        Self {
            cs: snapshot.cs,
            gold: snapshot.gold,
            xp: snapshot.xp,
            kda: snapshot.kda,
        }
    }
}

/// The two fixed checkpoint marks. A `None` means the match ended before
/// the mark and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointsBody {
    #[serde(rename = "10min")]
    pub at_10min: Option<CheckpointBody>,
    #[serde(rename = "15min")]
    pub at_15min: Option<CheckpointBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingsBody {
    pub first_back_min: Option<f64>,
    pub first_full_item_min: Option<f64>,
    pub first_kill_min: Option<f64>,
    pub first_death_min: Option<f64>,
}

impl From<MilestoneSet> for TimingsBody {
    fn from(milestones: MilestoneSet) -> Self {
        Self {
            first_back_min: milestones.first_back_min,
            first_full_item_min: milestones.first_full_item_min,
            first_kill_min: milestones.first_kill_min,
            first_death_min: milestones.first_death_min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionBody {
    pub wards_placed: u32,
    pub wards_killed: u32,
    pub control_wards: u32,
}

impl From<VisionCounts> for VisionBody {
    fn from(counts: VisionCounts) -> Self {
        Self {
            wards_placed: counts.wards_placed,
            wards_killed: counts.wards_killed,
            control_wards: counts.control_wards,
        }
    }
}

/// The timeline-lite response record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLiteResponse {
    pub match_id: String,
    pub region: String,
    pub puuid: String,
    pub participant_id: ParticipantId,
    pub checkpoints: CheckpointsBody,
    pub timings: TimingsBody,
    pub vision_pre15: VisionBody,
    pub plates_pre14: u32,
}

/// Composes the extractor outputs into the response record. Pure; any
/// failure has already surfaced upstream.
pub fn assemble(
    request: &TimelineLiteRequest,
    participant_id: ParticipantId,
    mut checkpoints: BTreeMap<u32, Option<CheckpointSnapshot>>,
    milestones: MilestoneSet,
    vision: VisionCounts,
    plates: u32,
) -> TimelineLiteResponse {
    TimelineLiteResponse {
        match_id: request.match_id.clone(),
        region: request.region.clone(),
        puuid: request.puuid.clone(),
        participant_id,
        checkpoints: CheckpointsBody {
            at_10min: checkpoints.remove(&10).flatten().map(Into::into),
            at_15min: checkpoints.remove(&15).flatten().map(Into::into),
        },
        timings: milestones.into(),
        vision_pre15: vision.into(),
        plates_pre14: plates,
    }
}

/// Runs one full extraction: normalize, then the four independent
/// extractors, then assembly. One bounded pass per extractor, no I/O.
pub fn extract_timeline_lite(
    raw: &RawTimeline,
    request: &TimelineLiteRequest,
    catalog: &dyn ItemCatalog,
    back: &dyn BackSignal,
) -> Result<TimelineLiteResponse> {
    let timeline = normalize(raw, &request.puuid)?;
    let target = timeline.participant_id;

    let checkpoints = extract_checkpoints(
        &timeline.frames,
        &timeline.events,
        target,
        &CHECKPOINT_MARKS_MIN,
    )?;
    let milestones = detect_milestones(&timeline.events, target, catalog, back);
    let vision = aggregate_vision(&timeline.events, target, VISION_CUTOFF_MIN);
    let plates = aggregate_plates(&timeline.events, target, PLATE_CUTOFF_MIN);

    Ok(assemble(
        request, target, checkpoints, milestones, vision, plates,
    ))
}
