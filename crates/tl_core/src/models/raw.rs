//! # Raw Timeline Payload
//!
//! Serde models for the upstream provider's match-timeline JSON, exactly as
//! it arrives from the fetch collaborator. Nothing here is validated beyond
//! what deserialization enforces; the normalizer owns structural validation.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, TimelineError};

/// Top-level timeline payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTimeline {
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
    pub info: RawTimelineInfo,
}

impl RawTimeline {
    /// Parses a raw timeline from its JSON text. Any deserialization
    /// failure is a [`TimelineError::MalformedTimeline`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TimelineError::MalformedTimeline(format!("timeline payload: {e}")))
    }
}

/// Match metadata envelope. `participants` is the ordered puuid list; the
/// 1-based index of a puuid in it is that player's match-local id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetadata {
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimelineInfo {
    /// Nominal spacing between frames in milliseconds (normally 60000).
    /// Informational only; actual frame timestamps are authoritative.
    #[serde(default)]
    pub frame_interval: Option<u64>,
    /// Explicit puuid → participantId mapping. Preferred over the
    /// metadata participant order when present.
    #[serde(default)]
    pub participants: Vec<RawParticipant>,
    #[serde(default)]
    pub frames: Vec<RawFrame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParticipant {
    pub participant_id: i32,
    pub puuid: String,
}

/// One per-minute snapshot of all participants, plus the discrete events
/// that occurred since the previous frame.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    pub timestamp: u64,
    #[serde(default)]
    pub participant_frames: BTreeMap<String, RawParticipantFrame>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

/// Cumulative per-participant counters at one frame. The stat fields are
/// required: a frame that drops them is malformed, not zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParticipantFrame {
    pub minions_killed: u32,
    pub jungle_minions_killed: u32,
    pub total_gold: u32,
    pub xp: u32,
    #[serde(default)]
    pub level: u32,
}

/// A discrete timestamped event, still in provider vocabulary. The `type`
/// string is classified into [`crate::models::EventKind`] by the
/// normalizer; unknown types pass through and classify as ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: u64,
    #[serde(default)]
    pub killer_id: Option<i32>,
    #[serde(default)]
    pub victim_id: Option<i32>,
    #[serde(default)]
    pub assisting_participant_ids: Vec<i32>,
    #[serde(default)]
    pub participant_id: Option<i32>,
    #[serde(default)]
    pub item_id: Option<u32>,
    #[serde(default)]
    pub creator_id: Option<i32>,
    #[serde(default)]
    pub ward_type: Option<String>,
    #[serde(default)]
    pub team_id: Option<u32>,
    #[serde(default)]
    pub lane_type: Option<String>,
}
