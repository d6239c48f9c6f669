//! # Canonical Timeline Model
//!
//! The normalized form every extractor consumes: one ordered frame
//! sequence, one ordered event sequence, one resolved participant id.
//! All types here are plain data; the normalizer is the only producer.

use std::collections::BTreeMap;

/// Match-local participant identifier (1-based). `0` in provider payloads
/// means "no participant" (e.g. an execution with no killer) and never
/// matches a real participant.
pub type ParticipantId = i32;

/// Cumulative counters for one participant at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantState {
    /// Minions plus jungle creeps killed.
    pub cs: u32,
    pub gold: u32,
    pub xp: u32,
    pub level: u32,
}

/// A full-state snapshot of all participants at one game-time instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub timestamp_ms: u64,
    pub participants: BTreeMap<ParticipantId, ParticipantState>,
}

impl Frame {
    pub fn participant(&self, id: ParticipantId) -> Option<&ParticipantState> {
        self.participants.get(&id)
    }
}

/// Ward categories the provider reports. Unknown strings map to
/// [`WardType::Undefined`] rather than failing normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WardType {
    Control,
    YellowTrinket,
    BlueTrinket,
    Sight,
    Undefined,
}

impl WardType {
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "CONTROL_WARD" => WardType::Control,
            "YELLOW_TRINKET" => WardType::YellowTrinket,
            "BLUE_TRINKET" => WardType::BlueTrinket,
            "SIGHT_WARD" => WardType::Sight,
            _ => WardType::Undefined,
        }
    }

    pub fn is_control(self) -> bool {
        matches!(self, WardType::Control)
    }
}

/// The event kinds this engine consumes, as a closed set. Everything the
/// provider sends that is not listed here classifies as [`EventKind::Other`]
/// and is carried through normalization untouched, so new provider event
/// types never break extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    ChampionKill {
        /// Absent for executions (killed by minions or towers).
        killer: Option<ParticipantId>,
        victim: ParticipantId,
        assists: Vec<ParticipantId>,
    },
    ItemPurchased {
        participant: ParticipantId,
        item_id: u32,
    },
    ItemSold {
        participant: ParticipantId,
        item_id: u32,
    },
    ItemUndo {
        participant: ParticipantId,
    },
    WardPlaced {
        creator: ParticipantId,
        ward_type: WardType,
    },
    WardKilled {
        killer: ParticipantId,
        ward_type: WardType,
    },
    TurretPlateDestroyed {
        /// Participant credited by the provider; `None` when only a team
        /// credit was reported.
        killer: Option<ParticipantId>,
        team_id: u32,
    },
    Other,
}

/// A discrete timestamped occurrence in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp_ms: u64,
    pub kind: EventKind,
}

/// Output of the normalizer and shared input of every extractor. Frames
/// and events are sorted non-decreasing by timestamp, ties preserved in
/// original payload order.
#[derive(Debug, Clone)]
pub struct NormalizedTimeline {
    pub frames: Vec<Frame>,
    pub events: Vec<Event>,
    /// The target player's resolved match-local id.
    pub participant_id: ParticipantId,
}
