//! Data models: the raw provider payload and the canonical normalized form.

pub mod raw;
pub mod timeline;

pub use raw::{RawEvent, RawFrame, RawMetadata, RawParticipant, RawParticipantFrame, RawTimeline};
pub use timeline::{
    Event, EventKind, Frame, NormalizedTimeline, ParticipantId, ParticipantState, WardType,
};
