//! JSON API layer: wire-shaped request/response types and the one-call
//! extraction entry point.

pub mod timeline_json;

pub use timeline_json::{
    assemble, extract_timeline_lite, CheckpointBody, CheckpointsBody, TimelineLiteRequest,
    TimelineLiteResponse, TimingsBody, VisionBody,
};
