use thiserror::Error;

/// Errors surfaced by the extraction engine.
///
/// All three variants are terminal for a request: the engine either has a
/// usable normalized timeline or it does not. Missing *data* inside a valid
/// timeline (a checkpoint past match end, a milestone that never happened)
/// is not an error and is reported as `null`/`0` in the response instead.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// The supplied player identifier does not resolve to any participant
    /// in the match.
    #[error("player {puuid} is not a participant in this match")]
    PlayerNotInMatch { puuid: String },

    /// Structurally invalid timeline: missing frames, unparseable payload,
    /// or a required field absent where the provider guarantees it.
    #[error("malformed timeline: {0}")]
    MalformedTimeline(String),

    /// The upstream fetch collaborator could not produce a timeline. The
    /// engine itself never raises this; callers map fetch failures to it
    /// before extraction begins.
    #[error("timeline unavailable: {0}")]
    TimelineUnavailable(String),
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        TimelineError::MalformedTimeline(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TimelineError>;
