//! # Timeline Normalizer
//!
//! Turns the raw provider payload into the canonical [`NormalizedTimeline`]:
//! frames and events flattened into two timestamp-ordered sequences, the
//! target player's puuid resolved to a match-local participant id.
//!
//! Ordering guarantees from the provider are not trusted: both sequences
//! are defensively re-sorted (stable, so same-timestamp order is preserved)
//! and a warning is logged when re-sorting actually changed anything.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Result, TimelineError};
use crate::models::raw::{RawEvent, RawTimeline};
use crate::models::timeline::{
    Event, EventKind, Frame, NormalizedTimeline, ParticipantId, ParticipantState, WardType,
};

/// Normalizes a raw timeline for one target player.
///
/// Fails with [`TimelineError::PlayerNotInMatch`] when the puuid resolves to
/// no participant and [`TimelineError::MalformedTimeline`] when the payload
/// is structurally unusable (no frames, bad participant keys, events with
/// their required attribution fields missing, or a frame that lacks the
/// target participant's entry).
pub fn normalize(raw: &RawTimeline, target_puuid: &str) -> Result<NormalizedTimeline> {
    let participant_id = resolve_participant(raw, target_puuid)?;

    if raw.info.frames.is_empty() {
        return Err(TimelineError::MalformedTimeline(
            "timeline contains no frames".into(),
        ));
    }

    let mut frames = Vec::with_capacity(raw.info.frames.len());
    let mut events = Vec::new();

    for raw_frame in &raw.info.frames {
        let mut participants = BTreeMap::new();
        for (key, pf) in &raw_frame.participant_frames {
            let id: ParticipantId = key.parse().map_err(|_| {
                TimelineError::MalformedTimeline(format!("bad participant frame key {key:?}"))
            })?;
            participants.insert(
                id,
                ParticipantState {
                    cs: pf.minions_killed + pf.jungle_minions_killed,
                    gold: pf.total_gold,
                    xp: pf.xp,
                    level: pf.level,
                },
            );
        }
        frames.push(Frame {
            timestamp_ms: raw_frame.timestamp,
            participants,
        });

        for raw_event in &raw_frame.events {
            events.push(classify_event(raw_event)?);
        }
    }

    restore_order(&mut frames, |f| f.timestamp_ms, "frames");
    restore_order(&mut events, |e| e.timestamp_ms, "events");

    for frame in &frames {
        if !frame.participants.contains_key(&participant_id) {
            return Err(TimelineError::MalformedTimeline(format!(
                "frame at {}ms has no entry for participant {participant_id}",
                frame.timestamp_ms
            )));
        }
    }

    Ok(NormalizedTimeline {
        frames,
        events,
        participant_id,
    })
}

/// Resolves the external puuid to the match-local participant id. The
/// explicit participant list in the timeline body wins; the ordered puuid
/// list in the metadata envelope (1-based position) is the fallback.
fn resolve_participant(raw: &RawTimeline, target_puuid: &str) -> Result<ParticipantId> {
    if let Some(p) = raw
        .info
        .participants
        .iter()
        .find(|p| p.puuid == target_puuid)
    {
        return Ok(p.participant_id);
    }

    if let Some(metadata) = &raw.metadata {
        if let Some(idx) = metadata
            .participants
            .iter()
            .position(|p| p == target_puuid)
        {
            return Ok(idx as ParticipantId + 1);
        }
    }

    Err(TimelineError::PlayerNotInMatch {
        puuid: target_puuid.to_string(),
    })
}

/// Stable-sorts `items` by timestamp if and only if they are out of order,
/// logging a non-fatal note when correction was needed.
fn restore_order<T, F>(items: &mut [T], timestamp: F, what: &str)
where
    F: Fn(&T) -> u64,
{
    let sorted = items.windows(2).all(|w| timestamp(&w[0]) <= timestamp(&w[1]));
    if !sorted {
        warn!("timeline {what} arrived out of order; re-sorting");
        items.sort_by_key(|item| timestamp(item));
    }
}

/// Maps a provider event onto the closed [`EventKind`] set. Unrecognized
/// types become [`EventKind::Other`]; recognized types with their required
/// attribution fields missing are malformed.
fn classify_event(raw: &RawEvent) -> Result<Event> {
    let kind = match raw.event_type.as_str() {
        "CHAMPION_KILL" => EventKind::ChampionKill {
            killer: normalize_id(raw.killer_id),
            victim: require(raw.victim_id, raw, "victimId")?,
            assists: raw.assisting_participant_ids.clone(),
        },
        "ITEM_PURCHASED" => EventKind::ItemPurchased {
            participant: require(raw.participant_id, raw, "participantId")?,
            item_id: require(raw.item_id, raw, "itemId")?,
        },
        "ITEM_SOLD" => EventKind::ItemSold {
            participant: require(raw.participant_id, raw, "participantId")?,
            item_id: require(raw.item_id, raw, "itemId")?,
        },
        "ITEM_UNDO" => EventKind::ItemUndo {
            participant: require(raw.participant_id, raw, "participantId")?,
        },
        "WARD_PLACED" => EventKind::WardPlaced {
            creator: require(raw.creator_id, raw, "creatorId")?,
            ward_type: ward_type(raw),
        },
        "WARD_KILL" => EventKind::WardKilled {
            killer: require(raw.killer_id, raw, "killerId")?,
            ward_type: ward_type(raw),
        },
        "TURRET_PLATE_DESTROYED" => EventKind::TurretPlateDestroyed {
            killer: normalize_id(raw.killer_id),
            team_id: require(raw.team_id, raw, "teamId")?,
        },
        _ => EventKind::Other,
    };

    Ok(Event {
        timestamp_ms: raw.timestamp,
        kind,
    })
}

/// Provider id `0` means "no participant" (e.g. an execution); fold it
/// into `None` so attribution checks stay simple equality.
fn normalize_id(id: Option<ParticipantId>) -> Option<ParticipantId> {
    id.filter(|&id| id > 0)
}

fn require<T>(value: Option<T>, raw: &RawEvent, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        TimelineError::MalformedTimeline(format!(
            "{} event at {}ms is missing {field}",
            raw.event_type, raw.timestamp
        ))
    })
}

fn ward_type(raw: &RawEvent) -> WardType {
    raw.ward_type
        .as_deref()
        .map(WardType::from_provider)
        .unwrap_or(WardType::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::RawTimeline;

    fn timeline_json(frames: &str) -> String {
        format!(
            r#"{{
                "metadata": {{ "matchId": "EUW1_1", "participants": ["puuid-a", "puuid-b"] }},
                "info": {{
                    "participants": [
                        {{ "participantId": 1, "puuid": "puuid-a" }},
                        {{ "participantId": 2, "puuid": "puuid-b" }}
                    ],
                    "frames": [{frames}]
                }}
            }}"#
        )
    }

    fn frame_json(timestamp: u64, events: &str) -> String {
        format!(
            r#"{{
                "timestamp": {timestamp},
                "participantFrames": {{
                    "1": {{ "minionsKilled": 10, "jungleMinionsKilled": 2,
                            "totalGold": 1000, "xp": 1500, "level": 4 }},
                    "2": {{ "minionsKilled": 8, "jungleMinionsKilled": 0,
                            "totalGold": 900, "xp": 1400, "level": 4 }}
                }},
                "events": [{events}]
            }}"#
        )
    }

    #[test]
    fn test_resolves_participant_from_info_list() {
        let json = timeline_json(&frame_json(0, ""));
        let raw = RawTimeline::from_json(&json).unwrap();
        let normalized = normalize(&raw, "puuid-b").unwrap();
        assert_eq!(normalized.participant_id, 2);
    }

    #[test]
    fn test_resolves_participant_from_metadata_order() {
        let json = format!(
            r#"{{
                "metadata": {{ "matchId": "EUW1_1", "participants": ["puuid-a", "puuid-b"] }},
                "info": {{ "frames": [{}] }}
            }}"#,
            frame_json(0, "")
        );
        let raw = RawTimeline::from_json(&json).unwrap();
        let normalized = normalize(&raw, "puuid-b").unwrap();
        assert_eq!(normalized.participant_id, 2);
    }

    #[test]
    fn test_unknown_puuid_is_player_not_in_match() {
        let json = timeline_json(&frame_json(0, ""));
        let raw = RawTimeline::from_json(&json).unwrap();
        let err = normalize(&raw, "puuid-z").unwrap_err();
        assert!(matches!(err, TimelineError::PlayerNotInMatch { .. }));
    }

    #[test]
    fn test_empty_frames_is_malformed() {
        let json = timeline_json("");
        let raw = RawTimeline::from_json(&json).unwrap();
        let err = normalize(&raw, "puuid-a").unwrap_err();
        assert!(matches!(err, TimelineError::MalformedTimeline(_)));
    }

    #[test]
    fn test_cs_sums_minions_and_jungle() {
        let json = timeline_json(&frame_json(60000, ""));
        let raw = RawTimeline::from_json(&json).unwrap();
        let normalized = normalize(&raw, "puuid-a").unwrap();
        assert_eq!(normalized.frames[0].participant(1).unwrap().cs, 12);
    }

    #[test]
    fn test_events_flattened_and_classified() {
        let events = r#"
            { "type": "CHAMPION_KILL", "timestamp": 180000,
              "killerId": 1, "victimId": 2, "assistingParticipantIds": [3] },
            { "type": "WARD_PLACED", "timestamp": 200000,
              "creatorId": 1, "wardType": "CONTROL_WARD" },
            { "type": "SKILL_LEVEL_UP", "timestamp": 210000, "participantId": 1 }
        "#;
        let json = timeline_json(&frame_json(240000, events));
        let raw = RawTimeline::from_json(&json).unwrap();
        let normalized = normalize(&raw, "puuid-a").unwrap();

        assert_eq!(normalized.events.len(), 3);
        assert!(matches!(
            normalized.events[0].kind,
            EventKind::ChampionKill { killer: Some(1), victim: 2, .. }
        ));
        assert!(matches!(
            normalized.events[1].kind,
            EventKind::WardPlaced { creator: 1, ward_type: WardType::Control }
        ));
        assert_eq!(normalized.events[2].kind, EventKind::Other);
    }

    #[test]
    fn test_execution_kill_has_no_killer() {
        let events = r#"{ "type": "CHAMPION_KILL", "timestamp": 100000,
                          "killerId": 0, "victimId": 1 }"#;
        let json = timeline_json(&frame_json(120000, events));
        let raw = RawTimeline::from_json(&json).unwrap();
        let normalized = normalize(&raw, "puuid-a").unwrap();
        assert!(matches!(
            normalized.events[0].kind,
            EventKind::ChampionKill { killer: None, victim: 1, .. }
        ));
    }

    #[test]
    fn test_kill_missing_victim_is_malformed() {
        let events = r#"{ "type": "CHAMPION_KILL", "timestamp": 100000, "killerId": 1 }"#;
        let json = timeline_json(&frame_json(120000, events));
        let raw = RawTimeline::from_json(&json).unwrap();
        let err = normalize(&raw, "puuid-a").unwrap_err();
        assert!(matches!(err, TimelineError::MalformedTimeline(_)));
    }

    #[test]
    fn test_out_of_order_frames_are_resorted() {
        let frames = format!("{},{}", frame_json(120000, ""), frame_json(60000, ""));
        let json = timeline_json(&frames);
        let raw = RawTimeline::from_json(&json).unwrap();
        let normalized = normalize(&raw, "puuid-a").unwrap();
        assert_eq!(normalized.frames[0].timestamp_ms, 60000);
        assert_eq!(normalized.frames[1].timestamp_ms, 120000);
    }

    #[test]
    fn test_frame_without_target_entry_is_malformed() {
        let frame = r#"{
            "timestamp": 60000,
            "participantFrames": {
                "2": { "minionsKilled": 8, "jungleMinionsKilled": 0,
                       "totalGold": 900, "xp": 1400, "level": 4 }
            },
            "events": []
        }"#;
        let json = timeline_json(frame);
        let raw = RawTimeline::from_json(&json).unwrap();
        let err = normalize(&raw, "puuid-a").unwrap_err();
        assert!(matches!(err, TimelineError::MalformedTimeline(_)));
    }
}
