//! Event kind classification and raw-to-canonical normalization.
//!
//! A single underlying list may back both the regain and the loss view of a
//! match depending on how the capture was tagged, so a record's kind is never
//! assumed from the collection it arrived in. Kind is decided per record:
//! an explicit source tag wins; otherwise field presence decides (behind-ball
//! counts without a reaction flag mean a regain, any reaction-quality flag
//! means a loss). Records with neither signal classify as [`EventKind::Unknown`]
//! and are surfaced through the diagnostics instead of being silently
//! defaulted.

use log::{debug, warn};

use super::canonical::{
    ActionEvent, ActionType, AreaEntryEvent, BodyPart, EntryMethod, OutcomeFlags, Reaction,
    ShotCategory, ShotEvent, ShotOutcome, TeamContext, TurnoverEvent,
};
use super::raw::{RawActionRecord, RawEntryRecord, RawShotRecord, RawTurnoverRecord};
use crate::pitch::Zone;

/// Semantic kind of a possession-change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Regain,
    Loss,
    /// Neither distinguishing field set is populated.
    Unknown,
}

/// Classify one turnover record.
pub fn classify(record: &RawTurnoverRecord) -> EventKind {
    if let Some(tag) = record.tag.as_deref() {
        match tag.trim().to_ascii_lowercase().as_str() {
            "regain" => return EventKind::Regain,
            "loses" | "lose" | "loss" => return EventKind::Loss,
            other => {
                debug!("ignoring unrecognized turnover tag '{other}', falling back to field inference");
            }
        }
    }

    let has_reaction = record.reacted.is_some()
        || record.reacted_poorly.is_some()
        || record.not_applicable.is_some();
    let has_counts =
        record.mates_behind_ball.is_some() || record.opponents_behind_ball.is_some();

    if has_reaction {
        EventKind::Loss
    } else if has_counts {
        EventKind::Regain
    } else {
        EventKind::Unknown
    }
}

/// Classifier bookkeeping for the data-quality report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierStats {
    /// Records with neither an explicit tag nor a distinguishing field set.
    pub unclassified: u32,
    /// Records whose classified kind contradicted the collection they came
    /// from (kept under their classified kind, not the collection's).
    pub mismatched: u32,
    /// Whether the legacy combined list had to stand in for a team-scoped
    /// collection that filtered to empty.
    pub used_fallback: bool,
}

/// Select the events of one kind, preferring the team-scoped collection and
/// falling back to the legacy combined list when the scoped collection is
/// empty after team filtering. Nothing is dropped silently: mismatches and
/// unclassifiable records are counted.
pub fn collect_kind(
    scoped: &[RawTurnoverRecord],
    combined: &[RawTurnoverRecord],
    team_id: &str,
    want: EventKind,
    stats: &mut ClassifierStats,
) -> Vec<TurnoverEvent> {
    let from_scoped = classify_and_keep(scoped, team_id, want, Some(&mut *stats));
    if !from_scoped.is_empty() {
        return from_scoped;
    }
    if combined.is_empty() {
        return from_scoped;
    }
    debug!(
        "team-scoped {:?} collection empty after team filter, classifying the combined list",
        want
    );
    stats.used_fallback = true;
    // Diagnostics for the combined list are accumulated once by the caller
    // (it may serve both kinds), not per consulting pass.
    classify_and_keep(combined, team_id, want, None)
}

/// Count the records of a list that classify as [`EventKind::Unknown`] after
/// team filtering. Used by the snapshot builder to account for the combined
/// list exactly once.
pub fn count_unclassified(records: &[RawTurnoverRecord], team_id: &str) -> u32 {
    records
        .iter()
        .filter(|r| r.team_id.as_deref().map_or(true, |t| t == team_id))
        .filter(|r| classify(r) == EventKind::Unknown)
        .count() as u32
}

fn classify_and_keep(
    records: &[RawTurnoverRecord],
    team_id: &str,
    want: EventKind,
    mut stats: Option<&mut ClassifierStats>,
) -> Vec<TurnoverEvent> {
    records
        .iter()
        .filter(|r| r.team_id.as_deref().map_or(true, |t| t == team_id))
        .filter(|r| match classify(r) {
            kind if kind == want => true,
            EventKind::Unknown => {
                warn!("turnover record at minute {:?} has no classifiable kind", r.minute);
                if let Some(stats) = stats.as_deref_mut() {
                    stats.unclassified += 1;
                }
                false
            }
            _ => {
                if let Some(stats) = stats.as_deref_mut() {
                    stats.mismatched += 1;
                }
                false
            }
        })
        .map(normalize_turnover)
        .collect()
}

/// Parse a zone label, treating unknown labels as absent (the event is then
/// excluded from zone-keyed aggregates, never counted as zone zero).
fn parse_zone(label: &Option<String>) -> Option<Zone> {
    label.as_deref().and_then(Zone::parse)
}

pub fn normalize_turnover(record: &RawTurnoverRecord) -> TurnoverEvent {
    let defense_zone = parse_zone(&record.defense_zone);
    let attack_zone = parse_zone(&record.attack_zone).or_else(|| defense_zone.map(Zone::mirror));
    let reaction = if record.reacted == Some(true) {
        Some(Reaction::InTime)
    } else if record.reacted_poorly == Some(true) {
        Some(Reaction::Poor)
    } else if record.not_applicable == Some(true) {
        Some(Reaction::NotApplicable)
    } else {
        None
    };
    TurnoverEvent {
        minute: record.minute.unwrap_or(0.0),
        timestamp: record.timestamp,
        defense_zone,
        attack_zone,
        xt_defense: record.xt_defense,
        xt_attack: record.xt_attack,
        team: record.team_id.clone(),
        player: record.player_id.clone(),
        mates_behind_ball: record.mates_behind_ball,
        opponents_behind_ball: record.opponents_behind_ball,
        reaction,
        out_of_bounds: record.out_of_bounds.unwrap_or(false),
    }
}

pub fn normalize_action(record: &RawActionRecord) -> ActionEvent {
    let action_type = match record.action_type.as_deref() {
        Some(t) if t.eq_ignore_ascii_case("dribble") => ActionType::Dribble,
        Some(_) => ActionType::Pass,
        None if record.is_dribble == Some(true) => ActionType::Dribble,
        None => ActionType::Pass,
    };
    ActionEvent {
        minute: record.minute.unwrap_or(0.0),
        timestamp: record.timestamp,
        start_zone: parse_zone(&record.start_zone),
        end_zone: parse_zone(&record.end_zone),
        sender: record.sender_id.clone(),
        receiver: record.receiver_id.clone(),
        team: record.team_id.clone(),
        packing: record.packing.unwrap_or(0),
        xt_start: record.xt_start,
        xt_end: record.xt_end,
        action_type,
        outcomes: OutcomeFlags {
            p0: record.p0.unwrap_or(false),
            p1: record.p1.unwrap_or(false),
            p2: record.p2.unwrap_or(false),
            p3: record.p3.unwrap_or(false),
            pk: record.pk.unwrap_or(false),
            shot: record.shot.unwrap_or(false),
            goal: record.goal.unwrap_or(false),
            p0_start: record.p0_start.unwrap_or(false),
            p1_start: record.p1_start.unwrap_or(false),
            p2_start: record.p2_start.unwrap_or(false),
            p3_start: record.p3_start.unwrap_or(false),
            pk_start: record.pk_start.unwrap_or(false),
            shot_start: record.shot_start.unwrap_or(false),
            goal_start: record.goal_start.unwrap_or(false),
        },
    }
}

pub fn normalize_shot(record: &RawShotRecord) -> ShotEvent {
    let outcome = match record.outcome.as_deref().map(str::trim) {
        Some(o) if o.eq_ignore_ascii_case("goal") => ShotOutcome::Goal,
        Some(o) if o.eq_ignore_ascii_case("ontarget") || o.eq_ignore_ascii_case("on_target") => {
            ShotOutcome::OnTarget
        }
        Some(o) if o.eq_ignore_ascii_case("blocked") => ShotOutcome::Blocked,
        _ => ShotOutcome::OffTarget,
    };
    let body_part = match record.body_part.as_deref().map(str::trim) {
        Some(b) if b.eq_ignore_ascii_case("head") => BodyPart::Head,
        Some(b) if b.eq_ignore_ascii_case("foot") => BodyPart::Foot,
        Some(_) => BodyPart::Other,
        None => BodyPart::Foot,
    };
    let category = match record.category.as_deref().map(str::trim) {
        Some(c) if c.eq_ignore_ascii_case("setpiece")
            || c.eq_ignore_ascii_case("set_piece")
            || c.eq_ignore_ascii_case("sfg") =>
        {
            ShotCategory::SetPiece
        }
        _ => ShotCategory::OpenPlay,
    };
    ShotEvent {
        minute: record.minute.unwrap_or(0.0),
        timestamp: record.timestamp,
        xg: record.xg.unwrap_or(0.0),
        team: record.team_id.clone(),
        context: parse_context(&record.team_context),
        outcome,
        body_part,
        category,
        players_on_shot_line: record.players_on_shot_line,
    }
}

pub fn normalize_entry(record: &RawEntryRecord) -> AreaEntryEvent {
    let method = match record.method.as_deref().map(str::trim) {
        Some(m) if m.eq_ignore_ascii_case("dribble") => EntryMethod::Dribble,
        Some(m) if m.eq_ignore_ascii_case("setpiece") || m.eq_ignore_ascii_case("set_piece") => {
            EntryMethod::SetPiece
        }
        _ => EntryMethod::Pass,
    };
    AreaEntryEvent {
        minute: record.minute.unwrap_or(0.0),
        timestamp: record.timestamp,
        team: record.team_id.clone(),
        // The team id always carries the analyzed team, so a missing context
        // can only be read as an attacking entry.
        context: parse_context(&record.team_context).unwrap_or(TeamContext::Attack),
        method,
        led_to_regain: record.led_to_regain.unwrap_or(false),
        led_to_shot: record.led_to_shot.unwrap_or(false),
        led_to_goal: record.led_to_goal.unwrap_or(false),
    }
}

fn parse_context(context: &Option<String>) -> Option<TeamContext> {
    match context.as_deref().map(str::trim) {
        Some(c) if c.eq_ignore_ascii_case("attack") || c.eq_ignore_ascii_case("for") => {
            Some(TeamContext::Attack)
        }
        Some(c) if c.eq_ignore_ascii_case("defense")
            || c.eq_ignore_ascii_case("defence")
            || c.eq_ignore_ascii_case("against") =>
        {
            Some(TeamContext::Defense)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tag: &str) -> RawTurnoverRecord {
        RawTurnoverRecord { tag: Some(tag.to_string()), ..Default::default() }
    }

    #[test]
    fn explicit_tags_win() {
        assert_eq!(classify(&tagged("regain")), EventKind::Regain);
        assert_eq!(classify(&tagged("loses")), EventKind::Loss);
        assert_eq!(classify(&tagged("lose")), EventKind::Loss);
        assert_eq!(classify(&tagged("loss")), EventKind::Loss);
    }

    #[test]
    fn explicit_tag_beats_contradicting_fields() {
        let record = RawTurnoverRecord {
            tag: Some("regain".to_string()),
            reacted_poorly: Some(true),
            ..Default::default()
        };
        assert_eq!(classify(&record), EventKind::Regain);
    }

    #[test]
    fn behind_ball_counts_without_reaction_imply_regain() {
        let record = RawTurnoverRecord {
            mates_behind_ball: Some(4),
            opponents_behind_ball: Some(6),
            ..Default::default()
        };
        assert_eq!(classify(&record), EventKind::Regain);
    }

    #[test]
    fn reaction_flag_implies_loss_even_with_counts() {
        let record = RawTurnoverRecord {
            mates_behind_ball: Some(3),
            reacted: Some(false),
            ..Default::default()
        };
        assert_eq!(classify(&record), EventKind::Loss);

        let legacy = RawTurnoverRecord { reacted_poorly: Some(true), ..Default::default() };
        assert_eq!(classify(&legacy), EventKind::Loss);
    }

    #[test]
    fn bare_record_is_unknown() {
        assert_eq!(classify(&RawTurnoverRecord::default()), EventKind::Unknown);
    }

    #[test]
    fn collect_prefers_scoped_collection() {
        let scoped = vec![RawTurnoverRecord {
            tag: Some("regain".to_string()),
            team_id: Some("t1".to_string()),
            minute: Some(12.0),
            ..Default::default()
        }];
        let combined = vec![tagged("regain")];
        let mut stats = ClassifierStats::default();
        let events = collect_kind(&scoped, &combined, "t1", EventKind::Regain, &mut stats);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].minute, 12.0);
        assert!(!stats.used_fallback);
    }

    #[test]
    fn collect_falls_back_when_scoped_filters_to_empty() {
        // The scoped record belongs to the other team, so the combined list
        // must be classified on the fly instead of dropping the kind.
        let scoped = vec![RawTurnoverRecord {
            tag: Some("regain".to_string()),
            team_id: Some("other".to_string()),
            ..Default::default()
        }];
        let combined = vec![
            tagged("regain"),
            tagged("loses"),
            RawTurnoverRecord { mates_behind_ball: Some(5), ..Default::default() },
        ];
        let mut stats = ClassifierStats::default();
        let events = collect_kind(&scoped, &combined, "t1", EventKind::Regain, &mut stats);
        assert_eq!(events.len(), 2, "tagged regain + inferred regain");
        assert!(stats.used_fallback);
    }

    #[test]
    fn collect_counts_unclassifiable_records() {
        let scoped = vec![
            tagged("loses"),
            RawTurnoverRecord::default(), // no tag, no fields
        ];
        let mut stats = ClassifierStats::default();
        let events = collect_kind(&scoped, &[], "t1", EventKind::Loss, &mut stats);
        assert_eq!(events.len(), 1);
        assert_eq!(stats.unclassified, 1);
    }

    #[test]
    fn kind_is_never_taken_from_collection_identity() {
        // A record tagged "loses" sitting in the regain collection must not
        // surface as a regain.
        let scoped = vec![tagged("loses")];
        let mut stats = ClassifierStats::default();
        let regains = collect_kind(&scoped, &[], "t1", EventKind::Regain, &mut stats);
        assert!(regains.is_empty());
        assert_eq!(stats.mismatched, 1);
    }

    #[test]
    fn normalize_derives_attack_zone_by_mirroring() {
        let record = RawTurnoverRecord {
            tag: Some("loses".to_string()),
            defense_zone: Some("B3".to_string()),
            ..Default::default()
        };
        let event = normalize_turnover(&record);
        assert_eq!(event.defense_zone, Zone::parse("B3"));
        assert_eq!(event.attack_zone, Some(Zone::parse("B3").unwrap().mirror()));
    }

    #[test]
    fn normalize_keeps_unknown_zone_as_absent() {
        let record = RawTurnoverRecord {
            defense_zone: Some("Z99".to_string()),
            ..Default::default()
        };
        let event = normalize_turnover(&record);
        assert_eq!(event.defense_zone, None);
        assert_eq!(event.attack_zone, None);
    }

    #[test]
    fn normalize_shot_parses_legacy_category() {
        let record = RawShotRecord {
            category: Some("sfg".to_string()),
            outcome: Some("onTarget".to_string()),
            ..Default::default()
        };
        let shot = normalize_shot(&record);
        assert_eq!(shot.category, ShotCategory::SetPiece);
        assert_eq!(shot.outcome, ShotOutcome::OnTarget);
    }
}
