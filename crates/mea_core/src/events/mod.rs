//! Event ingestion: raw store records, canonical shapes, classification.

pub mod canonical;
pub mod classify;
pub mod raw;

use serde::{Deserialize, Serialize};

pub use canonical::{
    ActionEvent, ActionType, AreaEntryEvent, MatchEvents, OutcomeFlags, PlayerId, Reaction,
    ShotCategory, ShotEvent, ShotOutcome, TeamContext, TeamId, TurnoverEvent,
};
pub use classify::{classify, ClassifierStats, EventKind};
pub use raw::{RawActionRecord, RawEntryRecord, RawShotRecord, RawTurnoverRecord};

/// Context for the match under analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchContext {
    /// The analyzed team's store id.
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    /// Whether the analyzed team played at home.
    pub home: bool,
    pub kickoff: Option<chrono::NaiveDate>,
    /// Minutes actually played; per-90 normalization assumes 90 when absent.
    pub total_minutes: Option<f64>,
}

/// The complete raw input for one match: the five event collections as
/// fetched, plus the legacy combined turnover list some seasons were tagged
/// into. Loaded wholesale; the engine never mutates it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchInput {
    pub context: MatchContext,
    pub actions: Vec<RawActionRecord>,
    /// Team-scoped regain collection (may be empty or mis-tagged).
    pub regains: Vec<RawTurnoverRecord>,
    /// Team-scoped loss collection (may be empty or mis-tagged).
    pub losses: Vec<RawTurnoverRecord>,
    /// Legacy combined turnover list, classified on the fly whenever a
    /// team-scoped collection filters to empty.
    pub combined: Vec<RawTurnoverRecord>,
    pub shots: Vec<RawShotRecord>,
    pub entries: Vec<RawEntryRecord>,
}

impl MatchInput {
    /// Decode a raw input document as fetched from the store.
    pub fn from_json(json: &str) -> serde_json::Result<MatchInput> {
        serde_json::from_str(json)
    }
}

/// Classify and normalize a raw input into the canonical snapshot.
pub fn build_match_events(input: &MatchInput) -> (MatchEvents, ClassifierStats) {
    let team_id = input.context.team_id.as_str();
    let mut stats = ClassifierStats::default();

    let regains =
        classify::collect_kind(&input.regains, &input.combined, team_id, EventKind::Regain, &mut stats);
    let losses =
        classify::collect_kind(&input.losses, &input.combined, team_id, EventKind::Loss, &mut stats);
    if stats.used_fallback {
        stats.unclassified += classify::count_unclassified(&input.combined, team_id);
    }

    let events = MatchEvents {
        actions: input.actions.iter().map(classify::normalize_action).collect(),
        regains,
        losses,
        shots: input.shots.iter().map(classify::normalize_shot).collect(),
        entries: input.entries.iter().map(classify::normalize_entry).collect(),
    };
    (events, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_separates_kinds_from_one_combined_list() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2", "home": true},
            "combined": [
                {"tag": "regain", "minute": 5, "zone": "C8"},
                {"tag": "loses", "minute": 9, "zone": "D5"},
                {"minute": 11, "teammatesBehindBall": 6},
                {"minute": 14, "badReaction": true}
            ]
        }))
        .unwrap();

        let (events, stats) = build_match_events(&input);
        assert_eq!(events.regains.len(), 2, "tagged + inferred regain");
        assert_eq!(events.losses.len(), 2, "tagged + legacy-flag loss");
        assert!(stats.used_fallback);
        assert_eq!(stats.unclassified, 0);
    }

    #[test]
    fn combined_list_unknowns_are_counted_once() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1"},
            "combined": [
                {"tag": "regain", "minute": 5},
                {"minute": 7}
            ]
        }))
        .unwrap();

        // Both kinds fall back to the combined list; the bare record must
        // show up once in the diagnostics, not once per kind.
        let (_, stats) = build_match_events(&input);
        assert_eq!(stats.unclassified, 1);
    }

    #[test]
    fn empty_input_builds_empty_snapshot() {
        let (events, stats) = build_match_events(&MatchInput::default());
        assert!(events.actions.is_empty());
        assert!(events.regains.is_empty());
        assert_eq!(stats, ClassifierStats::default());
    }
}
