//! # mea_core - Match Event Analytics Engine
//!
//! Pure, deterministic analytics over the tagged event streams of one
//! football match: a discretized pitch-zone value model, consequence-window
//! statistics after possession changes, zone/player heatmap aggregation, and
//! KPI scoring onto a common 0-100 scale.
//!
//! ## Properties
//! - Stateless: every output is a function of (events, filters, config)
//! - Never panics on malformed input; data-quality issues are defaulted or
//!   reported through diagnostics
//! - Inputs are immutable snapshots; aggregation is pure folding
//!
//! The surrounding dashboard (fetching, auth, rendering) lives elsewhere;
//! this crate is callable with plain in-memory structures.

pub mod aggregate;
pub mod config;
pub mod correlate;
pub mod error;
pub mod events;
pub mod filter;
pub mod kpi;
pub mod pitch;
pub mod report;
pub mod value;

// Re-export the main entry points
pub use config::{AnalysisConfig, KpiDirection, KpiSpec, KpiTargets, WindowConfig, SCORE_ANCHOR};
pub use error::{EngineError, Result};
pub use events::{
    build_match_events, ActionEvent, AreaEntryEvent, MatchContext, MatchEvents, MatchInput,
    ShotEvent, TurnoverEvent,
};
pub use filter::{ActionTypeFilter, HeatmapFilter, OutcomeFlag, TeamView, ZoneScope};
pub use pitch::Zone;
pub use report::{
    action_heatmap, analyze_match, turnover_heatmap, ActionHeatmapMode, ActionZoneKey,
    DataQuality, MatchReport,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn analysis_is_deterministic() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2", "home": true},
            "actions": [
                {"minute": 10, "startZone": "A1", "endZone": "C9", "xtStart": 0.003,
                 "xtEnd": 0.078, "packing": 3, "timestamp": 600.0, "senderId": "p4"}
            ],
            "regains": [
                {"tag": "regain", "minute": 9, "timestamp": 595.0, "zone": "C4", "teamId": "t1"}
            ],
            "shots": [
                {"minute": 10, "timestamp": 602.0, "xG": 0.22, "teamContext": "attack",
                 "outcome": "goal"}
            ]
        }))
        .unwrap();

        let config = AnalysisConfig::default();
        let a = serde_json::to_string(&analyze_match(&input, &config).unwrap()).unwrap();
        let b = serde_json::to_string(&analyze_match(&input, &config).unwrap()).unwrap();
        assert_eq!(a, b, "same snapshot must produce byte-identical reports");
    }

    #[test]
    fn inputs_are_never_mutated() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2"},
            "actions": [{"minute": 10, "endZone": "C7"}]
        }))
        .unwrap();
        let before = format!("{input:?}");
        let _ = analyze_match(&input, &AnalysisConfig::default()).unwrap();
        assert_eq!(before, format!("{input:?}"));
    }
}
