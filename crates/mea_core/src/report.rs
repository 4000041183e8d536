//! The analysis pipeline.
//!
//! `classify -> enrich -> { aggregate, correlate } -> normalize`, invoked
//! once per input snapshot. The dashboard calls [`analyze_match`] when a
//! match is selected and re-runs the cheap filtered queries
//! ([`action_heatmap`], [`turnover_heatmap`]) as the user toggles filters;
//! both paths are pure functions over the same classified snapshot.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::{
    aggregate_by_player, aggregate_to_zones, count_by_zone, counterpress_reaction_pct,
    opponent_half_regain_count, own_half_loss_count, per_90, pm_area_loss_count, pxt_by_half,
    HalfSplit, PlayerContribution, ZoneAccumulation,
};
use crate::config::AnalysisConfig;
use crate::correlate::{correlate, CandidateSet, ConsequenceSummary, Timed};
use crate::error::Result;
use crate::events::canonical::{
    ActionEvent, AreaEntryEvent, MatchEvents, ShotEvent, ShotOutcome, TeamContext, TurnoverEvent,
};
use crate::events::{build_match_events, ClassifierStats, MatchContext, MatchInput};
use crate::filter::{HeatmapFilter, OutcomeFlag, TeamView};
use crate::kpi::{score_kpi, KpiScore};
use crate::pitch::Zone;
use crate::value::{action_value, turnover_threat};

// ============================================================================
// Filtered heatmap queries
// ============================================================================

/// Which zone keys an action heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionZoneKey {
    Start,
    End,
}

/// What an action heatmap accumulates per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionHeatmapMode {
    /// Expected-threat delta.
    Threat,
    /// Packing-weighted delta.
    Pxt,
    Count,
}

/// Filtered action heatmap. Events failing the type/outcome gates are
/// excluded; events whose key zone resolves but falls outside the scope are
/// excluded quietly; only events with no resolvable key zone at all count as
/// unzoned.
pub fn action_heatmap(
    actions: &[ActionEvent],
    filter: &HeatmapFilter,
    key: ActionZoneKey,
    mode: ActionHeatmapMode,
) -> ZoneAccumulation {
    let mut acc = ZoneAccumulation::default();
    for action in actions.iter().filter(|a| filter.matches_action(a)) {
        let zone = match key {
            ActionZoneKey::Start => action.start_zone,
            ActionZoneKey::End => action.end_zone,
        };
        match zone {
            None => acc.unzoned += 1,
            Some(z) if filter.scope.contains(z) => {
                let value = match mode {
                    ActionHeatmapMode::Threat => action_value(action).delta,
                    ActionHeatmapMode::Pxt => action_value(action).pxt,
                    ActionHeatmapMode::Count => 1.0,
                };
                *acc.map.entry(z).or_insert(0.0) += value;
            }
            Some(_) => {}
        }
    }
    acc
}

/// Turnover heatmap. The key is ALWAYS the attack (mirrored) zone; the
/// attack/defense toggle only selects which threat value is summed under
/// that fixed key. This key/value decoupling is a product decision the
/// dashboard relies on: flipping the toggle recolors the map without moving
/// any cell.
pub fn turnover_heatmap(
    turnovers: &[TurnoverEvent],
    view: TeamView,
    count_mode: bool,
) -> ZoneAccumulation {
    aggregate_to_zones(
        turnovers,
        |t| t.attack_zone,
        |t| {
            if count_mode {
                1.0
            } else {
                let threat = turnover_threat(t);
                match view {
                    TeamView::Attack => threat.attack_xt,
                    TeamView::Defense => threat.defense_xt,
                }
            }
        },
    )
}

// ============================================================================
// Report structures
// ============================================================================

/// Unfiltered heatmap variants precomputed for the initial render.
#[derive(Debug, Clone, Serialize)]
pub struct ReportHeatmaps {
    /// PxT summed by the zone each action ended in.
    pub action_pxt: ZoneAccumulation,
    /// Threat delta summed by end zone.
    pub action_threat: ZoneAccumulation,
    pub action_count: ZoneAccumulation,
    /// Attack-zone keyed, attack-context threat.
    pub regain_threat_attack: ZoneAccumulation,
    /// Same fixed key, defense-context threat.
    pub regain_threat_defense: ZoneAccumulation,
    pub regain_count: ZoneAccumulation,
    pub loss_threat_attack: ZoneAccumulation,
    pub loss_threat_defense: ZoneAccumulation,
    pub loss_count: ZoneAccumulation,
}

/// Per-zone player breakdowns backing the zone-click drilldown.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerBreakdowns {
    /// Action PxT per end zone and sender.
    pub action_pxt: BTreeMap<Zone, Vec<PlayerContribution>>,
    /// Regains per attack zone and player (count-valued).
    pub regains: BTreeMap<Zone, Vec<PlayerContribution>>,
    /// Losses per attack zone and player (count-valued).
    pub losses: BTreeMap<Zone, Vec<PlayerContribution>>,
}

/// Scalar aggregates for the stat tables.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchTotals {
    pub action_count: u32,
    pub pxt_total: f64,
    pub threat_delta_total: f64,
    pub pxt_by_half: HalfSplit,
    /// Actions per outcome flag (end-zone and start-zone variants).
    pub outcome_counts: BTreeMap<OutcomeFlag, u32>,
    pub shots_for: u32,
    pub shots_against: u32,
    pub goals_for: u32,
    pub xg_for: f64,
    pub xg_against: f64,
    pub regain_count: u32,
    pub loss_count: u32,
    pub own_half_losses: u32,
    pub opponent_half_regains: u32,
    pub pm_area_losses: u32,
    pub entries_for: u32,
    pub entries_against: u32,
    pub successful_entries: u32,
}

/// Raw totals projected onto a 90-minute basis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Per90Rates {
    pub pxt: f64,
    pub regains: f64,
    pub losses: f64,
    pub entries_conceded: f64,
    pub shots_for: f64,
}

/// Consequence statistics per trigger kind and window length.
#[derive(Debug, Clone, Serialize)]
pub struct ConsequenceReport {
    /// What followed our regains within the short window.
    pub regain_short: ConsequenceSummary,
    pub regain_long: ConsequenceSummary,
    /// Counter-press check: our regains right after a loss.
    pub loss_counterpress: ConsequenceSummary,
    /// What the opponent made of our losses.
    pub loss_short: ConsequenceSummary,
    pub loss_long: ConsequenceSummary,
}

/// Data-quality diagnostics. None of these are errors: they document what
/// the engine had to default, drop from spatial aggregates, or leave out of
/// temporal correlation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataQuality {
    pub unzoned_actions: u32,
    pub unzoned_regains: u32,
    pub unzoned_losses: u32,
    /// Turnover records with no classifiable kind.
    pub unclassified: u32,
    /// Records whose classified kind contradicted their collection.
    pub mismatched: u32,
    /// The legacy combined list stood in for a scoped collection.
    pub used_fallback: bool,
    /// Events without a valid timestamp (excluded from correlation only).
    pub untimed_events: u32,
}

/// The complete analysis output for one match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub context: MatchContext,
    pub heatmaps: ReportHeatmaps,
    pub players: PlayerBreakdowns,
    pub totals: MatchTotals,
    pub per_90: Per90Rates,
    pub consequences: ConsequenceReport,
    pub kpis: Vec<KpiScore>,
    pub quality: DataQuality,
}

impl MatchReport {
    /// Serialize the report for the visualization layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run the full pipeline for one match snapshot.
///
/// Fails only on configuration-contract violations (non-positive window,
/// inverted KPI bounds); data-quality issues end up in
/// [`MatchReport::quality`].
pub fn analyze_match(input: &MatchInput, config: &AnalysisConfig) -> Result<MatchReport> {
    config.validate()?;

    let (events, classifier) = build_match_events(input);
    let team_id = input.context.team_id.as_str();

    let heatmaps = build_heatmaps(&events);
    let players = build_player_breakdowns(&events);
    let totals = build_totals(&events, team_id);
    let consequences = build_consequences(&events, team_id, config)?;
    let per_90_rates = build_per_90(&totals, input.context.total_minutes);
    let kpis = build_kpis(&totals, &events, &consequences, config);
    let quality = build_quality(&events, &heatmaps, classifier);

    Ok(MatchReport {
        context: input.context.clone(),
        heatmaps,
        players,
        totals,
        per_90: per_90_rates,
        consequences,
        kpis,
        quality,
    })
}

fn build_heatmaps(events: &MatchEvents) -> ReportHeatmaps {
    ReportHeatmaps {
        action_pxt: aggregate_to_zones(
            &events.actions,
            |a| a.end_zone,
            |a| action_value(a).pxt,
        ),
        action_threat: aggregate_to_zones(
            &events.actions,
            |a| a.end_zone,
            |a| action_value(a).delta,
        ),
        action_count: count_by_zone(&events.actions, |a| a.end_zone),
        regain_threat_attack: turnover_heatmap(&events.regains, TeamView::Attack, false),
        regain_threat_defense: turnover_heatmap(&events.regains, TeamView::Defense, false),
        regain_count: turnover_heatmap(&events.regains, TeamView::Attack, true),
        loss_threat_attack: turnover_heatmap(&events.losses, TeamView::Attack, false),
        loss_threat_defense: turnover_heatmap(&events.losses, TeamView::Defense, false),
        loss_count: turnover_heatmap(&events.losses, TeamView::Attack, true),
    }
}

fn build_player_breakdowns(events: &MatchEvents) -> PlayerBreakdowns {
    PlayerBreakdowns {
        action_pxt: aggregate_by_player(
            &events.actions,
            |a| a.end_zone,
            |a| a.sender.as_ref(),
            |a| action_value(a).pxt,
        ),
        regains: aggregate_by_player(
            &events.regains,
            |t| t.attack_zone,
            |t| t.player.as_ref(),
            |_| 1.0,
        ),
        losses: aggregate_by_player(
            &events.losses,
            |t| t.attack_zone,
            |t| t.player.as_ref(),
            |_| 1.0,
        ),
    }
}

fn build_totals(events: &MatchEvents, team_id: &str) -> MatchTotals {
    let mut totals = MatchTotals {
        action_count: events.actions.len() as u32,
        pxt_by_half: pxt_by_half(&events.actions),
        regain_count: events.regains.len() as u32,
        loss_count: events.losses.len() as u32,
        own_half_losses: own_half_loss_count(&events.losses),
        opponent_half_regains: opponent_half_regain_count(&events.regains),
        pm_area_losses: pm_area_loss_count(&events.losses),
        ..Default::default()
    };

    for action in &events.actions {
        let value = action_value(action);
        totals.pxt_total += value.pxt;
        totals.threat_delta_total += value.delta;
    }
    for flag in [
        OutcomeFlag::P0,
        OutcomeFlag::P1,
        OutcomeFlag::P2,
        OutcomeFlag::P3,
        OutcomeFlag::P0Start,
        OutcomeFlag::P1Start,
        OutcomeFlag::P2Start,
        OutcomeFlag::P3Start,
        OutcomeFlag::Pk,
        OutcomeFlag::Shot,
        OutcomeFlag::Goal,
    ] {
        let count = events.actions.iter().filter(|a| a.outcomes.has(flag)).count() as u32;
        totals.outcome_counts.insert(flag, count);
    }

    for shot in &events.shots {
        if shot.is_by(team_id) {
            totals.shots_for += 1;
            totals.xg_for += shot.xg;
            if shot.outcome == ShotOutcome::Goal {
                totals.goals_for += 1;
            }
        } else {
            totals.shots_against += 1;
            totals.xg_against += shot.xg;
        }
    }

    for entry in &events.entries {
        match entry.context {
            TeamContext::Attack => {
                totals.entries_for += 1;
                if entry.is_successful() {
                    totals.successful_entries += 1;
                }
            }
            TeamContext::Defense => totals.entries_against += 1,
        }
    }

    totals
}

fn build_consequences(
    events: &MatchEvents,
    team_id: &str,
    config: &AnalysisConfig,
) -> Result<ConsequenceReport> {
    let shots_for: Vec<ShotEvent> =
        events.shots.iter().filter(|s| s.is_by(team_id)).cloned().collect();
    let shots_against: Vec<ShotEvent> =
        events.shots.iter().filter(|s| !s.is_by(team_id)).cloned().collect();
    let entries_for: Vec<AreaEntryEvent> =
        events.entries.iter().filter(|e| e.context == TeamContext::Attack).cloned().collect();
    let entries_against: Vec<AreaEntryEvent> =
        events.entries.iter().filter(|e| e.context == TeamContext::Defense).cloned().collect();

    // After a regain: what WE generated before possession changed again.
    let regain_candidates = CandidateSet {
        shots: &shots_for,
        entries: &entries_for,
        passes: &events.actions,
        opposite: &events.losses,
    };
    // After a loss: what the OPPONENT generated, and whether we pressed the
    // ball back (our regains are the opposite-kind events).
    let loss_candidates = CandidateSet {
        shots: &shots_against,
        entries: &entries_against,
        passes: &[],
        opposite: &events.regains,
    };

    Ok(ConsequenceReport {
        regain_short: correlate(&events.regains, &regain_candidates, config.windows.short_secs)?,
        regain_long: correlate(&events.regains, &regain_candidates, config.windows.long_secs)?,
        loss_counterpress: correlate(
            &events.losses,
            &loss_candidates,
            config.windows.counterpress_secs,
        )?,
        loss_short: correlate(&events.losses, &loss_candidates, config.windows.short_secs)?,
        loss_long: correlate(&events.losses, &loss_candidates, config.windows.long_secs)?,
    })
}

fn build_per_90(totals: &MatchTotals, total_minutes: Option<f64>) -> Per90Rates {
    Per90Rates {
        pxt: per_90(totals.pxt_total, total_minutes),
        regains: per_90(f64::from(totals.regain_count), total_minutes),
        losses: per_90(f64::from(totals.loss_count), total_minutes),
        entries_conceded: per_90(f64::from(totals.entries_against), total_minutes),
        shots_for: per_90(f64::from(totals.shots_for), total_minutes),
    }
}

fn build_kpis(
    totals: &MatchTotals,
    events: &MatchEvents,
    consequences: &ConsequenceReport,
    config: &AnalysisConfig,
) -> Vec<KpiScore> {
    let anchor = config.score_anchor;
    let kpis = &config.kpis;

    let shot_conversion = if totals.shots_for == 0 {
        0.0
    } else {
        f64::from(totals.goals_for) / f64::from(totals.shots_for) * 100.0
    };
    let entry_success = if totals.entries_for == 0 {
        0.0
    } else {
        f64::from(totals.successful_entries) / f64::from(totals.entries_for) * 100.0
    };

    vec![
        score_kpi(&kpis.shot_conversion, shot_conversion, anchor),
        score_kpi(&kpis.entries_conceded, f64::from(totals.entries_against), anchor),
        score_kpi(
            &kpis.counterpress_reaction,
            counterpress_reaction_pct(&events.losses),
            anchor,
        ),
        score_kpi(&kpis.pm_area_losses, f64::from(totals.pm_area_losses), anchor),
        score_kpi(&kpis.opponent_half_regains, f64::from(totals.opponent_half_regains), anchor),
        score_kpi(
            &kpis.regain_shot_conversion,
            consequences.regain_short.shot_conversion_pct(),
            anchor,
        ),
        score_kpi(&kpis.entry_success, entry_success, anchor),
    ]
}

fn build_quality(
    events: &MatchEvents,
    heatmaps: &ReportHeatmaps,
    classifier: ClassifierStats,
) -> DataQuality {
    fn untimed<T: Timed>(items: &[T]) -> u32 {
        items
            .iter()
            .filter(|i| !i.event_time().is_some_and(|t| t.is_finite() && t > 0.0))
            .count() as u32
    }

    DataQuality {
        unzoned_actions: heatmaps.action_count.unzoned,
        unzoned_regains: heatmaps.regain_count.unzoned,
        unzoned_losses: heatmaps.loss_count.unzoned,
        unclassified: classifier.unclassified,
        mismatched: classifier.mismatched,
        used_fallback: classifier.used_fallback,
        untimed_events: untimed(&events.actions)
            + untimed(&events.regains)
            + untimed(&events.losses)
            + untimed(&events.shots)
            + untimed(&events.entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ActionTypeFilter, ZoneScope};
    use serde_json::json;

    fn scenario_input() -> MatchInput {
        serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2", "home": true},
            "actions": [
                {"minute": 10, "startZone": "A1", "endZone": "A3", "xtStart": 0.01,
                 "xtEnd": 0.05, "packing": 2, "p1": true, "senderId": "p7"},
                {"minute": 50, "startZone": "B2", "endZone": "B2", "packing": 0,
                 "senderId": "p8"},
                {"minute": 80, "startZone": "C5", "endZone": "C7", "xtStart": 0.02,
                 "xtEnd": 0.10, "packing": 1, "shot": true, "senderId": "p7"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn end_to_end_action_scenario() {
        let report = analyze_match(&scenario_input(), &AnalysisConfig::default()).unwrap();

        assert!((report.totals.pxt_total - 0.16).abs() < 1e-12);
        assert!((report.totals.pxt_by_half.first - 0.08).abs() < 1e-12);
        assert!((report.totals.pxt_by_half.second - 0.08).abs() < 1e-12);
        assert_eq!(report.totals.outcome_counts[&OutcomeFlag::P1], 1);
        assert_eq!(report.totals.outcome_counts[&OutcomeFlag::Shot], 1);
        assert_eq!(report.totals.action_count, 3);
        // 90 minutes assumed: per-90 equals the raw total.
        assert!((report.per_90.pxt - 0.16).abs() < 1e-12);
    }

    #[test]
    fn regain_consequence_scenario() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2", "home": false},
            "regains": [
                {"tag": "regain", "minute": 2, "timestamp": 100.0, "zone": "C4",
                 "teamId": "t1"}
            ],
            "shots": [
                {"minute": 2, "timestamp": 105.0, "xG": 0.3, "teamContext": "attack"},
                {"minute": 2, "timestamp": 112.0, "xG": 0.2, "teamContext": "attack"}
            ]
        }))
        .unwrap();

        let report = analyze_match(&input, &AnalysisConfig::default()).unwrap();
        assert!((report.consequences.regain_short.totals.xg - 0.3).abs() < 1e-12);
        assert_eq!(report.consequences.regain_short.totals.shots, 1);
        assert!((report.consequences.regain_long.totals.xg - 0.5).abs() < 1e-12);
        assert_eq!(report.consequences.regain_long.totals.shots, 2);
        assert_eq!(report.consequences.regain_short.shot_conversion_pct(), 100.0);
    }

    #[test]
    fn loss_consequences_use_conceded_events_and_own_regains() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2"},
            "losses": [
                {"tag": "loses", "minute": 30, "timestamp": 1800.0, "zone": "D5",
                 "teamId": "t1"}
            ],
            "regains": [
                {"tag": "regain", "minute": 30, "timestamp": 1803.0, "zone": "D7",
                 "teamId": "t1"}
            ],
            "shots": [
                {"minute": 30, "timestamp": 1804.0, "xG": 0.15, "teamContext": "defense"}
            ]
        }))
        .unwrap();

        let report = analyze_match(&input, &AnalysisConfig::default()).unwrap();
        // The counter-press window (5s) catches our regain at +3s.
        assert_eq!(report.consequences.loss_counterpress.totals.opposite_events, 1);
        assert_eq!(report.consequences.loss_counterpress.opposite_conversion_pct(), 100.0);
        // The conceded shot lands in the loss windows, not the regain ones.
        assert_eq!(report.consequences.loss_short.totals.shots, 1);
        assert_eq!(report.consequences.regain_short.totals.shots, 0);
    }

    #[test]
    fn turnover_heatmap_key_is_fixed_while_value_toggles() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2"},
            "regains": [
                {"tag": "regain", "minute": 5, "zone": "B3", "teamId": "t1",
                 "xtDefense": 0.2, "xtAttack": 0.7}
            ]
        }))
        .unwrap();

        let report = analyze_match(&input, &AnalysisConfig::default()).unwrap();
        let attack_zone = Zone::parse("B3").unwrap().mirror();

        // Same single key under both views...
        let attack_keys: Vec<_> = report.heatmaps.regain_threat_attack.map.keys().collect();
        let defense_keys: Vec<_> = report.heatmaps.regain_threat_defense.map.keys().collect();
        assert_eq!(attack_keys, vec![&attack_zone]);
        assert_eq!(defense_keys, vec![&attack_zone]);
        // ...with the toggled value.
        assert_eq!(report.heatmaps.regain_threat_attack.map[&attack_zone], 0.7);
        assert_eq!(report.heatmaps.regain_threat_defense.map[&attack_zone], 0.2);
    }

    #[test]
    fn kpi_catalog_is_complete_and_scored() {
        let report = analyze_match(&scenario_input(), &AnalysisConfig::default()).unwrap();
        assert_eq!(report.kpis.len(), 7);
        for kpi in &report.kpis {
            assert!(
                (0.0..=100.0).contains(&kpi.score),
                "{} scored out of range: {}",
                kpi.label,
                kpi.score
            );
        }
    }

    #[test]
    fn empty_input_yields_zeroed_report_not_an_error() {
        let report = analyze_match(&MatchInput::default(), &AnalysisConfig::default()).unwrap();
        assert_eq!(report.totals.action_count, 0);
        assert!(report.heatmaps.action_pxt.map.is_empty());
        assert_eq!(report.consequences.regain_short.trigger_count, 0);
        assert_eq!(report.kpis.len(), 7);
    }

    #[test]
    fn invalid_config_is_the_only_failure_path() {
        let mut config = AnalysisConfig::default();
        config.windows.counterpress_secs = -1.0;
        assert!(analyze_match(&MatchInput::default(), &config).is_err());
    }

    #[test]
    fn quality_reports_unzoned_and_untimed_events() {
        let input: MatchInput = serde_json::from_value(json!({
            "context": {"team_id": "t1", "opponent_id": "t2"},
            "actions": [
                {"minute": 10, "endZone": "Q99"},
                {"minute": 12, "endZone": "C7", "timestamp": 700.0}
            ]
        }))
        .unwrap();
        let report = analyze_match(&input, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.quality.unzoned_actions, 1);
        assert_eq!(report.quality.untimed_events, 1);
        // The unzoned action still counts in the ungated total.
        assert_eq!(report.totals.action_count, 2);
    }

    #[test]
    fn filtered_action_heatmap_applies_scope_and_outcome_gates() {
        let input = scenario_input();
        let (events, _) = build_match_events(&input);

        let mut filter = HeatmapFilter::default();
        filter.outcomes.insert(OutcomeFlag::Shot);
        let shot_only =
            action_heatmap(&events.actions, &filter, ActionZoneKey::End, ActionHeatmapMode::Count);
        assert_eq!(shot_only.total(), 1.0, "only the shot-flagged action passes");

        let scoped = HeatmapFilter { scope: ZoneScope::OwnHalf, ..Default::default() };
        let own_half =
            action_heatmap(&events.actions, &scoped, ActionZoneKey::End, ActionHeatmapMode::Count);
        // End zones A3, B2 are own half; C7 is not.
        assert_eq!(own_half.total(), 2.0);
        assert_eq!(own_half.unzoned, 0, "out-of-scope events are not unzoned");

        let typed = HeatmapFilter { action_type: ActionTypeFilter::Dribble, ..Default::default() };
        let dribbles =
            action_heatmap(&events.actions, &typed, ActionZoneKey::End, ActionHeatmapMode::Count);
        assert!(dribbles.map.is_empty(), "no dribbles tagged: empty result, no error");
    }

    #[test]
    fn report_serializes_with_zone_labels_as_keys() {
        let report = analyze_match(&scenario_input(), &AnalysisConfig::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["heatmaps"]["action_pxt"]["map"].get("A3").is_some());
    }
}
