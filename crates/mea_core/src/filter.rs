//! User-selected heatmap filters.
//!
//! The visualization layer posts the selected filter combination verbatim;
//! the engine treats it as plain function arguments. A combination matching
//! zero events is not an error: every query degrades to an empty map.

use crate::events::canonical::{ActionEvent, ActionType};
use crate::pitch::Zone;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which part of the pitch the heatmap should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneScope {
    #[default]
    All,
    OwnHalf,
    OpponentHalf,
    PmArea,
}

impl ZoneScope {
    pub fn contains(self, zone: Zone) -> bool {
        match self {
            ZoneScope::All => true,
            ZoneScope::OwnHalf => zone.is_own_half(),
            ZoneScope::OpponentHalf => !zone.is_own_half(),
            ZoneScope::PmArea => zone.is_pm_area(),
        }
    }
}

/// Pass/dribble selector for action heatmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTypeFilter {
    #[default]
    All,
    Pass,
    Dribble,
}

impl ActionTypeFilter {
    pub fn matches(self, action_type: ActionType) -> bool {
        match self {
            ActionTypeFilter::All => true,
            ActionTypeFilter::Pass => action_type == ActionType::Pass,
            ActionTypeFilter::Dribble => action_type == ActionType::Dribble,
        }
    }
}

/// Selectable outcome flags. The dashboard multi-select is OR-semantics: an
/// action passes the gate if any selected flag is set on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeFlag {
    P0,
    P1,
    P2,
    P3,
    P0Start,
    P1Start,
    P2Start,
    P3Start,
    Pk,
    Shot,
    Goal,
}

/// Attack/defense display toggle for turnover heatmaps. This only selects
/// which value is summed; the heatmap key stays the attack zone either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamView {
    #[default]
    Attack,
    Defense,
}

/// The full filter combination posted by the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapFilter {
    pub scope: ZoneScope,
    pub action_type: ActionTypeFilter,
    /// Empty set means no outcome gating.
    pub outcomes: BTreeSet<OutcomeFlag>,
    pub team_view: TeamView,
}

impl HeatmapFilter {
    /// Whether an action passes the type and outcome gates. Zone scoping is
    /// applied to the heatmap key zone separately, because the same action
    /// can be keyed by start or end zone depending on the query.
    pub fn matches_action(&self, action: &ActionEvent) -> bool {
        if !self.action_type.matches(action.action_type) {
            return false;
        }
        if self.outcomes.is_empty() {
            return true;
        }
        self.outcomes.iter().any(|flag| action.outcomes.has(*flag))
    }
}
