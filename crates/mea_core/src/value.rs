//! Action and turnover value model.
//!
//! An action's worth is the expected-threat delta between its end and start
//! zones, and its packing-weighted value (PxT) is that delta times the
//! opponents bypassed. Turnover threat values follow a fixed fallback chain:
//! explicit tagged value, then the static zone table, then zero. Every
//! aggregate that reports threat sums goes through these two functions, so
//! separately computed totals cannot disagree on the fallback.

use crate::events::canonical::{ActionEvent, TurnoverEvent};
use serde::Serialize;

/// Computed value of one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ActionValue {
    /// `end xT - start xT`, missing values read as 0.
    pub delta: f64,
    /// `delta * packing points`, missing packing reads as 0.
    pub pxt: f64,
}

pub fn action_value(action: &ActionEvent) -> ActionValue {
    let delta = action.xt_end.unwrap_or(0.0) - action.xt_start.unwrap_or(0.0);
    ActionValue { delta, pxt: delta * action.packing as f64 }
}

/// Threat values of a possession change, after the fallback chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TurnoverThreat {
    /// Value of the location to the acting team's defense.
    pub defense_xt: f64,
    /// Value of the mirrored location to the attack.
    pub attack_xt: f64,
}

pub fn turnover_threat(event: &TurnoverEvent) -> TurnoverThreat {
    let defense_xt = event
        .xt_defense
        .or_else(|| event.defense_zone.map(|z| z.expected_threat()))
        .unwrap_or(0.0);
    let attack_xt = event
        .xt_attack
        .or_else(|| event.defense_zone.map(|z| z.opponent_expected_threat()))
        .unwrap_or(0.0);
    TurnoverThreat { defense_xt, attack_xt }
}
