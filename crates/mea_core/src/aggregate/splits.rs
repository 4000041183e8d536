//! Half splits, own/opponent-half tallies and per-90 normalization.

use crate::events::canonical::{ActionEvent, Reaction, TurnoverEvent};
use crate::value::action_value;
use serde::Serialize;

/// Minute boundary between the halves. Stoppage-time events are tagged
/// 45.x / 90.x by the capture tool, so `minute <= 45` covers first-half
/// stoppage time.
pub const HALF_BOUNDARY_MINUTE: f64 = 45.0;

#[inline]
pub fn is_first_half(minute: f64) -> bool {
    minute <= HALF_BOUNDARY_MINUTE
}

/// A figure split by half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HalfSplit {
    pub first: f64,
    pub second: f64,
}

impl HalfSplit {
    pub fn total(&self) -> f64 {
        self.first + self.second
    }
}

/// PxT accumulated per half.
pub fn pxt_by_half(actions: &[ActionEvent]) -> HalfSplit {
    actions.iter().fold(HalfSplit::default(), |mut split, action| {
        let pxt = action_value(action).pxt;
        if is_first_half(action.minute) {
            split.first += pxt;
        } else {
            split.second += pxt;
        }
        split
    })
}

/// Count per half of the actions matching a predicate.
pub fn count_by_half(
    actions: &[ActionEvent],
    predicate: impl Fn(&ActionEvent) -> bool,
) -> HalfSplit {
    actions.iter().filter(|a| predicate(a)).fold(HalfSplit::default(), |mut split, action| {
        if is_first_half(action.minute) {
            split.first += 1.0;
        } else {
            split.second += 1.0;
        }
        split
    })
}

/// Losses in the own half. A loss where the ball immediately left the pitch
/// does not expose the team, so out-of-bounds losses are excluded here.
pub fn own_half_loss_count(losses: &[TurnoverEvent]) -> u32 {
    losses
        .iter()
        .filter(|l| !l.out_of_bounds)
        .filter(|l| l.defense_zone.is_some_and(|z| z.is_own_half()))
        .count() as u32
}

/// Losses in the opponent half; the out-of-bounds flag does not apply there.
pub fn opponent_half_loss_count(losses: &[TurnoverEvent]) -> u32 {
    losses.iter().filter(|l| l.defense_zone.is_some_and(|z| !z.is_own_half())).count() as u32
}

/// Regains won in the opponent half (high regains).
pub fn opponent_half_regain_count(regains: &[TurnoverEvent]) -> u32 {
    regains.iter().filter(|r| r.defense_zone.is_some_and(|z| !z.is_own_half())).count() as u32
}

/// Losses inside the sensitivity-flagged PM area.
pub fn pm_area_loss_count(losses: &[TurnoverEvent]) -> u32 {
    losses.iter().filter(|l| l.defense_zone.is_some_and(|z| z.is_pm_area())).count() as u32
}

/// Share of losses answered in time within the grace period, percent, over
/// the losses where reaction quality applies.
pub fn counterpress_reaction_pct(losses: &[TurnoverEvent]) -> f64 {
    let mut in_time = 0u32;
    let mut applicable = 0u32;
    for loss in losses {
        match loss.reaction {
            Some(Reaction::InTime) => {
                in_time += 1;
                applicable += 1;
            }
            Some(Reaction::Poor) => applicable += 1,
            Some(Reaction::NotApplicable) | None => {}
        }
    }
    if applicable == 0 {
        0.0
    } else {
        f64::from(in_time) / f64::from(applicable) * 100.0
    }
}

/// Normalize a raw match total onto a 90-minute basis. With 90 (or unknown)
/// minutes the multiplier is 1 and the value passes through unchanged.
pub fn per_90(raw: f64, total_minutes: Option<f64>) -> f64 {
    let minutes = match total_minutes {
        Some(m) if m > 0.0 => m,
        _ => 90.0,
    };
    raw * 90.0 / minutes
}
