//! KPI display scoring.
//!
//! Every KPI gauge on the dashboard runs through the same piecewise-linear
//! normalizer: the configured target maps to the anchor score, the worst
//! bound to 0, the best bound to 100, linear in between and clamped outside.
//! For "lower is better" metrics the raw axis is inverted (0 conceded maps
//! to 100) but the scoring code is the same; the normalizer is
//! metric-agnostic and parameterized, never duplicated per metric.

use crate::config::{KpiDirection, KpiSpec};
use serde::Serialize;

/// Map a raw metric value onto the 0-100 display scale.
///
/// `anchor` is the score awarded exactly at `target` (80 in the default
/// configuration). Bounds are interpreted by `direction`: for
/// `HigherIsBetter`, `worst_bound < target < best_bound`; for
/// `LowerIsBetter` the raw axis runs the other way
/// (`best_bound < target < worst_bound`). Degenerate segments (a bound
/// equal to the target) collapse to a step at the target rather than
/// dividing by zero.
pub fn score(
    actual: f64,
    target: f64,
    worst_bound: f64,
    best_bound: f64,
    direction: KpiDirection,
    anchor: f64,
) -> f64 {
    let value = match direction {
        KpiDirection::HigherIsBetter => {
            if actual <= worst_bound {
                0.0
            } else if actual >= best_bound {
                100.0
            } else if actual <= target {
                segment(actual, worst_bound, target, 0.0, anchor)
            } else {
                segment(actual, target, best_bound, anchor, 100.0)
            }
        }
        KpiDirection::LowerIsBetter => {
            if actual <= best_bound {
                100.0
            } else if actual >= worst_bound {
                0.0
            } else if actual <= target {
                segment(actual, best_bound, target, 100.0, anchor)
            } else {
                segment(actual, target, worst_bound, anchor, 0.0)
            }
        }
    };
    value.clamp(0.0, 100.0)
}

/// Linear interpolation over one segment of the raw axis.
fn segment(actual: f64, from: f64, to: f64, from_score: f64, to_score: f64) -> f64 {
    let span = to - from;
    if span.abs() < f64::EPSILON {
        return to_score;
    }
    from_score + (actual - from) / span * (to_score - from_score)
}

/// One scored KPI as shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct KpiScore {
    pub label: String,
    pub actual: f64,
    pub score: f64,
    pub target_description: String,
}

/// Score one raw value against its configured spec.
pub fn score_kpi(spec: &KpiSpec, actual: f64, anchor: f64) -> KpiScore {
    KpiScore {
        label: spec.label.clone(),
        actual,
        score: score(actual, spec.target, spec.worst_bound, spec.best_bound, spec.direction, anchor),
        target_description: spec.target_description.clone(),
    }
}
