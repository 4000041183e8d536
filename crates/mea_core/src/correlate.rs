//! Consequence-window correlation.
//!
//! A possession sequence started by a trigger (a regain or a loss) ends
//! either when the window budget elapses or when possession changes again.
//! Each trigger therefore owns the half-open interval
//! `(t_i, min(t_i + w, t_{i+1})]`, where `t_{i+1}` is the next trigger of the
//! same kind; crediting a candidate past that bound would double-count it
//! against the next trigger's own window. The same trigger list can be
//! evaluated against several window lengths (5 s counter-pressing check,
//! 8 s and 15 s consequence stats) under the same exclusivity rule.
//!
//! Events without a valid (positive) timestamp take no part in correlation;
//! they still count in the zone and type aggregates.

use crate::error::{EngineError, Result};
use crate::events::canonical::{ActionEvent, AreaEntryEvent, ShotEvent, TurnoverEvent};
use crate::value::action_value;
use serde::Serialize;

/// Timestamp access shared by every candidate kind.
pub trait Timed {
    /// Seconds into the match video, when known.
    fn event_time(&self) -> Option<f64>;
}

impl Timed for ShotEvent {
    fn event_time(&self) -> Option<f64> {
        self.timestamp
    }
}

impl Timed for AreaEntryEvent {
    fn event_time(&self) -> Option<f64> {
        self.timestamp
    }
}

impl Timed for ActionEvent {
    fn event_time(&self) -> Option<f64> {
        self.timestamp
    }
}

impl Timed for TurnoverEvent {
    fn event_time(&self) -> Option<f64> {
        self.timestamp
    }
}

/// A usable event time: present, finite and positive.
fn valid_time<T: Timed>(event: &T) -> Option<f64> {
    event.event_time().filter(|t| t.is_finite() && *t > 0.0)
}

/// Attribution interval of one trigger: start exclusive, end inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t > self.start && t <= self.end
    }
}

/// Extract the valid trigger times, ascending. The sort is stable, so
/// triggers sharing a timestamp keep their input order and the earlier one
/// gets the degenerate (empty) window the exclusivity rule dictates.
pub fn trigger_times(triggers: &[TurnoverEvent]) -> Vec<f64> {
    let mut times: Vec<f64> = triggers.iter().filter_map(valid_time).collect();
    times.sort_by(f64::total_cmp);
    times
}

/// Build the attribution window of every trigger under the exclusivity rule.
pub fn consequence_windows(trigger_times: &[f64], window_secs: f64) -> Result<Vec<TimeWindow>> {
    if !window_secs.is_finite() || window_secs <= 0.0 {
        return Err(EngineError::InvalidWindow { seconds: window_secs });
    }
    Ok(trigger_times
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let mut end = start + window_secs;
            if let Some(&next) = trigger_times.get(i + 1) {
                end = end.min(next);
            }
            TimeWindow { start, end }
        })
        .collect())
}

/// Candidate events to evaluate against one trigger list, already filtered
/// to the required team side by the caller (own shots after regains,
/// conceded shots after losses, and so on).
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSet<'a> {
    pub shots: &'a [ShotEvent],
    pub entries: &'a [AreaEntryEvent],
    pub passes: &'a [ActionEvent],
    /// Possession changes the other way (e.g. own regains after a loss).
    pub opposite: &'a [TurnoverEvent],
}

/// Counts and value sums attributed to one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WindowSums {
    pub shots: u32,
    pub xg: f64,
    pub entries: u32,
    pub passes: u32,
    pub pxt: f64,
    pub opposite_events: u32,
}

impl WindowSums {
    fn accumulate(&mut self, other: &WindowSums) {
        self.shots += other.shots;
        self.xg += other.xg;
        self.entries += other.entries;
        self.passes += other.passes;
        self.pxt += other.pxt;
        self.opposite_events += other.opposite_events;
    }
}

/// Match-level means per trigger; all zero when there were no triggers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WindowAverages {
    pub shots: f64,
    pub xg: f64,
    pub entries: f64,
    pub passes: f64,
    pub pxt: f64,
    pub opposite_events: f64,
}

/// What one trigger collected inside its window.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TriggerConsequence {
    /// Index into the sorted valid-trigger sequence.
    pub trigger_index: usize,
    pub window: TimeWindow,
    pub sums: WindowSums,
}

/// Consequence statistics of one trigger list for one window length.
#[derive(Debug, Clone, Serialize)]
pub struct ConsequenceSummary {
    pub window_secs: f64,
    /// Valid triggers, including those with zero eligible candidates: the
    /// denominator for every percentage and per-trigger metric.
    pub trigger_count: u32,
    pub totals: WindowSums,
    pub averages: WindowAverages,
    /// Triggers whose window contained at least one shot / entry /
    /// opposite-kind event; numerators for conversion-rate metrics.
    pub triggers_with_shot: u32,
    pub triggers_with_entry: u32,
    pub triggers_with_opposite: u32,
    pub per_trigger: Vec<TriggerConsequence>,
}

impl ConsequenceSummary {
    fn empty(window_secs: f64) -> Self {
        Self {
            window_secs,
            trigger_count: 0,
            totals: WindowSums::default(),
            averages: WindowAverages::default(),
            triggers_with_shot: 0,
            triggers_with_entry: 0,
            triggers_with_opposite: 0,
            per_trigger: Vec::new(),
        }
    }

    /// Share of triggers answered by at least one shot, percent.
    pub fn shot_conversion_pct(&self) -> f64 {
        percentage(self.triggers_with_shot, self.trigger_count)
    }

    /// Share of triggers answered by at least one opposite-kind event,
    /// percent (the counter-pressing rate when the triggers are losses).
    pub fn opposite_conversion_pct(&self) -> f64 {
        percentage(self.triggers_with_opposite, self.trigger_count)
    }
}

fn percentage(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator) * 100.0
    }
}

fn window_sums(window: &TimeWindow, candidates: &CandidateSet<'_>) -> WindowSums {
    let mut sums = WindowSums::default();
    for shot in candidates.shots {
        if valid_time(shot).is_some_and(|t| window.contains(t)) {
            sums.shots += 1;
            sums.xg += shot.xg;
        }
    }
    for entry in candidates.entries {
        if valid_time(entry).is_some_and(|t| window.contains(t)) {
            sums.entries += 1;
        }
    }
    for pass in candidates.passes {
        if valid_time(pass).is_some_and(|t| window.contains(t)) {
            sums.passes += 1;
            sums.pxt += action_value(pass).pxt;
        }
    }
    for turnover in candidates.opposite {
        if valid_time(turnover).is_some_and(|t| window.contains(t)) {
            sums.opposite_events += 1;
        }
    }
    sums
}

/// Evaluate one trigger list against one window length.
pub fn correlate(
    triggers: &[TurnoverEvent],
    candidates: &CandidateSet<'_>,
    window_secs: f64,
) -> Result<ConsequenceSummary> {
    let times = trigger_times(triggers);
    let windows = consequence_windows(&times, window_secs)?;
    if windows.is_empty() {
        return Ok(ConsequenceSummary::empty(window_secs));
    }

    let mut totals = WindowSums::default();
    let mut triggers_with_shot = 0;
    let mut triggers_with_entry = 0;
    let mut triggers_with_opposite = 0;
    let per_trigger: Vec<TriggerConsequence> = windows
        .iter()
        .enumerate()
        .map(|(trigger_index, window)| {
            let sums = window_sums(window, candidates);
            totals.accumulate(&sums);
            if sums.shots > 0 {
                triggers_with_shot += 1;
            }
            if sums.entries > 0 {
                triggers_with_entry += 1;
            }
            if sums.opposite_events > 0 {
                triggers_with_opposite += 1;
            }
            TriggerConsequence { trigger_index, window: *window, sums }
        })
        .collect();

    let count = per_trigger.len() as u32;
    let divisor = f64::from(count);
    let averages = WindowAverages {
        shots: f64::from(totals.shots) / divisor,
        xg: totals.xg / divisor,
        entries: f64::from(totals.entries) / divisor,
        passes: f64::from(totals.passes) / divisor,
        pxt: totals.pxt / divisor,
        opposite_events: f64::from(totals.opposite_events) / divisor,
    };

    Ok(ConsequenceSummary {
        window_secs,
        trigger_count: count,
        totals,
        averages,
        triggers_with_shot,
        triggers_with_entry,
        triggers_with_opposite,
        per_trigger,
    })
}

/// Evaluate the same trigger list against several window lengths
/// independently, applying the exclusivity bound afresh for each length.
pub fn correlate_multi(
    triggers: &[TurnoverEvent],
    candidates: &CandidateSet<'_>,
    window_lengths: &[f64],
) -> Result<Vec<ConsequenceSummary>> {
    window_lengths.iter().map(|&w| correlate(triggers, candidates, w)).collect()
}
