//! Engine configuration.
//!
//! The dashboard stores a per-team configuration document next to the match
//! data; it deserializes straight into [`AnalysisConfig`]. Every field has a
//! default so a missing or partial document still yields a working engine.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Display score assigned to a KPI that exactly meets its target.
pub const SCORE_ANCHOR: f64 = 80.0;

/// Consequence-window lengths in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Counter-pressing check after a loss.
    pub counterpress_secs: f64,
    /// Short consequence window.
    pub short_secs: f64,
    /// Long consequence window.
    pub long_secs: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { counterpress_secs: 5.0, short_secs: 8.0, long_secs: 15.0 }
    }
}

/// Direction of a KPI scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiDirection {
    HigherIsBetter,
    LowerIsBetter,
}

/// Anchor points for one KPI: the raw value considered worst, the coached
/// target, and the raw value treated as a perfect 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSpec {
    pub label: String,
    pub target: f64,
    pub worst_bound: f64,
    pub best_bound: f64,
    pub direction: KpiDirection,
    /// Human-readable target line shown under the gauge.
    pub target_description: String,
}

impl KpiSpec {
    fn new(
        label: &str,
        target: f64,
        worst_bound: f64,
        best_bound: f64,
        direction: KpiDirection,
        target_description: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            target,
            worst_bound,
            best_bound,
            direction,
            target_description: target_description.to_string(),
        }
    }

    /// Contract check: the target must sit strictly between the bounds in
    /// the direction's ordering. A config document violating this is a
    /// programming/configuration error, not a data-quality issue.
    pub fn validate(&self) -> Result<()> {
        let ordered = match self.direction {
            KpiDirection::HigherIsBetter => {
                self.worst_bound < self.target && self.target < self.best_bound
            }
            KpiDirection::LowerIsBetter => {
                self.best_bound < self.target && self.target < self.worst_bound
            }
        };
        if ordered {
            Ok(())
        } else {
            Err(EngineError::InvalidKpiBounds {
                label: self.label.clone(),
                worst: self.worst_bound,
                target: self.target,
                best: self.best_bound,
            })
        }
    }
}

/// The KPI catalog. Each entry feeds the shared piecewise-linear normalizer
/// in [`crate::kpi`]; nothing here is metric-specific code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiTargets {
    /// Goals per shot, percent. Higher is better.
    pub shot_conversion: KpiSpec,
    /// Opponent penalty-area entries conceded, count. Lower is better.
    pub entries_conceded: KpiSpec,
    /// Losses answered within the grace period, percent. Higher is better.
    pub counterpress_reaction: KpiSpec,
    /// Losses inside the PM area, count. Lower is better.
    pub pm_area_losses: KpiSpec,
    /// Regains in the opponent half, count. Higher is better.
    pub opponent_half_regains: KpiSpec,
    /// Regains followed by a shot within the short window, percent.
    pub regain_shot_conversion: KpiSpec,
    /// Own penalty-area entries that produced a shot or goal, percent.
    pub entry_success: KpiSpec,
}

impl Default for KpiTargets {
    fn default() -> Self {
        Self {
            shot_conversion: KpiSpec::new(
                "Shot conversion",
                12.0,
                0.0,
                30.0,
                KpiDirection::HigherIsBetter,
                "Target: 12% of shots scored",
            ),
            entries_conceded: KpiSpec::new(
                "Box entries conceded",
                12.0,
                30.0,
                0.0,
                KpiDirection::LowerIsBetter,
                "Target: at most 12 entries against",
            ),
            counterpress_reaction: KpiSpec::new(
                "Counter-press reaction",
                60.0,
                0.0,
                100.0,
                KpiDirection::HigherIsBetter,
                "Target: react to 60% of losses in time",
            ),
            pm_area_losses: KpiSpec::new(
                "PM area losses",
                8.0,
                25.0,
                0.0,
                KpiDirection::LowerIsBetter,
                "Target: at most 8 losses in the PM area",
            ),
            opponent_half_regains: KpiSpec::new(
                "High regains",
                10.0,
                0.0,
                25.0,
                KpiDirection::HigherIsBetter,
                "Target: 10 regains in the opponent half",
            ),
            regain_shot_conversion: KpiSpec::new(
                "Regain to shot",
                15.0,
                0.0,
                40.0,
                KpiDirection::HigherIsBetter,
                "Target: shot within 8s after 15% of regains",
            ),
            entry_success: KpiSpec::new(
                "Entry success",
                50.0,
                0.0,
                85.0,
                KpiDirection::HigherIsBetter,
                "Target: 50% of box entries end in a shot",
            ),
        }
    }
}

impl KpiTargets {
    pub fn iter(&self) -> impl Iterator<Item = &KpiSpec> {
        [
            &self.shot_conversion,
            &self.entries_conceded,
            &self.counterpress_reaction,
            &self.pm_area_losses,
            &self.opponent_half_regains,
            &self.regain_shot_conversion,
            &self.entry_success,
        ]
        .into_iter()
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub windows: WindowConfig,
    pub score_anchor: f64,
    pub kpis: KpiTargets,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { windows: WindowConfig::default(), score_anchor: SCORE_ANCHOR, kpis: KpiTargets::default() }
    }
}

impl AnalysisConfig {
    /// Validate the contract-level invariants of a (possibly user-supplied)
    /// configuration document.
    pub fn validate(&self) -> Result<()> {
        for secs in [
            self.windows.counterpress_secs,
            self.windows.short_secs,
            self.windows.long_secs,
        ] {
            if secs <= 0.0 {
                return Err(EngineError::InvalidWindow { seconds: secs });
            }
        }
        for spec in self.kpis.iter() {
            spec.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        AnalysisConfig::default().validate().expect("defaults must be valid");
    }

    #[test]
    fn partial_document_falls_back_to_defaults() {
        let cfg: AnalysisConfig =
            serde_json::from_str(r#"{"windows": {"short_secs": 10.0}}"#).unwrap();
        assert_eq!(cfg.windows.short_secs, 10.0);
        assert_eq!(cfg.windows.long_secs, 15.0);
        assert_eq!(cfg.score_anchor, SCORE_ANCHOR);
    }

    #[test]
    fn non_positive_window_is_rejected() {
        let mut cfg = AnalysisConfig::default();
        cfg.windows.short_secs = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(crate::error::EngineError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn inverted_kpi_bounds_are_rejected() {
        let mut cfg = AnalysisConfig::default();
        cfg.kpis.shot_conversion.best_bound = -1.0;
        assert!(cfg.validate().is_err());
    }
}
