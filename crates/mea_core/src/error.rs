use thiserror::Error;

/// Engine errors.
///
/// Data-quality problems (missing fields, unresolvable zone labels, filters
/// matching nothing) are never errors: they are defaulted or reported through
/// [`crate::report::DataQuality`]. Only programming-contract violations
/// surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("consequence window must be positive, got {seconds}s")]
    InvalidWindow { seconds: f64 },

    #[error("invalid KPI bounds for '{label}': worst {worst}, target {target}, best {best}")]
    InvalidKpiBounds { label: String, worst: f64, target: f64, best: f64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
