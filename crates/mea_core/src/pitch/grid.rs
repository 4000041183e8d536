//! Discrete pitch grid.
//!
//! The pitch is quantized into 8 rows (letters `A`-`H`, touchline to
//! touchline) by 12 columns (numbers `1`-`12`, own goal line to opponent goal
//! line). A [`Zone`] is one of the 96 cells, stored as the row-major index
//! `row * 12 + col`. All classification is a pure lookup: column decides the
//! half, row decides the lateral band, and a fixed 16-cell set around the
//! centre circle forms the PM area used for loss sensitivity analysis.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const GRID_ROWS: usize = 8;
pub const GRID_COLS: usize = 12;
pub const ZONE_COUNT: usize = GRID_ROWS * GRID_COLS;

const ROW_LETTERS: [char; GRID_ROWS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// One cell of the 8x12 pitch grid.
///
/// Serializes as its label (`"A1"`..`"H12"`) so zone-keyed maps stay readable
/// in JSON reports. Unknown labels never panic: [`Zone::parse`] returns
/// `None` and callers exclude the event from zone-keyed aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Zone(u8);

impl Zone {
    /// Parse a zone label such as `"C7"`. Case-insensitive on the row letter.
    pub fn parse(label: &str) -> Option<Zone> {
        let mut chars = label.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let row = ROW_LETTERS.iter().position(|&c| c == letter)?;
        let col: usize = chars.as_str().parse().ok()?;
        if !(1..=GRID_COLS).contains(&col) {
            return None;
        }
        Some(Zone((row * GRID_COLS + (col - 1)) as u8))
    }

    /// Build a zone from a raw row-major cell index.
    pub fn from_index(index: usize) -> Option<Zone> {
        if index < ZONE_COUNT {
            Some(Zone(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based row (touchline `A` = 0).
    #[inline]
    pub fn row(self) -> usize {
        self.index() / GRID_COLS
    }

    /// 0-based column (own goal line = 0).
    #[inline]
    pub fn col(self) -> usize {
        self.index() % GRID_COLS
    }

    /// The label used by the tagging tool, e.g. `"C7"`.
    pub fn label(self) -> String {
        format!("{}{}", ROW_LETTERS[self.row()], self.col() + 1)
    }

    /// The point-symmetric counterpart: `row' = 7 - row`, `col' = 11 - col`.
    ///
    /// Mirroring maps a defensive location onto the equivalent attacking
    /// location and is an involution.
    #[inline]
    pub fn mirror(self) -> Zone {
        let row = GRID_ROWS - 1 - self.row();
        let col = GRID_COLS - 1 - self.col();
        Zone((row * GRID_COLS + col) as u8)
    }

    /// Own-half membership is decided by column alone (labels 1-6).
    #[inline]
    pub fn is_own_half(self) -> bool {
        self.col() <= 5
    }

    /// Lateral bands are the outer two rows on each touchline (`A`, `B`,
    /// `G`, `H`); rows `C`-`F` are the central corridor.
    #[inline]
    pub fn is_lateral(self) -> bool {
        let row = self.row();
        row < 2 || row >= GRID_ROWS - 2
    }

    /// Membership in the fixed PM area (see [`PM_AREA_ZONES`]).
    pub fn is_pm_area(self) -> bool {
        PM_AREA_ZONES.contains(&self)
    }

    /// Iterate all 96 zones in index order.
    pub fn all() -> impl Iterator<Item = Zone> {
        (0..ZONE_COUNT).map(|i| Zone(i as u8))
    }
}

/// The 16 sensitivity-flagged central zones: rows `C`-`F` crossed with label
/// columns 5-8, straddling the halfway line. Losses here feed a dedicated
/// KPI because turnovers in this corridor expose the defensive line.
pub static PM_AREA_ZONES: Lazy<Vec<Zone>> = Lazy::new(|| {
    let mut zones = Vec::with_capacity(16);
    for row in 2..=5 {
        for col in 4..=7 {
            zones.push(Zone((row * GRID_COLS + col) as u8));
        }
    }
    zones
});

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> String {
        zone.label()
    }
}

impl TryFrom<String> for Zone {
    type Error = String;

    fn try_from(label: String) -> std::result::Result<Zone, String> {
        Zone::parse(&label).ok_or_else(|| format!("unknown zone label '{label}'"))
    }
}
