//! Static expected-threat (xT) value table.
//!
//! Each grid cell carries a fixed value describing how likely a possession in
//! that cell is to end in a goal. The table is data, not a model: values were
//! calibrated offline by the tagging side and are symmetric about the pitch
//! axis (row `A` equals row `H`, `B` equals `G`, and so on), rising steeply
//! toward the opponent goal line with the central corridor valued above the
//! lateral bands.

use super::grid::{Zone, GRID_COLS, GRID_ROWS};

/// Per-cell expected-threat values, row-major (`A1`..`A12`, then `B1`..).
const THREAT_TABLE: [[f64; GRID_COLS]; GRID_ROWS] = [
    // Row A (lateral)
    [0.003, 0.005, 0.007, 0.009, 0.011, 0.014, 0.018, 0.024, 0.033, 0.048, 0.070, 0.102],
    // Row B (lateral)
    [0.004, 0.006, 0.008, 0.010, 0.013, 0.016, 0.021, 0.028, 0.040, 0.060, 0.092, 0.140],
    // Row C (central)
    [0.005, 0.007, 0.009, 0.012, 0.015, 0.019, 0.025, 0.034, 0.050, 0.078, 0.125, 0.198],
    // Row D (central)
    [0.005, 0.007, 0.010, 0.013, 0.016, 0.021, 0.028, 0.038, 0.057, 0.089, 0.147, 0.246],
    // Row E (central)
    [0.005, 0.007, 0.010, 0.013, 0.016, 0.021, 0.028, 0.038, 0.057, 0.089, 0.147, 0.246],
    // Row F (central)
    [0.005, 0.007, 0.009, 0.012, 0.015, 0.019, 0.025, 0.034, 0.050, 0.078, 0.125, 0.198],
    // Row G (lateral)
    [0.004, 0.006, 0.008, 0.010, 0.013, 0.016, 0.021, 0.028, 0.040, 0.060, 0.092, 0.140],
    // Row H (lateral)
    [0.003, 0.005, 0.007, 0.009, 0.011, 0.014, 0.018, 0.024, 0.033, 0.048, 0.070, 0.102],
];

impl Zone {
    /// Expected-threat value of this cell, seen from the analyzed team's
    /// attacking perspective.
    #[inline]
    pub fn expected_threat(self) -> f64 {
        THREAT_TABLE[self.row()][self.col()]
    }

    /// Expected-threat value of the mirrored cell: what this location is
    /// worth to the opponent.
    #[inline]
    pub fn opponent_expected_threat(self) -> f64 {
        self.mirror().expected_threat()
    }
}
