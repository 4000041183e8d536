//! Aggregation: zone-keyed heatmaps, player breakdowns, splits, per-90.

pub mod heatmap;
pub mod splits;

pub use heatmap::{
    aggregate_by_player, aggregate_to_zones, count_by_zone, PlayerContribution, ZoneAccumulation,
};
pub use splits::{
    count_by_half, counterpress_reaction_pct, is_first_half, own_half_loss_count, per_90,
    pm_area_loss_count, pxt_by_half, opponent_half_loss_count, opponent_half_regain_count,
    HalfSplit, HALF_BOUNDARY_MINUTE,
};
