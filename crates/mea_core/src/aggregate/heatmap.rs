//! Zone-keyed folds.
//!
//! Every heatmap is a pure fold over an event slice: a zone selector picks
//! the key, a value selector picks what is summed (a threat value, a PxT
//! value, or 1.0 for count mode). Events whose selector yields no zone are
//! excluded from the map and counted in the `unzoned` diagnostic; they are
//! never booked under a zero zone. Output maps are `BTreeMap` so serialized
//! reports keep a stable key order.

use crate::events::canonical::PlayerId;
use crate::pitch::Zone;
use fxhash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A zone-keyed accumulation plus the events that could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZoneAccumulation {
    pub map: BTreeMap<Zone, f64>,
    /// Events whose zone selector produced nothing.
    pub unzoned: u32,
}

impl ZoneAccumulation {
    /// Sum over all zones.
    pub fn total(&self) -> f64 {
        self.map.values().sum()
    }
}

/// Fold events into a zone-keyed value map.
pub fn aggregate_to_zones<T>(
    events: &[T],
    zone_of: impl Fn(&T) -> Option<Zone>,
    value_of: impl Fn(&T) -> f64,
) -> ZoneAccumulation {
    events.iter().fold(ZoneAccumulation::default(), |mut acc, event| {
        match zone_of(event) {
            Some(zone) => *acc.map.entry(zone).or_insert(0.0) += value_of(event),
            None => acc.unzoned += 1,
        }
        acc
    })
}

/// Fold events into a zone-keyed count map.
pub fn count_by_zone<T>(events: &[T], zone_of: impl Fn(&T) -> Option<Zone>) -> ZoneAccumulation {
    aggregate_to_zones(events, zone_of, |_| 1.0)
}

/// One player's share of a zone's accumulated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerContribution {
    pub player: PlayerId,
    pub value: f64,
    pub count: u32,
}

/// Per-zone player breakdown backing the "click a zone, list who did it
/// there" interaction. Within a zone, contributions are sorted by descending
/// value, then by player id so equal values order deterministically. Events
/// without a zone or without a player are skipped (they carry no attribution
/// target); the zone-level maps already account for them.
pub fn aggregate_by_player<T>(
    events: &[T],
    zone_of: impl Fn(&T) -> Option<Zone>,
    player_of: impl Fn(&T) -> Option<&PlayerId>,
    value_of: impl Fn(&T) -> f64,
) -> BTreeMap<Zone, Vec<PlayerContribution>> {
    let mut interim: BTreeMap<Zone, FxHashMap<PlayerId, (f64, u32)>> = BTreeMap::new();
    for event in events {
        let (Some(zone), Some(player)) = (zone_of(event), player_of(event)) else {
            continue;
        };
        let slot = interim.entry(zone).or_default().entry(player.clone()).or_insert((0.0, 0));
        slot.0 += value_of(event);
        slot.1 += 1;
    }

    interim
        .into_iter()
        .map(|(zone, players)| {
            let mut contributions: Vec<PlayerContribution> = players
                .into_iter()
                .map(|(player, (value, count))| PlayerContribution { player, value, count })
                .collect();
            contributions.sort_by(|a, b| {
                b.value
                    .partial_cmp(&a.value)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.player.cmp(&b.player))
            });
            (zone, contributions)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::canonical::ActionEvent;
    use proptest::prelude::*;

    fn action(end_zone: &str, sender: &str, pxt_end: f64) -> ActionEvent {
        ActionEvent {
            end_zone: Zone::parse(end_zone),
            sender: Some(sender.to_string()),
            xt_end: Some(pxt_end),
            ..Default::default()
        }
    }

    #[test]
    fn values_accumulate_under_the_selected_zone() {
        let events =
            vec![action("C7", "p1", 0.10), action("C7", "p2", 0.05), action("A1", "p1", 0.02)];
        let acc = aggregate_to_zones(&events, |a| a.end_zone, |a| a.xt_end.unwrap_or(0.0));
        assert!((acc.map[&Zone::parse("C7").unwrap()] - 0.15).abs() < 1e-12);
        assert!((acc.map[&Zone::parse("A1").unwrap()] - 0.02).abs() < 1e-12);
        assert_eq!(acc.unzoned, 0);
    }

    #[test]
    fn unzoned_events_are_counted_not_booked() {
        let events = vec![action("C7", "p1", 0.1), ActionEvent::default()];
        let acc = count_by_zone(&events, |a| a.end_zone);
        assert_eq!(acc.map.len(), 1);
        assert_eq!(acc.unzoned, 1);
        assert_eq!(acc.total(), 1.0);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let acc = count_by_zone::<ActionEvent>(&[], |a| a.end_zone);
        assert!(acc.map.is_empty());
        assert_eq!(acc.unzoned, 0);
    }

    #[test]
    fn player_breakdown_sorts_by_descending_value() {
        let events = vec![
            action("C7", "p_low", 0.02),
            action("C7", "p_high", 0.20),
            action("C7", "p_high", 0.10),
        ];
        let breakdown =
            aggregate_by_player(&events, |a| a.end_zone, |a| a.sender.as_ref(), |a| {
                a.xt_end.unwrap_or(0.0)
            });
        let zone = Zone::parse("C7").unwrap();
        let players = &breakdown[&zone];
        assert_eq!(players[0].player, "p_high");
        assert_eq!(players[0].count, 2);
        assert!((players[0].value - 0.30).abs() < 1e-12);
        assert_eq!(players[1].player, "p_low");
    }

    #[test]
    fn equal_values_order_by_player_id() {
        let events = vec![action("C7", "pb", 0.1), action("C7", "pa", 0.1)];
        let breakdown =
            aggregate_by_player(&events, |a| a.end_zone, |a| a.sender.as_ref(), |a| {
                a.xt_end.unwrap_or(0.0)
            });
        let players = &breakdown[&Zone::parse("C7").unwrap()];
        assert_eq!(players[0].player, "pa");
        assert_eq!(players[1].player, "pb");
    }

    proptest! {
        /// Conservation: a count-mode heatmap sums to the number of events
        /// with a resolvable zone key.
        #[test]
        fn count_mode_conserves_events(zone_indices in proptest::collection::vec(
            proptest::option::of(0usize..crate::pitch::ZONE_COUNT), 0..64,
        )) {
            let events: Vec<ActionEvent> = zone_indices
                .iter()
                .map(|idx| ActionEvent { end_zone: idx.and_then(Zone::from_index), ..Default::default() })
                .collect();
            let zoned = events.iter().filter(|e| e.end_zone.is_some()).count() as f64;
            let acc = count_by_zone(&events, |a| a.end_zone);
            prop_assert!((acc.total() - zoned).abs() < 1e-9);
            prop_assert_eq!(acc.unzoned as usize, events.len() - zoned as usize);
        }
    }
}
