use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use shared_resources::direction::Direction;

/// Floors a single car has committed to visit.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stops {
    floors: BTreeSet<u8>,
}

impl Stops {
    pub fn new() -> Self {
        Stops { floors: BTreeSet::new() }
    }

    pub fn add(&mut self, floor: u8) -> bool {
        self.floors.insert(floor)
    }

    pub fn remove(&mut self, floor: u8) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors.contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.floors.iter().copied()
    }

    pub fn nearest_above(&self, floor: u8) -> Option<u8> {
        self.floors.range((Excluded(floor), Unbounded)).next().copied()
    }

    pub fn nearest_below(&self, floor: u8) -> Option<u8> {
        self.floors.range(..floor).next_back().copied()
    }

    /// Closest stop in either direction. On a tie the lower floor wins.
    pub fn closest_to(&self, floor: u8) -> Option<u8> {
        self.iter().min_by_key(|stop| stop.abs_diff(floor))
    }

    pub fn further_stops_in_direction(&self, floor: u8, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.nearest_above(floor).is_some(),
            Direction::Down => self.nearest_below(floor).is_some(),
            Direction::Idle => false,
        }
    }
}

impl FromIterator<u8> for Stops {
    fn from_iter<I: IntoIterator<Item = u8>>(floors: I) -> Self {
        Stops { floors: floors.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_floor_is_stored_once() {
        let mut stops = Stops::new();
        assert!(stops.add(3));
        assert!(!stops.add(3));
        assert_eq!(stops.len(), 1);
        assert!(stops.remove(3));
        assert!(!stops.remove(3));
        assert!(stops.is_empty());
    }

    #[test]
    fn neighbours_are_strictly_above_or_below() {
        let stops: Stops = [1, 4, 7].into_iter().collect();
        assert_eq!(stops.nearest_above(4), Some(7));
        assert_eq!(stops.nearest_below(4), Some(1));
        assert_eq!(stops.nearest_above(7), None);
        assert_eq!(stops.nearest_below(1), None);
        assert_eq!(stops.nearest_above(u8::MAX), None);
    }

    #[test]
    fn closest_prefers_the_lower_floor_on_ties() {
        let stops: Stops = [2, 6].into_iter().collect();
        assert_eq!(stops.closest_to(4), Some(2));
        assert_eq!(stops.closest_to(5), Some(6));
        assert_eq!(Stops::new().closest_to(5), None);
    }

    #[test]
    fn further_stops_follow_the_direction() {
        let stops: Stops = [2, 5].into_iter().collect();
        assert!(stops.further_stops_in_direction(3, Direction::Up));
        assert!(stops.further_stops_in_direction(3, Direction::Down));
        assert!(!stops.further_stops_in_direction(5, Direction::Up));
        assert!(!stops.further_stops_in_direction(2, Direction::Down));
        assert!(!stops.further_stops_in_direction(3, Direction::Idle));
    }
}
