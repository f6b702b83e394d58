/// ----- DOORS MODULE -----
/// Door cycle of a car: which calls get answered when the doors open,
/// and how long each phase of the open / wait / close sequence lasts.

use std::time::Duration;

use shared_resources::call::Call;
use shared_resources::call_registry::CallRegistry;
use shared_resources::config::Timing;
use shared_resources::direction::Direction;
use shared_resources::request::Request;

use crate::requests::Stops;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorPhase {
    Open,
    Wait,
    Close,
}

impl DoorPhase {
    pub fn duration(self, timing: &Timing) -> Duration {
        match self {
            DoorPhase::Open => timing.door_open,
            DoorPhase::Wait => timing.door_wait,
            DoorPhase::Close => timing.door_close,
        }
    }

    pub fn next(self) -> Option<DoorPhase> {
        match self {
            DoorPhase::Open => Some(DoorPhase::Wait),
            DoorPhase::Wait => Some(DoorPhase::Close),
            DoorPhase::Close => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub served: Vec<Request>,
    pub unserved: Vec<Request>,
}

/// A car with stops left ahead only answers the call in its own direction.
/// At a reversal point, or when idle, it answers both.
pub fn serve_requests_here(
    floor: u8,
    direction: Direction,
    stops: &Stops,
    calls: &CallRegistry,
) -> Service {
    let reversing = !stops.further_stops_in_direction(floor, direction);
    let mut service = Service::default();
    for call in Call::iter() {
        let request = Request::new(floor, call);
        if !calls.is_active(request) {
            continue;
        }
        if reversing || direction.to_call() == Some(call) {
            service.served.push(request);
        } else {
            service.unserved.push(request);
        }
    }
    service
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(active: &[Request]) -> CallRegistry {
        let mut calls = CallRegistry::new(6);
        for request in active {
            calls.activate(*request);
        }
        calls
    }

    #[test]
    fn moving_car_with_stops_ahead_serves_its_own_direction() {
        let calls = registry(&[Request::up(2), Request::down(2)]);
        let stops: Stops = [2, 4].into_iter().collect();
        let service = serve_requests_here(2, Direction::Up, &stops, &calls);
        assert_eq!(service.served, vec![Request::up(2)]);
        assert_eq!(service.unserved, vec![Request::down(2)]);
    }

    #[test]
    fn reversal_floor_serves_both_directions() {
        let calls = registry(&[Request::up(4), Request::down(4)]);
        let stops: Stops = [1, 4].into_iter().collect();
        let service = serve_requests_here(4, Direction::Up, &stops, &calls);
        assert_eq!(service.served, vec![Request::up(4), Request::down(4)]);
        assert!(service.unserved.is_empty());
    }

    #[test]
    fn idle_car_serves_everything_here() {
        let calls = registry(&[Request::up(3), Request::down(3)]);
        let stops: Stops = [3, 5].into_iter().collect();
        let service = serve_requests_here(3, Direction::Idle, &stops, &calls);
        assert_eq!(service.served.len(), 2);
    }

    #[test]
    fn inactive_calls_are_ignored() {
        let calls = registry(&[Request::down(1)]);
        let stops: Stops = [1, 0].into_iter().collect();
        let service = serve_requests_here(1, Direction::Down, &stops, &calls);
        assert_eq!(service.served, vec![Request::down(1)]);
        assert!(service.unserved.is_empty());
    }

    #[test]
    fn phases_run_open_wait_close() {
        let timing = Timing::default();
        assert_eq!(DoorPhase::Open.next(), Some(DoorPhase::Wait));
        assert_eq!(DoorPhase::Wait.next(), Some(DoorPhase::Close));
        assert_eq!(DoorPhase::Close.next(), None);
        assert_eq!(DoorPhase::Wait.duration(&timing), timing.door_wait);
    }
}
