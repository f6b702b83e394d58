/// ----- FSM MODULE -----
/// This module is the finite state machine controlling a single car.
/// The car is woken up every time its previous unit of work (one floor
/// of travel, or one phase of a door cycle) has run its course, decides
/// what to do next, and tells the caller how long to leave it alone.

use std::time::Duration;

use log::{debug, info};

use shared_resources::call_registry::CallRegistry;
use shared_resources::car_id::CarId;
use shared_resources::config::Timing;
use shared_resources::direction::Direction;
use shared_resources::indicators::Indicators;
use shared_resources::request::Request;

use crate::doors::{self, DoorPhase};
use crate::elevator_status::{Behaviour, CarStatus};
use crate::requests::Stops;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    After(Duration),
    Halt,
}

/// Outcome of one wake-up. `unserved` holds calls the car found active at
/// its floor but will not answer; they have to be dispatched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub resume: Resume,
    pub unserved: Vec<Request>,
}

impl Step {
    fn suspend(duration: Duration) -> Self {
        Step { resume: Resume::After(duration), unserved: Vec::new() }
    }

    fn halt() -> Self {
        Step { resume: Resume::Halt, unserved: Vec::new() }
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    id: CarId,
    floor: u8,
    stops: Stops,
    direction: Direction,
    behaviour: Behaviour,
    next_stop: Option<u8>,
}

impl Car {
    pub fn new(id: CarId) -> Self {
        Car {
            id,
            floor: 0,
            stops: Stops::new(),
            direction: Direction::Idle,
            behaviour: Behaviour::Idle,
            next_stop: None,
        }
    }

    pub fn from_status(status: &CarStatus) -> Self {
        Car {
            id: status.id,
            floor: status.floor,
            stops: status.stops.iter().copied().collect(),
            direction: status.direction,
            behaviour: status.behaviour,
            next_stop: status.next_stop,
        }
    }

    pub fn status(&self) -> CarStatus {
        CarStatus {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
            behaviour: self.behaviour,
            stops: self.stops.iter().collect(),
            next_stop: self.next_stop,
        }
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn behaviour(&self) -> Behaviour {
        self.behaviour
    }

    pub fn stops(&self) -> &Stops {
        &self.stops
    }

    /// True while a move or a door cycle is in progress.
    pub fn is_busy(&self) -> bool {
        self.behaviour != Behaviour::Idle
    }

    /// Returns true when the car was halted and has to be stepped right away.
    pub fn add_stop(&mut self, floor: u8) -> bool {
        if self.stops.add(floor) {
            debug!("{} takes a stop at floor {}", self.id, floor);
        }
        !self.is_busy()
    }

    /// Only meaningful when the current floor is one of the stops.
    pub fn should_stop(&self, calls: &CallRegistry) -> bool {
        match self.direction.to_call() {
            None => true,
            Some(call) => {
                calls.is_active(Request::new(self.floor, call))
                    || !self.stops.further_stops_in_direction(self.floor, self.direction)
            }
        }
    }

    pub fn step(
        &mut self,
        calls: &mut CallRegistry,
        timing: &Timing,
        indicators: &mut dyn Indicators,
    ) -> Step {
        if let Behaviour::DoorOpen(phase) = self.behaviour {
            if let Some(next) = phase.next() {
                if next == DoorPhase::Close {
                    indicators.report_door_state(self.id, false);
                }
                self.behaviour = Behaviour::DoorOpen(next);
                return Step::suspend(next.duration(timing));
            }
        }
        self.behaviour = Behaviour::Idle;
        self.control(calls, timing, indicators)
    }

    fn control(
        &mut self,
        calls: &mut CallRegistry,
        timing: &Timing,
        indicators: &mut dyn Indicators,
    ) -> Step {
        if self.stops.contains(self.floor) {
            if self.should_stop(calls) {
                return self.open_doors(calls, timing, indicators);
            }
            debug!("{} passes floor {} without stopping", self.id, self.floor);
        }
        if self.stops.is_empty() {
            return self.settle(indicators);
        }
        match self.next_target() {
            Some(target) if target != self.floor => self.move_towards(target, timing, indicators),
            _ => self.open_doors(calls, timing, indicators),
        }
    }

    fn next_target(&mut self) -> Option<u8> {
        let floor = self.floor;
        match self.direction {
            Direction::Up => match self.stops.nearest_above(floor) {
                Some(target) => Some(target),
                None => {
                    let target = self.stops.nearest_below(floor)?;
                    self.direction = Direction::Down;
                    Some(target)
                }
            },
            Direction::Down => match self.stops.nearest_below(floor) {
                Some(target) => Some(target),
                None => {
                    let target = self.stops.nearest_above(floor)?;
                    self.direction = Direction::Up;
                    Some(target)
                }
            },
            Direction::Idle => {
                let target = self.stops.closest_to(floor)?;
                self.direction = if target > floor { Direction::Up } else { Direction::Down };
                Some(target)
            }
        }
    }

    fn move_towards(&mut self, target: u8, timing: &Timing, indicators: &mut dyn Indicators) -> Step {
        self.floor = if target > self.floor { self.floor + 1 } else { self.floor - 1 };
        self.next_stop = Some(target);
        self.behaviour = Behaviour::Moving;
        indicators.report_position(self.id, self.floor, timing.travel);
        indicators.report_status(self.id, self.status_text());
        debug!("{} heads for floor {} via floor {}", self.id, target, self.floor);
        Step::suspend(timing.travel)
    }

    fn open_doors(
        &mut self,
        calls: &mut CallRegistry,
        timing: &Timing,
        indicators: &mut dyn Indicators,
    ) -> Step {
        let service = doors::serve_requests_here(self.floor, self.direction, &self.stops, calls);
        for request in &service.served {
            if calls.clear(*request) {
                indicators.set_button_light(*request, false);
                info!("{} serves call {}", self.id, request);
            }
        }
        self.stops.remove(self.floor);
        if self.next_stop == Some(self.floor) {
            self.next_stop = None;
        }
        self.behaviour = Behaviour::DoorOpen(DoorPhase::Open);
        indicators.report_door_state(self.id, true);
        indicators.report_status(self.id, self.status_text());
        Step {
            resume: Resume::After(DoorPhase::Open.duration(timing)),
            unserved: service.unserved,
        }
    }

    fn settle(&mut self, indicators: &mut dyn Indicators) -> Step {
        self.direction = Direction::Idle;
        self.next_stop = None;
        self.behaviour = Behaviour::Idle;
        indicators.report_status(self.id, self.status_text());
        debug!("{} is idle at floor {}", self.id, self.floor);
        Step::halt()
    }

    pub fn status_text(&self) -> String {
        match (self.behaviour, self.next_stop) {
            (Behaviour::DoorOpen(_), _) => format!("{} {}", self.direction.glyph(), self.behaviour.as_string()),
            (Behaviour::Idle, _) | (_, None) => {
                format!("{} {}", Direction::Idle.glyph(), Behaviour::Idle.as_string())
            }
            (_, Some(next)) => format!("{} {}", self.direction.glyph(), next),
        }
    }
}
