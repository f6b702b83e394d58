/// ----- SIMULATION MODULE -----
/// Ties the bank together: the cars, the hall calls and the clock. Hall
/// calls come in through `request_call`, time moves forward through
/// `step` / `advance_to`, and everything the outside world should see is
/// published on the `Indicators` the simulation was built with.

use std::time::Duration;

use log::{debug, info, warn};

use car::elevator_status::CarStatus;
use car::{Car, Resume};
use shared_resources::call::Call;
use shared_resources::call_registry::CallRegistry;
use shared_resources::car_id::CarId;
use shared_resources::config::{ConfigError, SimulationConfig};
use shared_resources::indicators::Indicators;
use shared_resources::request::Request;

use crate::timeline::Timeline;

pub struct Simulation<I: Indicators> {
    config: SimulationConfig,
    cars: Vec<Car>,
    calls: CallRegistry,
    timeline: Timeline,
    indicators: I,
}

impl<I: Indicators> Simulation<I> {
    pub fn initialize(config: SimulationConfig, indicators: I) -> Result<Self, ConfigError> {
        config.validate()?;
        let cars = (0..usize::from(config.num_cars)).map(|i| Car::new(CarId(i))).collect();
        let calls = CallRegistry::new(config.num_floors);
        let mut simulation = Simulation {
            config,
            cars,
            calls,
            timeline: Timeline::new(),
            indicators,
        };

        // CLEAR ALL LIGHTS
        for floor in 0..simulation.calls.num_floors() {
            for call in Call::iter() {
                let request = Request::new(floor, call);
                if simulation.calls.exists(request) {
                    simulation.indicators.set_button_light(request, false);
                }
            }
        }
        for car in &simulation.cars {
            simulation.indicators.report_position(car.id(), car.floor(), Duration::ZERO);
            simulation.indicators.report_status(car.id(), car.status_text());
        }

        info!(
            "initialized {} cars over {} floors",
            simulation.config.num_cars, simulation.config.num_floors
        );
        Ok(simulation)
    }

    /// Registers a hall call and hands it to a car. Returns false when the
    /// call was already pending or names a button that does not exist.
    pub fn request_call(&mut self, request: Request) -> bool {
        if !self.calls.exists(request) {
            warn!("there is no {} button, ignoring call", request);
            return false;
        }
        if !self.calls.activate(request) {
            debug!("call {} is already pending", request);
            return false;
        }
        self.indicators.set_button_light(request, true);
        info!("call {} registered at {:?}", request, self.timeline.now());
        self.dispatch(request);
        true
    }

    fn dispatch(&mut self, request: Request) {
        if let Some(assignment) = dispatcher::assign(&mut self.cars, request, self.config.num_floors) {
            if assignment.needs_step {
                self.run_car(assignment.car);
            }
        }
    }

    fn run_car(&mut self, id: CarId) {
        let Some(car) = self.cars.get_mut(id.index()) else {
            warn!("wake-up for unknown {}", id);
            return;
        };
        let step = car.step(&mut self.calls, &self.config.timing, &mut self.indicators);
        if let Resume::After(delay) = step.resume {
            self.timeline.schedule(id, delay);
        }
        for request in step.unserved {
            info!("{} hands call {} back for dispatch", id, request);
            self.dispatch(request);
        }
    }

    /// Runs the earliest pending wake-up. Returns its time, or None when
    /// every car is halted.
    pub fn step(&mut self) -> Option<Duration> {
        let wake = self.timeline.pop_next()?;
        self.run_car(wake.car);
        Some(wake.at)
    }

    /// Runs every wake-up due up to and including `until`, then moves the
    /// clock there.
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(wake) = self.timeline.pop_due(until) {
            self.run_car(wake.car);
        }
        self.timeline.advance_clock(until);
    }

    pub fn advance_by(&mut self, duration: Duration) {
        self.advance_to(self.timeline.now() + duration);
    }

    /// Steps until nothing is scheduled or the next wake-up lies past
    /// `limit`. Returns true if the bank came to rest.
    pub fn run_until_idle(&mut self, limit: Duration) -> bool {
        while let Some(at) = self.timeline.next_due() {
            if at > limit {
                return false;
            }
            self.step();
        }
        true
    }

    pub fn is_idle(&self) -> bool {
        self.timeline.is_empty() && !self.cars.iter().any(Car::is_busy)
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn next_wake(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    pub fn calls(&self) -> &CallRegistry {
        &self.calls
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut I {
        &mut self.indicators
    }

    pub fn snapshot(&self) -> Vec<CarStatus> {
        self.cars.iter().map(Car::status).collect()
    }
}
