use log::{debug, error, info};

use car::Car;
use shared_resources::car_id::CarId;
use shared_resources::request::Request;

use crate::cost_function::cost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub car: CarId,
    /// The chosen car was halted and has to be stepped by the caller.
    pub needs_step: bool,
}

/// Cheapest car for `request`. On equal cost the car created first wins.
pub fn choose_car(cars: &[Car], request: Request, num_floors: u8) -> Option<CarId> {
    let mut best: Option<(CarId, f64)> = None;
    for car in cars {
        let bid = cost(car, request, num_floors);
        debug!("{} bids {:.1} for call {}", car.id(), bid, request);
        if !bid.is_finite() {
            continue;
        }
        match best {
            Some((_, best_bid)) if bid >= best_bid => {}
            _ => best = Some((car.id(), bid)),
        }
    }
    if let Some((id, _)) = best {
        return Some(id);
    }

    let nearest = cars.iter().min_by_key(|car| car.floor().abs_diff(request.floor))?;
    error!(
        "no car produced a finite cost for call {}, falling back to the nearest one ({})",
        request,
        nearest.id()
    );
    Some(nearest.id())
}

pub fn assign(cars: &mut [Car], request: Request, num_floors: u8) -> Option<Assignment> {
    let Some(id) = choose_car(cars, request, num_floors) else {
        error!("there is no car to take call {}", request);
        return None;
    };
    let car = cars.iter_mut().find(|car| car.id() == id)?;
    let needs_step = car.add_stop(request.floor);
    info!("call {} assigned to {}", request, id);
    Some(Assignment { car: id, needs_step })
}
