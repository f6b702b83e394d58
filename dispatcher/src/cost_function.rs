use car::Car;
use shared_resources::direction::Direction;
use shared_resources::request::Request;

/// Added per pending stop, so that otherwise close bids go to the less loaded car.
pub const LOAD_WEIGHT: f64 = 0.5;

/// Estimated effort for `car` to answer `request`. Lower is better.
///
/// An idle car, or one already heading towards the call in the call's
/// direction, pays the plain distance. A car moving the other way has to
/// turn around first and pays one building height on top. A car moving the
/// right way but already past the floor has to finish its sweep and come
/// back, which costs two building heights.
pub fn cost(car: &Car, request: Request, num_floors: u8) -> f64 {
    let distance = f64::from(car.floor().abs_diff(request.floor));
    let building = f64::from(num_floors);
    let travel = match car.direction() {
        Direction::Idle => distance,
        direction if direction == request.call.direction() => {
            let not_yet_passed = match direction {
                Direction::Up => car.floor() <= request.floor,
                _ => car.floor() >= request.floor,
            };
            if not_yet_passed {
                distance
            } else {
                distance + 2.0 * building
            }
        }
        _ => distance + building,
    };
    travel + LOAD_WEIGHT * car.stops().len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use car::elevator_status::{Behaviour, CarStatus};
    use shared_resources::car_id::CarId;

    fn car(floor: u8, direction: Direction, stops: &[u8]) -> Car {
        Car::from_status(&CarStatus {
            id: CarId(0),
            floor,
            direction,
            behaviour: if direction == Direction::Idle { Behaviour::Idle } else { Behaviour::Moving },
            stops: stops.to_vec(),
            next_stop: None,
        })
    }

    #[test]
    fn idle_car_pays_the_distance() {
        assert_eq!(cost(&car(2, Direction::Idle, &[]), Request::down(7), 10), 5.0);
    }

    #[test]
    fn car_heading_towards_the_call_pays_the_distance() {
        assert_eq!(cost(&car(2, Direction::Up, &[8]), Request::up(5), 10), 3.5);
        assert_eq!(cost(&car(5, Direction::Up, &[8]), Request::up(5), 10), 0.5);
        assert_eq!(cost(&car(7, Direction::Down, &[0]), Request::down(3), 10), 4.5);
    }

    #[test]
    fn car_past_the_call_pays_two_building_heights() {
        assert_eq!(cost(&car(6, Direction::Up, &[8]), Request::up(5), 10), 21.5);
        assert_eq!(cost(&car(2, Direction::Down, &[0]), Request::down(3), 10), 21.5);
    }

    #[test]
    fn car_moving_the_other_way_pays_one_building_height() {
        assert_eq!(cost(&car(0, Direction::Up, &[8]), Request::down(9), 10), 19.5);
        assert_eq!(cost(&car(4, Direction::Down, &[1, 2]), Request::up(6), 10), 13.0);
    }

    #[test]
    fn every_pending_stop_adds_load() {
        let busy = car(3, Direction::Idle, &[1, 5, 8]);
        assert_eq!(cost(&busy, Request::up(3), 10), 1.5);
    }
}
