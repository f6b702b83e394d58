use shared_resources::car_id::CarId;
use shared_resources::direction::Direction;

use crate::doors::DoorPhase;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Behaviour {
    Idle,
    Moving,
    DoorOpen(DoorPhase),
}

impl Behaviour {
    pub fn as_string(&self) -> String {
        match self {
            Behaviour::Idle => String::from("idle"),
            Behaviour::Moving => String::from("moving"),
            Behaviour::DoorOpen(_) => String::from("doors open"),
        }
    }
}

/// Snapshot of a car, detached from the car itself.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CarStatus {
    pub id: CarId,
    pub floor: u8,
    pub direction: Direction,
    pub behaviour: Behaviour,
    pub stops: Vec<u8>,
    pub next_stop: Option<u8>,
}
