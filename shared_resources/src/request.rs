use std::fmt;

use super::call::Call;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    pub floor: u8,
    pub call: Call,
}

impl Request {
    pub fn new(floor: u8, call: Call) -> Self {
        Request { floor, call }
    }

    pub fn up(floor: u8) -> Self {
        Request::new(floor, Call::HallUp)
    }

    pub fn down(floor: u8) -> Self {
        Request::new(floor, Call::HallDown)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.floor, self.call.as_string())
    }
}
