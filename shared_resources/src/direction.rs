use crate::call::Call;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Idle,
    Up,
}

impl Direction {
    pub fn to_call(self) -> Option<Call> {
        match self {
            Direction::Up => Some(Call::HallUp),
            Direction::Down => Some(Call::HallDown),
            Direction::Idle => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "\u{25b2}",
            Direction::Down => "\u{25bc}",
            Direction::Idle => "\u{25cf}",
        }
    }
}
