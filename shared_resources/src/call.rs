use crate::direction::Direction;

/// A hall call button. Only hall calls exist; cars carry no cab panel.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
}

impl Call {
    pub fn iter() -> impl Iterator<Item = Call> {
        [Call::HallUp, Call::HallDown].iter().copied()
    }

    pub fn direction(self) -> Direction {
        match self {
            Call::HallUp => Direction::Up,
            Call::HallDown => Direction::Down,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("up"),
            Call::HallDown => String::from("down"),
        }
    }

    /// Ground floor has no DOWN button and the top floor has no UP button.
    pub fn exists_at(self, floor: u8, num_floors: u8) -> bool {
        match self {
            Call::HallUp => floor < num_floors.saturating_sub(1),
            Call::HallDown => floor > 0 && floor < num_floors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_floors_have_a_single_button() {
        assert!(Call::HallUp.exists_at(0, 5));
        assert!(!Call::HallDown.exists_at(0, 5));
        assert!(!Call::HallUp.exists_at(4, 5));
        assert!(Call::HallDown.exists_at(4, 5));
        assert!(!Call::HallDown.exists_at(5, 5));
    }

    #[test]
    fn calls_map_onto_travel_directions() {
        assert_eq!(Call::HallUp.direction(), Direction::Up);
        assert_eq!(Call::HallDown.direction(), Direction::Down);
    }
}
