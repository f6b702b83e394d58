/// ----- CALL REGISTRY -----
/// Keeps track of which hall calls are pending. Entries are created for
/// every button that physically exists when the registry is built, so
/// a DOWN call at the ground floor or an UP call at the top floor can
/// never be activated.

use std::collections::HashMap;

use crate::call::Call;
use crate::request::Request;

#[derive(Debug, Clone)]
pub struct CallRegistry {
    num_floors: u8,
    calls: HashMap<Request, bool>,
}

impl CallRegistry {
    pub fn new(num_floors: u8) -> Self {
        let mut calls = HashMap::new();
        for floor in 0..num_floors {
            for call in Call::iter() {
                if call.exists_at(floor, num_floors) {
                    calls.insert(Request::new(floor, call), false);
                }
            }
        }
        CallRegistry { num_floors, calls }
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    pub fn exists(&self, request: Request) -> bool {
        self.calls.contains_key(&request)
    }

    pub fn is_active(&self, request: Request) -> bool {
        self.calls.get(&request).copied().unwrap_or(false)
    }

    /// Returns true only if the entry exists and its value changed.
    pub fn set_active(&mut self, request: Request, active: bool) -> bool {
        match self.calls.get_mut(&request) {
            Some(state) if *state != active => {
                *state = active;
                true
            }
            _ => false,
        }
    }

    pub fn activate(&mut self, request: Request) -> bool {
        self.set_active(request, true)
    }

    pub fn clear(&mut self, request: Request) -> bool {
        self.set_active(request, false)
    }

    pub fn any_active(&self) -> bool {
        self.calls.values().any(|active| *active)
    }

    /// Active calls ordered by floor, UP before DOWN.
    pub fn active_requests(&self) -> Vec<Request> {
        let mut active: Vec<Request> = self
            .calls
            .iter()
            .filter(|(_, active)| **active)
            .map(|(request, _)| *request)
            .collect();
        active.sort_by_key(|request| (request.floor, request.call as u8));
        active
    }
}
