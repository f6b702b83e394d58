pub mod cost_function;
pub mod hall_request_assigner;

pub use hall_request_assigner::{assign, choose_car, Assignment};
