pub mod doors;
pub mod elevator_status;
pub mod fsm;
pub mod requests;

pub use fsm::{Car, Resume, Step};
