pub mod call;
pub mod call_registry;
pub mod car_id;
pub mod config;
pub mod direction;
pub mod indicators;
pub mod request;
