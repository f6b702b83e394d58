pub mod debug;
pub mod inputs;
pub mod simulation;
pub mod timeline;

pub use simulation::Simulation;
