// src/simulation/mod.rs
//! Simulation system
//!
//! Discrete-time motion models advanced once per rendered frame: the
//! helicopter flight dynamics, the cargo-drop model, and the trait the
//! app shell drives them through.

pub mod cargo;
pub mod flight;
pub mod helicopter_sim;
pub mod traits;

// Re-export main types
pub use cargo::{CargoBox, CargoConfig, GroundedClock};
pub use flight::{FlightConfig, FlightState, MAX_MOTOR_LEVEL, MOTOR_CLIMB_TABLE};
pub use helicopter_sim::HelicopterSim;
pub use traits::Simulation;
