//! Statevector Quantum Circuit Simulator
//!
//! This crate maintains the complex amplitude vector of an N-qubit
//! register, applies unitary gates (single-qubit and controlled) by
//! expanding them to operators on the full Hilbert space, performs
//! probabilistic measurement with state collapse, and projects the
//! resulting distribution into displayable rows.

pub mod error;
pub mod expand;
pub mod gates;
pub mod measure;
pub mod simulator;
pub mod state;
pub mod visualize;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::SimulatorError;
    pub use crate::gates::StandardGate;
    pub use crate::measure::Outcome;
    pub use crate::simulator::Simulator;
    pub use crate::state::StateVector;
    pub use crate::visualize::StateComponent;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
