//! Error types for the simulator core.

use thiserror::Error;

/// Errors raised by the simulator core.
///
/// All errors are synchronous and local to the failed call. An operation
/// that fails leaves the state vector exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulatorError {
    /// The requested gate name is not in the catalog.
    #[error("unknown gate `{name}`")]
    UnknownGate { name: String },

    /// A target or control qubit index is outside `[0, qubit_count)`.
    #[error("qubit index {index} is out of range for a {qubit_count}-qubit register")]
    InvalidQubitIndex { index: usize, qubit_count: usize },

    /// Control and target refer to the same qubit.
    #[error("control and target must be distinct qubits (both are {qubit})")]
    ControlEqualsTarget { qubit: usize },

    /// A register needs at least one qubit.
    #[error("invalid qubit count {qubit_count}: a register needs at least one qubit")]
    InvalidQubitCount { qubit_count: usize },

    /// A controlled gate was requested without a control qubit.
    #[error("gate `{gate}` requires a control qubit")]
    MissingControl { gate: String },

    /// The expander was handed a matrix of the wrong shape.
    #[error("expected a 2x2 gate matrix, got {rows}x{cols}")]
    WrongGateShape { rows: usize, cols: usize },

    /// An operator or amplitude vector does not match the register dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// An amplitude vector does not have unit norm.
    #[error("state vector is not normalized (squared norm {norm_sqr})")]
    NotNormalized { norm_sqr: f64 },
}
