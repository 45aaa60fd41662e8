//! Read-only projection of a state into displayable rows
//!
//! The core never prints. A presentation layer consumes the rows
//! produced here and owns all formatting decisions.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::state::StateVector;

/// Components with probability at or below this are omitted by `render`.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// One significant component of the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateComponent {
    /// Basis label as an n-bit binary string, qubit 0 rightmost
    pub label: String,
    /// The complex amplitude of this basis state
    pub amplitude: Complex64,
    /// The measurement probability |amplitude|²
    pub probability: f64,
}

/// Iterate over the state's significant components in basis order.
///
/// Lazy and restartable: each call re-derives the rows from the current
/// state, so the iterator reflects whatever the state is now.
pub fn components(
    state: &StateVector,
    threshold: f64,
) -> impl Iterator<Item = StateComponent> + '_ {
    let width = state.qubit_count();
    (0..state.dimension()).filter_map(move |i| {
        let amplitude = state.amplitudes()[i];
        let probability = amplitude.norm_sqr();
        if probability > threshold {
            Some(StateComponent {
                label: format!("{:0width$b}", i, width = width),
                amplitude,
                probability,
            })
        } else {
            None
        }
    })
}

/// Collect the significant components using the default threshold.
pub fn render(state: &StateVector) -> Vec<StateComponent> {
    components(state, DEFAULT_THRESHOLD).collect()
}
