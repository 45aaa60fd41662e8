//! Probabilistic measurement with state collapse
//!
//! Outcomes are sampled from the amplitude-derived probability
//! distribution through an injected random source, so seeded generators
//! give reproducible runs.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulatorError;
use crate::state::StateVector;

/// A single-qubit measurement outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Measurement yielded 0
    Zero,
    /// Measurement yielded 1
    One,
}

impl Outcome {
    /// The outcome as a classical bit
    pub fn bit(&self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.bit()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Zero => write!(f, "0"),
            Outcome::One => write!(f, "1"),
        }
    }
}

/// Measure the full register and collapse the state.
///
/// Draws a basis index from the categorical distribution p_i = |a_i|²
/// with a single uniform sample, then collapses the state to the one-hot
/// vector at the drawn index. Superposition is destroyed irreversibly.
pub fn measure_all<R: Rng + ?Sized>(state: &mut StateVector, rng: &mut R) -> usize {
    let draw: f64 = rng.gen();

    // Cumulative scan; the final index soaks up any rounding shortfall.
    let mut outcome = state.dimension() - 1;
    let mut cumulative = 0.0;
    for i in 0..state.dimension() {
        cumulative += state.probability(i);
        if draw < cumulative {
            outcome = i;
            break;
        }
    }

    state.collapse_to_index(outcome);
    outcome
}

/// Measure a single qubit and collapse the state.
///
/// A Bernoulli trial against the summed probability of all basis states
/// with bit `qubit` clear decides the outcome. Amplitudes inconsistent
/// with the outcome are zeroed and the survivors renormalized, so the
/// state stays valid for further gate application.
pub fn measure_qubit<R: Rng + ?Sized>(
    state: &mut StateVector,
    qubit: usize,
    rng: &mut R,
) -> Result<Outcome, SimulatorError> {
    if qubit >= state.qubit_count() {
        return Err(SimulatorError::InvalidQubitIndex {
            index: qubit,
            qubit_count: state.qubit_count(),
        });
    }

    let mut prob_zero = 0.0;
    for i in 0..state.dimension() {
        if (i >> qubit) & 1 == 0 {
            prob_zero += state.probability(i);
        }
    }

    let outcome = if rng.gen::<f64>() < prob_zero {
        Outcome::Zero
    } else {
        Outcome::One
    };

    state.collapse_qubit(qubit, outcome.bit());
    Ok(outcome)
}
