//! The simulator facade
//!
//! Owns one state vector and one random source, and wires the gate
//! catalog, operator expansion, measurement, and visualization together
//! behind a small API.

use std::collections::HashMap;

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SimulatorError;
use crate::expand::{expand_controlled, expand_single};
use crate::gates::StandardGate;
use crate::measure::{measure_all, measure_qubit, Outcome};
use crate::state::StateVector;
use crate::visualize::{render, StateComponent};

/// A statevector simulator for an n-qubit register.
///
/// Each instance exclusively owns its state; parallel runs need
/// independent instances. The random source is injectable so measurement
/// outcomes can be made reproducible.
#[derive(Clone, Debug)]
pub struct Simulator<R: Rng = StdRng> {
    state: StateVector,
    rng: R,
}

impl Simulator<StdRng> {
    /// Create a simulator on `qubit_count` qubits in the |00...0⟩ state,
    /// with an entropy-seeded random source.
    pub fn new(qubit_count: usize) -> Result<Self, SimulatorError> {
        Ok(Simulator {
            state: StateVector::new(qubit_count)?,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a simulator with a fixed RNG seed for deterministic
    /// measurement outcomes.
    pub fn with_seed(qubit_count: usize, seed: u64) -> Result<Self, SimulatorError> {
        Ok(Simulator {
            state: StateVector::new(qubit_count)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator using the given random source.
    pub fn with_rng(qubit_count: usize, rng: R) -> Result<Self, SimulatorError> {
        Ok(Simulator {
            state: StateVector::new(qubit_count)?,
            rng,
        })
    }

    /// Get the number of qubits in the simulator
    pub fn qubit_count(&self) -> usize {
        self.state.qubit_count()
    }

    /// Get the current state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Reset the simulator to the |0...0⟩ state
    pub fn reset(&mut self) {
        self.state.collapse_to_index(0);
    }

    /// Apply a named gate to `target`, optionally controlled by `control`.
    ///
    /// CNOT requires a control qubit. Any single-qubit gate given a
    /// control is applied as its controlled version. The full operator is
    /// built and validated before the state is touched, so a failed call
    /// leaves the state bit-for-bit unchanged.
    pub fn apply_gate(
        &mut self,
        name: &str,
        target: usize,
        control: Option<usize>,
    ) -> Result<(), SimulatorError> {
        let gate = StandardGate::from_name(name)?;
        let n = self.qubit_count();

        let operator = match (gate, control) {
            (StandardGate::Cnot, Some(control)) => {
                expand_controlled(&StandardGate::X.matrix(), control, target, n)?
            }
            (StandardGate::Cnot, None) => {
                return Err(SimulatorError::MissingControl {
                    gate: gate.name().to_string(),
                });
            }
            (gate, Some(control)) => expand_controlled(&gate.matrix(), control, target, n)?,
            (gate, None) => expand_single(&gate.matrix(), target, n)?,
        };

        self.state.apply(&operator)
    }

    /// Measure the full register, collapsing the state to the outcome.
    pub fn measure(&mut self) -> usize {
        measure_all(&mut self.state, &mut self.rng)
    }

    /// Measure a single qubit, collapsing the state consistently with
    /// the outcome.
    pub fn measure_qubit(&mut self, qubit: usize) -> Result<Outcome, SimulatorError> {
        measure_qubit(&mut self.state, qubit, &mut self.rng)
    }

    /// A defensive copy of the current amplitudes.
    pub fn state_vector(&self) -> Vec<Complex64> {
        self.state.to_vec()
    }

    /// The significant components of the current state, for display.
    pub fn visualize(&self) -> Vec<StateComponent> {
        render(&self.state)
    }

    /// Histogram of full-register measurement outcomes over `shots`
    /// repetitions, each drawn from a fresh copy of the current state.
    /// The live state is not disturbed.
    pub fn sample_counts(&mut self, shots: usize) -> HashMap<usize, usize> {
        let mut counts = HashMap::new();
        for _ in 0..shots {
            let mut copy = self.state.clone();
            let outcome = measure_all(&mut copy, &mut self.rng);
            *counts.entry(outcome).or_insert(0) += 1;
        }
        counts
    }
}
