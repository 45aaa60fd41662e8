//! State vector representation of an n-qubit register
//!
//! The state is a dense array of 2^n complex amplitudes with unit L2
//! norm. Bit `b` of a basis index (from the least significant bit) holds
//! qubit `b`'s classical value.

use std::fmt::{self, Display};

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::SimulatorError;

/// Squared-norm tolerance for accepting an amplitude vector as normalized.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A normalized complex amplitude vector over the computational basis.
///
/// Registers of more than ~20 qubits are impractical: the amplitude
/// array alone holds 2^n entries, and operator expansion builds dense
/// 2^n x 2^n matrices.
#[derive(Clone, Debug)]
pub struct StateVector {
    qubit_count: usize,
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create the zero state |00...0⟩ on `qubit_count` qubits.
    pub fn new(qubit_count: usize) -> Result<Self, SimulatorError> {
        if qubit_count == 0 {
            return Err(SimulatorError::InvalidQubitCount { qubit_count });
        }

        let dim = 1 << qubit_count;
        let mut amplitudes = Array1::zeros(dim);
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(StateVector {
            qubit_count,
            amplitudes,
        })
    }

    /// Create a state vector from explicit amplitudes.
    ///
    /// The vector must have length 2^qubit_count and unit norm.
    pub fn from_amplitudes(
        qubit_count: usize,
        amplitudes: Array1<Complex64>,
    ) -> Result<Self, SimulatorError> {
        if qubit_count == 0 {
            return Err(SimulatorError::InvalidQubitCount { qubit_count });
        }

        let expected = 1 << qubit_count;
        if amplitudes.len() != expected {
            return Err(SimulatorError::DimensionMismatch {
                expected,
                got: amplitudes.len(),
            });
        }

        let state = StateVector {
            qubit_count,
            amplitudes,
        };

        let norm_sqr = state.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(SimulatorError::NotNormalized { norm_sqr });
        }

        Ok(state)
    }

    /// Returns the number of qubits in this register
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Returns the dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Get a defensive copy of the amplitudes
    pub fn to_vec(&self) -> Vec<Complex64> {
        self.amplitudes.to_vec()
    }

    /// The probability of measuring the basis state `index`
    pub fn probability(&self, index: usize) -> f64 {
        if index >= self.dimension() {
            return 0.0;
        }
        self.amplitudes[index].norm_sqr()
    }

    /// The full probability distribution over basis states
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    /// The squared L2 norm of the amplitude vector
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Check that the state has unit norm within tolerance
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < NORM_TOLERANCE
    }

    /// Apply a full-register operator in place.
    ///
    /// The operator must be 2^n x 2^n. Unitary operators preserve the
    /// norm by design; the state is renormalized afterwards anyway to
    /// absorb floating-point drift over long gate sequences. The
    /// dimension check happens before any mutation, so a failed call
    /// leaves the state untouched.
    pub fn apply(&mut self, operator: &Array2<Complex64>) -> Result<(), SimulatorError> {
        let dim = self.dimension();
        if operator.shape() != [dim, dim] {
            return Err(SimulatorError::DimensionMismatch {
                expected: dim,
                got: operator.shape()[0],
            });
        }

        self.amplitudes = operator.dot(&self.amplitudes);
        self.renormalize();
        Ok(())
    }

    /// Collapse to the one-hot state at `index`.
    pub(crate) fn collapse_to_index(&mut self, index: usize) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[index] = Complex64::new(1.0, 0.0);
    }

    /// Zero every amplitude whose bit `qubit` differs from `bit`, then
    /// renormalize the survivors. The caller guarantees the surviving
    /// subspace has nonzero probability.
    pub(crate) fn collapse_qubit(&mut self, qubit: usize, bit: u8) {
        for i in 0..self.dimension() {
            if ((i >> qubit) & 1) as u8 != bit {
                self.amplitudes[i] = Complex64::new(0.0, 0.0);
            }
        }
        self.renormalize();
    }

    fn renormalize(&mut self) {
        let norm = self.norm_sqr().sqrt();
        if norm > 0.0 {
            let scale = Complex64::new(1.0 / norm, 0.0);
            self.amplitudes.mapv_inplace(|amp| amp * scale);
        }
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.qubit_count)?;

        let threshold = 1e-10;
        let mut has_entries = false;

        for i in 0..self.dimension() {
            let amp = self.amplitudes[i];
            let prob = amp.norm_sqr();
            if prob > threshold {
                has_entries = true;

                // Binary ket label, qubit 0 rightmost
                let bit_string = format!("{:0width$b}", i, width = self.qubit_count);
                writeln!(
                    f,
                    "  ({:.6}{:+.6}i) |{}⟩ [{:.1}%]",
                    amp.re,
                    amp.im,
                    bit_string,
                    prob * 100.0
                )?;
            }
        }

        if !has_entries {
            writeln!(f, "  (zero state)")?;
        }

        Ok(())
    }
}
