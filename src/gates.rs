//! The gate catalog
//!
//! This module defines the fixed library of named unitary gates: the
//! single-qubit gates I, X, Y, Z, H, S, T and the two-qubit CNOT.
//! Gates are value-type constants; `matrix()` builds the corresponding
//! complex matrix on demand.

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;

use crate::error::SimulatorError;

/// Common complex numbers used in gate matrices
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;
}

/// Standard quantum gates (Pauli, Hadamard, phase gates, CNOT)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardGate {
    /// Identity gate
    I,

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    /// Hadamard gate
    H,

    /// Phase gate (S gate)
    S,

    /// π/8 gate (T gate)
    T,

    /// CNOT gate, control on qubit 0 (low bit), target on qubit 1
    Cnot,
}

impl StandardGate {
    /// Look up a gate by its catalog name.
    ///
    /// Lookup is ASCII case-insensitive; the catalog is
    /// {I, X, Y, Z, H, S, T, CNOT}.
    pub fn from_name(name: &str) -> Result<Self, SimulatorError> {
        match name.to_ascii_uppercase().as_str() {
            "I" => Ok(StandardGate::I),
            "X" => Ok(StandardGate::X),
            "Y" => Ok(StandardGate::Y),
            "Z" => Ok(StandardGate::Z),
            "H" => Ok(StandardGate::H),
            "S" => Ok(StandardGate::S),
            "T" => Ok(StandardGate::T),
            "CNOT" => Ok(StandardGate::Cnot),
            _ => Err(SimulatorError::UnknownGate {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the number of qubits this gate acts on
    pub fn qubit_count(&self) -> usize {
        match self {
            StandardGate::Cnot => 2,
            _ => 1,
        }
    }

    /// Returns the catalog name of this gate
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::H => "H",
            StandardGate::S => "S",
            StandardGate::T => "T",
            StandardGate::Cnot => "CNOT",
        }
    }

    /// Returns the matrix representation of this gate.
    ///
    /// Basis indices follow the register convention: bit `b` of an index
    /// (from the least significant bit) is qubit `b`. For CNOT this means
    /// the control is the low bit and the target the high bit, so
    /// |01⟩ ↔ |11⟩ (indices 1 and 3) are exchanged.
    pub fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            StandardGate::I => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
                ]
            }
            StandardGate::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            }
            StandardGate::Y => {
                array![
                    [Complex64::new(0.0, 0.0), -I],
                    [I, Complex64::new(0.0, 0.0)]
                ]
            }
            StandardGate::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            }
            StandardGate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [factor, factor],
                    [factor, -factor]
                ]
            }
            StandardGate::S => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), I]
                ]
            }
            StandardGate::T => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]
                ]
            }
            StandardGate::Cnot => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            }
        }
    }

    /// Returns the adjoint (conjugate transpose) of this gate's matrix.
    pub fn adjoint_matrix(&self) -> Array2<Complex64> {
        let matrix = self.matrix();
        let mut adjoint = Array2::zeros(matrix.dim());

        for i in 0..matrix.shape()[0] {
            for j in 0..matrix.shape()[1] {
                adjoint[[j, i]] = matrix[[i, j]].conj();
            }
        }

        adjoint
    }
}

/// The 2x2 identity matrix
pub fn identity2() -> Array2<Complex64> {
    StandardGate::I.matrix()
}

/// The identity matrix on `n` qubits
pub fn identity(n: usize) -> Array2<Complex64> {
    let dim = 1 << n;
    Array2::from_diag(&Array1::from_elem(dim, Complex64::new(1.0, 0.0)))
}
