//! Operator expansion
//!
//! Builds the full 2^n x 2^n operator for an elementary gate acting on
//! chosen qubits of an n-qubit register. Single-qubit gates expand by
//! Kronecker composition against identities; controlled gates are built
//! by direct basis-index construction, which stays correct when control
//! and target are not adjacent.
//!
//! Bit convention: bit `b` of a basis index, counted from the least
//! significant bit, is qubit `b`. The Kronecker factor order below is
//! chosen so this holds for every expansion.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::SimulatorError;
use crate::gates::identity2;

/// Kronecker product of two complex matrices.
///
/// `a`'s indices occupy the high bits of the result, `b`'s the low bits.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let a_rows = a.shape()[0];
    let a_cols = a.shape()[1];
    let b_rows = b.shape()[0];
    let b_cols = b.shape()[1];

    let mut result = Array2::zeros((a_rows * b_rows, a_cols * b_cols));

    for i in 0..a_rows {
        for j in 0..a_cols {
            for k in 0..b_rows {
                for l in 0..b_cols {
                    result[[i * b_rows + k, j * b_cols + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }

    result
}

fn check_gate_shape(gate: &Array2<Complex64>) -> Result<(), SimulatorError> {
    if gate.shape() != [2, 2] {
        return Err(SimulatorError::WrongGateShape {
            rows: gate.shape()[0],
            cols: gate.shape()[1],
        });
    }
    Ok(())
}

fn check_qubit_index(index: usize, qubit_count: usize) -> Result<(), SimulatorError> {
    if index >= qubit_count {
        return Err(SimulatorError::InvalidQubitIndex { index, qubit_count });
    }
    Ok(())
}

/// Expand a single-qubit gate to the full register.
///
/// The result is the tensor product over qubit positions n-1 down to 0,
/// with `gate` at position `target` and the 2x2 identity elsewhere.
pub fn expand_single(
    gate: &Array2<Complex64>,
    target: usize,
    qubit_count: usize,
) -> Result<Array2<Complex64>, SimulatorError> {
    check_gate_shape(gate)?;
    check_qubit_index(target, qubit_count)?;

    // Highest qubit first so that qubit b lands on index bit b.
    let mut result = Array2::from_elem((1, 1), Complex64::new(1.0, 0.0));
    for q in (0..qubit_count).rev() {
        let factor = if q == target { gate.clone() } else { identity2() };
        result = kron(&result, &factor);
    }

    Ok(result)
}

/// Expand a single-qubit gate into its controlled version on the full
/// register.
///
/// Basis columns whose control bit is 0 get an identity column; columns
/// whose control bit is 1 get the gate applied to the target bit, with
/// all other qubits untouched. A plain Kronecker product cannot express
/// this for non-adjacent (control, target) pairs, so the matrix is built
/// column by column over basis indices.
pub fn expand_controlled(
    gate: &Array2<Complex64>,
    control: usize,
    target: usize,
    qubit_count: usize,
) -> Result<Array2<Complex64>, SimulatorError> {
    check_gate_shape(gate)?;
    check_qubit_index(control, qubit_count)?;
    check_qubit_index(target, qubit_count)?;
    if control == target {
        return Err(SimulatorError::ControlEqualsTarget { qubit: control });
    }

    let dim = 1 << qubit_count;
    let mut result = Array2::zeros((dim, dim));

    for col in 0..dim {
        if (col >> control) & 1 == 0 {
            result[[col, col]] = Complex64::new(1.0, 0.0);
            continue;
        }

        // Control bit set: route this column through the gate's action
        // on the target bit.
        let target_bit = (col >> target) & 1;
        for out_bit in 0..2 {
            let row = (col & !(1 << target)) | (out_bit << target);
            result[[row, col]] = gate[[out_bit, target_bit]];
        }
    }

    Ok(result)
}
