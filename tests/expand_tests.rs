use ndarray::{array, Array2};
use num_complex::Complex64;

use qreg::error::SimulatorError;
use qreg::expand::{expand_controlled, expand_single, kron};
use qreg::gates::{identity, StandardGate};

fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

fn matrix_approx_eq(a: &Array2<Complex64>, b: &Array2<Complex64>, epsilon: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    for i in 0..a.shape()[0] {
        for j in 0..a.shape()[1] {
            if !complex_approx_eq(a[[i, j]], b[[i, j]], epsilon) {
                return false;
            }
        }
    }
    true
}

fn adjoint(m: &Array2<Complex64>) -> Array2<Complex64> {
    let mut result = Array2::zeros((m.shape()[1], m.shape()[0]));
    for i in 0..m.shape()[0] {
        for j in 0..m.shape()[1] {
            result[[j, i]] = m[[i, j]].conj();
        }
    }
    result
}

#[test]
fn test_kron_of_identity_and_x() {
    let x = StandardGate::X.matrix();
    let i2 = StandardGate::I.matrix();

    // I ⊗ X is block-diagonal with X blocks
    let result = kron(&i2, &x);
    let one = Complex64::new(1.0, 0.0);
    let expected = array![
        [Complex64::new(0.0, 0.0), one, Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [one, Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), one],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), one, Complex64::new(0.0, 0.0)]
    ];

    assert!(matrix_approx_eq(&result, &expected, 1e-12));
}

#[test]
fn test_expand_single_on_one_qubit_is_the_gate_itself() {
    let h = StandardGate::H.matrix();
    let expanded = expand_single(&h, 0, 1).unwrap();
    assert!(matrix_approx_eq(&expanded, &h, 1e-12));
}

#[test]
fn test_expand_single_identity_gives_full_identity() {
    for n in 1..=4 {
        for target in 0..n {
            let expanded = expand_single(&StandardGate::I.matrix(), target, n).unwrap();
            assert!(matrix_approx_eq(&expanded, &identity(n), 1e-12));
        }
    }
}

#[test]
fn test_expand_single_pins_bit_ordering() {
    // X on qubit 0 of a 2-qubit register flips the low bit: |00⟩ → |01⟩,
    // so column 0 maps to row 1.
    let expanded = expand_single(&StandardGate::X.matrix(), 0, 2).unwrap();
    let one = Complex64::new(1.0, 0.0);

    assert!(complex_approx_eq(expanded[[1, 0]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[0, 1]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[3, 2]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[2, 3]], one, 1e-12));

    // X on qubit 1 flips the high bit: |00⟩ → |10⟩, column 0 to row 2.
    let expanded = expand_single(&StandardGate::X.matrix(), 1, 2).unwrap();
    assert!(complex_approx_eq(expanded[[2, 0]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[0, 2]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[3, 1]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[1, 3]], one, 1e-12));
}

#[test]
fn test_expand_single_is_unitary() {
    for n in 1..=3 {
        for target in 0..n {
            let u = expand_single(&StandardGate::H.matrix(), target, n).unwrap();
            let product = adjoint(&u).dot(&u);
            assert!(matrix_approx_eq(&product, &identity(n), 1e-10));
        }
    }
}

#[test]
fn test_expand_single_rejects_bad_target() {
    let err = expand_single(&StandardGate::X.matrix(), 2, 2).unwrap_err();
    assert_eq!(
        err,
        SimulatorError::InvalidQubitIndex {
            index: 2,
            qubit_count: 2
        }
    );
}

#[test]
fn test_expand_single_rejects_non_2x2_gate() {
    let err = expand_single(&StandardGate::Cnot.matrix(), 0, 2).unwrap_err();
    assert_eq!(err, SimulatorError::WrongGateShape { rows: 4, cols: 4 });
}

#[test]
fn test_controlled_x_matches_catalog_cnot() {
    // The controlled construction at (control 0, target 1) on two qubits
    // must reproduce the catalog's fixed CNOT matrix exactly.
    let expanded = expand_controlled(&StandardGate::X.matrix(), 0, 1, 2).unwrap();
    assert!(matrix_approx_eq(&expanded, &StandardGate::Cnot.matrix(), 1e-12));
}

#[test]
fn test_controlled_gate_with_non_adjacent_qubits() {
    // Control on qubit 0, target on qubit 2, with qubit 1 in between.
    let expanded = expand_controlled(&StandardGate::X.matrix(), 0, 2, 3).unwrap();
    let one = Complex64::new(1.0, 0.0);

    // Control clear: |000⟩ (0), |010⟩ (2), |100⟩ (4), |110⟩ (6) unchanged
    for i in [0usize, 2, 4, 6] {
        assert!(complex_approx_eq(expanded[[i, i]], one, 1e-12));
    }

    // Control set: target bit flips, qubit 1 untouched.
    // |001⟩ (1) ↔ |101⟩ (5), |011⟩ (3) ↔ |111⟩ (7)
    assert!(complex_approx_eq(expanded[[5, 1]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[1, 5]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[7, 3]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[3, 7]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[1, 1]], Complex64::new(0.0, 0.0), 1e-12));
}

#[test]
fn test_controlled_gate_with_reversed_roles() {
    // Control on qubit 2, target on qubit 0.
    let expanded = expand_controlled(&StandardGate::X.matrix(), 2, 0, 3).unwrap();
    let one = Complex64::new(1.0, 0.0);

    // Indices with bit 2 clear are untouched
    for i in 0..4usize {
        assert!(complex_approx_eq(expanded[[i, i]], one, 1e-12));
    }

    // |100⟩ (4) ↔ |101⟩ (5), |110⟩ (6) ↔ |111⟩ (7)
    assert!(complex_approx_eq(expanded[[5, 4]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[4, 5]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[7, 6]], one, 1e-12));
    assert!(complex_approx_eq(expanded[[6, 7]], one, 1e-12));
}

#[test]
fn test_controlled_expansion_is_unitary() {
    for gate in [StandardGate::X, StandardGate::H, StandardGate::S] {
        let u = expand_controlled(&gate.matrix(), 0, 2, 3).unwrap();
        let product = adjoint(&u).dot(&u);
        assert!(
            matrix_approx_eq(&product, &identity(3), 1e-10),
            "controlled {} expansion is not unitary",
            gate.name()
        );
    }
}

#[test]
fn test_controlled_expansion_rejects_bad_indices() {
    let x = StandardGate::X.matrix();

    let err = expand_controlled(&x, 3, 0, 3).unwrap_err();
    assert_eq!(
        err,
        SimulatorError::InvalidQubitIndex {
            index: 3,
            qubit_count: 3
        }
    );

    let err = expand_controlled(&x, 0, 4, 3).unwrap_err();
    assert_eq!(
        err,
        SimulatorError::InvalidQubitIndex {
            index: 4,
            qubit_count: 3
        }
    );

    let err = expand_controlled(&x, 1, 1, 3).unwrap_err();
    assert_eq!(err, SimulatorError::ControlEqualsTarget { qubit: 1 });
}
