//! Prepare a Bell state, show its components, and measure it.

use qreg::prelude::*;

fn main() -> Result<(), SimulatorError> {
    let mut simulator = Simulator::with_seed(2, 7)?;
    simulator.apply_gate("H", 0, None)?;
    simulator.apply_gate("CNOT", 1, Some(0))?;

    println!("Bell state:");
    for row in simulator.visualize() {
        println!(
            "  |{}⟩  amplitude {:.4}{:+.4}i  p = {:.3}",
            row.label, row.amplitude.re, row.amplitude.im, row.probability
        );
    }

    let outcome = simulator.measure();
    println!(
        "measured basis state: |{:0width$b}⟩",
        outcome,
        width = simulator.qubit_count()
    );

    Ok(())
}
