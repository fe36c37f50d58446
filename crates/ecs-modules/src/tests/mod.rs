mod catalog;
mod property_tests;

use crate::{Result, SimulationInputs, SimulationOutcome, find_simulator};

/// Run `module/simulator` with the given raw form values.
pub(crate) fn run(module: &str, simulator: &str, inputs: &[(&str, &str)]) -> Result<SimulationOutcome> {
    let simulator = find_simulator(module, simulator).unwrap();
    simulator.run(&inputs.iter().copied().collect::<SimulationInputs>())
}
