use crate::{FieldSpec, FieldValues, Report, Result, SimulationInputs, SimulationOutcome};

use log::debug;
use serde::Serialize;

/// Pure calculation over validated inputs.
pub type Formula = fn(&FieldValues) -> Result<Report>;

/// One calculator: its form and its formula.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulator {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    #[serde(skip)]
    pub formula: Formula,
    #[serde(skip)]
    pub module_id: &'static str,
}

impl Simulator {
    /// Validate `inputs` against the form, then evaluate the formula.
    pub fn run(&self, inputs: &SimulationInputs) -> Result<SimulationOutcome> {
        let values = FieldValues::parse(self.fields, inputs)?;
        let report = (self.formula)(&values)?;

        debug!("Ran {}/{}", self.module_id, self.id);
        Ok(SimulationOutcome::from_report(
            self.module_id,
            self.id,
            self.title,
            report,
        ))
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}
