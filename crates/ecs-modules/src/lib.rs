//! Course content for the E-Commerce Simulator: five syllabus modules, each a
//! set of definitions plus parameterized calculators.
//!
//! Every calculator is described declaratively (fields, formula) and run
//! through the same validation path, so the CLI and any other front end only
//! need [`find_module`] and [`Simulator::run`].

pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::{catalog, find_module, find_simulator};
pub use error::{Result, SimulationError};
pub use models::course_module::{CourseModule, Definition};
pub use models::field_spec::{FieldKind, FieldSpec};
pub use models::field_values::{FieldValue, FieldValues};
pub use models::simulation_inputs::SimulationInputs;
pub use models::simulation_outcome::{Metric, Report, SimulationOutcome};
pub use models::simulator::{Formula, Simulator};

#[cfg(test)]
mod tests;
