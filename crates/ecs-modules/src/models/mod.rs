pub mod course_module;
pub mod field_spec;
pub mod field_values;
pub mod number_format;
pub mod simulation_inputs;
pub mod simulation_outcome;
pub mod simulator;
