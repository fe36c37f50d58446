use crate::{FieldKind, FieldSpec, Result, SimulationError, SimulationInputs};

use std::collections::HashMap;

use log::debug;

/// A validated, typed input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Decimal(f64),
    Integer(i64),
    Choice(&'static str),
}

/// Typed inputs for one run, produced by checking raw inputs against the
/// simulator's field list.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: HashMap<&'static str, FieldValue>,
}

impl FieldValues {
    /// Check every declared field is filled in, then parse each one.
    ///
    /// Blank values count as missing. Decimals must be finite; integers must
    /// be whole numbers; choices must match an option exactly.
    #[track_caller]
    pub fn parse(fields: &[FieldSpec], inputs: &SimulationInputs) -> Result<Self> {
        for field in fields {
            if inputs.get(field.key).is_none_or(|raw| raw.trim().is_empty()) {
                return Err(SimulationError::missing_field(field.key));
            }
        }

        for key in inputs.keys() {
            if !fields.iter().any(|f| f.key == key) {
                debug!("Ignoring unknown input '{key}'");
            }
        }

        let mut values = HashMap::with_capacity(fields.len());
        for field in fields {
            let raw = inputs.get(field.key).unwrap_or_default().trim();
            values.insert(field.key, parse_value(field, raw)?);
        }

        Ok(Self { values })
    }

    #[track_caller]
    pub fn decimal(&self, key: &'static str) -> Result<f64> {
        match self.values.get(key) {
            Some(FieldValue::Decimal(value)) => Ok(*value),
            Some(FieldValue::Integer(value)) => Ok(*value as f64),
            _ => Err(SimulationError::missing_field(key)),
        }
    }

    #[track_caller]
    pub fn integer(&self, key: &'static str) -> Result<i64> {
        match self.values.get(key) {
            Some(FieldValue::Integer(value)) => Ok(*value),
            _ => Err(SimulationError::missing_field(key)),
        }
    }

    #[track_caller]
    pub fn choice(&self, key: &'static str) -> Result<&'static str> {
        match self.values.get(key) {
            Some(FieldValue::Choice(value)) => Ok(*value),
            _ => Err(SimulationError::missing_field(key)),
        }
    }
}

#[track_caller]
fn parse_value(field: &FieldSpec, raw: &str) -> Result<FieldValue> {
    match field.kind {
        FieldKind::Decimal => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(FieldValue::Decimal)
            .ok_or_else(|| SimulationError::invalid_number(field.key, field.kind.as_str(), raw)),
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| SimulationError::invalid_number(field.key, field.kind.as_str(), raw)),
        FieldKind::Choice(options) => options
            .iter()
            .copied()
            .find(|option| *option == raw)
            .map(FieldValue::Choice)
            .ok_or_else(|| SimulationError::unknown_option(field.key, raw, options)),
    }
}
