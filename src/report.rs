use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{InterpreterError, Result};
use crate::models::{Comparison, Statistics};

/// A scan report reduced to what the interpreter needs.
#[derive(Debug, Clone)]
pub struct Report {
    pub producer: String,
    pub comparisons: Vec<Comparison>,
}

impl Report {
    pub fn statistics(&self) -> Statistics {
        Statistics::from_comparisons(&self.comparisons)
    }
}

/// Check the report metadata and extract the comparisons.
pub fn parse_report(content: &str, expected_producer: &str) -> Result<Report> {
    let mut raw: Value = serde_json::from_str(content)?;

    let producer = raw
        .get("meta")
        .and_then(|meta| meta.get("by"))
        .and_then(Value::as_str)
        .filter(|by| by.contains(expected_producer))
        .map(str::to_string)
        .ok_or_else(|| InterpreterError::NotAReport(expected_producer.to_string()))?;

    let comparisons = match raw.get_mut("comparisons").map(Value::take) {
        Some(value @ Value::Array(_)) => serde_json::from_value::<Vec<Comparison>>(value)?,
        _ => return Err(InterpreterError::NoComparisons),
    };
    debug!("{} comparisons produced by {producer}", comparisons.len());

    Ok(Report {
        producer,
        comparisons,
    })
}

pub fn load_report(path: &Path, expected_producer: &str) -> Result<Report> {
    let content = std::fs::read_to_string(path)?;
    parse_report(&content, expected_producer)
}
