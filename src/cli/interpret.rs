use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};
use log::debug;

use crate::error::{InterpreterError, Result};
use crate::fmt::count;
use crate::interpreter;
use crate::models::Interpretation;
use crate::report::load_report;
use crate::settings::load_settings;
use crate::translator::{translate, InOrder, ShuffledWords};

pub struct Options {
    pub json: bool,
    pub breakdown: bool,
    pub dust_threshold: Option<f64>,
    pub fixed_wording: bool,
}

pub fn run(file: &str, options: Options) -> Result<()> {
    let settings = load_settings();
    let report = load_report(Path::new(file), &settings.producer)?;
    let stats = report.statistics();
    let threshold = options.dust_threshold.unwrap_or(settings.dust_threshold);

    let outcome = interpreter::interpret(report.comparisons, &stats, threshold);
    debug!(
        "{} comparisons interpreted, {} matching",
        outcome.interpreted(),
        outcome.matched
    );
    if !outcome.remainder.is_empty() {
        return Err(InterpreterError::Other(format!(
            "{} comparisons were left unclassified",
            outcome.remainder.len()
        )));
    }

    if options.json {
        let out = serde_json::to_string_pretty(&outcome.interpretations)?;
        println!("{out}");
        return Ok(());
    }

    if options.breakdown {
        println!("{}", breakdown_table(&outcome.interpretations));
        println!();
    }

    let paragraph = if options.fixed_wording {
        translate(&outcome.interpretations, &mut InOrder)
    } else {
        translate(&outcome.interpretations, &mut ShuffledWords)
    };

    println!("{}\n", "Suggested interpretation".bold());
    println!("{}", paragraph.trim_end());
    Ok(())
}

fn breakdown_table(interpretations: &[Interpretation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Interpretation", "Certain", "Items"]);
    for interpretation in interpretations {
        let certainty = if interpretation.certainty {
            Cell::new("yes".green())
        } else {
            Cell::new("no".yellow())
        };
        table.add_row(vec![
            Cell::new(interpretation.finding.label()),
            certainty,
            Cell::new(
                interpretation
                    .interpreted_items_count
                    .map(count)
                    .unwrap_or_default(),
            ),
        ]);
    }
    table
}
