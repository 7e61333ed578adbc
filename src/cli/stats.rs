use std::path::Path;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::count;
use crate::report::load_report;
use crate::settings::load_settings;

pub fn run(file: &str) -> Result<()> {
    let settings = load_settings();
    let report = load_report(Path::new(file), &settings.producer)?;
    let stats = report.statistics();

    println!("Producer:  {}", report.producer);

    let mut table = Table::new();
    table.set_header(vec!["Occurrences", "Count"]);
    table.add_row(vec![Cell::new("Comparisons"), Cell::new(count(stats.comparisons))]);
    table.add_row(vec![Cell::new("Matches"), Cell::new(count(stats.matches))]);
    table.add_row(vec![Cell::new("Mismatches"), Cell::new(count(stats.mismatches))]);
    table.add_row(vec![Cell::new("Skipped"), Cell::new(count(stats.skipped))]);
    println!("{table}");
    Ok(())
}
