//! Human-readable validation report and summary printing.
//!
//! The format is operator-facing text, not a stable contract.

use crate::validation::ValidationReport;

/// Print the per-line validation report
pub fn print_validation_report(report: &ValidationReport) {
    println!();
    println!("Pre-validation checks:");
    if report.is_clean() {
        println!("  All input lines passed validation.");
    } else {
        println!("  Issues found:");
        for issue in &report.issues {
            println!("  - Line {}: {}", issue.line, issue.message);
        }
    }
    println!("  Accepted records: {}", report.records.len());
}

/// Print the post-write summary line
pub fn print_summary(total_pools: usize) {
    println!("JSON structure valid. Total pool entries: {}", total_pools);
}
