//! Pipeline orchestration for the `generate` and `check` commands.

use std::time::Instant;

use anyhow::Context;
use tracing::{info, warn};

use super::report;
use crate::config::AppConfig;
use crate::{input, output, pools, validation};

/// Run the full pipeline: load, validate, build, write, verify. In check-only
/// mode the run stops after the validation report.
pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let started = Instant::now();

    let text = input::load_or_create(&config.generator.input_file).with_context(|| {
        format!("Failed to load input '{}'", config.generator.input_file.display())
    })?;

    let validation_report = validation::validate_input(&text);
    report::print_validation_report(&validation_report);

    if config.generator.check_only {
        info!(
            records = validation_report.records.len(),
            issues = validation_report.issues.len(),
            "Check-only mode, skipping JSON generation"
        );
        return Ok(());
    }

    let document = pools::build_pools(&validation_report.records, &config.pools);
    output::write_pools(&config.generator.output_file, &document).with_context(|| {
        format!("Failed to write output '{}'", config.generator.output_file.display())
    })?;
    info!(
        path = %config.generator.output_file.display(),
        pools = document.len(),
        "Pool configuration written"
    );

    // Post-hoc assertion only; the written file is kept either way.
    match output::verify_output(&config.generator.output_file) {
        Ok(total) => report::print_summary(total),
        Err(e) => warn!(error = %e, "Post-write validation failed"),
    }

    info!(
        elapsed = ?started.elapsed(),
        records = validation_report.records.len(),
        "Generation completed"
    );
    Ok(())
}
