//! # Input Loader
//!
//! Reads the newline-delimited `fqdn port` table. A missing input file is
//! bootstrapped with a built-in sample on first run; filesystem failures
//! propagate as fatal I/O errors.

use std::fs;
use std::path::Path;

use crate::errors::{PoolforgeError, Result};

/// Built-in sample written when the input file does not exist. The lines
/// exercise the accept, duplicate, bad-FQDN and bad-port paths.
pub const DEFAULT_SAMPLE: &str = "\
o.glb.ac.com\t12345
o1.glb.ac.com\t12346
u.glb.ac.com\t12347
o.glb.ac.com\t12345
bad_host\t99999
invalid.fqdn\t70000
";

/// Return the input file's contents, creating it from [`DEFAULT_SAMPLE`]
/// when absent
pub fn load_or_create(path: &Path) -> Result<String> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Loading FQDN input file");
        return fs::read_to_string(path).map_err(|source| {
            PoolforgeError::io(source, format!("Failed to read input file '{}'", path.display()))
        });
    }

    tracing::info!(
        path = %path.display(),
        "Input file not found, creating it from the built-in sample"
    );
    fs::write(path, DEFAULT_SAMPLE).map_err(|source| {
        PoolforgeError::io(source, format!("Failed to create input file '{}'", path.display()))
    })?;

    Ok(DEFAULT_SAMPLE.to_string())
}
