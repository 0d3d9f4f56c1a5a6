//! # JSON Output
//!
//! Serializes the pool document and verifies it after writing. The write is
//! all-or-nothing: serialization or filesystem failures propagate before any
//! partial state is visible to the operator. The post-write check re-reads
//! the file, requires the `POOLS` key and counts entries; its failure is
//! reported by callers but never undoes the write.

use std::fs;
use std::path::Path;

use crate::errors::{PoolforgeError, Result};
use crate::pools::PoolDocument;

/// Serialize the document as pretty-printed JSON and write it to `path`
pub fn write_pools(path: &Path, document: &PoolDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document).map_err(|source| {
        PoolforgeError::serialization(source, "Failed to serialize pool document")
    })?;

    fs::write(path, json).map_err(|source| {
        PoolforgeError::io(source, format!("Failed to write output file '{}'", path.display()))
    })?;

    Ok(())
}

/// Re-read the written document and return its pool entry count
pub fn verify_output(path: &Path) -> Result<usize> {
    let raw = fs::read_to_string(path).map_err(|source| {
        PoolforgeError::io(
            source,
            format!("Failed to re-read output file '{}'", path.display()),
        )
    })?;

    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|source| {
        PoolforgeError::serialization(
            source,
            format!("Output file '{}' is not valid JSON", path.display()),
        )
    })?;

    let pools = value
        .get("POOLS")
        .and_then(|pools| pools.as_object())
        .ok_or_else(|| PoolforgeError::integrity("Missing 'POOLS' key in output JSON"))?;

    Ok(pools.len())
}
