//! # Poolforge
//!
//! Poolforge generates reverse-proxy pool-selection configuration from a
//! newline-delimited `fqdn port` table. Every validated record yields two
//! named pool entries (HTTPS and HTTP) carrying a URL-matching regular
//! expression, static rewrite rules and a whitelist reference; the full
//! collection is written as a JSON document under a top-level `POOLS` key.
//!
//! ## Pipeline
//!
//! ```text
//! Input Loader → Validator/Deduplicator → Pool Builder → JSON Output
//!      ↓                  ↓
//! default sample   per-line issue report
//! ```
//!
//! The run is a single-shot synchronous batch job: per-line validation
//! issues are collected and reported without aborting, filesystem errors are
//! fatal, and nothing persists beyond the input and output files.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use poolforge::{input, output, pools, validation, AppConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config = AppConfig::default();
//!     let text = input::load_or_create(&config.generator.input_file)?;
//!     let report = validation::validate_input(&text);
//!     let document = pools::build_pools(&report.records, &config.pools);
//!     output::write_pools(Path::new("pools_output.json"), &document)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod output;
pub mod pools;
pub mod validation;

// Re-export commonly used types
pub use config::{AppConfig, GeneratorConfig, PoolSettings};
pub use errors::{PoolforgeError, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "poolforge");
    }
}
