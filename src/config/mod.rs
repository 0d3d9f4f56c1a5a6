//! # Configuration Management
//!
//! Configuration for the poolforge generator: run settings (input/output
//! paths, check-only mode) and the constant pool tables copied into every
//! generated record. Values come from defaults, `POOLFORGE_*` environment
//! variables and CLI flag overrides, in that order.

pub mod settings;

pub use settings::{
    AppConfig, GeneratorConfig, PoolSettings, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
};
