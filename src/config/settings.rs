//! # Configuration Settings
//!
//! Defines the configuration structure for the poolforge generator. The
//! rewrite, header and subnet tables are explicit immutable settings passed
//! into the pool builder rather than module-level constants.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{PoolforgeError, Result};
use crate::pools::{HeaderRule, RewriteRule, Whitelist};

/// Default path of the `fqdn port` input table
pub const DEFAULT_INPUT_FILE: &str = "fqdn_input.txt";

/// Default path of the generated JSON document
pub const DEFAULT_OUTPUT_FILE: &str = "pools_output.json";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct AppConfig {
    /// Generator run configuration
    #[validate(nested)]
    pub generator: GeneratorConfig,

    /// Constant pool fields shared by every generated record
    #[validate(nested)]
    pub pools: PoolSettings,
}

impl AppConfig {
    /// Create AppConfig from environment variables
    pub fn from_env() -> Self {
        Self {
            generator: GeneratorConfig::from_env(),
            pools: PoolSettings::from_env(),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(PoolforgeError::from)?;
        self.validate_custom()?;
        Ok(())
    }

    /// Custom validation logic that goes beyond what the validator crate can do
    fn validate_custom(&self) -> Result<()> {
        if self.generator.input_file == self.generator.output_file {
            return Err(PoolforgeError::validation(
                "Input and output files cannot be the same path",
            ));
        }

        match &self.pools.whitelist {
            Whitelist::Literal(entries) if entries.is_empty() => {
                return Err(PoolforgeError::validation(
                    "Literal whitelist cannot be empty",
                ));
            }
            Whitelist::Reference(name)
                if name.is_empty()
                    || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                return Err(PoolforgeError::validation(
                    "Whitelist reference name must be alphanumeric or underscore",
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

/// Generator run configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratorConfig {
    /// Path to the FQDN input table
    pub input_file: PathBuf,

    /// Path of the generated JSON document
    pub output_file: PathBuf,

    /// Run validation only, skip writing the output
    pub check_only: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_file: DEFAULT_INPUT_FILE.into(),
            output_file: DEFAULT_OUTPUT_FILE.into(),
            check_only: false,
        }
    }
}

impl GeneratorConfig {
    /// Create GeneratorConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let input_file = std::env::var("POOLFORGE_INPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.input_file);

        let output_file = std::env::var("POOLFORGE_OUTPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_file);

        let check_only = std::env::var("POOLFORGE_CHECK_ONLY")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(false);

        Self { input_file, output_file, check_only }
    }
}

/// Constant fields copied into every generated pool record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PoolSettings {
    /// Local subnets copied into every pool record
    #[validate(length(min = 1, message = "At least one local subnet is required"))]
    pub local_subnets: Vec<String>,

    /// Query-string rewrite rules copied into every pool record
    pub url_rewrites: Vec<RewriteRule>,

    /// Response-header rewrite rules copied into every pool record
    pub header_updates: Vec<HeaderRule>,

    /// Whitelist attached to every pool record, literal or symbolic
    pub whitelist: Whitelist,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            local_subnets: vec![
                "100.116.121.0/24".to_string(),
                "100.124.121.0/24".to_string(),
            ],
            url_rewrites: vec![
                RewriteRule {
                    regex: "100[.]116[.]123[.]240".to_string(),
                    replace: "epm.glb.cala.attmx.avayacloud.com".to_string(),
                },
                RewriteRule {
                    regex: "100[.]124[.]123[.]240".to_string(),
                    replace: "epmgeo.glb.cala.attmx.avayacloud.com".to_string(),
                },
            ],
            header_updates: vec![HeaderRule {
                header: "TerminationURL".to_string(),
                regex: "http".to_string(),
                replace: "https".to_string(),
            }],
            whitelist: Whitelist::Reference("my_whitelist".to_string()),
        }
    }
}

impl PoolSettings {
    /// Create PoolSettings from environment variables.
    ///
    /// `POOLFORGE_WHITELIST` (comma-separated literal list) takes precedence
    /// over `POOLFORGE_WHITELIST_REF` (symbolic name).
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(raw) = std::env::var("POOLFORGE_LOCAL_SUBNETS") {
            settings.local_subnets = split_csv(&raw);
        }

        if let Ok(raw) = std::env::var("POOLFORGE_WHITELIST") {
            settings.whitelist = Whitelist::Literal(split_csv(&raw));
        } else if let Ok(name) = std::env::var("POOLFORGE_WHITELIST_REF") {
            settings.whitelist = Whitelist::Reference(name);
        }

        settings
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_deployment_constants() {
        let settings = PoolSettings::default();
        assert_eq!(
            settings.local_subnets,
            vec!["100.116.121.0/24", "100.124.121.0/24"]
        );
        assert_eq!(settings.url_rewrites.len(), 2);
        assert_eq!(settings.url_rewrites[0].regex, "100[.]116[.]123[.]240");
        assert_eq!(settings.header_updates.len(), 1);
        assert_eq!(settings.header_updates[0].header, "TerminationURL");
        assert_eq!(
            settings.whitelist,
            Whitelist::Reference("my_whitelist".to_string())
        );
    }

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_same_input_and_output_path_rejected() {
        let mut config = AppConfig::default();
        config.generator.output_file = config.generator.input_file.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_subnets_rejected() {
        let mut config = AppConfig::default();
        config.pools.local_subnets.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_literal_whitelist_rejected() {
        let mut config = AppConfig::default();
        config.pools.whitelist = Whitelist::Literal(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_whitelist_reference_name_rejected() {
        let mut config = AppConfig::default();
        config.pools.whitelist = Whitelist::Reference("my whitelist".to_string());
        assert!(config.validate().is_err());

        config.pools.whitelist = Whitelist::Reference(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_overrides() {
        use std::env;

        env::set_var("POOLFORGE_INPUT_FILE", "custom_input.txt");
        env::set_var("POOLFORGE_OUTPUT_FILE", "custom_output.json");
        env::set_var("POOLFORGE_WHITELIST_REF", "team_whitelist");

        let config = AppConfig::from_env();
        assert_eq!(config.generator.input_file, PathBuf::from("custom_input.txt"));
        assert_eq!(config.generator.output_file, PathBuf::from("custom_output.json"));
        assert_eq!(
            config.pools.whitelist,
            Whitelist::Reference("team_whitelist".to_string())
        );

        // A literal whitelist takes precedence over the reference.
        env::set_var("POOLFORGE_WHITELIST", "10.0.0.0/8, fqdn1.sld.tld");
        let config = AppConfig::from_env();
        assert_eq!(
            config.pools.whitelist,
            Whitelist::Literal(vec!["10.0.0.0/8".to_string(), "fqdn1.sld.tld".to_string()])
        );

        // Clean up
        env::remove_var("POOLFORGE_INPUT_FILE");
        env::remove_var("POOLFORGE_OUTPUT_FILE");
        env::remove_var("POOLFORGE_WHITELIST_REF");
        env::remove_var("POOLFORGE_WHITELIST");
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(split_csv("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_csv(""), Vec::<String>::new());
        assert_eq!(split_csv("a,,b"), vec!["a", "b"]);
    }
}
