//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `zod-openapi.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use zod_openapi::{ConvertOptions, DEFAULT_MAX_DEPTH};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "zod-openapi.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Conversion settings.
    pub convert: ConvertConfig,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file. Standard output when unset.
    pub file: Option<PathBuf>,

    /// Whether to pretty-print the JSON document.
    pub pretty: bool,
}

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Nesting depth beyond which nodes translate to `{}`.
    pub max_depth: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: None,
            pretty: true,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Conversion options derived from this configuration.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new().with_max_depth(self.convert.max_depth)
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        Self::validate(&config)?;
        debug!(path = %config_path.display(), "loaded configuration");

        Ok(config)
    }

    /// Reject values the converter cannot work with.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.convert.max_depth == 0 {
            return Err(ConfigError::invalid_value(
                "convert.max_depth",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.file = Some(output.clone());
        }

        if let Some(pretty) = args.pretty {
            config.output.pretty = pretty;
        }

        if let Some(max_depth) = args.max_depth {
            config.convert.max_depth = max_depth;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# zod-openapi configuration file

[output]
# Output file for the generated OpenAPI schema (stdout when omitted)
# file = "openapi-schema.json"

# Pretty-print the JSON document
pretty = true

[convert]
# Nesting depth beyond which schema nodes are emitted as {}
max_depth = 64
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output file override.
    pub output: Option<PathBuf>,

    /// Pretty-print override.
    pub pretty: Option<bool>,

    /// Maximum depth override.
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.file, None);
        assert!(config.output.pretty);
        assert_eq!(config.convert.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.convert_options(), ConvertOptions::default());
    }

    #[test]
    fn test_merge_cli_args_output() {
        let config = Config::default();
        let args = CliArgs {
            output: Some(PathBuf::from("./schema.json")),
            pretty: Some(false),
            ..Default::default()
        };

        let merged = ConfigManager::merge_cli_args(config, &args);
        assert_eq!(merged.output.file, Some(PathBuf::from("./schema.json")));
        assert!(!merged.output.pretty);
    }

    #[test]
    fn test_merge_cli_args_preserves_unset() {
        let config = Config::default();
        let args = CliArgs::default();

        let merged = ConfigManager::merge_cli_args(config.clone(), &args);
        assert_eq!(merged, config);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[output]
file = "out/schema.json"
pretty = false

[convert]
max_depth = 8
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.file, Some(PathBuf::from("out/schema.json")));
        assert!(!config.output.pretty);
        assert_eq!(config.convert.max_depth, 8);
        assert_eq!(config.convert_options().max_depth, 8);
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: Config = toml::from_str(ConfigManager::default_config_content()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut config = Config::default();
        config.convert.max_depth = 0;
        assert!(matches!(
            ConfigManager::validate(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// Set CLI values always win, unset ones never touch the config.
            #[test]
            fn prop_cli_args_take_precedence(
                file_pretty in any::<bool>(),
                file_depth in 1usize..256,
                pretty in proptest::option::of(any::<bool>()),
                max_depth in proptest::option::of(1usize..256),
            ) {
                let mut config = Config::default();
                config.output.pretty = file_pretty;
                config.convert.max_depth = file_depth;

                let args = CliArgs { output: None, pretty, max_depth };
                let merged = ConfigManager::merge_cli_args(config, &args);

                prop_assert_eq!(merged.output.pretty, pretty.unwrap_or(file_pretty));
                prop_assert_eq!(merged.convert.max_depth, max_depth.unwrap_or(file_depth));
                prop_assert!(ConfigManager::validate(&merged).is_ok());
            }
        }
    }
}
