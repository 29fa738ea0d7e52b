//! # zod-openapi-cli
//!
//! CLI library for converting Zod model documents into OpenAPI schema objects.
//!
//! This crate provides the core functionality for the `zod-openapi` CLI tool,
//! including configuration, input loading, conversion and file output.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`loader`] - Model and JSON document loading
//! - [`writer`] - Rendering, file output and dry-run support
//! - [`logging`] - Diagnostic logging setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod writer;

use std::path::Path;
use tracing::{debug, info};
use zod_openapi::{convert_with_options, OpenApiSchema};

// Re-export main types for convenience
pub use config::{CliArgs, Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use writer::{FileWriter, WriteResult};

/// Outcome of comparing a converted model against an existing document.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The existing document matches the conversion.
    UpToDate,
    /// The existing document differs from the conversion.
    OutOfDate {
        /// What the document should contain.
        expected: OpenApiSchema,
    },
}

impl CheckOutcome {
    /// Whether the existing document matches.
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckOutcome::UpToDate)
    }
}

/// Load a model document and convert it with the configured options.
pub fn convert_file(input: &Path, config: &Config) -> CliResult<OpenApiSchema> {
    ConfigManager::validate(config)?;
    let model = loader::load_model(input)?;
    let schema = convert_with_options(&model, config.convert_options());
    info!(input = %input.display(), "converted model");
    Ok(schema)
}

/// Convert a model and render it to JSON text.
pub fn convert_to_string(input: &Path, config: &Config) -> CliResult<String> {
    let schema = convert_file(input, config)?;
    Ok(writer::render(&schema, config.output.pretty)?)
}

/// Compare a converted model with an existing OpenAPI document.
///
/// Documents are compared as JSON values, so formatting and key order do not
/// matter.
pub fn check_file(input: &Path, against: &Path, config: &Config) -> CliResult<CheckOutcome> {
    let expected = convert_file(input, config)?;
    let existing = loader::load_json(against)?;
    let converted = expected.to_value().map_err(error::WriteError::from)?;

    if converted == existing {
        Ok(CheckOutcome::UpToDate)
    } else {
        debug!(against = %against.display(), "document differs from conversion");
        Ok(CheckOutcome::OutOfDate { expected })
    }
}
