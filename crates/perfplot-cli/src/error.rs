// Dweve PerfPlot - Benchmark comparison charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the PerfPlot CLI.
//!
//! Every fatal condition maps to its own variant so the message printed by
//! the binary names the cause.

use perfplot_core::PipelineError;
use perfplot_csv::CsvError;
use perfplot_render::RenderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for PerfPlot CLI operations.
///
/// # Examples
///
/// ```rust
/// use perfplot_cli::error::CliError;
/// use perfplot_csv::CsvError;
///
/// let err = CliError::table(
///     "CustomMap",
///     CsvError::NotFound { path: "custom_map_performance.csv".into() },
/// );
/// assert_eq!(
///     err.to_string(),
///     "Failed to read table 'CustomMap': Input table not found: custom_map_performance.csv"
/// );
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// An input table could not be read.
    #[error("Failed to read table '{label}': {source}")]
    Table {
        /// Label of the table being read
        label: String,
        /// Underlying reader error
        #[source]
        source: CsvError,
    },

    /// Reconciliation or configuration of the pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Drawing or saving the figure failed.
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    /// A configuration value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file could not be read or parsed.
    #[error("Failed to load configuration '{path}': {message}")]
    ConfigFile {
        /// Path of the configuration file
        path: PathBuf,
        /// Reason
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Attach the table label to a reader error.
    pub fn table(label: impl Into<String>, source: CsvError) -> Self {
        Self::Table {
            label: label.into(),
            source,
        }
    }

    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration file error.
    pub fn config_file(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_errors_pass_through() {
        let err: CliError = PipelineError::NothingToChart.into();
        assert_eq!(
            err.to_string(),
            PipelineError::NothingToChart.to_string()
        );
    }

    #[test]
    fn test_table_error_keeps_source() {
        use std::error::Error;

        let err = CliError::table(
            "HashMap",
            CsvError::InvalidSize {
                row: 2,
                value: "x".to_string(),
            },
        );
        assert!(err.to_string().contains("'HashMap'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_display() {
        let err = CliError::Config("dpi must be between 50 and 600, got 10".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: dpi must be between 50 and 600, got 10"
        );
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = json_err.into();
        assert!(matches!(err, CliError::JsonFormat { .. }));
    }
}
