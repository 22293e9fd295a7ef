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

//! Error types for reading benchmark tables.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal table reading errors.
///
/// Per-cell problems in measurement columns are not errors: they are logged
/// and the cell is skipped. Only a missing file, an unusable header or a bad
/// size key abort the read.
///
/// # Examples
///
/// ```
/// use perfplot_csv::CsvError;
///
/// let err = CsvError::InvalidSize {
///     row: 4,
///     value: "ten".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid size value 'ten' at row 4");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input table does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfplot_csv::CsvError;
    ///
    /// let err = CsvError::NotFound { path: "custom.csv".into() };
    /// assert_eq!(err.to_string(), "Input table not found: custom.csv");
    /// ```
    #[error("Input table not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The header row has no size column.
    #[error("Missing size column '{column}' (available: {available})")]
    MissingSizeColumn {
        /// Configured size column name.
        column: String,
        /// Header names that were found, comma separated.
        available: String,
    },

    /// A size cell is empty or not an integer.
    ///
    /// The size is the key of every sample in the row, so there is no way to
    /// recover it per cell.
    #[error("Invalid size value '{value}' at row {row}")]
    InvalidSize {
        /// Line number in the source (1-based, header is line 1).
        row: usize,
        /// Raw cell content.
        value: String,
    },

    /// The input has no header row.
    #[error("Table has no header row")]
    EmptyHeader,

    /// Row count exceeded the configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfplot_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit { limit: 10, actual: 11 };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count reached.
        actual: usize,
    },

    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
