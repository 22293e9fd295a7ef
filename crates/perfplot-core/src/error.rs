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

//! Error types for reconciliation and bounds computation.

use thiserror::Error;

/// Fatal pipeline conditions.
///
/// Each variant corresponds to one structurally absent prerequisite that stops
/// a run before anything is drawn. Recoverable per-cell problems never surface
/// here; they are logged by the parser instead.
///
/// # Examples
///
/// ```
/// use perfplot_core::PipelineError;
///
/// let err = PipelineError::NoCompleteOperation { expected: 10 };
/// assert_eq!(
///     err.to_string(),
///     "No method with complete data for all sizes (expected 10 samples per operation)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The three-way intersection of both tables and the catalog is empty.
    ///
    /// `unexpected_a` / `unexpected_b` list the columns of each table that the
    /// catalog does not know about, which is usually the cause.
    #[error(
        "No common operations between '{table_a}' and '{table_b}' within the catalog \
         (unexpected columns in '{table_a}': [{}]; in '{table_b}': [{}])",
        unexpected_a.join(", "),
        unexpected_b.join(", ")
    )]
    NoCommonOperations {
        /// Label of the first table.
        table_a: String,
        /// Label of the second table.
        table_b: String,
        /// Columns of the first table not present in the catalog.
        unexpected_a: Vec<String>,
        /// Columns of the second table not present in the catalog.
        unexpected_b: Vec<String>,
    },

    /// No operation has the expected number of samples in both tables.
    #[error("No method with complete data for all sizes (expected {expected} samples per operation)")]
    NoCompleteOperation {
        /// The configured per-operation sample count.
        expected: usize,
    },

    /// Every common operation was dropped by the length or size filter.
    #[error("Nothing to chart: no operation passed reconciliation")]
    NothingToChart,

    /// The operation catalog is empty.
    #[error("Operation catalog is empty")]
    EmptyCatalog,

    /// The expected sample count is zero.
    #[error("Expected sample count must be at least 1")]
    InvalidExpectedCount,

    /// Unknown bounds policy name.
    #[error("Unknown bounds policy '{0}' (expected one of: padded-linear, nice-ceiling, log-scale, symmetric-padding)")]
    UnknownPolicy(String),

    /// Unknown size check mode.
    #[error("Unknown size check '{0}' (expected one of: trust, warn, strict)")]
    UnknownSizeCheck(String),
}

/// Convenience type alias for `Result` with `PipelineError`.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_common_operations_display() {
        let err = PipelineError::NoCommonOperations {
            table_a: "CustomMap".to_string(),
            table_b: "HashMap".to_string(),
            unexpected_a: vec!["Put".to_string()],
            unexpected_b: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("No common operations"));
        assert!(msg.contains("'CustomMap': [Put]"));
        assert!(msg.contains("'HashMap': []"));
    }

    #[test]
    fn test_no_complete_operation_display() {
        let err = PipelineError::NoCompleteOperation { expected: 8 };
        assert!(err
            .to_string()
            .contains("No method with complete data for all sizes"));
    }

    #[test]
    fn test_distinct_messages() {
        let messages = [
            PipelineError::NoCompleteOperation { expected: 1 }.to_string(),
            PipelineError::NothingToChart.to_string(),
            PipelineError::EmptyCatalog.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PipelineError>();
    }
}
