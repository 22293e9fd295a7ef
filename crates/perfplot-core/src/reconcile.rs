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

//! Schema reconciliation and reference size selection.
//!
//! Two tables produced independently rarely agree on every column. This module
//! narrows them down to the operations that
//!
//! 1. appear in both tables and in the catalog (three-way intersection), and
//! 2. have a complete series, i.e. as many samples as the reference size axis,
//!    in both tables.
//!
//! The reference size axis is taken from the first operation, in catalog order,
//! whose series length equals the configured sample count in both tables and
//! whose sizes are distinct. Series that repeat a size have more than one value
//! per x position and are never charted.

use crate::catalog::OperationCatalog;
use crate::error::{PipelineError, Result};
use crate::table::MeasurementTable;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// How strictly retained operations are checked against the reference sizes.
///
/// Reference selection trusts that every operation was sampled at the same
/// sizes. `Trust` keeps that assumption unchecked, `Warn` verifies it and logs
/// mismatches, `Strict` additionally drops mismatching operations and only
/// accepts a reference operation whose sizes agree in both tables, so the
/// outcome does not depend on which table comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SizeCheck {
    Trust,
    #[default]
    Warn,
    Strict,
}

impl FromStr for SizeCheck {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trust" => Ok(SizeCheck::Trust),
            "warn" => Ok(SizeCheck::Warn),
            "strict" => Ok(SizeCheck::Strict),
            other => Err(PipelineError::UnknownSizeCheck(other.to_string())),
        }
    }
}

impl fmt::Display for SizeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeCheck::Trust => "trust",
            SizeCheck::Warn => "warn",
            SizeCheck::Strict => "strict",
        };
        f.write_str(name)
    }
}

/// Parameters for [`reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Number of distinct input sizes the benchmark was configured to sweep.
    pub expected_count: usize,
    pub size_check: SizeCheck,
}

impl ReconcileOptions {
    pub fn new(expected_count: usize) -> Self {
        Self {
            expected_count,
            size_check: SizeCheck::default(),
        }
    }

    pub fn with_size_check(mut self, size_check: SizeCheck) -> Self {
        self.size_check = size_check;
        self
    }
}

/// Shared x-axis for every panel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferenceSizes {
    /// Operation the sizes were taken from.
    pub operation: String,
    pub sizes: Vec<i64>,
}

impl ReferenceSizes {
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Why a common operation did not make it into the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DropReason {
    /// Series length differs from the reference axis in at least one table.
    LengthMismatch {
        len_a: usize,
        len_b: usize,
        expected: usize,
    },
    /// Series sizes differ from the reference axis (strict size check only).
    SizeMismatch { table: String },
    /// Series records the same size more than once.
    DuplicateSizes { table: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::LengthMismatch {
                len_a,
                len_b,
                expected,
            } => write!(
                f,
                "incomplete series ({} and {} samples, expected {})",
                len_a, len_b, expected
            ),
            DropReason::SizeMismatch { table } => {
                write!(f, "sizes in '{}' differ from the reference axis", table)
            }
            DropReason::DuplicateSizes { table } => {
                write!(f, "sizes in '{}' are not unique", table)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DroppedOperation {
    pub operation: String,
    pub reason: DropReason,
}

/// Outcome of reconciling two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reconciliation {
    /// Operations to chart, in catalog order.
    pub operations: Vec<String>,
    pub reference: ReferenceSizes,
    /// Common operations that were filtered out, in catalog order.
    pub dropped: Vec<DroppedOperation>,
    /// Columns of the first table outside the catalog.
    pub unrecognized_a: Vec<String>,
    /// Columns of the second table outside the catalog.
    pub unrecognized_b: Vec<String>,
}

/// Three-way intersection of both tables' columns and the catalog.
///
/// The result follows catalog order, not header or alphabetical order.
///
/// # Errors
///
/// Returns [`PipelineError::NoCommonOperations`] when the intersection is
/// empty. The error lists the columns of each table that are not catalog
/// members so the unexpected input can be identified.
///
/// # Examples
///
/// ```
/// use perfplot_core::{common_operations, OperationCatalog, TableBuilder};
///
/// let mut a = TableBuilder::new("A");
/// a.declare("get");
/// a.declare("put");
/// let mut b = TableBuilder::new("B");
/// b.declare("put");
/// b.declare("remove");
///
/// let catalog = OperationCatalog::new(["put", "get", "remove"]).unwrap();
/// let common = common_operations(&a.finish(), &b.finish(), &catalog).unwrap();
/// assert_eq!(common, vec!["put".to_string()]);
/// ```
pub fn common_operations(
    table_a: &MeasurementTable,
    table_b: &MeasurementTable,
    catalog: &OperationCatalog,
) -> Result<Vec<String>> {
    let common: Vec<String> = catalog
        .iter()
        .filter(|op| table_a.has_operation(op) && table_b.has_operation(op))
        .map(str::to_string)
        .collect();

    if common.is_empty() {
        return Err(PipelineError::NoCommonOperations {
            table_a: table_a.label().to_string(),
            table_b: table_b.label().to_string(),
            unexpected_a: table_a.unrecognized(catalog),
            unexpected_b: table_b.unrecognized(catalog),
        });
    }

    debug!(count = common.len(), "common operations found");
    Ok(common)
}

/// Picks the shared size axis using a first-fit scan over `candidates`.
///
/// The first operation whose series holds exactly `expected_count` distinct
/// sizes in both tables contributes its sizes, taken from `table_a`.
///
/// # Errors
///
/// Returns [`PipelineError::NoCompleteOperation`] when no candidate qualifies,
/// which usually means the two benchmark runs were configured with different
/// size sweeps.
pub fn select_reference_sizes(
    table_a: &MeasurementTable,
    table_b: &MeasurementTable,
    candidates: &[String],
    expected_count: usize,
) -> Result<ReferenceSizes> {
    select_reference(table_a, table_b, candidates, expected_count, SizeCheck::Warn)
}

/// First-fit scan shared by [`select_reference_sizes`] and [`reconcile`].
///
/// Under [`SizeCheck::Strict`] a candidate also needs identical sizes in both
/// tables.
fn select_reference(
    table_a: &MeasurementTable,
    table_b: &MeasurementTable,
    candidates: &[String],
    expected_count: usize,
    size_check: SizeCheck,
) -> Result<ReferenceSizes> {
    for operation in candidates {
        let (Some(series_a), Some(series_b)) =
            (table_a.series(operation), table_b.series(operation))
        else {
            continue;
        };
        if series_a.len() != expected_count || series_b.len() != expected_count {
            continue;
        }

        let sizes = series_a.sizes();
        let sizes_b = series_b.sizes();
        if has_repeated_size(&sizes) || has_repeated_size(&sizes_b) {
            debug!(%operation, "reference candidate skipped: repeated sizes");
            continue;
        }
        if size_check == SizeCheck::Strict && sizes != sizes_b {
            debug!(%operation, "reference candidate skipped: tables disagree on sizes");
            continue;
        }

        debug!(%operation, "reference sizes selected");
        return Ok(ReferenceSizes {
            operation: operation.clone(),
            sizes,
        });
    }

    Err(PipelineError::NoCompleteOperation {
        expected: expected_count,
    })
}

/// Reconciles two tables against the catalog.
///
/// Runs the intersection, the reference selection and the per-operation
/// filters in that order. Dropped operations are logged and recorded in the
/// result.
///
/// # Errors
///
/// - [`PipelineError::InvalidExpectedCount`] if `expected_count` is zero
/// - [`PipelineError::NoCommonOperations`] if the tables share no catalog operation
/// - [`PipelineError::NoCompleteOperation`] if no reference axis can be established
/// - [`PipelineError::NothingToChart`] if every common operation is filtered out
pub fn reconcile(
    table_a: &MeasurementTable,
    table_b: &MeasurementTable,
    catalog: &OperationCatalog,
    options: ReconcileOptions,
) -> Result<Reconciliation> {
    if options.expected_count == 0 {
        return Err(PipelineError::InvalidExpectedCount);
    }

    let unrecognized_a = table_a.unrecognized(catalog);
    let unrecognized_b = table_b.unrecognized(catalog);
    for (table, columns) in [(table_a, &unrecognized_a), (table_b, &unrecognized_b)] {
        for column in columns {
            warn!(table = table.label(), %column, "column not in catalog, ignored");
        }
    }

    let common = common_operations(table_a, table_b, catalog)?;
    let reference = select_reference(
        table_a,
        table_b,
        &common,
        options.expected_count,
        options.size_check,
    )?;

    let mut operations = Vec::new();
    let mut dropped = Vec::new();

    for operation in common {
        let len_a = table_a.series_len(&operation);
        let len_b = table_b.series_len(&operation);

        if len_a != reference.len() || len_b != reference.len() {
            warn!(
                %operation,
                len_a,
                len_b,
                expected = reference.len(),
                "operation dropped: incomplete series"
            );
            dropped.push(DroppedOperation {
                operation,
                reason: DropReason::LengthMismatch {
                    len_a,
                    len_b,
                    expected: reference.len(),
                },
            });
            continue;
        }

        if let Some(table) = first_repeated_size(&operation, table_a, table_b) {
            warn!(
                %operation,
                table = table.label(),
                "operation dropped: repeated sizes"
            );
            dropped.push(DroppedOperation {
                operation,
                reason: DropReason::DuplicateSizes {
                    table: table.label().to_string(),
                },
            });
            continue;
        }

        if options.size_check != SizeCheck::Trust {
            if let Some(table) = first_size_mismatch(&operation, &reference, table_a, table_b) {
                warn!(
                    %operation,
                    table = table.label(),
                    "sizes differ from the reference axis"
                );
                if options.size_check == SizeCheck::Strict {
                    dropped.push(DroppedOperation {
                        operation,
                        reason: DropReason::SizeMismatch {
                            table: table.label().to_string(),
                        },
                    });
                    continue;
                }
            }
        }

        operations.push(operation);
    }

    if operations.is_empty() {
        return Err(PipelineError::NothingToChart);
    }

    debug!(
        retained = operations.len(),
        dropped = dropped.len(),
        "reconciliation finished"
    );

    Ok(Reconciliation {
        operations,
        reference,
        dropped,
        unrecognized_a,
        unrecognized_b,
    })
}

fn has_repeated_size(sizes: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(sizes.len());
    sizes.iter().any(|size| !seen.insert(*size))
}

fn first_repeated_size<'t>(
    operation: &str,
    table_a: &'t MeasurementTable,
    table_b: &'t MeasurementTable,
) -> Option<&'t MeasurementTable> {
    [table_a, table_b].into_iter().find(|table| {
        table
            .series(operation)
            .is_some_and(|series| has_repeated_size(&series.sizes()))
    })
}

fn first_size_mismatch<'t>(
    operation: &str,
    reference: &ReferenceSizes,
    table_a: &'t MeasurementTable,
    table_b: &'t MeasurementTable,
) -> Option<&'t MeasurementTable> {
    [table_a, table_b].into_iter().find(|table| {
        table
            .series(operation)
            .is_some_and(|series| series.sizes() != reference.sizes)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableBuilder;
    use tracing_test::traced_test;

    fn table(label: &str, columns: &[(&str, &[(i64, i64)])]) -> MeasurementTable {
        let mut builder = TableBuilder::new(label);
        for (op, samples) in columns {
            builder.declare(op);
            for &(size, value) in samples.iter() {
                builder.push(op, size, value);
            }
        }
        builder.finish()
    }

    const FIVE: &[(i64, i64)] = &[(1, 10), (2, 20), (3, 30), (4, 40), (5, 50)];
    const FOUR: &[(i64, i64)] = &[(1, 10), (2, 20), (3, 30), (4, 40)];

    fn catalog() -> OperationCatalog {
        OperationCatalog::new(["put", "get", "remove"]).unwrap()
    }

    #[test]
    fn test_three_way_intersection() {
        let a = table("A", &[("put", FIVE), ("get", FIVE)]);
        let b = table("B", &[("put", FIVE), ("remove", FIVE)]);

        let result = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap();
        assert_eq!(result.operations, vec!["put".to_string()]);
        assert_eq!(result.reference.sizes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_catalog_order_preserved() {
        let a = table("A", &[("remove", FIVE), ("get", FIVE), ("put", FIVE)]);
        let b = table("B", &[("get", FIVE), ("remove", FIVE), ("put", FIVE)]);

        let result = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap();
        assert_eq!(result.operations, vec!["put", "get", "remove"]);
    }

    #[test]
    fn test_empty_intersection_names_unexpected_columns() {
        let a = table("A", &[("Put", FIVE)]);
        let b = table("B", &[("put", FIVE)]);

        let err = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap_err();
        match err {
            PipelineError::NoCommonOperations {
                table_a,
                unexpected_a,
                unexpected_b,
                ..
            } => {
                assert_eq!(table_a, "A");
                assert_eq!(unexpected_a, vec!["Put".to_string()]);
                assert!(unexpected_b.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_complete_operation() {
        let a = table("A", &[("put", FOUR), ("get", FOUR)]);
        let b = table("B", &[("put", FOUR), ("get", FOUR)]);

        let err = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap_err();
        assert_eq!(err, PipelineError::NoCompleteOperation { expected: 5 });
    }

    #[test]
    fn test_reference_first_fit_skips_incomplete() {
        let a = table("A", &[("put", FOUR), ("get", FIVE)]);
        let b = table("B", &[("put", FIVE), ("get", FIVE)]);

        let common = common_operations(&a, &b, &catalog()).unwrap();
        let reference = select_reference_sizes(&a, &b, &common, 5).unwrap();
        assert_eq!(reference.operation, "get");
    }

    #[test]
    #[traced_test]
    fn test_incomplete_operation_dropped_and_logged() {
        let a = table("A", &[("put", FIVE), ("get", FOUR)]);
        let b = table("B", &[("put", FIVE), ("get", FIVE)]);

        let result = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap();
        assert_eq!(result.operations, vec!["put"]);
        assert_eq!(
            result.dropped,
            vec![DroppedOperation {
                operation: "get".to_string(),
                reason: DropReason::LengthMismatch {
                    len_a: 4,
                    len_b: 5,
                    expected: 5
                },
            }]
        );
        assert!(logs_contain("incomplete series"));
    }

    #[test]
    fn test_zero_expected_count_rejected() {
        let a = table("A", &[("put", FIVE)]);
        let err = reconcile(&a, &a, &catalog(), ReconcileOptions::new(0)).unwrap_err();
        assert_eq!(err, PipelineError::InvalidExpectedCount);
    }

    #[test]
    fn test_size_check_modes() {
        let shifted: &[(i64, i64)] = &[(1, 10), (2, 20), (3, 30), (4, 40), (6, 50)];
        let a = table("A", &[("put", FIVE), ("get", FIVE)]);
        let b = table("B", &[("put", FIVE), ("get", shifted)]);

        let warn = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap();
        assert_eq!(warn.operations, vec!["put", "get"]);

        let trust = reconcile(
            &a,
            &b,
            &catalog(),
            ReconcileOptions::new(5).with_size_check(SizeCheck::Trust),
        )
        .unwrap();
        assert_eq!(trust.operations, vec!["put", "get"]);

        let strict = reconcile(
            &a,
            &b,
            &catalog(),
            ReconcileOptions::new(5).with_size_check(SizeCheck::Strict),
        )
        .unwrap();
        assert_eq!(strict.operations, vec!["put"]);
        assert_eq!(
            strict.dropped[0].reason,
            DropReason::SizeMismatch {
                table: "B".to_string()
            }
        );
    }

    #[test]
    fn test_strict_needs_reference_agreed_by_both_tables() {
        let shifted: &[(i64, i64)] = &[(9, 10), (8, 20), (7, 30), (6, 40), (5, 50)];
        let a = table("A", &[("put", FIVE), ("get", FOUR)]);
        let b = table("B", &[("put", shifted), ("get", FOUR)]);

        let strict = ReconcileOptions::new(5).with_size_check(SizeCheck::Strict);
        let err = reconcile(&a, &b, &catalog(), strict).unwrap_err();
        assert_eq!(err, PipelineError::NoCompleteOperation { expected: 5 });

        // Warn mode still charts the operation
        let warn = reconcile(&a, &b, &catalog(), ReconcileOptions::new(5)).unwrap();
        assert_eq!(warn.operations, vec!["put"]);
    }

    #[test]
    fn test_strict_outcome_independent_of_table_order() {
        let three: &[(i64, i64)] = &[(1, 10), (2, 20), (3, 30)];
        let shifted: &[(i64, i64)] = &[(1, 10), (2, 20), (4, 30)];
        let a = table("A", &[("put", three), ("get", three)]);
        let b = table("B", &[("put", shifted), ("get", three)]);
        let strict = ReconcileOptions::new(3).with_size_check(SizeCheck::Strict);

        let forward = reconcile(&a, &b, &catalog(), strict).unwrap();
        let backward = reconcile(&b, &a, &catalog(), strict).unwrap();

        assert_eq!(forward.operations, vec!["get"]);
        assert_eq!(backward.operations, vec!["get"]);
        assert_eq!(forward.reference, backward.reference);
        assert_eq!(forward.reference.operation, "get");
        assert_eq!(
            forward.dropped[0].reason,
            DropReason::SizeMismatch {
                table: "B".to_string()
            }
        );
    }

    #[test]
    #[traced_test]
    fn test_repeated_sizes_never_charted() {
        let repeated: &[(i64, i64)] = &[(1, 10), (1, 11), (2, 20), (3, 30), (4, 40)];
        let a = table("A", &[("put", repeated), ("get", FIVE)]);
        let b = table("B", &[("put", repeated), ("get", FIVE)]);

        for check in [SizeCheck::Trust, SizeCheck::Warn, SizeCheck::Strict] {
            let options = ReconcileOptions::new(5).with_size_check(check);
            let result = reconcile(&a, &b, &catalog(), options).unwrap();
            assert_eq!(result.operations, vec!["get"], "{check}");
            assert_eq!(result.reference.operation, "get");
            assert_eq!(result.reference.sizes, vec![1, 2, 3, 4, 5]);
            assert_eq!(
                result.dropped,
                vec![DroppedOperation {
                    operation: "put".to_string(),
                    reason: DropReason::DuplicateSizes {
                        table: "A".to_string()
                    },
                }]
            );
        }
        assert!(logs_contain("repeated sizes"));
    }

    #[test]
    fn test_repeated_sizes_cannot_be_reference() {
        let repeated: &[(i64, i64)] = &[(1, 10), (1, 11), (2, 20), (3, 30), (4, 40)];
        let a = table("A", &[("put", repeated)]);
        let b = table("B", &[("put", repeated)]);

        let common = common_operations(&a, &b, &catalog()).unwrap();
        let err = select_reference_sizes(&a, &b, &common, 5).unwrap_err();
        assert_eq!(err, PipelineError::NoCompleteOperation { expected: 5 });
    }

    #[test]
    fn test_size_check_from_str() {
        assert_eq!("Strict".parse::<SizeCheck>().unwrap(), SizeCheck::Strict);
        assert_eq!("trust".parse::<SizeCheck>().unwrap(), SizeCheck::Trust);
        assert!("sometimes".parse::<SizeCheck>().is_err());
        assert_eq!(SizeCheck::Warn.to_string(), "warn");
    }

    #[test]
    fn test_drop_reason_display() {
        let reason = DropReason::LengthMismatch {
            len_a: 8,
            len_b: 10,
            expected: 10,
        };
        assert_eq!(
            reason.to_string(),
            "incomplete series (8 and 10 samples, expected 10)"
        );
    }
}
