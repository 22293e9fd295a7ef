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

//! Measurement tables: per-operation series of (size, value) samples.

use crate::catalog::{Column, OperationCatalog};

/// One measurement: the input size and the timing recorded for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    pub size: i64,
    pub value: i64,
}

impl Sample {
    pub fn new(size: i64, value: i64) -> Self {
        Self { size, value }
    }
}

/// Samples recorded for one operation, in source row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    operation: String,
    samples: Vec<Sample>,
}

impl Series {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sizes(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.size).collect()
    }

    pub fn values(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.value).collect()
    }
}

/// Parsed benchmark table for one implementation.
///
/// Maps each measurement column to its [`Series`]. Column order follows the
/// source header. Sizes inside a series are neither deduplicated nor sorted;
/// reconciliation decides whether a series is usable.
///
/// Tables are built once through [`TableBuilder`] and are read-only afterwards.
///
/// # Examples
///
/// ```
/// use perfplot_core::TableBuilder;
///
/// let mut builder = TableBuilder::new("CustomMap");
/// builder.declare("put");
/// builder.push("put", 10, 120);
/// builder.push("put", 20, 250);
/// let table = builder.finish();
///
/// assert_eq!(table.label(), "CustomMap");
/// assert_eq!(table.series_len("put"), 2);
/// assert_eq!(table.series_len("get"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementTable {
    label: String,
    series: Vec<Series>,
}

impl MeasurementTable {
    /// Identity of the implementation this table measures.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Column names in header order.
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.operation.as_str())
    }

    pub fn series(&self, operation: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.operation == operation)
    }

    pub fn has_operation(&self, operation: &str) -> bool {
        self.series(operation).is_some()
    }

    /// Number of samples for `operation`; zero when the column is absent.
    pub fn series_len(&self, operation: &str) -> usize {
        self.series(operation).map_or(0, Series::len)
    }

    /// Number of measurement columns.
    pub fn width(&self) -> usize {
        self.series.len()
    }

    /// Classifies every column against the catalog, in header order.
    pub fn columns(&self, catalog: &OperationCatalog) -> Vec<Column> {
        self.operations().map(|name| catalog.classify(name)).collect()
    }

    /// Names of columns the catalog does not know.
    pub fn unrecognized(&self, catalog: &OperationCatalog) -> Vec<String> {
        self.columns(catalog)
            .into_iter()
            .filter_map(|column| match column {
                Column::Unrecognized(name) => Some(name),
                Column::Recognized(_) => None,
            })
            .collect()
    }
}

/// Transient accumulator used while reading rows.
///
/// Columns are declared up front from the header so that a column whose every
/// cell was skipped still shows up (with an empty series).
#[derive(Debug)]
pub struct TableBuilder {
    label: String,
    series: Vec<Series>,
}

impl TableBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            series: Vec::new(),
        }
    }

    /// Registers a column; repeated declarations are ignored.
    pub fn declare(&mut self, operation: &str) {
        if !self.series.iter().any(|s| s.operation == operation) {
            self.series.push(Series {
                operation: operation.to_string(),
                samples: Vec::new(),
            });
        }
    }

    /// Appends a sample, declaring the column on first use.
    pub fn push(&mut self, operation: &str, size: i64, value: i64) {
        self.declare(operation);
        if let Some(series) = self.series.iter_mut().find(|s| s.operation == operation) {
            series.samples.push(Sample::new(size, value));
        }
    }

    /// Freezes the builder into an immutable table.
    pub fn finish(self) -> MeasurementTable {
        MeasurementTable {
            label: self.label,
            series: self.series,
        }
    }
}
