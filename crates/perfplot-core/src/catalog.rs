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

//! Canonical operation catalog and column classification.

use crate::error::{PipelineError, Result};

/// Operations measured by the map benchmark suite, in display order.
pub const DEFAULT_MAP_OPERATIONS: &[&str] = &[
    "put(K,V)",
    "get(K)",
    "getOrDefault(K,V)",
    "remove(K)",
    "remove(K,V)",
    "containsKey(K)",
    "containsValue(V)",
    "putIfAbsent(K,V)",
    "replace(K,V)",
    "replace(K,V,V)",
    "keySet()",
    "values()",
    "clear()",
    "equals(Object o)",
    "hashCode()",
    "toString()",
];

/// Ordered, duplicate-free list of operation names.
///
/// The catalog is both the filter applied to table columns and the order in
/// which panels are drawn. It is immutable once built.
///
/// # Examples
///
/// ```
/// use perfplot_core::OperationCatalog;
///
/// let catalog = OperationCatalog::new(["put", "get", "put", "remove"]).unwrap();
/// assert_eq!(catalog.names(), &["put", "get", "remove"]);
/// assert_eq!(catalog.position("remove"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperationCatalog {
    names: Vec<String>,
}

impl OperationCatalog {
    /// Builds a catalog, dropping repeated names (first occurrence wins).
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyCatalog`] if no name remains after
    /// trimming and deduplication.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || unique.iter().any(|n| n == name) {
                continue;
            }
            unique.push(name.to_string());
        }

        if unique.is_empty() {
            return Err(PipelineError::EmptyCatalog);
        }
        Ok(Self { names: unique })
    }

    /// The built-in map benchmark catalog.
    pub fn map_operations() -> Self {
        Self {
            names: DEFAULT_MAP_OPERATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Names in canonical order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Canonical index of `name`, if it is part of the catalog.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Classifies a table column against this catalog.
    pub fn classify(&self, column: &str) -> Column {
        if self.contains(column) {
            Column::Recognized(column.to_string())
        } else {
            Column::Unrecognized(column.to_string())
        }
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        Self::map_operations()
    }
}

/// A measurement column as seen through the catalog.
///
/// Recognized columns take part in reconciliation; unrecognized ones stay in
/// the table but are only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// Column name is a catalog member.
    Recognized(String),
    /// Column name is unknown to the catalog.
    Unrecognized(String),
}

impl Column {
    pub fn name(&self) -> &str {
        match self {
            Column::Recognized(name) | Column::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Column::Recognized(_))
    }
}
