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

//! Reconciliation report for the `check` command.
//!
//! The same [`CheckReport`] feeds the colored console summary and the JSON
//! export.

use crate::config::ChartConfig;
use crate::error::CliError;
use crate::pipeline::Prepared;
use colored::Colorize;
use perfplot_core::{
    BoundsPolicy, DroppedOperation, MeasurementTable, OperationCatalog, PanelPlan, ScaleKind,
    SizeCheck,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Shape of one input table.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub label: String,
    pub columns: Vec<String>,
    pub unrecognized: Vec<String>,
}

impl TableSummary {
    fn new(table: &MeasurementTable, catalog: &OperationCatalog) -> Self {
        Self {
            label: table.label().to_string(),
            columns: table.operations().map(str::to_string).collect(),
            unrecognized: table.unrecognized(catalog),
        }
    }
}

/// Full reconciliation outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub table_a: TableSummary,
    pub table_b: TableSummary,
    pub expected_count: usize,
    pub size_check: SizeCheck,
    pub policy: BoundsPolicy,
    pub reference_operation: String,
    pub sizes: Vec<i64>,
    pub panels: Vec<PanelPlan>,
    pub dropped: Vec<DroppedOperation>,
}

impl CheckReport {
    pub fn new(prepared: &Prepared, config: &ChartConfig) -> Self {
        Self {
            table_a: TableSummary::new(&prepared.table_a, &config.catalog),
            table_b: TableSummary::new(&prepared.table_b, &config.catalog),
            expected_count: config.expected_count,
            size_check: config.size_check,
            policy: config.policy,
            reference_operation: prepared.reconciliation.reference.operation.clone(),
            sizes: prepared.plan.sizes.clone(),
            panels: prepared.plan.panels.clone(),
            dropped: prepared.reconciliation.dropped.clone(),
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{}", "Reconciliation Report".bold().underline());
        println!();
        println!(
            "  {} {} ({} columns)",
            "A:".bright_blue().bold(),
            self.table_a.label,
            self.table_a.columns.len()
        );
        println!(
            "  {} {} ({} columns)",
            "B:".bright_blue().bold(),
            self.table_b.label,
            self.table_b.columns.len()
        );
        for summary in [&self.table_a, &self.table_b] {
            if !summary.unrecognized.is_empty() {
                println!(
                    "  {} columns outside the catalog in '{}': {}",
                    "!".yellow().bold(),
                    summary.label,
                    summary.unrecognized.join(", ")
                );
            }
        }

        println!();
        println!(
            "{} {} sizes from '{}' (expected {}, size check: {})",
            "Size axis:".bold(),
            self.sizes.len(),
            self.reference_operation,
            self.expected_count,
            self.size_check
        );
        println!("  {}", format_sizes(&self.sizes));

        println!();
        println!("{} ({})", "Panels:".bold(), self.policy);
        for panel in &self.panels {
            let scale = match panel.bounds.scale {
                ScaleKind::Linear => "linear",
                ScaleKind::Log => "log",
            };
            println!(
                "  {} {:<20} y: {} .. {} ({})",
                "✓".green(),
                panel.operation,
                panel.bounds.y_min,
                panel.bounds.y_max,
                scale
            );
        }

        if !self.dropped.is_empty() {
            println!();
            println!("{}", "Dropped:".yellow().bold());
            for dropped in &self.dropped {
                println!("  {} {:<20} {}", "✗".red(), dropped.operation, dropped.reason);
            }
        }
    }

    /// Writes the report as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| CliError::io_error(path, e))
    }
}

/// Compact size list: the full list when short, first and last three otherwise.
fn format_sizes(sizes: &[i64]) -> String {
    let join = |s: &[i64]| {
        s.iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    if sizes.len() <= 8 {
        join(sizes)
    } else {
        format!(
            "{}, ..., {}",
            join(&sizes[..3]),
            join(&sizes[sizes.len() - 3..])
        )
    }
}
