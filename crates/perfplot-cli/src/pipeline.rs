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

//! End-to-end run: parse both tables, reconcile, plan, render.
//!
//! Stages run strictly in sequence and each stage's inputs are dropped before
//! the next one needs its resources; only the output image is written.

use crate::config::ChartConfig;
use crate::error::CliError;
use perfplot_core::{reconcile, ChartPlan, MeasurementTable, ReconcileOptions, Reconciliation};
use perfplot_csv::from_csv_path;
use perfplot_render::{Figure, FigureRenderer};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths of the two tables being compared.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub table_a: PathBuf,
    pub table_b: PathBuf,
}

/// Everything computed before rendering.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub table_a: MeasurementTable,
    pub table_b: MeasurementTable,
    pub reconciliation: Reconciliation,
    pub plan: ChartPlan,
}

/// Labels for both tables: explicit values win, otherwise file stems.
///
/// Identical stems are suffixed with `(A)` and `(B)` so legends stay
/// distinguishable.
///
/// # Examples
///
/// ```
/// use perfplot_cli::pipeline::resolve_labels;
/// use std::path::Path;
///
/// let (a, b) = resolve_labels(
///     Path::new("runs/custom_map.csv"),
///     Path::new("runs/hash_map.csv"),
///     None,
///     Some("HashMap"),
/// );
/// assert_eq!((a.as_str(), b.as_str()), ("custom_map", "HashMap"));
/// ```
pub fn resolve_labels(
    path_a: &Path,
    path_b: &Path,
    label_a: Option<&str>,
    label_b: Option<&str>,
) -> (String, String) {
    let a = label_a.map(str::to_string).unwrap_or_else(|| file_label(path_a));
    let b = label_b.map(str::to_string).unwrap_or_else(|| file_label(path_b));
    if a == b && label_a.is_none() && label_b.is_none() {
        return (format!("{a} (A)"), format!("{b} (B)"));
    }
    (a, b)
}

fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parses and reconciles both tables and computes every panel's bounds.
///
/// # Errors
///
/// Returns [`CliError::Table`] when either table cannot be read, and
/// [`CliError::Pipeline`] when reconciliation finds nothing comparable.
pub fn prepare(inputs: &Inputs, config: &ChartConfig) -> Result<Prepared, CliError> {
    let (label_a, label_b) = resolve_labels(
        &inputs.table_a,
        &inputs.table_b,
        config.label_a.as_deref(),
        config.label_b.as_deref(),
    );

    let table_a = from_csv_path(&inputs.table_a, &label_a, &config.csv)
        .map_err(|e| CliError::table(&label_a, e))?;
    let table_b = from_csv_path(&inputs.table_b, &label_b, &config.csv)
        .map_err(|e| CliError::table(&label_b, e))?;
    debug!(
        a = %label_a,
        b = %label_b,
        width_a = table_a.width(),
        width_b = table_b.width(),
        "tables loaded"
    );

    let options =
        ReconcileOptions::new(config.expected_count).with_size_check(config.size_check);
    let reconciliation = reconcile(&table_a, &table_b, &config.catalog, options)?;
    let plan = ChartPlan::build(&table_a, &table_b, &reconciliation, config.policy);

    info!(
        panels = plan.len(),
        dropped = reconciliation.dropped.len(),
        reference = %reconciliation.reference.operation,
        policy = %config.policy,
        "reconciliation complete"
    );

    Ok(Prepared {
        table_a,
        table_b,
        reconciliation,
        plan,
    })
}

/// Renders the planned figure to `config.output`.
pub fn render(
    prepared: &Prepared,
    config: &ChartConfig,
    renderer: &dyn FigureRenderer,
) -> Result<(), CliError> {
    let figure = Figure::from_plan(&prepared.plan);
    renderer.render(&figure, &config.output)?;
    Ok(())
}
