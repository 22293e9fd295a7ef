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

//! Check command - reconciliation report without rendering

use crate::cli::InputArgs;
use crate::config::{ChartConfig, ConfigLayer};
use crate::error::CliError;
use crate::pipeline::{self, Inputs};
use crate::report::CheckReport;
use std::path::PathBuf;

/// Reconcile both tables and print the report, optionally exporting JSON.
pub fn check(input: &InputArgs, layer: ConfigLayer, json: Option<PathBuf>) -> Result<(), CliError> {
    let config = ChartConfig::resolve(input.config.as_deref(), layer)?;
    let inputs = Inputs {
        table_a: input.table_a.clone(),
        table_b: input.table_b.clone(),
    };

    let prepared = pipeline::prepare(&inputs, &config)?;
    let report = CheckReport::new(&prepared, &config);
    report.print();

    if let Some(path) = json {
        report.export_json(&path)?;
        println!();
        println!("Report written to {}", path.display());
    }
    Ok(())
}
