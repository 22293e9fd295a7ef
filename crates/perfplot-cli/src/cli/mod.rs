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

//! CLI command definitions and argument parsing.
//!
//! Both subcommands share [`InputArgs`]; every setting they carry is optional
//! so that unset flags fall through to the configuration file and then to the
//! built-in defaults.

use crate::commands;
use crate::config::{parse_catalog_list, ConfigLayer};
use crate::error::CliError;
use clap::{Args, Subcommand};
use perfplot_core::{BoundsPolicy, SizeCheck};
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use perfplot_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Render the comparison figure for two benchmark tables
    ///
    /// Parses both tables, keeps the catalog operations they share with
    /// complete data, and draws one panel per operation into a single image.
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Output image path [default: All_Map_Performance_Comparisons.png]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Image resolution in dots per inch [default: 300]
        #[arg(long)]
        dpi: Option<u32>,
    },

    /// Reconcile two benchmark tables and report, without rendering
    ///
    /// Prints the shared size axis, the retained operations with their axis
    /// bounds, and every dropped operation with its reason.
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Also write the report as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a table cannot be read, reconciliation finds nothing
    /// to chart, the configuration is invalid, or the output cannot be
    /// written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compare { input, output, dpi } => {
                let mut layer = input.layer();
                layer.output = output;
                layer.dpi = dpi;
                commands::compare(&input, layer)
            }
            Commands::Check { input, json } => commands::check(&input, input.layer(), json),
        }
    }
}

/// Inputs and settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// First benchmark table (e.g. the custom implementation)
    #[arg(value_name = "TABLE_A")]
    pub table_a: PathBuf,

    /// Second benchmark table (e.g. the reference implementation)
    #[arg(value_name = "TABLE_B")]
    pub table_b: PathBuf,

    /// Legend label for the first table [default: file stem]
    #[arg(long)]
    pub label_a: Option<String>,

    /// Legend label for the second table [default: file stem]
    #[arg(long)]
    pub label_b: Option<String>,

    /// Operations to chart, in display order, comma separated
    /// [default: the map operation catalog]
    #[arg(long, value_name = "NAMES")]
    pub catalog: Option<String>,

    /// Number of sizes every benchmark is expected to sweep [default: 10]
    #[arg(short = 'n', long)]
    pub expected_count: Option<usize>,

    /// Axis bounds policy: padded-linear, nice-ceiling, log-scale, symmetric-padding
    #[arg(short, long)]
    pub policy: Option<BoundsPolicy>,

    /// Per-operation size verification: trust, warn, strict [default: warn]
    #[arg(long)]
    pub size_check: Option<SizeCheck>,

    /// Field delimiter (single character or 'tab') [default: detected]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Name of the size column [default: Size]
    #[arg(long)]
    pub size_column: Option<String>,

    /// YAML configuration file; command-line values take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Settings given on the command line, as a configuration layer.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            label_a: self.label_a.clone(),
            label_b: self.label_b.clone(),
            catalog: self.catalog.as_deref().map(parse_catalog_list),
            expected_count: self.expected_count,
            policy: self.policy,
            size_check: self.size_check,
            delimiter: self.delimiter.clone(),
            size_column: self.size_column.clone(),
            ..Default::default()
        }
    }
}
