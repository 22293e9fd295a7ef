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

//! PerfPlot Command Line Interface

use clap::Parser;
use perfplot_cli::cli::Commands;
use std::process::ExitCode;

/// PerfPlot - benchmark comparison charts
///
/// Compares two benchmark tables (one size column plus one column per
/// operation) and draws one panel per shared operation.
///
/// # Examples
///
/// ```bash
/// # Render the default map comparison
/// perfplot compare custom_map_performance.csv hash_map_performance.csv
///
/// # Log-scale panels at print resolution
/// perfplot compare a.csv b.csv --policy log-scale --dpi 300 -o maps.png
///
/// # Inspect reconciliation without rendering
/// perfplot check a.csv b.csv --json report.json
/// ```
#[derive(Parser)]
#[command(name = "perfplot")]
#[command(author, version, about = "PerfPlot - benchmark comparison charts", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    perfplot_cli::logging::init(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
