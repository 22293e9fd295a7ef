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

//! Log subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown by default.
const CRATES: [&str; 4] = ["perfplot_core", "perfplot_csv", "perfplot_render", "perfplot_cli"];

/// Filter directives for a run.
///
/// `RUST_LOG` (passed in as `env`) is kept as the base; without it only
/// warnings from other crates pass. Our crates log at `info`, or at `debug`
/// with `verbose`, which takes precedence over `env` for these crates.
///
/// # Examples
///
/// ```
/// use perfplot_cli::logging::directives;
///
/// assert!(directives(false, None).contains("perfplot_csv=info"));
/// assert!(directives(true, Some("trace")).starts_with("trace,"));
/// ```
pub fn directives(verbose: bool, env: Option<&str>) -> String {
    let level = if verbose { "debug" } else { "info" };
    let ours = CRATES.map(|krate| format!("{krate}={level}")).join(",");

    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(env) if verbose => format!("{env},{ours}"),
        Some(env) => env.to_string(),
        None => format!("warn,{ours}"),
    }
}

/// Installs the global subscriber writing to stderr.
pub fn init(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(directives(verbose, env.as_deref()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
