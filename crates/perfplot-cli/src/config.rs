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

//! Run configuration.
//!
//! Settings are resolved in three layers: built-in defaults, then an optional
//! YAML file, then explicit command-line values. Each layer is a
//! [`ConfigLayer`] whose `None` fields leave the lower layer untouched.
//!
//! ```yaml
//! # perfplot.yaml
//! catalog: ["put(K,V)", "get(K)", "remove(K)"]
//! expected_count: 10
//! policy: log-scale
//! size_check: strict
//! delimiter: ";"
//! dpi: 150
//! output: charts/maps.png
//! ```

use crate::error::CliError;
use perfplot_core::{BoundsPolicy, OperationCatalog, SizeCheck};
use perfplot_csv::FromCsvConfig;
use perfplot_render::RenderConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default figure path.
pub const DEFAULT_OUTPUT: &str = "All_Map_Performance_Comparisons.png";

/// Default number of sizes each benchmark is expected to sweep.
pub const DEFAULT_EXPECTED_COUNT: usize = 10;

/// Accepted resolution range.
pub const DPI_RANGE: std::ops::RangeInclusive<u32> = 50..=600;

/// One layer of optional settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub label_a: Option<String>,
    pub label_b: Option<String>,
    pub catalog: Option<Vec<String>>,
    pub expected_count: Option<usize>,
    pub policy: Option<BoundsPolicy>,
    pub size_check: Option<SizeCheck>,
    pub delimiter: Option<String>,
    pub size_column: Option<String>,
    pub max_rows: Option<usize>,
    pub output: Option<PathBuf>,
    pub dpi: Option<u32>,
}

impl ConfigLayer {
    /// Reads a YAML layer from disk.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|e| CliError::config_file(path, e))?;
        Self::from_yaml_str(&text).map_err(|e| match e {
            CliError::Config(message) => CliError::config_file(path, message),
            other => other,
        })
    }

    /// Parses a YAML layer. An empty document is an empty layer.
    pub fn from_yaml_str(text: &str) -> Result<Self, CliError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub label_a: Option<String>,
    pub label_b: Option<String>,
    pub catalog: OperationCatalog,
    pub expected_count: usize,
    pub policy: BoundsPolicy,
    pub size_check: SizeCheck,
    pub csv: FromCsvConfig,
    pub render: RenderConfig,
    pub output: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            label_a: None,
            label_b: None,
            catalog: OperationCatalog::map_operations(),
            expected_count: DEFAULT_EXPECTED_COUNT,
            policy: BoundsPolicy::default(),
            size_check: SizeCheck::default(),
            csv: FromCsvConfig::default(),
            render: RenderConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ChartConfig {
    /// Builds the effective configuration from an optional file and the
    /// command-line layer, then validates it.
    pub fn resolve(file: Option<&Path>, cli: ConfigLayer) -> Result<Self, CliError> {
        let mut config = Self::default();
        if let Some(path) = file {
            debug!(path = %path.display(), "loading configuration file");
            config.apply(ConfigLayer::from_yaml_file(path)?)?;
        }
        config.apply(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides every field set in `layer`.
    pub fn apply(&mut self, layer: ConfigLayer) -> Result<(), CliError> {
        if let Some(label) = layer.label_a {
            self.label_a = Some(label);
        }
        if let Some(label) = layer.label_b {
            self.label_b = Some(label);
        }
        if let Some(names) = layer.catalog {
            self.catalog = OperationCatalog::new(names)?;
        }
        if let Some(count) = layer.expected_count {
            self.expected_count = count;
        }
        if let Some(policy) = layer.policy {
            self.policy = policy;
        }
        if let Some(size_check) = layer.size_check {
            self.size_check = size_check;
        }
        if let Some(delimiter) = layer.delimiter {
            self.csv.delimiter = Some(parse_delimiter(&delimiter).map_err(CliError::Config)?);
        }
        if let Some(column) = layer.size_column {
            self.csv.size_column = column;
        }
        if let Some(max_rows) = layer.max_rows {
            self.csv.max_rows = max_rows;
        }
        if let Some(output) = layer.output {
            self.output = output;
        }
        if let Some(dpi) = layer.dpi {
            self.render.dpi = dpi;
        }
        Ok(())
    }

    /// Rejects values no run can succeed with.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.expected_count == 0 {
            return Err(CliError::Config(
                "expected_count must be at least 1".to_string(),
            ));
        }
        if self.catalog.is_empty() {
            return Err(CliError::Config("catalog must not be empty".to_string()));
        }
        if !DPI_RANGE.contains(&self.render.dpi) {
            return Err(CliError::Config(format!(
                "dpi must be between {} and {}, got {}",
                DPI_RANGE.start(),
                DPI_RANGE.end(),
                self.render.dpi
            )));
        }
        if self.csv.size_column.trim().is_empty() {
            return Err(CliError::Config("size_column must not be empty".to_string()));
        }
        if self.csv.max_rows == 0 {
            return Err(CliError::Config("max_rows must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Parses a delimiter given as a single ASCII character or as `tab`/`\t`.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && !c.is_ascii_alphanumeric() && c != '"' => Ok(c as u8),
        _ => Err(format!(
            "delimiter must be a single ASCII punctuation character or 'tab', got '{value}'"
        )),
    }
}

/// Splits a comma separated operation list, keeping commas inside
/// parentheses, so `put(K,V),get(K)` yields two names.
///
/// # Examples
///
/// ```
/// use perfplot_cli::config::parse_catalog_list;
///
/// assert_eq!(
///     parse_catalog_list("put(K,V), get(K),clear()"),
///     vec!["put(K,V)", "get(K)", "clear()"]
/// );
/// ```
pub fn parse_catalog_list(value: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in value.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => names.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    names.push(current);

    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
