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

//! Benchmark table reader for PerfPlot.
//!
//! Turns one delimited benchmark table (a size column followed by one column
//! per measured operation) into a [`perfplot_core::MeasurementTable`].
//!
//! # Features
//!
//! - **Delimiter detection**: `,` `;` tab and `|` are recognized from the header line
//! - **Lenient cells**: empty or non-numeric measurements are logged and skipped
//! - **Strict keys**: a bad size cell aborts the read with its row number
//! - **Bounded input**: a configurable row limit rejects runaway files
//!
//! # Examples
//!
//! ```
//! use perfplot_csv::{from_csv_with_config, FromCsvConfig};
//!
//! let csv = "Size;put(K,V);get(K)\n10000;512;300\n20000;1024;abc\n";
//! let table = from_csv_with_config(csv, "CustomMap", &FromCsvConfig::default()).unwrap();
//!
//! assert_eq!(table.series_len("put(K,V)"), 2);
//! assert_eq!(table.series_len("get(K)"), 1);
//! ```

mod error;
mod from_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    detect_delimiter, from_csv, from_csv_path, from_csv_reader_with_config, from_csv_with_config,
    FromCsvConfig, DEFAULT_MAX_ROWS, DEFAULT_SIZE_COLUMN,
};
