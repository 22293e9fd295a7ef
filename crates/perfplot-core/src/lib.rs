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

//! Core data model and reconciliation logic for PerfPlot.
//!
//! PerfPlot compares two benchmark runs (one per implementation) and draws one
//! panel per measured operation. This crate holds everything between parsing
//! and drawing:
//!
//! - **Model**: [`MeasurementTable`], built through [`TableBuilder`], and the
//!   canonical [`OperationCatalog`]
//! - **Reconciliation**: [`reconcile`] narrows both tables to the catalog
//!   operations they cover completely, and picks the shared size axis
//! - **Bounds**: [`compute_bounds`] derives y-axis limits per panel from a
//!   selectable [`BoundsPolicy`]
//! - **Plan**: [`ChartPlan`] bundles sizes, values and bounds for the renderer
//!
//! # Example
//!
//! ```
//! use perfplot_core::{
//!     reconcile, BoundsPolicy, ChartPlan, OperationCatalog, ReconcileOptions, TableBuilder,
//! };
//!
//! let mut a = TableBuilder::new("CustomMap");
//! let mut b = TableBuilder::new("HashMap");
//! for size in [1_000, 2_000, 3_000] {
//!     a.push("put", size, size * 3);
//!     b.push("put", size, size * 2);
//! }
//! let (a, b) = (a.finish(), b.finish());
//!
//! let catalog = OperationCatalog::new(["put", "get"]).unwrap();
//! let reconciliation = reconcile(&a, &b, &catalog, ReconcileOptions::new(3)).unwrap();
//! assert_eq!(reconciliation.operations, vec!["put".to_string()]);
//!
//! let plan = ChartPlan::build(&a, &b, &reconciliation, BoundsPolicy::PaddedLinear);
//! assert_eq!(plan.sizes, vec![1_000, 2_000, 3_000]);
//! ```

mod bounds;
mod catalog;
mod error;
mod plan;
mod reconcile;
mod table;

pub use bounds::{
    compute_bounds, decade_ceiling, decade_ticks, is_decade, minor_log_ticks, nice_ceiling,
    BoundsPolicy, PanelBounds, ScaleKind, TickStrategy, LOG_X_DOMAIN,
};
pub use catalog::{Column, OperationCatalog, DEFAULT_MAP_OPERATIONS};
pub use error::{PipelineError, Result};
pub use plan::{ChartPlan, PanelPlan};
pub use reconcile::{
    common_operations, reconcile, select_reference_sizes, DropReason, DroppedOperation,
    ReconcileOptions, Reconciliation, ReferenceSizes, SizeCheck,
};
pub use table::{MeasurementTable, Sample, Series, TableBuilder};
