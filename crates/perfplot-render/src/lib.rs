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

//! Stacked panel chart rendering for PerfPlot.
//!
//! The renderer receives a [`Figure`] (shared size axis, per-panel values and
//! bounds) and owns no reconciliation logic. Panels are stacked vertically in
//! figure order and saved as a single image.
//!
//! # Example
//!
//! ```no_run
//! use perfplot_core::{compute_bounds, BoundsPolicy};
//! use perfplot_render::{BitmapRenderer, Figure, FigureRenderer, Panel, PanelSeries};
//! use std::path::Path;
//!
//! let values = vec![10, 20, 30];
//! let figure = Figure {
//!     sizes: vec![1_000, 2_000, 3_000],
//!     panels: vec![Panel {
//!         title: "Performance Comparison: put(K,V)".to_string(),
//!         bounds: compute_bounds(BoundsPolicy::PaddedLinear, &values, &[]),
//!         series: vec![PanelSeries { label: "CustomMap".to_string(), values }],
//!     }],
//! };
//!
//! BitmapRenderer::default()
//!     .render(&figure, Path::new("comparison.png"))
//!     .unwrap();
//! ```

mod error;
mod figure;
mod renderer;

pub use error::{RenderError, Result};
pub use figure::{Figure, Panel, PanelSeries};
pub use renderer::{BitmapRenderer, FigureRenderer, RenderConfig};
