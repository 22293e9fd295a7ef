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

//! Renderer-facing figure model.
//!
//! A [`Figure`] is the only thing a renderer sees: the shared size axis plus
//! one [`Panel`] per operation. It carries no reconciliation state.

use crate::error::{RenderError, Result};
use perfplot_core::{ChartPlan, PanelBounds};

/// One labeled line in a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSeries {
    pub label: String,
    pub values: Vec<i64>,
}

/// One subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub bounds: PanelBounds,
    pub series: Vec<PanelSeries>,
}

/// Vertically stacked panels sharing one x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
    pub sizes: Vec<i64>,
}

impl Figure {
    /// Builds a two-series panel per planned operation, in plan order.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfplot_core::{
    ///     reconcile, BoundsPolicy, ChartPlan, OperationCatalog, ReconcileOptions, TableBuilder,
    /// };
    /// use perfplot_render::Figure;
    ///
    /// let mut a = TableBuilder::new("CustomMap");
    /// let mut b = TableBuilder::new("HashMap");
    /// for size in [10, 20] {
    ///     a.push("get(K)", size, size);
    ///     b.push("get(K)", size, size + 1);
    /// }
    /// let (a, b) = (a.finish(), b.finish());
    /// let catalog = OperationCatalog::map_operations();
    /// let reconciliation = reconcile(&a, &b, &catalog, ReconcileOptions::new(2)).unwrap();
    /// let plan = ChartPlan::build(&a, &b, &reconciliation, BoundsPolicy::default());
    ///
    /// let figure = Figure::from_plan(&plan);
    /// assert_eq!(figure.panels[0].title, "Performance Comparison: get(K)");
    /// assert_eq!(figure.panels[0].series[1].label, "HashMap");
    /// ```
    pub fn from_plan(plan: &ChartPlan) -> Self {
        let panels = plan
            .panels
            .iter()
            .map(|panel| Panel {
                title: format!("Performance Comparison: {}", panel.operation),
                bounds: panel.bounds,
                series: vec![
                    PanelSeries {
                        label: plan.label_a.clone(),
                        values: panel.values_a.clone(),
                    },
                    PanelSeries {
                        label: plan.label_b.clone(),
                        values: panel.values_b.clone(),
                    },
                ],
            })
            .collect();

        Self {
            panels,
            sizes: plan.sizes.clone(),
        }
    }

    /// Checks that the figure can be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidData`] if there are no panels or sizes,
    /// a series does not match the size axis, or a panel's y-range is empty.
    pub fn validate(&self) -> Result<()> {
        if self.panels.is_empty() {
            return Err(RenderError::InvalidData(
                "figure has no panels".to_string(),
            ));
        }
        if self.sizes.is_empty() {
            return Err(RenderError::InvalidData(
                "size axis is empty".to_string(),
            ));
        }

        for panel in &self.panels {
            let span = panel.bounds.span();
            if span.is_nan() || span <= 0.0 {
                return Err(RenderError::InvalidData(format!(
                    "panel '{}' has an empty y-range ({} to {})",
                    panel.title, panel.bounds.y_min, panel.bounds.y_max
                )));
            }
            if panel.bounds.is_log() && panel.bounds.y_min <= 0.0 {
                return Err(RenderError::InvalidData(format!(
                    "panel '{}' has a non-positive log-scale lower bound",
                    panel.title
                )));
            }
            for series in &panel.series {
                if series.values.len() != self.sizes.len() {
                    return Err(RenderError::InvalidData(format!(
                        "series '{}' in panel '{}' has {} values for {} sizes",
                        series.label,
                        panel.title,
                        series.values.len(),
                        self.sizes.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Horizontal extent shared by every linear panel.
    pub(crate) fn size_range(&self) -> (f64, f64) {
        let lo = self.sizes.iter().copied().min().unwrap_or(0) as f64;
        let hi = self.sizes.iter().copied().max().unwrap_or(0) as f64;
        if hi > lo {
            (lo, hi)
        } else {
            (lo - 1.0, hi + 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfplot_core::{compute_bounds, BoundsPolicy};

    fn panel(values: Vec<i64>) -> Panel {
        Panel {
            title: "Performance Comparison: put(K,V)".to_string(),
            bounds: compute_bounds(BoundsPolicy::PaddedLinear, &values, &[]),
            series: vec![PanelSeries {
                label: "A".to_string(),
                values,
            }],
        }
    }

    #[test]
    fn test_valid_figure() {
        let figure = Figure {
            panels: vec![panel(vec![1, 2, 3])],
            sizes: vec![10, 20, 30],
        };
        assert!(figure.validate().is_ok());
    }

    #[test]
    fn test_empty_figure_rejected() {
        let figure = Figure {
            panels: Vec::new(),
            sizes: vec![1],
        };
        assert!(matches!(
            figure.validate(),
            Err(RenderError::InvalidData(_))
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let figure = Figure {
            panels: vec![panel(vec![1, 2])],
            sizes: vec![10, 20, 30],
        };
        let err = figure.validate().unwrap_err();
        assert!(err.to_string().contains("has 2 values for 3 sizes"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut p = panel(vec![1]);
        p.bounds.y_min = 5.0;
        p.bounds.y_max = 5.0;
        let figure = Figure {
            panels: vec![p],
            sizes: vec![10],
        };
        assert!(figure.validate().is_err());
    }

    #[test]
    fn test_size_range_widens_single_point() {
        let figure = Figure {
            panels: vec![panel(vec![1])],
            sizes: vec![100],
        };
        assert_eq!(figure.size_range(), (99.0, 101.0));
    }
}
