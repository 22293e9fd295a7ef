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

//! Chart plan: everything the renderer needs, derived from reconciled tables.

use crate::bounds::{BoundsPolicy, PanelBounds};
use crate::reconcile::Reconciliation;
use crate::table::MeasurementTable;
use tracing::debug;

/// Values and bounds for one operation panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelPlan {
    pub operation: String,
    pub values_a: Vec<i64>,
    pub values_b: Vec<i64>,
    pub bounds: PanelBounds,
}

/// Ordered panels sharing one size axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartPlan {
    pub label_a: String,
    pub label_b: String,
    pub policy: BoundsPolicy,
    pub sizes: Vec<i64>,
    pub panels: Vec<PanelPlan>,
}

impl ChartPlan {
    /// Builds one panel per reconciled operation, in reconciled order.
    ///
    /// Operations come from `reconciliation`, so every series is known to
    /// exist in both tables with the reference length.
    pub fn build(
        table_a: &MeasurementTable,
        table_b: &MeasurementTable,
        reconciliation: &Reconciliation,
        policy: BoundsPolicy,
    ) -> Self {
        let panels = reconciliation
            .operations
            .iter()
            .map(|operation| {
                let values_a = table_a
                    .series(operation)
                    .map(|s| s.values())
                    .unwrap_or_default();
                let values_b = table_b
                    .series(operation)
                    .map(|s| s.values())
                    .unwrap_or_default();
                let bounds = policy.compute(&values_a, &values_b);
                debug!(
                    %operation,
                    y_min = bounds.y_min,
                    y_max = bounds.y_max,
                    "panel bounds computed"
                );
                PanelPlan {
                    operation: operation.clone(),
                    values_a,
                    values_b,
                    bounds,
                }
            })
            .collect();

        Self {
            label_a: table_a.label().to_string(),
            label_b: table_b.label().to_string(),
            policy,
            sizes: reconciliation.reference.sizes.clone(),
            panels,
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
