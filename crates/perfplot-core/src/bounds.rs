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

//! Axis bounds for comparison panels.
//!
//! Every panel gets its y-range from the combined values of both tables. The
//! heuristics that used to be re-derived per chart are collected behind
//! [`BoundsPolicy`]; each one is a pure function of the two value slices.
//!
//! Whatever the policy, the returned bounds satisfy `y_min >= 0` and
//! `y_max > y_min`. Timings are non-negative, so negative lower bounds are
//! clamped, and degenerate inputs (no values, a single value, all values
//! equal) are widened instead of producing an empty range.

use crate::error::PipelineError;
use std::fmt;
use std::str::FromStr;

/// Fixed x-domain used by the log-scale policy.
pub const LOG_X_DOMAIN: (f64, f64) = (0.0, 100_000.0);

/// Multiplier applied to the maximum before rounding, padded-linear policy.
const LINEAR_TOP_PAD: f64 = 1.1;
/// Multiplier applied to a positive minimum, padded-linear policy.
const LINEAR_BOTTOM_PAD: f64 = 0.9;
/// Multiplier applied to the maximum before the decade ceiling, log-scale policy.
const LOG_TOP_PAD: f64 = 1.5;
/// Fraction of the range added on each side, symmetric-padding policy.
const SYMMETRIC_PAD: f64 = 0.10;
/// Fraction of the value used when all values are equal.
const FLAT_PAD: f64 = 0.05;

/// Upper limit on the number of nice steps between zero and the ceiling.
const MAX_NICE_STEPS: f64 = 5.0;
const NICE_MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];

/// Selectable bounds heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BoundsPolicy {
    /// `0` (or `0.9 × min` for positive minimums) up to `nice_ceiling(1.1 × max)`.
    #[default]
    PaddedLinear,
    /// `0` up to `nice_ceiling(max)`.
    NiceCeiling,
    /// Log y-axis from `1` to the decade ceiling of `1.5 × max`, fixed x-domain.
    LogScale,
    /// Combined range widened by 10% on both sides.
    SymmetricPadding,
}

impl BoundsPolicy {
    pub const ALL: [BoundsPolicy; 4] = [
        BoundsPolicy::PaddedLinear,
        BoundsPolicy::NiceCeiling,
        BoundsPolicy::LogScale,
        BoundsPolicy::SymmetricPadding,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BoundsPolicy::PaddedLinear => "padded-linear",
            BoundsPolicy::NiceCeiling => "nice-ceiling",
            BoundsPolicy::LogScale => "log-scale",
            BoundsPolicy::SymmetricPadding => "symmetric-padding",
        }
    }

    /// Computes bounds for the combined values of both tables.
    pub fn compute(&self, values_a: &[i64], values_b: &[i64]) -> PanelBounds {
        compute_bounds(*self, values_a, values_b)
    }
}

impl fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundsPolicy {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        BoundsPolicy::ALL
            .into_iter()
            .find(|policy| policy.name() == normalized)
            .ok_or_else(|| PipelineError::UnknownPolicy(s.to_string()))
    }
}

/// Scale of the y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScaleKind {
    Linear,
    Log,
}

/// Tick placement on the y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TickStrategy {
    /// Let the renderer pick evenly spaced ticks.
    Auto,
    /// Labeled major ticks at each power of ten; optional unlabeled minor
    /// ticks at `2..=9 × 10^k`.
    Decades { minor: bool },
}

/// Axis bounds and scale for one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelBounds {
    /// Fixed x-domain; `None` means "span the reference sizes".
    pub x_range: Option<(f64, f64)>,
    pub y_min: f64,
    pub y_max: f64,
    pub scale: ScaleKind,
    pub ticks: TickStrategy,
}

impl PanelBounds {
    fn linear(y_min: f64, y_max: f64) -> Self {
        let (y_min, y_max) = normalize(y_min, y_max);
        Self {
            x_range: None,
            y_min,
            y_max,
            scale: ScaleKind::Linear,
            ticks: TickStrategy::Auto,
        }
    }

    pub fn span(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn is_log(&self) -> bool {
        self.scale == ScaleKind::Log
    }
}

/// Computes panel bounds with the given policy.
///
/// # Examples
///
/// ```
/// use perfplot_core::{compute_bounds, BoundsPolicy};
///
/// let a = [10, 20, 30, 40, 50];
/// let b = [12, 22, 33, 41, 53];
/// let bounds = compute_bounds(BoundsPolicy::PaddedLinear, &a, &b);
/// assert_eq!(bounds.y_min, 9.0);
/// assert_eq!(bounds.y_max, 60.0);
/// ```
pub fn compute_bounds(policy: BoundsPolicy, values_a: &[i64], values_b: &[i64]) -> PanelBounds {
    let (min, max) = combined_range(values_a, values_b).unwrap_or((0.0, 0.0));

    match policy {
        BoundsPolicy::PaddedLinear => {
            let y_min = if min <= 0.0 { 0.0 } else { LINEAR_BOTTOM_PAD * min };
            PanelBounds::linear(y_min, nice_ceiling(LINEAR_TOP_PAD * max))
        }
        BoundsPolicy::NiceCeiling => PanelBounds::linear(0.0, nice_ceiling(max)),
        BoundsPolicy::LogScale => PanelBounds {
            x_range: Some(LOG_X_DOMAIN),
            y_min: 1.0,
            y_max: decade_ceiling(LOG_TOP_PAD * max),
            scale: ScaleKind::Log,
            ticks: TickStrategy::Decades { minor: true },
        },
        BoundsPolicy::SymmetricPadding => {
            let range = max - min;
            if range > 0.0 {
                let pad = SYMMETRIC_PAD * range;
                PanelBounds::linear(min - pad, max + pad)
            } else if max == 0.0 {
                PanelBounds::linear(0.0, 1.0)
            } else {
                let pad = FLAT_PAD * max.abs();
                PanelBounds::linear(max - pad, max + pad)
            }
        }
    }
}

/// Smallest and largest of all values, or `None` when both slices are empty.
fn combined_range(values_a: &[i64], values_b: &[i64]) -> Option<(f64, f64)> {
    let mut iter = values_a.iter().chain(values_b).copied();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some((min as f64, max as f64))
}

/// Clamps the lower bound to zero and guarantees a non-empty range.
fn normalize(y_min: f64, y_max: f64) -> (f64, f64) {
    let y_min = if y_min.is_finite() { y_min.max(0.0) } else { 0.0 };
    let y_max = if y_max.is_finite() && y_max > y_min {
        y_max
    } else {
        y_min + 1.0
    };
    (y_min, y_max)
}

/// Rounds `x` up to an aesthetically round axis limit.
///
/// The result is a multiple of a step of the form `{1, 2, 5} × 10^k`, where
/// the step is the smallest such value that reaches `x` in at most five
/// steps. Values that are already round are returned unchanged, so the
/// function is idempotent. Non-positive input maps to `1`.
///
/// # Examples
///
/// ```
/// use perfplot_core::nice_ceiling;
///
/// assert_eq!(nice_ceiling(58.3), 60.0);
/// assert_eq!(nice_ceiling(60.0), 60.0);
/// assert_eq!(nice_ceiling(97.0), 100.0);
/// assert_eq!(nice_ceiling(0.0), 1.0);
/// ```
pub fn nice_ceiling(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return 1.0;
    }
    if x.is_infinite() {
        return x;
    }

    let (mantissa, exponent) = nice_step(x / MAX_NICE_STEPS);
    let step = mantissa * 10f64.powi(exponent);
    let count = (x / step - 1e-9).ceil().max(1.0);
    let ceiling = count * mantissa * 10f64.powi(exponent);

    if ceiling < x {
        (count + 1.0) * mantissa * 10f64.powi(exponent)
    } else {
        ceiling
    }
}

/// Smallest `{1, 2, 5} × 10^k` not below `x`, as `(mantissa, k)`.
fn nice_step(x: f64) -> (f64, i32) {
    let exponent = x.log10().floor() as i32;
    for exp in (exponent - 1)..=(exponent + 1) {
        for mantissa in NICE_MANTISSAS {
            if mantissa * 10f64.powi(exp) >= x * (1.0 - 1e-12) {
                return (mantissa, exp);
            }
        }
    }
    (1.0, exponent + 2)
}

/// Smallest power of ten that is `>= x` and strictly greater than one.
///
/// # Examples
///
/// ```
/// use perfplot_core::decade_ceiling;
///
/// assert_eq!(decade_ceiling(79.5), 100.0);
/// assert_eq!(decade_ceiling(1000.0), 1000.0);
/// assert_eq!(decade_ceiling(0.0), 10.0);
/// ```
pub fn decade_ceiling(x: f64) -> f64 {
    if x.is_nan() || x <= 10.0 {
        return 10.0;
    }
    if x.is_infinite() {
        return x;
    }

    let mut exponent = (x.log10() - 1e-12).ceil() as i32;
    if 10f64.powi(exponent) < x {
        exponent += 1;
    }
    10f64.powi(exponent)
}

/// Powers of ten within `[lo, hi]`.
pub fn decade_ticks(lo: f64, hi: f64) -> Vec<f64> {
    log_ticks(lo, hi, &[1.0])
}

/// Unlabeled log subdivisions (`2..=9 × 10^k`) within `[lo, hi]`.
pub fn minor_log_ticks(lo: f64, hi: f64) -> Vec<f64> {
    log_ticks(lo, hi, &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
}

fn log_ticks(lo: f64, hi: f64, mantissas: &[f64]) -> Vec<f64> {
    if !(lo > 0.0 && hi >= lo && hi.is_finite()) {
        return Vec::new();
    }

    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;
    let tolerance = 1e-9;

    let mut ticks = Vec::new();
    for exp in first..=last {
        let base = 10f64.powi(exp);
        for &m in mantissas {
            let tick = m * base;
            if tick >= lo * (1.0 - tolerance) && tick <= hi * (1.0 + tolerance) {
                ticks.push(tick);
            }
        }
    }
    ticks
}

/// Whether `value` is (within rounding) an exact power of ten.
pub fn is_decade(value: f64) -> bool {
    if !(value > 0.0 && value.is_finite()) {
        return false;
    }
    let exponent = value.log10().round() as i32;
    let decade = 10f64.powi(exponent);
    ((value - decade) / decade).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ceiling_values() {
        assert_eq!(nice_ceiling(58.3), 60.0);
        assert_eq!(nice_ceiling(1.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 8.0);
        assert_eq!(nice_ceiling(11.0), 15.0);
        assert_eq!(nice_ceiling(41.0), 50.0);
        assert_eq!(nice_ceiling(101.0), 150.0);
        assert_eq!(nice_ceiling(1234.0), 1500.0);
    }

    #[test]
    fn test_nice_ceiling_degenerate() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-5.0), 1.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn test_nice_ceiling_small_values() {
        let c = nice_ceiling(0.37);
        assert!(c >= 0.37);
        assert!((c - 0.4).abs() < 1e-12);
        assert_eq!(nice_ceiling(c), c);
    }

    #[test]
    fn test_decade_ceiling() {
        assert_eq!(decade_ceiling(1.5), 10.0);
        assert_eq!(decade_ceiling(10.5), 100.0);
        assert_eq!(decade_ceiling(100.0), 100.0);
        assert_eq!(decade_ceiling(100_001.0), 1_000_000.0);
        assert_eq!(decade_ceiling(-3.0), 10.0);
    }

    #[test]
    fn test_padded_linear_scenario() {
        let bounds = compute_bounds(
            BoundsPolicy::PaddedLinear,
            &[10, 20, 30, 40, 50],
            &[12, 22, 33, 41, 53],
        );
        assert_eq!(bounds.y_min, 9.0);
        assert_eq!(bounds.y_max, 60.0);
        assert_eq!(bounds.scale, ScaleKind::Linear);
        assert_eq!(bounds.ticks, TickStrategy::Auto);
        assert_eq!(bounds.x_range, None);
    }

    #[test]
    fn test_padded_linear_anchors_at_zero() {
        let bounds = compute_bounds(BoundsPolicy::PaddedLinear, &[0, 20], &[30]);
        assert_eq!(bounds.y_min, 0.0);
        assert_eq!(bounds.y_max, 40.0);
    }

    #[test]
    fn test_nice_ceiling_policy() {
        let bounds = compute_bounds(BoundsPolicy::NiceCeiling, &[5, 17], &[23]);
        assert_eq!(bounds.y_min, 0.0);
        assert_eq!(bounds.y_max, 25.0);
    }

    #[test]
    fn test_log_scale_policy() {
        let bounds = compute_bounds(BoundsPolicy::LogScale, &[120, 4_000], &[9_000]);
        assert_eq!(bounds.x_range, Some(LOG_X_DOMAIN));
        assert_eq!(bounds.y_min, 1.0);
        // 1.5 * 9000 = 13500 -> 100000
        assert_eq!(bounds.y_max, 100_000.0);
        assert!(bounds.is_log());
        assert_eq!(bounds.ticks, TickStrategy::Decades { minor: true });
    }

    #[test]
    fn test_symmetric_padding_policy() {
        let bounds = compute_bounds(BoundsPolicy::SymmetricPadding, &[100, 200], &[300]);
        assert!((bounds.y_min - 80.0).abs() < 1e-9);
        assert!((bounds.y_max - 320.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_padding_clamps_to_zero() {
        let bounds = compute_bounds(BoundsPolicy::SymmetricPadding, &[1, 100], &[]);
        assert_eq!(bounds.y_min, 0.0);
    }

    #[test]
    fn test_symmetric_padding_flat_values() {
        let bounds = compute_bounds(BoundsPolicy::SymmetricPadding, &[200, 200], &[200]);
        assert!((bounds.y_min - 190.0).abs() < 1e-9);
        assert!((bounds.y_max - 210.0).abs() < 1e-9);

        let zero = compute_bounds(BoundsPolicy::SymmetricPadding, &[0], &[0]);
        assert_eq!((zero.y_min, zero.y_max), (0.0, 1.0));
    }

    #[test]
    fn test_every_policy_handles_degenerate_input() {
        let cases: [(&[i64], &[i64]); 5] = [
            (&[], &[]),
            (&[7], &[]),
            (&[0], &[0]),
            (&[-5, -1], &[-3]),
            (&[42, 42], &[42]),
        ];
        for policy in BoundsPolicy::ALL {
            for (a, b) in cases {
                let bounds = policy.compute(a, b);
                assert!(bounds.y_min >= 0.0, "{policy} {a:?} {b:?}");
                assert!(bounds.y_max > bounds.y_min, "{policy} {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn test_policy_parse_and_display() {
        assert_eq!(
            "log-scale".parse::<BoundsPolicy>().unwrap(),
            BoundsPolicy::LogScale
        );
        assert_eq!(
            "Symmetric_Padding".parse::<BoundsPolicy>().unwrap(),
            BoundsPolicy::SymmetricPadding
        );
        assert!(matches!(
            "fancy".parse::<BoundsPolicy>(),
            Err(PipelineError::UnknownPolicy(_))
        ));
        for policy in BoundsPolicy::ALL {
            assert_eq!(policy.to_string().parse::<BoundsPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_decade_and_minor_ticks() {
        assert_eq!(decade_ticks(1.0, 1000.0), vec![1.0, 10.0, 100.0, 1000.0]);

        let minor = minor_log_ticks(1.0, 100.0);
        assert_eq!(minor.len(), 16);
        assert_eq!(minor[0], 2.0);
        assert!((minor[15] - 90.0).abs() < 1e-9);

        assert!(decade_ticks(0.0, 10.0).is_empty());
    }

    #[test]
    fn test_is_decade() {
        assert!(is_decade(1.0));
        assert!(is_decade(1000.0));
        assert!(!is_decade(200.0));
        assert!(!is_decade(0.0));
    }
}
