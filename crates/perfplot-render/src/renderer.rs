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

//! Figure renderers.
//!
//! [`FigureRenderer`] is the seam between the pipeline and any drawing
//! backend. [`BitmapRenderer`] draws with [`plotters`] into a raster image
//! whose format follows the output file extension.

use crate::error::{RenderError, Result};
use crate::figure::{Figure, Panel};
use perfplot_core::{is_decade, minor_log_ticks, ScaleKind, TickStrategy};
use plotters::coord::{CoordTranslate, Shift};
use plotters::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Draws a validated figure to `output`.
pub trait FigureRenderer {
    fn render(&self, figure: &Figure, output: &Path) -> Result<()>;
}

/// Output geometry and axis text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pixels per inch.
    pub dpi: u32,
    /// Width of the figure in inches.
    pub panel_width_in: f64,
    /// Height of each stacked panel in inches.
    pub panel_height_in: f64,
    pub x_label: String,
    pub y_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            panel_width_in: 12.0,
            panel_height_in: 4.0,
            x_label: "input size".to_string(),
            y_label: "measurement".to_string(),
        }
    }
}

impl RenderConfig {
    /// Pixel dimensions of a figure with `panels` stacked panels.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfplot_render::RenderConfig;
    ///
    /// let config = RenderConfig::default();
    /// assert_eq!(config.pixel_size(3).unwrap(), (3600, 3600));
    /// ```
    pub fn pixel_size(&self, panels: usize) -> Result<(u32, u32)> {
        let dpi = f64::from(self.dpi);
        let width = (self.panel_width_in * dpi).round();
        let height = (self.panel_height_in * dpi).round() * panels as f64;

        if !(width >= 1.0 && height >= 1.0 && width.is_finite() && height.is_finite()) {
            return Err(RenderError::InvalidData(format!(
                "figure size {width}x{height} px is not drawable"
            )));
        }
        if width > f64::from(u32::MAX) || height > f64::from(u32::MAX) {
            return Err(RenderError::InvalidData(format!(
                "figure size {width}x{height} px is too large"
            )));
        }
        Ok((width as u32, height as u32))
    }

    /// Converts a typographic point size to pixels at the configured dpi.
    fn points(&self, pt: f64) -> u32 {
        (pt * f64::from(self.dpi) / 72.0).round().max(1.0) as u32
    }
}

/// Raster renderer backed by plotters' bitmap backend.
#[derive(Debug, Clone, Default)]
pub struct BitmapRenderer {
    config: RenderConfig,
}

impl BitmapRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn draw_linear<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        panel: &Panel,
        sizes: &[i64],
        (x_lo, x_hi): (f64, f64),
    ) -> Result<()> {
        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", self.config.points(12.0)))
            .margin(self.config.points(8.0))
            .x_label_area_size(self.config.points(28.0))
            .y_label_area_size(self.config.points(44.0))
            .build_cartesian_2d(x_lo..x_hi, panel.bounds.y_min..panel.bounds.y_max)
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(self.config.x_label.as_str())
            .y_desc(self.config.y_label.as_str())
            .label_style(("sans-serif", self.config.points(9.0)))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        draw_lines(&mut chart, panel, sizes, None)
    }

    fn draw_log<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        panel: &Panel,
        sizes: &[i64],
        (x_lo, x_hi): (f64, f64),
    ) -> Result<()> {
        let (y_lo, y_hi) = (panel.bounds.y_min, panel.bounds.y_max);
        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", self.config.points(12.0)))
            .margin(self.config.points(8.0))
            .x_label_area_size(self.config.points(28.0))
            .y_label_area_size(self.config.points(44.0))
            .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        let decade_label = |y: &f64| {
            if is_decade(*y) {
                format!("{:.0}", y)
            } else {
                String::new()
            }
        };
        chart
            .configure_mesh()
            .x_desc(self.config.x_label.as_str())
            .y_desc(self.config.y_label.as_str())
            .label_style(("sans-serif", self.config.points(9.0)))
            .y_label_formatter(&decade_label)
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        if let TickStrategy::Decades { minor: true } = panel.bounds.ticks {
            let faint = BLACK.mix(0.08);
            for tick in minor_log_ticks(y_lo, y_hi) {
                chart
                    .draw_series(LineSeries::new(vec![(x_lo, tick), (x_hi, tick)], faint))
                    .map_err(|e| RenderError::Drawing(e.to_string()))?;
            }
        }

        draw_lines(&mut chart, panel, sizes, Some(y_lo))
    }
}

impl FigureRenderer for BitmapRenderer {
    fn render(&self, figure: &Figure, output: &Path) -> Result<()> {
        figure.validate()?;
        let (width, height) = self.config.pixel_size(figure.panels.len())?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        debug!(
            panels = figure.panels.len(),
            width,
            height,
            path = %output.display(),
            "rendering figure"
        );

        let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let areas = root.split_evenly((figure.panels.len(), 1));
        let size_range = figure.size_range();
        for (panel, area) in figure.panels.iter().zip(&areas) {
            let x_range = panel.bounds.x_range.unwrap_or(size_range);
            match panel.bounds.scale {
                ScaleKind::Linear => self.draw_linear(area, panel, &figure.sizes, x_range)?,
                ScaleKind::Log => self.draw_log(area, panel, &figure.sizes, x_range)?,
            }
        }

        root.present()
            .map_err(|e| RenderError::FileSave(io::Error::new(io::ErrorKind::Other, e.to_string())))?;

        info!(path = %output.display(), panels = figure.panels.len(), "figure saved");
        Ok(())
    }
}

/// Pairs sizes with values. With a `floor`, values below it are raised to it
/// so that zero timings stay on a log axis.
fn plot_points(sizes: &[i64], values: &[i64], floor: Option<f64>) -> Vec<(f64, f64)> {
    sizes
        .iter()
        .zip(values)
        .map(|(&size, &value)| {
            let y = value as f64;
            match floor {
                Some(floor) if y < floor => {
                    debug!(size, value, floor, "value below log axis floor, clamped");
                    (size as f64, floor)
                }
                _ => (size as f64, y),
            }
        })
        .collect()
}

/// Draws every series of `panel` with markers, then the legend.
fn draw_lines<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    panel: &Panel,
    sizes: &[i64],
    floor: Option<f64>,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    for (index, series) in panel.series.iter().enumerate() {
        let color = Palette99::pick(index).mix(1.0);
        let points = plot_points(sizes, &series.values, floor);

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| RenderError::Drawing(e.to_string()))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    Ok(())
}
