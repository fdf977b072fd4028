//! Chart preparation and SVG rendering.
//!
//! Two charts are supported:
//!
//! - [`ScatterPlot`]: two items of a [`FeatureTable`] against each other, one
//!   invisible point per dimension annotated with the dimension label
//! - [`BarChart`]: horizontal bars of [`SimilarGames`] scores, best on top
//!
//! Chart data is built without touching any backend, so it can be inspected
//! or serialized. Rendering needs the `charts` feature.

#[cfg(any(feature = "charts", test))]
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::FeatureTable;
use crate::recommend::SimilarGames;

/// A point annotated with the dimension it represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Scatter plot of one item's features against another's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<AnnotatedPoint>,
}

impl ScatterPlot {
    /// Select `item_a` (x axis) and `item_b` (y axis) from `table`.
    pub fn new(item_a: &str, item_b: &str, table: &FeatureTable) -> Result<Self> {
        let xs = table.vector(item_a)?;
        let ys = table.vector(item_b)?;

        let points = table
            .dimensions()
            .iter()
            .zip(xs.iter().zip(ys.iter()))
            .map(|(label, (&x, &y))| AnnotatedPoint { label: label.clone(), x, y })
            .collect();

        Ok(Self {
            title: format!("Space for {} VS. {}", item_a, item_b),
            x_label: item_a.to_string(),
            y_label: item_b.to_string(),
            points,
        })
    }
}

/// One bar of a [`BarChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart, first bar drawn on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Chart of similarity scores, one bar per similar game.
    pub fn from_similar(similar: &SimilarGames) -> Self {
        Self {
            title: format!("Top games similar to {} based on content", similar.seed),
            x_label: "Similarity".to_string(),
            y_label: "Games".to_string(),
            bars: similar
                .entries
                .iter()
                .map(|e| Bar { label: e.name.clone(), value: e.score })
                .collect(),
        }
    }

    #[cfg(any(feature = "charts", test))]
    fn value_range(&self) -> Range<f64> {
        let min = self.bars.iter().map(|b| b.value).fold(0.0, f64::min);
        let max = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let max = if max <= min { min + 1.0 } else { max };
        min..max * 1.05
    }
}

/// Value range covering every value with 5% headroom on both sides.
#[cfg(any(feature = "charts", test))]
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Gradient from deep purple to teal, `t` in [0, 1].
#[cfg(feature = "charts")]
fn mako(t: f64) -> plotters::style::RGBColor {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t.clamp(0.0, 1.0)).round() as u8;
    plotters::style::RGBColor(lerp(59, 73), lerp(47, 193), lerp(94, 173))
}

#[cfg(feature = "charts")]
mod render {
    use std::path::Path;

    use plotters::prelude::*;
    use tracing::info;

    use super::*;
    use crate::config::ChartConfig;
    use crate::error::Error;

    /// Build and render a scatter plot of `item_a` against `item_b`.
    pub fn plot(
        item_a: &str,
        item_b: &str,
        table: &FeatureTable,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        ScatterPlot::new(item_a, item_b, table)?.render(path, ChartConfig::scatter())
    }

    impl ScatterPlot {
        fn x_range(&self) -> Range<f64> {
            padded_range(self.points.iter().map(|p| p.x))
        }

        fn y_range(&self) -> Range<f64> {
            padded_range(self.points.iter().map(|p| p.y))
        }

        /// Render to an SVG file.
        pub fn render(&self, path: impl AsRef<Path>, config: ChartConfig) -> Result<()> {
            let path = path.as_ref();
            let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
            root.fill(&WHITE).map_err(Error::render)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 14).into_font())
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(self.x_range(), self.y_range())
                .map_err(Error::render)?;

            chart
                .configure_mesh()
                .x_desc(&self.x_label)
                .y_desc(&self.y_label)
                .axis_desc_style(("sans-serif", 14).into_font())
                .draw()
                .map_err(Error::render)?;

            chart
                .draw_series(self.points.iter().map(|p| {
                    EmptyElement::at((p.x, p.y))
                        + Circle::new((0, 0), 0, BLUE.filled())
                        + Text::new(p.label.clone(), (0, 0), ("sans-serif", 12).into_font())
                }))
                .map_err(Error::render)?;

            root.present().map_err(Error::render)?;
            info!(path = %path.display(), points = self.points.len(), "Rendered scatter plot");
            Ok(())
        }
    }

    impl BarChart {
        /// Render to an SVG file.
        pub fn render(&self, path: impl AsRef<Path>, config: ChartConfig) -> Result<()> {
            let path = path.as_ref();
            let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
            root.fill(&WHITE).map_err(Error::render)?;

            let n = self.bars.len() as i32;
            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 16).into_font())
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(220)
                .build_cartesian_2d(self.value_range(), (0..n.max(1)).into_segmented())
                .map_err(Error::render)?;

            // Row 0 is at the bottom, so rank r sits on row n - 1 - r.
            let label_of = |v: &SegmentValue<i32>| match v {
                SegmentValue::CenterOf(row) | SegmentValue::Exact(row) => usize::try_from(n - 1 - row)
                    .ok()
                    .and_then(|rank| self.bars.get(rank))
                    .map(|bar| bar.label.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            };

            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(self.bars.len().max(1))
                .y_label_formatter(&label_of)
                .x_desc(&self.x_label)
                .y_desc(&self.y_label)
                .axis_desc_style(("sans-serif", 12).into_font())
                .draw()
                .map_err(Error::render)?;

            let last = self.bars.len().saturating_sub(1).max(1) as f64;
            chart
                .draw_series(self.bars.iter().enumerate().map(|(rank, bar)| {
                    let row = n - 1 - rank as i32;
                    let color = mako(rank as f64 / last);
                    let mut rect = Rectangle::new(
                        [
                            (0.0, SegmentValue::Exact(row)),
                            (bar.value, SegmentValue::Exact(row + 1)),
                        ],
                        color.filled(),
                    );
                    rect.set_margin(3, 3, 0, 0);
                    rect
                }))
                .map_err(Error::render)?;

            root.present().map_err(Error::render)?;
            info!(path = %path.display(), bars = self.bars.len(), "Rendered bar chart");
            Ok(())
        }
    }
}

#[cfg(feature = "charts")]
pub use render::plot;
