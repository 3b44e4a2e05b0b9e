//! Forecast records to chart-ready series.
//!
//! The drawing itself belongs to whatever implements [`LineChartBackend`];
//! this module only shapes the data and the axis/legend configuration.

use chrono::Datelike;

use crate::report::{ForecastDate, ForecastPoint, StockReport};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` notation.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const LOW_COLOR: Rgb = Rgb(0xf4, 0x43, 0x36);
pub const HIGH_COLOR: Rgb = Rgb(0x4c, 0xaf, 0x50);
pub const CLOSE_COLOR: Rgb = Rgb(0x21, 0x96, 0xf3);

/// One named sequence of values plotted against the shared labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub color: Rgb,
    /// Values in record order; `None` where the record had no value.
    pub data: Vec<Option<f64>>,
}

/// Labels plus parallel datasets, all of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    /// Number of points per series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Looks up a dataset by its legend label.
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    /// Smallest and largest value across every dataset, ignoring gaps.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().flatten().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Where the legend sits relative to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
}

/// Axis titles and legend placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub legend: LegendPosition,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_title: "Date",
            y_title: "Price",
            legend: LegendPosition::Top,
        }
    }
}

/// A surface able to draw a two-dimensional line chart from labelled series.
pub trait LineChartBackend {
    fn draw_line_chart(&mut self, series: &ChartSeries, options: &ChartOptions);
}

/// Maps the report's forecast records into Low/High/Close series.
///
/// Returns `None` when there is no report or it carries no `future` section.
/// An empty `future` yields empty series, not `None`. Record order is kept
/// and missing values stay missing.
pub fn map_series(report: Option<&StockReport>) -> Option<ChartSeries> {
    let records = report?.future.as_deref()?;

    let labels = records.iter().map(|r| date_label(&r.date)).collect();
    let column = |pick: fn(&ForecastPoint) -> Option<f64>| -> Vec<Option<f64>> {
        records.iter().map(pick).collect()
    };

    Some(ChartSeries {
        labels,
        datasets: vec![
            Dataset {
                label: "Low",
                color: LOW_COLOR,
                data: column(|r| r.low),
            },
            Dataset {
                label: "High",
                color: HIGH_COLOR,
                data: column(|r| r.high),
            },
            Dataset {
                label: "Close",
                color: CLOSE_COLOR,
                data: column(|r| r.close),
            },
        ],
    })
}

/// Short en-US display of a record's date (`M/D/YYYY`).
pub fn date_label(date: &ForecastDate) -> String {
    match date {
        ForecastDate::Day(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        ForecastDate::Unparsed(raw) => raw.clone(),
        ForecastDate::Missing => String::new(),
    }
}
