//! Presentation adapter: derived display values around the plot geometry.

use eyre::Result;
use serde::Serialize;

use crate::data_types::{Canvas, ChartConfig, Sample, TrendSeries};
use crate::geometry::{GeometryBuilder, PlotGeometry};
use crate::transform::{session_scale, Coord};
use crate::utils::date_formatter::date_part;

/// Text shown in place of a missing value.
pub const PLACEHOLDER: &str = "--";

/// Direction of the latest value. Non-negative (or unknown) counts as up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(value: Option<f64>) -> Self {
        match value {
            Some(v) if v < 0.0 => Self::Down,
            _ => Self::Up,
        }
    }

    pub fn is_up(self) -> bool {
        self == Self::Up
    }
}

/// Signed percentage label, e.g. `+1.20%`, `-0.50%`.
pub fn format_pct(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeTick {
    pub label: String,
    pub x: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotFrame {
    pub geometry: PlotGeometry,
    /// Top to bottom: range max, zero, range min.
    pub value_ticks: Vec<ValueTick>,
    /// Latest-point marker.
    pub marker: Option<Coord>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ChartBody {
    /// The series holds no samples at all.
    NoData,
    Plot(PlotFrame),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayModel {
    pub date: String,
    pub latest_pct: Option<f64>,
    pub latest_label: String,
    pub trend: Trend,
    pub time_ticks: Vec<TimeTick>,
    pub body: ChartBody,
}

impl DisplayModel {
    pub fn date_label(&self) -> &str {
        if self.date.is_empty() {
            PLACEHOLDER
        } else {
            &self.date
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self.body, ChartBody::Plot(_))
    }

    pub fn frame(&self) -> Option<&PlotFrame> {
        match &self.body {
            ChartBody::Plot(frame) => Some(frame),
            ChartBody::NoData => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Presenter {
    builder: GeometryBuilder,
    canvas: Canvas,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(GeometryBuilder::default(), Canvas::default())
    }
}

impl Presenter {
    pub fn new(builder: GeometryBuilder, canvas: Canvas) -> Self {
        Self { builder, canvas }
    }

    pub fn from_config(config: &ChartConfig) -> Result<Self> {
        Ok(Self::new(GeometryBuilder::from_config(config)?, config.canvas))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// `fallback_time` is a `"<date> <time>"` timestamp and `fallback_pct` a current
    /// estimate; both are used only when the series lacks the corresponding value.
    pub fn present(
        &self,
        series: &TrendSeries,
        fallback_time: Option<&str>,
        fallback_pct: Option<f64>,
    ) -> DisplayModel {
        let latest_pct = series
            .latest()
            .map(|s| s.pct)
            .filter(|v| v.is_finite())
            .or(fallback_pct.filter(|v| v.is_finite()));

        let date = if series.date.is_empty() {
            fallback_time.map(date_part).unwrap_or_default().to_string()
        } else {
            series.date.clone()
        };

        let body = if series.is_empty() {
            ChartBody::NoData
        } else {
            ChartBody::Plot(self.frame(series))
        };

        DisplayModel {
            date,
            latest_pct,
            latest_label: latest_pct.map_or_else(|| PLACEHOLDER.to_string(), format_pct),
            trend: Trend::of(latest_pct),
            time_ticks: self.time_ticks(),
            body,
        }
    }

    fn frame(&self, series: &TrendSeries) -> PlotFrame {
        let geometry = self.builder.build(&series.points, &self.canvas);
        let value_ticks = self.value_ticks(&geometry);
        let marker = geometry
            .last_coord()
            .filter(|_| series.latest().is_some_and(Sample::has_value));

        PlotFrame {
            geometry,
            value_ticks,
            marker,
        }
    }

    fn value_ticks(&self, geometry: &PlotGeometry) -> Vec<ValueTick> {
        let (Some(range), Some(zero_y)) = (geometry.range, geometry.zero_y) else {
            return Vec::new();
        };
        let y_scale = range.y_scale(&self.canvas);
        let tick = |value: f64, y: f64| ValueTick {
            value,
            y,
            label: format_pct(value),
        };

        let mut ticks = Vec::with_capacity(3);
        if range.raw_max != 0.0 {
            ticks.push(tick(range.raw_max, y_scale.map(range.raw_max)));
        }
        ticks.push(tick(0.0, zero_y));
        if range.raw_min != 0.0 {
            ticks.push(tick(range.raw_min, y_scale.map(range.raw_min)));
        }
        ticks
    }

    /// Static session-boundary labels along the time axis.
    pub fn time_ticks(&self) -> Vec<TimeTick> {
        let clock = self.builder.clock();
        let x_scale = session_scale(&self.canvas, clock.span());
        clock
            .boundaries()
            .into_iter()
            .zip(clock.boundary_labels())
            .map(|(minute, label)| TimeTick {
                label,
                x: x_scale.map(f64::from(minute)),
            })
            .collect()
    }
}

/// Presents `series` with the default sessions, range rules and canvas.
pub fn present(
    series: &TrendSeries,
    fallback_time: Option<&str>,
    fallback_pct: Option<f64>,
) -> DisplayModel {
    Presenter::default().present(series, fallback_time, fallback_pct)
}
