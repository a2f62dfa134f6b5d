//! Geometry builder: samples -> logical canvas coordinates and path strings.

use eyre::Result;
use serde::Serialize;
use tracing::debug;

use crate::data_types::{Canvas, ChartConfig, Margins, Sample};
use crate::path::SvgPathBuilder;
use crate::scales::ChartScale;
use crate::session::SessionClock;
use crate::transform::{Coord, PlotTransform};

/// Vertical value range in percentage points. Zero is always inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValueRange {
    pub raw_min: f64,
    pub raw_max: f64,
    pub padded_min: f64,
    pub padded_max: f64,
}

impl ValueRange {
    /// Range of the finite values together with zero, padded on both sides by
    /// `padding_ratio` of the span (the span is at least `min_range`).
    ///
    /// Returns `None` when no value is finite.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        min_range: f64,
        padding_ratio: f64,
    ) -> Option<Self> {
        let mut found = false;
        let mut raw_min = 0.0_f64;
        let mut raw_max = 0.0_f64;

        for value in values.into_iter().filter(|v| v.is_finite()) {
            found = true;
            raw_min = raw_min.min(value);
            raw_max = raw_max.max(value);
        }

        if !found {
            return None;
        }

        let span = (raw_max - raw_min).max(min_range);
        let pad = span * padding_ratio;

        Some(Self {
            raw_min,
            raw_max,
            padded_min: raw_min - pad,
            padded_max: raw_max + pad,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.padded_min && value <= self.padded_max
    }

    /// Padded range mapped top to bottom of the plot area.
    pub fn y_scale(&self, canvas: &Canvas) -> ChartScale {
        ChartScale::new_linear(
            (self.padded_max, self.padded_min),
            (canvas.plot_top(), canvas.plot_bottom()),
        )
    }
}

/// Drawable output of one render pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlotGeometry {
    pub coords: Vec<Coord>,
    pub line_path: String,
    pub area_path: String,
    /// Canvas y of `pct = 0`; `None` for the empty geometry.
    pub zero_y: Option<f64>,
    pub range: Option<ValueRange>,
    pub plot_height: f64,
}

impl PlotGeometry {
    pub fn empty(canvas: &Canvas) -> Self {
        Self {
            plot_height: canvas.plot_height(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn last_coord(&self) -> Option<Coord> {
        self.coords.last().copied()
    }
}

#[derive(Clone, Debug)]
pub struct GeometryBuilder {
    clock: SessionClock,
    min_range: f64,
    padding_ratio: f64,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        let config = ChartConfig::default();
        Self::new(SessionClock::default(), config.min_range, config.padding_ratio)
    }
}

impl GeometryBuilder {
    pub fn new(clock: SessionClock, min_range: f64, padding_ratio: f64) -> Self {
        Self {
            clock,
            min_range,
            padding_ratio,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Result<Self> {
        Ok(Self::new(
            config.clock()?,
            config.min_range,
            config.padding_ratio,
        ))
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn value_range(&self, points: &[Sample]) -> Option<ValueRange> {
        ValueRange::from_values(
            points.iter().map(|p| p.pct),
            self.min_range,
            self.padding_ratio,
        )
    }

    /// Maps every sample with a resolvable time and a finite value, in input order.
    ///
    /// Samples with an unparseable time still widen the value range.
    pub fn build(&self, points: &[Sample], canvas: &Canvas) -> PlotGeometry {
        if points.is_empty() {
            return PlotGeometry::empty(canvas);
        }
        let Some(range) = self.value_range(points) else {
            debug!(samples = points.len(), "no finite values, empty geometry");
            return PlotGeometry::empty(canvas);
        };

        let transform = PlotTransform::for_canvas(canvas, self.clock.span(), &range);
        let coords: Vec<Coord> = points
            .iter()
            .filter_map(|p| {
                let minute = self.clock.minutes_of(&p.time)?;
                p.has_value().then(|| transform.data_to_canvas(minute, p.pct))
            })
            .collect();

        let dropped = points.len() - coords.len();
        if dropped > 0 {
            debug!(dropped, kept = coords.len(), "skipped invalid samples");
        }

        let (Some(first), Some(last)) = (coords.first().copied(), coords.last().copied()) else {
            return PlotGeometry::empty(canvas);
        };

        let line = SvgPathBuilder::polyline(&coords);
        let floor = canvas.plot_bottom();
        let mut area = line.clone();
        area.line_to(Coord { x: last.x, y: floor });
        area.line_to(Coord { x: first.x, y: floor });
        area.close();

        PlotGeometry {
            line_path: line.build(),
            area_path: area.build(),
            zero_y: Some(transform.y_data_to_canvas(0.0)),
            range: Some(range),
            plot_height: canvas.plot_height(),
            coords,
        }
    }
}

/// Builds the geometry with the default trading sessions and range rules.
pub fn build(points: &[Sample], width: f64, height: f64, margins: Margins) -> PlotGeometry {
    GeometryBuilder::default().build(points, &Canvas::new(width, height, margins))
}
