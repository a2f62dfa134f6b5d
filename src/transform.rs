//! Transform helper for coordinate projection

use serde::{Deserialize, Serialize};

use crate::data_types::Canvas;
use crate::geometry::ValueRange;
use crate::scales::ChartScale;
use crate::session::SessionMinute;

/// A point in logical canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale) -> Self {
        Self { x_scale, y_scale }
    }

    /// Session minutes across the plot width, padded values top to bottom.
    pub fn for_canvas(canvas: &Canvas, span: SessionMinute, range: &ValueRange) -> Self {
        Self::new(session_scale(canvas, span), range.y_scale(canvas))
    }

    pub fn data_to_canvas(&self, minute: SessionMinute, pct: f64) -> Coord {
        Coord {
            x: self.x_data_to_canvas(minute),
            y: self.y_data_to_canvas(pct),
        }
    }

    pub fn x_data_to_canvas(&self, minute: SessionMinute) -> f64 {
        self.x_scale.map(f64::from(minute))
    }

    pub fn y_data_to_canvas(&self, pct: f64) -> f64 {
        self.y_scale.map(pct)
    }
}

/// Session minutes `[0, span]` across the plot width.
pub fn session_scale(canvas: &Canvas, span: SessionMinute) -> ChartScale {
    ChartScale::new_linear(
        (0.0, f64::from(span)),
        (canvas.plot_left(), canvas.plot_right()),
    )
}
