use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::session::{SessionClock, TradingSession};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 18.0,
            left: 44.0,
        }
    }
}

/// Fixed logical drawing space. The renderer scales it to physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Canvas {
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margins.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    /// Floor of the plot area, where the area fill closes.
    pub fn plot_bottom(&self) -> f64 {
        self.margins.top + self.plot_height()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 120.0,
            margins: Margins::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: Canvas,
    /// Upper bound on stored samples; older ones are dropped.
    pub max_points: usize,
    /// Smallest value span used for padding, in percentage points.
    pub min_range: f64,
    /// Padding added above and below the value range, as a fraction of it.
    pub padding_ratio: f64,
    pub sessions: Vec<TradingSession>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            max_points: 300,
            min_range: 0.2,
            padding_ratio: 0.08,
            sessions: TradingSession::defaults(),
        }
    }
}

impl ChartConfig {
    /// Parses a JSON override; absent fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).wrap_err("invalid chart config")?;
        config.clock()?;
        Ok(config)
    }

    pub fn clock(&self) -> Result<SessionClock> {
        SessionClock::new(&self.sessions).wrap_err("invalid trading sessions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_plot_area() {
        let canvas = Canvas::default();
        assert_eq!(canvas.plot_width(), 946.0);
        assert_eq!(canvas.plot_height(), 92.0);
        assert_eq!(canvas.plot_right(), 990.0);
        assert_eq!(canvas.plot_bottom(), 102.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ChartConfig::from_json_str(r#"{"max_points": 50}"#).unwrap();
        assert_eq!(config.max_points, 50);
        assert_eq!(config.min_range, 0.2);
        assert_eq!(config.sessions, TradingSession::defaults());
    }

    #[test]
    fn test_rejects_overlapping_sessions() {
        let raw = r#"{"sessions": [
            {"open": "09:30:00", "close": "11:30:00"},
            {"open": "11:00:00", "close": "15:00:00"}
        ]}"#;
        assert!(ChartConfig::from_json_str(raw).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ChartConfig::from_json_str("{not json").is_err());
    }
}
