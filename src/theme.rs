use gpui::*;

use crate::presentation::Trend;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    /// Stroke for a non-negative latest value.
    pub up: Hsla,
    pub down: Hsla,
    pub zero_line: Hsla,
    pub axis_tick: Hsla,
    pub marker_outline: Hsla,
    /// Area fill opacity under the line; it fades to transparent at the plot floor.
    pub fill_opacity: f32,
    pub line_width: f32,
    pub marker_radius: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            up: gpui::red(),
            down: gpui::green(),
            zero_line: gpui::white().alpha(0.25),
            axis_tick: gpui::white().alpha(0.25),
            marker_outline: gpui::black().alpha(0.9),
            fill_opacity: 0.24,
            line_width: 2.0,
            marker_radius: 3.0,
        }
    }
}

impl ChartTheme {
    pub fn trend_color(&self, trend: Trend) -> Hsla {
        match trend {
            Trend::Up => self.up,
            Trend::Down => self.down,
        }
    }

    /// Top and bottom colour stops of the area fill.
    pub fn fill_stops(&self, trend: Trend) -> (Hsla, Hsla) {
        let color = self.trend_color(trend);
        (color.alpha(self.fill_opacity), color.alpha(0.0))
    }

    /// Vertical gradient fading the trend colour out towards the plot floor.
    pub fn fill_background(&self, trend: Trend) -> Background {
        let (top, bottom) = self.fill_stops(trend);
        linear_gradient(
            180.0,
            linear_color_stop(top, 0.0),
            linear_color_stop(bottom, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::v1::test;

    #[test]
    fn test_fill_fades_out() {
        let theme = ChartTheme::default();
        let (top, bottom) = theme.fill_stops(Trend::Up);
        assert_eq!(top.a, 0.24);
        assert_eq!(bottom.a, 0.0);
        assert_eq!(top.h, theme.up.h);

        let (top, _) = theme.fill_stops(Trend::Down);
        assert_eq!(top.h, theme.down.h);
    }
}
