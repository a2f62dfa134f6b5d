//! Path-description strings: `M x y`, `L x y`, `Z`, coordinates with two decimals.

use std::fmt;

use crate::transform::Coord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Coord),
    LineTo(Coord),
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(c) => write!(f, "M {:.2} {:.2}", round2(c.x), round2(c.y)),
            Self::LineTo(c) => write!(f, "L {:.2} {:.2}", round2(c.x), round2(c.y)),
            Self::Close => f.write_str("Z"),
        }
    }
}

// Two decimals, ties away from zero; never "-0.00".
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[derive(Clone, Debug, Default)]
pub struct SvgPathBuilder {
    commands: Vec<PathCommand>,
}

impl SvgPathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Coord) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Coord) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Move to the first point, line through the rest.
    pub fn polyline(points: &[Coord]) -> Self {
        let mut builder = Self::new();
        for (idx, point) in points.iter().enumerate() {
            if idx == 0 {
                builder.move_to(*point);
            } else {
                builder.line_to(*point);
            }
        }
        builder
    }

    pub fn build(&self) -> String {
        self.commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
