// Draw commands produced by the simulation and replayed by the renderer

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
        width: f64,
    },
}

impl DrawCommand {
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }
}
