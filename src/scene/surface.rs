use crate::scene::layout::{Dimensions, Rect};
use serde::{Deserialize, Serialize};

pub const BACKGROUND: &str = "#2d2b42";
pub const PANEL: &str = "#1f1f2e";
pub const GOLD: &str = "#f5c542";
pub const FELT: &str = "#1b6e36";
pub const TITLE_INK: &str = "#fff";
pub const TITLE_FONT: &str = "28px Arial";

/// One retained 2D drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: Rect, color: String },
    StrokeRect { rect: Rect, color: String, line_width: f64 },
    FillCircle { cx: f64, cy: f64, radius: f64, color: String },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64, fill: String, stroke: String, line_width: f64 },
    Text { text: String, x: f64, y: f64, font: String, color: String },
}

/// Recording 2D surface the placeholder scenes are drawn onto once
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    dims: Dimensions,
    commands: Vec<DrawCommand>,
}

impl Surface {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            commands: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fill_background(&mut self, color: &str) {
        let rect = Rect::new(0.0, 0.0, self.dims.width, self.dims.height);
        self.fill_rect(rect, color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.to_string(),
            line_width,
        });
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color: color.to_string(),
        });
    }

    pub fn ellipse(&mut self, center: (f64, f64), radii: (f64, f64), fill: &str, stroke: &str, line_width: f64) {
        self.commands.push(DrawCommand::Ellipse {
            cx: center.0,
            cy: center.1,
            rx: radii.0,
            ry: radii.1,
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            line_width,
        });
    }

    /// Centred title text in the standard heading style
    pub fn title(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: TITLE_FONT.to_string(),
            color: TITLE_INK.to_string(),
        });
    }

    /// Text of every title drawn so far
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
