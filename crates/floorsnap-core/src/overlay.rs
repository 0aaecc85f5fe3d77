//! Transient guide lines drawn while a shape is being dragged.

use crate::geometry::Axis;
use crate::snap::Guide;
use kurbo::{Line, Point};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Name every transient guide line carries, so they can be found in bulk.
pub const GUIDE_LINE_NAME: &str = "guide-line";

/// Visual style of guide lines.
#[derive(Debug, Clone, Copy)]
pub struct GuideLineStyle {
    pub color: Color,
    pub stroke_width: f64,
    /// Dash pattern (on, off).
    pub dash: [f64; 2],
}

impl Default for GuideLineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 161, 255, 255),
            stroke_width: 1.0,
            dash: [4.0, 6.0],
        }
    }
}

/// A guide line primitive in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub name: String,
    pub axis: Axis,
    /// Constant coordinate of the line (x for vertical, y for horizontal).
    pub position: f64,
    pub line: Line,
}

impl GuideLine {
    /// Line for `guide` reaching `extent` past the origin in both directions.
    pub fn from_guide(guide: &Guide, extent: f64) -> Self {
        let line = match guide.axis {
            Axis::Vertical => Line::new(
                Point::new(guide.line_guide, -extent),
                Point::new(guide.line_guide, extent),
            ),
            Axis::Horizontal => Line::new(
                Point::new(-extent, guide.line_guide),
                Point::new(extent, guide.line_guide),
            ),
        };
        Self {
            name: GUIDE_LINE_NAME.to_string(),
            axis: guide.axis,
            position: guide.line_guide,
            line,
        }
    }
}

/// Something that can show and remove guide lines.
pub trait GuideLayer {
    /// Remove every guide line.
    fn clear_guides(&mut self);

    /// Draw one guide line for `guide`.
    fn draw_guide(&mut self, guide: &Guide, extent: f64);

    /// Number of guide lines currently shown.
    fn guide_count(&self) -> usize;
}
