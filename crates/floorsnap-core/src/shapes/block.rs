//! Block shape: an axis-aligned rectangle used as a snapping reference.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::geometry::BoundingBox;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag carried by blocks unless set otherwise.
pub const BLOCK_TAG: &str = "object";

fn default_block_tag() -> String {
    BLOCK_TAG.to_string()
}

/// An axis-aligned rectangle. Its position is its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_block_tag")]
    pub tag: String,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Block {
    /// Create a new block.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            tag: default_block_tag(),
            style: ShapeStyle::with_stroke_width(0.0),
        }
    }

    /// Create a block from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let rect = Rect::from_points(p1, p2);
        Self::new(rect.origin(), rect.width(), rect.height())
    }

    /// Replace the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Get the block as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }
}

impl ShapeTrait for Block {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.position.x, self.position.y, self.width, self.height)
            .inflate(self.style.stroke_width / 2.0)
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_from_corners() {
        let block = Block::from_corners(Point::new(100.0, 100.0), Point::new(50.0, 60.0));
        assert_eq!(block.position, Point::new(50.0, 60.0));
        assert!((block.width - 50.0).abs() < f64::EPSILON);
        assert!((block.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let block = Block::new(Point::new(10.0, 20.0), 100.0, 50.0);
        assert_eq!(block.bounds(), BoundingBox::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(BoundingBox::from(block.as_rect()), block.bounds());
    }

    #[test]
    fn test_stroke_widens_bounds() {
        let mut block = Block::new(Point::new(10.0, 20.0), 100.0, 50.0);
        block.style.stroke_width = 2.0;
        assert_eq!(block.bounds(), BoundingBox::new(9.0, 19.0, 102.0, 52.0));
    }
}
