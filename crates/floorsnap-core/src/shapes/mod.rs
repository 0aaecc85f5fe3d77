//! Shape definitions for the floor plan.

mod block;
mod wall;

pub use block::{BLOCK_TAG, Block};
pub use wall::{DEFAULT_WALL_STROKE, WALL_TAG, Wall};

use crate::geometry::BoundingBox;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width. Half of it sticks out of the geometry on every side and
    /// counts toward the bounding box.
    pub stroke_width: f64,
}

impl ShapeStyle {
    /// Default style with a specific stroke width.
    pub fn with_stroke_width(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            ..Self::default()
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the on-canvas bounding box, stroke included.
    fn bounds(&self) -> BoundingBox;

    /// Get the absolute position a drag moves.
    fn position(&self) -> Point;

    /// Move the shape so its absolute position is `position`.
    fn set_position(&mut self, position: Point);

    /// Category used to filter snapping candidates.
    fn tag(&self) -> &str;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Wall(Wall),
    Block(Block),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Wall(s) => s.id(),
            Shape::Block(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        match self {
            Shape::Wall(s) => s.bounds(),
            Shape::Block(s) => s.bounds(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Shape::Wall(s) => s.position(),
            Shape::Block(s) => s.position(),
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Shape::Wall(s) => s.set_position(position),
            Shape::Block(s) => s.set_position(position),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Shape::Wall(s) => s.tag(),
            Shape::Block(s) => s.tag(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Wall(s) => s.style(),
            Shape::Block(s) => s.style(),
        }
    }

    /// Fold any drag translation into the geometry. Blocks keep their
    /// position as their origin, so only walls change.
    pub fn commit_translation(&mut self) {
        if let Shape::Wall(wall) = self {
            wall.commit_translation();
        }
    }

    /// Get the wall if this shape is a wall.
    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            Shape::Wall(w) => Some(w),
            _ => None,
        }
    }

    /// Get the mutable wall if this shape is a wall.
    pub fn as_wall_mut(&mut self) -> Option<&mut Wall> {
        match self {
            Shape::Wall(w) => Some(w),
            _ => None,
        }
    }
}

impl From<Wall> for Shape {
    fn from(wall: Wall) -> Self {
        Shape::Wall(wall)
    }
}

impl From<Block> for Shape {
    fn from(block: Block) -> Self {
        Shape::Block(block)
    }
}
