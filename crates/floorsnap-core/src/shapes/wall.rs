//! Wall shape: a straight line drawn on the floor plan.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::geometry::{Axis, BoundingBox};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag carried by walls unless set otherwise.
pub const WALL_TAG: &str = "wall";

/// Stroke width walls are drawn with.
pub const DEFAULT_WALL_STROKE: f64 = 4.0;

fn default_wall_tag() -> String {
    WALL_TAG.to_string()
}

/// A two-point line. Endpoints are stored relative to `position`, which is
/// what a drag moves; [`Wall::commit_translation`] folds it back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub(crate) id: ShapeId,
    /// Start point (relative to `position`).
    pub start: Point,
    /// End point (relative to `position`).
    pub end: Point,
    /// Node translation applied on top of the points.
    #[serde(default)]
    pub position: Point,
    #[serde(default = "default_wall_tag")]
    pub tag: String,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Wall {
    /// Create a new wall.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            position: Point::ZERO,
            tag: default_wall_tag(),
            style: ShapeStyle::with_stroke_width(DEFAULT_WALL_STROKE),
        }
    }

    /// Replace the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Endpoints in canvas coordinates.
    pub fn absolute_points(&self) -> [Point; 2] {
        let offset = self.position.to_vec2();
        [self.start + offset, self.end + offset]
    }

    /// Get the length of the wall.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Get the midpoint of the wall in canvas coordinates.
    pub fn midpoint(&self) -> Point {
        let [a, b] = self.absolute_points();
        a.midpoint(b)
    }

    /// Bake the translation into the endpoints and reset it to the origin.
    pub fn commit_translation(&mut self) {
        let offset: Vec2 = self.position.to_vec2();
        self.start += offset;
        self.end += offset;
        self.position = Point::ZERO;
    }

    /// Straighten the wall along `axis`, keeping its length.
    ///
    /// The coordinate across the axis collapses to the midpoint of both
    /// endpoints; the endpoint lying further along the axis is pushed out by
    /// the length lost in the collapse.
    pub fn rotate_to(&mut self, axis: Axis) {
        let before = self.length();
        match axis {
            Axis::Vertical => {
                let half = (self.start.x + self.end.x) / 2.0;
                self.start.x = half;
                self.end.x = half;
                let change = before - self.length();
                if self.start.y > self.end.y {
                    self.start.y += change;
                } else {
                    self.end.y += change;
                }
            }
            Axis::Horizontal => {
                let half = (self.start.y + self.end.y) / 2.0;
                self.start.y = half;
                self.end.y = half;
                let change = before - self.length();
                if self.start.x > self.end.x {
                    self.start.x += change;
                } else {
                    self.end.x += change;
                }
            }
        }
    }

    pub fn rotate_vertical(&mut self) {
        self.rotate_to(Axis::Vertical);
    }

    pub fn rotate_horizontal(&mut self) {
        self.rotate_to(Axis::Horizontal);
    }
}

impl ShapeTrait for Wall {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> BoundingBox {
        let [a, b] = self.absolute_points();
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        BoundingBox::new(x0, y0, a.x.max(b.x) - x0, a.y.max(b.y) - y0)
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
    fn test_wall_creation() {
        let wall = Wall::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((wall.length() - 100.0).abs() < f64::EPSILON);
        assert_eq!(wall.tag(), WALL_TAG);
        assert!((wall.style.stroke_width - DEFAULT_WALL_STROKE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_include_stroke() {
        let wall = Wall::new(Point::new(10.0, 20.0), Point::new(50.0, 20.0));
        assert_eq!(wall.bounds(), BoundingBox::new(8.0, 18.0, 44.0, 4.0));
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut wall = Wall::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        wall.style.stroke_width = 0.0;
        wall.set_position(Point::new(5.0, -5.0));
        assert_eq!(wall.bounds(), BoundingBox::new(15.0, 15.0, 40.0, 60.0));
    }

    #[test]
    fn test_commit_translation() {
        let mut wall = Wall::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        wall.set_position(Point::new(3.0, 4.0));
        let bounds = wall.bounds();
        wall.commit_translation();
        assert_eq!(wall.position, Point::ZERO);
        assert_eq!(wall.start, Point::new(3.0, 4.0));
        assert_eq!(wall.end, Point::new(13.0, 14.0));
        assert_eq!(wall.bounds(), bounds);
    }

    #[test]
    fn test_rotate_vertical_keeps_length() {
        let mut wall = Wall::new(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        wall.rotate_to(Axis::Vertical);
        assert_eq!(wall.start, Point::new(15.0, 0.0));
        assert_eq!(wall.end, Point::new(15.0, 50.0));
        assert!((wall.length() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_vertical_extends_lower_start() {
        let mut wall = Wall::new(Point::new(0.0, 40.0), Point::new(30.0, 0.0));
        wall.rotate_vertical();
        assert_eq!(wall.start, Point::new(15.0, 50.0));
        assert_eq!(wall.end, Point::new(15.0, 0.0));
    }

    #[test]
    fn test_rotate_horizontal_keeps_length() {
        let mut wall = Wall::new(Point::new(40.0, 0.0), Point::new(0.0, 30.0));
        wall.rotate_horizontal();
        assert_eq!(wall.start, Point::new(50.0, 15.0));
        assert_eq!(wall.end, Point::new(0.0, 15.0));
        assert!((wall.length() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint() {
        let mut wall = Wall::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        wall.set_position(Point::new(10.0, 0.0));
        assert_eq!(wall.midpoint(), Point::new(60.0, 50.0));
    }
}
