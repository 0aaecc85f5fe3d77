//! Axis-aligned geometry snapshots shared by the guide engine and the scene.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis a stop or guide lives on.
///
/// Vertical guides are lines of constant x, horizontal guides are lines of
/// constant y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "V")]
    Vertical,
    #[serde(rename = "H")]
    Horizontal,
}

impl Axis {
    /// Both axes, vertical first.
    pub const ALL: [Axis; 2] = [Axis::Vertical, Axis::Horizontal];

    /// Short tag used in logs and serialized output.
    pub fn tag(self) -> &'static str {
        match self {
            Axis::Vertical => "V",
            Axis::Horizontal => "H",
        }
    }

    /// Read the coordinate this axis controls from a point.
    pub fn coord(self, point: Point) -> f64 {
        match self {
            Axis::Vertical => point.x,
            Axis::Horizontal => point.y,
        }
    }

    /// Return `point` with this axis's coordinate replaced.
    pub fn with_coord(self, point: Point, value: f64) -> Point {
        match self {
            Axis::Vertical => Point::new(value, point.y),
            Axis::Horizontal => Point::new(point.x, value),
        }
    }
}

/// Axis-aligned rectangle in canvas pixels, snapshotted at query time.
///
/// No validation happens here: a negative size or NaN coordinate is a caller
/// bug and simply never produces a guide downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Leading edge on the axis (`x` or `y`).
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.x,
            Axis::Horizontal => self.y,
        }
    }

    /// Size along the axis (`width` or `height`).
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.width,
            Axis::Horizontal => self.height,
        }
    }

    pub fn center(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis) / 2.0
    }

    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis)
    }

    /// Grow the box by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.as_rect()
    }
}

/// Round to the nearest whole pixel, halves going toward positive infinity.
///
/// This is the browser's `Math.round` rule, which differs from
/// [`f64::round`] for negative halves (`-2.5` becomes `-2`, not `-3`).
pub fn round_px(value: f64) -> f64 {
    // `value + 0.5` can itself round up, so compare the exact fractional part.
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
