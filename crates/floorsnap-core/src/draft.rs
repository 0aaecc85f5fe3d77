//! In-progress wall drawing.

use crate::error::{SceneError, SceneResult};
use crate::shapes::Wall;
use kurbo::Point;

/// Pointer travel below which a drawn line is discarded as a click.
pub const MIN_LINE_LENGTH: f64 = 5.0;

/// A wall being drawn: fixed start, end following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDraft {
    pub start: Point,
    /// Latest end point, `None` until the pointer moves.
    pub end: Option<Point>,
}

impl LineDraft {
    /// Start drawing at `start`.
    pub fn begin(start: Point) -> Self {
        Self { start, end: None }
    }

    /// Replace the provisional end point.
    pub fn update(&mut self, point: Point) {
        self.end = Some(point);
    }

    /// Larger of the horizontal and vertical pointer travel.
    fn travel(&self, end: Point) -> f64 {
        (self.start.x - end.x).abs().max((self.start.y - end.y).abs())
    }

    /// Finish the line at `end`.
    ///
    /// Short strokes are rejected so that a plain click never leaves a
    /// zero-length wall behind.
    pub fn finish(self, end: Point) -> SceneResult<Wall> {
        let length = self.travel(end);
        if length < MIN_LINE_LENGTH {
            log::debug!("Discarding line shorter than {} px", MIN_LINE_LENGTH);
            return Err(SceneError::LineTooShort {
                length,
                min: MIN_LINE_LENGTH,
            });
        }
        Ok(Wall::new(self.start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_creates_wall() {
        let mut draft = LineDraft::begin(Point::new(10.0, 10.0));
        draft.update(Point::new(50.0, 12.0));
        assert_eq!(draft.end, Some(Point::new(50.0, 12.0)));
        let wall = draft.finish(Point::new(60.0, 10.0)).expect("wall");
        assert_eq!(wall.start, Point::new(10.0, 10.0));
        assert_eq!(wall.end, Point::new(60.0, 10.0));
    }

    #[test]
    fn test_click_is_discarded() {
        let draft = LineDraft::begin(Point::new(10.0, 10.0));
        let err = draft.finish(Point::new(13.0, 14.0)).unwrap_err();
        assert_eq!(err, SceneError::LineTooShort { length: 4.0, min: MIN_LINE_LENGTH });
    }

    #[test]
    fn test_travel_uses_larger_axis() {
        // 4 px on each axis is still a click, 5 px on one axis is a line.
        assert!(LineDraft::begin(Point::ZERO).finish(Point::new(4.0, 4.0)).is_err());
        assert!(LineDraft::begin(Point::ZERO).finish(Point::new(0.0, 5.0)).is_ok());
    }
}
