//! Object snapping against canvas borders and other shapes' edges.
//!
//! A drag sample is processed in four pure steps: collect the candidate stops,
//! extract the moving shape's anchors, match them into at most one guide per
//! axis, and overwrite the snapped axes of the shape's absolute position.

use crate::geometry::{Axis, BoundingBox, round_px};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Default distance (in canvas pixels) under which a stop captures an anchor.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Which semantic point of the moving shape an anchor represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    /// Leading edge (`x` or `y`).
    Start,
    /// Midpoint of the box on the axis.
    Center,
    /// Trailing edge (`x + width` or `y + height`).
    End,
}

impl AnchorKind {
    /// Anchors in enumeration order.
    pub const ALL: [AnchorKind; 3] = [AnchorKind::Start, AnchorKind::Center, AnchorKind::End];

    /// Distance from the box's leading edge to this anchor.
    ///
    /// `inset` pulls the two edges toward the middle, the center is unaffected.
    pub fn adjustment(self, extent: f64, inset: f64) -> f64 {
        match self {
            AnchorKind::Start => inset,
            AnchorKind::Center => extent / 2.0,
            AnchorKind::End => extent - inset,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnchorKind::Start => "start",
            AnchorKind::Center => "center",
            AnchorKind::End => "end",
        }
    }
}

/// One snappable point of the moving shape on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnchor {
    pub kind: AnchorKind,
    /// Anchor coordinate, rounded to whole pixels.
    pub guide: f64,
    /// Rounded distance from the shape's absolute position to the anchor.
    /// Snapping the anchor onto a stop puts the position at `stop + offset`.
    pub offset: f64,
}

/// The three anchors of the moving shape on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnchors {
    pub vertical: [SnapAnchor; 3],
    pub horizontal: [SnapAnchor; 3],
}

impl SnapAnchors {
    pub fn axis(&self, axis: Axis) -> &[SnapAnchor; 3] {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }
}

/// Candidate coordinates the moving shape may snap to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineGuideStops {
    /// x values of vertical lines.
    pub vertical: Vec<f64>,
    /// y values of horizontal lines.
    pub horizontal: Vec<f64>,
}

impl LineGuideStops {
    /// No stops at all, used when there is no stage to snap within.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut Vec<f64> {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    /// Append the start, center and end of `bbox` on both axes.
    pub fn push_box(&mut self, bbox: &BoundingBox) {
        for axis in Axis::ALL {
            self.axis_mut(axis)
                .extend([bbox.start(axis), bbox.center(axis), bbox.end(axis)]);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// A matched stop/anchor pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(rename = "orientation")]
    pub axis: Axis,
    /// The stop the anchor snaps onto.
    pub line_guide: f64,
    pub snap: AnchorKind,
    pub offset: f64,
    /// Distance between stop and anchor before snapping. Only meaningful for
    /// choosing between candidates.
    #[serde(skip)]
    pub distance: f64,
}

impl Guide {
    /// Absolute coordinate the shape takes on this guide's axis.
    pub fn snapped_coord(&self) -> f64 {
        self.line_guide + self.offset
    }
}

/// At most one guide per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideSelection {
    pub vertical: Option<Guide>,
    pub horizontal: Option<Guide>,
}

impl GuideSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, axis: Axis) -> Option<&Guide> {
        match axis {
            Axis::Vertical => self.vertical.as_ref(),
            Axis::Horizontal => self.horizontal.as_ref(),
        }
    }

    /// Selected guides, vertical first.
    pub fn iter(&self) -> impl Iterator<Item = &Guide> {
        self.vertical.iter().chain(self.horizontal.iter())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

/// Collect stops from the canvas and the given reference boxes.
///
/// Each axis is seeded with the canvas border, center and far border, then
/// every reference box adds its start, center and end. Duplicates are kept.
/// The caller must leave the moving shape's own box out of `references`; see
/// [`crate::query::collect_stops_for`] for the identity-based variant.
pub fn collect_stops<'a, I>(canvas: Size, references: I) -> LineGuideStops
where
    I: IntoIterator<Item = &'a BoundingBox>,
{
    let mut stops = LineGuideStops {
        vertical: vec![0.0, canvas.width / 2.0, canvas.width],
        horizontal: vec![0.0, canvas.height / 2.0, canvas.height],
    };
    for bbox in references {
        stops.push_box(bbox);
    }
    stops
}

/// Extract the moving shape's anchors.
///
/// Guide and offset are rounded independently, so `stop + offset` lands on a
/// whole pixel whatever the fractional part of the box.
pub fn snap_anchors(moving: &BoundingBox, absolute_position: Point, inset: f64) -> SnapAnchors {
    let anchors_on = |axis: Axis| {
        let start = moving.start(axis);
        let extent = moving.extent(axis);
        let origin = axis.coord(absolute_position);
        AnchorKind::ALL.map(|kind| {
            let adjustment = kind.adjustment(extent, inset);
            SnapAnchor {
                kind,
                guide: round_px(start + adjustment),
                offset: round_px(origin - start - adjustment),
            }
        })
    };

    SnapAnchors {
        vertical: anchors_on(Axis::Vertical),
        horizontal: anchors_on(Axis::Horizontal),
    }
}

/// Pick the closest stop/anchor pair on one axis.
///
/// Stops are iterated outside, anchors inside, and a later pair only replaces
/// the current best when strictly closer.
fn closest_on_axis(
    axis: Axis,
    stops: &[f64],
    anchors: &[SnapAnchor],
    threshold: f64,
) -> Option<Guide> {
    let mut best: Option<Guide> = None;
    for &stop in stops {
        for anchor in anchors {
            let distance = (stop - anchor.guide).abs();
            // NaN fails this comparison and is dropped here.
            let within = distance < threshold;
            if !within {
                continue;
            }
            if best.is_some_and(|b| distance >= b.distance) {
                continue;
            }
            best = Some(Guide {
                axis,
                line_guide: stop,
                snap: anchor.kind,
                offset: anchor.offset,
                distance,
            });
        }
    }
    best
}

/// Match stops against anchors, returning at most one guide per axis.
pub fn find_guides(stops: &LineGuideStops, anchors: &SnapAnchors, threshold: f64) -> GuideSelection {
    GuideSelection {
        vertical: closest_on_axis(
            Axis::Vertical,
            stops.axis(Axis::Vertical),
            anchors.axis(Axis::Vertical),
            threshold,
        ),
        horizontal: closest_on_axis(
            Axis::Horizontal,
            stops.axis(Axis::Horizontal),
            anchors.axis(Axis::Horizontal),
            threshold,
        ),
    }
}

/// Overwrite the snapped axes of `position`.
///
/// Axes without a guide keep the pointer-driven coordinate. Applying the same
/// selection twice gives the same result.
pub fn apply_guides(position: Point, guides: &GuideSelection) -> Point {
    guides
        .iter()
        .fold(position, |pos, guide| guide.axis.with_coord(pos, guide.snapped_coord()))
}
