//! Read-only view of the scene that the guide engine needs.

use crate::geometry::BoundingBox;
use crate::shapes::ShapeId;
use crate::snap::{LineGuideStops, collect_stops};
use kurbo::{Point, Size};

/// Scene-graph queries consumed by the guide engine.
///
/// Implementations answer `None` when a shape or the stage is not available;
/// the engine treats that as "nothing to snap to", never as an error.
pub trait ShapeQuery {
    /// Size of the stage the shapes live on, if one is attached.
    fn stage_size(&self) -> Option<Size>;

    /// Current bounding box of a shape.
    fn bounding_box_of(&self, id: ShapeId) -> Option<BoundingBox>;

    /// Current absolute position of a shape.
    fn absolute_position_of(&self, id: ShapeId) -> Option<Point>;

    /// Shapes that may serve as snapping references, in z-order.
    /// `tag = None` lists every shape.
    fn list_candidates(&self, tag: Option<&str>) -> Vec<ShapeId>;
}

/// Collect stops for dragging `moving`, skipping it by identity.
///
/// Another shape with the exact same box still contributes its stops.
pub fn collect_stops_for<Q: ShapeQuery + ?Sized>(
    query: &Q,
    moving: ShapeId,
    tag: Option<&str>,
) -> LineGuideStops {
    let Some(stage) = query.stage_size() else {
        return LineGuideStops::empty();
    };
    let references: Vec<BoundingBox> = query
        .list_candidates(tag)
        .into_iter()
        .filter(|&id| id != moving)
        .filter_map(|id| query.bounding_box_of(id))
        .collect();
    log::trace!(
        "Collecting stops for {} from {} reference shapes",
        moving,
        references.len()
    );
    collect_stops(stage, &references)
}
