//! Alignment guide engine: one configured entry point per drag sample.

use crate::config::SnapConfig;
use crate::error::SnapResult;
use crate::geometry::BoundingBox;
use crate::query::{ShapeQuery, collect_stops_for};
use crate::shapes::ShapeId;
use crate::snap::{
    GuideSelection, LineGuideStops, SnapAnchors, apply_guides, find_guides, snap_anchors,
};
use kurbo::{Point, Size};

/// Guides chosen for one drag sample and where the shape ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    pub guides: GuideSelection,
    /// Corrected absolute position. Equal to the input position on axes
    /// without a guide.
    pub position: Point,
}

/// Snapping engine holding a validated [`SnapConfig`].
#[derive(Debug, Clone)]
pub struct SnapEngine {
    config: SnapConfig,
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self {
            config: SnapConfig::default(),
        }
    }
}

impl SnapEngine {
    /// Create an engine, rejecting unusable configs.
    pub fn new(config: SnapConfig) -> SnapResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn collect_stops<'a, I>(&self, canvas: Size, references: I) -> LineGuideStops
    where
        I: IntoIterator<Item = &'a BoundingBox>,
    {
        crate::snap::collect_stops(canvas, references)
    }

    pub fn snap_anchors(&self, moving: &BoundingBox, absolute_position: Point) -> SnapAnchors {
        snap_anchors(moving, absolute_position, self.config.anchor_inset)
    }

    pub fn guides(&self, stops: &LineGuideStops, anchors: &SnapAnchors) -> GuideSelection {
        find_guides(stops, anchors, self.config.threshold)
    }

    pub fn apply_guides(&self, position: Point, guides: &GuideSelection) -> Point {
        apply_guides(position, guides)
    }

    /// Run a full sample for `moving` against everything else in `query`.
    ///
    /// Returns `None` only when the moving shape's box or position cannot be
    /// read. A missing stage gives an empty selection.
    pub fn snap<Q: ShapeQuery + ?Sized>(&self, query: &Q, moving: ShapeId) -> Option<SnapOutcome> {
        let bbox = query.bounding_box_of(moving)?;
        let position = query.absolute_position_of(moving)?;

        let stops = collect_stops_for(query, moving, self.config.candidate_tag.as_deref());
        let anchors = self.snap_anchors(&bbox, position);
        let guides = self.guides(&stops, &anchors);

        for guide in guides.iter() {
            log::debug!(
                "Snapping {} {} to {} on {} (distance {:.2})",
                moving,
                guide.snap.name(),
                guide.line_guide,
                guide.axis.tag(),
                guide.distance
            );
        }

        Some(SnapOutcome {
            guides,
            position: apply_guides(position, &guides),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapError;
    use crate::geometry::Axis;
    use crate::scene::Scene;
    use crate::shapes::{Block, Shape};
    use crate::snap::AnchorKind;

    fn block(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::from(Block::new(Point::new(x, y), w, h))
    }

    #[test]
    fn test_new_validates() {
        let err = SnapEngine::new(SnapConfig::default().with_threshold(0.0)).unwrap_err();
        assert_eq!(err, SnapError::InvalidThreshold(0.0));
    }

    #[test]
    fn test_snap_to_neighbour_edge() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let target = scene.add_shape(block(200.0, 100.0, 50.0, 50.0));
        let moving = scene.add_shape(block(253.0, 230.0, 30.0, 30.0));

        let outcome = SnapEngine::default().snap(&scene, moving).expect("outcome");
        let v = outcome.guides.vertical.expect("vertical guide");
        assert_eq!(v.line_guide, 250.0);
        assert_eq!(v.snap, AnchorKind::Start);
        assert!(outcome.guides.horizontal.is_none());
        assert_eq!(outcome.position, Point::new(250.0, 230.0));
        assert!(scene.get_shape(target).is_some());
    }

    #[test]
    fn test_twins_snap_to_each_other_not_self() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        scene.add_shape(block(100.0, 100.0, 50.0, 50.0));
        let moving = scene.add_shape(block(100.0, 100.0, 50.0, 50.0));

        let outcome = SnapEngine::default().snap(&scene, moving).expect("outcome");
        // Only the other twin's stops line up, and they do so exactly.
        assert_eq!(outcome.guides.len(), 2);
        assert!(outcome.guides.iter().all(|g| g.distance == 0.0));
        assert_eq!(outcome.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_detached_scene_gives_no_guides() {
        let mut scene = Scene::detached();
        let moving = scene.add_shape(block(2.0, 2.0, 10.0, 10.0));
        let outcome = SnapEngine::default().snap(&scene, moving).expect("outcome");
        assert!(outcome.guides.is_empty());
        assert_eq!(outcome.position, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_unknown_shape() {
        let scene = Scene::new(Size::new(800.0, 600.0));
        assert!(SnapEngine::default().snap(&scene, uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_candidate_tag_limits_references() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        scene.add_shape(Shape::from(
            Block::new(Point::new(200.0, 100.0), 50.0, 50.0).with_tag("furniture"),
        ));
        let moving = scene.add_shape(block(253.0, 230.0, 30.0, 30.0));

        let engine = SnapEngine::new(SnapConfig::default().with_candidate_tag("object"))
            .expect("engine");
        let outcome = engine.snap(&scene, moving).expect("outcome");
        assert!(outcome.guides.get(Axis::Vertical).is_none());
    }

    #[test]
    fn test_object_tag_ignores_walls() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        // Wall bounds span x 298..302 with the default stroke.
        scene.add_shape(Shape::from(crate::shapes::Wall::new(
            Point::new(300.0, 20.0),
            Point::new(300.0, 80.0),
        )));
        let moving = scene.add_shape(block(303.0, 230.0, 30.0, 30.0));

        let all = SnapEngine::default().snap(&scene, moving).expect("outcome");
        assert!(all.guides.vertical.is_some());

        let objects_only = SnapEngine::new(SnapConfig::default().with_candidate_tag("object"))
            .expect("engine")
            .snap(&scene, moving)
            .expect("outcome");
        assert!(objects_only.guides.vertical.is_none());
        assert_eq!(objects_only.position.x, 303.0);
    }

    #[test]
    fn test_larger_threshold_reaches_further() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let moving = scene.add_shape(block(10.0, 280.0, 20.0, 20.0));
        let strict = SnapEngine::default().snap(&scene, moving).expect("outcome");
        assert!(strict.guides.vertical.is_none());

        let loose = SnapEngine::new(SnapConfig::default().with_threshold(12.0))
            .expect("engine")
            .snap(&scene, moving)
            .expect("outcome");
        assert_eq!(loose.guides.vertical.map(|g| g.line_guide), Some(0.0));
        assert_eq!(loose.position.x, 0.0);
    }
}
