//! Drag gesture driver: feeds pointer samples through the guide engine.

use crate::engine::SnapEngine;
use crate::overlay::GuideLayer;
use crate::query::ShapeQuery;
use crate::scene::Scene;
use crate::shapes::ShapeId;
use crate::snap::GuideSelection;
use kurbo::{Point, Vec2};

/// State for one drag of one shape, from pointer-down to pointer-up.
#[derive(Debug, Clone)]
pub struct DragGesture {
    /// The shape being dragged.
    pub shape_id: ShapeId,
    /// Pointer position when the drag started.
    pub start_point: Point,
    /// Latest pointer position.
    pub current_point: Point,
    /// Shape position when the drag started.
    pub original_position: Point,
}

impl DragGesture {
    /// Start dragging `shape_id`. Returns `None` if the shape is unknown.
    pub fn begin<Q: ShapeQuery + ?Sized>(query: &Q, shape_id: ShapeId, pointer: Point) -> Option<Self> {
        let original_position = query.absolute_position_of(shape_id)?;
        Some(Self {
            shape_id,
            start_point: pointer,
            current_point: pointer,
            original_position,
        })
    }

    /// Get the pointer delta since the drag started.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// Handle one pointer-move sample.
    ///
    /// The shape first follows the pointer, then the previous sample's guide
    /// lines are removed, guides are computed against the rest of the scene,
    /// drawn, and the snapped position is written back.
    pub fn on_move(&mut self, scene: &mut Scene, engine: &SnapEngine, pointer: Point) -> GuideSelection {
        self.current_point = pointer;
        let unconstrained = self.original_position + self.delta();
        if scene.set_position(self.shape_id, unconstrained).is_err() {
            log::warn!("Dragged shape {} is no longer in the scene", self.shape_id);
            scene.clear_guides();
            return GuideSelection::none();
        }

        scene.clear_guides();

        let Some(outcome) = engine.snap(&*scene, self.shape_id) else {
            return GuideSelection::none();
        };
        if outcome.guides.is_empty() {
            return outcome.guides;
        }

        let extent = engine.config().guide_extent;
        for guide in outcome.guides.iter() {
            scene.draw_guide(guide, extent);
        }
        // Presence was checked by the first set_position.
        let _ = scene.set_position(self.shape_id, outcome.position);
        outcome.guides
    }

    /// Finish the drag: remove every guide line and fold the translation into
    /// the shape. Returns the final absolute position if the shape still exists.
    pub fn end(self, scene: &mut Scene) -> Option<Point> {
        scene.clear_guides();
        let position = scene.absolute_position_of(self.shape_id);
        if let Err(e) = scene.commit_translation(self.shape_id) {
            log::warn!("Failed to commit drag: {}", e);
        }
        position
    }
}
