//! Scene: the shapes on the floor plan plus transient guide lines.

use crate::error::{SceneError, SceneResult};
use crate::geometry::{Axis, BoundingBox};
use crate::overlay::{GuideLayer, GuideLine};
use crate::query::ShapeQuery;
use crate::shapes::{Shape, ShapeId};
use crate::snap::Guide;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// All shapes of one floor plan, keyed by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: String,
    /// Stage size. `None` while the scene is not attached to a stage.
    #[serde(default)]
    size: Option<Size>,
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front).
    z_order: Vec<ShapeId>,
    /// Guide lines currently shown. Never persisted.
    #[serde(skip)]
    guide_lines: Vec<GuideLine>,
}

impl Scene {
    /// Create an empty scene attached to a stage of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            size: Some(size),
            shapes: HashMap::new(),
            z_order: Vec::new(),
            guide_lines: Vec::new(),
        }
    }

    /// Create an empty scene with no stage.
    pub fn detached() -> Self {
        Self {
            size: None,
            ..Self::new(Size::ZERO)
        }
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Attach to (or resize) the stage.
    pub fn set_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    /// Add a shape on top and return its ID.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_none() {
            self.z_order.push(id);
        }
        id
    }

    /// Remove a shape from the scene.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> SceneResult<&mut Shape> {
        self.shapes.get_mut(&id).ok_or(SceneError::ShapeNotFound(id))
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Move a shape so its absolute position is `position`.
    pub fn set_position(&mut self, id: ShapeId, position: Point) -> SceneResult<()> {
        self.shape_mut(id)?.set_position(position);
        Ok(())
    }

    /// Fold a finished drag into the shape's geometry.
    pub fn commit_translation(&mut self, id: ShapeId) -> SceneResult<()> {
        self.shape_mut(id)?.commit_translation();
        Ok(())
    }

    /// Straighten a wall along `axis`, keeping its length.
    pub fn rotate_wall(&mut self, id: ShapeId, axis: Axis) -> SceneResult<()> {
        let wall = self
            .shape_mut(id)?
            .as_wall_mut()
            .ok_or(SceneError::NotAWall(id))?;
        wall.rotate_to(axis);
        Ok(())
    }

    /// Guide lines currently shown.
    pub fn guide_lines(&self) -> &[GuideLine] {
        &self.guide_lines
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ShapeQuery for Scene {
    fn stage_size(&self) -> Option<Size> {
        self.size
    }

    fn bounding_box_of(&self, id: ShapeId) -> Option<BoundingBox> {
        self.shapes.get(&id).map(Shape::bounds)
    }

    fn absolute_position_of(&self, id: ShapeId) -> Option<Point> {
        self.shapes.get(&id).map(Shape::position)
    }

    fn list_candidates(&self, tag: Option<&str>) -> Vec<ShapeId> {
        self.shapes_ordered()
            .filter(|s| tag.is_none_or(|tag| s.tag() == tag))
            .map(Shape::id)
            .collect()
    }
}

impl GuideLayer for Scene {
    fn clear_guides(&mut self) {
        self.guide_lines.clear();
    }

    fn draw_guide(&mut self, guide: &Guide, extent: f64) {
        self.guide_lines.push(GuideLine::from_guide(guide, extent));
    }

    fn guide_count(&self) -> usize {
        self.guide_lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Block, Wall};
    use crate::snap::AnchorKind;

    fn scene() -> Scene {
        Scene::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn test_add_and_remove() {
        let mut scene = scene();
        let id = scene.add_shape(Shape::from(Block::new(Point::ZERO, 10.0, 10.0)));
        assert_eq!(scene.len(), 1);
        assert!(scene.remove_shape(id).is_some());
        assert!(scene.is_empty());
        assert_eq!(scene.shapes_ordered().count(), 0);
    }

    #[test]
    fn test_readding_keeps_single_z_entry() {
        let mut scene = scene();
        let block = Shape::from(Block::new(Point::ZERO, 10.0, 10.0));
        scene.add_shape(block.clone());
        scene.add_shape(block);
        assert_eq!(scene.list_candidates(None).len(), 1);
    }

    #[test]
    fn test_candidates_in_z_order_with_tag() {
        let mut scene = scene();
        let a = scene.add_shape(Shape::from(Wall::new(Point::ZERO, Point::new(10.0, 0.0))));
        let b = scene.add_shape(Shape::from(Block::new(Point::ZERO, 10.0, 10.0)));
        let c = scene.add_shape(Shape::from(Wall::new(Point::ZERO, Point::new(0.0, 10.0))));
        assert_eq!(scene.list_candidates(None), vec![a, b, c]);
        assert_eq!(scene.list_candidates(Some("wall")), vec![a, c]);
        assert_eq!(scene.list_candidates(Some("object")), vec![b]);
    }

    #[test]
    fn test_rotate_wall() {
        let mut scene = scene();
        let wall = scene.add_shape(Shape::from(Wall::new(Point::ZERO, Point::new(30.0, 40.0))));
        let block = scene.add_shape(Shape::from(Block::new(Point::ZERO, 10.0, 10.0)));

        scene.rotate_wall(wall, Axis::Horizontal).expect("rotate");
        let rotated = scene.get_shape(wall).and_then(Shape::as_wall).expect("wall");
        assert_eq!(rotated.start.y, rotated.end.y);

        assert_eq!(scene.rotate_wall(block, Axis::Vertical), Err(SceneError::NotAWall(block)));
        let missing = Uuid::new_v4();
        assert_eq!(
            scene.rotate_wall(missing, Axis::Vertical),
            Err(SceneError::ShapeNotFound(missing))
        );
    }

    #[test]
    fn test_guide_layer() {
        let mut scene = scene();
        let guide = Guide {
            axis: Axis::Vertical,
            line_guide: 400.0,
            snap: AnchorKind::Center,
            offset: -20.0,
            distance: 1.0,
        };
        scene.draw_guide(&guide, 6000.0);
        scene.draw_guide(&guide, 6000.0);
        assert_eq!(scene.guide_count(), 2);
        scene.clear_guides();
        assert_eq!(scene.guide_count(), 0);
    }

    #[test]
    fn test_json_skips_guides() {
        let mut scene = scene();
        let id = scene.add_shape(Shape::from(Wall::new(Point::ZERO, Point::new(10.0, 0.0))));
        let guide = Guide {
            axis: Axis::Horizontal,
            line_guide: 0.0,
            snap: AnchorKind::Start,
            offset: 0.0,
            distance: 0.0,
        };
        scene.draw_guide(&guide, 10.0);

        let restored = Scene::from_json(&scene.to_json().expect("serialize")).expect("parse");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get_shape(id), scene.get_shape(id));
        assert_eq!(restored.guide_count(), 0);
        assert_eq!(restored.size(), Some(Size::new(800.0, 600.0)));
    }
}
