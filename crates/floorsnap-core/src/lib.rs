//! FloorSnap Core Library
//!
//! Floor-plan shapes and the alignment guide engine that snaps a dragged
//! shape to the canvas borders and to other shapes' edges and centers.

pub mod config;
pub mod draft;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod query;
pub mod scene;
pub mod shapes;
pub mod snap;

pub use config::{DEFAULT_GUIDE_EXTENT, SnapConfig};
pub use draft::{LineDraft, MIN_LINE_LENGTH};
pub use drag::DragGesture;
pub use engine::{SnapEngine, SnapOutcome};
pub use error::{SceneError, SceneResult, SnapError, SnapResult};
pub use geometry::{Axis, BoundingBox, round_px};
pub use overlay::{GUIDE_LINE_NAME, GuideLayer, GuideLine, GuideLineStyle};
pub use query::{ShapeQuery, collect_stops_for};
pub use scene::Scene;
pub use shapes::{Block, Shape, ShapeId, ShapeStyle, ShapeTrait, Wall};
pub use snap::{
    AnchorKind, DEFAULT_THRESHOLD, Guide, GuideSelection, LineGuideStops, SnapAnchor,
    SnapAnchors, apply_guides, collect_stops, find_guides, snap_anchors,
};
