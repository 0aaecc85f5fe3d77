//! Headless replay of floor plan gestures through the guide engine.
//!
//! ## Script format
//!
//! ```json
//! {
//!   "config": { "threshold": 5 },
//!   "stage": { "width": 800, "height": 600 },
//!   "shapes": [
//!     { "type": "wall", "start": [100, 100], "end": [300, 100] },
//!     { "type": "block", "x": 400, "y": 200, "width": 60, "height": 40 }
//!   ],
//!   "gestures": [
//!     { "type": "drag", "shape": 1, "grab": [410, 210], "moves": [[420, 215], [453, 212]] },
//!     { "type": "draw", "start": [100, 300], "moves": [[150, 300]], "end": [200, 310] },
//!     { "type": "rotate", "shape": 2, "axis": "H" },
//!     { "type": "delete", "shape": 0 }
//!   ]
//! }
//! ```
//!
//! Shape indices count the `shapes` list first, then every wall a `draw`
//! gesture adds, in order. A deleted shape keeps its index.

use floorsnap_core::{
    Axis, Block, DragGesture, Guide, GuideLayer, LineDraft, Scene, SceneError, Shape, ShapeId,
    ShapeQuery, SnapConfig, SnapEngine, SnapError, Wall,
};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] SnapError),
    #[error("Scene edit failed: {0}")]
    Scene(#[from] SceneError),
    #[error("Gesture {gesture} refers to missing shape #{shape}")]
    UnknownShape { gesture: usize, shape: usize },
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

/// Stage dimensions in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StageSpec {
    pub width: f64,
    pub height: f64,
}

/// A shape to place on the stage before replaying.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeSpec {
    Wall {
        start: [f64; 2],
        end: [f64; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_width: Option<f64>,
    },
    Block {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
    },
}

impl ShapeSpec {
    fn build(&self) -> Shape {
        match self {
            ShapeSpec::Wall { start, end, tag, stroke_width } => {
                let mut wall = Wall::new(to_point(*start), to_point(*end));
                if let Some(tag) = tag {
                    wall = wall.with_tag(tag.clone());
                }
                if let Some(width) = stroke_width {
                    wall.style.stroke_width = *width;
                }
                Shape::from(wall)
            }
            ShapeSpec::Block { x, y, width, height, tag } => {
                let mut block = Block::new(Point::new(*x, *y), *width, *height);
                if let Some(tag) = tag {
                    block = block.with_tag(tag.clone());
                }
                Shape::from(block)
            }
        }
    }
}

/// One scripted user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureSpec {
    /// Drag a shape: where the pointer went down, and every move sample.
    Drag {
        shape: usize,
        grab: [f64; 2],
        #[serde(default)]
        moves: Vec<[f64; 2]>,
    },
    /// Draw a new wall from `start` to `end`.
    Draw {
        start: [f64; 2],
        #[serde(default)]
        moves: Vec<[f64; 2]>,
        end: [f64; 2],
    },
    /// Straighten a wall along an axis ("V" or "H").
    Rotate { shape: usize, axis: Axis },
    /// Remove a shape from the plan.
    Delete { shape: usize },
}

/// A complete replay script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub config: SnapConfig,
    /// Stage size. Without one nothing can snap.
    #[serde(default)]
    pub stage: Option<StageSpec>,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
    #[serde(default)]
    pub gestures: Vec<GestureSpec>,
}

impl ReplayScript {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> ReplayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a file.
    pub fn load(path: &Path) -> ReplayResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Outcome of a single move sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub pointer: [f64; 2],
    pub guides: Vec<Guide>,
    pub position: Option<[f64; 2]>,
}

/// Outcome of one drag.
#[derive(Debug, Clone, Serialize)]
pub struct DragReport {
    pub shape: ShapeId,
    pub samples: Vec<SampleReport>,
    pub final_position: Option<[f64; 2]>,
    /// Guide lines left on the stage after the gesture ended.
    pub guide_lines_after_end: usize,
}

/// Outcome of one gesture.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureReport {
    Drag(DragReport),
    /// `shape` and `index` are `None` when the line was too short to keep.
    Draw {
        shape: Option<ShapeId>,
        index: Option<usize>,
    },
    Rotate {
        shape: ShapeId,
        start: [f64; 2],
        end: [f64; 2],
    },
    Delete { shape: ShapeId },
}

impl GestureReport {
    pub fn as_drag(&self) -> Option<&DragReport> {
        match self {
            GestureReport::Drag(report) => Some(report),
            _ => None,
        }
    }
}

/// Outcome of a whole script.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub gestures: Vec<GestureReport>,
}

fn to_point(p: [f64; 2]) -> Point {
    Point::new(p[0], p[1])
}

fn from_point(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

/// Map a script index to a shape that is still in the scene.
fn resolve(scene: &Scene, ids: &[ShapeId], gesture: usize, shape: usize) -> ReplayResult<ShapeId> {
    ids.get(shape)
        .copied()
        .filter(|&id| scene.get_shape(id).is_some())
        .ok_or(ReplayError::UnknownShape { gesture, shape })
}

fn replay_drag(
    scene: &mut Scene,
    engine: &SnapEngine,
    id: ShapeId,
    grab: [f64; 2],
    moves: &[[f64; 2]],
) -> DragReport {
    let Some(mut drag) = DragGesture::begin(&*scene, id, to_point(grab)) else {
        return DragReport {
            shape: id,
            samples: Vec::new(),
            final_position: None,
            guide_lines_after_end: scene.guide_count(),
        };
    };

    let samples = moves
        .iter()
        .map(|&pointer| {
            let guides = drag.on_move(scene, engine, to_point(pointer));
            SampleReport {
                pointer,
                guides: guides.iter().copied().collect(),
                position: scene.absolute_position_of(id).map(from_point),
            }
        })
        .collect();

    let final_position = drag.end(scene).map(from_point);
    DragReport {
        shape: id,
        samples,
        final_position,
        guide_lines_after_end: scene.guide_count(),
    }
}

/// Build the scene and run every gesture in order.
pub fn run(script: &ReplayScript) -> ReplayResult<ReplayReport> {
    let engine = SnapEngine::new(script.config.clone())?;

    let mut scene = match script.stage {
        Some(stage) => Scene::new(Size::new(stage.width, stage.height)),
        None => Scene::detached(),
    };
    let mut ids: Vec<ShapeId> = script
        .shapes
        .iter()
        .map(|spec| scene.add_shape(spec.build()))
        .collect();
    log::info!("Replaying {} gestures over {} shapes", script.gestures.len(), ids.len());

    let mut gestures = Vec::with_capacity(script.gestures.len());
    for (index, gesture) in script.gestures.iter().enumerate() {
        let report = match gesture {
            GestureSpec::Drag { shape, grab, moves } => {
                let id = resolve(&scene, &ids, index, *shape)?;
                GestureReport::Drag(replay_drag(&mut scene, &engine, id, *grab, moves))
            }
            GestureSpec::Draw { start, moves, end } => {
                let mut draft = LineDraft::begin(to_point(*start));
                for &point in moves {
                    draft.update(to_point(point));
                }
                match draft.finish(to_point(*end)) {
                    Ok(wall) => {
                        let id = scene.add_shape(Shape::from(wall));
                        ids.push(id);
                        GestureReport::Draw {
                            shape: Some(id),
                            index: Some(ids.len() - 1),
                        }
                    }
                    Err(SceneError::LineTooShort { length, .. }) => {
                        log::info!("Gesture {} drew a {:.1} px line, discarded", index, length);
                        GestureReport::Draw {
                            shape: None,
                            index: None,
                        }
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            GestureSpec::Rotate { shape, axis } => {
                let id = resolve(&scene, &ids, index, *shape)?;
                scene.rotate_wall(id, *axis)?;
                let [start, end] = scene
                    .get_shape(id)
                    .and_then(Shape::as_wall)
                    .map(Wall::absolute_points)
                    .ok_or(SceneError::NotAWall(id))?;
                GestureReport::Rotate {
                    shape: id,
                    start: from_point(start),
                    end: from_point(end),
                }
            }
            GestureSpec::Delete { shape } => {
                let id = resolve(&scene, &ids, index, *shape)?;
                scene.remove_shape(id);
                GestureReport::Delete { shape: id }
            }
        };
        gestures.push(report);
    }

    Ok(ReplayReport { gestures })
}

/// Load and run a script file.
pub fn run_file(path: &Path) -> ReplayResult<ReplayReport> {
    let script = ReplayScript::load(path)?;
    run(&script)
}
