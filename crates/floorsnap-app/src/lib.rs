//! FloorSnap replay tool
//!
//! Loads a floor plan and a list of gestures (drag, draw, rotate, delete)
//! from JSON, replays them through the alignment guide engine and reports
//! the guides chosen.

mod replay;

pub use replay::{
    DragReport, GestureReport, GestureSpec, ReplayError, ReplayReport, ReplayResult, ReplayScript,
    SampleReport, ShapeSpec, StageSpec, run, run_file,
};
