//! Replay entry point.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting FloorSnap replay");

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: floorsnap <script.json>");
        return ExitCode::from(2);
    };

    let report = match floorsnap_app::run_file(&path) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Replay of {:?} failed: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}
