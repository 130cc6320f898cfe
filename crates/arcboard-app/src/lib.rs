//! Arcboard Application
//!
//! Headless shell around the core: replays recorded editing sessions,
//! maps keyboard shortcuts and writes the JSON export.

mod config;
mod error;
mod session;
mod shortcuts;

pub use config::{AppConfig, ENV_COMPACT, ENV_EXPORT_DIR};
pub use error::{AppError, AppResult};
pub use session::{PointerInput, Session, SessionAction, parse_script};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry, handle_key};

use arcboard_core::{CanvasDocument, export_file_name, export_json_at};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Outcome of a replayed session.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Where the export was written.
    pub export_path: PathBuf,
    /// Actions that were skipped during replay.
    pub skipped: usize,
    /// Status line, e.g. `2 elements · 1 connections`.
    pub summary: String,
}

/// Write the export artifact for `document` into `config.export_dir`.
pub fn write_export(document: &CanvasDocument, config: &AppConfig, at: DateTime<Utc>) -> AppResult<PathBuf> {
    let json = export_json_at(document, at, config.pretty)?;
    std::fs::create_dir_all(&config.export_dir).map_err(|e| AppError::io(&config.export_dir, e))?;
    let path = config.export_dir.join(export_file_name(at));
    std::fs::write(&path, json).map_err(|e| AppError::io(&path, e))?;
    log::info!("exported {} to {}", document.summary(), path.display());
    Ok(path)
}

/// Replay the session script at `script` and export the resulting document.
pub fn run(script: &Path, config: AppConfig) -> AppResult<RunReport> {
    let json = std::fs::read_to_string(script).map_err(|e| AppError::io(script, e))?;
    let actions = parse_script(&json)?;
    log::info!("loaded {} action(s) from {}", actions.len(), script.display());

    let mut session = Session::new(config);
    let skipped = session.replay(&actions);
    let export_path = write_export(&session.canvas().document, session.config(), Utc::now())?;

    Ok(RunReport {
        export_path,
        skipped,
        summary: session.into_canvas().document.summary(),
    })
}
