//! Main application entry point.

use arcboard_app::{AppConfig, AppError, ShortcutRegistry};
use std::path::PathBuf;

const USAGE: &str = "usage: arcboard <session.json> | arcboard --shortcuts";

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), AppError> {
    let arg = std::env::args()
        .nth(1)
        .ok_or_else(|| AppError::Usage(USAGE.to_string()))?;

    if arg == "--shortcuts" {
        ShortcutRegistry::print_all();
        return Ok(());
    }

    log::info!("Starting Arcboard");
    let report = arcboard_app::run(&PathBuf::from(arg), AppConfig::from_env())?;
    if report.skipped > 0 {
        log::warn!("{} action(s) skipped", report.skipped);
    }
    println!("{}", report.summary);
    println!("{}", report.export_path.display());
    Ok(())
}
