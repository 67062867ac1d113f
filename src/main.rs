//! steam-prep - Steam build configuration generator for VORTEKS
//!
//! Run from the project root. Takes no arguments and reads no configuration:
//! every app and depot id is written as a placeholder.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/steam-prep.<date> plus console
//! 2. Generate steam/app_build_vorteks.vdf, one depot manifest per platform,
//!    and steam/assets/README.md (plus header_image.png when assets/icon.png exists)
//! 3. Print the manual follow-up checklist
//!
//! Any I/O failure aborts generation; files already written stay on disk and
//! the process exits non-zero.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use vorteks::services::NEXT_STEPS;
use vorteks::{APP_NAME, SteamPrep, VERSION, data};

fn main() -> Result<()> {
    let _guard = vorteks::logging::setup_logging_with_console("logs", "steam-prep", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    if let Ok(motto) = data::pick_motto(&mut rand::thread_rng()) {
        tracing::info!("{}", motto);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run());

    match &result {
        Ok(()) => tracing::info!("steam-prep finished"),
        Err(e) => tracing::error!("Steam preparation failed: {:#}", e),
    }

    result
}

async fn run() -> Result<()> {
    let project_root = Utf8PathBuf::try_from(std::env::current_dir()?)
        .context("Project root is not valid UTF-8")?;

    let report = SteamPrep::with_placeholders(&project_root).run().await?;

    println!();
    println!("Steam build configuration created in steam/");
    for path in &report.written {
        let shown = path.strip_prefix(&project_root).unwrap_or(path.as_path());
        println!("  {}", shown);
    }
    if !report.header_image_copied {
        println!("  (no assets/icon.png found, header image not created)");
    }

    println!();
    println!("Next steps:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    Ok(())
}
