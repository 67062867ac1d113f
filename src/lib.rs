// VORTEKS - content tables and Steam packaging tool
//
// This is the library crate containing the static game data and the Steam
// manifest generator. The binary crate (main.rs) provides the steam-prep entry point.

pub mod config;
pub mod data;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{Platform, SteamBuildConfig};
pub use services::{GenerationReport, SteamPrep};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
