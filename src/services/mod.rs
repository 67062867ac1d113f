//! Services module - build-time packaging logic.
//!
//! # Components
//!
//! - [`SteamPrep`]: the Steam manifest generator. It runs a fixed sequence of steps:
//!   1. Create `steam/`
//!   2. Resolve the [`SteamBuildConfig`](crate::models::SteamBuildConfig) placeholders
//!   3. Write the root `AppBuild` manifest (`steam/app_build_vorteks.vdf`)
//!   4. Write one `DepotBuild` manifest per platform
//!   5. Copy the header image (if `assets/icon.png` exists) and write `steam/assets/README.md`
//!
//! - [`vdf`]: the block tree ([`Block`], [`Entry`]) and serializer for Valve's
//!   KeyValues text format.
//!
//! # Usage Example
//!
//! ```ignore
//! use vorteks::services::SteamPrep;
//! use vorteks::models::SteamBuildConfig;
//!
//! let report = SteamPrep::new(".", SteamBuildConfig::default()).run().await?;
//! println!("wrote {} files", report.written.len());
//! ```
//!
//! Every step overwrites its output unconditionally, so re-running on an
//! unchanged configuration reproduces byte-identical files.

pub mod steam_prep;
pub mod vdf;

pub use steam_prep::{GenerationReport, NEXT_STEPS, SteamPrep, SteamPrepError};
pub use vdf::{Block, Entry};
