//! Data models for the Steam packaging tool.
//!
//! - [`SteamBuildConfig`]: user-facing configuration, every field optional
//! - [`ResolvedBuild`]: the same configuration with placeholders substituted
//! - [`Platform`]: the three depot targets, in fixed emission order
//!
//! # Architecture Note
//!
//! Configuration structs derive `Serialize`/`Deserialize` for YAML persistence
//! (see [`crate::config::ConfigManager`]). Resolution to concrete strings happens
//! once, right before rendering, through [`value_or`].

pub mod steam_config;

pub use steam_config::{
    APP_ID_PLACEHOLDER, DepotConfig, Platform, ResolvedBuild, ResolvedDepot, SteamBuildConfig,
    value_or,
};
