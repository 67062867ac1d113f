use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder written in place of an unconfigured Steam app id.
pub const APP_ID_PLACEHOLDER: &str = "YOUR_STEAM_APP_ID";

pub const DEFAULT_DESCRIPTION: &str = "VORTEKS Build";
pub const DEFAULT_BUILD_OUTPUT: &str = "../output/";
pub const DEFAULT_CONTENT_ROOT: &str = "../dist/";
pub const DEFAULT_SET_LIVE: &str = "";

/// Steam target platform.
///
/// Depot blocks and depot manifests are always emitted in [`Platform::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    /// Lowercase platform name (`windows`, `mac`, `linux`).
    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }

    /// Placeholder used when no depot id is configured.
    pub fn depot_placeholder(self) -> &'static str {
        match self {
            Platform::Windows => "WINDOWS_DEPOT_ID",
            Platform::Mac => "MAC_DEPOT_ID",
            Platform::Linux => "LINUX_DEPOT_ID",
        }
    }

    /// Default location of the packaged build, relative to the `steam/` directory.
    pub fn default_content_path(self) -> &'static str {
        match self {
            Platform::Windows => "../dist/win-unpacked",
            Platform::Mac => "../dist/mac",
            Platform::Linux => "../dist/linux-unpacked",
        }
    }

    /// File name of this platform's depot manifest.
    ///
    /// Derived from the platform, never from the configured depot id, so the
    /// name stays stable once real ids are filled in.
    pub fn depot_manifest_name(self) -> String {
        format!("depot_build_{}_depot_id.vdf", self.name())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an optional setting, treating blank strings as unset.
pub fn value_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Per-platform depot settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depot_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<String>,
}

/// Steam build configuration, optionally loaded from `steam/steam_build.yaml`
/// through [`crate::config::ConfigManager`]. The `steam-prep` command never reads it.
///
/// Every field is optional and falls back to a placeholder or default at
/// render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamBuildConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_root: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_live: Option<String>,

    #[serde(default)]
    pub windows: DepotConfig,

    #[serde(default)]
    pub mac: DepotConfig,

    #[serde(default)]
    pub linux: DepotConfig,
}

impl SteamBuildConfig {
    pub fn depot(&self, platform: Platform) -> &DepotConfig {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Mac => &self.mac,
            Platform::Linux => &self.linux,
        }
    }

    /// Resolve all fields into a [`ResolvedBuild`] ready for rendering.
    pub fn resolve(&self) -> ResolvedBuild {
        let depots = Platform::ALL
            .iter()
            .map(|&platform| {
                let depot = self.depot(platform);
                ResolvedDepot {
                    platform,
                    depot_id: value_or(&depot.depot_id, platform.depot_placeholder()).to_string(),
                    content_path: value_or(&depot.content_path, platform.default_content_path())
                        .to_string(),
                }
            })
            .collect();

        ResolvedBuild {
            app_id: value_or(&self.app_id, APP_ID_PLACEHOLDER).to_string(),
            description: value_or(&self.description, DEFAULT_DESCRIPTION).to_string(),
            build_output: value_or(&self.build_output, DEFAULT_BUILD_OUTPUT).to_string(),
            content_root: value_or(&self.content_root, DEFAULT_CONTENT_ROOT).to_string(),
            set_live: self
                .set_live
                .as_deref()
                .map(str::trim)
                .unwrap_or(DEFAULT_SET_LIVE)
                .to_string(),
            depots,
        }
    }
}

/// Build configuration with every placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBuild {
    pub app_id: String,
    pub description: String,
    pub build_output: String,
    pub content_root: String,
    /// Branch to set live after upload; empty means none.
    pub set_live: String,
    /// One entry per platform, in [`Platform::ALL`] order.
    pub depots: Vec<ResolvedDepot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDepot {
    pub platform: Platform,
    pub depot_id: String,
    pub content_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_or() {
        assert_eq!(value_or(&None, "X"), "X");
        assert_eq!(value_or(&Some(String::new()), "X"), "X");
        assert_eq!(value_or(&Some("   ".to_string()), "X"), "X");
        assert_eq!(value_or(&Some(" 480 ".to_string()), "X"), "480");
    }

    #[test]
    fn test_default_resolves_to_placeholders() {
        let resolved = SteamBuildConfig::default().resolve();

        assert_eq!(resolved.app_id, "YOUR_STEAM_APP_ID");
        assert_eq!(resolved.set_live, "");
        let ids: Vec<&str> = resolved.depots.iter().map(|d| d.depot_id.as_str()).collect();
        assert_eq!(ids, ["WINDOWS_DEPOT_ID", "MAC_DEPOT_ID", "LINUX_DEPOT_ID"]);
        assert_eq!(resolved.depots[0].content_path, "../dist/win-unpacked");
    }

    #[test]
    fn test_configured_values_win() {
        let mut config = SteamBuildConfig {
            app_id: Some("123450".to_string()),
            ..Default::default()
        };
        config.mac.depot_id = Some("123452".to_string());

        let resolved = config.resolve();
        assert_eq!(resolved.app_id, "123450");
        assert_eq!(resolved.depots[0].depot_id, "WINDOWS_DEPOT_ID");
        assert_eq!(resolved.depots[1].depot_id, "123452");
    }

    #[test]
    fn test_depot_manifest_name() {
        assert_eq!(
            Platform::Windows.depot_manifest_name(),
            "depot_build_windows_depot_id.vdf"
        );
        for platform in Platform::ALL {
            assert_eq!(
                platform.depot_manifest_name(),
                format!(
                    "depot_build_{}.vdf",
                    platform.depot_placeholder().to_lowercase()
                )
            );
        }
    }

    #[test]
    fn test_platform_order() {
        let names: Vec<String> = Platform::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["windows", "mac", "linux"]);
    }
}
