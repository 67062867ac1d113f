use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::models::{ResolvedBuild, ResolvedDepot, SteamBuildConfig};
use crate::services::vdf::Block;

/// Output directory, relative to the project root.
pub const STEAM_DIR: &str = "steam";

/// Root application manifest file name.
pub const APP_MANIFEST_NAME: &str = "app_build_vorteks.vdf";

/// Icon copied into the store assets when present, relative to the project root.
pub const ICON_SOURCE: &str = "assets/icon.png";

pub const HEADER_IMAGE_NAME: &str = "header_image.png";
pub const ASSETS_README_NAME: &str = "README.md";

/// Files excluded from every depot upload.
const FILE_EXCLUSION: &str = "*.pdb";

/// Manual follow-up steps printed once generation finishes.
pub const NEXT_STEPS: &[&str] = &[
    "Create your app on the Steamworks partner site and note the App ID",
    "Create one depot per platform (Windows, macOS, Linux) and note the depot IDs",
    "Replace YOUR_STEAM_APP_ID and the *_DEPOT_ID placeholders in the generated .vdf files",
    "Build the game for every platform so the dist/ folders exist",
    "Prepare the store assets listed in steam/assets/README.md",
    "Upload with: steamcmd +login <account> +run_app_build ../steam/app_build_vorteks.vdf +quit",
];

const ASSETS_README: &str = "\
# VORTEKS Steam Store Assets

Place the following images in this directory before submitting the store page.

## Required store assets

| Asset | Dimensions |
|---|---|
| Header capsule | 460 x 215 |
| Small capsule | 231 x 87 |
| Main capsule | 616 x 353 |
| Vertical capsule | 374 x 448 |
| Page background | 1438 x 810 |

## Library assets

| Asset | Dimensions |
|---|---|
| Library capsule | 600 x 900 |
| Library header | 460 x 215 |
| Library hero | 3840 x 1240 |
| Library logo | 1280 x 720 (transparent PNG) |

## Screenshots

At least 5 screenshots, 1920 x 1080 (16:9).

## Icons

| Asset | Dimensions |
|---|---|
| Client icon | 32 x 32 (.ico) |
| Community icon | 184 x 184 (.jpg) |

## Next steps

1. Replace `header_image.png` (copied from the game icon, if present) with a real 460 x 215 header capsule.
2. Upload all assets through the Steamworks partner site.
3. Fill in the app and depot IDs in the build manifests.
4. Run a test build with steamcmd before setting a branch live.
";

/// I/O failures during generation. Each carries the path being touched.
#[derive(Error, Debug)]
pub enum SteamPrepError {
    #[error("Failed to create directory {path}")]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}")]
    CopyAsset {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Every file written, in write order.
    pub written: Vec<Utf8PathBuf>,
    /// Whether `assets/icon.png` was found and copied as the header image.
    pub header_image_copied: bool,
}

/// Generates Steam build manifests and store asset notes under `<root>/steam`.
///
/// Steps run strictly in order and abort on the first I/O error. Files written
/// before the failure are left in place.
#[derive(Debug, Clone)]
pub struct SteamPrep {
    project_root: Utf8PathBuf,
    config: SteamBuildConfig,
}

impl SteamPrep {
    pub fn new<P: AsRef<Utf8Path>>(project_root: P, config: SteamBuildConfig) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Generator for the built-in configuration, with every id left as a placeholder.
    ///
    /// Nothing on disk is consulted; this is what the `steam-prep` command runs.
    pub fn with_placeholders<P: AsRef<Utf8Path>>(project_root: P) -> Self {
        Self::new(project_root, SteamBuildConfig::default())
    }

    pub fn steam_dir(&self) -> Utf8PathBuf {
        self.project_root.join(STEAM_DIR)
    }

    pub fn assets_dir(&self) -> Utf8PathBuf {
        self.steam_dir().join("assets")
    }

    /// Run every generation step.
    pub async fn run(&self) -> Result<GenerationReport> {
        let mut written = Vec::new();

        let steam_dir = self.steam_dir();
        create_dir(&steam_dir).await?;

        let build = self.config.resolve();
        tracing::info!(
            "Generating Steam manifests for app {} in {}",
            build.app_id,
            steam_dir
        );

        let app_manifest = steam_dir.join(APP_MANIFEST_NAME);
        write_file(&app_manifest, &app_build_block(&build).to_vdf()).await?;
        written.push(app_manifest);

        for depot in &build.depots {
            let path = steam_dir.join(depot.platform.depot_manifest_name());
            write_file(&path, &depot_build_block(depot).to_vdf()).await?;
            written.push(path);
        }

        let (asset_files, header_image_copied) = self.prepare_assets().await?;
        written.extend(asset_files);

        tracing::info!("Steam build configuration generated ({} files)", written.len());

        Ok(GenerationReport {
            written,
            header_image_copied,
        })
    }

    async fn prepare_assets(&self) -> Result<(Vec<Utf8PathBuf>, bool)> {
        let assets_dir = self.assets_dir();
        create_dir(&assets_dir).await?;

        let mut written = Vec::new();
        let icon_source = self.project_root.join(ICON_SOURCE);
        let header_image = assets_dir.join(HEADER_IMAGE_NAME);

        let icon_is_file = fs::metadata(&icon_source)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);

        let copied = if icon_is_file {
            fs::copy(&icon_source, &header_image)
                .await
                .map_err(|source| SteamPrepError::CopyAsset {
                    from: icon_source.clone(),
                    to: header_image.clone(),
                    source,
                })?;
            tracing::info!("Copied {} to {}", icon_source, header_image);
            written.push(header_image);
            true
        } else {
            tracing::debug!("No icon file at {}, skipping header image", icon_source);
            false
        };

        let readme = assets_dir.join(ASSETS_README_NAME);
        write_file(&readme, ASSETS_README).await?;
        written.push(readme);

        Ok((written, copied))
    }
}

/// Root `AppBuild` manifest with one inline depot block per platform.
pub fn app_build_block(build: &ResolvedBuild) -> Block {
    let mut depots = Block::new("Depots");
    for depot in &build.depots {
        depots.push_block(
            Block::new(depot.depot_id.as_str())
                .block(file_mapping(&format!("{}/*", depot.content_path)))
                .field("FileExclusion", FILE_EXCLUSION),
        );
    }

    Block::new("AppBuild")
        .field("AppID", build.app_id.as_str())
        .field("Desc", build.description.as_str())
        .field("BuildOutput", build.build_output.as_str())
        .field("ContentRoot", build.content_root.as_str())
        .field("SetLive", build.set_live.as_str())
        .field("Preview", "0")
        .block(depots)
}

/// Standalone `DepotBuild` manifest for one platform.
pub fn depot_build_block(depot: &ResolvedDepot) -> Block {
    Block::new("DepotBuild")
        .field("DepotID", depot.depot_id.as_str())
        .field("ContentRoot", depot.content_path.as_str())
        .block(file_mapping("*"))
        .field("FileExclusion", FILE_EXCLUSION)
}

fn file_mapping(local_path: &str) -> Block {
    Block::new("FileMapping")
        .field("LocalPath", local_path)
        .field("DepotPath", ".")
        .field("recursive", "1")
}

async fn create_dir(path: &Utf8Path) -> Result<(), SteamPrepError> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| SteamPrepError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_file(path: &Utf8Path, contents: &str) -> Result<(), SteamPrepError> {
    fs::write(path, contents)
        .await
        .map_err(|source| SteamPrepError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!("Wrote {}", path);
    Ok(())
}
