//! `[build]` section configuration.
//!
//! Contains build settings: paths, deployment prefix, avatar lookup and minification.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"        # Output directory
/// assets = "assets"        # Searched for the avatar image
/// avatar = "mychi\\.jpg$"  # Regex matched against absolute asset paths
/// path_prefix = "/guides"  # Deploy under a sub-path
/// minify = true            # Minify HTML
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// URL path prefix for subdirectory deployment (e.g., "/guides" → `/guides/...`).
    ///
    /// Either empty or starting with `/` and without a trailing `/`.
    #[serde(default = "defaults::build::path_prefix")]
    #[educe(Default = defaults::build::path_prefix())]
    pub path_prefix: String,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory searched for the avatar image.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Avatar file pattern, matched against each asset's absolute path.
    #[serde(default = "defaults::build::avatar")]
    #[educe(Default = defaults::build::avatar())]
    pub avatar: String,

    /// Query-shaped JSON metadata bundle. When set, it replaces `[site]`
    /// as the metadata source.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: Option<PathBuf>,

    /// Minify HTML output (removes whitespace).
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,
}

// ============================================================================
// Tests
// ============================================================================
