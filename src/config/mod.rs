//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `[site]`    | Site metadata (title, author, social handles)     |
//! | `[build]`   | Paths, path prefix, avatar pattern, minification  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Guides"
//!
//! [site.author]
//! name = "Mychi"
//!
//! [site.social]
//! github = "mr-phlames"
//!
//! [build]
//! output = "public"
//! minify = true
//! ```

mod build;
pub mod defaults;
mod error;
mod site;

use build::BuildConfig;
use error::ConfigError;
use site::SiteSection;

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// URL of the home page, `{path_prefix}/`.
    pub fn root_path(&self) -> String {
        format!("{}/", self.build.path_prefix)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        // Determine the final root path based on command
        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.path_prefix, args.path_prefix.as_ref());
            if let Some(data) = &args.data {
                self.build.data = Some(data.clone());
            }
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        if let Some(data) = &self.build.data {
            self.build.data = Some(Self::normalize_path(&root.join(data)));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        Self::check_path_prefix(&self.build.path_prefix)?;

        if let Err(err) = Regex::new(&self.build.avatar) {
            bail!(ConfigError::Validation(format!(
                "[build.avatar] is not a valid pattern: {err}"
            )));
        }

        match &self.build.data {
            Some(path) if !path.exists() => {
                bail!(ConfigError::Validation("[build.data] not found".into()))
            }
            Some(path) if !path.is_file() => {
                bail!(ConfigError::Validation("[build.data] is not a file".into()))
            }
            _ => {}
        }

        if self.build.data.is_none() && self.site.title.is_empty() {
            log!("warn"; "[site.title] is empty");
        }

        Ok(())
    }

    /// A path prefix is either empty or `/segment[/segment...]` without a trailing slash.
    fn check_path_prefix(prefix: &str) -> Result<()> {
        if prefix.is_empty() {
            return Ok(());
        }
        if !prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[build.path_prefix] must start with `/`".into()
            ));
        }
        if prefix.ends_with('/') {
            bail!(ConfigError::Validation(
                "[build.path_prefix] must not end with `/`".into()
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
