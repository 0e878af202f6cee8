//! Site metadata resolution.
//!
//! Pages never read configuration directly. Each page asks a
//! [`MetadataProvider`] for the bundle it renders from, once per render,
//! before any markup is produced.
//!
//! # Providers
//!
//! | Provider         | Source                                              |
//! |------------------|-----------------------------------------------------|
//! | `ConfigProvider` | `[site]` in folio.toml + avatar from the assets dir |
//! | `JsonProvider`   | query-shaped JSON bundle (`[build].data`)           |
//!
//! # Bundle format
//!
//! ```json
//! {
//!   "bio": {
//!     "avatar": { "childImageSharp": { "fixed": { "src": "/me.jpg", "width": 50, "height": 50 } } },
//!     "site": { "siteMetadata": { "author": { "name": "Mychi" }, "social": null } }
//!   },
//!   "notFound": { "site": { "siteMetadata": { "title": "My Guides" } } }
//! }
//! ```

mod types;

pub use types::{
    Author, BioData, FileNode, FixedImage, NotFoundData, OptionStrExt, SiteMetadata, SiteNode,
    Social,
};

use crate::{config::SiteConfig, image::AvatarResolver};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Shape of the bio query.
pub const BIO_QUERY: &str = r#"query BioQuery {
  avatar: file(absolutePath: { regex: $avatar }) {
    childImageSharp { fixed(width: 50, height: 50, quality: 95) { src srcSet width height base64 } }
  }
  site { siteMetadata { author { name summary } social { twitter instagram github website } } }
}"#;

/// Shape of the not-found page query.
pub const NOT_FOUND_QUERY: &str = r#"query NotFoundQuery {
  site { siteMetadata { title } }
}"#;

/// Metadata resolution errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Metadata bundle `{0}` is malformed")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Invalid avatar pattern `{0}`")]
    Pattern(String, #[source] regex::Error),
}

/// Resolves page queries into typed metadata bundles.
///
/// Implementations must be idempotent: identical calls yield identical data.
pub trait MetadataProvider {
    /// Resolve [`BIO_QUERY`].
    fn bio(&self) -> Result<BioData, DataError>;

    /// Resolve [`NOT_FOUND_QUERY`].
    fn not_found(&self) -> Result<NotFoundData, DataError>;
}

/// Pick the provider for this build: the JSON bundle when `[build].data` is
/// set, the site config otherwise.
///
/// With `materialize == false` the avatar is never copied to the output.
pub fn provider(
    config: &SiteConfig,
    materialize: bool,
) -> Result<Box<dyn MetadataProvider + '_>, DataError> {
    if let Some(path) = &config.build.data {
        return Ok(Box::new(JsonProvider::new(path)));
    }

    let resolver = AvatarResolver::from_config(config)?;
    let resolver = if materialize {
        resolver
    } else {
        resolver.dry_run()
    };
    Ok(Box::new(ConfigProvider::new(config, resolver)))
}

// ============================================================================
// Config Provider
// ============================================================================

/// Serves metadata from `[site]` and the avatar from the assets directory.
pub struct ConfigProvider<'a> {
    config: &'a SiteConfig,
    avatar: AvatarResolver,
}

impl<'a> ConfigProvider<'a> {
    pub fn new(config: &'a SiteConfig, avatar: AvatarResolver) -> Self {
        Self { config, avatar }
    }
}

impl MetadataProvider for ConfigProvider<'_> {
    fn bio(&self) -> Result<BioData, DataError> {
        let fixed = self.avatar.resolve()?;
        let site = &self.config.site;
        Ok(BioData {
            avatar: fixed.map(FileNode::from_fixed),
            site: Some(SiteNode::from_metadata(SiteMetadata {
                author: Some(Author::from(&site.author)),
                social: Some(Social::from(&site.social)),
                ..Default::default()
            })),
        })
    }

    fn not_found(&self) -> Result<NotFoundData, DataError> {
        Ok(NotFoundData {
            site: Some(SiteNode::from_metadata(SiteMetadata {
                title: Some(self.config.site.title.clone()),
                ..Default::default()
            })),
        })
    }
}

// ============================================================================
// JSON Provider
// ============================================================================

/// Serves metadata from a query-shaped JSON file, re-read on every query.
pub struct JsonProvider {
    path: PathBuf,
}

/// Top-level layout of the JSON bundle, one entry per query.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Bundle {
    bio: BioData,
    not_found: NotFoundData,
}

impl JsonProvider {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn load(&self) -> Result<Bundle, DataError> {
        let content =
            fs::read_to_string(&self.path).map_err(|err| DataError::Io(self.path.clone(), err))?;
        serde_json::from_str(&content).map_err(|err| DataError::Json(self.path.clone(), err))
    }
}

impl MetadataProvider for JsonProvider {
    fn bio(&self) -> Result<BioData, DataError> {
        Ok(self.load()?.bio)
    }

    fn not_found(&self) -> Result<NotFoundData, DataError> {
        Ok(self.load()?.not_found)
    }
}

// ============================================================================
// Tests
// ============================================================================
