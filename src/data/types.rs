//! Query-shaped metadata types.
//!
//! Every field is optional: the metadata source may leave out or null any
//! branch, and consumers go through the accessors and [`OptionStrExt`]
//! instead of assuming presence. JSON keys follow the query's camelCase
//! (`siteMetadata`, `childImageSharp`, `srcSet`).

use serde::{Deserialize, Serialize};

/// Result of the bio query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BioData {
    /// Avatar file located by path pattern.
    pub avatar: Option<FileNode>,
    pub site: Option<SiteNode>,
}

/// Result of the not-found page query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotFoundData {
    pub site: Option<SiteNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteNode {
    pub site_metadata: Option<SiteMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub social: Option<Social>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub name: Option<String>,
    pub summary: Option<String>,
}

/// Social handles. `website` is a full URL, the others are bare handles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Social {
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileNode {
    pub child_image_sharp: Option<ImageSharp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageSharp {
    pub fixed: Option<FixedImage>,
}

/// A fixed-size renderable image produced by the avatar resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixedImage {
    /// Public URL of the image.
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub src_set: Option<String>,
    /// Inline placeholder shown while the image loads.
    pub base64: Option<String>,
}

impl FileNode {
    pub fn from_fixed(fixed: FixedImage) -> Self {
        Self {
            child_image_sharp: Some(ImageSharp { fixed: Some(fixed) }),
        }
    }
}

impl SiteNode {
    pub fn from_metadata(metadata: SiteMetadata) -> Self {
        Self {
            site_metadata: Some(metadata),
        }
    }
}

impl BioData {
    pub fn site_metadata(&self) -> Option<&SiteMetadata> {
        self.site.as_ref()?.site_metadata.as_ref()
    }

    pub fn author(&self) -> Option<&Author> {
        self.site_metadata()?.author.as_ref()
    }

    pub fn social(&self) -> Option<&Social> {
        self.site_metadata()?.social.as_ref()
    }

    /// `avatar.childImageSharp.fixed`
    pub fn avatar(&self) -> Option<&FixedImage> {
        self.avatar.as_ref()?.child_image_sharp.as_ref()?.fixed.as_ref()
    }
}

impl NotFoundData {
    /// `site.siteMetadata.title`, passed through without validation.
    pub fn title(&self) -> Option<&str> {
        self.site.as_ref()?.site_metadata.as_ref()?.title.as_deref()
    }
}

// ============================================================================
// Default Combinators
// ============================================================================

/// Defaulting access for optional text fields.
pub trait OptionStrExt {
    /// The value, or `""` when absent.
    fn or_empty(&self) -> &str;

    /// The value when present and non-empty.
    fn non_empty(&self) -> Option<&str>;
}

impl OptionStrExt for Option<String> {
    #[inline]
    fn or_empty(&self) -> &str {
        self.as_deref().unwrap_or_default()
    }

    #[inline]
    fn non_empty(&self) -> Option<&str> {
        self.as_deref().filter(|s| !s.is_empty())
    }
}

impl OptionStrExt for Option<&str> {
    #[inline]
    fn or_empty(&self) -> &str {
        self.unwrap_or_default()
    }

    #[inline]
    fn non_empty(&self) -> Option<&str> {
        self.filter(|s| !s.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
