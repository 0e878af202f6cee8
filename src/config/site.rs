//! `[site]` section configuration.
//!
//! The author identity and social handles projected into the bio block,
//! plus the title and description used by the page layout.

use super::defaults;
use crate::data::{Author, Social};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml - site metadata.
///
/// # Example
/// ```toml
/// [site]
/// title = "My Guides"
/// description = "Guides and notes"
///
/// [site.author]
/// name = "Mychi"
/// summary = "who writes guides."
///
/// [site.social]
/// twitter = "mychi"
/// github = "mr-phlames"
/// website = "https://mychi.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Site title displayed in the browser tab and the page header.
    pub title: String,

    /// Site description for the description meta tag.
    #[serde(default)]
    pub description: String,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Author shown in the bio block.
    #[serde(default)]
    pub author: AuthorConfig,

    /// Social handles linked from the bio block.
    #[serde(default)]
    pub social: SocialConfig,
}

/// `[site.author]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorConfig {
    pub name: Option<String>,
    pub summary: Option<String>,
}

/// `[site.social]` section
///
/// `twitter`, `github` and `instagram` are bare handles; `website` is a full URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

impl From<&AuthorConfig> for Author {
    fn from(author: &AuthorConfig) -> Self {
        Self {
            name: author.name.clone(),
            summary: author.summary.clone(),
        }
    }
}

impl From<&SocialConfig> for Social {
    fn from(social: &SocialConfig) -> Self {
        Self {
            twitter: social.twitter.clone(),
            instagram: social.instagram.clone(),
            github: social.github.clone(),
            website: social.website.clone(),
        }
    }
}
