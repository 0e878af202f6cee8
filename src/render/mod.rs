//! Page renderers.
//!
//! Renderers are pure functions of (page context, metadata bundle): no I/O,
//! no clocks, no counters. Missing metadata is defaulted, never an error.
//!
//! ```text
//! MetadataProvider ──► bio::render / not_found::render ──► layout::render ──► HTML
//! ```

pub mod bio;
mod html;
pub mod layout;
pub mod not_found;

use serde::{Deserialize, Serialize};

/// The `location` a page is rendered at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub pathname: String,
}

impl PageContext {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

/// Build-time constants the renderers need but cannot derive.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// URL prefix the site is deployed under, `""` for the domain root.
    pub path_prefix: &'a str,
}

/// A rendered page body, before it is wrapped by the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub location: PageContext,
    /// Site title handed to the layout, unvalidated.
    pub title: Option<String>,
    pub seo: layout::Seo,
    pub body: String,
}

/// Whether `pathname` is the home route, i.e. exactly `{path_prefix}/`.
#[inline]
pub fn is_root(pathname: &str, path_prefix: &str) -> bool {
    pathname.strip_prefix(path_prefix) == Some("/")
}
