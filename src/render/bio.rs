//! Bio block: avatar, greeting, summary and social links.
//!
//! ```html
//! <div class="bio -bordered">
//!   <img class="bio-avatar" src="..." alt="Mychi" width="50" height="50" style="border-radius: 50%">
//!   <div>
//!     Hi, I'm <strong>Mychi</strong>.<br>
//!     <p style="margin-top: 15px">summary</p><br>
//!     Catch up with me &nbsp;<a href="https://twitter.com/...">Twitter</a>&nbsp;&nbsp;...
//!   </div>
//! </div>
//! ```
//!
//! The avatar and the author block are independent: either may be missing.

use super::{
    PageContext, RenderOptions,
    html::{escape, push_external_link},
    is_root,
};
use crate::data::{BioData, FixedImage, OptionStrExt, Social};

/// Class of the wrapper on every page.
pub const BIO_CLASS: &str = "bio";
/// Class added on the home page.
pub const ROOT_MODIFIER: &str = "-bordered";

const LINK_SEPARATOR: &str = "&nbsp;&nbsp;";

/// Profiles linked by appending a handle to a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Twitter,
    Github,
    Instagram,
}

impl Profile {
    /// Display order in the bio block.
    pub const ALL: [Profile; 3] = [Profile::Twitter, Profile::Github, Profile::Instagram];

    pub const fn base_url(self) -> &'static str {
        match self {
            Profile::Twitter => "https://twitter.com/",
            Profile::Github => "https://github.com/",
            Profile::Instagram => "https://instagram.com/",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Profile::Twitter => "Twitter",
            Profile::Github => "Github",
            Profile::Instagram => "Instagram",
        }
    }

    fn handle(self, social: Option<&Social>) -> &str {
        let Some(social) = social else {
            return "";
        };
        match self {
            Profile::Twitter => social.twitter.or_empty(),
            Profile::Github => social.github.or_empty(),
            Profile::Instagram => social.instagram.or_empty(),
        }
    }

    /// Profile URL; a missing handle links to the bare domain.
    pub fn href(self, social: Option<&Social>) -> String {
        format!("{}{}", self.base_url(), self.handle(social))
    }
}

/// Label of the personal website link.
pub const WEBSITE_LABEL: &str = "My Site";

/// The website field is a full URL and is used as-is, without prefix or fallback.
pub fn website_href(social: Option<&Social>) -> Option<&str> {
    social?.website.as_deref()
}

/// Render the bio block for `page`.
pub fn render(page: &PageContext, data: &BioData, options: &RenderOptions) -> String {
    let author = data.author();
    let name = author.and_then(|a| a.name.non_empty());

    let mut html = String::with_capacity(1024);
    html.push_str("<div class=\"");
    html.push_str(BIO_CLASS);
    if is_root(&page.pathname, options.path_prefix) {
        html.push(' ');
        html.push_str(ROOT_MODIFIER);
    }
    html.push_str("\">");

    if let Some(avatar) = data.avatar() {
        push_avatar(&mut html, avatar, name.or_empty());
    }

    if let Some(name) = name {
        let summary = author.and_then(|a| a.summary.non_empty());
        push_author(&mut html, name, summary, data.social());
    }

    html.push_str("</div>");
    html
}

fn push_avatar(html: &mut String, avatar: &FixedImage, alt: &str) {
    html.push_str("<img class=\"bio-avatar\" src=\"");
    html.push_str(&escape(&avatar.src));
    html.push('"');
    if let Some(src_set) = avatar.src_set.non_empty() {
        html.push_str(" srcset=\"");
        html.push_str(&escape(src_set));
        html.push('"');
    }
    html.push_str(&format!(
        " alt=\"{}\" width=\"{}\" height=\"{}\" style=\"border-radius: 50%",
        escape(alt),
        avatar.width,
        avatar.height
    ));
    // blurred placeholder painted behind the image until it loads
    if let Some(base64) = avatar.base64.non_empty() {
        html.push_str("; background-image: url(&#39;");
        html.push_str(&escape(base64));
        html.push_str("&#39;); background-size: cover");
    }
    html.push_str("\">");
}

fn push_author(html: &mut String, name: &str, summary: Option<&str>, social: Option<&Social>) {
    html.push_str("<div>Hi, I&#39;m <strong>");
    html.push_str(&escape(name));
    html.push_str("</strong>.<br>");

    html.push_str("<p style=\"margin-top: 15px\">");
    html.push_str(&escape(summary.or_empty()));
    html.push_str("</p><br>");

    html.push_str("Catch up with me &nbsp;");
    for profile in Profile::ALL {
        push_external_link(html, Some(&profile.href(social)), profile.label());
        html.push_str(LINK_SEPARATOR);
    }
    push_external_link(html, website_href(social), WEBSITE_LABEL);
    html.push_str("</div>");
}

// ============================================================================
// Tests
// ============================================================================
