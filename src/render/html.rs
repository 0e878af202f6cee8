//! Markup helpers shared by the renderers.

use std::borrow::Cow;

/// Escape text or attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Append an outbound link opening in a new tab.
///
/// A `None` href renders the anchor without an `href` attribute.
pub fn push_external_link(html: &mut String, href: Option<&str>, label: &str) {
    html.push_str("<a");
    if let Some(href) = href {
        html.push_str(" href=\"");
        html.push_str(&escape(href));
        html.push('"');
    }
    html.push_str(" target=\"_blank\" rel=\"noreferrer\">");
    html.push_str(&escape(label));
    html.push_str("</a>");
}
