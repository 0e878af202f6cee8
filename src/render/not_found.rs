//! The 404 page.
//!
//! Static apart from the site title, which is handed to the layout untouched.

use super::{Page, PageContext, html::push_external_link, layout::Seo};
use crate::data::NotFoundData;

pub const HEADING: &str = "404: Not Found";

/// Where readers report broken links.
pub const ISSUE_TRACKER_URL: &str = "https://github.com/mr-phlames/mychi-guides";

const MESSAGE: &str =
    "Whoops...no article found here. There might have been a mistake with your url.&nbsp;";
const LINK_LABEL: &str = "Open an issue";
const MESSAGE_TAIL: &str = "&nbsp;if you believe this is an error.";

/// Render the not-found page body for `page`.
pub fn render(page: &PageContext, data: &NotFoundData) -> Page {
    let mut body = String::with_capacity(256);
    body.push_str("<h1>");
    body.push_str(HEADING);
    body.push_str("</h1><p>");
    body.push_str(MESSAGE);
    push_external_link(&mut body, Some(ISSUE_TRACKER_URL), LINK_LABEL);
    body.push_str(MESSAGE_TAIL);
    body.push_str("</p>");

    Page {
        location: page.clone(),
        title: data.title().map(str::to_owned),
        seo: Seo::new(HEADING),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SiteMetadata, SiteNode};

    fn data(title: Option<&str>) -> NotFoundData {
        NotFoundData {
            site: Some(SiteNode::from_metadata(SiteMetadata {
                title: title.map(Into::into),
                ..Default::default()
            })),
        }
    }

    #[test]
    fn test_not_found_page() {
        let page = render(&PageContext::new("/404"), &data(Some("My Guides")));

        assert!(page.body.starts_with("<h1>404: Not Found</h1>"));
        assert!(page.body.contains(
            "<p>Whoops...no article found here. There might have been a mistake with your url.&nbsp;"
        ));
        assert!(page.body.contains("&nbsp;if you believe this is an error.</p>"));
        assert_eq!(page.body.matches("<a ").count(), 1);
        assert!(page.body.contains(
            r#"<a href="https://github.com/mr-phlames/mychi-guides" target="_blank" rel="noreferrer">Open an issue</a>"#
        ));
        assert_eq!(page.title.as_deref(), Some("My Guides"));
        assert_eq!(page.seo.title, "404: Not Found");
        assert_eq!(page.location.pathname, "/404");
    }

    #[test]
    fn test_missing_title_passes_through() {
        let page = render(&PageContext::new("/404"), &data(None));
        assert_eq!(page.title, None);

        let page = render(&PageContext::new("/404"), &NotFoundData::default());
        assert_eq!(page.title, None);
        assert!(page.body.starts_with("<h1>404: Not Found</h1>"));
    }

    #[test]
    fn test_body_independent_of_location_and_title() {
        let a = render(&PageContext::new("/404"), &data(Some("A")));
        let b = render(&PageContext::new("/missing/page"), &data(None));
        assert_eq!(a.body, b.body);
    }

    #[test]
    fn test_render_is_idempotent() {
        let page = PageContext::new("/404");
        let data = data(Some("My Guides"));
        assert_eq!(render(&page, &data), render(&page, &data));
    }
}
