//! Page chrome: document head, site header and footer.
//!
//! The header mirrors the bio block's root detection: on the home page the
//! site title is the main heading, elsewhere it is a small link home.

use super::{PageContext, html::escape, is_root};

/// Document-level title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seo {
    /// Page title, shown before the site title in `<title>`.
    pub title: String,
    /// Overrides the site description when set.
    pub description: Option<String>,
}

impl Seo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }
}

/// Everything the layout needs besides the page body.
#[derive(Debug, Clone, Copy)]
pub struct LayoutProps<'a> {
    pub location: &'a PageContext,
    /// `None` leaves the header link text empty.
    pub title: Option<&'a str>,
    pub seo: &'a Seo,
    pub site_description: Option<&'a str>,
    pub path_prefix: &'a str,
    pub language: &'a str,
}

/// Wrap `body` into a complete HTML document.
pub fn render(props: &LayoutProps, body: &str) -> String {
    let root_path = format!("{}/", props.path_prefix);
    let on_root = is_root(&props.location.pathname, props.path_prefix);
    let site_title = props.title.unwrap_or_default();

    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", escape(props.language)));
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&document_title(props))));

    let description = props
        .seo
        .description
        .as_deref()
        .or(props.site_description)
        .filter(|d| !d.is_empty());
    if let Some(description) = description {
        let description = escape(description);
        html.push_str(&format!("<meta name=\"description\" content=\"{description}\">\n"));
        html.push_str(&format!("<meta property=\"og:description\" content=\"{description}\">\n"));
    }
    html.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape(&props.seo.title)
    ));
    html.push_str("<meta property=\"og:type\" content=\"website\">\n");
    html.push_str("</head>\n");

    html.push_str("<body>\n");
    html.push_str(&format!(
        "<div class=\"global-wrapper\" data-is-root-path=\"{on_root}\">\n"
    ));
    html.push_str("<header class=\"global-header\">");
    if on_root {
        html.push_str(&format!(
            "<h1 class=\"main-heading\"><a href=\"{}\">{}</a></h1>",
            escape(&root_path),
            escape(site_title)
        ));
    } else {
        html.push_str(&format!(
            "<a class=\"header-link-home\" href=\"{}\">{}</a>",
            escape(&root_path),
            escape(site_title)
        ));
    }
    html.push_str("</header>\n");

    html.push_str("<main>");
    html.push_str(body);
    html.push_str("</main>\n");
    html.push_str("<footer>Built with folio</footer>\n");
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// `{seo title} | {site title}`, or just the SEO title without a site title.
fn document_title(props: &LayoutProps) -> String {
    match props.title.filter(|t| !t.is_empty()) {
        Some(site) => format!("{} | {site}", props.seo.title),
        None => props.seo.title.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn props<'a>(location: &'a PageContext, title: Option<&'a str>, seo: &'a Seo) -> LayoutProps<'a> {
        LayoutProps {
            location,
            title,
            seo,
            site_description: Some("Guides and notes"),
            path_prefix: "",
            language: "en",
        }
    }

    #[test]
    fn test_document_structure() {
        let location = PageContext::new("/404");
        let seo = Seo::new("404: Not Found");
        let html = render(&props(&location, Some("My Guides"), &seo), "<h1>body</h1>");

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>404: Not Found | My Guides</title>"));
        assert!(html.contains(r#"<meta name="description" content="Guides and notes">"#));
        assert!(html.contains(r#"<meta property="og:title" content="404: Not Found">"#));
        assert!(html.contains("<main><h1>body</h1></main>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_header_on_root() {
        let location = PageContext::new("/");
        let seo = Seo::new("Home");
        let html = render(&props(&location, Some("My Guides"), &seo), "");

        assert!(html.contains(r#"<h1 class="main-heading"><a href="/">My Guides</a></h1>"#));
        assert!(html.contains(r#"data-is-root-path="true""#));
    }

    #[test]
    fn test_header_off_root() {
        let location = PageContext::new("/404");
        let seo = Seo::new("404: Not Found");
        let html = render(&props(&location, Some("My Guides"), &seo), "");

        assert!(html.contains(r#"<a class="header-link-home" href="/">My Guides</a>"#));
        assert!(html.contains(r#"data-is-root-path="false""#));
        assert!(!html.contains("main-heading"));
    }

    #[test]
    fn test_header_respects_path_prefix() {
        let location = PageContext::new("/guides/");
        let seo = Seo::new("Home");
        let mut props = props(&location, Some("My Guides"), &seo);
        props.path_prefix = "/guides";
        let html = render(&props, "");

        assert!(html.contains(r#"<a href="/guides/">My Guides</a>"#));
    }

    #[test]
    fn test_missing_title() {
        let location = PageContext::new("/404");
        let seo = Seo::new("404: Not Found");
        let html = render(&props(&location, None, &seo), "");

        assert!(html.contains("<title>404: Not Found</title>"));
        assert!(html.contains(r#"<a class="header-link-home" href="/"></a>"#));
    }

    #[test]
    fn test_description_override_and_absence() {
        let location = PageContext::new("/");
        let seo = Seo {
            title: "Home".into(),
            description: Some("Custom".into()),
        };
        let html = render(&props(&location, Some("T"), &seo), "");
        assert!(html.contains(r#"content="Custom""#));
        assert!(!html.contains("Guides and notes"));

        let seo = Seo::new("Home");
        let mut props = props(&location, Some("T"), &seo);
        props.site_description = Some("");
        let html = render(&props, "");
        assert!(!html.contains(r#"name="description""#));
    }

    #[test]
    fn test_escapes_title() {
        let location = PageContext::new("/");
        let seo = Seo::new("Home");
        let html = render(&props(&location, Some("Tom & Jerry"), &seo), "");
        assert!(html.contains("<title>Home | Tom &amp; Jerry</title>"));
    }
}
