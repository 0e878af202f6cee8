//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output() ──► clear output when `[build].clean`
//!     │
//!     ├── render_home()
//!     │       └── provider.bio() ──► bio::render ──► layout::render
//!     │
//!     ├── render_not_found()
//!     │       └── provider.not_found() ──► not_found::render ──► layout::render
//!     │
//!     └── write_page() ──► minify ──► index.html / 404.html
//! ```

use crate::{
    config::SiteConfig,
    data::{self, MetadataProvider},
    log,
    render::{
        PageContext, RenderOptions, bio,
        layout::{self, LayoutProps, Seo},
        not_found,
    },
    utils::minify::minify_html,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// SEO title of the home page.
const HOME_TITLE: &str = "Home";

/// A fully rendered document and the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Path relative to the output directory.
    pub file: &'static str,
    pub html: String,
}

/// Build the site into `[build].output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let provider = data::provider(config, true)?;
    let pages = render_site(config, provider.as_ref())?;

    log!("build"; "writing {} pages", pages.len());
    for page in &pages {
        write_page(output, page, config)?;
    }

    log_build_result(output)
}

/// Query the provider and render every page, without touching the output directory.
pub fn render_site(
    config: &SiteConfig,
    provider: &dyn MetadataProvider,
) -> Result<Vec<RenderedPage>> {
    Ok(vec![
        render_home(config, provider)?,
        render_not_found(config, provider)?,
    ])
}

/// Home page: the bio block at `{path_prefix}/`.
fn render_home(config: &SiteConfig, provider: &dyn MetadataProvider) -> Result<RenderedPage> {
    let data = provider.bio().context("Failed to resolve bio metadata")?;
    match data.avatar() {
        Some(avatar) => log!("avatar"; "{}", avatar.src),
        None => log!("warn"; "no avatar found, rendering bio without image"),
    }
    // the site title comes from the same source as the 404 page's
    let site = provider
        .not_found()
        .context("Failed to resolve site title")?;
    let title = site.title().filter(|title| !title.is_empty());
    if title.is_none() {
        log!("warn"; "site title is empty, home header will be blank");
    }
    let location = PageContext::new(config.root_path());
    let options = RenderOptions {
        path_prefix: &config.build.path_prefix,
    };

    let body = bio::render(&location, &data, &options);
    let seo = Seo::new(HOME_TITLE);
    let html = layout::render(
        &layout_props(config, &location, title, &seo),
        &body,
    );

    Ok(RenderedPage {
        file: "index.html",
        html,
    })
}

/// Not-found page at `{path_prefix}/404`.
fn render_not_found(config: &SiteConfig, provider: &dyn MetadataProvider) -> Result<RenderedPage> {
    let data = provider
        .not_found()
        .context("Failed to resolve not-found metadata")?;
    let location = PageContext::new(format!("{}/404", config.build.path_prefix));

    let page = not_found::render(&location, &data);
    let html = layout::render(
        &layout_props(config, &page.location, page.title.as_deref(), &page.seo),
        &page.body,
    );

    Ok(RenderedPage {
        file: "404.html",
        html,
    })
}

fn layout_props<'a>(
    config: &'a SiteConfig,
    location: &'a PageContext,
    title: Option<&'a str>,
    seo: &'a Seo,
) -> LayoutProps<'a> {
    LayoutProps {
        location,
        title,
        seo,
        site_description: Some(config.site.description.as_str()),
        path_prefix: &config.build.path_prefix,
        language: &config.site.language,
    }
}

/// Create the output directory, removing previous content first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_page(output: &Path, page: &RenderedPage, config: &SiteConfig) -> Result<()> {
    let path = output.join(page.file);
    let html = minify_html(page.html.as_bytes(), config);

    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("page"; "{}", page.file);
    Ok(())
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?.filter_map(Result::ok).count();

    if file_count == 0 {
        log!("warn"; "output is empty");
    } else {
        log!("build"; "done");
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::JsonProvider;

    fn site(root: &Path, minify: bool) -> SiteConfig {
        let mut config = SiteConfig::from_str(
            r#"
            [site]
            title = "My Guides"
            description = "Guides and notes"

            [site.author]
            name = "Mychi"
            summary = "who writes guides."

            [site.social]
            twitter = "mychi_tw"
            github = "mr-phlames"
            website = "https://mychi.dev"
        "#,
        )
        .unwrap();
        config.build.assets = root.join("assets");
        config.build.output = root.join("public");
        config.build.minify = minify;
        config
    }

    fn read(root: &Path, file: &str) -> String {
        fs::read_to_string(root.join("public").join(file)).unwrap()
    }

    #[test]
    fn test_build_writes_both_pages() {
        let dir = tempfile::tempdir().unwrap();
        build_site(&site(dir.path(), false)).unwrap();

        let index = read(dir.path(), "index.html");
        assert!(index.contains(r#"<div class="bio -bordered">"#));
        assert!(index.contains("<strong>Mychi</strong>"));
        assert!(index.contains(r#"href="https://twitter.com/mychi_tw""#));
        assert!(index.contains(r#"href="https://instagram.com/""#));
        assert!(index.contains("<title>Home | My Guides</title>"));
        assert!(!index.contains("<img"));

        let not_found = read(dir.path(), "404.html");
        assert!(not_found.contains("<h1>404: Not Found</h1>"));
        assert!(not_found.contains("<title>404: Not Found | My Guides</title>"));
        assert!(not_found.contains(r#"href="https://github.com/mr-phlames/mychi-guides""#));
        assert!(not_found.contains(r#"<a class="header-link-home" href="/">My Guides</a>"#));
    }

    #[test]
    fn test_build_publishes_avatar() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/images")).unwrap();
        fs::write(dir.path().join("assets/images/mychi.jpg"), b"jpeg").unwrap();

        let mut config = site(dir.path(), false);
        config.build.path_prefix = "/guides".into();
        build_site(&config).unwrap();

        let index = read(dir.path(), "index.html");
        let start = index.find("src=\"").unwrap() + 5;
        let src = &index[start..start + index[start..].find('"').unwrap()];
        assert!(src.starts_with("/guides/static/"));
        assert!(index.contains(r#"alt="Mychi""#));

        let published = dir.path().join("public").join(src.trim_start_matches("/guides/"));
        assert_eq!(fs::read(published).unwrap(), b"jpeg");
        assert!(index.contains(r#"<div class="bio -bordered">"#));
    }

    #[test]
    fn test_build_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/mychi.jpg"), b"jpeg").unwrap();
        let config = site(dir.path(), true);

        build_site(&config).unwrap();
        let first = (read(dir.path(), "index.html"), read(dir.path(), "404.html"));
        build_site(&config).unwrap();
        let second = (read(dir.path(), "index.html"), read(dir.path(), "404.html"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_minifies() {
        let dir = tempfile::tempdir().unwrap();
        let plain_dir = tempfile::tempdir().unwrap();

        build_site(&site(dir.path(), true)).unwrap();
        build_site(&site(plain_dir.path(), false)).unwrap();

        let minified = read(dir.path(), "404.html");
        let plain = read(plain_dir.path(), "404.html");
        assert!(minified.len() < plain.len());
        assert!(minified.contains("404: Not Found"));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("public");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("stale.html"), "old").unwrap();

        let mut config = site(dir.path(), false);
        build_site(&config).unwrap();
        assert!(output.join("stale.html").exists());

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!output.join("stale.html").exists());
        assert!(output.join("index.html").exists());
    }

    #[test]
    fn test_render_site_from_json_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(
            &path,
            r#"{ "bio": { "site": { "siteMetadata": { "author": null } } }, "notFound": {} }"#,
        )
        .unwrap();

        let config = site(dir.path(), false);
        let pages = render_site(&config, &JsonProvider::new(&path)).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].file, "index.html");
        assert!(pages[0].html.contains(r#"<main><div class="bio -bordered"></div></main>"#));
        assert_eq!(pages[1].file, "404.html");
        assert!(pages[1].html.contains("<title>404: Not Found</title>"));
        assert!(!config.build.output.exists());
    }

    #[test]
    fn test_home_title_follows_json_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(
            &path,
            r#"{ "notFound": { "site": { "siteMetadata": { "title": "Bundle Guides" } } } }"#,
        )
        .unwrap();

        let mut config = site(dir.path(), false);
        config.site.title = String::new();
        let pages = render_site(&config, &JsonProvider::new(&path)).unwrap();

        assert!(pages[0].html.contains("<title>Home | Bundle Guides</title>"));
        assert!(pages[0].html.contains(r#"<h1 class="main-heading">"#));
        assert!(pages[0].html.contains("Bundle Guides</a></h1>"));
        assert!(pages[1].html.contains("<title>404: Not Found | Bundle Guides</title>"));
    }

    #[test]
    fn test_render_site_reports_provider_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path(), false);
        let missing = JsonProvider::new(&dir.path().join("missing.json"));

        let err = render_site(&config, &missing).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to resolve bio metadata"));
    }
}
