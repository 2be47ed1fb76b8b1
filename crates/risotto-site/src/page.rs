//! Turning one document into a complete page.

use std::path::PathBuf;

use crate::assets::AssetPipeline;
use crate::config::SiteConfig;
use crate::scanner::{Document, NavTree};
use crate::templates::{Context, NavGroup, NavLink, TemplateEngine};

/// Title used for the home page when it has no level-1 heading.
const HOME_FALLBACK_TITLE: &str = "Home";

/// A fully rendered page, ready for an output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Page title
    pub title: String,

    /// Site-relative URL
    pub url: String,

    /// Output path relative to the site root
    pub output_path: PathBuf,

    /// Complete HTML document
    pub html: String,
}

/// Build navigation groups for the page at `current_url`.
///
/// Each category becomes a group labelled with its name, holding one link per
/// document. The link whose URL equals `current_url` is marked active.
pub fn navigation(nav: &NavTree, current_url: &str) -> Vec<NavGroup> {
    nav.categories
        .iter()
        .map(|category| NavGroup {
            title: category.name.clone(),
            links: category
                .documents
                .iter()
                .map(|doc| {
                    let url = doc.url();
                    NavLink {
                        title: doc.name.clone(),
                        path: format!("/{}", url),
                        active: url == current_url,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Builds pages from documents with a shared configuration.
pub struct PageBuilder {
    config: SiteConfig,
    templates: TemplateEngine,
    stylesheet: String,
}

impl PageBuilder {
    /// Create a page builder, rendering the theme stylesheet once.
    pub fn new(config: SiteConfig) -> Result<Self, minijinja::Error> {
        let templates = TemplateEngine::new();
        let css = templates.render_stylesheet(&config)?;

        let stylesheet = if config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Failed to minify stylesheet: {}", e);
                    css
                }
            }
        } else {
            css
        };

        Ok(Self {
            config,
            templates,
            stylesheet,
        })
    }

    /// The configuration pages are built with.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Build the page for `doc` from its Markdown `source`.
    pub fn build(
        &self,
        doc: &Document,
        source: &str,
        nav: &NavTree,
    ) -> Result<RenderedPage, minijinja::Error> {
        let rendered = risotto_markdown::render(source);

        let title = rendered
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| {
                if doc.is_home() {
                    HOME_FALLBACK_TITLE.to_string()
                } else {
                    doc.name.clone()
                }
            });

        let url = doc.url();

        let context = Context {
            title: title.clone(),
            content: rendered.html,
            nav: navigation(nav, &url),
            stylesheet: &self.stylesheet,
            config: &self.config,
        };

        let html = self.templates.render_page(&context)?;

        Ok(RenderedPage {
            title,
            output_path: doc.output_path(),
            url,
            html,
        })
    }
}
