//! Template engine for rendering documentation pages.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::assets::THEME_SCRIPT;
use crate::config::SiteConfig;

/// A navigation link to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display title
    pub title: String,
    /// Absolute URL path
    pub path: String,
    /// Whether this is the current page
    pub active: bool,
}

/// A labelled group of navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Category name
    pub title: String,
    /// Links in document order
    pub links: Vec<NavLink>,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context<'a> {
    /// Page title
    pub title: String,
    /// Rendered content HTML
    pub content: String,
    /// Navigation groups
    pub nav: Vec<NavGroup>,
    /// Inline theme stylesheet
    pub stylesheet: &'a str,
    /// Site configuration
    pub config: &'a SiteConfig,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");
        env.add_template("nav.html", NAV_TEMPLATE)
            .expect("Failed to add nav template");
        env.add_template("theme.css", THEME_TEMPLATE)
            .expect("Failed to add theme template");

        Self { env }
    }

    /// Render a complete page.
    pub fn render_page(&self, context: &Context<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &context.title,
            content => &context.content,
            nav => &context.nav,
            stylesheet => context.stylesheet,
            config => context.config,
            script => THEME_SCRIPT,
        })
    }

    /// Render the theme stylesheet for the configured palettes.
    pub fn render_stylesheet(&self, config: &SiteConfig) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("theme.css")?;

        tmpl.render(context! {
            light => &config.colors.light,
            dark => &config.colors.dark,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{{ config.description }}">
  <title>{{ title }} - {{ config.site_title }}</title>
  {% if config.favicon %}<link rel="icon" type="image/x-icon" href="{{ config.favicon }}">
  {% endif %}<style>{{ stylesheet | safe }}</style>
</head>
<body>
  <div class="container">
    <aside class="sidebar">
      <div class="site-header">
        <div class="site-title">
          <a href="/index.html">
            <img src="{{ config.logo.light }}" alt="Logo" class="site-logo light-logo">
            <img src="{{ config.logo.dark }}" alt="Logo" class="site-logo dark-logo">
            <span>{{ config.site_name }}</span>
          </a>
        </div>
        <button class="theme-toggle" onclick="toggleTheme()" aria-label="Toggle theme">
          <img src="{{ config.theme_icons.light }}" alt="Switch to dark theme" class="theme-icon light-icon">
          <img src="{{ config.theme_icons.dark }}" alt="Switch to light theme" class="theme-icon dark-icon">
        </button>
      </div>
      <nav>
        {% include "nav.html" %}
      </nav>
    </aside>
    <main class="content">
      {{ content | safe }}
    </main>
  </div>
  <script>{{ script | safe }}</script>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"{% for group in nav %}<div class="nav-category">
  <div class="nav-category-title">{{ group.title }}</div>
  {% for link in group.links %}<a href="{{ link.path }}" class="nav-link{% if link.active %} active{% endif %}">{{ link.title }}</a>
  {% endfor %}
</div>
{% endfor %}"##;

const THEME_TEMPLATE: &str = r##"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

:root {
  --primary: {{ light.primary }};
  --secondary: {{ light.secondary }};
  --background: {{ light.background }};
  --text: {{ light.text }};
  --sidebar: {{ light.sidebar }};
}

[data-theme="dark"] {
  --primary: {{ dark.primary }};
  --secondary: {{ dark.secondary }};
  --background: {{ dark.background }};
  --text: {{ dark.text }};
  --sidebar: {{ dark.sidebar }};
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.6;
  color: var(--text);
  background: var(--background);
  transition: background-color 0.3s ease, color 0.3s ease;
}

.container {
  display: flex;
  min-height: 100vh;
}

.sidebar {
  width: 280px;
  background: var(--sidebar);
  padding: 2rem 1rem;
  overflow-y: auto;
  border-right: 1px solid color-mix(in srgb, var(--text) 15%, transparent);
  position: fixed;
  height: 100vh;
  transition: background-color 0.3s ease;
}

.site-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 2rem;
}

.site-title {
  font-size: 1.5rem;
  font-weight: bold;
  color: var(--primary);
}

.site-title a {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  text-decoration: none;
  color: inherit;
}

.site-title a:hover {
  opacity: 0.8;
}

.site-logo {
  height: 32px;
  width: 32px;
  object-fit: contain;
}

.theme-toggle {
  background: none;
  border: none;
  cursor: pointer;
  padding: 0.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 6px;
  transition: background-color 0.2s;
  width: 36px;
  height: 36px;
}

.theme-toggle:hover {
  background: color-mix(in srgb, var(--primary) 15%, transparent);
}

.theme-icon {
  width: 24px;
  height: 24px;
  object-fit: contain;
}

[data-theme="light"] .light-logo,
[data-theme="light"] .light-icon,
[data-theme="dark"] .dark-logo,
[data-theme="dark"] .dark-icon {
  display: block;
}

[data-theme="light"] .dark-logo,
[data-theme="light"] .dark-icon,
[data-theme="dark"] .light-logo,
[data-theme="dark"] .light-icon {
  display: none;
}

.nav-category {
  margin-bottom: 1.5rem;
}

.nav-category-title {
  font-weight: 600;
  margin-bottom: 0.5rem;
  color: var(--secondary);
  text-transform: uppercase;
  font-size: 0.875rem;
  letter-spacing: 0.5px;
}

.nav-link {
  display: block;
  padding: 0.5rem 0.75rem;
  margin-bottom: 0.25rem;
  color: var(--secondary);
  text-decoration: none;
  border-radius: 6px;
  transition: all 0.2s;
  font-size: 0.95rem;
}

.nav-link:hover {
  background: color-mix(in srgb, var(--primary) 15%, transparent);
  color: var(--primary);
}

.nav-link.active {
  background: var(--primary);
  color: white;
  font-weight: 500;
}

.content {
  flex: 1;
  padding: 3rem;
  margin-left: 280px;
  max-width: 1200px;
}

h1 {
  color: var(--primary);
  font-size: 2.5rem;
  margin-bottom: 1.5rem;
  font-weight: 700;
}

h2 {
  margin-top: 2.5rem;
  margin-bottom: 1rem;
  font-size: 1.875rem;
  font-weight: 600;
  border-bottom: 2px solid color-mix(in srgb, var(--text) 15%, transparent);
  padding-bottom: 0.5rem;
}

h3 {
  margin-top: 1.5rem;
  margin-bottom: 0.75rem;
  font-size: 1.5rem;
  font-weight: 600;
}

h4 {
  margin-top: 1rem;
  margin-bottom: 0.5rem;
  font-size: 1.25rem;
  font-weight: 600;
}

p, li {
  font-size: 1.05rem;
}

p {
  margin-bottom: 1rem;
}

code {
  background: color-mix(in srgb, var(--text) 10%, transparent);
  color: var(--primary);
  padding: 0.2rem 0.4rem;
  border-radius: 3px;
  font-family: 'Courier New', monospace;
  font-size: 0.9em;
}

pre {
  background: color-mix(in srgb, var(--text) 95%, transparent);
  color: var(--background);
  padding: 1.25rem;
  border-radius: 8px;
  overflow-x: auto;
  margin: 1.5rem 0;
  line-height: 1.5;
}

[data-theme="dark"] pre {
  background: color-mix(in srgb, var(--background) 80%, black);
  color: var(--text);
}

pre code {
  background: none;
  padding: 0;
  color: inherit;
}

ul, ol {
  margin-left: 2rem;
  margin-bottom: 1rem;
}

li {
  margin-bottom: 0.5rem;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

@media (max-width: 768px) {
  .sidebar {
    display: none;
  }

  .content {
    margin-left: 0;
    padding: 1.5rem;
  }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(config: &'a SiteConfig, nav: Vec<NavGroup>) -> Context<'a> {
        Context {
            title: "Setup".to_string(),
            content: "<p>Hello world</p>".to_string(),
            nav,
            stylesheet: "body{color:red}",
            config,
        }
    }

    #[test]
    fn renders_basic_page() {
        let config = SiteConfig {
            site_title: "My Docs".to_string(),
            ..Default::default()
        };
        let engine = TemplateEngine::new();

        let html = engine.render_page(&context(&config, vec![])).unwrap();

        assert!(html.contains("<title>Setup - My Docs</title>"));
        assert!(html.contains("<p>Hello world</p>"));
        assert!(html.contains("<style>body{color:red}</style>"));
        assert!(html.contains("function toggleTheme()"));
        assert!(!html.contains("rel=\"icon\""));
    }

    #[test]
    fn includes_favicon_when_configured() {
        let config = SiteConfig {
            favicon: Some("favicon.ico".to_string()),
            ..Default::default()
        };
        let engine = TemplateEngine::new();

        let html = engine.render_page(&context(&config, vec![])).unwrap();

        assert!(html.contains(r#"<link rel="icon" type="image/x-icon" href="favicon.ico">"#));
    }

    #[test]
    fn escapes_page_title() {
        let config = SiteConfig::default();
        let engine = TemplateEngine::new();
        let mut ctx = context(&config, vec![]);
        ctx.title = "Using <div>".to_string();

        let html = engine.render_page(&ctx).unwrap();

        assert!(html.contains("<title>Using &lt;div&gt; - Documentation</title>"));
    }

    #[test]
    fn renders_navigation() {
        let config = SiteConfig::default();
        let engine = TemplateEngine::new();
        let nav = vec![NavGroup {
            title: "guides".to_string(),
            links: vec![
                NavLink {
                    title: "install".to_string(),
                    path: "/guides/install.html".to_string(),
                    active: false,
                },
                NavLink {
                    title: "setup".to_string(),
                    path: "/guides/setup.html".to_string(),
                    active: true,
                },
            ],
        }];

        let html = engine.render_page(&context(&config, nav)).unwrap();

        assert!(html.contains(r#"<div class="nav-category-title">guides</div>"#));
        // Autoescaping turns `/` into `&#x2f;` inside attributes.
        assert!(html.contains(r#"guides&#x2f;install.html" class="nav-link">install</a>"#));
        assert!(html.contains(r#"guides&#x2f;setup.html" class="nav-link active">setup</a>"#));
    }

    #[test]
    fn renders_palettes_into_stylesheet() {
        let mut config = SiteConfig::default();
        config.colors.dark.sidebar = "#101010".to_string();
        let engine = TemplateEngine::new();

        let css = engine.render_stylesheet(&config).unwrap();

        assert!(css.contains("--primary: #2563eb;"));
        assert!(css.contains("--sidebar: #101010;"));
    }
}
