//! Site configuration.
//!
//! The configuration file is JSON by default, or TOML when its name ends in
//! `.toml`. Every key is optional. Missing keys keep their built-in defaults
//! and the nested groups (`colors.light`, `colors.dark`, `logo`,
//! `theme_icons`) are merged key by key over the default group. Unknown keys
//! are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::{DEFAULT_ICON_MOON, DEFAULT_ICON_SUN, DEFAULT_LOGO_DARK, DEFAULT_LOGO_LIGHT};

/// Default configuration file name.
pub const CONFIG_FILENAME: &str = "config.risotto";

/// Resolved site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Name shown next to the logo in the sidebar
    pub site_name: String,

    /// Suffix of every page `<title>`
    pub site_title: String,

    /// Meta description
    pub description: String,

    /// Favicon reference
    pub favicon: Option<String>,

    /// Logo images for each theme
    pub logo: ThemePair,

    /// Theme toggle icons
    pub theme_icons: ThemePair,

    /// Color palettes
    pub colors: ColorScheme,

    /// Output directory
    pub output_dir: PathBuf,

    /// File name of the home document inside the docs directory
    pub home_page: String,

    /// Minify the generated stylesheet
    pub minify: bool,
}

/// A value with a light and a dark variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePair {
    pub light: String,
    pub dark: String,
}

/// Light and dark color palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub light: Palette,
    pub dark: Palette,
}

/// The five named colors of one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub sidebar: String,
}

impl Palette {
    /// Default light palette.
    pub fn light() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#64748b".to_string(),
            background: "#ffffff".to_string(),
            text: "#1e293b".to_string(),
            sidebar: "#f8fafc".to_string(),
        }
    }

    /// Default dark palette.
    pub fn dark() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#94a3b8".to_string(),
            background: "#0f172a".to_string(),
            text: "#e2e8f0".to_string(),
            sidebar: "#1e293b".to_string(),
        }
    }

    fn merge(mut self, raw: RawPalette) -> Self {
        merge_into(&mut self.primary, raw.primary);
        merge_into(&mut self.secondary, raw.secondary);
        merge_into(&mut self.background, raw.background);
        merge_into(&mut self.text, raw.text);
        merge_into(&mut self.sidebar, raw.sidebar);
        self
    }
}

impl ThemePair {
    fn merge(mut self, raw: RawThemePair) -> Self {
        merge_into(&mut self.light, raw.light);
        merge_into(&mut self.dark, raw.dark);
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Documentation".to_string(),
            site_title: "Documentation".to_string(),
            description: "Documentation site built with Risotto".to_string(),
            favicon: None,
            logo: ThemePair {
                light: DEFAULT_LOGO_LIGHT.to_string(),
                dark: DEFAULT_LOGO_DARK.to_string(),
            },
            theme_icons: ThemePair {
                light: DEFAULT_ICON_SUN.to_string(),
                dark: DEFAULT_ICON_MOON.to_string(),
            },
            colors: ColorScheme {
                light: Palette::light(),
                dark: Palette::dark(),
            },
            output_dir: PathBuf::from("site"),
            home_page: "index.md".to_string(),
            minify: true,
        }
    }
}

/// Syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid TOML in config: {0}")]
    InvalidToml(#[from] toml::de::Error),
}

impl SiteConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content, ConfigFormat::from_path(path))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text and merge it over the defaults.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let raw: RawConfig = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(Self::default().merge(raw))
    }

    fn merge(mut self, raw: RawConfig) -> Self {
        merge_into(&mut self.site_name, raw.site_name);
        merge_into(&mut self.site_title, raw.site_title);
        merge_into(&mut self.description, raw.description);
        if raw.favicon.is_some() {
            self.favicon = raw.favicon;
        }
        if let Some(logo) = raw.logo {
            self.logo = self.logo.merge(logo);
        }
        if let Some(icons) = raw.theme_icons {
            self.theme_icons = self.theme_icons.merge(icons);
        }
        if let Some(colors) = raw.colors {
            if let Some(light) = colors.light {
                self.colors.light = self.colors.light.merge(light);
            }
            if let Some(dark) = colors.dark {
                self.colors.dark = self.colors.dark.merge(dark);
            }
        }
        merge_into(&mut self.output_dir, raw.output_dir);
        merge_into(&mut self.home_page, raw.home_page);
        merge_into(&mut self.minify, raw.minify);
        self
    }
}

fn merge_into<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Configuration as written in the file, every key optional.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    site_name: Option<String>,
    site_title: Option<String>,
    description: Option<String>,
    favicon: Option<String>,
    logo: Option<RawThemePair>,
    theme_icons: Option<RawThemePair>,
    colors: Option<RawColorScheme>,
    output_dir: Option<PathBuf>,
    home_page: Option<String>,
    minify: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawThemePair {
    light: Option<String>,
    dark: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawColorScheme {
    light: Option<RawPalette>,
    dark: Option<RawPalette>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawPalette {
    primary: Option<String>,
    secondary: Option<String>,
    background: Option<String>,
    text: Option<String>,
    sidebar: Option<String>,
}
