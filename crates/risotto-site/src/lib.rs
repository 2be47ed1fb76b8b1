//! Static site generation for risotto documentation.
//!
//! Scans a docs directory into a navigation tree, renders each Markdown
//! document into a themed page and hands the pages to an output sink.

pub mod assets;
pub mod builder;
pub mod config;
pub mod page;
pub mod scanner;
pub mod sink;
pub mod templates;

pub use builder::{BuildError, BuildReport, SiteBuilder};
pub use config::{ConfigError, ConfigFormat, SiteConfig, CONFIG_FILENAME};
pub use page::{navigation, PageBuilder, RenderedPage};
pub use scanner::{scan, Category, Document, NavTree, ScanWarning, SiteScan};
pub use sink::{FsSink, OutputSink};
