//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::page::PageBuilder;
use crate::scanner::{scan, Document, NavTree, ScanWarning, SiteScan};
use crate::sink::OutputSink;

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of pages generated, home page included
    pub pages: usize,

    /// Whether the home page was generated
    pub home: bool,

    /// Conditions the build survived
    pub warnings: Vec<ScanWarning>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

impl BuildReport {
    /// Whether the source directory was missing, leaving the site empty.
    pub fn missing_source(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ScanWarning::MissingSourceDirectory(_)))
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render template: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Static site builder.
pub struct SiteBuilder {
    docs_dir: PathBuf,
    pages: PageBuilder,
}

impl SiteBuilder {
    /// Create a builder for the docs in `docs_dir`.
    pub fn new(docs_dir: impl Into<PathBuf>, config: SiteConfig) -> Result<Self, BuildError> {
        Ok(Self {
            docs_dir: docs_dir.into(),
            pages: PageBuilder::new(config)?,
        })
    }

    /// Build the site into `sink`.
    ///
    /// The navigation tree is complete before any page is built. Pages are
    /// then built in parallel and written in no particular order.
    pub fn build(&self, sink: &dyn OutputSink) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        let SiteScan {
            nav,
            home,
            warnings,
        } = scan(&self.docs_dir, &self.pages.config().home_page);

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        if let Some(home) = &home {
            tracing::info!("Processing home page: {}", home.source_path.display());
        }

        let documents: Vec<&Document> = home.iter().chain(nav.documents()).collect();

        let results: Vec<Result<(), BuildError>> = documents
            .par_iter()
            .map(|doc| self.build_document(doc, &nav, sink))
            .collect();

        for result in results {
            result?;
        }

        Ok(BuildReport {
            pages: documents.len(),
            home: home.is_some(),
            warnings,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Read, build and write a single document.
    fn build_document(
        &self,
        doc: &Document,
        nav: &NavTree,
        sink: &dyn OutputSink,
    ) -> Result<(), BuildError> {
        let source = fs::read_to_string(&doc.source_path).map_err(|source| BuildError::ReadError {
            path: doc.source_path.clone(),
            source,
        })?;

        let page = self.pages.build(doc, &source, nav)?;

        sink.write(&page.output_path, &page.html)
            .map_err(|source| BuildError::WriteError {
                path: page.output_path.clone(),
                source,
            })?;

        tracing::info!("Generated {}", page.url);

        Ok(())
    }
}
