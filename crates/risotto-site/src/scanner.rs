//! Discovery of the home document and category documents.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Site-relative URL of the home page.
pub const HOME_URL: &str = "index.html";

/// A source Markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path of the Markdown source
    pub source_path: PathBuf,

    /// File name without extension
    pub name: String,

    /// Owning category, `None` for the home document
    pub category: Option<String>,
}

impl Document {
    /// Site-relative URL: `<category>/<name>.html`, or `index.html` for the
    /// home document whatever its source file is called.
    pub fn url(&self) -> String {
        match &self.category {
            Some(category) => format!("{}/{}.html", category, self.name),
            None => HOME_URL.to_string(),
        }
    }

    /// Output path relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        match &self.category {
            Some(category) => Path::new(category).join(format!("{}.html", self.name)),
            None => PathBuf::from(HOME_URL),
        }
    }

    /// Whether this is the home document.
    pub fn is_home(&self) -> bool {
        self.category.is_none()
    }
}

/// Documents of one source subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub documents: Vec<Document>,
}

/// Ordered categories used for sidebar navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    pub categories: Vec<Category>,
}

impl NavTree {
    /// All category documents in navigation order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.categories.iter().flat_map(|c| c.documents.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Conditions the build reports but survives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanWarning {
    #[error("Documentation directory not found: {}", .0.display())]
    MissingSourceDirectory(PathBuf),

    #[error("No home page found (looking for {})", .0.display())]
    MissingHomeDocument(PathBuf),
}

/// Result of scanning a docs directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteScan {
    pub nav: NavTree,
    pub home: Option<Document>,
    pub warnings: Vec<ScanWarning>,
}

/// Scan `root` for the home document and category documents.
///
/// A missing `root` is reported as a warning with an empty result. Markdown
/// files directly under `root`, other than the home document, belong to no
/// category and are left out of the site.
pub fn scan(root: &Path, home_page: &str) -> SiteScan {
    let mut result = SiteScan::default();

    if !root.is_dir() {
        result
            .warnings
            .push(ScanWarning::MissingSourceDirectory(root.to_path_buf()));
        return result;
    }

    let home_path = root.join(home_page);
    if home_path.is_file() {
        result.home = Some(Document {
            name: file_stem(&home_path),
            source_path: home_path,
            category: None,
        });
    } else {
        result
            .warnings
            .push(ScanWarning::MissingHomeDocument(home_path));
    }

    for entry in immediate_children(root) {
        let path = entry.path();

        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let documents = category_documents(path, &name);
            if documents.is_empty() {
                tracing::debug!("Skipping {}: no Markdown files", path.display());
            } else {
                result.nav.categories.push(Category { name, documents });
            }
        } else if is_markdown(path) && entry.file_name() != home_page {
            tracing::debug!("Skipping {}: not inside a category", path.display());
        }
    }

    result
}

/// Markdown files directly inside a category directory.
fn category_documents(dir: &Path, category: &str) -> Vec<Document> {
    immediate_children(dir)
        .filter(|entry| entry.file_type().is_file() && is_markdown(entry.path()))
        .map(|entry| Document {
            source_path: entry.path().to_path_buf(),
            name: file_stem(entry.path()),
            category: Some(category.to_string()),
        })
        .collect()
}

/// Entries directly inside `dir`, sorted by file name.
fn immediate_children(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to read directory entry: {}", e);
                None
            }
        })
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
