//! Static site build.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use risotto_site::{FsSink, SiteBuilder, SiteConfig};

/// Exit status for a build that completed with a missing source directory.
const EXIT_MISSING_SOURCE: u8 = 2;

/// Build inputs gathered from the command line.
#[derive(Debug)]
pub struct Options {
    pub docs_dir: PathBuf,
    pub config_path: PathBuf,
    pub output: Option<PathBuf>,
    pub minify: Option<bool>,
}

/// How a completed build went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Built,
    MissingSource,
}

impl Status {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Built => ExitCode::SUCCESS,
            Self::MissingSource => ExitCode::from(EXIT_MISSING_SOURCE),
        }
    }
}

/// Run the build.
pub fn run(options: Options) -> Result<Status> {
    tracing::info!("Risotto - Building documentation site...");

    let mut config = SiteConfig::load(&options.config_path)
        .with_context(|| format!("Failed to load {}", options.config_path.display()))?;

    if let Some(output) = options.output {
        config.output_dir = output;
    }
    if let Some(minify) = options.minify {
        config.minify = minify;
    }

    let output_dir = config.output_dir.clone();
    let report = SiteBuilder::new(&options.docs_dir, config)?.build(&FsSink::new(&output_dir))?;

    let others = report.pages - usize::from(report.home);
    if report.home {
        tracing::info!(
            "Done! Generated home page + {} pages in {}ms",
            others,
            report.duration_ms
        );
    } else {
        tracing::info!("Done! Generated {} pages in {}ms", others, report.duration_ms);
    }
    tracing::info!("Output: {}", output_dir.display());

    if report.missing_source() {
        return Ok(Status::MissingSource);
    }

    if report.home {
        tracing::info!("Open {} in your browser!", output_dir.join("index.html").display());
    }

    Ok(Status::Built)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn options(root: &std::path::Path) -> Options {
        Options {
            docs_dir: root.join("docs"),
            config_path: root.join("config.risotto"),
            output: Some(root.join("site")),
            minify: Some(false),
        }
    }

    #[test]
    fn builds_with_default_config() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs/guides")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "# Home").unwrap();
        fs::write(temp.path().join("docs/guides/setup.md"), "# Setup").unwrap();

        let status = run(options(temp.path())).unwrap();

        assert_eq!(status, Status::Built);
        assert!(temp.path().join("site/index.html").exists());
        assert!(temp.path().join("site/guides/setup.html").exists());
    }

    #[test]
    fn reports_missing_source_directory() {
        let temp = tempdir().unwrap();

        let status = run(options(temp.path())).unwrap();

        assert_eq!(status, Status::MissingSource);
    }

    #[test]
    fn fails_on_malformed_config() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("config.risotto"), "{ not json").unwrap();

        let result = run(options(temp.path()));

        assert!(result.is_err());
    }

    #[test]
    fn output_flag_overrides_config() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "Hi").unwrap();
        fs::write(
            temp.path().join("config.risotto"),
            r#"{ "output_dir": "elsewhere" }"#,
        )
        .unwrap();

        run(options(temp.path())).unwrap();

        assert!(temp.path().join("site/index.html").exists());
    }
}
