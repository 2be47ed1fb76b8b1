//! Risotto CLI - static documentation site generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod build;

#[derive(Parser)]
#[command(name = "risotto")]
#[command(about = "Static documentation site generator")]
#[command(version)]
pub struct Cli {
    /// Documentation source directory
    #[arg(short, long, default_value = "docs")]
    docs: PathBuf,

    /// Configuration file (JSON, or TOML with a .toml extension)
    #[arg(short, long, default_value = risotto_site::CONFIG_FILENAME)]
    config: PathBuf,

    /// Output directory (defaults to config or "site")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip stylesheet minification
    #[arg(long)]
    no_minify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let options = build::Options {
        docs_dir: cli.docs,
        config_path: cli.config,
        output: cli.output,
        minify: if cli.no_minify { Some(false) } else { None },
    };

    match build::run(options) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn uses_default_paths() {
        let cli = Cli::try_parse_from(["risotto"]).unwrap();

        assert_eq!(cli.docs, PathBuf::from("docs"));
        assert_eq!(cli.config, PathBuf::from("config.risotto"));
        assert!(cli.output.is_none());
        assert!(!cli.no_minify);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "risotto",
            "--docs",
            "handbook",
            "--config",
            "site.toml",
            "-o",
            "public",
            "--no-minify",
        ])
        .unwrap();

        assert_eq!(cli.docs, PathBuf::from("handbook"));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("public")));
        assert!(cli.no_minify);
    }
}
