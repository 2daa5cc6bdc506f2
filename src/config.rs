//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::markdown::Variant;

/// Command line configuration for Lexdesk.
#[derive(Debug, Clone, Parser)]
#[command(name = "lexdesk", version, about, long_about = None)]
pub struct Config {
    /// Markdown document to render
    #[arg(default_value = "README.md")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Presentation variant (defaults to the stored theme)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Route highlighted in the sidebar
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Key-value store holding the signed in user and theme
    #[arg(long, default_value = ".lexdesk/store.json")]
    pub store: PathBuf,

    /// Page title (defaults to the input file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input does not exist or the route is not absolute.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if !self.route.starts_with('/') {
            bail!("Route must start with '/': {}", self.route);
        }

        Ok(())
    }

    /// Returns page title from configuration or input file stem.
    ///
    /// # Errors
    ///
    /// Returns error if input path has no file name or contains invalid UTF8.
    pub fn page_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        self.input
            .file_stem()
            .and_then(|n| n.to_str())
            .with_context(|| {
                format!("Cannot extract title from path: {}", self.input.display())
            })
            .map(String::from)
    }
}
