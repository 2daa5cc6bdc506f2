//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const SIDEBAR: &str = include_str!("../assets/components/sidebar.css");
const MODAL: &str = include_str!("../assets/components/modal.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!("Failed to create assets directory: {}", assets_dir.display())
    })?;
    write_bundled(assets_dir, "shell.css", &[BASE, SIDEBAR, MODAL])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    log::debug!("Wrote {}", dir.join(name).display());
    Ok(())
}
