use anyhow::{Context, Result};
use lexdesk::{AuthContext, Config, FileStore, MarkdownRenderer, Shell, pages, write_css_assets};
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    config.validate()?;

    let store = FileStore::open(&config.store)
        .with_context(|| format!("Failed to open store: {}", config.store.display()))?;
    let auth = AuthContext::load(store).context("Failed to restore signed in user")?;
    let shell = Shell::load(&config.route, &auth).context("Failed to read theme preference")?;

    let variant = config.variant.unwrap_or_else(|| shell.variant());
    log::debug!("Rendering {} with {} variant", config.input.display(), variant);

    let renderer = MarkdownRenderer::new(variant);
    let content = renderer.render_file(&config.input)?;
    let title = config.page_title()?;

    let page = pages::document::generate(&title, &shell, auth.user(), variant, content);

    fs::create_dir_all(&config.output).with_context(|| {
        format!("Failed to create output directory: {}", config.output.display())
    })?;
    write_css_assets(&config.output.join("assets"))?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, page.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if !config.no_open {
        if let Err(e) = open::that(&index_path) {
            log::warn!("Failed to open {}: {}", index_path.display(), e);
        }
    }

    Ok(())
}
