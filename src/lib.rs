//! Markdown rendering and navigation shell for a legal research workspace.

mod assets;
pub mod auth;
pub mod avatar;
pub mod components;
mod config;
pub mod markdown;
pub mod pages;
pub mod shell;

pub use assets::write_css_assets;
pub use auth::{AuthContext, AuthError, FileStore, KeyValueStore, MemoryStore, User};
pub use config::Config;
pub use markdown::{Block, MarkdownRenderer, Span, Variant, render};
pub use shell::Shell;
