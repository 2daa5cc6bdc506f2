//! Page generation modules
//!
//! Pages combine the layout wrapper, shell components, and rendered
//! content into complete HTML documents.

pub mod document;
