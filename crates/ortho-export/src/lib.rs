//! ortho-export
//!
//! Consumers of the export-map contract: `${key}` placeholder auditing,
//! plain-text template rendering, and the DOCX intake summary (werkbon).

pub mod docx;
pub mod error;
pub mod placeholders;
pub mod render;
pub mod styles;
