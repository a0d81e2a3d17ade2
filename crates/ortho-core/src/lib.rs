//! ortho-core
//!
//! Pure domain types for the orthopedic intake wizard: the client record,
//! the intake questionnaires and the flat export map handed to the Word
//! templates. No I/O; this is the shared vocabulary of the workspace.

pub mod error;
pub mod export_map;
pub mod lenient;
pub mod models;

pub use export_map::{ExportMap, TRUTHY};
