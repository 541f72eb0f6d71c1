//! Input/output helpers.
//!
//! - plain-text series ingest + validation (`ingest`)
//! - HTML and JSON exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
