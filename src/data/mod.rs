//! Day series sources: file-backed or synthetic.

pub mod resolve;
pub mod sample;

pub use resolve::*;
pub use sample::*;
