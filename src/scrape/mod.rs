// src/scrape/mod.rs
mod batch;
mod extract;

pub use batch::{resolve, BatchOutcome};
pub use extract::Extractor;
