// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific parsing for the results site. Each spec knows *where the ground
//! truth lives in one page's HTML* and how to pull it out tolerantly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of documents already fetched (`&str` in, typed data out).
//! - **Selector choice**: element ids of the ASP.NET grids, which rows to skip.
//! - **Field validation** for what the page must provide (the five checkpoint keys).
//!
//! ## What does **not** live here
//! - **Fetching** – `core::net::PageFetcher`, driven by `scrape::extract`.
//! - **Model rules** – timeline order and durations belong to `model`.
//! - **Batch policy** – `scrape::batch` decides what a failure means for a run.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::resolve → scrape::Extractor::extract
//!                                   ├─ fetch search page → specs::search::parse_doc
//!                                   └─ fetch result page → specs::splits::parse_doc
//!                                                         → specs::splits::checkpoint_times
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline snippets and the fixtures in
//! `tests/fixtures/`.
pub mod search;
pub mod splits;
