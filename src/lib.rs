// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod csv;
pub mod export;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;
