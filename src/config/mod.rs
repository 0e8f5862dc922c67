// src/config/mod.rs

pub mod consts;
pub mod location;
pub mod options;
pub mod settings;

pub use location::HikeLocation;
pub use options::{AppOptions, ExportFormat, ExportOptions, FailurePolicy, FetchOptions, ResolveOptions};
pub use settings::Settings;
