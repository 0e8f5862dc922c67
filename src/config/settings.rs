// src/config/settings.rs
//! Optional TOML settings file. Every key is optional; command-line flags win.
//!
//! ```toml
//! location = "Jurassic Coast"   # or the numeric id, 20440
//! race_numbers = [643, 644, 108]
//! policy = "collect-all"        # or "fail-fast"
//! timeout_secs = 20
//!
//! [export]
//! format = "tsv"
//! out = "out/"
//! include_headers = true
//! ```

use std::{fs, io, path::{Path, PathBuf}, time::Duration};

use serde::Deserialize;

use crate::error::ConfigError;
use super::location::HikeLocation;
use super::options::{AppOptions, ExportFormat, FailurePolicy};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub location: Option<LocationSetting>,
    pub race_numbers: Option<Vec<u32>>,
    pub policy: Option<FailurePolicy>,
    pub timeout_secs: Option<u64>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocationSetting {
    Id(u32),
    Name(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSettings {
    pub format: Option<ExportFormat>,
    pub out: Option<PathBuf>,
    pub include_headers: Option<bool>,
}

impl Settings {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }

    /// Layer these settings onto `opts`.
    pub fn apply(&self, opts: &mut AppOptions) -> Result<(), ConfigError> {
        if let Some(loc) = &self.location {
            opts.resolve.location = Some(match loc {
                LocationSetting::Id(id) => HikeLocation::from_id(*id)
                    .ok_or_else(|| ConfigError::UnknownLocation(id.to_string()))?,
                LocationSetting::Name(name) => name.parse()?,
            });
        }
        if let Some(numbers) = &self.race_numbers {
            opts.resolve.race_numbers = numbers.clone();
        }
        if let Some(policy) = self.policy {
            opts.resolve.policy = policy;
        }
        if let Some(secs) = self.timeout_secs {
            opts.fetch.timeout = Duration::from_secs(secs);
        }
        if let Some(url) = &self.base_url {
            opts.fetch.base_url = url.clone();
        }
        if let Some(format) = self.export.format {
            opts.export.format = format;
        }
        if let Some(out) = &self.export.out {
            opts.export.out = Some(out.clone());
        }
        if let Some(h) = self.export.include_headers {
            opts.export.include_headers = h;
        }
        Ok(())
    }
}
