// src/error.rs
//! Error taxonomy.
//!
//! - [`ModelError`]: time-of-day text, duration arithmetic, leg indexing, timeline order, empty registry.
//! - [`FetchError`]: transport faults raised by a [`PageFetcher`](crate::core::net::PageFetcher).
//! - [`ExtractError`]: why one race number could not be turned into a participant.
//! - [`ExtractionFailed`]: the single outward failure for a race number, keeping the cause.
//! - [`ConfigError`]: bad location names and unreadable settings files.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::time::TimePoint;
use crate::model::participant::Checkpoint;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("end time {end} precedes start time {start}")]
    InvalidDuration { start: TimePoint, end: TimePoint },

    #[error("leg number {0} is out of bounds 1..=4")]
    InvalidLegNumber(u8),

    #[error("{later} ({later_time}) is earlier than {earlier} ({earlier_time})")]
    NonMonotonicTimeline {
        earlier: Checkpoint,
        earlier_time: TimePoint,
        later: Checkpoint,
        later_time: TimePoint,
    },

    #[error("`{text}` is not a HH:MM:SS time of day")]
    InvalidTimeOfDay { text: String },

    #[error("registry has no participants")]
    EmptyRegistry,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("participant not found: {reason}")]
    ParticipantNotFound { reason: String },

    #[error("incomplete timing data for `{field}`: {reason}")]
    IncompleteTimingData { field: String, reason: String },

    #[error(transparent)]
    Transport(#[from] FetchError),

    #[error("invalid timeline: {0}")]
    Timeline(#[from] ModelError),
}

impl ExtractError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::ParticipantNotFound { reason: reason.into() }
    }

    pub fn incomplete(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IncompleteTimingData { field: field.into(), reason: reason.into() }
    }
}

#[derive(Error, Debug)]
#[error("could not find relevant data for race number {race_number}")]
pub struct ExtractionFailed {
    pub race_number: u32,
    #[source]
    pub cause: ExtractError,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown location `{0}` (use --list-locations)")]
    UnknownLocation(String),

    #[error("could not read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid race number list `{0}`")]
    RaceNumbers(String),
}
