// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://results.resultsbase.net/";
pub const COMPETITION_ID: u32 = 8; // `CId` for the Mighty Hike series
pub const USER_AGENT: &str = concat!("hike_splits/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Page structure
pub const SEARCH_GRID_ID: &str = "ctl00_Content_Main_grdSearch";
pub const SPLIT_GRID_ID: &str = "ctl00_Content_Main_divSplitGrid";

// CLI
/// Upper bound on race numbers accepted from one `--ids` list.
pub const MAX_RACE_NUMBERS: usize = 5000;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "hike_splits.toml";

// Export
pub const DEFAULT_FILE: &str = "splits";
