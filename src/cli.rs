// src/cli.rs
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};

use crate::config::consts::{MAX_RACE_NUMBERS, SETTINGS_FILE};
use crate::config::location::HikeLocation;
use crate::config::options::{AppOptions, ExportFormat, FailurePolicy};
use crate::config::settings::Settings;
use crate::core::net::HttpFetcher;
use crate::error::ConfigError;
use crate::export::{ranking_table, render_text};
use crate::progress::Progress;
use crate::scrape::{resolve, Extractor};

#[derive(Parser, Debug, Default)]
#[command(name = "hike_splits", version, about = "Fetch Mighty Hike split times and rank hikers")]
pub struct Args {
    /// Race numbers to look up
    pub race_numbers: Vec<u32>,

    /// Location id or name (see --list-locations)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Race numbers as a list with ranges, e.g. `640-645,700`
    #[arg(long, value_name = "LIST")]
    pub ids: Option<String>,

    /// Keep going past failed race numbers and rank whoever resolved
    #[arg(long)]
    pub collect_all: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Export file (or directory ending in a separator)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Leave the header line out of the export
    #[arg(long)]
    pub no_headers: bool,

    /// Print known locations and exit
    #[arg(long)]
    pub list_locations: bool,

    /// Settings file [default: hike_splits.toml, if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    if args.list_locations {
        println!("Mighty Hike locations:\n");
        for loc in HikeLocation::all() {
            println!("{} : {}", loc.id(), loc.name());
        }
        return Ok(());
    }

    let opts = build_options(&args)?;
    let Some(location) = opts.resolve.location else {
        bail!("no location given (use --location, see --list-locations)");
    };
    if opts.resolve.race_numbers.is_empty() {
        bail!("no race numbers given");
    }

    crate::log::init();

    let fetcher = HttpFetcher::new(&opts.fetch)?;
    let extractor = Extractor::new(fetcher, opts.fetch.base_url.as_str());
    let mut progress = ConsoleProgress;
    let outcome = resolve(
        &extractor,
        location,
        &opts.resolve.race_numbers,
        opts.resolve.policy,
        Some(&mut progress),
    )?;

    println!("\n{location}\n");
    print!("{}", render_text(&outcome.registry)?);

    if !outcome.failures.is_empty() {
        eprintln!("\n{} race number(s) could not be resolved:", outcome.failures.len());
        for failed in &outcome.failures {
            eprintln!("  {}: {}", failed.race_number, failed.cause);
        }
    }

    let table = ranking_table(&outcome.registry)?;
    if let Some(path) = crate::file::write_export(&opts.export, &table).wrap_err("writing export")? {
        println!("\nWrote {}", path.display());
    }
    Ok(())
}

/// Defaults, then the settings file, then command-line flags.
pub fn build_options(args: &Args) -> Result<AppOptions, ConfigError> {
    let mut opts = AppOptions::default();

    let settings = match &args.config {
        Some(path) => Some(Settings::load(path)?.ok_or_else(|| ConfigError::Read {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "settings file not found"),
        })?),
        None => Settings::load(&PathBuf::from(SETTINGS_FILE))?,
    };
    if let Some(settings) = settings {
        settings.apply(&mut opts)?;
    }

    if let Some(loc) = &args.location {
        opts.resolve.location = Some(loc.parse()?);
    }

    let mut numbers = args.race_numbers.clone();
    if let Some(list) = &args.ids {
        numbers.extend(parse_ids_list(list)?);
    }
    if !numbers.is_empty() {
        opts.resolve.race_numbers = numbers;
    }

    if args.collect_all {
        opts.resolve.policy = FailurePolicy::CollectAll;
    }
    if let Some(secs) = args.timeout {
        opts.fetch.timeout = Duration::from_secs(secs);
    }
    if let Some(out) = &args.out {
        opts.export.out = Some(out.clone());
    }
    if let Some(format) = args.format {
        opts.export.format = format;
    }
    if args.no_headers {
        opts.export.include_headers = false;
    }
    Ok(opts)
}

/// `"640-642, 700"` → `[640, 641, 642, 700]`. Input order kept, duplicates dropped.
/// At most [`MAX_RACE_NUMBERS`] numbers per list.
pub fn parse_ids_list(s: &str) -> Result<Vec<u32>, ConfigError> {
    let bad = || ConfigError::RaceNumbers(s.to_string());
    let mut out: Vec<u32> = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let (a, b) = match part.split_once('-') {
            Some((a, b)) => (
                a.trim().parse::<u32>().map_err(|_| bad())?,
                b.trim().parse::<u32>().map_err(|_| bad())?,
            ),
            None => {
                let v = part.parse::<u32>().map_err(|_| bad())?;
                (v, v)
            }
        };
        if a > b || (b - a) as usize >= MAX_RACE_NUMBERS { return Err(bad()); }
        for v in a..=b {
            if seen.insert(v) { out.push(v); }
        }
        if out.len() > MAX_RACE_NUMBERS { return Err(bad()); }
    }
    Ok(out)
}

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Resolving {total} race number(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, race_number: u32, name: &str) {
        eprintln!("  Successfully parsed data for race number `{race_number}` -> {name}.");
    }
    fn item_failed(&mut self, race_number: u32, reason: &str) {
        eprintln!("  Could not find relevant data for race number `{race_number}`: {reason}");
    }
}
