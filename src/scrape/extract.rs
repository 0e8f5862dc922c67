// src/scrape/extract.rs
use tracing::{debug, info};

use crate::config::location::HikeLocation;
use crate::core::net::{detail_url, search_url, PageFetcher};
use crate::error::{ExtractError, ExtractionFailed};
use crate::model::Participant;
use crate::specs::{search, splits};

/// Turns one race number into a [`Participant`] with two page fetches:
/// the search page to find the entrant, then their result page for split times.
pub struct Extractor<F> {
    fetcher: F,
    base_url: String,
}

impl<F: PageFetcher> Extractor<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self { fetcher, base_url: base_url.into() }
    }

    /// All-or-nothing: any fetch, lookup or timing problem fails the race number.
    pub fn extract(&self, location: HikeLocation, race_number: u32) -> Result<Participant, ExtractionFailed> {
        self.locate_and_parse(location, race_number)
            .map_err(|cause| ExtractionFailed { race_number, cause })
    }

    fn locate_and_parse(&self, location: HikeLocation, race_number: u32) -> Result<Participant, ExtractError> {
        let search_doc = self.fetcher.fetch(&search_url(&self.base_url, location, race_number))?;
        let hit = search::parse_doc(&search_doc, race_number)?;
        debug!(race_number, name = %hit.name, href = %hit.href, "located entrant");

        let result_doc = self.fetcher.fetch(&detail_url(&self.base_url, &hit.href))?;
        let fields = splits::parse_doc(&result_doc)?;
        let times = splits::checkpoint_times(&fields)?;

        let participant = Participant::new(hit.name, race_number, times)?;
        info!(
            "Successfully parsed data for race number `{}` -> {}.",
            race_number,
            participant.display_name()
        );
        Ok(participant)
    }
}
