// src/scrape/batch.rs
use tracing::{info, warn};

use crate::config::location::HikeLocation;
use crate::config::options::FailurePolicy;
use crate::core::net::PageFetcher;
use crate::error::ExtractionFailed;
use crate::model::{Participant, Registry};
use crate::progress::Progress;

use super::extract::Extractor;

/// Result of a batch run. `failures` is only ever non-empty under
/// [`FailurePolicy::CollectAll`].
#[derive(Debug)]
pub struct BatchOutcome {
    pub registry: Registry,
    pub failures: Vec<ExtractionFailed>,
}

/// Resolve race numbers one after another into a ranked [`Registry`].
///
/// Under [`FailurePolicy::FailFast`] the first failure is returned and nothing else
/// is kept. Under [`FailurePolicy::CollectAll`] failures are reported next to the
/// registry of everyone who did resolve.
pub fn resolve<F: PageFetcher>(
    extractor: &Extractor<F>,
    location: HikeLocation,
    race_numbers: &[u32],
    policy: FailurePolicy,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BatchOutcome, ExtractionFailed> {
    info!(%location, count = race_numbers.len(), ?policy, "resolving race numbers");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(race_numbers.len());
    }

    let mut people: Vec<Participant> = Vec::with_capacity(race_numbers.len());
    let mut failures: Vec<ExtractionFailed> = Vec::new();

    for &race_number in race_numbers {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Looking up race number {race_number}…"));
        }
        match extractor.extract(location, race_number) {
            Ok(person) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(race_number, person.display_name());
                }
                people.push(person);
            }
            Err(failed) => {
                let reason = failed.cause.to_string();
                warn!(race_number, %reason, "extraction failed");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(race_number, &reason);
                }
                match policy {
                    FailurePolicy::FailFast => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.finish();
                        }
                        return Err(failed);
                    }
                    FailurePolicy::CollectAll => failures.push(failed),
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(BatchOutcome { registry: Registry::new(people), failures })
}
