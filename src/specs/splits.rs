// src/specs/splits.rs
//! Scraping *spec* for an entrant's result page.
//!
//! Split times live in the first table under `div#ctl00_Content_Main_divSplitGrid`.
//! Row 0 is the header; every following row starts with `(label, time of day)`:
//!
//! ```text
//! | Start     | 08:00:00 | ...
//! | Pitstop 1 | 09:15:30 | ...
//! | ...       |          |
//! | Finish    | 13:30:00 | ...
//! ```
//!
//! Labels are normalized (`"Pitstop 1"` → `pitstop_1`). Only the five checkpoint keys
//! are used; anything else on the page is ignored.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::consts::SPLIT_GRID_ID;
use crate::core::html::{cell_text, table_after_id, tag_blocks};
use crate::core::sanitize::canonical_label;
use crate::error::ExtractError;
use crate::model::{Checkpoint, TimePoint};

/// Normalized label → raw cell text, as found on the page.
pub type RawSplits = BTreeMap<String, String>;

pub fn parse_doc(doc: &str) -> Result<RawSplits, ExtractError> {
    let table = table_after_id(doc, SPLIT_GRID_ID)
        .ok_or_else(|| ExtractError::incomplete("splits", "split table missing"))?;

    let mut fields = RawSplits::new();
    for tr in tag_blocks(table, "<tr", "</tr>").into_iter().skip(1) {
        let cells = tag_blocks(tr, "<td", "</td>");
        let [label, value, ..] = cells.as_slice() else {
            debug!(row = %cell_text(tr), "skipping split row with fewer than two cells");
            continue;
        };
        let key = canonical_label(&cell_text(label));
        if key.is_empty() {
            continue;
        }
        // Later rows win, like a plain key/value assembly.
        fields.insert(key, cell_text(value));
    }
    Ok(fields)
}

/// The five checkpoint times, in race order, or the first field that is missing
/// or not a `HH:MM:SS` time.
pub fn checkpoint_times(fields: &RawSplits) -> Result<[TimePoint; 5], ExtractError> {
    for key in fields.keys() {
        if Checkpoint::from_key(key).is_none() {
            debug!(label = %key, "ignoring split label");
        }
    }

    let mut times = Vec::with_capacity(Checkpoint::ALL.len());
    for checkpoint in Checkpoint::ALL {
        let key = checkpoint.key();
        let raw = fields
            .get(key)
            .ok_or_else(|| ExtractError::incomplete(key, "row missing"))?;
        let time = TimePoint::parse(raw)
            .map_err(|e| ExtractError::incomplete(key, e.to_string()))?;
        times.push(time);
    }
    // Exactly five pushed above.
    times
        .try_into()
        .map_err(|_| ExtractError::incomplete("splits", "wrong number of checkpoints"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body>
            <div id="ctl00_Content_Main_divSplitGrid" class="splits">
              <table cellspacing="0" rules="all" border="1">
                <tr><th>Split</th><th>Time of Day</th><th>Split Time</th></tr>
                {rows}
              </table>
            </div></body></html>"#
        )
    }

    const FULL: &str = r#"
        <tr><td>Start</td><td>08:00:00</td><td>00:00:00</td></tr>
        <tr><td>Pitstop 1</td><td>09:15:30</td><td>01:15:30</td></tr>
        <tr><td>Pitstop 2</td><td>10:40:00</td><td>02:40:00</td></tr>
        <tr><td>Pitstop 3</td><td>12:05:10</td><td>04:05:10</td></tr>
        <tr><td>Finish</td><td>13:30:00</td><td>05:30:00</td></tr>"#;

    #[test]
    fn reads_all_rows() {
        let fields = parse_doc(&page(FULL)).unwrap();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields["pitstop_1"], "09:15:30");
        let times = checkpoint_times(&fields).unwrap();
        assert_eq!(times[0].to_string(), "08:00:00");
        assert_eq!(times[4].to_string(), "13:30:00");
    }

    #[test]
    fn header_row_is_skipped_even_with_td() {
        let doc = page(&FULL.replace(
            "<tr><td>Start</td>",
            "<tr><td>Label</td><td>Value</td></tr><tr><td>Start</td>",
        ))
        .replace("<tr><th>Split</th><th>Time of Day</th><th>Split Time</th></tr>", "");
        let fields = parse_doc(&doc).unwrap();
        assert!(!fields.contains_key("label"));
        assert!(checkpoint_times(&fields).is_ok());
    }

    #[test]
    fn extra_labels_are_ignored() {
        let doc = page(&format!("{FULL}<tr><td>Chip Time</td><td>05:29:58</td></tr><tr><td>x</td></tr>"));
        let fields = parse_doc(&doc).unwrap();
        assert_eq!(fields["chip_time"], "05:29:58");
        assert!(checkpoint_times(&fields).is_ok());
    }

    #[test]
    fn missing_finish() {
        let doc = page(&FULL.replace("<tr><td>Finish</td><td>13:30:00</td><td>05:30:00</td></tr>", ""));
        let err = checkpoint_times(&parse_doc(&doc).unwrap()).unwrap_err();
        match err {
            ExtractError::IncompleteTimingData { field, .. } => assert_eq!(field, "finish"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unparseable_time() {
        let doc = page(&FULL.replace("12:05:10", "DNF"));
        let err = checkpoint_times(&parse_doc(&doc).unwrap()).unwrap_err();
        assert!(err.to_string().contains("pitstop_3"));
        assert!(err.to_string().contains("DNF"));
    }

    #[test]
    fn leap_second_is_not_a_time_of_day() {
        let doc = page(&FULL.replace("10:40:00", "10:40:60"));
        match checkpoint_times(&parse_doc(&doc).unwrap()).unwrap_err() {
            ExtractError::IncompleteTimingData { field, reason } => {
                assert_eq!(field, "pitstop_2");
                assert!(reason.contains("10:40:60"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_container() {
        let err = parse_doc("<html><table><tr><td>Start</td><td>08:00:00</td></tr></table></html>").unwrap_err();
        assert!(matches!(err, ExtractError::IncompleteTimingData { .. }));
    }
}
