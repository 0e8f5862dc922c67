// src/specs/search.rs
//! Scraping *spec* for the search page (`Search.aspx?CId=…&RId=…&S=<race number>`).
//!
//! The page holds one ASP.NET grid, `table#ctl00_Content_Main_grdSearch`. Each data row
//! carries the entrant's name as an anchor to their result page and the race number
//! in a plain cell. Header and pager rows are skipped (no anchor / postback anchors).
//! A pager at the top of the grid nests its own `<table>`; the grid block still runs
//! to the grid's own closing tag.

use tracing::debug;

use crate::config::consts::SEARCH_GRID_ID;
use crate::core::html::{attr_value, block_with_id, cell_text, tag_blocks};
use crate::core::sanitize::normalize_entities;
use crate::error::ExtractError;

/// The row picked out for one race number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    /// Relative link to the result page, entities decoded.
    pub href: String,
}

struct Candidate {
    hit: SearchHit,
    cells: Vec<String>,
}

/// Pick the unique entrant with `race_number` out of a search page.
///
/// If no row shows the number in a cell but exactly one entrant row exists, that
/// row is taken: the site already filtered the search by number.
pub fn parse_doc(doc: &str, race_number: u32) -> Result<SearchHit, ExtractError> {
    let table = block_with_id(doc, SEARCH_GRID_ID)
        .ok_or_else(|| ExtractError::not_found("search results table missing"))?;

    let mut candidates: Vec<Candidate> = tag_blocks(table, "<tr", "</tr>")
        .into_iter()
        .filter_map(read_row)
        .collect();

    if candidates.is_empty() {
        return Err(ExtractError::not_found(format!("no entrants listed for race number {race_number}")));
    }

    let wanted = race_number.to_string();
    let total = candidates.len();
    let mut exact: Vec<SearchHit> = candidates
        .iter()
        .filter(|c| c.cells.iter().any(|cell| *cell == wanted))
        .map(|c| c.hit.clone())
        .collect();

    match (exact.len(), total) {
        (1, _) => Ok(exact.swap_remove(0)),
        (0, 1) => {
            debug!(race_number, "race number not shown in search grid; taking the only row");
            Ok(candidates.swap_remove(0).hit)
        }
        (0, n) => Err(ExtractError::not_found(format!(
            "none of the {n} listed entrants has race number {race_number}"
        ))),
        (n, _) => Err(ExtractError::not_found(format!(
            "{n} entrants match race number {race_number}"
        ))),
    }
}

/// Entrant row → name, link and visible cell texts. `None` for header/pager rows.
fn read_row(tr: &str) -> Option<Candidate> {
    let anchor = tag_blocks(tr, "<a", "</a>").into_iter().find(|a| {
        attr_value(a, "href").is_some_and(|h| !h.trim().is_empty() && !h.starts_with("javascript:"))
    })?;
    let href = normalize_entities(attr_value(anchor, "href")?.trim());
    let name = cell_text(anchor);
    if name.is_empty() {
        return None;
    }
    let cells = tag_blocks(tr, "<td", "</td>").into_iter().map(cell_text).collect();
    Some(Candidate { hit: SearchHit { name, href }, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &str) -> String {
        format!(
            r#"<html><body><form>
            <table class="grid" id="ctl00_Content_Main_grdSearch" cellspacing="0">
              <tr class="header"><th>Pos</th><th>Name</th><th>Race No</th></tr>
              {rows}
              <tr class="pager"><td colspan=3><a href="javascript:__doPostBack('x','Page$2')">2</a></td></tr>
            </table></form></body></html>"#
        )
    }

    #[test]
    fn picks_row_with_race_number() {
        let doc = grid(
            r#"<tr><td>12</td><td><a href="Result.aspx?CId=8&amp;RId=20440&amp;AId=1">Ann Other</a></td><td>1643</td></tr>
               <tr><td>30</td><td><a href="Result.aspx?CId=8&amp;RId=20440&amp;AId=2">Jo Bloggs</a></td><td>643</td></tr>"#,
        );
        let hit = parse_doc(&doc, 643).unwrap();
        assert_eq!(hit.name, "Jo Bloggs");
        assert_eq!(hit.href, "Result.aspx?CId=8&RId=20440&AId=2");
    }

    #[test]
    fn top_pager_with_nested_table() {
        let doc = r#"<table id="ctl00_Content_Main_grdSearch">
              <tr class="pager"><td colspan="3"><table><tr>
                <td><span>1</span></td><td><a href="javascript:__doPostBack('g','Page$2')">2</a></td>
              </tr></table></td></tr>
              <tr><th>Pos</th><th>Name</th><th>Race No</th></tr>
              <tr><td>3</td><td><a href="Result.aspx?AId=9">Jo Bloggs</a></td><td>643</td></tr>
            </table>"#;
        let hit = parse_doc(doc, 643).unwrap();
        assert_eq!(hit.name, "Jo Bloggs");
        assert_eq!(hit.href, "Result.aspx?AId=9");
    }

    #[test]
    fn single_row_without_number_is_accepted() {
        let doc = grid(r#"<tr><td>1</td><td><a href="Result.aspx?AId=7">Solo Walker</a></td><td></td></tr>"#);
        assert_eq!(parse_doc(&doc, 99).unwrap().name, "Solo Walker");
    }

    #[test]
    fn ambiguous_rows_are_rejected() {
        let doc = grid(
            r#"<tr><td><a href="R.aspx?AId=1">A One</a></td><td>5</td></tr>
               <tr><td><a href="R.aspx?AId=2">B Two</a></td><td>5</td></tr>"#,
        );
        let err = parse_doc(&doc, 5).unwrap_err();
        assert!(matches!(err, ExtractError::ParticipantNotFound { .. }));
        assert!(err.to_string().contains("2 entrants"));
    }

    #[test]
    fn no_match_among_several() {
        let doc = grid(
            r#"<tr><td><a href="R.aspx?AId=1">A One</a></td><td>15</td></tr>
               <tr><td><a href="R.aspx?AId=2">B Two</a></td><td>51</td></tr>"#,
        );
        assert!(matches!(parse_doc(&doc, 5), Err(ExtractError::ParticipantNotFound { .. })));
    }

    #[test]
    fn missing_structure() {
        assert!(matches!(
            parse_doc("<html><table><tr><td>x</td></tr></table></html>", 1),
            Err(ExtractError::ParticipantNotFound { .. })
        ));
        // Grid present but only header and pager rows.
        assert!(matches!(parse_doc(&grid(""), 1), Err(ExtractError::ParticipantNotFound { .. })));
    }
}
