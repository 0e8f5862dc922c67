// src/export.rs
//! Ranking table: the registry flattened into rows for printing or CSV/TSV export.

use crate::error::ModelError;
use crate::model::{format_duration, format_gap, Participant, Registry, LEG_COUNT};

pub const HEADERS: [&str; 9] = [
    "Rank", "Name", "Race No", "Leg 1", "Leg 2", "Leg 3", "Leg 4", "Total", "Gap",
];

pub struct RankingTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row per participant in rank order. Durations use the short human form;
/// the gap column is blank for whoever matches the fastest total.
pub fn ranking_table(registry: &Registry) -> Result<RankingTable, ModelError> {
    let mut rows = Vec::with_capacity(registry.len());
    for (rank, p) in registry.ranking() {
        let mut row = Vec::with_capacity(HEADERS.len());
        row.push(rank.to_string());
        row.push(s!(p.display_name()));
        row.push(p.race_number().to_string());
        for leg in 1..=LEG_COUNT {
            row.push(short(p.leg_duration(leg)?));
        }
        row.push(short(p.total_duration()?));
        let gap = registry.gap_to_best(p, Participant::total_duration)?;
        row.push(if gap == 0 { s!() } else { format_gap(gap) });
        rows.push(row);
    }
    Ok(RankingTable {
        headers: HEADERS.iter().map(|h| s!(*h)).collect(),
        rows,
    })
}

fn short(seconds: u32) -> String {
    s!(format_duration(seconds).trim_start())
}

/// Fixed-width text rendering for the terminal. Names follow the registry's
/// short/full name choice; each leg shows its gap to that leg's fastest time.
pub fn render_text(registry: &Registry) -> Result<String, ModelError> {
    let mut out = String::new();
    if registry.is_empty() {
        return Ok(out);
    }

    let name_w = registry
        .iter()
        .map(|p| registry.display_name_for(p).chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    out.push_str(&format!("{:>4}  {:<name_w$}  {:>7}", "Rank", "Name", "No"));
    for leg in 1..=LEG_COUNT {
        out.push_str(&format!("  {:>18}", format!("Leg {leg}")));
    }
    out.push_str(&format!("  {:>18}\n", "Total"));

    for (rank, p) in registry.ranking() {
        out.push_str(&format!(
            "{:>4}  {:<name_w$}  {:>7}",
            rank,
            registry.display_name_for(p),
            p.race_number()
        ));
        for leg in 1..=LEG_COUNT {
            let time = p.leg_duration(leg)?;
            let gap = registry.gap_to_best(p, |q| q.leg_duration(leg))?;
            out.push_str(&format!("  {:>18}", with_gap(time, gap)));
        }
        let gap = registry.gap_to_best(p, Participant::total_duration)?;
        out.push_str(&format!("  {:>18}\n", with_gap(p.total_duration()?, gap)));
    }
    Ok(out)
}

fn with_gap(time: u32, gap: u32) -> String {
    if gap == 0 {
        short(time)
    } else {
        format!("{} ({})", short(time), format_gap(gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimePoint;

    fn hiker(name: &str, number: u32, times: [&str; 5]) -> Participant {
        Participant::new(name, number, times.map(|t| TimePoint::parse(t).unwrap())).unwrap()
    }

    fn registry() -> Registry {
        Registry::new(vec![
            hiker("Jo Bloggs", 643, ["08:00:00", "09:15:30", "10:40:00", "12:05:10", "13:30:00"]),
            hiker("Sam Stride", 644, ["08:00:00", "09:10:00", "10:35:00", "12:00:00", "13:20:00"]),
        ])
    }

    #[test]
    fn table_rows_in_rank_order() {
        let table = ranking_table(&registry()).unwrap();
        assert_eq!(table.headers.len(), 9);
        assert_eq!(
            table.rows[0],
            vec!["1", "Sam Stride", "644", "1:10:00", "1:25:00", "1:25:00", "1:20:00", "5:20:00", ""]
        );
        assert_eq!(table.rows[1][0], "2");
        assert_eq!(table.rows[1][3], "1:15:30");
        assert_eq!(table.rows[1][8], "+10:00");
    }

    #[test]
    fn text_uses_short_names_and_leg_gaps() {
        let text = render_text(&registry()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Sam"));
        assert!(!lines[1].contains("Stride"));
        assert!(lines[2].contains("1:15:30 (+5:30)"));
        assert!(lines[2].contains("5:30:00 (+10:00)"));
    }

    #[test]
    fn empty_registry_renders_nothing() {
        let reg = Registry::new(Vec::new());
        assert!(ranking_table(&reg).unwrap().rows.is_empty());
        assert_eq!(render_text(&reg).unwrap(), "");
    }
}
