// src/model/registry.rs
use std::collections::HashSet;

use crate::error::ModelError;
use super::participant::Participant;

/// Ranked participants of one batch run, fastest total first.
///
/// Order is fixed when the registry is built; mutating a participant afterwards
/// does not re-rank it.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    participants: Vec<Participant>,
    use_short_names: bool,
}

impl Registry {
    pub fn new(mut participants: Vec<Participant>) -> Self {
        // Stable: equal totals keep input order. A total that cannot be computed ranks last.
        participants.sort_by_key(|p| p.total_duration().unwrap_or(u32::MAX));

        let names: HashSet<&str> = participants.iter().map(Participant::display_name).collect();
        let use_short_names = names.len() == participants.len();

        Self { participants, use_short_names }
    }

    /// True iff every display name is unique.
    pub fn use_short_names(&self) -> bool {
        self.use_short_names
    }

    pub fn display_name_for<'a>(&self, participant: &'a Participant) -> &'a str {
        if self.use_short_names {
            participant.first_name()
        } else {
            participant.display_name()
        }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    /// `(rank, participant)` in registry order, ranks 1.. with no ties.
    /// Cloning the iterator restarts from the same position.
    pub fn ranking(&self) -> impl Iterator<Item = (usize, &Participant)> + Clone + '_ {
        self.participants.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// Smallest value of `selector` across all participants.
    pub fn best<F>(&self, selector: F) -> Result<u32, ModelError>
    where
        F: Fn(&Participant) -> Result<u32, ModelError>,
    {
        let mut best: Option<u32> = None;
        for p in &self.participants {
            let v = selector(p)?;
            best = Some(best.map_or(v, |b| b.min(v)));
        }
        best.ok_or(ModelError::EmptyRegistry)
    }

    /// How far `participant` is behind the best value of `selector`.
    pub fn gap_to_best<F>(&self, participant: &Participant, selector: F) -> Result<u32, ModelError>
    where
        F: Fn(&Participant) -> Result<u32, ModelError>,
    {
        let best = self.best(&selector)?;
        Ok(selector(participant)?.saturating_sub(best))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::time::TimePoint;

    fn hiker(name: &str, number: u32, finish: &str) -> Participant {
        let tp = |s: &str| TimePoint::parse(s).unwrap();
        Participant::new(
            name,
            number,
            [tp("08:00:00"), tp("09:00:00"), tp("10:00:00"), tp("11:00:00"), tp(finish)],
        )
        .unwrap()
    }

    #[test]
    fn sorts_fastest_first_and_keeps_tie_order() {
        let reg = Registry::new(vec![
            hiker("Slow Sam", 1, "14:00:00"),
            hiker("Tie First", 2, "13:00:00"),
            hiker("Fast Fay", 3, "12:30:00"),
            hiker("Tie Second", 4, "13:00:00"),
        ]);
        let order: Vec<u32> = reg.iter().map(Participant::race_number).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);

        let totals: Vec<u32> = reg.iter().map(|p| p.total_duration().unwrap()).collect();
        assert!(totals.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ranking_is_ordinal_and_restartable() {
        let reg = Registry::new(vec![
            hiker("A One", 10, "13:00:00"),
            hiker("B Two", 11, "13:00:00"),
            hiker("C Three", 12, "12:00:00"),
        ]);
        let ranking = reg.ranking();
        let first: Vec<(usize, u32)> = ranking.clone().map(|(r, p)| (r, p.race_number())).collect();
        assert_eq!(first, vec![(1, 12), (2, 10), (3, 11)]);
        let again: Vec<usize> = ranking.map(|(r, _)| r).collect();
        assert_eq!(again, vec![1, 2, 3]);
    }

    #[test]
    fn short_names_when_unique() {
        let reg = Registry::new(vec![hiker("Alex Smith", 1, "13:00:00"), hiker("Sam Jones", 2, "13:10:00")]);
        assert!(reg.use_short_names());
        assert_eq!(reg.display_name_for(&reg.participants()[0]), "Alex");
    }

    #[test]
    fn full_names_on_collision() {
        let reg = Registry::new(vec![hiker("Alex Smith", 1, "13:00:00"), hiker("Alex Smith", 2, "13:10:00")]);
        assert!(!reg.use_short_names());
        for p in &reg {
            assert_eq!(reg.display_name_for(p), "Alex Smith");
        }
    }

    #[test]
    fn best_on_empty_registry() {
        let reg = Registry::new(Vec::new());
        assert!(reg.is_empty());
        assert_eq!(reg.best(Participant::total_duration), Err(ModelError::EmptyRegistry));
    }

    #[test]
    fn best_and_gap() {
        let reg = Registry::new(vec![hiker("A A", 1, "13:30:00"), hiker("B B", 2, "13:20:00")]);
        assert_eq!(reg.best(Participant::total_duration), Ok(5 * 3600 + 20 * 60));
        assert_eq!(reg.best(|p| p.leg_duration(1)), Ok(3600));

        let slow = &reg.participants()[1];
        assert_eq!(reg.gap_to_best(slow, Participant::total_duration), Ok(600));
        assert_eq!(reg.best(|p| p.leg_duration(9)), Err(ModelError::InvalidLegNumber(9)));
    }
}
