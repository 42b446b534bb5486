//! Best-title selection by weighted multi-criteria voting.
//!
//! Each heuristic independently selects the titles it judges best by its own
//! criterion; every selected title receives the heuristic's full weight
//! (ties within one heuristic are deliberate, not an error). The titles
//! whose total score equals the maximum are returned together, in original
//! order. Callers that need a single title among ties must apply their own
//! secondary rule.

use crate::model::{Disc, Title};
use crate::utils::maximums;

type Select = for<'a> fn(&'a Disc) -> Vec<&'a Title>;

/// One independent title-selection criterion paired with a vote weight.
pub struct Heuristic {
    pub name: &'static str,
    pub weight: i64,
    select: Select,
}

impl Heuristic {
    pub fn new(name: &'static str, weight: i64, select: Select) -> Self {
        Heuristic {
            name,
            weight,
            select,
        }
    }

    /// Applies the criterion to a disc.
    pub fn select<'a>(&self, disc: &'a Disc) -> Vec<&'a Title> {
        (self.select)(disc)
    }
}

/// Returns the standard heuristics with their default weights. Longest
/// duration dominates; angle one, chapter count, and stream count break
/// ties between otherwise-equal candidates.
pub fn default_heuristics() -> Vec<Heuristic> {
    vec![
        Heuristic::new("longest", 1000, |d| d.titles_with_longest_duration()),
        Heuristic::new("angle-one", 300, |d| d.titles_with_angle(1)),
        Heuristic::new("most-chapters", 200, |d| d.titles_with_most_chapters()),
        Heuristic::new("most-streams", 100, |d| d.titles_with_most_streams()),
    ]
}

/// Scores every title by weighted voting across the given heuristics and
/// returns the set of titles tied at the maximum score, in original order.
///
/// A disc where no heuristic matched anything returns every title tied at
/// zero; an empty disc returns an empty set.
pub fn find_best_titles<'a>(disc: &'a Disc, heuristics: &[Heuristic]) -> Vec<&'a Title> {
    let mut scores = vec![0i64; disc.titles.len()];
    for heuristic in heuristics {
        for title in heuristic.select(disc) {
            scores[title.index] += heuristic.weight;
        }
    }
    log::debug!("scored titles: {scores:?}");

    maximums(&disc.titles, |title| Some(scores[title.index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Attr, Attribute};

    fn push_attr(title: &mut Title, attr: Attr, value: &str) {
        title.info.push(Attribute {
            id: attr.id(),
            code: 0,
            value: value.to_string(),
        });
    }

    #[test]
    fn test_weighted_voting_breaks_duration_tie() {
        // A and B tie on duration; only A wins the chapters vote.
        let mut disc = Disc::default();
        push_attr(disc.title_mut(0), Attr::Duration, "1:00:00");
        push_attr(disc.title_mut(0), Attr::ChapterCount, "10");
        push_attr(disc.title_mut(1), Attr::Duration, "1:00:00");
        push_attr(disc.title_mut(1), Attr::ChapterCount, "5");

        let heuristics = vec![
            Heuristic::new("longest", 1000, |d| d.titles_with_longest_duration()),
            Heuristic::new("most-chapters", 200, |d| d.titles_with_most_chapters()),
        ];

        let best = find_best_titles(&disc, &heuristics);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].index, 0);
    }

    #[test]
    fn test_all_tie_returns_all_in_order() {
        let mut disc = Disc::default();
        for i in 0..3 {
            push_attr(disc.title_mut(i), Attr::Duration, "1:00:00");
            push_attr(disc.title_mut(i), Attr::ChapterCount, "8");
            push_attr(disc.title_mut(i), Attr::AngleInfo, "1");
            disc.title_mut(i).stream_mut(2);
        }

        let best = find_best_titles(&disc, &default_heuristics());
        let indices: Vec<usize> = best.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_no_matches_returns_all_at_zero() {
        let mut disc = Disc::default();
        disc.title_mut(1);

        let heuristics = vec![Heuristic::new("angle-one", 300, |d| d.titles_with_angle(1))];
        let best = find_best_titles(&disc, &heuristics);
        assert_eq!(best.len(), 2);
    }

    #[test]
    fn test_empty_disc() {
        let disc = Disc::default();
        assert!(find_best_titles(&disc, &default_heuristics()).is_empty());
    }
}
