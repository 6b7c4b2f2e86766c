//! In-memory reference corpus
//!
//! Holds the composition records and answers fuzzy name searches over them.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

use crate::models::RawCompositionRecord;
use crate::nutrition::{CompositionResult, ReferenceLookup};

/// Default number of candidates returned by a lookup
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Minimum normalized Levenshtein similarity for a fuzzy hit
pub const FUZZY_THRESHOLD: f64 = 0.8;

const EXACT: f64 = 4.0;
const PREFIX: f64 = 3.0;
const SUBSTRING: f64 = 2.0;

/// Composition records keyed by name, searchable by approximate name
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    records: Vec<RawCompositionRecord>,
    folded_names: Vec<String>,
    search_limit: usize,
}

impl ReferenceCorpus {
    pub fn new(records: Vec<RawCompositionRecord>) -> Self {
        let folded_names = records.iter().map(|r| r.name.trim().to_lowercase()).collect();
        Self {
            records,
            folded_names,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Set the maximum number of candidates returned by [`ReferenceLookup::lookup`]
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit.max(1);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RawCompositionRecord] {
        &self.records
    }

    /// Search records by name, best match first
    ///
    /// Ranking: exact name, then prefix, then substring, then names where a word
    /// (or the whole name) is similar to the query. Ties prefer shorter names,
    /// then corpus order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&RawCompositionRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<(f64, usize)> = self
            .folded_names
            .iter()
            .enumerate()
            .filter_map(|(idx, name)| score(name, &query).map(|s| (s, idx)))
            .collect();

        hits.sort_by(|(sa, ia), (sb, ib)| {
            sb.total_cmp(sa)
                .then_with(|| self.name_len(*ia).cmp(&self.name_len(*ib)))
                .then(ia.cmp(ib))
        });

        hits.into_iter()
            .take(limit)
            .map(|(_, idx)| &self.records[idx])
            .collect()
    }

    fn name_len(&self, idx: usize) -> usize {
        self.folded_names[idx].chars().count()
    }
}

impl Default for ReferenceCorpus {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReferenceLookup for ReferenceCorpus {
    fn lookup(&self, name: &str) -> CompositionResult<Vec<&RawCompositionRecord>> {
        Ok(self.search(name, self.search_limit))
    }
}

fn score(name: &str, query: &str) -> Option<f64> {
    if name == query {
        return Some(EXACT);
    }
    if name.starts_with(query) {
        return Some(PREFIX);
    }
    if name.contains(query) {
        return Some(SUBSTRING);
    }

    let best = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|word| normalized_levenshtein(word, query))
        .chain(std::iter::once(normalized_levenshtein(name, query)))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))?;

    (best >= FUZZY_THRESHOLD).then_some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> ReferenceCorpus {
        ReferenceCorpus::new(vec![
            RawCompositionRecord::new("Banana chips"),
            RawCompositionRecord::new("Banana"),
            RawCompositionRecord::new("Rice, raw, milled"),
            RawCompositionRecord::new("Rice flakes"),
            RawCompositionRecord::new("Wild rice"),
            RawCompositionRecord::new("Tomato, ripe"),
        ])
    }

    fn names<'a>(records: &[&'a RawCompositionRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_exact_match_first() {
        let corpus = corpus();
        let hits = corpus.search("banana", 10);
        assert_eq!(names(&hits), vec!["Banana", "Banana chips"]);
    }

    #[test]
    fn test_prefix_before_substring() {
        let corpus = corpus();
        let hits = corpus.search("Rice", 10);
        assert_eq!(names(&hits), vec!["Rice flakes", "Rice, raw, milled", "Wild rice"]);
    }

    #[test]
    fn test_typo_finds_similar_name() {
        let corpus = corpus();
        let hits = corpus.search("Bannana", 10);
        assert_eq!(hits.first().map(|r| r.name.as_str()), Some("Banana"));
    }

    #[test]
    fn test_no_match() {
        let corpus = corpus();
        assert!(corpus.search("Xyzzy", 10).is_empty());
        assert!(corpus.search("   ", 10).is_empty());
    }

    #[test]
    fn test_limit() {
        let corpus = corpus();
        assert_eq!(corpus.search("rice", 1).len(), 1);
        let limited = corpus.clone().with_search_limit(2);
        assert_eq!(limited.lookup("rice").unwrap().len(), 2);
    }
}
