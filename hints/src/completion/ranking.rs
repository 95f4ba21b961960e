//! Ranks candidates against the query and splits them into highlight ranges.
//! Candidates with no match are dropped.

use std::cmp::Reverse;

use crate::completion::matchers::{MatchClass, match_label};
use crate::completion::{Candidate, HighlightRange, MatchRecord};

/// Total order over match records; smaller sorts first.
///
/// Priority: match class (exact, prefix, substring, subsequence), then the class's own
/// metrics, then candidate registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    class: u8,
    gap_sum: usize,
    max_run: Reverse<usize>,
    first_pos: usize,
    label_len: usize,
    registration: usize,
}

impl RankKey {
    fn new(class: MatchClass, registration: usize) -> Self {
        let base = RankKey {
            class: class.rank(),
            gap_sum: 0,
            max_run: Reverse(0),
            first_pos: 0,
            label_len: 0,
            registration,
        };
        match class {
            MatchClass::Exact | MatchClass::Prefix => base,
            MatchClass::Contains { pos } => RankKey {
                first_pos: pos,
                ..base
            },
            MatchClass::Fuzzy(score) => RankKey {
                gap_sum: score.gap_sum,
                max_run: Reverse(score.max_run),
                first_pos: score.first_pos,
                label_len: score.label_len,
                ..base
            },
        }
    }

    /// Position of the candidate in the unranked list.
    pub fn registration(&self) -> usize {
        self.registration
    }
}

/// Matches, ranks and annotates `candidates` against `query`.
pub(crate) fn rank_candidates(
    query: &str,
    candidates: Vec<Candidate>,
    fuzzy: bool,
) -> Vec<MatchRecord> {
    let mut records: Vec<MatchRecord> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(idx, candidate)| {
            let matched = match_label(query, &candidate.raw_text, fuzzy)?;
            Some(MatchRecord {
                ranges_for_highlight: highlight_ranges(&candidate.raw_text, &matched.positions),
                rank_key: RankKey::new(matched.class, idx),
                candidate,
            })
        })
        .collect();

    records.sort_by_key(|record| record.rank_key);
    records
}

/// Splits `text` into alternating matched/unmatched runs. `positions` are ascending char
/// indices.
fn highlight_ranges(text: &str, positions: &[usize]) -> Vec<HighlightRange> {
    let mut ranges: Vec<HighlightRange> = Vec::new();
    let mut next = positions.iter().peekable();

    for (idx, c) in text.chars().enumerate() {
        let matched = next.next_if(|&&pos| pos == idx).is_some();
        match ranges.last_mut() {
            Some(last) if last.matched == matched => last.text.push(c),
            _ => ranges.push(HighlightRange {
                text: c.to_string(),
                matched,
            }),
        }
    }
    ranges
}
