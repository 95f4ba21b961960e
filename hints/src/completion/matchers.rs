//! Query matching for completion candidates.
//!
//! Matching is ASCII-case-insensitive and works on `char` indices, so matched positions map
//! straight back onto the candidate text for highlighting.
//!
//! Classes, best first: exact, prefix, substring, subsequence ("fuzzy").

/// Compactness metrics for a subsequence match.
///
/// - `gap_sum`: skipped characters between matched characters (smaller is better).
/// - `max_run`: longest consecutive run of matched characters (larger is better).
/// - `first_pos`: index of the first matched character (smaller is better).
/// - `label_len`: candidate length in chars (mild tie-breaker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FuzzyScore {
    pub(super) gap_sum: usize,
    pub(super) max_run: usize,
    pub(super) first_pos: usize,
    pub(super) label_len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MatchClass {
    Exact,
    Prefix,
    Contains { pos: usize },
    Fuzzy(FuzzyScore),
}

impl MatchClass {
    pub(super) fn rank(self) -> u8 {
        match self {
            MatchClass::Exact => 0,
            MatchClass::Prefix => 1,
            MatchClass::Contains { .. } => 2,
            MatchClass::Fuzzy(_) => 3,
        }
    }
}

/// A successful match: its class and the matched char indices into the label (ascending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Match {
    pub(super) class: MatchClass,
    pub(super) positions: Vec<usize>,
}

fn lower_chars(s: &str) -> Vec<char> {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Matches `query` against `label`. An empty query matches everything as a prefix.
///
/// Returns `None` when the label does not contain the query even as a subsequence,
/// or when only a subsequence match exists and `fuzzy` is off.
pub(super) fn match_label(query: &str, label: &str, fuzzy: bool) -> Option<Match> {
    let query_chars = lower_chars(query);
    let label_chars = lower_chars(label);
    let q_len = query_chars.len();

    if q_len == 0 {
        return Some(Match {
            class: MatchClass::Prefix,
            positions: Vec::new(),
        });
    }
    if label_chars.len() < q_len {
        return None;
    }

    if label_chars == query_chars {
        return Some(Match {
            class: MatchClass::Exact,
            positions: (0..q_len).collect(),
        });
    }
    if label_chars.starts_with(&query_chars) {
        return Some(Match {
            class: MatchClass::Prefix,
            positions: (0..q_len).collect(),
        });
    }
    if let Some(pos) = label_chars
        .windows(q_len)
        .position(|window| window == query_chars.as_slice())
    {
        return Some(Match {
            class: MatchClass::Contains { pos },
            positions: (pos..pos + q_len).collect(),
        });
    }
    if !fuzzy {
        return None;
    }

    let positions = subsequence_positions(&query_chars, &label_chars)?;
    let score = fuzzy_score(&positions, label_chars.len());
    Some(Match {
        class: MatchClass::Fuzzy(score),
        positions,
    })
}

/// Greedy subsequence match: each query char takes its earliest occurrence after the
/// previous match.
fn subsequence_positions(query_chars: &[char], label_chars: &[char]) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(query_chars.len());
    let mut j = 0usize;
    for &qc in query_chars {
        while j < label_chars.len() && label_chars[j] != qc {
            j += 1;
        }
        if j == label_chars.len() {
            return None;
        }
        positions.push(j);
        j += 1;
    }
    Some(positions)
}

fn fuzzy_score(positions: &[usize], label_len: usize) -> FuzzyScore {
    let first_pos = positions.first().copied().unwrap_or(0);

    let mut gap_sum = 0usize;
    let mut max_run = 1usize;
    let mut current_run = 1usize;
    for window in positions.windows(2) {
        let prev = window[0];
        let next = window[1];
        if next == prev + 1 {
            current_run += 1;
            max_run = usize::max(max_run, current_run);
        } else {
            current_run = 1;
            gap_sum = gap_sum.saturating_add(next.saturating_sub(prev).saturating_sub(1));
        }
    }

    FuzzyScore {
        gap_sum,
        max_run,
        first_pos,
        label_len,
    }
}
