//! Gestalt (Ratcliff/Obershelp) sequence similarity.
//!
//! The ratio of two sequences is `2 * M / T`, where `T` is their combined length and `M` the
//! number of characters in matching blocks. Blocks are found by taking the longest common
//! block, then recursing into the unmatched pieces on either side of it.

use std::collections::HashMap;

/// Minimum ratio a fuzzy candidate needs to be considered a match.
pub const DEFAULT_CUTOFF: f64 = 0.5;

// Sequences at least this long get the popular-character heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A candidate that passed the cutoff, with its similarity ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    pub value: &'a str,
    pub score: f64,
}

/// Compares many candidates against one fixed query.
///
/// The query's character positions are indexed once, so scoring a candidate only walks the
/// candidate. For queries of 200 characters or more, characters that make up more than 1%
/// of the query are considered popular: they never start a matching block, but a block found
/// without them is still extended across them.
pub struct SequenceMatcher {
    query: Vec<char>,
    positions: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(query: &str) -> Self {
        let query: Vec<char> = query.chars().collect();

        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in query.iter().enumerate() {
            positions.entry(*c).or_default().push(j);
        }

        if query.len() >= AUTOJUNK_MIN_LEN {
            let limit = query.len() / 100 + 1;
            positions.retain(|_, js| js.len() <= limit);
        }

        Self { query, positions }
    }

    /// Similarity ratio in `[0, 1]`; two empty strings are identical.
    pub fn ratio(&self, candidate: &str) -> f64 {
        let candidate: Vec<char> = candidate.chars().collect();
        let total = candidate.len() + self.query.len();
        if total == 0 {
            return 1.0;
        }

        2.0 * self.matching_chars(&candidate) as f64 / total as f64
    }

    /// Upper bound on `ratio` from lengths alone.
    pub fn length_bound(&self, candidate: &str) -> f64 {
        let la = candidate.chars().count();
        let lb = self.query.len();
        if la + lb == 0 {
            return 1.0;
        }

        2.0 * la.min(lb) as f64 / (la + lb) as f64
    }

    fn matching_chars(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, a.len(), 0, self.query.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_match(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }

            total += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    /// Longest block `a[i..i+k] == query[j..j+k]` inside the given windows.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then earliest in the
    /// query.
    fn longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let mut best = (alo, blo, 0);
        // Length of the block ending at query position j, for the previous row of `a`.
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_run_lengths = HashMap::new();

            if let Some(js) = self.positions.get(c) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_lengths.insert(j, k);

                    if k > best.2 {
                        best = (i + 1 - k, j + 1 - k, k);
                    }
                }
            }

            run_lengths = next_run_lengths;
        }

        // Popular characters are not indexed, so grow the block over equal neighbours.
        let (mut i, mut j, mut k) = best;
        while i > alo && j > blo && a[i - 1] == self.query[j - 1] {
            i -= 1;
            j -= 1;
            k += 1;
        }
        while i + k < ahi && j + k < bhi && a[i + k] == self.query[j + k] {
            k += 1;
        }

        (i, j, k)
    }
}

/// Similarity ratio of two strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(b).ratio(a)
}

/// Finds the single candidate most similar to `query` with a ratio of at least `cutoff`.
///
/// Candidates are scanned in order and only a strictly better score replaces the current
/// best, so ties go to the candidate seen first.
pub fn closest_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<ScoredMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = SequenceMatcher::new(query);
    let mut best: Option<ScoredMatch<'a>> = None;

    for candidate in candidates {
        if matcher.length_bound(candidate) < cutoff {
            continue;
        }

        let score = matcher.ratio(candidate);
        if score < cutoff {
            continue;
        }

        if best.map_or(true, |current| score > current.score) {
            best = Some(ScoredMatch {
                value: candidate,
                score,
            });
        }
    }

    best
}
