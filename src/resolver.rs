//! Competition name resolution against the registry
//!
//! A free-text competition name is matched against every registry entry with
//! an edit-distance similarity ratio, and the best entry wins. Resolution
//! never fails on a non-empty registry: a poor match still selects *some*
//! competition, so low ratios are logged at warn level.

use crate::error::{Error, Result};
use crate::models::CompetitionEntry;

/// Ratios below this are reported as doubtful matches
pub const LOW_CONFIDENCE_RATIO: u8 = 50;

/// Similarity ratio in `0..=100` between two strings
///
/// Computed as `2 * LCS / (|a| + |b|)` over Unicode scalar values, which is
/// the Levenshtein ratio with substitution cost 2. Case-sensitive. Rounded
/// half to even. An empty operand scores 0.
///
/// # Examples
///
/// ```
/// use compstrength::resolver::fuzz_ratio;
///
/// assert_eq!(fuzz_ratio("British Open", "British Open"), 100);
/// assert_eq!(fuzz_ratio("abcd", "abce"), 75);
/// assert_eq!(fuzz_ratio("", "abc"), 0);
/// ```
pub fn fuzz_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = (a.len() + b.len()) as f64;
    let matched = 2.0 * longest_common_subsequence(&a, &b) as f64;
    (100.0 * matched / total).round_ties_even() as u8
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// A resolved registry entry and the ratio it won with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub entry: &'a CompetitionEntry,
    pub ratio: u8,
}

/// Matches competition names against a non-empty registry
#[derive(Debug, Clone)]
pub struct CompetitionResolver {
    entries: Vec<CompetitionEntry>,
}

impl CompetitionResolver {
    /// Create a resolver over registry entries
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the registry is empty
    pub fn new(entries: Vec<CompetitionEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::config("competition registry is empty"));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CompetitionEntry] {
        &self.entries
    }

    /// Select the entry whose name is most similar to `name`
    ///
    /// Ties go to the first entry achieving the maximum, in registry order.
    pub fn resolve(&self, name: &str) -> Resolution<'_> {
        let mut best = Resolution {
            entry: &self.entries[0],
            ratio: fuzz_ratio(name, &self.entries[0].name),
        };

        for entry in &self.entries[1..] {
            let ratio = fuzz_ratio(name, &entry.name);
            if ratio > best.ratio {
                best = Resolution { entry, ratio };
            }
        }

        if best.ratio < LOW_CONFIDENCE_RATIO {
            tracing::warn!(
                query = name,
                competition = %best.entry.name,
                ratio = best.ratio,
                "Best registry match is weak"
            );
        } else {
            tracing::info!(
                query = name,
                competition = %best.entry.name,
                site = %best.entry.site,
                ratio = best.ratio,
                "Resolved competition"
            );
        }

        best
    }
}
