//! Field-strength scoring
//!
//! The strength of a field is the share of top-half ranking points the
//! registered pilots bring, mapped onto a 24..120 scale:
//!
//! ```text
//! half  = max_participants / 2
//! ratio = sum(top `half` joined points) / sum(top `half` ranking points)
//! score = round((ratio * 0.8 + 0.2) * 120, 1)
//! ```
//!
//! The confirmed score applies the same formula to participants whose status
//! is `confirmed` or `wildcard`. When fewer than `half` rows are available on
//! either side, the available rows are summed.

use crate::models::{JoinedRow, RankingTable, StrengthScores};
use crate::utils::error::ScoreError;

/// Statuses counted by the confirmed score
pub const CONFIRMED_STATUSES: [&str; 2] = ["confirmed", "wildcard"];

const SCALE: f64 = 120.0;
const RATIO_WEIGHT: f64 = 0.8;
const BASE_WEIGHT: f64 = 0.2;

/// Round to one decimal place
///
/// Rounds the exact binary value, with exact ties going to the even digit.
/// Scaling by ten first would round twice and send ties away from zero.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

fn scale(numerator: f64, denominator: f64) -> f64 {
    round1((numerator / denominator * RATIO_WEIGHT + BASE_WEIGHT) * SCALE)
}

pub fn is_confirmed(status: &str) -> bool {
    CONFIRMED_STATUSES.contains(&status)
}

/// Compute overall and confirmed strength scores
///
/// `joined` must already be sorted by points, highest first, as returned by
/// [`crate::join::join_rankings`].
///
/// # Errors
///
/// - `ScoreError::EmptyWindow` if `max_participants / 2` is zero
/// - `ScoreError::ZeroDenominator` if the ranking window sums to zero
pub fn calculate_scores(
    joined: &[JoinedRow],
    max_participants: u32,
    ranking: &RankingTable,
) -> Result<StrengthScores, ScoreError> {
    let half = (max_participants / 2) as usize;
    if half == 0 {
        return Err(ScoreError::EmptyWindow);
    }

    let denominator = ranking.top_points(half);
    if denominator <= 0.0 || !denominator.is_finite() {
        return Err(ScoreError::ZeroDenominator { half });
    }

    let overall_sum: f64 = joined.iter().take(half).map(|row| row.points).sum();

    let confirmed: Vec<&JoinedRow> = joined
        .iter()
        .filter(|row| is_confirmed(row.status()))
        .collect();
    let confirmed_sum: f64 = confirmed.iter().take(half).map(|row| row.points).sum();

    let scores = StrengthScores {
        overall: scale(overall_sum, denominator),
        confirmed: scale(confirmed_sum, denominator),
        half,
        field_size: joined.len(),
        confirmed_size: confirmed.len(),
    };

    tracing::info!(
        half,
        denominator,
        overall = scores.overall,
        confirmed = scores.confirmed,
        field_size = scores.field_size,
        confirmed_size = scores.confirmed_size,
        "Calculated strength scores"
    );

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Participant, RankingEntry};

    fn row(name: &str, status: &str, points: f64) -> JoinedRow {
        JoinedRow {
            participant: Participant::new(name, 1, status),
            points,
        }
    }

    fn ranking() -> RankingTable {
        RankingTable::new(vec![
            RankingEntry::new("alice", 1, 100.0),
            RankingEntry::new("bob", 2, 80.0),
        ])
    }

    #[test]
    fn test_window_larger_than_rows() {
        let joined = vec![row("alice", "confirmed", 100.0), row("bob", "pending", 80.0)];
        let scores = calculate_scores(&joined, 20, &ranking()).unwrap();

        assert_eq!(scores.half, 10);
        assert_eq!(scores.overall, 120.0);
        assert_eq!(scores.confirmed, 77.3);
        assert_eq!(scores.field_size, 2);
        assert_eq!(scores.confirmed_size, 1);
    }

    #[test]
    fn test_window_limits_sums() {
        // half = 1: only the best row on each side counts
        let joined = vec![row("bob", "wildcard", 80.0), row("zed", "confirmed", 10.0)];
        let scores = calculate_scores(&joined, 3, &ranking()).unwrap();

        assert_eq!(scores.half, 1);
        // (0.8 * 0.8 + 0.2) * 120 = 100.8
        assert_eq!(scores.overall, 100.8);
        assert_eq!(scores.confirmed, 100.8);
    }

    #[test]
    fn test_no_confirmed_participants() {
        let joined = vec![row("alice", "pending", 100.0)];
        let scores = calculate_scores(&joined, 4, &ranking()).unwrap();
        assert_eq!(scores.confirmed, 24.0);
    }

    #[test]
    fn test_empty_window() {
        let joined = vec![row("alice", "confirmed", 100.0)];
        assert_eq!(
            calculate_scores(&joined, 1, &ranking()),
            Err(ScoreError::EmptyWindow)
        );
    }

    #[test]
    fn test_zero_denominator() {
        let ranking = RankingTable::new(vec![RankingEntry::new("alice", 1, 0.0)]);
        assert_eq!(
            calculate_scores(&[], 10, &ranking),
            Err(ScoreError::ZeroDenominator { half: 5 })
        );
        assert_eq!(
            calculate_scores(&[], 10, &RankingTable::default()),
            Err(ScoreError::ZeroDenominator { half: 5 })
        );
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(77.333), 77.3);
        assert_eq!(round1(77.36), 77.4);
        assert_eq!(round1(120.0), 120.0);
        // Exact ties go to the even digit
        assert_eq!(round1(26.25), 26.2);
        assert_eq!(round1(0.75), 0.8);
        // 0.15 is stored just below the tie
        assert_eq!(round1(0.15), 0.1);
    }

    #[test]
    fn test_tie_rounds_to_even() {
        // (3 / 128 * 0.8 + 0.2) * 120 = 26.25
        let ranking = RankingTable::new(vec![RankingEntry::new("alice", 1, 128.0)]);
        let joined = vec![row("bob", "confirmed", 3.0)];
        let scores = calculate_scores(&joined, 2, &ranking).unwrap();
        assert_eq!(scores.overall, 26.2);
        assert_eq!(scores.confirmed, 26.2);
    }
}
