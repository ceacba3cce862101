//! Roster to ranking join
//!
//! Which field links a participant to the ranking table depends on the site
//! the roster came from. The choice is kept in [`JOIN_POLICY`] so it can be
//! inspected and changed in one place.
//!
//! Note that Civl and PWCA join by name even though PWCA payloads can carry
//! CIVL IDs. Name joins miss pilots whose spelling differs between the site
//! and the ranking, so scores for those sites may be understated.

use std::collections::HashMap;

use crate::models::{JoinedRow, Participant, RankingEntry, RankingTable, SiteKind};

/// Field used to match participants against ranking rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKey {
    /// Lower-cased pilot name
    Name,
    /// CIVL ID
    CivlId,
}

/// Join key per site
pub const JOIN_POLICY: [(SiteKind, JoinKey); 4] = [
    (SiteKind::Airtribune, JoinKey::CivlId),
    (SiteKind::Civl, JoinKey::Name),
    (SiteKind::Ffvl, JoinKey::CivlId),
    (SiteKind::Pwca, JoinKey::Name),
];

#[derive(Debug, PartialEq, Eq, Hash)]
enum KeyValue<'a> {
    Name(&'a str),
    CivlId(u64),
}

impl JoinKey {
    /// Look up the join key for a site
    pub fn for_site(site: SiteKind) -> Self {
        JOIN_POLICY
            .iter()
            .find(|(kind, _)| *kind == site)
            .map(|(_, key)| *key)
            .unwrap_or(JoinKey::CivlId)
    }

    fn participant_value<'a>(&self, participant: &'a Participant) -> KeyValue<'a> {
        match self {
            Self::Name => KeyValue::Name(&participant.name),
            Self::CivlId => KeyValue::CivlId(participant.civl_id),
        }
    }

    fn ranking_value<'a>(&self, entry: &'a RankingEntry) -> KeyValue<'a> {
        match self {
            Self::Name => KeyValue::Name(&entry.name),
            Self::CivlId => KeyValue::CivlId(entry.civl_id),
        }
    }
}

/// Left-join a roster against the ranking table
///
/// Every participant is kept. A participant with no ranking match gets 0
/// points; one with several matches yields one row per match. The result is
/// stable-sorted by points, highest first, so ties keep roster order.
pub fn join_rankings(
    roster: Vec<Participant>,
    ranking: &RankingTable,
    key: JoinKey,
) -> Vec<JoinedRow> {
    let mut index: HashMap<KeyValue<'_>, Vec<f64>> = HashMap::new();
    for entry in ranking.entries() {
        index
            .entry(key.ranking_value(entry))
            .or_default()
            .push(entry.points);
    }

    let mut joined = Vec::with_capacity(roster.len());
    let mut matched = 0usize;

    for participant in roster {
        let points = index
            .get(&key.participant_value(&participant))
            .cloned()
            .unwrap_or_default();

        if points.is_empty() {
            joined.push(JoinedRow {
                participant,
                points: 0.0,
            });
            continue;
        }

        matched += 1;
        for p in points {
            joined.push(JoinedRow {
                participant: participant.clone(),
                points: p,
            });
        }
    }

    joined.sort_by(|a, b| b.points.total_cmp(&a.points));

    tracing::debug!(
        key = ?key,
        rows = joined.len(),
        matched,
        "Joined roster with ranking"
    );

    joined
}
