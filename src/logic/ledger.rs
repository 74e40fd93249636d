//! Head-to-head ledger: one shared record per unordered player pair.

use crate::models::{EngineError, HeadToHead, MatchId, PlayerId};
use std::collections::BTreeMap;

/// Order-independent key for a pair of players.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PairKey(PlayerId, PlayerId);

impl PairKey {
    /// Canonical key: the smaller id always comes first.
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }
}

/// All head-to-head records, keyed canonically.
///
/// Updates take `&mut self`, so concurrent simulations must serialize access
/// (e.g. behind a `Mutex`) to avoid lost increments.
#[derive(Clone, Debug, Default)]
pub struct HeadToHeadLedger {
    records: BTreeMap<PairKey, HeadToHead>,
}

impl HeadToHeadLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one completed match to the pair's record, creating it as
    /// (`player_a`, `player_b`) on first meeting.
    ///
    /// Not idempotent: calling twice for one match counts it twice.
    pub fn record_result(
        &mut self,
        player_a: PlayerId,
        player_b: PlayerId,
        winner: PlayerId,
        match_id: MatchId,
    ) -> Result<&HeadToHead, EngineError> {
        if player_a == player_b {
            return Err(EngineError::SamePlayer(player_a));
        }
        if winner != player_a && winner != player_b {
            return Err(EngineError::WinnerNotInMatch(winner));
        }
        let record = self
            .records
            .entry(PairKey::new(player_a, player_b))
            .or_insert_with(|| HeadToHead::new(player_a, player_b));

        record.total_matches += 1;
        if winner == record.player1 {
            record.player1_wins += 1;
        } else {
            record.player2_wins += 1;
        }
        record.last_meeting = Some(match_id);

        log::debug!(
            "Head-to-head {} vs {}: {}-{}",
            record.player1,
            record.player2,
            record.player1_wins,
            record.player2_wins
        );
        Ok(record)
    }

    /// The pair's record, whichever order the ids are given in.
    pub fn get(&self, a: PlayerId, b: PlayerId) -> Option<&HeadToHead> {
        self.records.get(&PairKey::new(a, b))
    }

    /// Every record involving `player`.
    pub fn records_for(&self, player: PlayerId) -> impl Iterator<Item = &HeadToHead> {
        self.records.values().filter(move |r| r.involves(player))
    }

    pub fn records(&self) -> impl Iterator<Item = &HeadToHead> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
