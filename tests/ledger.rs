//! Integration tests for the head-to-head ledger.

use tennis_engine::{EngineError, HeadToHead, HeadToHeadLedger, PairKey, PlayerId};
use uuid::Uuid;

fn ids() -> (PlayerId, PlayerId, PlayerId) {
    (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
}

#[test]
fn pair_key_is_order_independent() {
    let (a, b, _) = ids();
    assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
}

#[test]
fn reversed_lookup_resolves_to_the_same_record() {
    let (a, b, _) = ids();
    let mut ledger = HeadToHeadLedger::new();
    ledger.record_result(a, b, a, Uuid::new_v4()).unwrap();

    let forward = ledger.get(a, b).unwrap() as *const HeadToHead;
    let backward = ledger.get(b, a).unwrap() as *const HeadToHead;
    assert_eq!(forward, backward);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn first_meeting_fixes_orientation_and_swapped_updates_credit_correctly() {
    let (a, b, _) = ids();
    let mut ledger = HeadToHeadLedger::new();

    ledger.record_result(a, b, a, Uuid::new_v4()).unwrap();
    // Later meeting reported in the opposite order; B wins twice.
    ledger.record_result(b, a, b, Uuid::new_v4()).unwrap();
    let last = Uuid::new_v4();
    let record = ledger.record_result(b, a, b, last).unwrap().clone();

    assert_eq!(record.player1, a);
    assert_eq!(record.player2, b);
    assert_eq!(record.player1_wins, 1);
    assert_eq!(record.player2_wins, 2);
    assert_eq!(record.total_matches, record.player1_wins + record.player2_wins);
    assert_eq!(record.last_meeting, Some(last));
    assert_eq!(record.wins_for(a), Some(1));
    assert_eq!(record.wins_for(b), Some(2));
    assert!((record.player1_win_percentage() - 100.0 / 3.0).abs() < 1e-9);
    assert!((record.player2_win_percentage() - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn invalid_results_are_rejected_without_touching_the_ledger() {
    let (a, b, c) = ids();
    let mut ledger = HeadToHeadLedger::new();
    assert_eq!(
        ledger.record_result(a, b, c, Uuid::new_v4()).map(|r| r.clone()),
        Err(EngineError::WinnerNotInMatch(c))
    );
    assert_eq!(
        ledger.record_result(a, a, a, Uuid::new_v4()).map(|r| r.clone()),
        Err(EngineError::SamePlayer(a))
    );
    assert!(ledger.is_empty());
}

#[test]
fn records_for_lists_each_rivalry_of_a_player() {
    let (a, b, c) = ids();
    let mut ledger = HeadToHeadLedger::new();
    ledger.record_result(a, b, a, Uuid::new_v4()).unwrap();
    ledger.record_result(c, a, c, Uuid::new_v4()).unwrap();
    ledger.record_result(b, c, b, Uuid::new_v4()).unwrap();

    assert_eq!(ledger.records_for(a).count(), 2);
    assert_eq!(ledger.records_for(b).count(), 2);
    assert!(ledger.records().all(|r| r.total_matches == r.player1_wins + r.player2_wins));
}

#[test]
fn empty_record_percentages_are_zero() {
    let (a, b, c) = ids();
    let record = HeadToHead::new(a, b);
    assert_eq!(record.player1_win_percentage(), 0.0);
    assert_eq!(record.player2_win_percentage(), 0.0);
    assert_eq!(record.wins_for(c), None);
}
