use std::collections::BTreeSet;

use rojak_engine::cards::{numbered_deck, Card};
use rojak_engine::game::GameState;

fn cards(n: usize) -> Vec<Card> {
    numbered_deck((0..n).map(|i| (format!("clue {i}"), format!("answer {i}"))))
}

fn abc() -> GameState {
    GameState::with_deck_order(numbered_deck([("A", "a"), ("B", "b"), ("C", "c")])).unwrap()
}

fn grade_all_correct(mut state: GameState, count: usize) -> GameState {
    for _ in 0..count {
        let id = state.current_card().expect("card available").id;
        state = state.handle_correct(id).unwrap();
    }
    state
}

#[test]
fn fresh_state_starts_at_round_one() {
    let s = abc();
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.current_round(), 1);
    assert_eq!(s.cards_attempted_in_round(), 0);
    assert_eq!(s.streak(), 0);
    assert_eq!(s.longest_streak(), 0);
    assert_eq!(s.skips_used(), 0);
    assert!(!s.has_completed_cycle());
    assert!(s.correct_cards().is_empty());
    assert!(s.incorrect_cards().is_empty());
    assert!(s.skipped_cards().is_empty());
}

#[test]
fn scenario_correct_incorrect_correct_completes_deck() {
    let s = abc().handle_correct(0).unwrap();
    assert_eq!(s.streak(), 1);
    assert_eq!(s.longest_streak(), 1);
    assert_eq!(s.correct_cards(), &BTreeSet::from([0]));
    assert_eq!(s.current_index(), 1);

    let s = s.handle_incorrect(1).unwrap();
    assert_eq!(s.streak(), 0);
    assert_eq!(s.longest_streak(), 1);
    assert_eq!(s.incorrect_cards(), &BTreeSet::from([1]));
    assert_eq!(s.current_index(), 2);

    let s = s.handle_correct(2).unwrap();
    assert_eq!(s.correct_cards(), &BTreeSet::from([0, 2]));
    assert!(s.should_reset_deck(), "3 of 3 graded");
    assert!(s.current_card().is_none());
}

#[test]
fn scenario_skip_moves_card_to_back() {
    let s = abc().handle_skip(0).unwrap();
    let fronts: Vec<&str> = s.deck().iter().map(|c| c.front.as_str()).collect();
    assert_eq!(fronts, vec!["B", "C", "A"]);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.current_card().map(|c| c.front.as_str()), Some("B"));
    assert_eq!(s.skips_used(), 1);
    assert_eq!(s.skipped_cards(), &[0]);
    assert_eq!(s.cards_attempted_in_round(), 1);
    assert_eq!(s.remaining_count(), 3);
}

#[test]
fn skipped_card_resurfaces_at_end() {
    let s = abc().handle_skip(0).unwrap();
    let s = s.handle_correct(1).unwrap().handle_correct(2).unwrap();
    assert_eq!(s.current_card().map(|c| c.id), Some(0));
    let s = s.handle_incorrect(0).unwrap();
    assert!(s.should_reset_deck());
    assert_eq!(s.pattern_string(), "🟪🟪⬜");
}

#[test]
fn same_card_can_be_skipped_twice() {
    let s = GameState::with_deck_order(cards(1)).unwrap();
    let s = s.handle_skip(0).unwrap().handle_skip(0).unwrap();
    assert_eq!(s.skipped_cards(), &[0, 0]);
    assert_eq!(s.current_card().map(|c| c.id), Some(0));
    assert!(!s.should_reset_deck());
}

#[test]
fn scenario_ten_cards_round_and_deck_finish_together() {
    let s = grade_all_correct(GameState::with_deck_order(cards(10)).unwrap(), 10);
    assert!(s.should_show_round_complete());
    assert_eq!(s.remaining_count(), 0);
    assert!(s.should_reset_deck());
    assert_eq!(s.accuracy(), 100);
    assert_eq!(s.longest_streak(), 10);
}

#[test]
fn scenario_fifteen_cards_round_boundary_then_continue() {
    let s = grade_all_correct(GameState::with_deck_order(cards(15)).unwrap(), 10);
    assert!(s.should_show_round_complete());
    assert_eq!(s.remaining_count(), 5);
    assert!(!s.should_reset_deck());

    let s = s.start_next_round();
    assert_eq!(s.current_round(), 2);
    assert_eq!(s.cards_attempted_in_round(), 0);
    assert!(!s.should_show_round_complete());
    assert_eq!(s.cards_left_in_round(), 5);

    let s = grade_all_correct(s, 5);
    assert_eq!(s.remaining_count(), 0);
    assert!(s.should_show_round_complete());
    assert_eq!(s.streak(), 15);
}

#[test]
fn old_snapshot_is_not_affected_by_transitions() {
    let before = abc();
    let copy = before.clone();
    let _ = before.handle_correct(0).unwrap();
    let _ = before.handle_skip(0).unwrap();
    let _ = before.start_next_round();
    assert_eq!(before, copy);
}
