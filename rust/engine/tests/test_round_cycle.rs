use rojak_engine::cards::{numbered_deck, Card};
use rojak_engine::deck::seeded_rng;
use rojak_engine::errors::GameError;
use rojak_engine::game::GameState;
use rojak_engine::rules::CARDS_PER_ROUND;

fn cards(n: usize) -> Vec<Card> {
    numbered_deck((0..n).map(|i| (format!("clue {i}"), format!("answer {i}"))))
}

fn finish_deck(mut state: GameState) -> GameState {
    let mut flip = false;
    while let Some(card) = state.current_card() {
        let id = card.id;
        state = if flip {
            state.handle_incorrect(id).unwrap()
        } else {
            state.handle_correct(id).unwrap()
        };
        flip = !flip;
        if state.should_show_round_complete() && !state.should_reset_deck() {
            state = state.start_next_round();
        }
    }
    state
}

#[test]
fn start_next_round_only_touches_round_counters() {
    let all = cards(12);
    let s = GameState::with_deck_order(all).unwrap();
    let s = s.handle_correct(0).unwrap().handle_skip(1).unwrap();
    let next = s.start_next_round();
    assert_eq!(next.current_round(), s.current_round() + 1);
    assert_eq!(next.cards_attempted_in_round(), 0);
    assert_eq!(next.deck(), s.deck());
    assert_eq!(next.current_index(), s.current_index());
    assert_eq!(next.correct_cards(), s.correct_cards());
    assert_eq!(next.incorrect_cards(), s.incorrect_cards());
    assert_eq!(next.skipped_cards(), s.skipped_cards());
    assert_eq!(next.streak(), s.streak());
    assert_eq!(next.skips_used(), s.skips_used());
}

#[test]
fn round_boundary_counts_skips_as_attempts() {
    let mut s = GameState::with_deck_order(cards(30)).unwrap();
    for i in 0..CARDS_PER_ROUND {
        assert!(!s.should_show_round_complete());
        assert_eq!(s.cards_left_in_round(), (CARDS_PER_ROUND - i) as usize);
        let id = s.current_card().unwrap().id;
        s = if i < 2 {
            s.handle_skip(id).unwrap()
        } else {
            s.handle_correct(id).unwrap()
        };
        assert_eq!(s.cards_attempted_in_round(), i + 1);
    }
    assert!(s.should_show_round_complete());
    assert_eq!(s.cards_left_in_round(), 0);
    assert_eq!(s.remaining_count(), 22);
}

#[test]
fn reset_deck_keeps_longest_streak_and_clears_history() {
    let all = cards(7);
    let s = GameState::new(&all, &mut seeded_rng(5)).unwrap();
    let skip_id = s.current_card().unwrap().id;
    let s = finish_deck(s.handle_skip(skip_id).unwrap());
    assert!(s.should_reset_deck());
    let round_before = s.current_round();

    let next = s.reset_deck(&all, &mut seeded_rng(6)).unwrap();
    assert_eq!(next.longest_streak(), s.longest_streak());
    assert!(next.correct_cards().is_empty());
    assert!(next.incorrect_cards().is_empty());
    assert!(next.skipped_cards().is_empty());
    assert_eq!(next.skips_used(), 0);
    assert_eq!(next.cards_attempted_in_round(), 0);
    assert_eq!(next.streak(), 0);
    assert_eq!(next.current_index(), 0);
    assert!(next.has_completed_cycle());
    assert_eq!(next.current_round(), round_before + 1);
    assert_eq!(next.deck().len(), all.len());
}

#[test]
fn longest_streak_survives_a_weaker_cycle() {
    let all = cards(4);
    let mut s = GameState::with_deck_order(all.clone()).unwrap();
    for id in 0..4 {
        s = s.handle_correct(id).unwrap();
    }
    assert_eq!(s.longest_streak(), 4);

    let mut s = s.reset_deck(&all, &mut seeded_rng(1)).unwrap();
    while let Some(card) = s.current_card() {
        let id = card.id;
        s = s.handle_incorrect(id).unwrap();
    }
    assert_eq!(s.streak(), 0);
    assert_eq!(s.longest_streak(), 4);
    assert_eq!(s.accuracy(), 0);
}

#[test]
fn reset_deck_with_no_cards_fails() {
    let s = GameState::with_deck_order(cards(2)).unwrap();
    assert_eq!(
        s.reset_deck(&[], &mut seeded_rng(0)).unwrap_err(),
        GameError::EmptyDeck
    );
}
