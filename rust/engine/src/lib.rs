//! # rojak-engine: Flashcard Game Engine Core
//!
//! Game-state engine for a word-fusion trivia flashcard game. A player reads a
//! two-part clue, recalls the fused answer, flips the card and grades themself
//! correct or incorrect, or skips the card for later.
//!
//! The engine is a library of pure transitions: every action borrows the current
//! [`game::GameState`] and returns a new one. The host application keeps the
//! single current state and replaces it after each call.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (id, clue, answer)
//! - [`parser`] - Card file ingestion with per-line warnings
//! - [`deck`] - Seeded ChaCha20 shuffles and skip reordering
//! - [`game`] - Game state, grading/skip transitions, round and cycle lifecycle
//! - [`stats`] - Remaining counts, accuracy, pattern string, session summary
//! - [`rules`] - Round size and skip cap
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use rojak_engine::deck::seeded_rng;
//! use rojak_engine::game::initialize_game;
//! use rojak_engine::parser::parse_cards;
//!
//! let text = "front,back\n\
//!             Fast food chain + US president,McDonald Trump\n\
//!             Opposition leader + City state,Pritam Singhapore\n";
//! let parsed = parse_cards(text);
//!
//! let mut rng = seeded_rng(42);
//! let state = initialize_game(&parsed.cards, &mut rng).unwrap();
//!
//! let card = state.current_card().unwrap().clone();
//! let state = state.handle_correct(card.id).unwrap();
//! assert_eq!(state.streak(), 1);
//! assert_eq!(state.remaining_count(), 1);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! All shuffles draw from an injected random source, so a seed reproduces a session:
//!
//! ```rust
//! use rojak_engine::cards::numbered_deck;
//! use rojak_engine::deck::seeded_rng;
//! use rojak_engine::game::GameState;
//!
//! let cards = numbered_deck((0..20).map(|i| (format!("clue {i}"), format!("answer {i}"))));
//! let a = GameState::new(&cards, &mut seeded_rng(7)).unwrap();
//! let b = GameState::new(&cards, &mut seeded_rng(7)).unwrap();
//! assert_eq!(a.deck(), b.deck());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod parser;
pub mod rules;
pub mod stats;
