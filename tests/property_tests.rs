//! Property tests: rule invariants over arbitrary move sequences.
//!
//! Games are driven by a vector of choice bytes; each byte picks a legal
//! move by index (modulo the number of legal moves), so every generated
//! sequence is a legal game prefix.

use proptest::prelude::*;

use ultimate_ttt::core::{GameRng, GameState, Move, Target, BOARD_SIZE};
use ultimate_ttt::rules::lines::line_winner;
use ultimate_ttt::rules::{RulesEngine, UltimateTicTacToe};

const RULES: UltimateTicTacToe = UltimateTicTacToe::new();

/// Play choices until they run out or the game ends. Returns every state
/// visited and the moves between them.
fn drive(choices: &[u8]) -> (Vec<GameState>, Vec<Move>) {
    let mut states = vec![RULES.initial()];
    let mut moves = Vec::new();
    for &choice in choices {
        let state = states[states.len() - 1];
        let legal = RULES.legal_moves(&state);
        if legal.is_empty() {
            break;
        }
        let mv = legal[choice as usize % legal.len()];
        states.push(RULES.apply_move(&state, mv));
        moves.push(mv);
    }
    (states, moves)
}

fn choices() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=81)
}

proptest! {
    #[test]
    fn prop_redirection_law(choices in choices()) {
        let (states, moves) = drive(&choices);
        for (next, mv) in states[1..].iter().zip(&moves) {
            let j = mv.cell();
            let expected = if next.target() == Target::Finished {
                Target::Finished
            } else if next.capture(j).is_some() || next.is_board_full(j) {
                Target::Any
            } else {
                Target::Board(j)
            };
            prop_assert_eq!(next.target(), expected);
        }
    }

    #[test]
    fn prop_marks_and_captures_are_permanent(choices in choices()) {
        let (states, _) = drive(&choices);
        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            for board in 0..BOARD_SIZE {
                if before.capture(board).is_some() {
                    prop_assert_eq!(before.capture(board), after.capture(board));
                }
                for cell in 0..BOARD_SIZE {
                    if before.cell(board, cell).is_some() {
                        prop_assert_eq!(before.cell(board, cell), after.cell(board, cell));
                    }
                }
            }
            prop_assert_eq!(after.empty_cells() + 1, before.empty_cells());
        }
    }

    #[test]
    fn prop_captures_match_lines(choices in choices()) {
        let (states, _) = drive(&choices);
        for state in &states {
            for board in 0..BOARD_SIZE {
                prop_assert_eq!(state.capture(board), line_winner(state.sub_board(board)));
            }
        }
    }

    #[test]
    fn prop_forced_board_is_open(choices in choices()) {
        let (states, _) = drive(&choices);
        for state in &states {
            if let Target::Board(k) = state.target() {
                prop_assert!(state.is_board_open(k));
            }
        }
    }

    #[test]
    fn prop_apply_is_deterministic(choices in choices()) {
        let (states, moves) = drive(&choices);
        for (state, &mv) in states.iter().zip(&moves) {
            let a = RULES.apply_move(state, mv);
            let b = RULES.apply_move(state, mv);
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_termination_consistency(choices in choices()) {
        let (states, _) = drive(&choices);
        for state in &states {
            let no_moves = RULES.legal_moves(state).is_empty();
            let capture_line = line_winner(state.captures()).is_some();

            prop_assert_eq!(RULES.is_terminal(state), no_moves || capture_line);
            prop_assert_eq!(state.target() == Target::Finished, capture_line);
            prop_assert_eq!(RULES.outcome(state).is_some(), RULES.is_terminal(state));
            prop_assert_eq!(RULES.result(state).is_ok(), RULES.is_terminal(state));
        }
    }

    #[test]
    fn prop_validation_agrees_with_move_list(choices in choices()) {
        let (states, _) = drive(&choices);
        let state = states[states.len() - 1];
        let legal = RULES.legal_moves(&state);
        for mv in Move::all() {
            prop_assert_eq!(RULES.try_apply_move(&state, mv).is_ok(), legal.contains(&mv));
        }
    }

    #[test]
    fn prop_complete_games(seed in any::<u64>()) {
        // 81 choices are always enough to finish a game.
        let mut rng = GameRng::new(seed);
        let choices: Vec<u8> = (0..81).map(|_| rng.gen_index(256) as u8).collect();

        let (states, moves) = drive(&choices);
        let last = states[states.len() - 1];

        prop_assert!(!moves.is_empty() && moves.len() <= 81);
        prop_assert!(RULES.is_terminal(&last));
        prop_assert!(RULES.result(&last).is_ok());
    }
}
