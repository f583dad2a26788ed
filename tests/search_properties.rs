// Propriedades da busca: equivalência minimax/alpha-beta, valores de fronteira
// e coerência de cada profundidade completada.

use isolation::core::{Board, Move, PlayerId};
use isolation::moves::cell_index;
use isolation::search::minimax::min_value;
use isolation::search::{alpha_beta, minimax, Deadline, Evaluator, GameState, Heuristic, SearchContext};
use std::time::Duration;

fn no_clock() -> impl Fn() -> Duration {
    || Duration::from_secs(3600)
}

fn bits(cells: &[(i32, i32)], height: i32) -> u128 {
    cells.iter().fold(0, |acc, &(r, c)| acc | 1u128 << cell_index(r, c, height))
}

/// 3x3: o jogador 1 ainda não jogou e tem 4 casas livres; o jogador 2 está em
/// (0,0) com 2 saltos possíveis.
fn three_by_three() -> Board {
    Board {
        width: 3,
        height: 3,
        blocked: bits(&[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)], 3),
        locations: [None, Some(Move::new(0, 0))],
        active: PlayerId::One,
        move_count: 1,
    }
}

fn opening_5x5() -> Board {
    Board::new(5, 5)
        .unwrap()
        .forecast(Move::new(2, 2))
        .forecast(Move::new(0, 0))
}

#[test]
fn test_three_by_three_depth_two_matches_brute_force() {
    let board = three_by_three();
    assert_eq!(board.legal_moves().len(), 4);
    assert_eq!(board.mobility(PlayerId::Two), 2);

    let eval = Heuristic::Improved;
    let player = PlayerId::One;

    // Enumeração das duas camadas, com desempate pelo primeiro lance
    let mut expected: Option<(Move, f64)> = None;
    for mv in board.legal_moves() {
        let child = board.forecast(mv);
        let replies = child.legal_moves();
        let value = if replies.is_empty() {
            eval.score(&child, player, &[])
        } else {
            replies
                .iter()
                .map(|&r| eval.score(&child.forecast(r), player, &[]))
                .fold(f64::INFINITY, f64::min)
        };
        match expected {
            Some((_, best)) if value <= best => {}
            _ => expected = Some((mv, value)),
        }
    }
    let (expected_move, expected_value) = expected.unwrap();

    let clock = no_clock();
    let deadline = Deadline::new(&clock, Duration::ZERO);
    let mut mm = SearchContext::new(&eval, &[], &deadline, player);
    let mut ab = SearchContext::new(&eval, &[], &deadline, player);
    let by_minimax = minimax(&mut mm, &board, 2).unwrap();
    let by_alpha_beta = alpha_beta(&mut ab, &board, 2).unwrap();

    assert_eq!(by_minimax.best_move, expected_move);
    assert_eq!(by_minimax.score, expected_value);
    assert_eq!(by_alpha_beta.best_move, expected_move);
    assert_eq!(by_alpha_beta.score, expected_value);
}

#[test]
fn test_alpha_beta_value_equals_minimax_on_7x7() {
    let board = Board::default().forecast(Move::new(3, 3)).forecast(Move::new(1, 5));
    let clock = no_clock();
    let deadline = Deadline::new(&clock, Duration::ZERO);
    let weights = [0.4, 0.5, 0.4];

    for heuristic in Heuristic::ALL {
        for depth in 1..=3 {
            let mut mm = SearchContext::new(&heuristic, &weights, &deadline, PlayerId::One);
            let mut ab = SearchContext::new(&heuristic, &weights, &deadline, PlayerId::One);
            let expected = minimax(&mut mm, &board, depth).unwrap();
            let got = alpha_beta(&mut ab, &board, depth).unwrap();

            assert_eq!(got.score, expected.score, "{} at depth {}", heuristic, depth);
            assert!(board.legal_moves().contains(&got.best_move));
        }
    }
}

#[test]
fn test_each_depth_move_carries_its_minimax_value() {
    let board = opening_5x5();
    let clock = no_clock();
    let deadline = Deadline::new(&clock, Duration::ZERO);
    let eval = Heuristic::Improved;

    for depth in 1..=4 {
        let mut ab = SearchContext::new(&eval, &[], &deadline, PlayerId::One);
        let result = alpha_beta(&mut ab, &board, depth).unwrap();

        // O valor exato do lance escolhido é o valor da raiz
        let mut mm = SearchContext::new(&eval, &[], &deadline, PlayerId::One);
        let child_value = min_value(&mut mm, &board.forecast(result.best_move), depth).unwrap();
        assert_eq!(child_value, result.score, "depth {}", depth);
        assert_eq!(result.depth, depth);
    }
}

#[test]
fn test_every_heuristic_short_circuits_terminal_states() {
    // Jogador 1 no centro de um 3x3: não tem saltos e é a sua vez
    let mut lost = Board::new(3, 3).unwrap();
    lost.apply_move(Move::new(1, 1)).unwrap();
    lost.apply_move(Move::new(0, 0)).unwrap();
    assert!(lost.is_loser(PlayerId::One));
    assert!(lost.is_winner(PlayerId::Two));

    let weights = [1.0, 1.0, 1.0];
    for heuristic in Heuristic::ALL {
        assert_eq!(heuristic.score(&lost, PlayerId::One, &weights), f64::NEG_INFINITY, "{}", heuristic);
        assert_eq!(heuristic.score(&lost, PlayerId::Two, &weights), f64::INFINITY, "{}", heuristic);
    }
}

#[test]
fn test_closure_evaluators_plug_into_the_search() {
    let board = opening_5x5();
    let clock = no_clock();
    let deadline = Deadline::new(&clock, Duration::ZERO);

    // Prefere ficar perto da última linha
    let row = |state: &Board, player: PlayerId, _: &[f64]| state.locations[player.index()].map_or(0.0, |m| m.row as f64);
    let mut ctx = SearchContext::new(&row, &[], &deadline, PlayerId::One);
    let result = alpha_beta(&mut ctx, &board, 1).unwrap();

    let best_row = board.legal_moves().iter().map(|m| m.row).max().unwrap();
    assert_eq!(result.best_move.row, best_row);
    assert_eq!(ctx.stats.evaluations as usize, board.legal_moves().len());
}
