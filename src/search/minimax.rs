//! Minimax de profundidade fixa, sem poda.
//!
//! Serve de referência para validar a busca alpha-beta: os dois devolvem o
//! mesmo valor na raiz para a mesma profundidade e o mesmo avaliador.

use super::context::{SearchContext, SearchResult};
use super::evaluation::Evaluator;
use super::game::GameState;
use crate::error::SearchTimeout;

/// Decisão na raiz: o lance cujo sucessor tem o maior valor minimizado.
///
/// Empates ficam com o primeiro lance gerado. Sem lances legais devolve
/// `S::NO_MOVE` com a avaliação estática do estado.
pub fn minimax<S, E>(
    ctx: &mut SearchContext<'_, S, E>,
    state: &S,
    depth: u32,
) -> Result<SearchResult<S::Move>, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    ctx.enter()?;

    let moves = state.legal_moves();
    if moves.is_empty() {
        return Ok(SearchResult {
            best_move: S::NO_MOVE,
            score: ctx.evaluate(state),
            depth,
        });
    }

    let mut best: Option<(S::Move, f64)> = None;
    for &mv in &moves {
        let value = min_value(ctx, &state.forecast(mv), depth)?;
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((mv, value)),
        }
    }

    let (best_move, score) = best.unwrap_or((S::NO_MOVE, f64::NEG_INFINITY));
    Ok(SearchResult { best_move, score, depth })
}

/// Nó minimizador (vez do adversário).
pub fn min_value<S, E>(ctx: &mut SearchContext<'_, S, E>, state: &S, depth: u32) -> Result<f64, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    ctx.enter()?;

    let moves = state.legal_moves();
    if let Some(value) = ctx.leaf_value(state, depth, &moves) {
        return Ok(value);
    }

    let mut value = f64::INFINITY;
    for &mv in &moves {
        value = value.min(max_value(ctx, &state.forecast(mv), depth - 1)?);
    }
    Ok(value)
}

/// Nó maximizador (vez do jogador que procura).
pub fn max_value<S, E>(ctx: &mut SearchContext<'_, S, E>, state: &S, depth: u32) -> Result<f64, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    ctx.enter()?;

    let moves = state.legal_moves();
    if let Some(value) = ctx.leaf_value(state, depth, &moves) {
        return Ok(value);
    }

    let mut value = f64::NEG_INFINITY;
    for &mv in &moves {
        value = value.max(min_value(ctx, &state.forecast(mv), depth - 1)?);
    }
    Ok(value)
}
