use super::context::{SearchContext, SearchResult};
use super::evaluation::Evaluator;
use super::game::GameState;
use crate::error::SearchTimeout;

/// Busca Alpha-Beta na raiz com janela (-inf, +inf).
///
/// Devolve o lance, não só o valor: se um sucessor atinge `beta` o lance é
/// devolvido de imediato sem ver os irmãos. Com lances disponíveis nunca
/// devolve a sentinela (começa pelo primeiro lance gerado).
pub fn alpha_beta<S, E>(
    ctx: &mut SearchContext<'_, S, E>,
    state: &S,
    depth: u32,
) -> Result<SearchResult<S::Move>, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    alpha_beta_root(ctx, state, depth, f64::NEG_INFINITY, f64::INFINITY)
}

/// Raiz com janela explícita.
pub fn alpha_beta_root<S, E>(
    ctx: &mut SearchContext<'_, S, E>,
    state: &S,
    depth: u32,
    mut alpha: f64,
    beta: f64,
) -> Result<SearchResult<S::Move>, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    ctx.enter()?;

    let moves = state.legal_moves();
    let Some(&first) = moves.first() else {
        return Ok(SearchResult {
            best_move: S::NO_MOVE,
            score: ctx.evaluate(state),
            depth,
        });
    };

    let mut best_move = first;
    let mut best_score = f64::NEG_INFINITY;

    for &mv in &moves {
        let score = min_value(ctx, &state.forecast(mv), depth, alpha, beta)?;

        if score > best_score {
            best_score = score;
            best_move = mv;
        }

        // Beta cutoff na raiz: nenhum irmão melhora um valor que já atinge beta
        if score >= beta {
            ctx.stats.cutoffs += 1;
            return Ok(SearchResult {
                best_move: mv,
                score,
                depth,
            });
        }

        alpha = alpha.max(score);
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        depth,
    })
}

/// Nó maximizador interior.
pub fn max_value<S, E>(
    ctx: &mut SearchContext<'_, S, E>,
    state: &S,
    depth: u32,
    mut alpha: f64,
    beta: f64,
) -> Result<f64, SearchTimeout>
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
        value = value.max(min_value(ctx, &state.forecast(mv), depth - 1, alpha, beta)?);
        if value >= beta {
            ctx.stats.cutoffs += 1;
            return Ok(value);
        }
        alpha = alpha.max(value);
    }
    Ok(value)
}

/// Nó minimizador interior.
pub fn min_value<S, E>(
    ctx: &mut SearchContext<'_, S, E>,
    state: &S,
    depth: u32,
    alpha: f64,
    mut beta: f64,
) -> Result<f64, SearchTimeout>
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
        value = value.min(max_value(ctx, &state.forecast(mv), depth - 1, alpha, beta)?);
        if value <= alpha {
            ctx.stats.cutoffs += 1;
            return Ok(value);
        }
        beta = beta.min(value);
    }
    Ok(value)
}
