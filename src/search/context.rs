use super::deadline::Deadline;
use super::evaluation::Evaluator;
use super::game::GameState;
use crate::error::SearchTimeout;

/// Resultado de uma busca de profundidade fixa que terminou.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: f64,
    pub depth: u32,
}

/// Estatísticas da busca
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
    /// Folhas avaliadas por falta de profundidade (tinham lances).
    pub depth_limited: u64,
}

/// Tudo o que a recursão partilha: avaliador, pesos, prazo e jogador que procura.
pub struct SearchContext<'a, S: GameState, E: ?Sized> {
    evaluator: &'a E,
    params: &'a [f64],
    deadline: &'a Deadline<'a>,
    player: S::Player,
    pub stats: SearchStats,
}

impl<'a, S, E> SearchContext<'a, S, E>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    pub fn new(evaluator: &'a E, params: &'a [f64], deadline: &'a Deadline<'a>, player: S::Player) -> Self {
        SearchContext {
            evaluator,
            params,
            deadline,
            player,
            stats: SearchStats::default(),
        }
    }

    pub fn player(&self) -> S::Player {
        self.player
    }

    /// Entrada de um nó: conta o nó e verifica o prazo antes de qualquer trabalho.
    #[inline]
    pub(crate) fn enter(&mut self) -> Result<(), SearchTimeout> {
        self.deadline.check()?;
        self.stats.nodes += 1;
        Ok(())
    }

    /// Avaliação estática do ponto de vista do jogador que procura.
    #[inline]
    pub(crate) fn evaluate(&mut self, state: &S) -> f64 {
        self.stats.evaluations += 1;
        self.evaluator.score(state, self.player, self.params)
    }

    /// Caso base comum: `Some(valor)` quando o nó é folha.
    ///
    /// `depth` conta as camadas que ainda faltam explorar: com `depth <= 1`
    /// o nó é avaliado sem expandir.
    #[inline]
    pub(crate) fn leaf_value(&mut self, state: &S, depth: u32, moves: &[S::Move]) -> Option<f64> {
        if moves.is_empty() {
            return Some(self.evaluate(state));
        }
        if depth <= 1 {
            self.stats.depth_limited += 1;
            return Some(self.evaluate(state));
        }
        None
    }
}
