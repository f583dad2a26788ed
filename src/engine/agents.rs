//! Agentes de jogo: minimax fixo, alpha-beta com aprofundamento iterativo e aleatório.

use super::config::AgentConfig;
use crate::error::{ConfigError, SearchTimeout};
use crate::search::{alpha_beta, minimax, Deadline, Evaluator, GameState, SearchContext, SearchStats};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;

/// Um jogador automático.
///
/// `choose_move` nunca falha: devolve sempre um lance, possivelmente
/// `S::NO_MOVE`, mesmo se o prazo já tiver expirado à entrada.
pub trait Agent<S: GameState> {
    fn choose_move(&mut self, state: &S, time_left: &dyn Fn() -> Duration) -> S::Move;

    /// Resumo da última decisão, se o agente procura.
    fn last_report(&self) -> Option<SearchReport> {
        None
    }
}

/// Resumo de uma decisão.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchReport {
    /// Última profundidade completada (0 se nenhuma terminou).
    pub depth: u32,
    pub score: f64,
    pub nodes: u64,
    pub cutoffs: u64,
    pub timed_out: bool,
}

impl SearchReport {
    fn absorb(&mut self, stats: &SearchStats) {
        self.nodes += stats.nodes;
        self.cutoffs += stats.cutoffs;
    }
}

/// Minimax de profundidade fixa.
pub struct MinimaxAgent<E> {
    config: AgentConfig,
    evaluator: E,
    last: Option<SearchReport>,
}

impl<E> MinimaxAgent<E> {
    pub fn new(config: AgentConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(MinimaxAgent {
            config,
            evaluator,
            last: None,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl<S, E> Agent<S> for MinimaxAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_move(&mut self, state: &S, time_left: &dyn Fn() -> Duration) -> S::Move {
        let deadline = Deadline::new(time_left, self.config.timeout);
        let mut ctx = SearchContext::new(&self.evaluator, &self.config.params, &deadline, state.active_player());
        let mut report = SearchReport::default();

        let best_move = match minimax(&mut ctx, state, self.config.search_depth) {
            Ok(result) => {
                report.depth = result.depth;
                report.score = result.score;
                result.best_move
            }
            Err(SearchTimeout) => {
                debug!("minimax depth {} timed out", self.config.search_depth);
                report.timed_out = true;
                S::NO_MOVE
            }
        };

        report.absorb(&ctx.stats);
        self.last = Some(report);
        best_move
    }

    fn last_report(&self) -> Option<SearchReport> {
        self.last
    }
}

/// Alpha-beta com aprofundamento iterativo até ao prazo.
pub struct AlphaBetaAgent<E> {
    config: AgentConfig,
    evaluator: E,
    last: Option<SearchReport>,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(config: AgentConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(AlphaBetaAgent {
            config,
            evaluator,
            last: None,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl<S, E> Agent<S> for AlphaBetaAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_move(&mut self, state: &S, time_left: &dyn Fn() -> Duration) -> S::Move {
        let deadline = Deadline::new(time_left, self.config.timeout);
        let player = state.active_player();

        // Garante um lance válido mesmo que a profundidade 1 não termine
        let mut best_move = state.legal_moves().first().copied().unwrap_or(S::NO_MOVE);
        let mut report = SearchReport::default();
        let mut depth = 1;

        loop {
            let mut ctx = SearchContext::new(&self.evaluator, &self.config.params, &deadline, player);

            match alpha_beta(&mut ctx, state, depth) {
                Ok(result) => {
                    report.absorb(&ctx.stats);
                    best_move = result.best_move;
                    report.depth = depth;
                    report.score = result.score;

                    debug!(
                        "depth {} done: move {:?} score {} nodes {} cutoffs {}",
                        depth, result.best_move, result.score, ctx.stats.nodes, ctx.stats.cutoffs
                    );

                    // Nenhuma folha cortada por profundidade: mais fundo dá o mesmo resultado
                    if ctx.stats.depth_limited == 0 {
                        trace!("search space exhausted at depth {}", depth);
                        break;
                    }
                    depth += 1;
                }
                Err(SearchTimeout) => {
                    // A profundidade interrompida é descartada por inteiro
                    report.absorb(&ctx.stats);
                    report.timed_out = true;
                    debug!(
                        "depth {} aborted after {} nodes, keeping depth {} move {:?}",
                        depth, ctx.stats.nodes, report.depth, best_move
                    );
                    break;
                }
            }
        }

        self.last = Some(report);
        best_move
    }

    fn last_report(&self) -> Option<SearchReport> {
        self.last
    }
}

/// Escolhe um lance legal ao acaso.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn choose_move(&mut self, state: &S, _time_left: &dyn Fn() -> Duration) -> S::Move {
        state
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(S::NO_MOVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Move, PlayerId};
    use crate::search::Heuristic;

    fn plenty() -> Duration {
        Duration::from_secs(3600)
    }

    fn expired() -> Duration {
        Duration::ZERO
    }

    #[test]
    fn test_alpha_beta_falls_back_to_first_legal_move() {
        let board = Board::default();
        let mut agent = AlphaBetaAgent::new(AgentConfig::default(), Heuristic::Improved).unwrap();
        let mv = agent.choose_move(&board, &expired);

        assert_eq!(mv, Move::new(0, 0));
        let report = Agent::<Board>::last_report(&agent).unwrap();
        assert_eq!(report.depth, 0);
        assert!(report.timed_out);
    }

    #[test]
    fn test_minimax_falls_back_to_sentinel() {
        let board = Board::default();
        let mut agent = MinimaxAgent::new(AgentConfig::default(), Heuristic::Improved).unwrap();
        assert_eq!(agent.choose_move(&board, &expired), Move::NONE);
    }

    #[test]
    fn test_no_moves_gives_sentinel() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(1, 1)).unwrap();
        board.apply_move(Move::new(1, 2)).unwrap();

        let mut ab = AlphaBetaAgent::new(AgentConfig::default(), Heuristic::Improved).unwrap();
        let mut mm = MinimaxAgent::new(AgentConfig::default(), Heuristic::Improved).unwrap();
        let mut random = RandomAgent::with_seed(7);
        assert_eq!(ab.choose_move(&board, &plenty), Move::NONE);
        assert_eq!(mm.choose_move(&board, &plenty), Move::NONE);
        assert_eq!(random.choose_move(&board, &plenty), Move::NONE);
    }

    #[test]
    fn test_iterative_deepening_stops_when_tree_is_exhausted() {
        // Num 3x3 o jogo acaba depressa; sem prazo a busca tem de parar sozinha
        let board = Board::new(3, 3).unwrap().forecast(Move::new(0, 0)).forecast(Move::new(2, 2));
        let mut agent = AlphaBetaAgent::new(AgentConfig::default(), Heuristic::Improved).unwrap();
        let mv = agent.choose_move(&board, &plenty);

        assert!(board.legal_moves().contains(&mv));
        let report = Agent::<Board>::last_report(&agent).unwrap();
        assert!(!report.timed_out);
        assert!(report.depth >= 1 && report.depth <= 9);
    }

    #[test]
    fn test_minimax_agent_plays_searched_move() {
        let board = Board::default().forecast(Move::new(0, 0)).forecast(Move::new(6, 6));
        let mut agent = MinimaxAgent::new(AgentConfig::default().with_depth(1), Heuristic::OpenMove).unwrap();
        assert_eq!(agent.choose_move(&board, &plenty), Move::new(1, 2));
        assert_eq!(board.active_player(), PlayerId::One);
    }

    #[test]
    fn test_random_agent_is_reproducible_and_legal() {
        let board = Board::default();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..10 {
            let mv = a.choose_move(&board, &plenty);
            assert_eq!(mv, b.choose_move(&board, &plenty));
            assert!(board.is_open(mv));
        }
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let config = AgentConfig::default().with_depth(0);
        assert!(MinimaxAgent::new(config.clone(), Heuristic::Center).is_err());
        assert!(AlphaBetaAgent::new(config, Heuristic::Center).is_err());
    }
}
