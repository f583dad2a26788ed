// Ficheiro: src/error.rs
// Descrição: Tipos de erro dos agentes de Isolation.
//
// `SearchTimeout` é a única condição de que o núcleo de busca recupera: é
// apanhada pelos agentes e nunca sai de `choose_move`.

use thiserror::Error;

/// O monitor de prazo reportou menos tempo que o limiar configurado.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline reached")]
pub struct SearchTimeout;

/// Erros ao criar ou alterar um tabuleiro
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board size: {width}x{height} (must have 1-128 cells)")]
    InvalidSize { width: i32, height: i32 },

    #[error("Move ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("Cell ({row}, {col}) is already blocked")]
    Blocked { row: i32, col: i32 },
}

/// Configuração inválida de agente ou de torneio
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    DepthTooLow,

    // Com o relógio saturado em zero, um limiar nulo nunca abortaria a busca
    #[error("search timeout threshold must be greater than zero")]
    ZeroTimeout,

    #[error("heuristic {heuristic} needs {needed} weights, got {got}")]
    MissingWeights {
        heuristic: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("unknown agent kind: {0}")]
    UnknownAgentKind(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Erros ao correr um torneio
#[derive(Error, Debug)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build the match thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("a match worker panicked")]
    WorkerPanicked,

    #[error("tournament needs at least one {0} agent")]
    NoAgents(&'static str),
}
