// Agentes de Isolation com pesquisa minimax e alpha-beta limitada por prazo

pub mod core;
pub mod engine;
pub mod error;
pub mod moves;
pub mod search;
pub mod tournament;

pub use crate::core::*;
pub use crate::error::*;
