pub mod alpha_beta;
pub mod context;
pub mod deadline;
pub mod evaluation;
pub mod game;
pub mod minimax;

pub use alpha_beta::{alpha_beta, alpha_beta_root};
pub use context::*;
pub use deadline::*;
pub use evaluation::*;
pub use game::*;
pub use minimax::minimax;
