pub mod match_play;
pub mod round_robin;

pub use match_play::*;
pub use round_robin::*;
