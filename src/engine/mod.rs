pub mod agents;
pub mod config;
pub mod profile;

pub use agents::*;
pub use config::*;
pub use profile::*;
