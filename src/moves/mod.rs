// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances.

pub mod knight;

pub use knight::*;
