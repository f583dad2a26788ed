// Uma partida de Isolation entre dois agentes, com o tabuleiro a cada lance

use clap::Parser;
use isolation::core::Board;
use isolation::engine::AgentProfile;
use isolation::error::ConfigError;
use isolation::search::GameState;
use isolation::tournament::play_match;
use log::{error, info};
use std::process;
use std::time::Duration;

/// Joga uma partida e mostra cada posição.
///
/// Agentes no formato KIND[:HEURISTIC], com KIND em random, minimax, alphabeta
/// e HEURISTIC em open, improved, center, ratio, normalized_min, weighted, blend.
#[derive(Parser, Debug)]
#[command(name = "isolation_match", version, about)]
struct Cli {
    /// Primeiro jogador
    #[arg(long, default_value = "alphabeta:improved")]
    p1: AgentProfile,

    /// Segundo jogador
    #[arg(long, default_value = "random")]
    p2: AgentProfile,

    /// Pesos do primeiro jogador (obrigatórios com `weighted`)
    #[arg(long, value_delimiter = ',', value_name = "A,B,C")]
    p1_weights: Vec<f64>,

    /// Pesos do segundo jogador
    #[arg(long, value_delimiter = ',', value_name = "A,B,C")]
    p2_weights: Vec<f64>,

    /// Tempo por lance, em milissegundos
    #[arg(long, value_name = "MS", default_value_t = 150)]
    time_limit: u64,

    #[arg(long, default_value_t = 7)]
    width: i32,

    #[arg(long, default_value_t = 7)]
    height: i32,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Cli {
    fn players(&self) -> [AgentProfile; 2] {
        let weighted = |profile: &AgentProfile, weights: &[f64]| {
            if weights.is_empty() {
                profile.clone()
            } else {
                profile.clone().with_params(weights.to_vec())
            }
        };
        [weighted(&self.p1, &self.p1_weights), weighted(&self.p2, &self.p2_weights)]
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let players = cli.players();
    let time_limit = Duration::from_millis(cli.time_limit);
    let start = Board::new(cli.width, cli.height)?;
    let mut first = players[0].build::<Board>(cli.seed)?;
    let mut second = players[1].build::<Board>(cli.seed.wrapping_add(1))?;

    info!("{} (player 1) vs {} (player 2), {:?} per move", players[0], players[1], time_limit);

    let outcome = play_match::<Board>(start.clone(), [first.as_mut(), second.as_mut()], time_limit);

    // Repete a partida para mostrar cada posição
    let mut board = start;
    for (ply, mv) in outcome.history.iter().enumerate() {
        println!("Move {}: player {} -> {}", ply + 1, board.active_player(), mv);
        board = board.forecast(*mv);
        println!("{}", board);
    }

    println!(
        "Winner: player {} ({}) by {}",
        outcome.winner,
        players[outcome.winner.index()],
        outcome.termination
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use isolation::engine::AgentKind;
    use isolation::search::Heuristic;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_weighted_agent_takes_its_weights() {
        let cli = Cli::try_parse_from([
            "isolation_match",
            "--p1",
            "alphabeta:weighted",
            "--p1-weights",
            "0.4,0.5,0.4",
            "--p2",
            "mm:center",
        ])
        .unwrap();
        let [p1, p2] = cli.players();

        assert_eq!(p1.heuristic, Heuristic::WeightedLinear);
        assert_eq!(p1.config.params, vec![0.4, 0.5, 0.4]);
        assert!(p1.validate().is_ok());
        assert_eq!(p2.kind, AgentKind::Minimax);
        assert!(p2.config.params.is_empty());
    }

    #[test]
    fn test_weighted_agent_without_weights_fails_to_build() {
        let cli = Cli::try_parse_from(["isolation_match", "--p1", "ab:weighted"]).unwrap();
        let [p1, _] = cli.players();
        assert!(matches!(p1.validate(), Err(ConfigError::MissingWeights { .. })));
    }

    #[test]
    fn test_unknown_agent_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["isolation_match", "--p1", "greedy"]).is_err());
        assert!(Cli::try_parse_from(["isolation_match", "--p2", "ab:nope"]).is_err());
    }
}
