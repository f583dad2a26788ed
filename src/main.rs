// Torneio de Isolation: agentes de teste contra os adversários de referência

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use isolation::error::TournamentError;
use isolation::tournament::*;
use log::{error, info};
use std::process;
use std::time::Duration;

/// Joga cada agente de teste contra os adversários de referência, nos dois lugares.
#[derive(Parser, Debug)]
#[command(name = "isolation_tournament", version, about)]
struct Cli {
    /// Rondas contra cada adversário
    #[arg(long, default_value_t = 5)]
    matches: usize,

    /// Tempo por lance, em milissegundos
    #[arg(long, value_name = "MS", default_value_t = 150)]
    time_limit: u64,

    /// Threads do torneio (por omissão, uma por CPU)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    threads: Option<usize>,

    /// Semente das aberturas e dos agentes aleatórios
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 7)]
    width: i32,

    #[arg(long, default_value_t = 7)]
    height: i32,

    /// Pesos do AB_Custom_3 (improved, open, center)
    #[arg(long, value_delimiter = ',', value_name = "A,B,C")]
    weights: Option<Vec<f64>>,
}

impl Cli {
    fn tournament_config(&self) -> TournamentConfig {
        let defaults = TournamentConfig::default();
        TournamentConfig {
            matches: self.matches,
            time_limit: Duration::from_millis(self.time_limit),
            threads: self.threads.unwrap_or(defaults.threads),
            width: self.width,
            height: self.height,
            seed: self.seed,
        }
    }
}

fn run(cli: Cli) -> Result<(), TournamentError> {
    let config = cli.tournament_config();
    let cpu_agents = default_cpu_agents();
    let mut test_agents = default_test_agents();

    if let Some(weights) = cli.weights {
        if let Some(last) = test_agents.last_mut() {
            *last = weighted_profile(&last.name, weights);
        }
    }

    info!(
        "{} test agents vs {} opponents, {} rounds each",
        test_agents.len(),
        cpu_agents.len(),
        config.matches
    );

    let report = run_tournament(&config, &cpu_agents, &test_agents)?;
    println!("{}", report);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("tournament failed: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "isolation_tournament",
            "--matches",
            "2",
            "--time-limit",
            "300",
            "--seed",
            "7",
            "--width",
            "5",
        ])
        .unwrap();
        let config = cli.tournament_config();
        assert_eq!(config.matches, 2);
        assert_eq!(config.time_limit, Duration::from_millis(300));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 7);
        assert_eq!(config.threads, TournamentConfig::default().threads);
    }

    #[test]
    fn test_weights_are_comma_separated() {
        let cli = Cli::try_parse_from(["isolation_tournament", "--weights", "0.4,0.5,0.4"]).unwrap();
        assert_eq!(cli.weights, Some(vec![0.4, 0.5, 0.4]));

        let cli = Cli::try_parse_from(["isolation_tournament"]).unwrap();
        assert_eq!(cli.weights, None);
    }

    #[test]
    fn test_bad_flags_are_reported() {
        assert!(Cli::try_parse_from(["isolation_tournament", "--matches"]).is_err());
        assert!(Cli::try_parse_from(["isolation_tournament", "--threads", "many"]).is_err());
        assert!(Cli::try_parse_from(["isolation_tournament", "--threads", "0"]).is_err());
        assert!(Cli::try_parse_from(["isolation_tournament", "--bogus", "1"]).is_err());
    }
}
