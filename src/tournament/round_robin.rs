//! Torneio "justo": cada agente de teste joga contra cada adversário a partir
//! de aberturas aleatórias, uma vez como primeiro jogador e outra como segundo.

use super::match_play::{play_match, Termination};
use crate::core::Board;
use crate::engine::{Agent, AgentConfig, AgentKind, AgentProfile};
use crate::error::{ConfigError, TournamentError};
use crate::search::{GameState, Heuristic};
use crossbeam::channel;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;
use std::time::Duration;

/// Configuração do torneio
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentConfig {
    /// Rondas contra cada adversário (cada ronda = duas partidas por agente de teste).
    pub matches: usize,
    /// Tempo por lance.
    pub time_limit: Duration,
    pub threads: usize,
    pub width: i32,
    pub height: i32,
    /// Semente das aberturas e dos agentes aleatórios.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            matches: 5,
            time_limit: Duration::from_millis(150),
            threads: num_cpus::get().max(1),
            width: 7,
            height: 7,
            seed: None,
        }
    }
}

/// Adversários de referência.
pub fn default_cpu_agents() -> Vec<AgentProfile> {
    vec![
        AgentProfile::random("Random"),
        AgentProfile::minimax("MM_Open", Heuristic::OpenMove),
        AgentProfile::minimax("MM_Center", Heuristic::Center),
        AgentProfile::minimax("MM_Improved", Heuristic::Improved),
        AgentProfile::alpha_beta("AB_Open", Heuristic::OpenMove),
        AgentProfile::alpha_beta("AB_Center", Heuristic::Center),
        AgentProfile::alpha_beta("AB_Improved", Heuristic::Improved),
    ]
}

/// Agentes avaliados: a linha de base `AB_Improved` e as heurísticas próprias.
pub fn default_test_agents() -> Vec<AgentProfile> {
    vec![
        AgentProfile::alpha_beta("AB_Improved", Heuristic::Improved),
        AgentProfile::alpha_beta("AB_Custom", Heuristic::MobilityRatio),
        AgentProfile::alpha_beta("AB_Custom_2", Heuristic::NormalizedMin),
        AgentProfile::alpha_beta("AB_Custom_3", Heuristic::WeightedLinear).with_params(vec![0.4, 0.5, 0.4]),
    ]
}

/// Uma partida a jogar.
#[derive(Debug, Clone)]
struct MatchJob {
    cpu: usize,
    test: usize,
    test_first: bool,
    opening: Board,
    seed: u64,
}

/// Resultado de uma partida, do ponto de vista do agente de teste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub cpu: usize,
    pub test: usize,
    pub test_first: bool,
    pub test_won: bool,
    pub termination: Termination,
    pub moves: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub won: usize,
    pub lost: usize,
}

/// Quadro de resultados [adversário][agente de teste].
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentReport {
    pub cpu_names: Vec<String>,
    pub test_names: Vec<String>,
    pub tallies: Vec<Vec<Tally>>,
    /// Derrotas dos agentes de teste por tempo.
    pub timeouts: usize,
    /// Derrotas dos agentes de teste por lance ilegal.
    pub forfeits: usize,
}

impl TournamentReport {
    pub fn new(cpu_agents: &[AgentProfile], test_agents: &[AgentProfile]) -> Self {
        TournamentReport {
            cpu_names: cpu_agents.iter().map(|a| a.name.clone()).collect(),
            test_names: test_agents.iter().map(|a| a.name.clone()).collect(),
            tallies: vec![vec![Tally::default(); test_agents.len()]; cpu_agents.len()],
            timeouts: 0,
            forfeits: 0,
        }
    }

    pub fn record(&mut self, record: &MatchRecord) {
        let tally = &mut self.tallies[record.cpu][record.test];
        if record.test_won {
            tally.won += 1;
        } else {
            tally.lost += 1;
            match record.termination {
                Termination::Timeout => self.timeouts += 1,
                Termination::Forfeit => self.forfeits += 1,
                Termination::NoMoves => {}
            }
        }
    }

    pub fn total_matches(&self, test: usize) -> usize {
        self.tallies.iter().map(|row| row[test].won + row[test].lost).sum()
    }

    /// Percentagem de vitórias de um agente de teste.
    pub fn win_rate(&self, test: usize) -> f64 {
        let total = self.total_matches(test);
        if total == 0 {
            return 0.0;
        }
        let won: usize = self.tallies.iter().map(|row| row[test].won).sum();
        100.0 * won as f64 / total as f64
    }
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 9 + 13 + 13 * self.test_names.len();

        write!(f, "{:^9}{:^13}", "Match #", "Opponent")?;
        for name in &self.test_names {
            write!(f, "{:^13}", name)?;
        }
        writeln!(f)?;

        write!(f, "{:^22}", "")?;
        for _ in &self.test_names {
            write!(f, " {:^5}| {:^5}", "Won", "Lost")?;
        }
        writeln!(f)?;

        for (idx, (name, row)) in self.cpu_names.iter().zip(&self.tallies).enumerate() {
            write!(f, "{:^9}{:^13}", idx + 1, name)?;
            for tally in row {
                write!(f, " {:^5}| {:^5}", tally.won, tally.lost)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "-".repeat(width))?;
        write!(f, "{:^9}{:^13}", "", "Win Rate:")?;
        for test in 0..self.test_names.len() {
            write!(f, "{:^13}", format!("{:.1}%", self.win_rate(test)))?;
        }
        writeln!(f)?;

        if self.timeouts > 0 || self.forfeits > 0 {
            writeln!(f, "Test agents lost {} matches by timeout and {} by forfeit", self.timeouts, self.forfeits)?;
        }
        Ok(())
    }
}

/// Abertura aleatória: um lance de cada jogador.
fn random_opening(base: &Board, rng: &mut StdRng) -> Board {
    let mut board = base.clone();
    for _ in 0..2 {
        if let Some(&mv) = board.legal_moves().choose(rng) {
            board = board.forecast(mv);
        }
    }
    board
}

fn plan_jobs(config: &TournamentConfig, cpus: usize, tests: usize) -> Result<Vec<MatchJob>, ConfigError> {
    let base = Board::new(config.width, config.height)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut jobs = Vec::with_capacity(cpus * config.matches * tests * 2);
    for cpu in 0..cpus {
        for _ in 0..config.matches {
            // A mesma abertura para todas as partidas desta ronda
            let opening = random_opening(&base, &mut rng);
            for test in 0..tests {
                for test_first in [true, false] {
                    jobs.push(MatchJob {
                        cpu,
                        test,
                        test_first,
                        opening: opening.clone(),
                        seed: rng.gen(),
                    });
                }
            }
        }
    }
    Ok(jobs)
}

fn play_job(
    job: &MatchJob,
    cpu_agents: &[AgentProfile],
    test_agents: &[AgentProfile],
    time_limit: Duration,
) -> Result<MatchRecord, ConfigError> {
    let mut cpu = cpu_agents[job.cpu].build::<Board>(job.seed)?;
    let mut test = test_agents[job.test].build::<Board>(job.seed.wrapping_add(1))?;

    let players: [&mut dyn Agent<Board>; 2] = if job.test_first {
        [test.as_mut(), cpu.as_mut()]
    } else {
        [cpu.as_mut(), test.as_mut()]
    };

    // O primeiro a jogar é o jogador ativo da abertura
    let first = job.opening.active_player();
    let outcome = play_match::<Board>(job.opening.clone(), players, time_limit);
    let test_seat = if job.test_first { first } else { !first };

    Ok(MatchRecord {
        cpu: job.cpu,
        test: job.test,
        test_first: job.test_first,
        test_won: outcome.winner == test_seat,
        termination: outcome.termination,
        moves: outcome.history.len(),
    })
}

/// Corre o torneio completo e devolve o quadro de resultados.
pub fn run_tournament(
    config: &TournamentConfig,
    cpu_agents: &[AgentProfile],
    test_agents: &[AgentProfile],
) -> Result<TournamentReport, TournamentError> {
    if cpu_agents.is_empty() {
        return Err(TournamentError::NoAgents("opponent"));
    }
    if test_agents.is_empty() {
        return Err(TournamentError::NoAgents("test"));
    }
    for profile in cpu_agents.iter().chain(test_agents) {
        profile.validate()?;
    }

    let jobs = plan_jobs(config, cpu_agents.len(), test_agents.len())?;
    let total = jobs.len();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()?;

    info!(
        "playing {} matches on {} threads, {:?} per move",
        total,
        pool.current_num_threads(),
        config.time_limit
    );

    let mut report = TournamentReport::new(cpu_agents, test_agents);
    let mut first_error: Option<ConfigError> = None;
    let (tx, rx) = channel::unbounded();
    let time_limit = config.time_limit;

    crossbeam::scope(|s| {
        s.spawn(|_| {
            pool.install(|| {
                jobs.par_iter().for_each_with(tx, |tx, job| {
                    // O recetor vive até ao fim do scope
                    tx.send(play_job(job, cpu_agents, test_agents, time_limit))
                        .expect("aggregator alive");
                });
            });
        });

        // O canal fecha quando o último worker termina
        for (done, result) in rx.iter().enumerate() {
            match result {
                Ok(record) => {
                    report.record(&record);
                    info!(
                        "[{}/{}] {} vs {} ({}): {} in {} moves by {}",
                        done + 1,
                        total,
                        test_agents[record.test].name,
                        cpu_agents[record.cpu].name,
                        if record.test_first { "first" } else { "second" },
                        if record.test_won { "won" } else { "lost" },
                        record.moves,
                        record.termination
                    );
                    if !record.test_won && record.termination != Termination::NoMoves {
                        warn!("{} lost by {}", test_agents[record.test].name, record.termination);
                    }
                }
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
    })
    .map_err(|_| TournamentError::WorkerPanicked)?;

    if let Some(e) = first_error {
        return Err(e.into());
    }
    Ok(report)
}

/// Configuração de agente com os pesos dados (usada pelo binário).
pub fn weighted_profile(name: &str, params: Vec<f64>) -> AgentProfile {
    AgentProfile::new(
        name,
        AgentKind::AlphaBeta,
        Heuristic::WeightedLinear,
        AgentConfig::default().with_params(params),
    )
}
