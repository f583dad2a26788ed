use super::agents::{AlphaBetaAgent, Agent, MinimaxAgent, RandomAgent};
use super::config::AgentConfig;
use crate::error::ConfigError;
use crate::search::{Heuristic, SpatialState};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Random,
    Minimax,
    AlphaBeta,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Random => write!(f, "random"),
            AgentKind::Minimax => write!(f, "minimax"),
            AgentKind::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "minimax" | "mm" => Ok(AgentKind::Minimax),
            "alphabeta" | "ab" => Ok(AgentKind::AlphaBeta),
            _ => Err(ConfigError::UnknownAgentKind(s.to_string())),
        }
    }
}

/// Receita de um agente: cada partida constrói instâncias novas a partir dela,
/// sem estado partilhado entre partidas.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    pub name: String,
    pub kind: AgentKind,
    pub heuristic: Heuristic,
    pub config: AgentConfig,
}

impl AgentProfile {
    pub fn new(name: &str, kind: AgentKind, heuristic: Heuristic, config: AgentConfig) -> Self {
        AgentProfile {
            name: name.to_string(),
            kind,
            heuristic,
            config,
        }
    }

    pub fn random(name: &str) -> Self {
        Self::new(name, AgentKind::Random, Heuristic::OpenMove, AgentConfig::default())
    }

    pub fn minimax(name: &str, heuristic: Heuristic) -> Self {
        Self::new(name, AgentKind::Minimax, heuristic, AgentConfig::default())
    }

    pub fn alpha_beta(name: &str, heuristic: Heuristic) -> Self {
        Self::new(name, AgentKind::AlphaBeta, heuristic, AgentConfig::default())
    }

    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.config.params = params;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        if self.kind != AgentKind::Random {
            self.heuristic.validate_params(&self.config.params)?;
        }
        Ok(())
    }

    /// Constrói um agente novo. `seed` só é usado pelo agente aleatório.
    pub fn build<S>(&self, seed: u64) -> Result<Box<dyn Agent<S> + Send>, ConfigError>
    where
        S: SpatialState + 'static,
    {
        self.validate()?;
        let config = self.config.clone();

        let agent: Box<dyn Agent<S> + Send> = match self.kind {
            AgentKind::Random => Box::new(RandomAgent::with_seed(seed)),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(config, self.heuristic)?),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(config, self.heuristic)?),
        };
        Ok(agent)
    }
}

/// `KIND[:HEURISTIC]`, por exemplo `alphabeta:improved` ou `random`.
/// Sem heurística usa `improved`; os pesos ficam vazios.
impl FromStr for AgentProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, heuristic) = match s.split_once(':') {
            Some((kind, heuristic)) => (kind.parse()?, heuristic.parse()?),
            None => (s.parse()?, Heuristic::Improved),
        };
        Ok(AgentProfile::new(s, kind, heuristic, AgentConfig::default()))
    }
}

impl fmt::Display for AgentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
