use crate::error::ConfigError;
use std::time::Duration;

/// Configuração de um agente, fixada na construção.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Profundidade da busca fixa (minimax). Ignorada pelo aprofundamento iterativo.
    pub search_depth: u32,
    /// Tempo restante abaixo do qual a busca aborta.
    pub timeout: Duration,
    /// Pesos das heurísticas parametrizadas.
    pub params: Vec<f64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            search_depth: 3,
            timeout: Duration::from_millis(10),
            params: Vec::new(),
        }
    }
}

impl AgentConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.params = params;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth < 1 {
            return Err(ConfigError::DepthTooLow);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
