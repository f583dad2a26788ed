use super::game::{GameState, SpatialState};
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Mobilidade máxima de um jogador (saltos de cavalo).
const MAX_PLAYER_MOVES: f64 = 8.0;

/// Pontua um estado do ponto de vista de `player`.
///
/// Contrato: `-inf` se `player` perdeu, `+inf` se ganhou, caso contrário um
/// valor finito. `params` é o vetor de pesos do chamador, repassado sem
/// alterações em cada folha.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: S::Player, params: &[f64]) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, S::Player, &[f64]) -> f64,
{
    fn score(&self, state: &S, player: S::Player, params: &[f64]) -> f64 {
        self(state, player, params)
    }
}

/// Heurísticas disponíveis, escolhidas na construção do agente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Número de lances do jogador.
    OpenMove,
    /// Diferença de mobilidade (próprios - adversário).
    Improved,
    /// Quadrado da distância ao centro.
    Center,
    /// Razão de mobilidade (próprios / adversário).
    MobilityRatio,
    /// Mínimo das quatro heurísticas normalizadas.
    NormalizedMin,
    /// Combinação linear de improved, open e center com os pesos `params[0..3]`.
    WeightedLinear,
    /// Média de improved, open e center.
    EqualBlend,
}

impl Heuristic {
    pub const ALL: [Heuristic; 7] = [
        Heuristic::OpenMove,
        Heuristic::Improved,
        Heuristic::Center,
        Heuristic::MobilityRatio,
        Heuristic::NormalizedMin,
        Heuristic::WeightedLinear,
        Heuristic::EqualBlend,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::OpenMove => "open",
            Heuristic::Improved => "improved",
            Heuristic::Center => "center",
            Heuristic::MobilityRatio => "ratio",
            Heuristic::NormalizedMin => "normalized_min",
            Heuristic::WeightedLinear => "weighted",
            Heuristic::EqualBlend => "blend",
        }
    }

    /// Número de pesos que a heurística lê de `params`.
    pub fn required_weights(&self) -> usize {
        match self {
            Heuristic::WeightedLinear => 3,
            _ => 0,
        }
    }

    pub fn validate_params(&self, params: &[f64]) -> Result<(), ConfigError> {
        let needed = self.required_weights();
        if params.len() < needed {
            return Err(ConfigError::MissingWeights {
                heuristic: self.name(),
                needed,
                got: params.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .iter()
            .copied()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownHeuristic(s.to_string()))
    }
}

impl<S: SpatialState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: S::Player, params: &[f64]) -> f64 {
        // Estados terminais antes de qualquer cálculo de mobilidade
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }

        match self {
            Heuristic::OpenMove => open_move(state, player),
            Heuristic::Improved => improved(state, player),
            Heuristic::Center => center(state, player),
            Heuristic::MobilityRatio => mobility_ratio(state, player),
            Heuristic::NormalizedMin => {
                let half_w = state.width() as f64 / 2.0;
                let half_h = state.height() as f64 / 2.0;
                let center_max = half_w * half_w + half_h * half_h;

                let scores = [
                    mobility_ratio(state, player) / MAX_PLAYER_MOVES,
                    improved(state, player) / (MAX_PLAYER_MOVES - 1.0),
                    open_move(state, player) / MAX_PLAYER_MOVES,
                    center(state, player) / center_max,
                ];
                scores.iter().copied().fold(f64::INFINITY, f64::min)
            }
            Heuristic::WeightedLinear => {
                let weight = |i: usize| params.get(i).copied().unwrap_or(0.0);
                weight(0) * improved(state, player)
                    + weight(1) * open_move(state, player)
                    + weight(2) * center(state, player)
            }
            Heuristic::EqualBlend => {
                (improved(state, player) + open_move(state, player) + center(state, player)) / 3.0
            }
        }
    }
}

fn open_move<S: GameState>(state: &S, player: S::Player) -> f64 {
    state.mobility(player) as f64
}

fn improved<S: GameState>(state: &S, player: S::Player) -> f64 {
    let own = state.mobility(player) as f64;
    let opp = state.mobility(state.opponent_of(player)) as f64;
    own - opp
}

fn mobility_ratio<S: GameState>(state: &S, player: S::Player) -> f64 {
    let opp = state.mobility(state.opponent_of(player));
    if opp == 0 {
        return f64::INFINITY;
    }
    state.mobility(player) as f64 / opp as f64
}

fn center<S: SpatialState>(state: &S, player: S::Player) -> f64 {
    let Some((row, col)) = state.location(player) else {
        // Jogador ainda não colocado
        return 0.0;
    };
    let half_w = state.width() as f64 / 2.0;
    let half_h = state.height() as f64 / 2.0;
    let dy = half_h - row as f64;
    let dx = half_w - col as f64;
    dy * dy + dx * dx
}
