// Partida entre dois agentes com limite de tempo por lance.

use crate::engine::Agent;
use crate::search::{GameState, MoveClock};
use log::{trace, warn};
use std::fmt;
use std::time::Duration;

/// Como a partida terminou.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// O agente devolveu o lance depois do tempo esgotado.
    Timeout,
    /// Lance ilegal havendo lances legais.
    Forfeit,
    /// O agente a jogar não tinha lances legais.
    NoMoves,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Timeout => write!(f, "timeout"),
            Termination::Forfeit => write!(f, "forfeit"),
            Termination::NoMoves => write!(f, "no moves"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome<P, M> {
    pub winner: P,
    pub history: Vec<M>,
    pub termination: Termination,
}

/// Joga até ao fim. `players[0]` move-se quando `state.active_player()` é o
/// primeiro jogador da partida (o ativo no estado inicial).
pub fn play_match<S>(
    mut state: S,
    mut players: [&mut dyn Agent<S>; 2],
    time_limit: Duration,
) -> MatchOutcome<S::Player, S::Move>
where
    S: GameState,
{
    let first = state.active_player();
    let mut history = Vec::new();

    loop {
        let active = state.active_player();
        let seat = if active == first { 0 } else { 1 };
        let legal = state.legal_moves();

        let clock = MoveClock::start(time_limit);
        let time_left = || clock.time_left();
        let mv = players[seat].choose_move(&state, &time_left);

        let loser_outcome = |termination: Termination, history: Vec<S::Move>| MatchOutcome {
            winner: state.opponent_of(active),
            history,
            termination,
        };

        if clock.expired() {
            warn!("player {:?} ran out of time after {:?}", active, clock.elapsed());
            return loser_outcome(Termination::Timeout, history);
        }

        if !legal.contains(&mv) {
            if legal.is_empty() {
                return loser_outcome(Termination::NoMoves, history);
            }
            warn!("player {:?} played illegal move {:?}", active, mv);
            return loser_outcome(Termination::Forfeit, history);
        }

        trace!("player {:?} plays {:?}", active, mv);
        history.push(mv);
        state = state.forecast(mv);
    }
}
