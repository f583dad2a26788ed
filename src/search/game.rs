//! Interface estreita entre o núcleo de busca e o estado do jogo.
//!
//! O núcleo nunca altera um estado: só pede os lances legais e os estados
//! sucessores via `forecast`.

use std::fmt::Debug;

/// Estado de um jogo de dois jogadores, de soma zero, visto pelo núcleo de busca.
pub trait GameState: Clone {
    type Player: Copy + Eq + Debug;
    type Move: Copy + Eq + Debug;

    /// Sentinela devolvida quando não existe lance legal.
    const NO_MOVE: Self::Move;

    /// Jogador que joga neste estado.
    fn active_player(&self) -> Self::Player;

    /// Lances legais do jogador ativo. A ordem é significativa: é a ordem de
    /// enumeração e de desempate da busca.
    fn legal_moves(&self) -> Vec<Self::Move> {
        self.legal_moves_for(self.active_player())
    }

    fn legal_moves_for(&self, player: Self::Player) -> Vec<Self::Move>;

    /// Número de lances legais de `player`.
    fn mobility(&self, player: Self::Player) -> usize {
        self.legal_moves_for(player).len()
    }

    /// Estado sucessor após `mv`. Não altera `self`.
    fn forecast(&self, mv: Self::Move) -> Self;

    fn is_winner(&self, player: Self::Player) -> bool;

    fn is_loser(&self, player: Self::Player) -> bool;

    fn opponent_of(&self, player: Self::Player) -> Self::Player;
}

/// Estados com geometria, usados pelas heurísticas de distância ao centro.
pub trait SpatialState: GameState {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Posição (linha, coluna) de `player`, ou `None` se ainda não jogou.
    fn location(&self, player: Self::Player) -> Option<(i32, i32)>;
}
