// Ficheiro: src/core/types.rs
// Descrição: Tipos fundamentais do jogo Isolation (jogadores, lances, bitboards).

use std::fmt;

// Um Bitboard de 128 bits. Cada bit representa uma casa (índice = row + col * height).
pub type Bitboard = u128;

/// Número máximo de casas suportado pelo bitboard.
pub const MAX_CELLS: usize = 128;

// Enum para representar o jogador (primeiro ou segundo a jogar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl std::ops::Not for PlayerId {
    type Output = PlayerId;

    fn not(self) -> Self::Output {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "1"),
            PlayerId::Two => write!(f, "2"),
        }
    }
}

// Struct para representar um lance: a casa de destino (linha, coluna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinela "sem lance legal".
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Move { row, col }
    }

    pub fn is_none(&self) -> bool {
        *self == Move::NONE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(!PlayerId::One, PlayerId::Two);
        assert_eq!(!!PlayerId::Two, PlayerId::Two);
    }

    #[test]
    fn test_sentinel_move() {
        assert!(Move::NONE.is_none());
        assert!(!Move::new(0, 0).is_none());
        assert_eq!(Move::from((-1, -1)), Move::NONE);
        assert_eq!(Move::new(2, 3).to_string(), "(2, 3)");
    }
}
