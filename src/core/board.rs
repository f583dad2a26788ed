// Ficheiro: src/core/board.rs
// Descrição: Tabuleiro do jogo Isolation (dois jogadores que saltam em L e bloqueiam casas).

use super::types::*;
use crate::error::BoardError;
use crate::moves::{cell_index, count_knight_moves, generate_knight_moves};
use crate::search::{GameState, SpatialState};
use std::fmt;

// A struct principal do tabuleiro. As casas bloqueadas ficam num Bitboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,

    // Casas já visitadas por qualquer jogador.
    pub blocked: Bitboard,

    // Última casa de cada jogador (None antes do primeiro lance).
    pub locations: [Option<Move>; 2],

    // De quem é a vez de jogar.
    pub active: PlayerId,

    pub move_count: u32,
}

impl Board {
    /// Cria um tabuleiro vazio `width` x `height`.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 || (width as usize) * (height as usize) > MAX_CELLS {
            return Err(BoardError::InvalidSize { width, height });
        }

        Ok(Board {
            width,
            height,
            blocked: 0,
            locations: [None, None],
            active: PlayerId::One,
            move_count: 0,
        })
    }

    #[inline]
    fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0 && mv.row < self.height && mv.col >= 0 && mv.col < self.width
    }

    #[inline]
    fn bit(&self, mv: Move) -> Bitboard {
        1u128 << cell_index(mv.row, mv.col, self.height)
    }

    pub fn is_open(&self, mv: Move) -> bool {
        self.in_bounds(mv) && self.blocked & self.bit(mv) == 0
    }

    pub fn inactive(&self) -> PlayerId {
        !self.active
    }

    /// Bloqueia uma casa sem mover nenhum jogador (obstáculos iniciais).
    pub fn block(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.in_bounds(mv) {
            return Err(BoardError::OutOfBounds { row: mv.row, col: mv.col });
        }
        self.blocked |= self.bit(mv);
        Ok(())
    }

    /// Aplica o lance do jogador ativo. Não verifica a legalidade do salto,
    /// só que a casa existe e está livre.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.in_bounds(mv) {
            return Err(BoardError::OutOfBounds { row: mv.row, col: mv.col });
        }
        if self.blocked & self.bit(mv) != 0 {
            return Err(BoardError::Blocked { row: mv.row, col: mv.col });
        }

        self.blocked |= self.bit(mv);
        self.locations[self.active.index()] = Some(mv);
        self.active = !self.active;
        self.move_count += 1;
        Ok(())
    }

    /// Todas as casas livres, coluna a coluna.
    fn open_cells(&self) -> Vec<Move> {
        let mut cells = Vec::new();
        for col in 0..self.width {
            for row in 0..self.height {
                let mv = Move::new(row, col);
                if self.blocked & self.bit(mv) == 0 {
                    cells.push(mv);
                }
            }
        }
        cells
    }

    fn open_cell_count(&self) -> usize {
        (self.width * self.height) as usize - self.blocked.count_ones() as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: 7,
            height: 7,
            blocked: 0,
            locations: [None, None],
            active: PlayerId::One,
            move_count: 0,
        }
    }
}

impl GameState for Board {
    type Player = PlayerId;
    type Move = Move;

    const NO_MOVE: Move = Move::NONE;

    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves_for(&self, player: PlayerId) -> Vec<Move> {
        match self.locations[player.index()] {
            None => self.open_cells(),
            Some(from) => generate_knight_moves(from, self.width, self.height, self.blocked),
        }
    }

    fn mobility(&self, player: PlayerId) -> usize {
        match self.locations[player.index()] {
            None => self.open_cell_count(),
            Some(from) => count_knight_moves(from, self.width, self.height, self.blocked),
        }
    }

    fn forecast(&self, mv: Move) -> Self {
        let mut next = self.clone();
        if let Err(e) = next.apply_move(mv) {
            panic!("forecast of an illegal move {}: {}", mv, e);
        }
        next
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        player != self.active && self.mobility(self.active) == 0
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.mobility(self.active) == 0
    }

    fn opponent_of(&self, player: PlayerId) -> PlayerId {
        !player
    }
}

impl SpatialState for Board {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn location(&self, player: PlayerId) -> Option<(i32, i32)> {
        self.locations[player.index()].map(|mv| (mv.row, mv.col))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            write!(f, " {:>2} ", col)?;
        }
        writeln!(f)?;

        for row in 0..self.height {
            write!(f, "{:>2} |", row)?;
            for col in 0..self.width {
                let mv = Move::new(row, col);
                let symbol = if self.locations[0] == Some(mv) {
                    '1'
                } else if self.locations[1] == Some(mv) {
                    '2'
                } else if self.blocked & self.bit(mv) != 0 {
                    '-'
                } else {
                    ' '
                };
                write!(f, " {} |", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
