// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances em L (cavalo) de um jogador já colocado.

use crate::core::{Bitboard, Move};

/// Deslocamentos do cavalo (linha, coluna). A ordem define a ordenação dos lances.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Índice da casa no bitboard (coluna-maior, como no tabuleiro).
#[inline]
pub fn cell_index(row: i32, col: i32, height: i32) -> usize {
    (row + col * height) as usize
}

/// Gera os saltos de cavalo a partir de `from` para casas livres dentro do tabuleiro.
pub fn generate_knight_moves(from: Move, width: i32, height: i32, blocked: Bitboard) -> Vec<Move> {
    let mut moves = Vec::with_capacity(KNIGHT_OFFSETS.len());

    for &(dr, dc) in KNIGHT_OFFSETS.iter() {
        let row = from.row + dr;
        let col = from.col + dc;

        // Fora do tabuleiro
        if row < 0 || row >= height || col < 0 || col >= width {
            continue;
        }

        if blocked & (1u128 << cell_index(row, col, height)) == 0 {
            moves.push(Move::new(row, col));
        }
    }
    moves
}

/// Conta os saltos disponíveis sem alocar (usado pelas heurísticas via `legal_moves_for`).
pub fn count_knight_moves(from: Move, width: i32, height: i32, blocked: Bitboard) -> usize {
    KNIGHT_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| {
            let row = from.row + dr;
            let col = from.col + dc;
            row >= 0
                && row < height
                && col >= 0
                && col < width
                && blocked & (1u128 << cell_index(row, col, height)) == 0
        })
        .count()
}
