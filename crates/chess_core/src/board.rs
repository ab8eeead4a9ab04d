//! A [`Rules`] implementation backed by `cozy-chess`.
//!
//! `cozy_chess::Board` is a copy-make board, so undo is a stack of the
//! boards seen before each applied move.

use std::fmt;

use cozy_chess::{Board, Square};

use crate::error::RulesError;
use crate::rules::Rules;
use crate::types::{Color, Piece, PieceKind, NUM_SQUARES};

pub use cozy_chess::Move;

#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    history: Vec<Board>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen, false).map_err(|_| RulesError::InvalidFen {
            fen: fen.to_string(),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Number of applied moves that have not been undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn halfmove_clock(&self) -> u8 {
        self.board.halfmove_clock()
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.board.is_legal(mv) {
            return Err(RulesError::IllegalMove { mv: mv.to_string() });
        }
        self.history.push(self.board.clone());
        self.board.play_unchecked(mv);
        Ok(())
    }

    fn undo_move(&mut self) -> Result<(), RulesError> {
        self.board = self.history.pop().ok_or(RulesError::UndoWithoutMove)?;
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }

    fn is_in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        if sq >= NUM_SQUARES {
            return None;
        }
        let square = Square::index(sq as usize);
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece::new(color.into(), kind.into()))
    }

    fn position_hash(&self) -> u64 {
        self.board.hash()
    }
}

impl From<cozy_chess::Color> for Color {
    fn from(c: cozy_chess::Color) -> Self {
        match c {
            cozy_chess::Color::White => Color::White,
            cozy_chess::Color::Black => Color::Black,
        }
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(p: cozy_chess::Piece) -> Self {
        match p {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
