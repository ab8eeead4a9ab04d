//! Material and piece-square evaluation.

use chess_core::{flip, Color, Evaluator, PieceKind, Rules, NUM_SQUARES};
use serde::{Deserialize, Serialize};

use crate::pst;

/// Tunable evaluation weights in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    /// Counted for both sides, so it cancels whenever both kings are on the board.
    pub king: i32,
    /// Added when the side to move is mated, whichever side that is.
    pub checkmate_bonus: i32,
    /// Added when the side to move is in check, whichever side that is.
    pub check_bonus: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 20_000,
            checkmate_bonus: 1_000,
            check_bonus: 100,
        }
    }
}

impl Weights {
    /// Returns the material value of a piece kind.
    #[inline]
    pub fn piece_value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Evaluates positions from a fixed maximizing side.
///
/// The score is `check/mate bonus + (own material + placement) - (opposing
/// material + placement)`. The side to move only matters for the bonus term,
/// which is added unsigned and therefore favours whichever side is giving
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicEvaluator {
    side: Color,
    weights: Weights,
}

impl HeuristicEvaluator {
    pub fn new(side: Color) -> Self {
        Self::with_weights(side, Weights::default())
    }

    pub fn with_weights(side: Color, weights: Weights) -> Self {
        Self { side, weights }
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Full static score of `pos`.
    pub fn score<P: Rules + ?Sized>(&self, pos: &P) -> i32 {
        self.bonus(pos) + self.balance(pos)
    }

    /// The side-independent check and checkmate term.
    pub fn bonus<P: Rules + ?Sized>(&self, pos: &P) -> i32 {
        let mut value = 0;
        if pos.is_checkmate() {
            value += self.weights.checkmate_bonus;
        }
        if pos.is_in_check() {
            value += self.weights.check_bonus;
        }
        value
    }

    /// Material plus placement, own side minus opposing side.
    pub fn balance<P: Rules + ?Sized>(&self, pos: &P) -> i32 {
        let mut counts = [[0i32; 6]; 2];
        let mut placement = [0i32; 2];

        for sq in 0..NUM_SQUARES {
            let Some(pc) = pos.piece_at(sq) else {
                continue;
            };
            counts[pc.color.idx()][pc.kind.idx()] += 1;
            let idx = match pc.color {
                Color::White => sq,
                Color::Black => flip(sq),
            };
            placement[pc.color.idx()] += pst::bonus(pc.kind, idx);
        }

        let total = |color: Color| -> i32 {
            let c = color.idx();
            let material: i32 = PieceKind::ALL
                .iter()
                .map(|&kind| counts[c][kind.idx()] * self.weights.piece_value(kind))
                .sum();
            material + placement[c]
        };

        total(self.side) - total(self.side.other())
    }
}

impl<P: Rules + ?Sized> Evaluator<P> for HeuristicEvaluator {
    fn evaluate(&mut self, pos: &P) -> i32 {
        self.score(pos)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
