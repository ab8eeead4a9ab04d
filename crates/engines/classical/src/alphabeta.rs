//! Fail-soft alpha-beta with a transposition table at the frontier.

use chess_core::{Evaluator, Rules, SearchError};

use crate::search::{Search, NEG_INF, POS_INF};

impl<E> Search<'_, E> {
    /// Max node with window `(alpha, beta)`.
    ///
    /// Stops at the first child that reaches `beta` and returns that value
    /// without visiting the remaining siblings. An empty window on entry is
    /// handled like a cutoff node.
    pub fn max_value<P>(
        &mut self,
        pos: &mut P,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> Result<i32, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if alpha >= beta || self.is_cutoff(pos, ply) {
            return Ok(self.frontier(pos, alpha, beta, ply));
        }

        let mut utility = NEG_INF;
        for mv in self.expand(pos, ply)? {
            let value = self.play(pos, mv, |s, p| s.min_value(p, alpha, beta, ply + 1))?;
            utility = utility.max(value);
            if utility >= beta {
                return Ok(utility); // Beta cutoff
            }
            alpha = alpha.max(utility);
        }
        Ok(utility)
    }

    /// Min node with window `(alpha, beta)`; mirror image of [`Self::max_value`].
    pub fn min_value<P>(
        &mut self,
        pos: &mut P,
        alpha: i32,
        mut beta: i32,
        ply: u8,
    ) -> Result<i32, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if alpha >= beta || self.is_cutoff(pos, ply) {
            return Ok(self.frontier(pos, alpha, beta, ply));
        }

        let mut utility = POS_INF;
        for mv in self.expand(pos, ply)? {
            let value = self.play(pos, mv, |s, p| s.max_value(p, alpha, beta, ply + 1))?;
            utility = utility.min(value);
            if utility <= alpha {
                return Ok(utility); // Alpha cutoff
            }
            beta = beta.min(utility);
        }
        Ok(utility)
    }
}
