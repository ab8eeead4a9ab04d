//! Plain depth-limited minimax, no pruning and no table.
//!
//! Slow, but trivially correct; the alpha-beta path is checked against it.

use chess_core::{Evaluator, Rules, SearchError};

use crate::search::{Search, NEG_INF, POS_INF};

impl<E> Search<'_, E> {
    /// Max node: the best utility the maximizing side can force from here.
    pub fn minimax_max<P>(&mut self, pos: &mut P, ply: u8) -> Result<i32, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if self.is_cutoff(pos, ply) {
            return Ok(self.evaluate(pos));
        }

        let mut utility = NEG_INF;
        for mv in self.expand(pos, ply)? {
            let value = self.play(pos, mv, |s, p| s.minimax_min(p, ply + 1))?;
            utility = utility.max(value);
        }
        Ok(utility)
    }

    /// Min node: the opponent's best reply, still scored in the maximizing frame.
    pub fn minimax_min<P>(&mut self, pos: &mut P, ply: u8) -> Result<i32, SearchError>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        if self.is_cutoff(pos, ply) {
            return Ok(self.evaluate(pos));
        }

        let mut utility = POS_INF;
        for mv in self.expand(pos, ply)? {
            let value = self.play(pos, mv, |s, p| s.minimax_max(p, ply + 1))?;
            utility = utility.min(value);
        }
        Ok(utility)
    }
}
