use crate::rules::Rules;

/// Static scoring of a position at the search frontier.
///
/// Scores are always expressed from one fixed side's point of view, chosen
/// when the evaluator is built, never from the side to move. Evaluators take
/// `&mut self` so stateful ones (random, counting) fit the same seam.
pub trait Evaluator<P: Rules + ?Sized> {
    fn evaluate(&mut self, pos: &P) -> i32;
}

impl<P, E> Evaluator<P> for &mut E
where
    P: Rules + ?Sized,
    E: Evaluator<P> + ?Sized,
{
    fn evaluate(&mut self, pos: &P) -> i32 {
        (**self).evaluate(pos)
    }
}

impl<P, E> Evaluator<P> for Box<E>
where
    P: Rules + ?Sized,
    E: Evaluator<P> + ?Sized,
{
    fn evaluate(&mut self, pos: &P) -> i32 {
        (**self).evaluate(pos)
    }
}
