/// Decides which values an [`ExtremumStack`](super::ExtremumStack) tracks.
///
/// A pushed value becomes the new extremum when it supersedes the current one. Ties must
/// supersede, otherwise popping one of two equal extremes would lose track of the other.
pub trait Extremum {
    fn supersedes<T: Ord>(candidate: &T, current: &T) -> bool;
}

/// Tracks the smallest value of a stack. See [`MinStack`](super::MinStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Min;

impl Extremum for Min {
    fn supersedes<T: Ord>(candidate: &T, current: &T) -> bool {
        candidate <= current
    }
}

/// Tracks the largest value of a stack. See [`MaxStack`](super::MaxStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Max;

impl Extremum for Max {
    fn supersedes<T: Ord>(candidate: &T, current: &T) -> bool {
        candidate >= current
    }
}
