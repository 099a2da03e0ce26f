/// Control actions supported by the Jacobi solver.
///
/// The solver accepts none: observers are notified of each sweep but cannot
/// stop or steer the iteration. The only value an observer can return is
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
