/// What an observer can ask an adaptive iterator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the iterator ended where it stands.
    ///
    /// Returned for an accepted step or a dense-output interval, the new
    /// position is kept. Returned for a rejected attempt, no further attempts
    /// are made and the position is the one from before the advance.
    StopEarly,
}
