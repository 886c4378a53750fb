use std::iter::FusedIterator;

use trajectory_core::TimeValue;

/// The protocol shared by both adaptive iterators.
///
/// An adaptive iterator is a cursor over the trajectory: [`current`] reads the
/// `(state, time)` pair at its position without side effects, and
/// [`advance`] moves to the next position, mutating the borrowed state in
/// place. The traversal is single-pass; once [`is_ended`] returns `true` the
/// iterator compares equal to its [`End`] sentinel.
///
/// A cursor rather than an [`Iterator`] is the primary interface because each
/// position borrows the caller's state. Use [`into_snapshots`] for an
/// [`Iterator`] that clones each position instead.
///
/// [`current`]: TimeSequence::current
/// [`advance`]: TimeSequence::advance
/// [`is_ended`]: TimeSequence::is_ended
/// [`into_snapshots`]: TimeSequence::into_snapshots
/// [`End`]: super::End
pub trait TimeSequence {
    type State;
    type Time: TimeValue;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the state and time at the current position.
    ///
    /// Calling this twice without advancing returns the identical pair.
    fn current(&self) -> (&Self::State, Self::Time);

    /// Returns `true` once the traversal has ended.
    fn is_ended(&self) -> bool;

    /// Moves to the next position.
    ///
    /// Advancing an ended iterator does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the stepper fails or, for controlled
    /// steppers, no admissible step size is found.
    fn advance(&mut self) -> Result<(), Self::Error>;

    /// Returns the state at the current position.
    fn state(&self) -> &Self::State {
        self.current().0
    }

    /// Returns the time at the current position.
    fn time(&self) -> Self::Time {
        self.current().1
    }

    /// Visits every position until the traversal ends.
    ///
    /// Each cycle reads the current position, passes it to `visit`, and
    /// advances. The position at which the traversal ends is not visited.
    /// Returns the time reached at the end.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`advance`](TimeSequence::advance).
    fn drive<F>(&mut self, mut visit: F) -> Result<Self::Time, Self::Error>
    where
        F: FnMut(&Self::State, Self::Time),
    {
        while !self.is_ended() {
            let (state, time) = self.current();
            visit(state, time);
            self.advance()?;
        }
        Ok(self.time())
    }

    /// Converts this cursor into an [`Iterator`] over cloned positions.
    ///
    /// The iterator yields the same positions [`drive`](TimeSequence::drive)
    /// visits. If an advance fails, the error is yielded and iteration stops.
    fn into_snapshots(self) -> Snapshots<Self>
    where
        Self: Sized,
        Self::State: Clone,
    {
        Snapshots {
            sequence: self,
            started: false,
            finished: false,
        }
    }
}

/// An iterator over cloned `(state, time)` positions of a [`TimeSequence`].
///
/// Created by [`TimeSequence::into_snapshots`]. Advancing is lazy: the
/// underlying sequence only steps when the next item is requested.
pub struct Snapshots<S> {
    sequence: S,
    started: bool,
    finished: bool,
}

impl<S> Snapshots<S> {
    /// Returns the underlying sequence.
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S> Iterator for Snapshots<S>
where
    S: TimeSequence,
    S::State: Clone,
{
    type Item = Result<(S::State, S::Time), S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.started {
            if let Err(error) = self.sequence.advance() {
                self.finished = true;
                return Some(Err(error));
            }
        }
        self.started = true;

        if self.sequence.is_ended() {
            self.finished = true;
            return None;
        }

        let (state, time) = self.sequence.current();
        Some(Ok((state.clone(), time)))
    }
}

/// Marks that iteration always ends after the first `None`.
impl<S> FusedIterator for Snapshots<S>
where
    S: TimeSequence,
    S::State: Clone,
{
}
