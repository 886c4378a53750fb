use trajectory_core::TimeValue;

/// Bookkeeping shared by both adaptive iterators.
///
/// Holds the borrowed stepper, system, and state together with the current
/// time, the end time, the step size, and whether the traversal has ended.
/// The variants drive the stepper through these fields and call
/// [`Cursor::check_termination`] after every successful advance.
pub(super) struct Cursor<'a, St, Sys, X, T> {
    pub(super) stepper: &'a mut St,
    pub(super) system: &'a Sys,
    pub(super) state: &'a mut X,
    pub(super) time: T,
    pub(super) end: T,
    pub(super) dt: T,
    ended: bool,
}

impl<'a, St, Sys, X, T: TimeValue> Cursor<'a, St, Sys, X, T> {
    /// Positions a new cursor at `(state, time)`.
    pub(super) fn new(
        stepper: &'a mut St,
        system: &'a Sys,
        state: &'a mut X,
        time: T,
        end: T,
        dt: T,
    ) -> Self {
        Self {
            stepper,
            system,
            state,
            time,
            end,
            dt,
            ended: false,
        }
    }

    pub(super) fn current(&self) -> (&X, T) {
        (&*self.state, self.time)
    }

    pub(super) fn is_ended(&self) -> bool {
        self.ended
    }

    /// Ends the traversal if the current time has reached the end time in the
    /// direction of the step size.
    ///
    /// A zero or unordered (NaN) step size never ends the traversal.
    pub(super) fn check_termination(&mut self) {
        let zero = T::zero();
        let forward_done = self.dt > zero && self.time >= self.end;
        let backward_done = self.dt < zero && self.time <= self.end;

        if forward_done || backward_done {
            self.ended = true;
        }
    }

    /// Ends the traversal unconditionally.
    pub(super) fn stop(&mut self) {
        self.ended = true;
    }
}
