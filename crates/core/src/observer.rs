/// Watches a traversal and can end it.
///
/// An iterator calls `observe` synchronously from inside its advance, once per
/// event, after the stepper has returned and before the advance itself
/// returns. By the time an event for a committed step arrives, state and time
/// already hold the new position and the termination test has already run.
///
/// Returning `None` leaves the traversal alone. `Some(action)` hands back an
/// iterator-specific action, which the iterator applies before it returns
/// control to the caller.
///
/// `()` observes nothing, and any `FnMut(&E) -> Option<A>` closure is an
/// observer.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the iterator.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
