//! Adaptive iteration with dense-output steppers.

use trajectory_core::{DenseOutputStepper, Observer};

use super::{Action, End, Error, Event, TimeSequence, cursor::Cursor};

/// Adaptive iterator driving a [`DenseOutputStepper`].
///
/// Each advance moves the stepper one interval forward and writes the
/// interpolated state at the interval's upper bound into the caller's state.
/// Dense-output steppers always produce a usable interval, so there is no
/// retry; stepper errors pass through as [`Error::Stepper`].
pub struct DenseOutput<'a, St, Sys, Obs = ()>
where
    St: DenseOutputStepper<Sys>,
{
    cursor: Cursor<'a, St, Sys, St::State, St::Time>,
    observer: Obs,
}

impl<'a, St, Sys> DenseOutput<'a, St, Sys>
where
    St: DenseOutputStepper<Sys>,
{
    /// Creates an iterator positioned at `(state, t0)`.
    ///
    /// The stepper is initialized from `(state, t0, dt)` before returning.
    pub fn new(
        stepper: &'a mut St,
        system: &'a Sys,
        state: &'a mut St::State,
        t0: St::Time,
        t_end: St::Time,
        dt: St::Time,
    ) -> Self {
        stepper.initialize(&*state, t0, dt);

        Self {
            cursor: Cursor::new(stepper, system, state, t0, t_end, dt),
            observer: (),
        }
    }
}

impl<'a, St, Sys, Obs> DenseOutput<'a, St, Sys, Obs>
where
    St: DenseOutputStepper<Sys>,
{
    /// Attaches an observer that receives an [`Event::Advanced`] per interval.
    pub fn with_observer<O>(self, observer: O) -> DenseOutput<'a, St, Sys, O>
    where
        O: Observer<Event<St::Time>, Action>,
    {
        DenseOutput {
            cursor: self.cursor,
            observer,
        }
    }
}

impl<St, Sys, Obs> TimeSequence for DenseOutput<'_, St, Sys, Obs>
where
    St: DenseOutputStepper<Sys>,
    Obs: Observer<Event<St::Time>, Action>,
{
    type State = St::State;
    type Time = St::Time;
    type Error = Error<St::Error>;

    fn current(&self) -> (&St::State, St::Time) {
        self.cursor.current()
    }

    fn is_ended(&self) -> bool {
        self.cursor.is_ended()
    }

    fn advance(&mut self) -> Result<(), Self::Error> {
        if self.cursor.is_ended() {
            return Ok(());
        }

        let cursor = &mut self.cursor;
        let from = cursor.time;

        cursor
            .stepper
            .advance(cursor.system)
            .map_err(Error::Stepper)?;
        cursor.time = cursor.stepper.current_time();
        cursor.stepper.interpolate(cursor.time, &mut *cursor.state);
        cursor.check_termination();

        let event = Event::Advanced {
            from,
            to: cursor.time,
        };
        if let Some(Action::StopEarly) = self.observer.observe(&event) {
            cursor.stop();
        }

        Ok(())
    }
}

impl<St, Sys, Obs> PartialEq<End<St::State, St::Time>> for DenseOutput<'_, St, Sys, Obs>
where
    St: DenseOutputStepper<Sys>,
{
    fn eq(&self, _end: &End<St::State, St::Time>) -> bool {
        self.cursor.is_ended()
    }
}

impl<'a, St, Sys, Obs> PartialEq<DenseOutput<'a, St, Sys, Obs>> for End<St::State, St::Time>
where
    St: DenseOutputStepper<Sys>,
{
    fn eq(&self, it: &DenseOutput<'a, St, Sys, Obs>) -> bool {
        it.cursor.is_ended()
    }
}

/// Two iterators are equal only when both have ended.
impl<St, Sys, Obs> PartialEq for DenseOutput<'_, St, Sys, Obs>
where
    St: DenseOutputStepper<Sys>,
{
    fn eq(&self, other: &Self) -> bool {
        self.cursor.is_ended() && other.cursor.is_ended()
    }
}

/// Creates a dense-output iterator positioned at `(state, t0)`.
///
/// The stepper is initialized from `(state, t0, dt)`.
pub fn make_begin<'a, St, Sys>(
    stepper: &'a mut St,
    system: &'a Sys,
    state: &'a mut St::State,
    t0: St::Time,
    t_end: St::Time,
    dt: St::Time,
) -> DenseOutput<'a, St, Sys>
where
    St: DenseOutputStepper<Sys>,
{
    DenseOutput::new(stepper, system, state, t0, t_end, dt)
}

/// Creates the sentinel for dense-output iterators over `state`.
///
/// The stepper is not initialized and nothing is borrowed beyond this call.
pub fn make_end<St, Sys>(
    _stepper: &St,
    _system: &Sys,
    _state: &St::State,
) -> End<St::State, St::Time>
where
    St: DenseOutputStepper<Sys>,
{
    End::new()
}

/// Creates a dense-output iterator and its sentinel.
pub fn make_range<'a, St, Sys>(
    stepper: &'a mut St,
    system: &'a Sys,
    state: &'a mut St::State,
    t0: St::Time,
    t_end: St::Time,
    dt: St::Time,
) -> (DenseOutput<'a, St, Sys>, End<St::State, St::Time>)
where
    St: DenseOutputStepper<Sys>,
{
    (
        DenseOutput::new(stepper, system, state, t0, t_end, dt),
        End::new(),
    )
}
