//! Adaptive iteration with error-controlled steppers.

use trajectory_core::{ControlledStepper, Observer, StepResult};

use super::{Action, Config, End, Error, Event, TimeSequence, cursor::Cursor};

/// Adaptive iterator driving a [`ControlledStepper`].
///
/// Each advance retries the stepper until it accepts a step, up to
/// [`Config::max_attempts`] attempts. The stepper owns step-size adaptation;
/// this iterator only hands it the current step size and counts attempts.
pub struct Controlled<'a, St, Sys, Obs = ()>
where
    St: ControlledStepper<Sys>,
{
    cursor: Cursor<'a, St, Sys, St::State, St::Time>,
    config: Config,
    observer: Obs,
}

impl<'a, St, Sys> Controlled<'a, St, Sys>
where
    St: ControlledStepper<Sys>,
{
    /// Creates an iterator positioned at `(state, t0)`.
    ///
    /// `state` is borrowed for the whole traversal and updated in place by
    /// every accepted step.
    pub fn new(
        stepper: &'a mut St,
        system: &'a Sys,
        state: &'a mut St::State,
        t0: St::Time,
        t_end: St::Time,
        dt: St::Time,
    ) -> Self {
        Self {
            cursor: Cursor::new(stepper, system, state, t0, t_end, dt),
            config: Config::default(),
            observer: (),
        }
    }
}

impl<'a, St, Sys, Obs> Controlled<'a, St, Sys, Obs>
where
    St: ControlledStepper<Sys>,
{
    /// Replaces the attempt bound.
    #[must_use]
    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    /// Attaches an observer that receives an [`Event`] for every attempt.
    pub fn with_observer<O>(self, observer: O) -> Controlled<'a, St, Sys, O>
    where
        O: Observer<Event<St::Time>, Action>,
    {
        Controlled {
            cursor: self.cursor,
            config: self.config,
            observer,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the step size the next attempt will use.
    #[must_use]
    pub fn dt(&self) -> St::Time {
        self.cursor.dt
    }
}

impl<St, Sys, Obs> TimeSequence for Controlled<'_, St, Sys, Obs>
where
    St: ControlledStepper<Sys>,
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

    /// Retries the stepper until a step is accepted.
    ///
    /// A step accepted on the last permitted attempt still counts: the
    /// advance fails only when every attempt was rejected.
    fn advance(&mut self) -> Result<(), Self::Error> {
        if self.cursor.is_ended() {
            return Ok(());
        }

        let max_attempts = self.config.max_attempts();
        let cursor = &mut self.cursor;

        for attempt in 1..=max_attempts {
            let from = cursor.time;
            let result = cursor
                .stepper
                .try_step(
                    cursor.system,
                    &mut *cursor.state,
                    &mut cursor.time,
                    &mut cursor.dt,
                )
                .map_err(Error::Stepper)?;

            match result {
                StepResult::Accepted => {
                    cursor.check_termination();
                    let event = Event::Accepted {
                        attempts: attempt,
                        time: cursor.time,
                        dt: cursor.dt,
                    };
                    if let Some(Action::StopEarly) = self.observer.observe(&event) {
                        cursor.stop();
                    }
                    return Ok(());
                }
                StepResult::Rejected => {
                    let event = Event::Rejected {
                        attempt,
                        time: from,
                        dt: cursor.dt,
                    };
                    if let Some(Action::StopEarly) = self.observer.observe(&event) {
                        cursor.stop();
                        return Ok(());
                    }
                }
            }
        }

        Err(Error::StepSizeUnderflow {
            attempts: max_attempts,
        })
    }
}

impl<St, Sys, Obs> PartialEq<End<St::State, St::Time>> for Controlled<'_, St, Sys, Obs>
where
    St: ControlledStepper<Sys>,
{
    fn eq(&self, _end: &End<St::State, St::Time>) -> bool {
        self.cursor.is_ended()
    }
}

impl<'a, St, Sys, Obs> PartialEq<Controlled<'a, St, Sys, Obs>> for End<St::State, St::Time>
where
    St: ControlledStepper<Sys>,
{
    fn eq(&self, it: &Controlled<'a, St, Sys, Obs>) -> bool {
        it.cursor.is_ended()
    }
}

/// Two iterators are equal only when both have ended.
impl<St, Sys, Obs> PartialEq for Controlled<'_, St, Sys, Obs>
where
    St: ControlledStepper<Sys>,
{
    fn eq(&self, other: &Self) -> bool {
        self.cursor.is_ended() && other.cursor.is_ended()
    }
}

/// Creates a controlled iterator positioned at `(state, t0)`.
pub fn make_begin<'a, St, Sys>(
    stepper: &'a mut St,
    system: &'a Sys,
    state: &'a mut St::State,
    t0: St::Time,
    t_end: St::Time,
    dt: St::Time,
) -> Controlled<'a, St, Sys>
where
    St: ControlledStepper<Sys>,
{
    Controlled::new(stepper, system, state, t0, t_end, dt)
}

/// Creates the sentinel for controlled iterators over `state`.
///
/// The arguments only fix the sentinel's types; nothing is borrowed beyond
/// this call.
pub fn make_end<St, Sys>(
    _stepper: &St,
    _system: &Sys,
    _state: &St::State,
) -> End<St::State, St::Time>
where
    St: ControlledStepper<Sys>,
{
    End::new()
}

/// Creates a controlled iterator and its sentinel.
///
/// ```ignore
/// let (mut it, end) = controlled::make_range(&mut stepper, &system, &mut x, 0.0, 1.0, 0.1);
/// while it != end {
///     let (x, t) = it.current();
///     println!("{t}: {x:?}");
///     it.advance()?;
/// }
/// ```
pub fn make_range<'a, St, Sys>(
    stepper: &'a mut St,
    system: &'a Sys,
    state: &'a mut St::State,
    t0: St::Time,
    t_end: St::Time,
    dt: St::Time,
) -> (Controlled<'a, St, Sys>, End<St::State, St::Time>)
where
    St: ControlledStepper<Sys>,
{
    (
        Controlled::new(stepper, system, state, t0, t_end, dt),
        End::new(),
    )
}
