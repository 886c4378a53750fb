use crate::TimeValue;

/// Outcome of a single controlled step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The step was accepted and committed to state and time.
    Accepted,

    /// The step was rejected; state and time were not advanced.
    ///
    /// The stepper has usually adjusted the step size for the next attempt.
    Rejected,
}

impl StepResult {
    /// Returns `true` if the step was accepted.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A stepper with local error control that may reject a proposed step.
///
/// On [`StepResult::Accepted`] the stepper has advanced `state` and `time` in
/// place and may have grown or shrunk `dt` for the next step. On
/// [`StepResult::Rejected`] it has not committed the step, though it has
/// typically reduced `dt`. Whether a rejected attempt touches `state` or
/// `time` at all is up to the implementation.
pub trait ControlledStepper<Sys> {
    type State;
    type Time: TimeValue;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Attempts one step of size `dt` from `(state, time)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be evaluated at all (as
    /// opposed to being rejected by error control).
    fn try_step(
        &mut self,
        system: &Sys,
        state: &mut Self::State,
        time: &mut Self::Time,
        dt: &mut Self::Time,
    ) -> Result<StepResult, Self::Error>;
}

/// A stepper that advances over whole intervals and interpolates inside them.
///
/// The stepper keeps its own copy of the solution. After [`initialize`] it
/// sits at a single point; each [`advance`] moves the upper end of its
/// current interval forward, and [`interpolate`] evaluates the continuous
/// solution anywhere inside that interval.
///
/// [`initialize`]: DenseOutputStepper::initialize
/// [`advance`]: DenseOutputStepper::advance
/// [`interpolate`]: DenseOutputStepper::interpolate
pub trait DenseOutputStepper<Sys> {
    type State;
    type Time: TimeValue;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resets the internal representation to `state` at `time`, using `dt` as
    /// the nominal length of the first interval.
    fn initialize(&mut self, state: &Self::State, time: Self::Time, dt: Self::Time);

    /// Advances the internal representation by one interval.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the interval cannot be computed.
    fn advance(&mut self, system: &Sys) -> Result<(), Self::Error>;

    /// Returns the upper time bound of the current interval.
    fn current_time(&self) -> Self::Time;

    /// Writes the interpolated state at `time` into `state`.
    ///
    /// `time` is expected to lie within the current interval.
    fn interpolate(&self, time: Self::Time, state: &mut Self::State);
}
