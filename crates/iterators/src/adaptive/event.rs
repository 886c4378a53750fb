/// Events emitted by the adaptive iterators.
///
/// Controlled iterators emit one [`Event::Rejected`] per rejected attempt and
/// one [`Event::Accepted`] per advance. Dense-output iterators emit one
/// [`Event::Advanced`] per interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<T> {
    /// A controlled step attempt was rejected.
    Rejected {
        /// The 1-based attempt number within the current advance.
        attempt: usize,

        /// The time the step was attempted from.
        time: T,

        /// The step size the stepper proposes for the next attempt.
        dt: T,
    },

    /// A controlled step was accepted.
    Accepted {
        /// The number of attempts the advance took, including this one.
        attempts: usize,

        /// The time reached by the step.
        time: T,

        /// The step size the stepper proposes for the next step.
        dt: T,
    },

    /// A dense-output stepper moved to a new interval.
    Advanced {
        /// The time before advancing.
        from: T,

        /// The upper bound of the new interval.
        to: T,
    },
}

impl<T: Copy> Event<T> {
    /// Returns the time the iterator is positioned at after this event.
    #[must_use]
    pub fn time(&self) -> T {
        match *self {
            Self::Rejected { time, .. } | Self::Accepted { time, .. } => time,
            Self::Advanced { to, .. } => to,
        }
    }
}
