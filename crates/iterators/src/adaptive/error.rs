use thiserror::Error;

/// Errors that can end an adaptive traversal abnormally.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// Every attempt within the configured bound was rejected.
    #[error("no admissible step size found within {attempts} attempts")]
    StepSizeUnderflow { attempts: usize },

    /// The stepper itself failed.
    #[error("stepper failed")]
    Stepper(#[source] E),
}

impl<E> Error<E> {
    /// Returns `true` if this is a [`Error::StepSizeUnderflow`].
    #[must_use]
    pub fn is_step_size_underflow(&self) -> bool {
        matches!(self, Self::StepSizeUnderflow { .. })
    }
}
