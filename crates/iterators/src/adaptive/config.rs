use thiserror::Error;

/// Number of step attempts a controlled iterator makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Configuration for the controlled adaptive iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_attempts: usize,
}

/// Errors that can occur when validating an adaptive iterator config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated attempt bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    pub fn new(max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(Self { max_attempts })
    }

    /// Returns the maximum number of attempts per advance.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_a_thousand_attempts() {
        assert_eq!(Config::default().max_attempts(), 1000);
    }

    #[test]
    fn rejects_zero_attempts() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn accepts_single_attempt() {
        let config = Config::new(1).expect("one attempt is valid");
        assert_eq!(config.max_attempts(), 1);
    }
}
