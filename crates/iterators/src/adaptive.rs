//! Adaptive step-size iteration over an ODE trajectory.
//!
//! # Variants
//!
//! - [`Controlled`] drives a [`ControlledStepper`]. Each advance retries the
//!   stepper until it accepts a step, giving up with
//!   [`Error::StepSizeUnderflow`] after [`Config::max_attempts`] rejections
//!   (1000 by default).
//! - [`DenseOutput`] drives a [`DenseOutputStepper`]. Each advance moves the
//!   stepper one interval forward and interpolates the state at the interval's
//!   upper bound.
//!
//! Both borrow the caller's stepper, system, and state for the traversal, and
//! both end once the current time reaches the end time in the direction of the
//! step size. The factories in [`controlled`] and [`dense_output`] return a
//! begin iterator and an [`End`] sentinel:
//!
//! ```ignore
//! use trajectory_iterators::adaptive::{TimeSequence, controlled};
//!
//! let (mut it, end) = controlled::make_range(&mut stepper, &system, &mut x, 0.0, 10.0, 0.01);
//! while it != end {
//!     let (x, t) = it.current();
//!     println!("t={t}: {x:?}");
//!     it.advance()?;
//! }
//! ```
//!
//! # Observer Events
//!
//! Attach an observer with `with_observer` to receive an [`Event`] per
//! rejected attempt, accepted step, or dense-output interval. Returning
//! [`Action::StopEarly`] ends the traversal at the current position.
//!
//! [`ControlledStepper`]: trajectory_core::ControlledStepper
//! [`DenseOutputStepper`]: trajectory_core::DenseOutputStepper

mod action;
mod config;
mod cursor;
mod end;
mod error;
mod event;
mod sequence;

pub mod controlled;
pub mod dense_output;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_ATTEMPTS};
pub use controlled::Controlled;
pub use dense_output::DenseOutput;
pub use end::End;
pub use error::Error;
pub use event::Event;
pub use sequence::{Snapshots, TimeSequence};
