//! Core traits for iterating the trajectory of an ODE.
//!
//! This crate defines the capabilities that trajectory iterators consume but
//! do not implement:
//!
//! - [`System`] — the right-hand side `dx/dt = f(x, t)`
//! - [`ControlledStepper`] — an error-controlled stepper that may reject a step
//! - [`DenseOutputStepper`] — a stepper that advances over an interval and can
//!   interpolate anywhere inside it
//! - [`TimeValue`] — the independent variable and step size type
//! - [`Observer`] — receives iterator events and optionally returns actions

mod observer;
mod stepper;
mod system;
mod time;

pub use observer::Observer;
pub use stepper::{ControlledStepper, DenseOutputStepper, StepResult};
pub use system::System;
pub use time::TimeValue;
