//! Single-pass iterators over the trajectory of an ODE.
//!
//! An iterator here wraps a caller-owned stepper, system, and state and walks
//! the solution from a start time to an end time, mutating the state in place
//! and exposing each `(state, time)` position as it goes.
//!
//! # Modules
//!
//! - [`adaptive`] — adaptive step-size iteration with controlled or
//!   dense-output steppers

pub mod adaptive;
