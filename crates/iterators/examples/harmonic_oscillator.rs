//! Harmonic oscillator integrated with an embedded Heun–Euler stepper.
//!
//! Run with `cargo run -p trajectory-iterators --example harmonic_oscillator`.

use std::{convert::Infallible, f64::consts::PI};

use trajectory_core::{ControlledStepper, StepResult, System};
use trajectory_iterators::adaptive::{Action, Event, TimeSequence, controlled};

/// x'' = -x as a first-order system.
fn oscillator(y: &[f64; 2], dydt: &mut [f64; 2], _t: f64) {
    dydt[0] = y[1];
    dydt[1] = -y[0];
}

/// Second-order Heun step with an embedded first-order Euler error estimate.
struct HeunEuler {
    tolerance: f64,
}

impl HeunEuler {
    /// Step size factor for a local error estimate, clamped to `[0.2, 5.0]`.
    fn factor(&self, error: f64) -> f64 {
        if error == 0.0 {
            return 5.0;
        }
        (0.9 * (self.tolerance / error).sqrt()).clamp(0.2, 5.0)
    }
}

impl<Sys: System<[f64; 2], f64>> ControlledStepper<Sys> for HeunEuler {
    type State = [f64; 2];
    type Time = f64;
    type Error = Infallible;

    fn try_step(
        &mut self,
        system: &Sys,
        y: &mut [f64; 2],
        t: &mut f64,
        dt: &mut f64,
    ) -> Result<StepResult, Self::Error> {
        let h = *dt;

        let mut k1 = [0.0; 2];
        system.rhs(y, &mut k1, *t);
        let euler = [y[0] + h * k1[0], y[1] + h * k1[1]];

        let mut k2 = [0.0; 2];
        system.rhs(&euler, &mut k2, *t + h);
        let heun = [
            y[0] + 0.5 * h * (k1[0] + k2[0]),
            y[1] + 0.5 * h * (k1[1] + k2[1]),
        ];

        let error = (heun[0] - euler[0])
            .abs()
            .max((heun[1] - euler[1]).abs());
        *dt = h * self.factor(error);

        if error > self.tolerance {
            return Ok(StepResult::Rejected);
        }

        *y = heun;
        *t += h;
        Ok(StepResult::Accepted)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stepper = HeunEuler { tolerance: 1e-6 };
    let mut y = [1.0, 0.0];
    let mut rejected = 0;

    let (it, end) = controlled::make_range(&mut stepper, &oscillator, &mut y, 0.0, 2.0 * PI, 0.5);
    let mut it = it.with_observer(|event: &Event<f64>| -> Option<Action> {
        if matches!(event, Event::Rejected { .. }) {
            rejected += 1;
        }
        None
    });

    let mut visited = 0;
    while it != end {
        let (y, t) = it.current();
        if visited % 50 == 0 {
            println!("t = {t:>8.5}, y = [{:>9.6}, {:>9.6}]", y[0], y[1]);
        }
        visited += 1;
        it.advance()?;
    }

    let t_end = it.time();
    drop(it);

    println!("Final:    t = {t_end:.5}, y = [{:.6}, {:.6}]", y[0], y[1]);
    println!("Exact:    y = [{:.6}, {:.6}]", t_end.cos(), -t_end.sin());
    println!("Positions visited: {visited}, rejected attempts: {rejected}");

    Ok(())
}
