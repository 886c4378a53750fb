//! End-to-end traversal of dx/dt = -x from t = 0 to t = 1.

use std::convert::Infallible;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use trajectory_core::{ControlledStepper, DenseOutputStepper, StepResult, System};
use trajectory_iterators::adaptive::{TimeSequence, controlled, dense_output};

fn decay(x: &f64, dxdt: &mut f64, _t: f64) {
    *dxdt = -x;
}

/// Steps linear ODEs `dx/dt = -k x` exactly by reading `k` from the system.
struct ExactLinear;

fn rate<Sys: System<f64, f64>>(system: &Sys, t: f64) -> f64 {
    let mut dxdt = 0.0;
    system.rhs(&1.0, &mut dxdt, t);
    -dxdt
}

impl<Sys: System<f64, f64>> ControlledStepper<Sys> for ExactLinear {
    type State = f64;
    type Time = f64;
    type Error = Infallible;

    fn try_step(
        &mut self,
        system: &Sys,
        x: &mut f64,
        t: &mut f64,
        dt: &mut f64,
    ) -> Result<StepResult, Self::Error> {
        *x *= (-rate(system, *t) * *dt).exp();
        *t += *dt;
        Ok(StepResult::Accepted)
    }
}

/// Dense-output counterpart of [`ExactLinear`].
#[derive(Default)]
struct ExactLinearDense {
    t0: f64,
    x0: f64,
    t1: f64,
    k: f64,
    dt: f64,
}

impl<Sys: System<f64, f64>> DenseOutputStepper<Sys> for ExactLinearDense {
    type State = f64;
    type Time = f64;
    type Error = Infallible;

    fn initialize(&mut self, x: &f64, t: f64, dt: f64) {
        *self = Self {
            t0: t,
            x0: *x,
            t1: t,
            k: 0.0,
            dt,
        };
    }

    fn advance(&mut self, system: &Sys) -> Result<(), Self::Error> {
        self.x0 *= (-self.k * (self.t1 - self.t0)).exp();
        self.t0 = self.t1;
        self.k = rate(system, self.t0);
        self.t1 = self.t0 + self.dt;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.t1
    }

    fn interpolate(&self, t: f64, x: &mut f64) {
        *x = self.x0 * (-self.k * (t - self.t0)).exp();
    }
}

/// Runs a traversal, returning visited positions and the final position.
fn traverse<S>(mut sequence: S) -> (Vec<(f64, f64)>, (f64, f64))
where
    S: TimeSequence<State = f64, Time = f64>,
{
    let mut visited = Vec::new();
    sequence
        .drive(|&x, t| visited.push((x, t)))
        .expect("exact steppers never fail");
    let (&x, t) = sequence.current();
    (visited, (x, t))
}

fn check_decay(visited: &[(f64, f64)], (x_final, t_final): (f64, f64), x0: f64) {
    // Time is non-decreasing and the traversal stops at t >= 1.
    assert!(visited.windows(2).all(|w| w[0].1 <= w[1].1));
    assert!(t_final >= 1.0);
    assert!(t_final < 1.1 + 1e-9);

    // Every position lies on the exact solution.
    for &(x, t) in visited.iter().chain([(x_final, t_final)].iter()) {
        assert_relative_eq!(x, x0 * (-t).exp(), max_relative = 1e-12);
    }

    // The position closest to t = 1 reproduces x(1) = x(0) / e.
    let &(x1, t1) = visited
        .iter()
        .chain([(x_final, t_final)].iter())
        .min_by(|a, b| (a.1 - 1.0).abs().total_cmp(&(b.1 - 1.0).abs()))
        .expect("at least one position");
    assert_abs_diff_eq!(t1, 1.0, epsilon = 1e-9);
    assert_relative_eq!(x1, x0 * (-1.0_f64).exp(), max_relative = 1e-9);
}

#[test]
fn controlled_traversal_matches_exponential_decay() {
    let mut stepper = ExactLinear;
    let mut x = 4.0;

    let (visited, last) = traverse(controlled::make_begin(
        &mut stepper,
        &decay,
        &mut x,
        0.0,
        1.0,
        0.1,
    ));

    assert_eq!(visited.first(), Some(&(4.0, 0.0)));
    check_decay(&visited, last, 4.0);
    assert_relative_eq!(x, last.0);
}

#[test]
fn dense_output_traversal_matches_exponential_decay() {
    let mut stepper = ExactLinearDense::default();
    let mut x = 4.0;

    let (visited, last) = traverse(dense_output::make_begin(
        &mut stepper,
        &decay,
        &mut x,
        0.0,
        1.0,
        0.1,
    ));

    assert_eq!(visited.first(), Some(&(4.0, 0.0)));
    check_decay(&visited, last, 4.0);
    assert_relative_eq!(x, last.0);
}

#[test]
fn range_loop_visits_same_positions_as_drive() {
    let mut stepper = ExactLinear;
    let mut x = 1.0;
    let (mut it, end) = controlled::make_range(&mut stepper, &decay, &mut x, 0.0, 1.0, 0.1);

    let mut times = Vec::new();
    while it != end {
        times.push(it.time());
        it.advance().expect("exact stepper never fails");
    }
    drop(it);

    let mut stepper = ExactLinear;
    let mut y = 1.0;
    let (visited, _) = traverse(controlled::make_begin(
        &mut stepper,
        &decay,
        &mut y,
        0.0,
        1.0,
        0.1,
    ));

    let drive_times: Vec<f64> = visited.iter().map(|&(_, t)| t).collect();
    assert_eq!(times, drive_times);
    assert_relative_eq!(x, y);
}
