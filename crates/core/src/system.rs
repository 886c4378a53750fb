/// The right-hand side of an ODE, `dx/dt = f(x, t)`.
///
/// Iterators pass the system through to their stepper untouched; only
/// steppers evaluate it. Any closure of the form `Fn(&X, &mut X, T)` is a
/// system, writing the derivative of `state` at `time` into `derivative`.
pub trait System<X, T> {
    /// Writes the derivative of `state` at `time` into `derivative`.
    fn rhs(&self, state: &X, derivative: &mut X, time: T);
}

impl<X, T, F> System<X, T> for F
where
    F: Fn(&X, &mut X, T),
{
    fn rhs(&self, state: &X, derivative: &mut X, time: T) {
        self(state, derivative, time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Harmonic oscillator with unit frequency.
    struct Oscillator;

    impl System<[f64; 2], f64> for Oscillator {
        fn rhs(&self, state: &[f64; 2], derivative: &mut [f64; 2], _time: f64) {
            derivative[0] = state[1];
            derivative[1] = -state[0];
        }
    }

    fn evaluate<S: System<[f64; 2], f64>>(system: &S, state: [f64; 2], time: f64) -> [f64; 2] {
        let mut derivative = [0.0; 2];
        system.rhs(&state, &mut derivative, time);
        derivative
    }

    #[test]
    fn struct_system() {
        let derivative = evaluate(&Oscillator, [1.0, 2.0], 0.0);
        assert_eq!(derivative, [2.0, -1.0]);
    }

    #[test]
    fn closure_system() {
        let forced = |x: &[f64; 2], dxdt: &mut [f64; 2], t: f64| {
            dxdt[0] = x[1];
            dxdt[1] = -x[0] + t.cos();
        };

        let derivative = evaluate(&forced, [0.5, 0.0], 0.0);
        assert_relative_eq!(derivative[0], 0.0);
        assert_relative_eq!(derivative[1], 0.5);
    }
}
