use std::fmt::Debug;

/// A type usable as the independent variable of an ODE and as its step size.
///
/// The sign of a step size relative to [`TimeValue::zero`] fixes the direction
/// of integration, so implementors only need ordering and a zero.
///
/// Implemented for `f32` and `f64`, and for `uom::si::f64::Time` when the
/// `uom` feature is enabled.
pub trait TimeValue: Copy + PartialOrd + Debug {
    /// Returns the zero value of this type.
    fn zero() -> Self;
}

impl TimeValue for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl TimeValue for f32 {
    fn zero() -> Self {
        0.0
    }
}

#[cfg(feature = "uom")]
impl TimeValue for uom::si::f64::Time {
    fn zero() -> Self {
        Self::new::<uom::si::time::second>(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_zero_orders_signed_steps() {
        assert!(0.1_f64 > f64::zero());
        assert!(-0.1_f64 < f64::zero());
        assert!(0.5_f32 > f32::zero());
    }

    #[test]
    fn nan_is_neither_forward_nor_backward() {
        let nan = f64::NAN;
        assert!(!(nan > f64::zero()));
        assert!(!(nan < f64::zero()));
    }

    #[cfg(feature = "uom")]
    #[test]
    fn uom_time_zero() {
        use uom::si::{f64::Time, time::minute};

        assert!(Time::new::<minute>(1.0) > Time::zero());
        assert!(Time::new::<minute>(-1.0) < Time::zero());
    }
}
