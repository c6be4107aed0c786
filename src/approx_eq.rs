pub const EPSILON: f64 = 1.0e-5;
/// Looser tolerance for end-to-end shading assertions, whose expected
/// values are only quoted to five significant digits.
pub const LOW_PREC_EPSILON: f64 = 1.0e-4;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, rhs: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, rhs: &Rhs) -> bool {
        self.approx_eq_epsilon(rhs, EPSILON)
    }

    fn approx_eq_low_prec(&self, rhs: &Rhs) -> bool {
        self.approx_eq_epsilon(rhs, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, rhs: &Self, epsilon: f64) -> bool {
        (self - rhs).abs() < epsilon
    }
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let left = $left;
        let right = $right;
        assert!(
            left.approx_eq(&right),
            "approx assertion failed\n  left: `{:?}`\n right: `{:?}`",
            left,
            right
        );
    }};
}

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {{
        let left = $left;
        let right = $right;
        assert!(
            left.approx_eq_low_prec(&right),
            "approx assertion failed\n  left: `{:?}`\n right: `{:?}`",
            left,
            right
        );
    }};
}
