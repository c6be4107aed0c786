use crate::{
    approx_eq::ApproxEq,
    primitive::{matrix::Matrix, point::Point, tuple::Tuple},
};

use super::{color::Color, object::Object};

/// Procedural surface color, sampled in pattern space. Every variant owns
/// the inverse of its transform; the forward matrix is never needed after
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Const(Color),
    /// Stripes alternating as x changes
    Stripe {
        c1: Color,
        c2: Color,
        inv_transform: Matrix,
    },
    /// Linear gradient changing in x direction
    Gradient {
        c_start: Color,
        c_dist: Color,
        inv_transform: Matrix,
    },
    /// Concentric rings extending in x and z
    Ring {
        c1: Color,
        c2: Color,
        inv_transform: Matrix,
    },
    /// 3D checkerboard
    Checkers {
        c1: Color,
        c2: Color,
        inv_transform: Matrix,
    },
    /// Returns the sampled point's coordinates as a color; lets tests
    /// observe which point a pattern was sampled at.
    Test { inv_transform: Matrix },
}

fn inverse_of(transform: Option<Matrix>) -> Matrix {
    transform
        .unwrap_or_default()
        .inverse()
        .expect("pattern transformation must be invertible")
}

impl Pattern {
    pub fn stripe(c1: Color, c2: Color, transform: Option<Matrix>) -> Self {
        Self::Stripe {
            c1,
            c2,
            inv_transform: inverse_of(transform),
        }
    }

    pub fn gradient(c_start: Color, c_end: Color, transform: Option<Matrix>) -> Self {
        Self::Gradient {
            c_start,
            c_dist: c_end - c_start,
            inv_transform: inverse_of(transform),
        }
    }

    pub fn ring(c1: Color, c2: Color, transform: Option<Matrix>) -> Self {
        Self::Ring {
            c1,
            c2,
            inv_transform: inverse_of(transform),
        }
    }

    pub fn checkers(c1: Color, c2: Color, transform: Option<Matrix>) -> Self {
        Self::Checkers {
            c1,
            c2,
            inv_transform: inverse_of(transform),
        }
    }

    pub fn test_pattern(transform: Option<Matrix>) -> Self {
        Self::Test {
            inv_transform: inverse_of(transform),
        }
    }

    pub fn color_at(&self, point: &Point) -> Color {
        match self {
            Pattern::Const(c) => *c,

            Pattern::Stripe { c1, c2, .. } => {
                if (point.x().floor() % 2.).approx_eq(&0.) {
                    *c1
                } else {
                    *c2
                }
            }

            Pattern::Gradient {
                c_start, c_dist, ..
            } => *c_start + *c_dist * (point.x() - point.x().floor()),

            Pattern::Ring { c1, c2, .. } => {
                let val = (point.x().powi(2) + point.z().powi(2)).sqrt().floor();
                if (val % 2.).approx_eq(&0.) {
                    *c1
                } else {
                    *c2
                }
            }

            Pattern::Checkers { c1, c2, .. } => {
                let sum = point.x().floor() + point.y().floor() + point.z().floor();
                if (sum % 2.).approx_eq(&0.) {
                    *c1
                } else {
                    *c2
                }
            }

            Pattern::Test { .. } => Color::new(point.x(), point.y(), point.z()),
        }
    }

    /// Samples the pattern at a world-space point on the given object:
    /// world -> object space via the object's inverse, then object ->
    /// pattern space via the pattern's own inverse.
    pub fn color_at_object(&self, object: &Object, point: Point) -> Color {
        let pattern_point = match self {
            Self::Const(_) => point,

            Self::Stripe { inv_transform, .. }
            | Self::Gradient { inv_transform, .. }
            | Self::Ring { inv_transform, .. }
            | Self::Checkers { inv_transform, .. }
            | Self::Test { inv_transform } => {
                let object_point = object.transformation_inverse() * point;
                *inv_transform * object_point
            }
        };

        self.color_at(&pattern_point)
    }
}
