//! Typed lengths. [Pt] is what ends up in the PDF; [Mm] is what the layout engine
//! works in; [In] exists because paper sizes are often quoted in inches.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// PDF points, 1/72 of an inch
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Deref,
)]
pub struct Pt(pub f32);

/// Millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Deref,
)]
pub struct Mm(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into, Deref)]
pub struct In(pub f32);

const POINTS_PER_MM: f32 = 72.0 / 25.4;

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * POINTS_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / POINTS_PER_MM)
    }
}

impl From<In> for Pt {
    fn from(inches: In) -> Self {
        Pt(inches.0 * 72.0)
    }
}

impl From<In> for Mm {
    fn from(inches: In) -> Self {
        Mm(inches.0 * 25.4)
    }
}

macro_rules! scalar_ops {
    ($t:ident) => {
        impl Mul<f32> for $t {
            type Output = $t;
            fn mul(self, rhs: f32) -> $t {
                $t(self.0 * rhs)
            }
        }

        impl Div<f32> for $t {
            type Output = $t;
            fn div(self, rhs: f32) -> $t {
                $t(self.0 / rhs)
            }
        }

        /// Ratio between two lengths
        impl Div<$t> for $t {
            type Output = f32;
            fn div(self, rhs: $t) -> f32 {
                self.0 / rhs.0
            }
        }

        impl Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                $t(-self.0)
            }
        }

        impl $t {
            /// The larger of two lengths
            pub fn max(self, other: $t) -> $t {
                $t(self.0.max(other.0))
            }

            /// The smaller of two lengths
            pub fn min(self, other: $t) -> $t {
                $t(self.0.min(other.0))
            }
        }
    };
}

scalar_ops!(Pt);
scalar_ops!(Mm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_width_converts_to_points() {
        let pt: Pt = Mm(210.0).into();
        assert!((pt.0 - 595.2756).abs() < 0.01);
    }

    #[test]
    fn lengths_compose() {
        let total: Mm = [Mm(1.5), Mm(2.0), Mm(0.5)].into_iter().sum();
        assert_eq!(total, Mm(4.0));
        assert_eq!(Mm(9.0) / Mm(4.5), 2.0);
        assert_eq!(Mm(3.0) * 2.0 - Mm(1.0), Mm(5.0));
        assert_eq!(Mm(3.0).max(Mm(4.0)), Mm(4.0));
    }

    #[test]
    fn inches_are_seventy_two_points() {
        assert_eq!(Pt::from(In(0.5)), Pt(36.0));
    }
}
