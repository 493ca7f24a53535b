//! Signed angle in degrees, used for vertex arc annotations and sweep math.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Neg, Sub};

/// Signed angle in degrees.
///
/// Positive values are counter-clockwise. A vertex carrying a non-zero angle
/// describes a circular arc of that sweep towards the following vertex.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f32);

impl Angle {
    /// 0°
    pub const DEG0: Angle = Angle(0.0);
    /// 90°
    pub const DEG90: Angle = Angle(90.0);
    /// 180°
    pub const DEG180: Angle = Angle(180.0);
    /// 270°
    pub const DEG270: Angle = Angle(270.0);

    /// Creates an angle from degrees.
    pub const fn from_deg(degrees: f32) -> Self {
        Self(degrees)
    }

    /// Value in degrees.
    pub fn to_deg(self) -> f32 {
        self.0
    }

    /// Value in radians.
    pub fn to_rad(self) -> f32 {
        self.0.to_radians()
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// `true` for exactly 0°.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// `true` for strictly negative angles.
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// `true` for strictly positive angles.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Maps the angle into `(-180°, 180°]`.
    pub fn mapped_to_180(self) -> Self {
        let mut deg = self.0.rem_euclid(360.0);
        if deg > 180.0 {
            deg -= 360.0;
        }
        Self(deg)
    }

    /// Same end position, opposite direction: `+90°` becomes `-270°`,
    /// `-5°` becomes `+355°`. Zero stays zero.
    pub fn inverted(self) -> Self {
        if self.0 > 0.0 {
            Self(self.0 - 360.0)
        } else if self.0 < 0.0 {
            Self(self.0 + 360.0)
        } else {
            self
        }
    }

    /// `true` if the angle lies in the open interval `(-360°, 360°)`.
    pub fn is_valid_sweep(self) -> bool {
        self.0.is_finite() && self.0.abs() < 360.0
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Div<f32> for Angle {
    type Output = Angle;

    fn div(self, rhs: f32) -> Angle {
        Angle(self.0 / rhs)
    }
}
