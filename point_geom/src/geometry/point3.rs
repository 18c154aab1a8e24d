//! Basic 3D point type used throughout the crate.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::Point;

/// Representation of a 3D point.
///
/// Equality is exact floating-point comparison of each coordinate, so a point
/// holding a NaN coordinate is not equal to itself. Such points should not be
/// used as keys in hashed collections even though the type implements [`Eq`].
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The point `(0, 0, 0)`.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lifts a 2D point into 3D with `z = 0`.
    pub fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, 0.0)
    }

    /// Builds a point from up to three leading values.
    ///
    /// Missing values default to `0.0`, values past the third are ignored and
    /// `None` yields the origin.
    pub fn from_values(vals: Option<&[f64]>) -> Self {
        let mut p = Self::ORIGIN;
        p.set(vals);
        p
    }

    /// Overwrites all three coordinates using the same rules as
    /// [`Point3::from_values`].
    pub fn set(&mut self, vals: Option<&[f64]>) {
        let vals = vals.unwrap_or_default();
        self.x = vals.first().copied().unwrap_or(0.0);
        self.y = vals.get(1).copied().unwrap_or(0.0);
        self.z = vals.get(2).copied().unwrap_or(0.0);
    }

    /// Dot product with `p`.
    pub fn dot(&self, p: &Point3) -> f64 {
        self.x * p.x + self.y * p.y + self.z * p.z
    }

    /// Cross product `self × p`.
    pub fn cross(&self, p: &Point3) -> Point3 {
        Point3::new(
            self.y * p.z - self.z * p.y,
            self.z * p.x - self.x * p.z,
            self.x * p.y - self.y * p.x,
        )
    }

    /// Euclidean length of the vector from the origin to this point.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Deterministic hash of the coordinate bit patterns.
    ///
    /// Stable across runs and processes, unlike hashing through
    /// [`std::collections::hash_map::RandomState`]. Points that compare equal
    /// produce the same value.
    pub fn hash_code(&self) -> i32 {
        const PRIME: i32 = 31;
        let mut result: i32 = 1;
        for bits in self.hash_bits() {
            let folded = (bits ^ (bits >> 32)) as u32 as i32;
            result = result.wrapping_mul(PRIME).wrapping_add(folded);
        }
        result
    }

    // -0.0 == 0.0, so both must share one bit pattern
    fn hash_bits(&self) -> [u64; 3] {
        let bits = |v: f64| if v == 0.0 { 0u64 } else { v.to_bits() };
        [bits(self.x), bits(self.y), bits(self.z)]
    }
}

impl Eq for Point3 {}

impl Hash for Point3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for bits in self.hash_bits() {
            state.write_u64(bits);
        }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}

impl From<Point> for Point3 {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}

impl From<&[f64]> for Point3 {
    fn from(vals: &[f64]) -> Self {
        Self::from_values(Some(vals))
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Point3<f64>> for Point3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Point3> for nalgebra::Point3<f64> {
    fn from(p: Point3) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f64>> for Point3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Point3> for nalgebra::Vector3<f64> {
    fn from(p: Point3) -> Self {
        nalgebra::Vector3::new(p.x, p.y, p.z)
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Point3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}
