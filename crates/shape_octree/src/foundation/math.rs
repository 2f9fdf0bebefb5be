//! Math utilities and types
//!
//! Provides the vector alias used by the shape predicates and the immutable
//! [`Point`] value type used throughout the public API.

use std::fmt;
use std::hash::{Hash, Hasher};

pub use nalgebra::Vector3;

/// 3D vector type (double precision)
pub type Vec3 = Vector3<f64>;

/// Immutable 3D coordinate.
///
/// Equality and hashing are structural. `-0.0` and `+0.0` compare and hash
/// equal; NaN coordinates are a caller contract violation (shape
/// constructors reject them).
#[derive(Clone, Copy, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// The origin `(0, 0, 0)`
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point with the same value on every axis
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// X coordinate
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate (the "up" axis)
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Coordinate along `axis` (0 = x, 1 = y, 2 = z)
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis index out of range: {axis}"),
        }
    }

    /// Returns `true` if no coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Convert to a position vector
    pub fn to_vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Component-wise minimum
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Point translated by `offset`
    pub fn offset(self, offset: Vec3) -> Self {
        Self::from(self.to_vector() + offset)
    }

    /// Squared euclidean distance to another point
    pub fn squared_distance(self, other: Self) -> f64 {
        (self.to_vector() - other.to_vector()).magnitude_squared()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 so that the two zeroes, which compare equal, hash equal
        for value in [self.x, self.y, self.z] {
            (value + 0.0).to_bits().hash(state);
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Vec3> for Point {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point> for Vec3 {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}
