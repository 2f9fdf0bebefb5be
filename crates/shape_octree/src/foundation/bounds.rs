//! Axis-aligned bounding boxes
//!
//! All tests are boundary-inclusive: boxes that share only a face, an edge
//! or a corner intersect, and a point on a face is contained.

use super::math::{Point, Vec3};

/// Axis-Aligned Bounding Box for spatial queries
///
/// Invariant: `min` is component-wise less than or equal to `max`.
/// Zero-volume boxes are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AABB {
    min: Point,
    max: Point,
}

impl AABB {
    /// Create a new AABB from min and max corners
    ///
    /// Corners are normalised component-wise, so the invariant holds even
    /// when the caller swaps them.
    pub fn new(min: Point, max: Point) -> Self {
        Self::from_corners(min, max)
    }

    /// Create the smallest AABB containing both corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an AABB centered at a point with given (non-negative) half extents
    pub fn from_center_extents(center: Point, extents: Vec3) -> Self {
        let extents = extents.abs();
        Self {
            min: center.offset(-extents),
            max: center.offset(extents),
        }
    }

    /// Zero-volume AABB at a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Minimum corner
    pub const fn min(&self) -> Point {
        self.min
    }

    /// Maximum corner
    pub const fn max(&self) -> Point {
        self.max
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Point {
        Point::from((self.min.to_vector() + self.max.to_vector()) * 0.5)
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Full size along each axis
    pub fn size(&self) -> Vec3 {
        self.max.to_vector() - self.min.to_vector()
    }

    /// Returns `true` if the box has zero size along any axis
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0
    }

    /// Check if this AABB contains a point (inclusive)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x() >= self.min.x() && point.x() <= self.max.x() &&
        point.y() >= self.min.y() && point.y() <= self.max.y() &&
        point.z() >= self.min.z() && point.z() <= self.max.z()
    }

    /// Check if this AABB fully contains another AABB (inclusive)
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Check if this AABB intersects another AABB (touching counts)
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x() <= other.max.x() && self.max.x() >= other.min.x() &&
        self.min.y() <= other.max.y() && self.max.y() >= other.min.y() &&
        self.min.z() <= other.max.z() && self.max.z() >= other.min.z()
    }

    /// Point of the box nearest to `point`
    pub fn closest_point(&self, point: Point) -> Point {
        Point::new(
            point.x().clamp(self.min.x(), self.max.x()),
            point.y().clamp(self.min.y(), self.max.y()),
            point.z().clamp(self.min.z(), self.max.z()),
        )
    }

    /// Squared distance from `point` to the box; `0` inside
    pub fn squared_distance_to_point(&self, point: Point) -> f64 {
        self.closest_point(point).squared_distance(point)
    }

    /// Check if a sphere overlaps this AABB (touching counts)
    pub fn intersects_sphere(&self, center: Point, radius: f64) -> bool {
        radius >= 0.0 && self.squared_distance_to_point(center) <= radius * radius
    }

    /// Smallest AABB containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap of both boxes, `None` if they are disjoint
    ///
    /// Touching boxes yield a degenerate overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// Box grown by `margin` on every side, per axis
    pub fn expanded(&self, margin: Vec3) -> Self {
        let margin = margin.abs();
        Self {
            min: self.min.offset(-margin),
            max: self.max.offset(margin),
        }
    }

    /// The eight octants obtained by splitting at the center on every axis
    ///
    /// Octant layout (bit 0 = +X, bit 1 = +Y, bit 2 = +Z):
    /// 0: -X, -Y, -Z (back-bottom-left)
    /// 1: +X, -Y, -Z (back-bottom-right)
    /// 2: -X, +Y, -Z (back-top-left)
    /// 3: +X, +Y, -Z (back-top-right)
    /// 4: -X, -Y, +Z (front-bottom-left)
    /// 5: +X, -Y, +Z (front-bottom-right)
    /// 6: -X, +Y, +Z (front-top-left)
    /// 7: +X, +Y, +Z (front-top-right)
    ///
    /// Neighbouring octants share their boundary faces exactly.
    pub fn octants(&self) -> [Self; 8] {
        let center = self.center();
        std::array::from_fn(|octant| {
            let pick = |bit: usize, axis: usize| {
                if octant & bit == 0 {
                    (self.min.axis(axis), center.axis(axis))
                } else {
                    (center.axis(axis), self.max.axis(axis))
                }
            };
            let (min_x, max_x) = pick(1, 0);
            let (min_y, max_y) = pick(2, 1);
            let (min_z, max_z) = pick(4, 2);
            Self {
                min: Point::new(min_x, min_y, min_z),
                max: Point::new(max_x, max_y, max_z),
            }
        })
    }
}
