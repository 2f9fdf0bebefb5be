//! Primitive bounding volumes and their exact predicates
//!
//! Cuboid, sphere and upright cylinder. Constructors validate their input;
//! once built, every predicate is a pure function of the shape parameters.

use crate::foundation::{Point, Vec3, AABB};
use super::error::ShapeError;
use super::shape::Shape;

fn check_finite(point: Point) -> Result<(), ShapeError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFiniteCoordinate)
    }
}

/// Inclusive axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    min: Point,
    max: Point,
}

impl Cuboid {
    /// Creates a cuboid from its minimum and maximum corners
    ///
    /// Fails if a coordinate is not finite or `min` exceeds `max` on any axis.
    pub fn new(min: Point, max: Point) -> Result<Self, ShapeError> {
        check_finite(min)?;
        check_finite(max)?;
        if let Some(axis) = (0..3).find(|&axis| min.axis(axis) > max.axis(axis)) {
            return Err(ShapeError::InvertedBounds { axis });
        }
        Ok(Self { min, max })
    }

    /// Creates a cuboid spanning two opposite corners given in any order
    pub fn from_corners(a: Point, b: Point) -> Result<Self, ShapeError> {
        Self::new(a.min(b), a.max(b))
    }

    /// Creates a cuboid from its center and half extents
    pub fn from_center_extents(center: Point, extents: Vec3) -> Result<Self, ShapeError> {
        let bounds = AABB::from_center_extents(center, extents);
        Self::new(bounds.min(), bounds.max())
    }

    /// Minimum corner
    pub const fn min(&self) -> Point {
        self.min
    }

    /// Maximum corner
    pub const fn max(&self) -> Point {
        self.max
    }

    fn as_aabb(&self) -> AABB {
        AABB::new(self.min, self.max)
    }
}

impl Shape for Cuboid {
    fn bounding_box(&self) -> AABB {
        self.as_aabb()
    }

    fn contains_point(&self, point: Point) -> bool {
        self.as_aabb().contains_point(point)
    }

    fn squared_distance(&self, point: Point) -> f64 {
        self.as_aabb().squared_distance_to_point(point)
    }

    fn intersects_region(&self, region: &AABB) -> bool {
        self.as_aabb().intersects(region)
    }
}

/// Solid sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Creates a sphere; a zero radius gives a single point
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        check_finite(center)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Center of the sphere
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius of the sphere
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Sphere {
    fn bounding_box(&self) -> AABB {
        AABB::from_center_extents(self.center, Vec3::repeat(self.radius))
    }

    fn contains_point(&self, point: Point) -> bool {
        self.center.squared_distance(point) <= self.radius * self.radius
    }

    fn squared_distance(&self, point: Point) -> f64 {
        let distance_sq = self.center.squared_distance(point);
        if distance_sq <= self.radius * self.radius {
            return 0.0;
        }
        let gap = distance_sq.sqrt() - self.radius;
        gap * gap
    }

    fn intersects_region(&self, region: &AABB) -> bool {
        region.intersects_sphere(self.center, self.radius)
    }
}

/// Solid cylinder standing upright along +Y
///
/// `center` is the center of the base disc; the cylinder occupies
/// `[center.y, center.y + height]` vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    center: Point,
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder; zero radius gives a vertical segment, zero
    /// height a flat disc
    pub fn new(center: Point, radius: f64, height: f64) -> Result<Self, ShapeError> {
        check_finite(center)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(ShapeError::NegativeHeight(height));
        }
        Ok(Self { center, radius, height })
    }

    /// Center of the base disc
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius of the disc
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Height above the base
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Squared horizontal (XZ) distance from the axis
    fn horizontal_distance_sq(&self, point: Point) -> f64 {
        let dx = point.x() - self.center.x();
        let dz = point.z() - self.center.z();
        dx * dx + dz * dz
    }

    /// Distance above the top or below the base; `0` within the span
    fn vertical_gap(&self, y: f64) -> f64 {
        let offset = y - self.center.y();
        if offset < 0.0 {
            -offset
        } else if offset > self.height {
            offset - self.height
        } else {
            0.0
        }
    }
}

impl Shape for Cylinder {
    fn bounding_box(&self) -> AABB {
        AABB::new(
            Point::new(
                self.center.x() - self.radius,
                self.center.y(),
                self.center.z() - self.radius,
            ),
            Point::new(
                self.center.x() + self.radius,
                self.center.y() + self.height,
                self.center.z() + self.radius,
            ),
        )
    }

    fn contains_point(&self, point: Point) -> bool {
        let offset = point.y() - self.center.y();
        (0.0..=self.height).contains(&offset)
            && self.horizontal_distance_sq(point) <= self.radius * self.radius
    }

    fn squared_distance(&self, point: Point) -> f64 {
        let horizontal_sq = self.horizontal_distance_sq(point);
        let radial_gap = if horizontal_sq <= self.radius * self.radius {
            0.0
        } else {
            horizontal_sq.sqrt() - self.radius
        };
        let vertical_gap = self.vertical_gap(point.y());
        radial_gap * radial_gap + vertical_gap * vertical_gap
    }

    fn intersects_region(&self, region: &AABB) -> bool {
        // Constant cross-section: overlap the vertical spans, then the disc
        // against the region's XZ rectangle.
        let base = self.center.y();
        if region.min().y() > base + self.height || region.max().y() < base {
            return false;
        }
        let nearest_x = self.center.x().clamp(region.min().x(), region.max().x());
        let nearest_z = self.center.z().clamp(region.min().z(), region.max().z());
        let dx = nearest_x - self.center.x();
        let dz = nearest_z - self.center.z();
        dx * dx + dz * dz <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn region(min: [f64; 3], max: [f64; 3]) -> AABB {
        AABB::new(Point::from(min), Point::from(max))
    }

    #[test]
    fn test_constructors_reject_invalid_input() {
        assert_eq!(
            Sphere::new(Point::ORIGIN, -1.0),
            Err(ShapeError::NegativeRadius(-1.0))
        );
        assert_eq!(
            Cylinder::new(Point::ORIGIN, 1.0, -0.5),
            Err(ShapeError::NegativeHeight(-0.5))
        );
        assert_eq!(
            Cuboid::new(Point::new(0.0, 2.0, 0.0), Point::new(1.0, 1.0, 1.0)),
            Err(ShapeError::InvertedBounds { axis: 1 })
        );
        assert_eq!(
            Sphere::new(Point::new(f64::NAN, 0.0, 0.0), 1.0),
            Err(ShapeError::NonFiniteCoordinate)
        );
        assert!(Sphere::new(Point::ORIGIN, f64::NAN).is_err());
        assert!(Cuboid::from_corners(Point::splat(1.0), Point::ORIGIN).is_ok());
    }

    #[test]
    fn test_cuboid_is_boundary_inclusive() {
        let cuboid = Cuboid::new(Point::ORIGIN, Point::splat(10.0)).unwrap();
        assert!(cuboid.contains_point(Point::splat(5.0)));
        assert!(cuboid.contains_point(Point::new(10.0, 10.0, 0.0)));
        assert!(!cuboid.contains_point(Point::splat(15.0)));
        assert_relative_eq!(cuboid.squared_distance(Point::splat(15.0)), 75.0);
        assert_eq!(cuboid.squared_distance(Point::splat(3.0)), 0.0);

        assert!(cuboid.intersects_region(&region([10.0, 10.0, 10.0], [20.0, 20.0, 20.0])));
        assert!(!cuboid.intersects_region(&region([10.1, 0.0, 0.0], [20.0, 20.0, 20.0])));
    }

    #[test]
    fn test_sphere_predicates() {
        let sphere = Sphere::new(Point::splat(10.0), 5.0).unwrap();
        assert!(sphere.contains_point(Point::splat(12.0)));
        assert!(!sphere.contains_point(Point::splat(15.0)));
        assert!(sphere.contains_point(Point::new(15.0, 10.0, 10.0)));

        assert_relative_eq!(sphere.squared_distance(Point::new(20.0, 10.0, 10.0)), 25.0);
        assert_eq!(sphere.squared_distance(Point::splat(11.0)), 0.0);

        let bounds = sphere.bounding_box();
        assert_eq!(bounds.min(), Point::splat(5.0));
        assert_eq!(bounds.max(), Point::splat(15.0));
    }

    #[test]
    fn test_sphere_region_uses_nearest_point_not_box() {
        let sphere = Sphere::new(Point::ORIGIN, 1.0).unwrap();
        // Overlaps the sphere's AABB corner but not the sphere itself
        let corner = region([0.8, 0.8, 0.8], [2.0, 2.0, 2.0]);
        assert!(sphere.bounding_box().intersects(&corner));
        assert!(!sphere.intersects_region(&corner));
        // Touching the surface counts
        assert!(sphere.intersects_region(&region([1.0, -1.0, -1.0], [2.0, 1.0, 1.0])));
    }

    #[test]
    fn test_zero_radius_sphere_is_a_point() {
        let point = Sphere::new(Point::splat(2.0), 0.0).unwrap();
        assert!(point.contains_point(Point::splat(2.0)));
        assert!(!point.contains_point(Point::new(2.0, 2.0, 2.000_001)));
        assert!(point.bounding_box().is_degenerate());
    }

    #[test]
    fn test_cylinder_predicates() {
        let cylinder = Cylinder::new(Point::ORIGIN, 2.0, 4.0).unwrap();
        assert!(cylinder.contains_point(Point::new(1.0, 0.0, 1.0)));
        assert!(cylinder.contains_point(Point::new(0.0, 4.0, 2.0)));
        assert!(!cylinder.contains_point(Point::new(0.0, -0.1, 0.0)));
        assert!(!cylinder.contains_point(Point::new(0.0, 4.1, 0.0)));
        assert!(!cylinder.contains_point(Point::new(1.5, 2.0, 1.5)));

        let bounds = cylinder.bounding_box();
        assert_eq!(bounds.min(), Point::new(-2.0, 0.0, -2.0));
        assert_eq!(bounds.max(), Point::new(2.0, 4.0, 2.0));

        // Beside the wall, above the top, and diagonally off the rim
        assert_relative_eq!(cylinder.squared_distance(Point::new(5.0, 2.0, 0.0)), 9.0);
        assert_relative_eq!(cylinder.squared_distance(Point::new(0.0, 7.0, 0.0)), 9.0);
        assert_relative_eq!(cylinder.squared_distance(Point::new(5.0, 8.0, 0.0)), 25.0);
        assert_eq!(cylinder.squared_distance(Point::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_cylinder_region_intersection() {
        let cylinder = Cylinder::new(Point::ORIGIN, 1.0, 2.0).unwrap();
        assert!(cylinder.intersects_region(&region([0.5, 1.0, 0.5], [3.0, 3.0, 3.0])));
        // Above the top face, touching counts
        assert!(cylinder.intersects_region(&region([-1.0, 2.0, -1.0], [1.0, 3.0, 1.0])));
        assert!(!cylinder.intersects_region(&region([-1.0, 2.1, -1.0], [1.0, 3.0, 1.0])));
        // Inside the AABB corner but outside the disc
        assert!(!cylinder.intersects_region(&region([0.8, 0.0, 0.8], [2.0, 2.0, 2.0])));
    }

    #[test]
    fn test_degenerate_cylinder() {
        let segment = Cylinder::new(Point::ORIGIN, 0.0, 3.0).unwrap();
        assert!(segment.contains_point(Point::new(0.0, 1.5, 0.0)));
        assert!(!segment.contains_point(Point::new(0.01, 1.5, 0.0)));

        let disc = Cylinder::new(Point::ORIGIN, 1.0, 0.0).unwrap();
        assert!(disc.contains_point(Point::new(0.5, 0.0, 0.5)));
        assert!(!disc.contains_point(Point::new(0.5, 0.01, 0.5)));
    }
}
