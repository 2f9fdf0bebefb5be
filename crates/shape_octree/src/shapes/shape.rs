//! The shape capability and the closed set of built-in bounding volumes
//!
//! The octree only ever talks to stored values through [`Shape`]. Built-in
//! kinds are wrapped in [`BoundingVolume`] when a tree has to hold several
//! kinds at once; new kinds implement [`Shape`] directly.

use crate::foundation::{Point, AABB};
use super::primitives::{Cuboid, Cylinder, Sphere};

/// Geometric capability required of anything stored in an octree
pub trait Shape {
    /// Tightest axis-aligned box enclosing the shape
    fn bounding_box(&self) -> AABB;

    /// Exact membership test (boundary inclusive)
    fn contains_point(&self, point: Point) -> bool;

    /// Squared distance from `point` to the shape; `0` when inside
    fn squared_distance(&self, point: Point) -> f64;

    /// Exact overlap test against an axis-aligned region (touching counts)
    fn intersects_region(&self, region: &AABB) -> bool;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn bounding_box(&self) -> AABB {
        (**self).bounding_box()
    }

    fn contains_point(&self, point: Point) -> bool {
        (**self).contains_point(point)
    }

    fn squared_distance(&self, point: Point) -> f64 {
        (**self).squared_distance(point)
    }

    fn intersects_region(&self, region: &AABB) -> bool {
        (**self).intersects_region(region)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn bounding_box(&self) -> AABB {
        (**self).bounding_box()
    }

    fn contains_point(&self, point: Point) -> bool {
        (**self).contains_point(point)
    }

    fn squared_distance(&self, point: Point) -> f64 {
        (**self).squared_distance(point)
    }

    fn intersects_region(&self, region: &AABB) -> bool {
        (**self).intersects_region(region)
    }
}

/// Any of the built-in bounding volume kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    /// Inclusive axis-aligned box
    Cuboid(Cuboid),
    /// Solid sphere
    Sphere(Sphere),
    /// Solid upright cylinder
    Cylinder(Cylinder),
}

impl BoundingVolume {
    /// Short name of the wrapped kind, for logs
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Cuboid(_) => "cuboid",
            Self::Sphere(_) => "sphere",
            Self::Cylinder(_) => "cylinder",
        }
    }
}

impl Shape for BoundingVolume {
    fn bounding_box(&self) -> AABB {
        match self {
            Self::Cuboid(cuboid) => cuboid.bounding_box(),
            Self::Sphere(sphere) => sphere.bounding_box(),
            Self::Cylinder(cylinder) => cylinder.bounding_box(),
        }
    }

    fn contains_point(&self, point: Point) -> bool {
        match self {
            Self::Cuboid(cuboid) => cuboid.contains_point(point),
            Self::Sphere(sphere) => sphere.contains_point(point),
            Self::Cylinder(cylinder) => cylinder.contains_point(point),
        }
    }

    fn squared_distance(&self, point: Point) -> f64 {
        match self {
            Self::Cuboid(cuboid) => cuboid.squared_distance(point),
            Self::Sphere(sphere) => sphere.squared_distance(point),
            Self::Cylinder(cylinder) => cylinder.squared_distance(point),
        }
    }

    fn intersects_region(&self, region: &AABB) -> bool {
        match self {
            Self::Cuboid(cuboid) => cuboid.intersects_region(region),
            Self::Sphere(sphere) => sphere.intersects_region(region),
            Self::Cylinder(cylinder) => cylinder.intersects_region(region),
        }
    }
}

impl From<Cuboid> for BoundingVolume {
    fn from(cuboid: Cuboid) -> Self {
        Self::Cuboid(cuboid)
    }
}

impl From<Sphere> for BoundingVolume {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Cylinder> for BoundingVolume {
    fn from(cylinder: Cylinder) -> Self {
        Self::Cylinder(cylinder)
    }
}
