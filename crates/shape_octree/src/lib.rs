//! # Shape Octree
//!
//! An octree spatial index over arbitrary 3D shapes.
//!
//! ## Features
//!
//! - **Shape-agnostic**: anything implementing [`Shape`] can be indexed
//! - **Built-in kinds**: axis-aligned cuboids, spheres and Y-up cylinders
//! - **Entry identity**: equal values inserted twice stay two entries
//! - **Queries**: containing a point, within a radius, overlapping a region
//! - **Bounds**: fixed at construction or grown from the inserted shapes
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_octree::prelude::*;
//!
//! fn main() -> Result<(), ShapeError> {
//!     let mut tree: Octree<BoundingVolume> = Octree::new();
//!     tree.insert(Cuboid::new(Point::splat(0.0), Point::splat(10.0))?.into());
//!     tree.insert(Sphere::new(Point::splat(10.0), 5.0)?.into());
//!
//!     assert_eq!(tree.find(Point::splat(9.0)).len(), 2);
//!     assert_eq!(tree.find_in_region(Point::splat(12.0), Point::splat(20.0)).len(), 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod shapes;
pub mod spatial;

pub use config::{Config, ConfigError, OctreeConfig};
pub use foundation::{Point, Vec3, AABB};
pub use shapes::{BoundingVolume, Cuboid, Cylinder, Shape, ShapeError, Sphere};
pub use spatial::{Entry, EntryId, LinearIndex, Octree, OctreeNode, OctreeStats, SpatialIndex};

/// Common imports for index users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, OctreeConfig},
        foundation::{Point, Vec3, AABB},
        shapes::{BoundingVolume, Cuboid, Cylinder, Shape, ShapeError, Sphere},
        spatial::{Entry, EntryId, LinearIndex, Octree, SpatialIndex},
    };
}
