//! Shapes that can be stored in the spatial index
//!
//! # Module Organization
//!
//! - [`shape`] - The [`Shape`] capability and the [`BoundingVolume`] enum
//! - [`primitives`] - Built-in kinds: [`Cuboid`], [`Sphere`], [`Cylinder`]
//! - [`error`] - [`ShapeError`] raised by the constructors
//!
//! The "up" axis is Y, so cylinders stand along +Y.

pub mod error;
pub mod primitives;
pub mod shape;

pub use error::ShapeError;
pub use primitives::{Cuboid, Cylinder, Sphere};
pub use shape::{BoundingVolume, Shape};
