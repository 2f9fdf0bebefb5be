//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types (`Vec3`, `Point`)
//! - Axis-aligned bounding boxes
//! - Logging utilities

pub mod math;
pub mod bounds;
pub mod logging;

pub use bounds::AABB;
pub use math::{Point, Vec3};
