//! Spatial partitioning data structures
//!
//! Provides the octree index over shapes, its node and entry types, and the
//! abstract [`SpatialIndex`] interface with a brute-force [`LinearIndex`].

mod entry;
mod node;
mod octree;
pub mod spatial_query;

#[cfg(test)]
mod tests;

pub use entry::{Entry, EntryId};
pub use node::{OctreeNode, OctreeStats};
pub use octree::{Iter, Octree};
pub use spatial_query::{LinearIndex, SpatialIndex};
