//! Abstract spatial query interface
//!
//! Collaborators that only need insert/remove/query can hold any
//! [`SpatialIndex`] and swap the partitioning scheme without changes.
//! [`LinearIndex`] is the flat brute-force implementation: fine for a
//! handful of shapes and used as the reference when checking the octree.

use crate::foundation::{Point, AABB};
use crate::shapes::Shape;
use super::entry::{Entry, EntryArena, EntryId};
use super::octree::Octree;

/// Abstract interface over shape indexes
pub trait SpatialIndex<T: Shape + PartialEq> {
    /// Insert a shape, returning the identity of the new entry
    fn insert(&mut self, shape: T) -> EntryId;

    /// Remove one entry equal to `shape`; `false` if none matched
    fn remove(&mut self, shape: &T) -> bool;

    /// Shapes containing `point`
    fn find(&self, point: Point) -> Vec<&T>;

    /// Shapes within `radius` of `point`
    fn find_nearby(&self, point: Point, radius: f64) -> Vec<&T>;

    /// Shapes overlapping the region between `min` and `max`
    fn find_in_region(&self, min: Point, max: Point) -> Vec<&T>;

    /// Whether an entry equal to `shape` exists
    fn contains(&self, shape: &T) -> bool;

    /// Remove every entry
    fn clear(&mut self);

    /// Number of live entries
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Shape + PartialEq> SpatialIndex<T> for Octree<T> {
    fn insert(&mut self, shape: T) -> EntryId {
        Self::insert(self, shape)
    }

    fn remove(&mut self, shape: &T) -> bool {
        Self::remove(self, shape)
    }

    fn find(&self, point: Point) -> Vec<&T> {
        Self::find(self, point)
    }

    fn find_nearby(&self, point: Point, radius: f64) -> Vec<&T> {
        Self::find_nearby(self, point, radius)
    }

    fn find_in_region(&self, min: Point, max: Point) -> Vec<&T> {
        Self::find_in_region(self, min, max)
    }

    fn contains(&self, shape: &T) -> bool {
        Self::contains(self, shape)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

/// Flat list of shapes answered by linear scans
#[derive(Debug, Clone)]
pub struct LinearIndex<T> {
    entries: EntryArena<T>,
}

impl<T> Default for LinearIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinearIndex<T> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: EntryArena::with_key(),
        }
    }

    /// Iterate over every entry
    pub fn entries(&self) -> impl Iterator<Item = &Entry<T>> + '_ {
        self.entries.values()
    }
}

impl<T: Shape> LinearIndex<T> {
    fn scan(&self, mut matches: impl FnMut(&T) -> bool) -> Vec<&T> {
        self.entries
            .values()
            .map(Entry::shape)
            .filter(|shape| matches(shape))
            .collect()
    }
}

impl<T: Shape + PartialEq> SpatialIndex<T> for LinearIndex<T> {
    fn insert(&mut self, shape: T) -> EntryId {
        self.entries.insert_with_key(|id| Entry::new(id, shape))
    }

    fn remove(&mut self, shape: &T) -> bool {
        let found = self
            .entries
            .iter()
            .find(|(_, entry)| entry.shape() == shape)
            .map(|(id, _)| id);
        found.and_then(|id| self.entries.remove(id)).is_some()
    }

    fn find(&self, point: Point) -> Vec<&T> {
        self.scan(|shape| shape.contains_point(point))
    }

    fn find_nearby(&self, point: Point, radius: f64) -> Vec<&T> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        let radius_sq = radius * radius;
        self.scan(|shape| shape.squared_distance(point) <= radius_sq)
    }

    fn find_in_region(&self, min: Point, max: Point) -> Vec<&T> {
        let region = AABB::from_corners(min, max);
        self.scan(|shape| shape.intersects_region(&region))
    }

    fn contains(&self, shape: &T) -> bool {
        self.entries.values().any(|entry| entry.shape() == shape)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
