//! Octree spatial index over arbitrary shapes
//!
//! Efficiently divides 3D space into hierarchical regions for fast point,
//! radius and region queries. Each leaf subdivides into 8 octants when its
//! item count would exceed the configured capacity.
//!
//! Shapes are owned by an arena keyed by [`EntryId`]; leaves only hold ids,
//! so a shape overlapping several octants is referenced, never copied, and
//! inserting the same value twice yields two distinct entries.

use std::collections::HashSet;

use crate::config::OctreeConfig;
use crate::foundation::{Point, AABB};
use crate::shapes::Shape;
use super::entry::{Entry, EntryArena, EntryId};
use super::node::{OctreeNode, OctreeStats};

/// Fraction of the grown bounds' size added on every side when an
/// auto-bounded tree has to expand, so that growth stays rare.
const GROWTH_PADDING: f64 = 0.25;

/// Octree spatial index
///
/// Bounds are either fixed at construction or computed from the inserted
/// shapes, growing (never shrinking) as needed. With fixed bounds, shapes
/// that do not fit entirely inside are kept on a side list and scanned
/// linearly, so every query stays exact.
///
/// # Example
///
/// ```
/// use shape_octree::prelude::*;
///
/// let mut tree = Octree::new();
/// let cuboid = Cuboid::new(Point::splat(0.0), Point::splat(10.0))?;
/// tree.insert(cuboid);
///
/// assert_eq!(tree.find(Point::splat(5.0)), vec![&cuboid]);
/// assert!(tree.find(Point::splat(15.0)).is_empty());
/// assert_eq!(tree.find_nearby(Point::splat(15.0), 8.67).len(), 1);
/// # Ok::<(), ShapeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Octree<T> {
    /// Root node covering `bounds`
    root: OctreeNode,

    /// Every live entry
    entries: EntryArena<T>,

    /// Entries not fully inside fixed bounds
    outliers: Vec<EntryId>,

    /// Current bounds; `None` until the first insert of an auto-bounded tree
    bounds: Option<AABB>,

    /// Whether `bounds` was supplied by the caller
    bounds_fixed: bool,

    /// Configuration
    config: OctreeConfig,
}

impl<T: Shape> Default for Octree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Shape> Octree<T> {
    /// Create an empty octree whose bounds follow the inserted shapes
    pub fn new() -> Self {
        Self::with_config(OctreeConfig::default())
    }

    /// Create an auto-bounded octree with the given configuration
    pub fn with_config(config: OctreeConfig) -> Self {
        Self {
            root: OctreeNode::new(AABB::from_point(Point::ORIGIN), 0),
            entries: EntryArena::with_key(),
            outliers: Vec::new(),
            bounds: None,
            bounds_fixed: false,
            config: config.sanitized(),
        }
    }

    /// Create an octree with fixed bounds and leaf capacity
    ///
    /// A capacity of zero is treated as one.
    pub fn with_bounds(min_bound: Point, max_bound: Point, capacity: usize) -> Self {
        Self::with_bounds_and_config(
            AABB::new(min_bound, max_bound),
            OctreeConfig::with_capacity(capacity),
        )
    }

    /// Create an octree with fixed bounds and full configuration
    pub fn with_bounds_and_config(bounds: AABB, config: OctreeConfig) -> Self {
        Self {
            root: OctreeNode::new(bounds, 0),
            entries: EntryArena::with_key(),
            outliers: Vec::new(),
            bounds: Some(bounds),
            bounds_fixed: true,
            config: config.sanitized(),
        }
    }

    /// Insert a shape and return the identity of the new entry
    ///
    /// Always succeeds. Equal values inserted twice become two entries.
    pub fn insert(&mut self, shape: T) -> EntryId {
        let aabb = shape.bounding_box();
        let id = self.entries.insert_with_key(|id| Entry::new(id, shape));

        let current = self.bounds;
        match current {
            None => {
                log::debug!("Octree bounds initialised to {aabb:?}");
                self.rebuild(aabb);
            }
            Some(bounds) if !bounds.contains_aabb(&aabb) => {
                if self.bounds_fixed {
                    log::debug!("Shape {aabb:?} exceeds fixed octree bounds {bounds:?}, storing as outlier");
                    self.outliers.push(id);
                } else {
                    let joined = bounds.union(&aabb);
                    let grown = joined.expanded(joined.size() * GROWTH_PADDING);
                    log::debug!("Growing octree bounds from {bounds:?} to {grown:?}");
                    self.rebuild(grown);
                }
            }
            Some(_) => self.root.insert(id, &aabb, &self.entries, &self.config),
        }
        id
    }

    /// Replace the root with one covering `bounds` and reinsert every entry
    fn rebuild(&mut self, bounds: AABB) {
        self.bounds = Some(bounds);
        self.root = OctreeNode::new(bounds, 0);
        for (id, entry) in &self.entries {
            self.root
                .insert(id, &entry.shape().bounding_box(), &self.entries, &self.config);
        }
        log::debug!("Rebuilt octree with {} entries", self.entries.len());
    }

    /// Remove the entry with the given identity, returning its shape
    pub fn remove_entry(&mut self, id: EntryId) -> Option<T> {
        let entry = self.entries.remove(id)?;
        if let Some(index) = self.outliers.iter().position(|outlier| *outlier == id) {
            self.outliers.remove(index);
        } else {
            self.root.remove(id, &entry.shape().bounding_box());
        }
        log::trace!("Removed octree entry {id:?}");
        Some(entry.into_shape())
    }

    /// Look up an entry by identity
    pub fn get(&self, id: EntryId) -> Option<&Entry<T>> {
        self.entries.get(id)
    }

    /// Entries whose shape contains `point`
    pub fn find_nodes(&self, point: Point) -> Vec<&Entry<T>> {
        self.query(
            |bounds| bounds.contains_point(point),
            |shape| shape.contains_point(point),
        )
    }

    /// Entries whose shape lies within `radius` of `point`
    ///
    /// A zero radius is an exact containment query; a negative or NaN
    /// radius matches nothing.
    pub fn find_nodes_nearby(&self, point: Point, radius: f64) -> Vec<&Entry<T>> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        let radius_sq = radius * radius;
        self.query(
            |bounds| bounds.squared_distance_to_point(point) <= radius_sq,
            |shape| shape.squared_distance(point) <= radius_sq,
        )
    }

    /// Entries whose shape overlaps or touches the region spanned by two
    /// corners (given in any order)
    pub fn find_nodes_in_region(&self, min: Point, max: Point) -> Vec<&Entry<T>> {
        let region = AABB::from_corners(min, max);
        self.query(
            |bounds| bounds.intersects(&region),
            |shape| shape.intersects_region(&region),
        )
    }

    /// Shapes containing `point`
    pub fn find(&self, point: Point) -> Vec<&T> {
        Self::shapes_of(self.find_nodes(point))
    }

    /// Shapes within `radius` of `point`
    pub fn find_nearby(&self, point: Point, radius: f64) -> Vec<&T> {
        Self::shapes_of(self.find_nodes_nearby(point, radius))
    }

    /// Shapes overlapping or touching the region between `min` and `max`
    pub fn find_in_region(&self, min: Point, max: Point) -> Vec<&T> {
        Self::shapes_of(self.find_nodes_in_region(min, max))
    }

    fn shapes_of(entries: Vec<&Entry<T>>) -> Vec<&T> {
        entries.into_iter().map(Entry::shape).collect()
    }

    /// Run one query: `visit` prunes subtrees by node bounds, `matches` is
    /// the exact per-shape test. The visited set is local to the call.
    fn query<V, F>(&self, visit: V, mut matches: F) -> Vec<&Entry<T>>
    where
        V: Fn(&AABB) -> bool,
        F: FnMut(&T) -> bool,
    {
        let mut exact = |id: EntryId| matches(self.entries[id].shape());
        let mut visited = HashSet::new();
        let mut ids = Vec::new();

        self.root.collect(&visit, &mut exact, &mut visited, &mut ids);
        ids.extend(self.outliers.iter().copied().filter(|id| exact(*id)));

        ids.into_iter().map(|id| &self.entries[id]).collect()
    }

    /// Number of live entries (duplicates counted separately)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    ///
    /// Bounds are kept: an auto-bounded tree keeps whatever it had grown to.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.outliers.clear();
        self.root = OctreeNode::new(*self.root.bounds(), 0);
        log::debug!("Cleared octree ({removed} entries)");
    }

    /// Iterate over every stored shape, once per entry
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Iterate over every entry
    pub fn entries(&self) -> impl Iterator<Item = &Entry<T>> + '_ {
        self.entries.values()
    }

    /// Current bounds, `None` for an auto-bounded tree that never held a shape
    pub const fn bounds(&self) -> Option<AABB> {
        self.bounds
    }

    /// Whether the bounds were fixed at construction
    pub const fn is_bounds_fixed(&self) -> bool {
        self.bounds_fixed
    }

    /// Effective configuration (capacity already coerced)
    pub const fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Root node
    pub const fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Get all leaf nodes (for visualization)
    pub fn leaves(&self) -> Vec<&OctreeNode> {
        let mut leaves = Vec::new();
        self.root.get_all_leaves(&mut leaves);
        leaves
    }

    /// Get all nodes at a specific depth (for visualization)
    pub fn nodes_at_depth(&self, depth: u32) -> Vec<&OctreeNode> {
        let mut nodes = Vec::new();
        self.root.get_nodes_at_depth(depth, &mut nodes);
        nodes
    }

    /// Node, leaf and reference counts
    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        self.root.accumulate_stats(&mut stats);
        stats
    }
}

impl<T: Shape + PartialEq> Octree<T> {
    /// Remove one entry equal to `shape`
    ///
    /// When several entries are equal, the first one met while walking the
    /// leaves that `shape` overlaps is removed. Returns `false` (and does
    /// nothing) if no entry matches.
    pub fn remove(&mut self, shape: &T) -> bool {
        self.locate(shape)
            .and_then(|id| self.remove_entry(id))
            .is_some()
    }

    /// Returns `true` if at least one entry equals `shape`
    pub fn contains(&self, shape: &T) -> bool {
        self.locate(shape).is_some()
    }

    /// Identity of the first entry equal to `shape`
    pub fn locate(&self, shape: &T) -> Option<EntryId> {
        let mut equal = |id: EntryId| self.entries[id].shape() == shape;
        self.root
            .find_first(&shape.bounding_box(), &mut equal)
            .or_else(|| self.outliers.iter().copied().find(|id| equal(*id)))
    }
}

/// Iterator over the shapes of an [`Octree`]
pub struct Iter<'a, T> {
    inner: slotmap::basic::Values<'a, EntryId, Entry<T>>,
}

impl<T> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::shape)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Shape> IntoIterator for &'a Octree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
