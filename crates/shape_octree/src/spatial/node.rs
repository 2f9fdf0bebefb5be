//! Octree nodes
//!
//! A node owns one axis-aligned region. Leaves list the entries whose
//! bounding boxes overlap that region; internal nodes own exactly eight
//! children splitting the region at its center. A shape straddling octant
//! boundaries is referenced from every leaf it overlaps, so queries
//! deduplicate by [`EntryId`].

use std::collections::HashSet;

use crate::config::OctreeConfig;
use crate::foundation::AABB;
use crate::shapes::Shape;
use super::entry::{EntryArena, EntryId};

/// Single node in the octree hierarchy
#[derive(Debug, Clone)]
pub struct OctreeNode {
    /// World-space bounds of this node
    bounds: AABB,

    /// Entries referenced by this node (leaves only)
    items: Vec<EntryId>,

    /// Child nodes (8 octants), None if this is a leaf
    children: Option<Box<[OctreeNode; 8]>>,

    /// Depth in the tree (0 = root)
    depth: u32,
}

/// Shape summary of a tree, for debugging and visualization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OctreeStats {
    /// Total number of nodes, internal and leaf
    pub nodes: usize,
    /// Number of leaves
    pub leaves: usize,
    /// Deepest node depth
    pub max_depth: u32,
    /// Entry references held by leaves (an entry straddling leaves counts once per leaf)
    pub references: usize,
}

impl OctreeNode {
    /// Create a new leaf node
    pub(crate) const fn new(bounds: AABB, depth: u32) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            children: None,
            depth,
        }
    }

    /// World-space bounds of this node
    pub const fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Depth in the tree (0 = root)
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Check if this node is a leaf (has no children)
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Entries referenced by this leaf; always empty for internal nodes
    pub fn items(&self) -> &[EntryId] {
        &self.items
    }

    /// The eight children, if subdivided
    pub fn children(&self) -> Option<&[OctreeNode; 8]> {
        self.children.as_deref()
    }

    /// Insert an entry whose bounding box is `aabb`
    ///
    /// The entry must already live in `entries`: subdivision reads the
    /// bounding boxes of every item, the new one included.
    pub(crate) fn insert<T: Shape>(
        &mut self,
        id: EntryId,
        aabb: &AABB,
        entries: &EntryArena<T>,
        config: &OctreeConfig,
    ) {
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                if child.bounds.intersects(aabb) {
                    child.insert(id, aabb, entries, config);
                }
            }
            return;
        }

        if self.items.len() >= config.capacity && self.should_subdivide(aabb, entries, config) {
            self.subdivide(entries);
            self.insert(id, aabb, entries, config);
        } else {
            self.items.push(id);
        }
    }

    /// Whether splitting this leaf can help
    ///
    /// Never past the depth limit or below the minimum size. Never when the
    /// bounding boxes of all items (the incoming one included) share a point
    /// inside the leaf: the child holding that point, and each of its
    /// descendants holding it, would receive every item again.
    fn should_subdivide<T: Shape>(&self, incoming: &AABB, entries: &EntryArena<T>, config: &OctreeConfig) -> bool {
        if self.depth >= config.max_depth {
            return false;
        }
        if self.bounds.size().max() <= config.min_node_size {
            return false;
        }
        let Some(start) = self.bounds.intersection(incoming) else {
            return true;
        };
        self.items
            .iter()
            .try_fold(start, |common, id| common.intersection(&entries[*id].shape().bounding_box()))
            .is_none()
    }

    /// Subdivide this leaf into 8 children, handing each item to every
    /// child its bounding box overlaps
    fn subdivide<T: Shape>(&mut self, entries: &EntryArena<T>) {
        if self.children.is_some() {
            return; // Already subdivided
        }

        let octants = self.bounds.octants();
        let depth = self.depth + 1;
        let mut children = Box::new(octants.map(|bounds| Self::new(bounds, depth)));

        for id in std::mem::take(&mut self.items) {
            let aabb = entries[id].shape().bounding_box();
            for child in children.iter_mut() {
                if child.bounds.intersects(&aabb) {
                    child.items.push(id);
                }
            }
        }

        log::trace!(
            "Subdivided octree node at depth {} with bounds {:?}",
            self.depth,
            self.bounds
        );
        self.children = Some(children);
    }

    /// Remove every reference to `id` in leaves overlapping `aabb`
    ///
    /// Returns `true` if at least one reference was dropped. Emptied children
    /// are left in place.
    pub(crate) fn remove(&mut self, id: EntryId, aabb: &AABB) -> bool {
        match &mut self.children {
            Some(children) => {
                let mut removed = false;
                for child in children.iter_mut() {
                    if child.bounds.intersects(aabb) {
                        removed |= child.remove(id, aabb);
                    }
                }
                removed
            }
            None => {
                let before = self.items.len();
                self.items.retain(|item| *item != id);
                self.items.len() != before
            }
        }
    }

    /// First entry (in traversal order) among leaves overlapping `aabb`
    /// that satisfies `matches`
    pub(crate) fn find_first<F>(&self, aabb: &AABB, matches: &mut F) -> Option<EntryId>
    where
        F: FnMut(EntryId) -> bool,
    {
        if !self.bounds.intersects(aabb) {
            return None;
        }
        match &self.children {
            Some(children) => children
                .iter()
                .find_map(|child| child.find_first(aabb, &mut *matches)),
            None => self.items.iter().copied().find(|id| matches(*id)),
        }
    }

    /// Collect matching entries into `out`, each at most once
    ///
    /// `visit` is the coarse test on node bounds used to prune subtrees;
    /// `matches` is the exact test, evaluated once per distinct entry.
    pub(crate) fn collect<V, F>(
        &self,
        visit: &V,
        matches: &mut F,
        visited: &mut HashSet<EntryId>,
        out: &mut Vec<EntryId>,
    ) where
        V: Fn(&AABB) -> bool,
        F: FnMut(EntryId) -> bool,
    {
        if !visit(&self.bounds) {
            return;
        }
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect(visit, matches, visited, out);
                }
            }
            None => {
                for &id in &self.items {
                    if visited.insert(id) && matches(id) {
                        out.push(id);
                    }
                }
            }
        }
    }

    /// Get all leaf nodes (for visualization)
    pub(crate) fn get_all_leaves<'a>(&'a self, leaves: &mut Vec<&'a Self>) {
        match &self.children {
            None => leaves.push(self),
            Some(children) => {
                for child in children.iter() {
                    child.get_all_leaves(leaves);
                }
            }
        }
    }

    /// Get all nodes at a specific depth (for visualization)
    pub(crate) fn get_nodes_at_depth<'a>(&'a self, target_depth: u32, nodes: &mut Vec<&'a Self>) {
        if self.depth == target_depth {
            nodes.push(self);
        } else if let Some(children) = &self.children {
            for child in children.iter() {
                child.get_nodes_at_depth(target_depth, nodes);
            }
        }
    }

    /// Accumulate node, leaf and reference counts
    pub(crate) fn accumulate_stats(&self, stats: &mut OctreeStats) {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(self.depth);
        match &self.children {
            None => {
                stats.leaves += 1;
                stats.references += self.items.len();
            }
            Some(children) => {
                for child in children.iter() {
                    child.accumulate_stats(stats);
                }
            }
        }
    }
}
