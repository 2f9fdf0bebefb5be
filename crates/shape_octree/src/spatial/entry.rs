//! Identity-bearing wrappers around stored shapes

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable identity of one inserted shape
    ///
    /// Assigned on insert and valid until that entry is removed. Two
    /// insertions of equal shape values get distinct ids.
    pub struct EntryId;
}

/// Arena owning every live entry; nodes refer to entries by [`EntryId`]
pub(crate) type EntryArena<T> = SlotMap<EntryId, Entry<T>>;

/// One inserted shape together with its identity
#[derive(Debug, Clone)]
pub struct Entry<T> {
    id: EntryId,
    shape: T,
}

impl<T> Entry<T> {
    pub(crate) const fn new(id: EntryId, shape: T) -> Self {
        Self { id, shape }
    }

    /// Identity of this entry
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// The stored shape
    pub const fn shape(&self) -> &T {
        &self.shape
    }

    pub(crate) fn into_shape(self) -> T {
        self.shape
    }
}

/// Entries are equal only when they are the same entry
impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}
