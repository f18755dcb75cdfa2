//! Fixed-capacity entity storage
//!
//! `EntityPool` is an arena of slots addressed by plain integer handles. Slots
//! are reused without a generation counter, so a handle that outlives its
//! `free` silently aliases whatever is allocated there next. Callers remove a
//! handle from every `IndexArray` when they free it.

use super::entity::Entity;
use super::error::SimError;

/// Handle into an `EntityPool`
pub type EntityIndex = usize;

#[derive(Debug, Clone)]
enum Slot {
    Free,
    Occupied(Entity),
}

/// Arena of entity slots with a hard capacity ceiling
#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Slot>,
}

impl EntityPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Free; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied(_)))
            .count()
    }

    /// Store `entity` in the first free slot
    pub fn alloc(&mut self, entity: Entity) -> Result<EntityIndex, SimError> {
        let idx = self
            .slots
            .iter()
            .position(|s| matches!(s, Slot::Free))
            .ok_or(SimError::PoolExhausted {
                capacity: self.capacity(),
            })?;
        self.slots[idx] = Slot::Occupied(entity);
        Ok(idx)
    }

    /// Mark a slot free
    pub fn free(&mut self, idx: EntityIndex) {
        self.slots[idx] = Slot::Free;
    }

    /// Free every slot
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Free);
    }

    #[inline]
    pub fn is_free(&self, idx: EntityIndex) -> bool {
        matches!(self.slots[idx], Slot::Free)
    }

    /// Panics if the slot is free
    pub fn get(&self, idx: EntityIndex) -> &Entity {
        match &self.slots[idx] {
            Slot::Occupied(e) => e,
            Slot::Free => panic!("entity slot {} is free", idx),
        }
    }

    /// Panics if the slot is free
    pub fn get_mut(&mut self, idx: EntityIndex) -> &mut Entity {
        match &mut self.slots[idx] {
            Slot::Occupied(e) => e,
            Slot::Free => panic!("entity slot {} is free", idx),
        }
    }
}

/// Ordered, bounded list of pool handles for one entity category
#[derive(Debug, Clone)]
pub struct IndexArray {
    idxs: Vec<EntityIndex>,
    capacity: usize,
}

impl IndexArray {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            idxs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idxs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idxs.is_empty()
    }

    pub fn push(&mut self, idx: EntityIndex) {
        assert!(
            self.idxs.len() < self.capacity,
            "index array full ({} entries)",
            self.capacity
        );
        self.idxs.push(idx);
    }

    /// Remove the entry at position `i`, shifting later entries left
    pub fn remove_at(&mut self, i: usize) -> EntityIndex {
        assert!(i < self.idxs.len(), "remove_at({}) on length {}", i, self.idxs.len());
        self.idxs.remove(i)
    }

    pub fn clear(&mut self) {
        self.idxs.clear();
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<EntityIndex> {
        self.idxs.get(i).copied()
    }

    pub fn contains(&self, idx: EntityIndex) -> bool {
        self.idxs.contains(&idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityIndex> + '_ {
        self.idxs.iter().copied()
    }

    pub fn as_slice(&self) -> &[EntityIndex] {
        &self.idxs
    }
}

impl std::ops::Index<usize> for IndexArray {
    type Output = EntityIndex;

    fn index(&self, i: usize) -> &EntityIndex {
        &self.idxs[i]
    }
}
