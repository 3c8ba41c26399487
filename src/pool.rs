//! Growable pools of reusable entity slots.
//!
//! Pools exist to avoid per-tick allocation churn: slots are constructed
//! up front, recycled by flipping their `active` flag, and never destroyed
//! for the life of the process.

/// Implemented by every entity shape a [`Pool`] can hold.
pub trait PoolSlot {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

/// An ordered sequence of entity slots plus a growth rule: when every slot
/// is active at acquisition time, one more is built with the factory and
/// appended. The pool never shrinks.
#[derive(Clone, Debug)]
pub struct Pool<T> {
    slots: Vec<T>,
    factory: fn() -> T,
}

impl<T: PoolSlot> Pool<T> {
    /// Build a pool pre-seeded with `seed` inactive slots.
    pub fn new(factory: fn() -> T, seed: usize) -> Pool<T> {
        Pool {
            slots: (0..seed).map(|_| factory()).collect(),
            factory,
        }
    }

    /// Hand out the first inactive slot in insertion order, growing the
    /// pool when none is free. The returned slot is still inactive: the
    /// caller activates it and initializes its fields.
    pub fn acquire(&mut self) -> &mut T {
        if let Some(i) = self.slots.iter().position(|s| !s.is_active()) {
            return &mut self.slots[i];
        }
        self.slots.push((self.factory)());
        let last = self.slots.len() - 1;
        &mut self.slots[last]
    }

    /// Deactivate every slot without releasing storage (restart path).
    pub fn deactivate_all(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    /// Total slot count, active or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }
}
