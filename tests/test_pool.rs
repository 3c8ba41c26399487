use astro_raid::pool::{Pool, PoolSlot};

#[derive(Clone, Debug)]
struct Slot {
    active: bool,
    tag: u32,
}

impl PoolSlot for Slot {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

fn make_slot() -> Slot {
    Slot { active: false, tag: 0 }
}

// ── acquire ───────────────────────────────────────────────────────────────────

#[test]
fn acquire_returns_an_inactive_slot() {
    let mut pool = Pool::new(make_slot, 4);
    let slot = pool.acquire();
    assert!(!slot.is_active());
}

#[test]
fn acquire_does_not_activate() {
    // Marking is the caller's job — two acquires without activation hand
    // out the same (first) slot.
    let mut pool = Pool::new(make_slot, 4);
    pool.acquire().tag = 7;
    assert_eq!(pool.acquire().tag, 7);
}

#[test]
fn acquire_returns_first_inactive_in_insertion_order() {
    let mut pool = Pool::new(make_slot, 3);
    for tag in 0..3 {
        let s = pool.acquire();
        s.active = true;
        s.tag = tag;
    }
    // Free the middle slot; the next acquire must hand it back.
    for s in pool.iter_mut() {
        if s.tag == 1 {
            s.deactivate();
        }
    }
    assert_eq!(pool.acquire().tag, 1);
}

// ── Growth ────────────────────────────────────────────────────────────────────

#[test]
fn pool_grows_only_when_every_slot_is_active() {
    let mut pool = Pool::new(make_slot, 2);
    pool.acquire().active = true;
    assert_eq!(pool.len(), 2); // a free slot remained — no growth

    pool.acquire().active = true;
    assert_eq!(pool.len(), 2);

    let grown = pool.acquire();
    assert!(!grown.is_active());
    assert_eq!(pool.len(), 3);
}

#[test]
fn pool_never_shrinks() {
    let mut pool = Pool::new(make_slot, 2);
    for _ in 0..5 {
        pool.acquire().active = true;
    }
    assert_eq!(pool.len(), 5);

    pool.deactivate_all();
    assert_eq!(pool.len(), 5);
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn deactivate_all_clears_every_flag() {
    let mut pool = Pool::new(make_slot, 3);
    for _ in 0..3 {
        pool.acquire().active = true;
    }
    assert_eq!(pool.active_count(), 3);
    pool.deactivate_all();
    assert!(pool.iter().all(|s| !s.is_active()));
}

#[test]
fn seeded_pool_starts_fully_inactive() {
    let pool = Pool::new(make_slot, 8);
    assert_eq!(pool.len(), 8);
    assert_eq!(pool.active_count(), 0);
    assert!(!pool.is_empty());
}
