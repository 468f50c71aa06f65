use anyhow::{Context, Result};

use crate::vertex::Vertex;

/// Conventional slot count for a renderer-owned [`VertexStore`].
pub const DEFAULT_VERTEX_CAPACITY: usize = 1024;

/// Fixed-capacity store of [`Vertex`] records: the arena specialization
/// the renderer-facing API is written against.
pub type VertexStore = Arena<Vertex>;

/// Fixed-capacity bump arena.
///
/// Owns one contiguous, fixed-length run of slots allocated at construction
/// and never resized. [`alloc`](Self::alloc) hands out the next `n`
/// contiguous slots and advances a monotonic high-water mark; there is no
/// per-slot free, no resize, and no reset. Capacity exhaustion is the only
/// runtime failure and is signaled by `None` with the arena left unchanged.
///
/// Single-writer by construction: `alloc` takes `&mut self`, so population
/// is serialized by the owner (one arena per frame/batch/thread). Which
/// individual slots have been written is not tracked, only the mark.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Box<[T]>,
    len: usize,

    /// Exhaustion is expected under load and must not spam the log.
    warned_full: bool,
}

impl<T: Clone + Default> Arena<T> {
    /// Creates an arena of `capacity` default-initialized slots.
    ///
    /// The backing store is allocated once, here. An unsatisfiable
    /// allocation surfaces as an error instead of an abort; no partially
    /// constructed arena is observable afterward.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .with_context(|| format!("failed to allocate arena backing store ({capacity} slots)"))?;
        slots.resize(capacity, T::default());

        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: 0,
            warned_full: false,
        })
    }
}

impl<T> Arena<T> {
    /// Reserves the next `n` contiguous slots and returns them for writing.
    ///
    /// Succeeds iff `len() + n <= capacity()`; the returned region starts at
    /// the previous high-water mark and `len()` advances by `n`. On
    /// exhaustion returns `None` and leaves the arena unchanged; callers
    /// must check before writing.
    ///
    /// Zero-length policy: `alloc(0)` always succeeds and returns the empty
    /// region at the current end, without moving the mark.
    pub fn alloc(&mut self, n: usize) -> Option<&mut [T]> {
        let end = match self.len.checked_add(n) {
            Some(end) if end <= self.slots.len() => end,
            _ => {
                if !self.warned_full {
                    log::debug!(
                        "arena exhausted: len={} capacity={} requested={}",
                        self.len,
                        self.slots.len(),
                        n
                    );
                    self.warned_full = true;
                }
                return None;
            }
        };

        let start = self.len;
        self.len = end;
        Some(&mut self.slots[start..end])
    }

    /// Number of slots allocated so far (the high-water mark).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots still available to [`Self::alloc`].
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.len
    }

    /// The populated prefix `[0, len)`: the region uploads should read.
    #[inline]
    pub fn filled(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// The entire backing region: `capacity()` slots regardless of `len()`.
    ///
    /// Caller-bounded escape hatch for bulk access. Bounds are only enforced
    /// by [`Self::alloc`]; writes past the high-water mark are not tracked
    /// and will not appear in [`Self::filled`].
    #[inline]
    pub fn backing(&self) -> &[T] {
        &self.slots
    }

    /// Mutable variant of [`Self::backing`].
    #[inline]
    pub fn backing_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn arena(capacity: usize) -> Arena<u32> {
        Arena::new(capacity).unwrap()
    }

    // ── alloc ─────────────────────────────────────────────────────────────

    #[test]
    fn alloc_advances_the_mark() {
        let mut a = arena(4);
        let region = a.alloc(2).unwrap();
        assert_eq!(region.len(), 2);
        assert_eq!(a.len(), 2);
        assert_eq!(a.remaining(), 2);
    }

    #[test]
    fn alloc_regions_are_consecutive_and_disjoint() {
        let mut a = arena(6);
        a.alloc(2).unwrap().copy_from_slice(&[1, 2]);
        a.alloc(3).unwrap().copy_from_slice(&[3, 4, 5]);
        a.alloc(1).unwrap().copy_from_slice(&[6]);
        assert_eq!(a.filled(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn alloc_over_capacity_fails_and_leaves_mark_unchanged() {
        let mut a = arena(4);
        assert!(a.alloc(2).is_some());
        assert!(a.alloc(3).is_none());
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn alloc_can_fill_remainder_after_a_failure() {
        // capacity 4: [0,2) succeeds, 3 more fail, the final 2 land at [2,4).
        let mut a = arena(4);
        a.alloc(2).unwrap().copy_from_slice(&[10, 11]);
        assert!(a.alloc(3).is_none());
        a.alloc(2).unwrap().copy_from_slice(&[12, 13]);
        assert_eq!(a.len(), 4);
        assert_eq!(a.filled(), &[10, 11, 12, 13]);
    }

    #[test]
    fn alloc_exact_fit_reaches_capacity() {
        let mut a = arena(3);
        assert!(a.alloc(3).is_some());
        assert_eq!(a.len(), 3);
        assert_eq!(a.remaining(), 0);
        assert!(a.alloc(1).is_none());
    }

    #[test]
    fn alloc_zero_always_succeeds_with_empty_region() {
        let mut a = arena(2);
        assert_eq!(a.alloc(0).unwrap().len(), 0);
        assert_eq!(a.len(), 0);

        a.alloc(2).unwrap();
        // Still succeeds at full capacity.
        assert_eq!(a.alloc(0).unwrap().len(), 0);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn zero_capacity_arena_rejects_everything_but_zero() {
        let mut a = arena(0);
        assert!(a.alloc(1).is_none());
        assert!(a.alloc(0).is_some());
        assert_eq!(a.len(), 0);
        assert_eq!(a.backing().len(), 0);
    }

    #[test]
    fn alloc_huge_request_does_not_overflow() {
        let mut a = arena(4);
        a.alloc(1).unwrap();
        assert!(a.alloc(usize::MAX).is_none());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn len_sums_only_successful_allocations() {
        let mut a = arena(10);
        let requests = [4usize, 8, 3, 3, 1];
        let mut expected = 0usize;
        for n in requests {
            let ok = a.alloc(n).is_some();
            assert_eq!(ok, expected + n <= a.capacity());
            if ok {
                expected += n;
            }
            assert_eq!(a.len(), expected);
        }
        assert_eq!(a.len(), 10);
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[test]
    fn backing_is_full_capacity_regardless_of_mark() {
        let mut a = arena(8);
        assert_eq!(a.backing().len(), 8);
        a.alloc(5).unwrap();
        assert_eq!(a.backing().len(), 8);
        assert_eq!(a.backing_mut().len(), 8);
    }

    #[test]
    fn filled_tracks_the_populated_prefix() {
        let mut a = arena(8);
        assert!(a.filled().is_empty());
        assert!(a.is_empty());
        a.alloc(3).unwrap();
        assert_eq!(a.filled().len(), 3);
        assert!(!a.is_empty());
    }

    #[test]
    fn slots_are_default_initialized() {
        let a = arena(4);
        assert_eq!(a.backing(), &[0, 0, 0, 0]);
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_rejects_unsatisfiable_capacity() {
        // Capacity overflow in the backing reservation must surface as an
        // error, not an abort.
        assert!(Arena::<u64>::new(usize::MAX).is_err());
    }

    // ── drop ──────────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct DropProbe(Option<Arc<AtomicUsize>>);

    impl Drop for DropProbe {
        fn drop(&mut self) {
            if let Some(count) = &self.0 {
                count.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn backing_is_released_exactly_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut a: Arena<DropProbe> = Arena::new(8).unwrap();

        let region = a.alloc(5).unwrap();
        for slot in region.iter_mut() {
            *slot = DropProbe(Some(drops.clone()));
        }

        // The default-initialized slots carry no counter, so nothing has
        // been counted yet.
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        drop(a);
        assert_eq!(drops.load(Ordering::SeqCst), 5);
    }

    // ── vertex store ──────────────────────────────────────────────────────

    #[test]
    fn vertex_store_allocates_vertex_records() {
        let mut store = VertexStore::new(DEFAULT_VERTEX_CAPACITY).unwrap();
        assert_eq!(store.capacity(), 1024);

        let region = store.alloc(3).unwrap();
        region[0] = Vertex::new([0.0, 0.5, 0.0], [255, 0, 0, 255]);
        region[1] = Vertex::new([-0.5, -0.5, 0.0], [0, 255, 0, 255]);
        region[2] = Vertex::new([0.5, -0.5, 0.0], [0, 0, 255, 255]);

        assert_eq!(store.filled().len(), 3);
        assert_eq!(store.filled()[1].color, [0, 255, 0, 255]);
    }
}
