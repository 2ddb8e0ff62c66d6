//! Monotonic deque of indexed items.
//!
//! ## Purpose
//!
//! This module provides the one data structure every scan in the crate is
//! built on: a double-ended sequence of `(value, index)` items that stays
//! monotonic because each insertion first evicts every resident item the
//! incoming one dominates.
//!
//! ## Design notes
//!
//! * **Order as a type**: The eviction rule is a zero-sized `Monotonicity`
//!   marker, so the two mirrored histogram passes share one generic type.
//! * **Preallocated**: `with_capacity(n)` sizes the ring buffer to the input
//!   length, which bounds occupancy for a single pass.
//! * **Fail-fast**: Reading or popping an empty deque panics. Every client
//!   checks `is_empty()` first by construction.
//! * **Observable cost**: Push and pop counters are kept in `DequeStats`.
//!
//! ## Key concepts
//!
//! * **Insertion end**: The end the last item was pushed onto. The invariant
//!   is stated reading from there toward the opposite end.
//! * **Eviction**: `push_back`/`push_front` pop dominated items from the same
//!   end before appending. `push_*_with` hands each evicted item to a callback.
//! * **Window removal**: `evict_front_while`/`evict_back_while` remove items
//!   from either end under a client predicate.
//!
//! ## Invariants
//!
//! * After every insertion, no item is dominated by its neighbour nearer the
//!   insertion end.
//! * Each item is pushed once and popped at most once, so a pass over `n`
//!   items costs at most `2n` deque operations.
//!
//! ## Non-goals
//!
//! * Mixing `push_back` and `push_front` on one instance is not meaningful;
//!   each pass uses a single insertion end.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use core::marker::PhantomData;

// ============================================================================
// Items and Orders
// ============================================================================

/// One input element tagged with its original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<T> {
    /// Element value.
    pub value: T,

    /// Position of the element in the scanned sequence.
    pub index: usize,
}

impl<T> Item<T> {
    /// Tag `value` with `index`.
    #[inline]
    pub fn new(value: T, index: usize) -> Self {
        Self { value, index }
    }
}

/// Eviction rule of a monotonic deque.
pub trait Monotonicity {
    /// Human-readable name of the maintained order.
    const NAME: &'static str;

    /// Whether `resident`, sitting at the insertion end, is evicted when
    /// `incoming` is pushed.
    fn evicts<T: PartialOrd>(resident: &T, incoming: &T) -> bool;
}

/// Evicts residents strictly smaller than the incoming value.
///
/// Equal values survive, so reading toward the insertion end the values never increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonIncreasing;

/// Evicts residents smaller than or equal to the incoming value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictlyDecreasing;

/// Evicts residents strictly greater than the incoming value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonDecreasing;

/// Evicts residents greater than or equal to the incoming value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictlyIncreasing;

impl Monotonicity for NonIncreasing {
    const NAME: &'static str = "non-increasing";

    #[inline]
    fn evicts<T: PartialOrd>(resident: &T, incoming: &T) -> bool {
        resident < incoming
    }
}

impl Monotonicity for StrictlyDecreasing {
    const NAME: &'static str = "strictly decreasing";

    #[inline]
    fn evicts<T: PartialOrd>(resident: &T, incoming: &T) -> bool {
        resident <= incoming
    }
}

impl Monotonicity for NonDecreasing {
    const NAME: &'static str = "non-decreasing";

    #[inline]
    fn evicts<T: PartialOrd>(resident: &T, incoming: &T) -> bool {
        resident > incoming
    }
}

impl Monotonicity for StrictlyIncreasing {
    const NAME: &'static str = "strictly increasing";

    #[inline]
    fn evicts<T: PartialOrd>(resident: &T, incoming: &T) -> bool {
        resident >= incoming
    }
}

/// One end of the deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// The front (oldest end for `push_back` passes).
    Front,

    /// The back (oldest end for `push_front` passes).
    Back,
}

// ============================================================================
// Operation Counters
// ============================================================================

/// Push and pop counts accumulated by a deque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DequeStats {
    /// Number of items appended.
    pub pushes: usize,

    /// Number of items removed, by eviction or explicit pop.
    pub pops: usize,
}

impl DequeStats {
    /// Total number of deque operations.
    #[inline]
    pub fn total(&self) -> usize {
        self.pushes + self.pops
    }

    /// Sum the counters of two passes.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            pushes: self.pushes + other.pushes,
            pops: self.pops + other.pops,
        }
    }
}

// ============================================================================
// Monotonic Deque
// ============================================================================

/// Double-ended sequence of items kept monotonic under the order `M`.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T, M> {
    items: VecDeque<Item<T>>,
    stats: DequeStats,
    order: PhantomData<M>,
}

impl<T, M> Default for MonotonicDeque<T, M> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
            stats: DequeStats::default(),
            order: PhantomData,
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_deque(operation: &str) -> ! {
    panic!("{operation} called on an empty MonotonicDeque")
}

impl<T, M> MonotonicDeque<T, M> {
    /// Create an empty deque.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deque able to hold `capacity` items without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            stats: DequeStats::default(),
            order: PhantomData,
        }
    }

    /// Number of resident items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the deque holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at the front.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &Item<T> {
        match self.items.front() {
            Some(item) => item,
            None => empty_deque("front"),
        }
    }

    /// Item at the back.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &Item<T> {
        match self.items.back() {
            Some(item) => item,
            None => empty_deque("back"),
        }
    }

    /// Remove and return the front item.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[inline]
    #[track_caller]
    pub fn pop_front(&mut self) -> Item<T> {
        match self.items.pop_front() {
            Some(item) => {
                self.stats.pops += 1;
                item
            }
            None => empty_deque("pop_front"),
        }
    }

    /// Remove and return the back item.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) -> Item<T> {
        match self.items.pop_back() {
            Some(item) => {
                self.stats.pops += 1;
                item
            }
            None => empty_deque("pop_back"),
        }
    }

    /// Pop front items while `pred` holds. Returns the number removed.
    pub fn evict_front_while<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&Item<T>) -> bool,
    {
        let mut removed = 0;
        while self.items.front().is_some_and(&mut pred) {
            self.pop_front();
            removed += 1;
        }
        removed
    }

    /// Pop back items while `pred` holds. Returns the number removed.
    pub fn evict_back_while<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&Item<T>) -> bool,
    {
        let mut removed = 0;
        while self.items.back().is_some_and(&mut pred) {
            self.pop_back();
            removed += 1;
        }
        removed
    }

    /// Iterate from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Item<T>> + '_ {
        self.items.iter()
    }

    /// Drop every resident item. Counters are kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Operation counters so far.
    #[inline]
    pub fn stats(&self) -> DequeStats {
        self.stats
    }
}

impl<T: PartialOrd, M: Monotonicity> MonotonicDeque<T, M> {
    /// Pop every back item that `incoming` would evict, without inserting it.
    ///
    /// Lets a scan read the surviving neighbour before the push.
    #[inline]
    pub fn evict_dominated_back(&mut self, incoming: &T) -> usize {
        self.evict_back_while(|back| M::evicts(&back.value, incoming))
    }

    /// Pop every front item that `incoming` would evict, without inserting it.
    #[inline]
    pub fn evict_dominated_front(&mut self, incoming: &T) -> usize {
        self.evict_front_while(|front| M::evicts(&front.value, incoming))
    }

    /// Evict dominated items from the back, then append `item`.
    #[inline]
    pub fn push_back(&mut self, item: Item<T>) {
        self.push_back_with(item, |_| {});
    }

    /// Like [`push_back`](Self::push_back), handing each evicted item to `on_evict`
    /// in eviction order (nearest the back first).
    pub fn push_back_with<F>(&mut self, item: Item<T>, mut on_evict: F)
    where
        F: FnMut(Item<T>),
    {
        while self
            .items
            .back()
            .is_some_and(|back| M::evicts(&back.value, &item.value))
        {
            on_evict(self.pop_back());
        }
        self.items.push_back(item);
        self.stats.pushes += 1;

        debug_assert!(
            self.insertion_end_holds(End::Back),
            "push_back broke the {} invariant",
            M::NAME
        );
    }

    /// Evict dominated items from the front, then prepend `item`.
    #[inline]
    pub fn push_front(&mut self, item: Item<T>) {
        self.push_front_with(item, |_| {});
    }

    /// Like [`push_front`](Self::push_front), handing each evicted item to `on_evict`.
    pub fn push_front_with<F>(&mut self, item: Item<T>, mut on_evict: F)
    where
        F: FnMut(Item<T>),
    {
        while self
            .items
            .front()
            .is_some_and(|front| M::evicts(&front.value, &item.value))
        {
            on_evict(self.pop_front());
        }
        self.items.push_front(item);
        self.stats.pushes += 1;

        debug_assert!(
            self.insertion_end_holds(End::Front),
            "push_front broke the {} invariant",
            M::NAME
        );
    }

    /// Check the full invariant reading from `end` toward the opposite end.
    pub fn holds_invariant(&self, end: End) -> bool {
        match end {
            End::Back => self
                .items
                .iter()
                .rev()
                .zip(self.items.iter().rev().skip(1))
                .all(|(nearer, farther)| !M::evicts(&farther.value, &nearer.value)),
            End::Front => self
                .items
                .iter()
                .zip(self.items.iter().skip(1))
                .all(|(nearer, farther)| !M::evicts(&farther.value, &nearer.value)),
        }
    }

    // The rest of the deque was already monotonic, so only the newest pair can break it.
    fn insertion_end_holds(&self, end: End) -> bool {
        let n = self.items.len();
        if n < 2 {
            return true;
        }
        let (nearer, farther) = match end {
            End::Back => (&self.items[n - 1], &self.items[n - 2]),
            End::Front => (&self.items[0], &self.items[1]),
        };
        !M::evicts(&farther.value, &nearer.value)
    }
}
