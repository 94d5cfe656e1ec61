// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bounded free-list of scratch rectangles.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::IntRect;

/// A bounded, thread-safe free-list of [`IntRect`]s.
///
/// Hot loops that need a scratch rectangle per iteration can recycle
/// them here. Releasing into a full pool drops the rectangle. The pool
/// is an ordinary value; share it by reference.
///
/// ```
/// use cutline::pool::RectPool;
///
/// let pool = RectPool::new();
/// let r = pool.acquire(0, 0, 10, 10);
/// assert_eq!(r.width, 10);
/// pool.release(r);
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Debug)]
pub struct RectPool {
    free: Mutex<Vec<IntRect>>,
    capacity: usize,
}

impl RectPool {
    /// The capacity of a pool made with [`RectPool::new`].
    pub const DEFAULT_CAPACITY: usize = 20;

    /// Create an empty pool holding up to [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
    /// rectangles.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty pool holding up to `capacity` rectangles.
    pub fn with_capacity(capacity: usize) -> Self {
        RectPool {
            free: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// The most rectangles the pool keeps.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of rectangles waiting to be reused.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no rectangles are waiting to be reused.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take a rectangle from the pool, or make one, and set its bounds.
    pub fn acquire(&self, x: i32, y: i32, width: i32, height: i32) -> IntRect {
        let mut rect = self.lock().pop().unwrap_or_default();
        rect.set_bounds(x, y, width, height);
        rect
    }

    /// Return a rectangle to the pool.
    pub fn release(&self, rect: IntRect) {
        let mut free = self.lock();
        if free.len() < self.capacity {
            free.push(rect);
        }
    }

    // The list holds plain values, so a panic elsewhere cannot leave it
    // inconsistent.
    fn lock(&self) -> MutexGuard<'_, Vec<IntRect>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RectPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_sets_bounds() {
        let pool = RectPool::new();
        assert!(pool.is_empty());
        pool.release(IntRect::new(1, 2, 3, 4));
        let r = pool.acquire(5, 6, 7, 8);
        assert_eq!(r, IntRect::new(5, 6, 7, 8));
        assert!(pool.is_empty());
    }

    #[test]
    fn release_is_bounded() {
        let pool = RectPool::with_capacity(2);
        for _ in 0..5 {
            pool.release(IntRect::ZERO);
        }
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn shared_between_threads() {
        let pool = RectPool::default();
        std::thread::scope(|s| {
            for i in 0..4 {
                let pool = &pool;
                s.spawn(move || {
                    for j in 0..100 {
                        let r = pool.acquire(i, j, 1, 1);
                        assert_eq!((r.x, r.y), (i, j));
                        pool.release(r);
                    }
                });
            }
        });
        assert!(pool.len() <= RectPool::DEFAULT_CAPACITY);
        assert!(!pool.is_empty());
    }
}
