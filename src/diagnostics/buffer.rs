// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! Provides a memory-bounded ring buffer that automatically evicts the
//! oldest entries when capacity is reached.

use std::collections::VecDeque;

/// Minimum accepted buffer capacity.
pub const MIN_CAPACITY: usize = 10;
/// Maximum accepted buffer capacity.
pub const MAX_CAPACITY: usize = 10_000;
/// Default buffer capacity.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Validated capacity for a [`CircularBuffer`].
///
/// Out-of-range values are clamped into `[MIN_CAPACITY, MAX_CAPACITY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    pub fn new(capacity: usize) -> Self {
        Self(capacity.clamp(MIN_CAPACITY, MAX_CAPACITY))
    }

    #[must_use]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Pushes an element, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stores_in_chronological_order() {
        let mut buffer = CircularBuffer::new(BufferCapacity::default());
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(MIN_CAPACITY));
        for i in 0..MIN_CAPACITY + 3 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), MIN_CAPACITY);
        assert_eq!(buffer.iter().next(), Some(&3));
    }

    #[test]
    fn capacity_is_clamped_to_bounds() {
        assert_eq!(BufferCapacity::new(0).get(), MIN_CAPACITY);
        assert_eq!(BufferCapacity::new(usize::MAX).get(), MAX_CAPACITY);
        assert_eq!(BufferCapacity::new(500).get(), 500);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = CircularBuffer::new(BufferCapacity::default());
        buffer.push("event");
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
