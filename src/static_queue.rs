// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-capacity FIFO queue.

use core::fmt;

use super::{Collection, Error, NoAllocation, StaticArray};

/// First-in, first-out queue with inline storage for up to `N` elements.
///
/// Elements are pushed at the back and popped from the front. Only the
/// element at the front of the queue is accessible.
///
/// # Examples
///
/// ```
/// use seqarray::StaticQueue;
///
/// let mut queue = StaticQueue::<i32, 4>::new();
/// queue.push(1).unwrap();
/// queue.push(2).unwrap();
/// queue.push(3).unwrap();
///
/// assert_eq!(queue.pop().unwrap(), 1);
/// assert_eq!(*queue.peek().unwrap(), 2);
/// assert_eq!(queue.count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticQueue<T, const N: usize> {
    elements: StaticArray<T, N>,
}

impl<T, const N: usize> StaticQueue<T, N> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        StaticQueue {
            elements: StaticArray::new(),
        }
    }

    /// Creates a queue holding `count` copies of `value`.
    ///
    /// Fails under the same conditions as [`StaticArray::with_fill()`].
    ///
    /// [`StaticArray::with_fill()`]: struct.StaticArray.html#method.with_fill
    #[inline]
    pub fn with_fill(value: T, count: usize) -> Result<Self, Error<(T,)>>
    where
        T: Clone,
    {
        StaticArray::with_fill(value, count)
            .map(|elements| StaticQueue { elements })
    }

    /// Creates a queue holding clones of the given values, with the first
    /// value at the front.
    #[inline]
    pub fn from_slice(values: &[T]) -> Result<Self, Error<()>>
    where
        T: Clone,
    {
        StaticArray::from_slice(values)
            .map(|elements| StaticQueue { elements })
    }

    /// Creates a queue holding the values produced by an iterator, with the
    /// first value at the front.
    #[inline]
    pub fn from_values<I>(values: I) -> Result<Self, Error<()>>
    where
        I: IntoIterator<Item = T>,
    {
        StaticArray::from_values(values)
            .map(|elements| StaticQueue { elements })
    }

    /// Adds an element to the back of the queue.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the queue is full, in which
    /// case the element is returned in the error.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), Error<(T,)>> {
        self.elements.push_back(element)
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the queue is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error<()>> {
        self.elements.pop_front()
    }

    /// Returns a reference to the element at the front of the queue.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the queue is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    pub fn peek(&self) -> Result<&T, Error<()>> {
        self.elements.front()
    }

    /// Returns a mutable reference to the element at the front of the queue.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, Error<()>> {
        self.elements.front_mut()
    }

    /// Moves all elements out of this queue into a new queue, leaving this
    /// queue empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        StaticQueue {
            elements: self.elements.take(),
        }
    }

    /// Returns the number of queued elements.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.elements.count()
    }

    /// Returns the maximum number of elements the queue can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns whether the queue holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns whether the queue cannot accept more elements.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.elements.is_full()
    }

    /// Removes all elements from the queue.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.elements.clear()
    }
}

impl<T, const N: usize> Default for StaticQueue<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Collection for StaticQueue<T, N> {
    type Element = T;
    type Policy = NoAllocation;

    #[inline(always)]
    fn count(&self) -> usize {
        self.elements.count()
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.elements.clear()
    }
}

impl<T, const N: usize> fmt::Debug for StaticQueue<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StaticQueue")
            .field("elements", &self.elements)
            .finish()
    }
}
