// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-capacity LIFO stack.

use core::fmt;

use super::{Collection, Error, NoAllocation, StaticArray};

/// Last-in, first-out stack with inline storage for up to `N` elements.
///
/// Elements are pushed onto and popped from the top of the stack. Only the
/// element at the top of the stack is accessible.
///
/// # Examples
///
/// ```
/// use seqarray::StaticStack;
///
/// let mut stack = StaticStack::<i32, 4>::new();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// stack.push(3).unwrap();
///
/// assert_eq!(stack.pop().unwrap(), 3);
/// assert_eq!(*stack.peek().unwrap(), 2);
/// assert_eq!(stack.count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticStack<T, const N: usize> {
    elements: StaticArray<T, N>,
}

impl<T, const N: usize> StaticStack<T, N> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        StaticStack {
            elements: StaticArray::new(),
        }
    }

    /// Creates a stack holding `count` copies of `value`.
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
            .map(|elements| StaticStack { elements })
    }

    /// Creates a stack holding clones of the given values, with the last
    /// value on top.
    #[inline]
    pub fn from_slice(values: &[T]) -> Result<Self, Error<()>>
    where
        T: Clone,
    {
        StaticArray::from_slice(values)
            .map(|elements| StaticStack { elements })
    }

    /// Creates a stack holding the values produced by an iterator, with the
    /// last value on top.
    #[inline]
    pub fn from_values<I>(values: I) -> Result<Self, Error<()>>
    where
        I: IntoIterator<Item = T>,
    {
        StaticArray::from_values(values)
            .map(|elements| StaticStack { elements })
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the stack is full, in which
    /// case the element is returned in the error.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), Error<(T,)>> {
        self.elements.push_back(element)
    }

    /// Removes and returns the element at the top of the stack.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the stack is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error<()>> {
        self.elements.pop_back()
    }

    /// Returns a reference to the element at the top of the stack.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the stack is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    pub fn peek(&self) -> Result<&T, Error<()>> {
        self.elements.back()
    }

    /// Returns a mutable reference to the element at the top of the stack.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, Error<()>> {
        self.elements.back_mut()
    }

    /// Moves all elements out of this stack into a new stack, leaving this
    /// stack empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        StaticStack {
            elements: self.elements.take(),
        }
    }

    /// Returns the number of stacked elements.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.elements.count()
    }

    /// Returns the maximum number of elements the stack can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns whether the stack holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns whether the stack cannot accept more elements.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.elements.is_full()
    }

    /// Removes all elements from the stack.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.elements.clear()
    }
}

impl<T, const N: usize> Default for StaticStack<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Collection for StaticStack<T, N> {
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

impl<T, const N: usize> fmt::Debug for StaticStack<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StaticStack")
            .field("elements", &self.elements)
            .finish()
    }
}
