// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw element cursors.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{align_of, size_of};
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

/// Position within the contiguous element storage of a collection.
///
/// A `Cursor` is little more than a typed address. Moving a cursor is always
/// safe (the address simply wraps), as is comparing two cursors, but
/// dereferencing one is `unsafe`: cursors are not tied to the lifetime of the
/// collection they were obtained from, and any operation that changes the
/// collection's structure (inserting, removing, or reallocating) may leave a
/// cursor pointing at a moved, destroyed, or released element.
///
/// Cursors are mainly used to describe element ranges for operations such as
/// [`remove_range()`], where the collection validates the addresses before
/// touching any memory.
///
/// Cursors over zero-sized elements advance by the element alignment, so
/// each position still has its own address even though no storage exists.
///
/// # Examples
///
/// ```
/// use seqarray::StaticArray;
///
/// let array = StaticArray::<i32, 8>::from_slice(&[10, 20, 30]).unwrap();
/// let mut cursor = array.begin_cursor();
/// let end = array.final_cursor();
///
/// let mut sum = 0;
/// while cursor != end {
///     sum += unsafe { *cursor.get() };
///     cursor.increment();
/// }
///
/// assert_eq!(sum, 60);
/// assert_eq!(end - array.begin_cursor(), 3);
/// ```
///
/// [`remove_range()`]: trait.SequencedCollection.html#method.remove_range
pub struct Cursor<T> {
    /// Current element address.
    ptr: *mut T,
}

/// Returns the address distance between consecutive element positions.
///
/// Zero-sized elements are spaced by their alignment so that every position
/// in a collection has a distinct, properly aligned address.
#[inline(always)]
pub(crate) const fn element_stride<T>() -> usize {
    if size_of::<T>() == 0 {
        align_of::<T>()
    } else {
        size_of::<T>()
    }
}

impl<T> Cursor<T> {
    /// Creates a cursor at the given address.
    #[inline(always)]
    pub const fn new(ptr: *mut T) -> Self {
        Cursor { ptr }
    }

    /// Creates a cursor that doesn't refer to any element.
    #[inline(always)]
    pub const fn null() -> Self {
        Cursor {
            ptr: ptr::null_mut(),
        }
    }

    /// Returns whether the cursor doesn't refer to any element.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the address the cursor refers to.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    /// Moves the cursor forward by one element.
    #[inline(always)]
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Moves the cursor back by one element.
    #[inline(always)]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Moves the cursor forward by one element, returning its previous
    /// position.
    #[inline(always)]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += 1;
        previous
    }

    /// Moves the cursor back by one element, returning its previous
    /// position.
    #[inline(always)]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= 1;
        previous
    }

    /// Transfers the position out of this cursor, leaving it null.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::Cursor;
    ///
    /// let mut value = 5;
    /// let mut source = Cursor::new(&mut value as *mut i32);
    /// let destination = source.take();
    ///
    /// assert!(source.is_null());
    /// assert_eq!(unsafe { *destination.get() }, 5);
    /// ```
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        let taken = *self;
        self.ptr = ptr::null_mut();
        taken
    }

    /// Returns the number of elements from `origin` to this cursor.
    ///
    /// The result is only meaningful if both cursors refer to the same
    /// element storage.
    #[inline]
    pub fn distance_from(&self, origin: Self) -> isize {
        (self.ptr as isize).wrapping_sub(origin.ptr as isize)
            / element_stride::<T>() as isize
    }

    #[inline(always)]
    fn forward(self, count: usize) -> Self {
        let bytes = count.wrapping_mul(element_stride::<T>());
        Cursor {
            ptr: (self.ptr as *mut u8).wrapping_add(bytes) as *mut T,
        }
    }

    #[inline(always)]
    fn backward(self, count: usize) -> Self {
        let bytes = count.wrapping_mul(element_stride::<T>());
        Cursor {
            ptr: (self.ptr as *mut u8).wrapping_sub(bytes) as *mut T,
        }
    }

    /// Returns a reference to the element the cursor refers to.
    ///
    /// # Safety
    ///
    /// The cursor must refer to a live element, and that element must not be
    /// mutated, moved, or destroyed for the duration of `'a`.
    #[inline(always)]
    pub unsafe fn get<'a>(&self) -> &'a T {
        &*self.ptr
    }

    /// Returns a mutable reference to the element the cursor refers to.
    ///
    /// # Safety
    ///
    /// The cursor must refer to a live element, and no other reference to
    /// that element may exist for the duration of `'a`.
    #[inline(always)]
    pub unsafe fn get_mut<'a>(&self) -> &'a mut T {
        &mut *self.ptr
    }
}

// Manual implementations avoid unnecessary bounds on `T`.

impl<T> Clone for Cursor<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Default for Cursor<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}

impl<T> PartialEq for Cursor<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.ptr as usize).cmp(&(other.ptr as usize))
    }
}

impl<T> Hash for Cursor<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.ptr as usize).hash(state)
    }
}

impl<T> Add<usize> for Cursor<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: usize) -> Self {
        self.forward(rhs)
    }
}

impl<T> Sub<usize> for Cursor<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: usize) -> Self {
        self.backward(rhs)
    }
}

impl<T> AddAssign<usize> for Cursor<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: usize) {
        *self = self.forward(rhs);
    }
}

impl<T> SubAssign<usize> for Cursor<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: usize) {
        *self = self.backward(rhs);
    }
}

impl<T> Sub for Cursor<T> {
    type Output = isize;

    #[inline(always)]
    fn sub(self, rhs: Self) -> isize {
        self.distance_from(rhs)
    }
}
