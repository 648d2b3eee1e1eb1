// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-capacity array implementation.

use core::fmt;
use core::mem::{self, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::slice;

use super::array_iter::IntoIter;
use super::memory;
use super::{
    Collection, Error, ErrorKind, NoAllocation, SequencedCollection,
};

/// Contiguous array with inline storage for up to `N` elements.
///
/// `StaticArray` never allocates. Operations that would need more than `N`
/// elements fail with [`ErrorKind::LengthError`] instead of growing. A
/// capacity of zero is rejected at compile time.
///
/// # Examples
///
/// ```
/// use seqarray::{ErrorKind, StaticArray};
///
/// let mut array = StaticArray::<i32, 3>::new();
/// array.push_back(2).unwrap();
/// array.push_front(1).unwrap();
/// array.push_back(3).unwrap();
/// assert_eq!(array, [1, 2, 3]);
/// assert!(array.is_full());
///
/// let error = array.insert(0, 0).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::LengthError);
/// ```
///
/// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
pub struct StaticArray<T, const N: usize> {
    /// Element storage; the first `count` slots are initialized.
    data: [MaybeUninit<T>; N],
    /// Number of live elements.
    count: usize,
}

impl<T, const N: usize> StaticArray<T, N> {
    const NONZERO_CAPACITY: () =
        assert!(N > 0, "static arrays must have a nonzero capacity");

    /// Creates an empty array.
    #[inline]
    pub fn new() -> Self {
        let () = Self::NONZERO_CAPACITY;

        StaticArray {
            // An array of `MaybeUninit` values is valid while uninitialized.
            data: unsafe { MaybeUninit::uninit().assume_init() },
            count: 0,
        }
    }

    /// Creates an array holding `count` copies of `value`.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `count` is zero, or with
    /// [`ErrorKind::OutOfRange`] if `count` exceeds the capacity. `value` is
    /// returned in the error on failure.
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    pub fn with_fill(value: T, count: usize) -> Result<Self, Error<(T,)>>
    where
        T: Clone,
    {
        if let Err(e) = Self::check_initial_count(count) {
            return Err(e.map(|()| (value,)));
        }

        let mut array = Self::new();
        while array.count + 1 < count {
            array.data[array.count] = MaybeUninit::new(value.clone());
            array.count += 1;
        }
        array.data[array.count] = MaybeUninit::new(value);
        array.count = count;

        Ok(array)
    }

    /// Creates an array holding clones of the given values.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `values` is empty, or
    /// with [`ErrorKind::OutOfRange`] if it holds more values than the
    /// capacity.
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    pub fn from_slice(values: &[T]) -> Result<Self, Error<()>>
    where
        T: Clone,
    {
        Self::check_initial_count(values.len())?;

        let mut array = Self::new();
        unsafe {
            memory::copy_construct_array(
                array.as_mut_ptr(),
                values.as_ptr(),
                values.len(),
            )?;
        }
        array.count = values.len();

        Ok(array)
    }

    /// Creates an array holding the values produced by an iterator.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if the iterator is empty, or
    /// with [`ErrorKind::OutOfRange`] if it produces more values than the
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::{ErrorKind, StaticArray};
    ///
    /// let array = StaticArray::<_, 4>::from_values("abc".chars()).unwrap();
    /// assert_eq!(array, ['a', 'b', 'c']);
    ///
    /// let error = StaticArray::<_, 2>::from_values(0..3).unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::OutOfRange);
    /// ```
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    pub fn from_values<I>(values: I) -> Result<Self, Error<()>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();
        for value in values {
            if array.count == N {
                return Err(Error::new(ErrorKind::OutOfRange, ()));
            }

            array.data[array.count] = MaybeUninit::new(value);
            array.count += 1;
        }

        if array.count == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, ()));
        }

        Ok(array)
    }

    /// Moves all elements out of this array into a new array, leaving this
    /// array empty. The capacity of both arrays is always `N`.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Returns an iterator over references to all elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to all elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<T> {
        self.as_mut_slice().iter_mut()
    }

    sequenced_collection_methods!(T);

    fn check_initial_count(count: usize) -> Result<(), Error<()>> {
        if count == 0 {
            Err(Error::new(ErrorKind::InvalidArgument, ()))
        } else if count > N {
            Err(Error::new(ErrorKind::OutOfRange, ()))
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Collection for StaticArray<T, N> {
    type Element = T;
    type Policy = NoAllocation;

    #[inline(always)]
    fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }

    fn clear(&mut self) {
        let count = self.count;
        self.count = 0;
        unsafe {
            memory::destruct_range(self.data.as_mut_ptr() as *mut T, count);
        }
    }
}

unsafe impl<T, const N: usize> SequencedCollection for StaticArray<T, N> {
    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.data.as_ptr() as *const T
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr() as *mut T
    }

    #[inline(always)]
    unsafe fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    #[inline]
    fn check_vacancy(&self, additional: usize) -> Result<(), Error<()>> {
        match self.count.checked_add(additional) {
            Some(required) if required <= N => Ok(()),
            _ => Err(Error::new(ErrorKind::LengthError, ())),
        }
    }

    #[inline(always)]
    fn reserve_additional(&mut self, _: usize) -> Result<(), Error<()>> {
        Ok(())
    }
}

impl<T, const N: usize> Drop for StaticArray<T, N> {
    #[inline]
    fn drop(&mut self) {
        Collection::clear(self);
    }
}

impl<T, const N: usize> Default for StaticArray<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Clone for StaticArray<T, N>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        for value in self.as_slice() {
            clone.data[clone.count] = MaybeUninit::new(value.clone());
            clone.count += 1;
        }

        clone
    }
}

impl<T, const N: usize> Deref for StaticArray<T, N> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for StaticArray<T, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> fmt::Debug for StaticArray<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<StaticArray<U, M>>
    for StaticArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &StaticArray<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, const N: usize> Eq for StaticArray<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U]> for StaticArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]>
    for StaticArray<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, const N: usize> IntoIterator for StaticArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    #[inline]
    fn into_iter(self) -> IntoIter<Self> {
        IntoIter::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
