// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Growable array implementation.

use core::cmp;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, align_of, size_of};
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;
use core::slice;

use stable_deref_trait::StableDeref;

use super::array_iter::IntoIter;
use super::memory;
use super::{
    AllocationPolicy, Collection, Error, ErrorKind, HeapAllocation,
    SequencedCollection,
};

/// Allocation policy instance used by a [`DynamicArray`].
///
/// [`DynamicArray`]: struct.DynamicArray.html
enum AllocatorHandle<'alloc, P>
where
    P: AllocationPolicy,
{
    /// Policy owned by the array.
    Internal(P),
    /// Policy shared with other collections.
    External(&'alloc P),
}

impl<'alloc, P> AllocatorHandle<'alloc, P>
where
    P: AllocationPolicy,
{
    #[inline(always)]
    fn get(&self) -> &P {
        match self {
            AllocatorHandle::Internal(policy) => policy,
            AllocatorHandle::External(policy) => policy,
        }
    }

    #[inline(always)]
    fn is_external(&self) -> bool {
        matches!(self, AllocatorHandle::External(_))
    }

    /// Returns a handle of the same kind for a new array.
    #[inline]
    fn duplicate(&self) -> Self
    where
        P: Default,
    {
        match self {
            AllocatorHandle::Internal(_) => {
                AllocatorHandle::Internal(P::default())
            }
            AllocatorHandle::External(policy) => {
                AllocatorHandle::External(policy)
            }
        }
    }
}

/// Rounds `value` up to a multiple of `alignment` (a power of two).
#[inline(always)]
fn align_up(value: usize, alignment: usize) -> Result<usize, Error<()>> {
    value
        .checked_add(alignment - 1)
        .map(|value| value & !(alignment - 1))
        .ok_or_else(|| Error::new(ErrorKind::Overflow, ()))
}

/// Contiguous array that grows its storage on demand.
///
/// Element storage is obtained from an [`AllocationPolicy`], which is either
/// owned by the array (the default, using [`HeapAllocation`]) or borrowed
/// from the caller using one of the `*_in()` constructors so that several
/// arrays can share a single policy instance. Arrays remember which of the
/// two they use; clones and arrays left behind by [`take()`] use the same
/// kind of policy as the original.
///
/// When an operation needs more room than the current capacity, the capacity
/// grows to either one and a half times its current value or the required
/// element count, whichever is larger, rounded up to a multiple of the
/// element alignment.
///
/// # Examples
///
/// ```
/// use seqarray::DynamicArray;
///
/// let mut array = DynamicArray::with_capacity(2).unwrap();
/// array.push_back(1).unwrap();
/// array.push_back(2).unwrap();
/// array.push_back(3).unwrap();
///
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 4);
/// ```
///
/// [`AllocationPolicy`]: trait.AllocationPolicy.html
/// [`HeapAllocation`]: struct.HeapAllocation.html
/// [`take()`]: #method.take
pub struct DynamicArray<'alloc, T, P = HeapAllocation>
where
    P: AllocationPolicy,
{
    /// Element storage; dangling while no storage is allocated.
    data: NonNull<T>,
    /// Number of live elements.
    count: usize,
    /// Number of element slots in `data`.
    capacity: usize,
    /// Policy used to manage `data`.
    allocator: AllocatorHandle<'alloc, P>,
    _phantom: PhantomData<T>,
}

impl<'alloc, T> DynamicArray<'alloc, T, HeapAllocation> {
    /// Creates an empty array with no storage, using its own heap
    /// allocation policy.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array with storage for `capacity` elements.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `capacity` is zero.
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error<()>> {
        Self::create_with_capacity(
            AllocatorHandle::Internal(HeapAllocation::new()),
            capacity,
        )
    }

    /// Creates an array holding `count` copies of `value`.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `count` is zero, in which
    /// case `value` is returned in the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::DynamicArray;
    ///
    /// let array = DynamicArray::with_fill(String::from("x"), 3).unwrap();
    /// assert_eq!(array, ["x", "x", "x"]);
    /// ```
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    #[inline]
    pub fn with_fill(value: T, count: usize) -> Result<Self, Error<(T,)>>
    where
        T: Clone,
    {
        Self::create_with_fill(
            AllocatorHandle::Internal(HeapAllocation::new()),
            value,
            count,
        )
    }

    /// Creates an array holding clones of the given values.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `values` is empty.
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    #[inline]
    pub fn from_slice(values: &[T]) -> Result<Self, Error<()>>
    where
        T: Clone,
    {
        Self::create_from_slice(
            AllocatorHandle::Internal(HeapAllocation::new()),
            values,
        )
    }

    /// Creates an array holding the values produced by an iterator.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::DynamicArray;
    ///
    /// let array = DynamicArray::from_values((1..=4).map(|x| x * x)).unwrap();
    /// assert_eq!(array, [1, 4, 9, 16]);
    /// ```
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    #[inline]
    pub fn from_values<I>(values: I) -> Result<Self, Error<()>>
    where
        I: IntoIterator<Item = T>,
    {
        Self::create_from_values(
            AllocatorHandle::Internal(HeapAllocation::new()),
            values,
        )
    }
}

impl<'alloc, T, P> DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    /// Creates an empty array with no storage, using a shared allocation
    /// policy.
    #[inline]
    pub fn new_in(allocator: &'alloc P) -> Self {
        Self::create(AllocatorHandle::External(allocator), 0)
    }

    /// Creates an empty array with storage for `capacity` elements, using a
    /// shared allocation policy.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `capacity` is zero.
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    #[inline]
    pub fn with_capacity_in(
        capacity: usize,
        allocator: &'alloc P,
    ) -> Result<Self, Error<()>> {
        Self::create_with_capacity(
            AllocatorHandle::External(allocator),
            capacity,
        )
    }

    /// Creates an array holding `count` copies of `value`, using a shared
    /// allocation policy.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] if `count` is zero, in which
    /// case `value` is returned in the error.
    ///
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    #[inline]
    pub fn with_fill_in(
        value: T,
        count: usize,
        allocator: &'alloc P,
    ) -> Result<Self, Error<(T,)>>
    where
        T: Clone,
    {
        Self::create_with_fill(
            AllocatorHandle::External(allocator),
            value,
            count,
        )
    }

    /// Creates an array holding clones of the given values, using a shared
    /// allocation policy.
    #[inline]
    pub fn from_slice_in(
        values: &[T],
        allocator: &'alloc P,
    ) -> Result<Self, Error<()>>
    where
        T: Clone,
    {
        Self::create_from_slice(AllocatorHandle::External(allocator), values)
    }

    /// Creates an array holding the values produced by an iterator, using a
    /// shared allocation policy.
    #[inline]
    pub fn from_values_in<I>(
        values: I,
        allocator: &'alloc P,
    ) -> Result<Self, Error<()>>
    where
        I: IntoIterator<Item = T>,
    {
        Self::create_from_values(AllocatorHandle::External(allocator), values)
    }

    /// Returns whether the array uses a policy supplied by the caller instead
    /// of owning its own.
    #[inline]
    pub fn has_external_allocator(&self) -> bool {
        self.allocator.is_external()
    }

    /// Returns the allocation policy used by the array.
    #[inline]
    pub fn allocator(&self) -> &P {
        self.allocator.get()
    }

    /// Grows the storage so that it can hold at least `minimum` elements.
    ///
    /// Does nothing if the capacity is already large enough. Otherwise the
    /// new capacity is the larger of `minimum` and one and a half times the
    /// current capacity, rounded up to a multiple of the element alignment.
    ///
    /// Fails with [`ErrorKind::LogicError`] if growth is needed but the
    /// array's policy cannot allocate memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::<u64>::with_capacity(8).unwrap();
    /// array.resize(9).unwrap();
    /// assert_eq!(array.capacity(), 16);
    ///
    /// array.resize(40).unwrap();
    /// assert_eq!(array.capacity(), 40);
    /// ```
    ///
    /// [`ErrorKind::LogicError`]: enum.ErrorKind.html#variant.LogicError
    pub fn resize(&mut self, minimum: usize) -> Result<(), Error<()>> {
        if minimum <= self.capacity {
            return Ok(());
        }

        let grown = self
            .capacity
            .checked_add(self.capacity / 2)
            .ok_or_else(|| Error::new(ErrorKind::Overflow, ()))?;
        let capacity = align_up(cmp::max(grown, minimum), align_of::<T>())?;

        self.reallocate(capacity)
    }

    /// Sets the capacity to exactly `capacity` elements.
    ///
    /// Elements at or beyond the new capacity are destroyed first. A capacity
    /// of zero releases the storage entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::dynamic_array;
    ///
    /// let mut array = dynamic_array![1, 2, 3, 4].unwrap();
    /// array.reserve(2).unwrap();
    /// assert_eq!(array, [1, 2]);
    /// assert_eq!(array.capacity(), 2);
    ///
    /// array.reserve(0).unwrap();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), Error<()>> {
        if capacity == self.capacity {
            return Ok(());
        }

        if capacity > self.capacity {
            return self.reallocate(capacity);
        }

        if capacity < self.count {
            let dropped = self.count - capacity;
            self.count = capacity;
            unsafe {
                memory::destruct_array(
                    self.data.as_ptr().add(capacity),
                    dropped,
                )?;
            }
        }

        self.reallocate(capacity)
    }

    /// Shrinks the capacity to the element count, rounded up to a multiple of
    /// the element alignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::<u32>::with_capacity(32).unwrap();
    /// array.push_back(1).unwrap();
    /// array.push_back(2).unwrap();
    /// array.compact().unwrap();
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn compact(&mut self) -> Result<(), Error<()>> {
        let capacity =
            cmp::min(align_up(self.count, align_of::<T>())?, self.capacity);
        if capacity == self.capacity {
            return Ok(());
        }

        self.reallocate(capacity)
    }

    /// Moves all elements and storage out of this array into a new array,
    /// leaving this array empty with a fresh block of the same capacity.
    ///
    /// The array left behind keeps using the same kind of allocation policy:
    /// a fresh policy instance if this array owned its policy, or the same
    /// shared policy otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the replacement storage cannot be allocated. Use
    /// [`try_take()`](#method.try_take) to handle allocation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::DynamicArray;
    ///
    /// let mut source = DynamicArray::with_capacity(10).unwrap();
    /// source.push_back(1).unwrap();
    /// let destination = source.take();
    ///
    /// assert_eq!(destination, [1]);
    /// assert!(source.is_empty());
    /// assert_eq!(source.capacity(), 10);
    /// ```
    pub fn take(&mut self) -> Self
    where
        P: Default,
    {
        match self.try_take() {
            Ok(taken) => taken,
            Err(e) => panic!("failed to take dynamic array: {}", e),
        }
    }

    /// Moves all elements and storage out of this array into a new array,
    /// leaving this array empty with a fresh block of the same capacity.
    ///
    /// Fails if the replacement storage cannot be allocated, in which case
    /// this array is left untouched.
    pub fn try_take(&mut self) -> Result<Self, Error<()>>
    where
        P: Default,
    {
        let mut replacement =
            Self::create(self.allocator.duplicate(), self.capacity);
        replacement.reallocate(self.capacity)?;

        Ok(mem::replace(self, replacement))
    }

    /// Creates a deep copy of the array with the same capacity.
    ///
    /// The copy owns a fresh policy instance if this array owns its policy,
    /// or shares the same policy otherwise.
    pub fn try_clone(&self) -> Result<Self, Error<()>>
    where
        T: Clone,
        P: Default,
    {
        let mut clone =
            Self::create(self.allocator.duplicate(), self.capacity);
        clone.reallocate(self.capacity)?;
        unsafe {
            memory::copy_construct_array(
                clone.data.as_ptr(),
                self.data.as_ptr(),
                self.count,
            )?;
        }
        clone.count = self.count;

        Ok(clone)
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

    /// Creates an empty array with no storage using the given policy.
    fn create(allocator: AllocatorHandle<'alloc, P>, capacity: usize) -> Self {
        if let AllocatorHandle::Internal(ref policy) = allocator {
            policy.initialize(capacity);
        }

        DynamicArray {
            data: NonNull::dangling(),
            count: 0,
            capacity: 0,
            allocator,
            _phantom: PhantomData,
        }
    }

    fn create_with_capacity(
        allocator: AllocatorHandle<'alloc, P>,
        capacity: usize,
    ) -> Result<Self, Error<()>> {
        if capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, ()));
        }

        let mut array = Self::create(allocator, capacity);
        array.reallocate(capacity)?;
        Ok(array)
    }

    fn create_with_fill(
        allocator: AllocatorHandle<'alloc, P>,
        value: T,
        count: usize,
    ) -> Result<Self, Error<(T,)>>
    where
        T: Clone,
    {
        let mut array = match Self::create_with_capacity(allocator, count) {
            Ok(array) => array,
            Err(e) => return Err(e.map(|()| (value,))),
        };

        unsafe {
            let data = array.data.as_ptr();
            while array.count + 1 < count {
                data.add(array.count).write(value.clone());
                array.count += 1;
            }
            memory::move_construct_object(data.add(array.count), value)
                .map_err(|e| e.map(|value| (value,)))?;
            array.count = count;
        }

        Ok(array)
    }

    fn create_from_slice(
        allocator: AllocatorHandle<'alloc, P>,
        values: &[T],
    ) -> Result<Self, Error<()>>
    where
        T: Clone,
    {
        let mut array = Self::create_with_capacity(allocator, values.len())?;
        unsafe {
            memory::copy_construct_array(
                array.data.as_ptr(),
                values.as_ptr(),
                values.len(),
            )?;
        }
        array.count = values.len();

        Ok(array)
    }

    fn create_from_values<I>(
        allocator: AllocatorHandle<'alloc, P>,
        values: I,
    ) -> Result<Self, Error<()>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let first = values
            .next()
            .ok_or_else(|| Error::new(ErrorKind::InvalidArgument, ()))?;

        let (remaining, _) = values.size_hint();
        let mut array = Self::create_with_capacity(
            allocator,
            remaining.saturating_add(1),
        )?;
        array.push_back(first).map_err(|e| e.map(|_| ()))?;
        for value in values {
            array.push_back(value).map_err(|e| e.map(|_| ()))?;
        }

        Ok(array)
    }

    /// Moves the storage to a new block holding exactly `capacity` elements.
    ///
    /// Live elements must already fit in the new capacity.
    fn reallocate(&mut self, capacity: usize) -> Result<(), Error<()>> {
        debug_assert!(self.count <= capacity);

        let element_size = size_of::<T>();
        if element_size == 0 {
            self.capacity = capacity;
            return Ok(());
        }

        let alignment = align_of::<T>();
        let old_size = self.capacity * element_size;
        let policy = self.allocator.get();

        if capacity == 0 {
            if self.capacity > 0 {
                unsafe {
                    policy.deallocate(
                        self.data.as_ptr() as *mut u8,
                        old_size,
                        alignment,
                    );
                }
                log::trace!("released {} byte array storage", old_size);
            }

            self.data = NonNull::dangling();
            self.capacity = 0;
            return Ok(());
        }

        if !P::ALLOCATES {
            return Err(Error::new(ErrorKind::LogicError, ()));
        }

        let new_size = capacity
            .checked_mul(element_size)
            .filter(|&size| size <= isize::MAX as usize)
            .ok_or_else(|| Error::new(ErrorKind::Overflow, ()))?;

        let result = if self.capacity == 0 {
            policy.allocate(new_size, alignment)
        } else {
            unsafe {
                policy.reallocate(
                    self.data.as_ptr() as *mut u8,
                    old_size,
                    new_size,
                    alignment,
                )
            }
        };

        let address = match result {
            Ok(address) => address,
            Err(e) => {
                log::debug!(
                    "failed to grow array storage from {} to {} bytes: {}",
                    old_size,
                    new_size,
                    e
                );
                return Err(e);
            }
        };

        self.data = NonNull::new(address as *mut T)
            .ok_or_else(|| Error::new(ErrorKind::OutOfMemory, ()))?;
        log::trace!(
            "moved array storage from {} to {} elements",
            self.capacity,
            capacity
        );
        self.capacity = capacity;

        Ok(())
    }
}

impl<'alloc, T, P> Collection for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    type Element = T;
    type Policy = P;

    #[inline(always)]
    fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        let count = self.count;
        self.count = 0;
        unsafe {
            memory::destruct_range(self.data.as_ptr(), count);
        }
    }
}

unsafe impl<'alloc, T, P> SequencedCollection for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    unsafe fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    fn check_vacancy(&self, additional: usize) -> Result<(), Error<()>> {
        let required = self
            .count
            .checked_add(additional)
            .ok_or_else(|| Error::new(ErrorKind::Overflow, ()))?;
        if required > self.capacity && !P::ALLOCATES {
            return Err(Error::new(ErrorKind::LogicError, ()));
        }

        Ok(())
    }

    fn reserve_additional(
        &mut self,
        additional: usize,
    ) -> Result<(), Error<()>> {
        let required = self
            .count
            .checked_add(additional)
            .ok_or_else(|| Error::new(ErrorKind::Overflow, ()))?;

        self.resize(required)
    }
}

impl<'alloc, T, P> Drop for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    fn drop(&mut self) {
        Collection::clear(self);

        // Releasing storage never fails.
        let _ = self.reallocate(0);

        if let AllocatorHandle::Internal(ref policy) = self.allocator {
            policy.deinitialize();
        }
    }
}

impl<'alloc, T, P> Default for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy + Default,
{
    #[inline]
    fn default() -> Self {
        Self::create(AllocatorHandle::Internal(P::default()), 0)
    }
}

impl<'alloc, T, P> Clone for DynamicArray<'alloc, T, P>
where
    T: Clone,
    P: AllocationPolicy + Default,
{
    /// Creates a deep copy of the array.
    ///
    /// # Panics
    ///
    /// Panics if storage for the copy cannot be allocated. Use
    /// [`try_clone()`](#method.try_clone) to handle allocation failure.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(clone) => clone,
            Err(e) => panic!("failed to clone dynamic array: {}", e),
        }
    }
}

impl<'alloc, T, P> Deref for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'alloc, T, P> DerefMut for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

unsafe impl<'alloc, T, P> StableDeref for DynamicArray<'alloc, T, P> where
    P: AllocationPolicy
{
}

// Elements are owned exclusively; the policy is owned or shared by reference.
unsafe impl<'alloc, T, P> Send for DynamicArray<'alloc, T, P>
where
    T: Send,
    P: AllocationPolicy + Send + Sync,
{
}

unsafe impl<'alloc, T, P> Sync for DynamicArray<'alloc, T, P>
where
    T: Sync,
    P: AllocationPolicy + Sync,
{
}

impl<'alloc, T, P> fmt::Debug for DynamicArray<'alloc, T, P>
where
    T: fmt::Debug,
    P: AllocationPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, 'b, T, U, P, Q> PartialEq<DynamicArray<'b, U, Q>>
    for DynamicArray<'a, T, P>
where
    T: PartialEq<U>,
    P: AllocationPolicy,
    Q: AllocationPolicy,
{
    #[inline]
    fn eq(&self, other: &DynamicArray<'b, U, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'alloc, T, P> Eq for DynamicArray<'alloc, T, P>
where
    T: Eq,
    P: AllocationPolicy,
{
}

impl<'alloc, T, U, P> PartialEq<[U]> for DynamicArray<'alloc, T, P>
where
    T: PartialEq<U>,
    P: AllocationPolicy,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<'alloc, T, U, P, const N: usize> PartialEq<[U; N]>
    for DynamicArray<'alloc, T, P>
where
    T: PartialEq<U>,
    P: AllocationPolicy,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<'alloc, T, P> IntoIterator for DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    type Item = T;
    type IntoIter = IntoIter<Self>;

    #[inline]
    fn into_iter(self) -> IntoIter<Self> {
        IntoIter::new(self)
    }
}

impl<'a, 'alloc, T, P> IntoIterator for &'a DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, 'alloc, T, P> IntoIterator for &'a mut DynamicArray<'alloc, T, P>
where
    P: AllocationPolicy,
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
