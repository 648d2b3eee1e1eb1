// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Collection traits.

use core::mem::{self, size_of};
use core::slice;

use super::cursor::element_stride;
use super::memory;
use super::{AllocationPolicy, Cursor, Error, ErrorKind};

/// Common interface for all collections.
pub trait Collection {
    /// Element type.
    type Element;
    /// Policy used to obtain element storage.
    type Policy: AllocationPolicy;

    /// Returns the number of live elements.
    fn count(&self) -> usize;

    /// Returns the number of elements the collection can hold without
    /// acquiring more storage.
    fn capacity(&self) -> usize;

    /// Returns whether the live element count has reached the capacity.
    #[inline]
    fn is_full(&self) -> bool {
        self.count() == self.capacity()
    }

    /// Returns whether the collection holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the size of the collection's element storage, in bytes.
    ///
    /// Collections whose storage is allocated on demand report the size of
    /// their live elements only, while collections with inline storage report
    /// the size of their entire capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::{dynamic_array, static_array, Collection};
    ///
    /// let dynamic = dynamic_array![1u32, 2, 3].unwrap();
    /// assert_eq!(Collection::size(&dynamic), 12);
    ///
    /// let fixed = static_array![8; 1u32, 2, 3].unwrap();
    /// assert_eq!(Collection::size(&fixed), 32);
    /// ```
    #[inline]
    fn size(&self) -> usize {
        let slots = if <Self::Policy as AllocationPolicy>::ALLOCATES {
            self.count()
        } else {
            self.capacity()
        };

        slots * size_of::<Self::Element>()
    }

    /// Destroys all elements, leaving the capacity untouched.
    fn clear(&mut self);
}

/// Collections storing their elements contiguously in insertion order.
///
/// Most operations are provided as default methods built on top of a small
/// set of required methods exposing the collection's storage. Implementors
/// only need to describe their storage and how (or whether) it can grow.
///
/// # Safety
///
/// Implementations must guarantee that:
///
/// - [`as_ptr()`] and [`as_mut_ptr()`] return a non-null address that is
///   properly aligned and valid for `capacity()` elements, with the first
///   `count()` slots holding initialized values.
/// - `set_count()` only changes the live element count, without touching
///   any elements.
/// - After `reserve_additional(n)` succeeds, `capacity()` is at least
///   `count() + n`.
///
/// [`as_mut_ptr()`]: #tymethod.as_mut_ptr
/// [`as_ptr()`]: #tymethod.as_ptr
pub unsafe trait SequencedCollection: Collection {
    /// Returns the address of the first element slot.
    fn as_ptr(&self) -> *const Self::Element;

    /// Returns the mutable address of the first element slot.
    fn as_mut_ptr(&mut self) -> *mut Self::Element;

    /// Sets the live element count without constructing or destroying any
    /// elements.
    #[doc(hidden)]
    unsafe fn set_count(&mut self, count: usize);

    /// Checks whether `additional` more elements could be stored, either in
    /// the current storage or by growing it.
    #[doc(hidden)]
    fn check_vacancy(&self, additional: usize) -> Result<(), Error<()>>;

    /// Ensures storage for `additional` more elements is available.
    #[doc(hidden)]
    fn reserve_additional(&mut self, additional: usize)
        -> Result<(), Error<()>>;

    /// Returns the address of the first element slot.
    #[inline]
    fn raw_data(&self) -> *const Self::Element {
        self.as_ptr()
    }

    /// Returns a slice of all live elements.
    #[inline]
    fn as_slice(&self) -> &[Self::Element] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.count()) }
    }

    /// Returns a mutable slice of all live elements.
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Self::Element] {
        let count = self.count();
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), count) }
    }

    /// Returns a cursor at the first element.
    #[inline]
    fn begin_cursor(&self) -> Cursor<Self::Element> {
        Cursor::new(self.as_ptr() as *mut Self::Element)
    }

    /// Returns a cursor just past the last element.
    #[inline]
    fn final_cursor(&self) -> Cursor<Self::Element> {
        self.begin_cursor() + self.count()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Fails with [`ErrorKind::OutOfRange`] if `index` is not less than the
    /// element count.
    ///
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    #[inline]
    fn at(&self, index: usize) -> Result<&Self::Element, Error<()>> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange, ()))
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// Fails with [`ErrorKind::OutOfRange`] if `index` is not less than the
    /// element count.
    ///
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    #[inline]
    fn at_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Self::Element, Error<()>> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange, ()))
    }

    /// Returns a reference to the first element.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    fn front(&self) -> Result<&Self::Element, Error<()>> {
        self.as_slice()
            .first()
            .ok_or_else(|| Error::new(ErrorKind::LengthError, ()))
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    fn front_mut(&mut self) -> Result<&mut Self::Element, Error<()>> {
        self.as_mut_slice()
            .first_mut()
            .ok_or_else(|| Error::new(ErrorKind::LengthError, ()))
    }

    /// Returns a reference to the last element.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    #[inline]
    fn back(&self) -> Result<&Self::Element, Error<()>> {
        self.as_slice()
            .last()
            .ok_or_else(|| Error::new(ErrorKind::LengthError, ()))
    }

    /// Returns a mutable reference to the last element.
    #[inline]
    fn back_mut(&mut self) -> Result<&mut Self::Element, Error<()>> {
        self.as_mut_slice()
            .last_mut()
            .ok_or_else(|| Error::new(ErrorKind::LengthError, ()))
    }

    /// Appends an element to the end of the collection.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is full and
    /// cannot grow, in which case the element is returned in the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::{ErrorKind, StaticArray};
    ///
    /// let mut array = StaticArray::<i32, 2>::new();
    /// array.push_back(1).unwrap();
    /// array.push_back(2).unwrap();
    ///
    /// let error = array.push_back(3).unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::LengthError);
    /// assert_eq!(error.unwrap_args(), (3,));
    /// assert_eq!(array, [1, 2]);
    /// ```
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    fn push_back(
        &mut self,
        element: Self::Element,
    ) -> Result<(), Error<(Self::Element,)>> {
        if let Err(e) = self
            .check_vacancy(1)
            .and_then(|()| self.reserve_additional(1))
        {
            return Err(e.map(|()| (element,)));
        }

        let count = self.count();
        unsafe {
            memory::move_construct_object(
                self.as_mut_ptr().add(count),
                element,
            )
            .map_err(|e| e.map(|element| (element,)))?;
            self.set_count(count + 1);
        }

        Ok(())
    }

    /// Inserts an element at the start of the collection, shifting all other
    /// elements back by one position.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is full and
    /// cannot grow, in which case the element is returned in the error.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    fn push_front(
        &mut self,
        element: Self::Element,
    ) -> Result<(), Error<(Self::Element,)>> {
        if let Err(e) = self
            .check_vacancy(1)
            .and_then(|()| self.reserve_additional(1))
        {
            return Err(e.map(|()| (element,)));
        }

        let count = self.count();
        unsafe {
            let data = self.as_mut_ptr();
            if let Err(e) = shift_toward_back(data, 0, count, 1) {
                return Err(e.map(|()| (element,)));
            }
            memory::move_construct_object(data, element)
                .map_err(|e| e.map(|element| (element,)))?;
            self.set_count(count + 1);
        }

        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    fn pop_back(&mut self) -> Result<Self::Element, Error<()>> {
        let count = self.count();
        if count == 0 {
            return Err(Error::new(ErrorKind::LengthError, ()));
        }

        unsafe {
            self.set_count(count - 1);
            Ok(self.as_mut_ptr().add(count - 1).read())
        }
    }

    /// Removes and returns the first element, shifting all other elements
    /// forward by one position.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    fn pop_front(&mut self) -> Result<Self::Element, Error<()>> {
        if self.is_empty() {
            return Err(Error::new(ErrorKind::LengthError, ()));
        }

        self.remove(0)
    }

    /// Removes and returns the element at the given index, shifting all
    /// subsequent elements forward by one position.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty, or
    /// with [`ErrorKind::OutOfRange`] if `index` is not less than the element
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::dynamic_array;
    ///
    /// let mut array = dynamic_array![1, 2, 3, 4, 5].unwrap();
    /// assert_eq!(array.remove(2).unwrap(), 3);
    /// assert_eq!(array, [1, 2, 4, 5]);
    /// ```
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    fn remove(&mut self, index: usize) -> Result<Self::Element, Error<()>> {
        let count = self.count();
        if count == 0 {
            return Err(Error::new(ErrorKind::LengthError, ()));
        }
        if index >= count {
            return Err(Error::new(ErrorKind::OutOfRange, ()));
        }

        unsafe {
            let data = self.as_mut_ptr();
            let element = data.add(index).read();
            shift_toward_front(data, index, count, 1)?;
            self.set_count(count - 1);
            Ok(element)
        }
    }

    /// Removes all elements in the half-open range `[first, last)`, shifting
    /// all subsequent elements forward to fill the gap.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty. Fails
    /// with [`ErrorKind::OutOfRange`] unless `first` refers to a live element,
    /// `last` refers to a live element or the end of the collection, and
    /// `first` does not come after `last`. Cursors are validated by address,
    /// so they must come from this collection's [`begin_cursor()`] or
    /// [`final_cursor()`]; this also holds for zero-sized elements, whose
    /// cursors still advance one position at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::static_array;
    ///
    /// let mut array = static_array![8; 1, 2, 3, 4, 5].unwrap();
    /// let first = array.begin_cursor();
    /// array.remove_range(first, first + 2).unwrap();
    /// assert_eq!(array, [3, 4, 5]);
    /// ```
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    /// [`begin_cursor()`]: #method.begin_cursor
    /// [`final_cursor()`]: #method.final_cursor
    fn remove_range(
        &mut self,
        first: Cursor<Self::Element>,
        last: Cursor<Self::Element>,
    ) -> Result<(), Error<()>> {
        let count = self.count();
        if count == 0 {
            return Err(Error::new(ErrorKind::LengthError, ()));
        }

        let begin = self.begin_cursor();
        let end = self.final_cursor();
        if first < begin || first >= end || last < first || last > end {
            return Err(Error::new(ErrorKind::OutOfRange, ()));
        }

        let stride = element_stride::<Self::Element>();
        let first_offset = first.as_ptr() as usize - begin.as_ptr() as usize;
        let last_offset = last.as_ptr() as usize - begin.as_ptr() as usize;
        if first_offset % stride != 0 || last_offset % stride != 0 {
            return Err(Error::new(ErrorKind::OutOfRange, ()));
        }

        let first_index = first_offset / stride;
        let removed = (last_offset - first_offset) / stride;

        unsafe {
            let data = self.as_mut_ptr();

            // Elements past the range are leaked rather than double-dropped
            // if a destructor panics.
            self.set_count(first_index);
            memory::destruct_array(data.add(first_index), removed)?;
            shift_toward_front(data, first_index, count, removed)?;
            self.set_count(count - removed);
        }

        Ok(())
    }

    /// Replaces the element at the given index, returning the previous
    /// element.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty, or
    /// with [`ErrorKind::OutOfRange`] if `index` is not less than the element
    /// count. The new element is returned in the error on failure.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    fn assign(
        &mut self,
        index: usize,
        element: Self::Element,
    ) -> Result<Self::Element, Error<(Self::Element,)>> {
        let count = self.count();
        if count == 0 {
            return Err(Error::new(ErrorKind::LengthError, (element,)));
        }
        if index >= count {
            return Err(Error::new(ErrorKind::OutOfRange, (element,)));
        }

        Ok(mem::replace(&mut self.as_mut_slice()[index], element))
    }

    /// Replaces the elements starting at the given index with clones of the
    /// given values.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is empty, or
    /// with [`ErrorKind::OutOfRange`] if any replaced position lies outside
    /// the live elements.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    fn assign_range(
        &mut self,
        index: usize,
        values: &[Self::Element],
    ) -> Result<(), Error<()>>
    where
        Self::Element: Clone,
    {
        let count = self.count();
        if count == 0 {
            return Err(Error::new(ErrorKind::LengthError, ()));
        }

        let end = index
            .checked_add(values.len())
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange, ()))?;
        if index >= count || end > count {
            return Err(Error::new(ErrorKind::OutOfRange, ()));
        }

        self.as_mut_slice()[index..end].clone_from_slice(values);
        Ok(())
    }

    /// Inserts an element at the given index, shifting the element at that
    /// index and all subsequent elements back by one position.
    ///
    /// The index must refer to a live element; use [`push_back()`] to append
    /// elements. Fails with [`ErrorKind::LengthError`] if the collection is
    /// full and cannot grow, or with [`ErrorKind::OutOfRange`] if `index` is
    /// not less than the element count. The element is returned in the error
    /// on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::{dynamic_array, ErrorKind};
    ///
    /// let mut array = dynamic_array!['a', 'c'].unwrap();
    /// array.insert(1, 'b').unwrap();
    /// assert_eq!(array, ['a', 'b', 'c']);
    ///
    /// let error = array.insert(3, 'd').unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::OutOfRange);
    /// ```
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    /// [`push_back()`]: #method.push_back
    fn insert(
        &mut self,
        index: usize,
        element: Self::Element,
    ) -> Result<(), Error<(Self::Element,)>> {
        if let Err(e) = self.check_vacancy(1) {
            return Err(e.map(|()| (element,)));
        }

        let count = self.count();
        if index >= count {
            return Err(Error::new(ErrorKind::OutOfRange, (element,)));
        }

        if let Err(e) = self.reserve_additional(1) {
            return Err(e.map(|()| (element,)));
        }

        unsafe {
            let data = self.as_mut_ptr();
            if let Err(e) = shift_toward_back(data, index, count, 1) {
                return Err(e.map(|()| (element,)));
            }
            memory::move_construct_object(data.add(index), element)
                .map_err(|e| e.map(|element| (element,)))?;
            self.set_count(count + 1);
        }

        Ok(())
    }

    /// Inserts clones of the given values at the given index, shifting the
    /// element at that index and all subsequent elements back to make room.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is full, or if
    /// it cannot grow and lacks room for every value. Fails with
    /// [`ErrorKind::OutOfRange`] if `index` is not less than the element
    /// count. No values are inserted on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::static_array;
    ///
    /// let mut array = static_array![10; 1, 2, 3, 4, 5].unwrap();
    /// array.insert_range(0, &[6, 7, 8, 9, 10]).unwrap();
    /// assert_eq!(array, [6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
    /// ```
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    /// [`ErrorKind::OutOfRange`]: enum.ErrorKind.html#variant.OutOfRange
    fn insert_range(
        &mut self,
        index: usize,
        values: &[Self::Element],
    ) -> Result<(), Error<()>>
    where
        Self::Element: Clone,
    {
        self.check_vacancy(1)?;

        let count = self.count();
        if index >= count {
            return Err(Error::new(ErrorKind::OutOfRange, ()));
        }

        let inserted = values.len();
        self.check_vacancy(inserted)?;
        self.reserve_additional(inserted)?;

        unsafe {
            let data = self.as_mut_ptr();
            shift_toward_back(data, index, count, inserted)?;

            // Shifted elements are leaked rather than double-dropped if a
            // clone panics.
            self.set_count(index);
            memory::copy_construct_array(
                data.add(index),
                values.as_ptr(),
                inserted,
            )?;
            self.set_count(count + inserted);
        }

        Ok(())
    }

    /// Appends clones of every element of another collection.
    ///
    /// Fails with [`ErrorKind::LengthError`] if the collection is full, or
    /// if it cannot grow and lacks room for every element, in which case
    /// nothing is appended. A full collection fails even if `other` is
    /// empty.
    ///
    /// [`ErrorKind::LengthError`]: enum.ErrorKind.html#variant.LengthError
    fn insert_all<C>(&mut self, other: &C) -> Result<(), Error<()>>
    where
        C: SequencedCollection<Element = Self::Element> + ?Sized,
        Self::Element: Clone,
    {
        self.check_vacancy(1)?;

        let values = other.as_slice();
        let inserted = values.len();
        self.check_vacancy(inserted)?;
        self.reserve_additional(inserted)?;

        let count = self.count();
        unsafe {
            memory::copy_construct_array(
                self.as_mut_ptr().add(count),
                values.as_ptr(),
                inserted,
            )?;
            self.set_count(count + inserted);
        }

        Ok(())
    }

    /// Removes the first occurrence of each element of another collection,
    /// returning the number of elements removed.
    ///
    /// Elements that cannot be found are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::dynamic_array;
    ///
    /// let mut array = dynamic_array![1, 2, 3, 2, 1].unwrap();
    /// let unwanted = dynamic_array![2, 1, 9].unwrap();
    /// assert_eq!(array.remove_all(&unwanted), 2);
    /// assert_eq!(array, [3, 2, 1]);
    /// ```
    fn remove_all<C>(&mut self, other: &C) -> usize
    where
        C: SequencedCollection<Element = Self::Element> + ?Sized,
        Self::Element: PartialEq,
    {
        let mut removed = 0;
        for value in other.as_slice() {
            let position =
                self.as_slice().iter().position(|element| element == value);
            if let Some(index) = position {
                if self.remove(index).is_ok() {
                    removed += 1;
                }
            }
        }

        removed
    }

    /// Returns whether every element of another collection is present in
    /// this collection.
    fn contains_all<C>(&self, other: &C) -> bool
    where
        C: SequencedCollection<Element = Self::Element> + ?Sized,
        Self::Element: PartialEq,
    {
        let elements = self.as_slice();
        other.as_slice().iter().all(|value| elements.contains(value))
    }
}

/// Moves the elements in `[index, count)` back by `gap` slots.
#[inline]
unsafe fn shift_toward_back<T>(
    data: *mut T,
    index: usize,
    count: usize,
    gap: usize,
) -> Result<(), Error<()>> {
    memory::memory_move(
        data.add(index + gap) as *mut u8,
        data.add(index) as *const u8,
        (count - index) * size_of::<T>(),
    )
}

/// Moves the elements in `[index + gap, count)` forward by `gap` slots.
#[inline]
unsafe fn shift_toward_front<T>(
    data: *mut T,
    index: usize,
    count: usize,
    gap: usize,
) -> Result<(), Error<()>> {
    memory::memory_move(
        data.add(index) as *mut u8,
        data.add(index + gap) as *const u8,
        (count - index - gap) * size_of::<T>(),
    )
}

/// Generates inherent wrappers for the [`Collection`] and
/// [`SequencedCollection`] trait methods so that callers don't need to import
/// the traits.
macro_rules! sequenced_collection_methods {
    ($element:ident) => {
        /// Returns the number of live elements.
        #[inline(always)]
        pub fn count(&self) -> usize {
            $crate::Collection::count(self)
        }

        /// Returns the number of elements the collection can hold without
        /// acquiring more storage.
        #[inline(always)]
        pub fn capacity(&self) -> usize {
            $crate::Collection::capacity(self)
        }

        /// See [`Collection::is_full()`](trait.Collection.html#method.is_full).
        #[inline(always)]
        pub fn is_full(&self) -> bool {
            $crate::Collection::is_full(self)
        }

        /// See [`Collection::is_empty()`](trait.Collection.html#method.is_empty).
        #[inline(always)]
        pub fn is_empty(&self) -> bool {
            $crate::Collection::is_empty(self)
        }

        /// See [`Collection::size()`](trait.Collection.html#method.size).
        #[inline(always)]
        pub fn size(&self) -> usize {
            $crate::Collection::size(self)
        }

        /// See [`Collection::clear()`](trait.Collection.html#method.clear).
        #[inline(always)]
        pub fn clear(&mut self) {
            $crate::Collection::clear(self)
        }

        /// Returns the address of the first element slot.
        #[inline(always)]
        pub fn as_ptr(&self) -> *const $element {
            $crate::SequencedCollection::as_ptr(self)
        }

        /// Returns the mutable address of the first element slot.
        #[inline(always)]
        pub fn as_mut_ptr(&mut self) -> *mut $element {
            $crate::SequencedCollection::as_mut_ptr(self)
        }

        /// See [`SequencedCollection::raw_data()`](trait.SequencedCollection.html#method.raw_data).
        #[inline(always)]
        pub fn raw_data(&self) -> *const $element {
            $crate::SequencedCollection::raw_data(self)
        }

        /// Returns a slice of all live elements.
        #[inline(always)]
        pub fn as_slice(&self) -> &[$element] {
            $crate::SequencedCollection::as_slice(self)
        }

        /// Returns a mutable slice of all live elements.
        #[inline(always)]
        pub fn as_mut_slice(&mut self) -> &mut [$element] {
            $crate::SequencedCollection::as_mut_slice(self)
        }

        /// See [`SequencedCollection::begin_cursor()`](trait.SequencedCollection.html#method.begin_cursor).
        #[inline(always)]
        pub fn begin_cursor(&self) -> $crate::Cursor<$element> {
            $crate::SequencedCollection::begin_cursor(self)
        }

        /// See [`SequencedCollection::final_cursor()`](trait.SequencedCollection.html#method.final_cursor).
        #[inline(always)]
        pub fn final_cursor(&self) -> $crate::Cursor<$element> {
            $crate::SequencedCollection::final_cursor(self)
        }

        /// See [`SequencedCollection::at()`](trait.SequencedCollection.html#method.at).
        #[inline(always)]
        pub fn at(
            &self,
            index: usize,
        ) -> Result<&$element, $crate::Error<()>> {
            $crate::SequencedCollection::at(self, index)
        }

        /// See [`SequencedCollection::at_mut()`](trait.SequencedCollection.html#method.at_mut).
        #[inline(always)]
        pub fn at_mut(
            &mut self,
            index: usize,
        ) -> Result<&mut $element, $crate::Error<()>> {
            $crate::SequencedCollection::at_mut(self, index)
        }

        /// See [`SequencedCollection::front()`](trait.SequencedCollection.html#method.front).
        #[inline(always)]
        pub fn front(&self) -> Result<&$element, $crate::Error<()>> {
            $crate::SequencedCollection::front(self)
        }

        /// See [`SequencedCollection::front_mut()`](trait.SequencedCollection.html#method.front_mut).
        #[inline(always)]
        pub fn front_mut(
            &mut self,
        ) -> Result<&mut $element, $crate::Error<()>> {
            $crate::SequencedCollection::front_mut(self)
        }

        /// See [`SequencedCollection::back()`](trait.SequencedCollection.html#method.back).
        #[inline(always)]
        pub fn back(&self) -> Result<&$element, $crate::Error<()>> {
            $crate::SequencedCollection::back(self)
        }

        /// See [`SequencedCollection::back_mut()`](trait.SequencedCollection.html#method.back_mut).
        #[inline(always)]
        pub fn back_mut(
            &mut self,
        ) -> Result<&mut $element, $crate::Error<()>> {
            $crate::SequencedCollection::back_mut(self)
        }

        /// See [`SequencedCollection::push_back()`](trait.SequencedCollection.html#method.push_back).
        #[inline(always)]
        pub fn push_back(
            &mut self,
            element: $element,
        ) -> Result<(), $crate::Error<($element,)>> {
            $crate::SequencedCollection::push_back(self, element)
        }

        /// See [`SequencedCollection::push_front()`](trait.SequencedCollection.html#method.push_front).
        #[inline(always)]
        pub fn push_front(
            &mut self,
            element: $element,
        ) -> Result<(), $crate::Error<($element,)>> {
            $crate::SequencedCollection::push_front(self, element)
        }

        /// See [`SequencedCollection::pop_back()`](trait.SequencedCollection.html#method.pop_back).
        #[inline(always)]
        pub fn pop_back(&mut self) -> Result<$element, $crate::Error<()>> {
            $crate::SequencedCollection::pop_back(self)
        }

        /// See [`SequencedCollection::pop_front()`](trait.SequencedCollection.html#method.pop_front).
        #[inline(always)]
        pub fn pop_front(&mut self) -> Result<$element, $crate::Error<()>> {
            $crate::SequencedCollection::pop_front(self)
        }

        /// See [`SequencedCollection::remove()`](trait.SequencedCollection.html#method.remove).
        #[inline(always)]
        pub fn remove(
            &mut self,
            index: usize,
        ) -> Result<$element, $crate::Error<()>> {
            $crate::SequencedCollection::remove(self, index)
        }

        /// See [`SequencedCollection::remove_range()`](trait.SequencedCollection.html#method.remove_range).
        #[inline(always)]
        pub fn remove_range(
            &mut self,
            first: $crate::Cursor<$element>,
            last: $crate::Cursor<$element>,
        ) -> Result<(), $crate::Error<()>> {
            $crate::SequencedCollection::remove_range(self, first, last)
        }

        /// See [`SequencedCollection::assign()`](trait.SequencedCollection.html#method.assign).
        #[inline(always)]
        pub fn assign(
            &mut self,
            index: usize,
            element: $element,
        ) -> Result<$element, $crate::Error<($element,)>> {
            $crate::SequencedCollection::assign(self, index, element)
        }

        /// See [`SequencedCollection::assign_range()`](trait.SequencedCollection.html#method.assign_range).
        #[inline(always)]
        pub fn assign_range(
            &mut self,
            index: usize,
            values: &[$element],
        ) -> Result<(), $crate::Error<()>>
        where
            $element: Clone,
        {
            $crate::SequencedCollection::assign_range(self, index, values)
        }

        /// See [`SequencedCollection::insert()`](trait.SequencedCollection.html#method.insert).
        #[inline(always)]
        pub fn insert(
            &mut self,
            index: usize,
            element: $element,
        ) -> Result<(), $crate::Error<($element,)>> {
            $crate::SequencedCollection::insert(self, index, element)
        }

        /// See [`SequencedCollection::insert_range()`](trait.SequencedCollection.html#method.insert_range).
        #[inline(always)]
        pub fn insert_range(
            &mut self,
            index: usize,
            values: &[$element],
        ) -> Result<(), $crate::Error<()>>
        where
            $element: Clone,
        {
            $crate::SequencedCollection::insert_range(self, index, values)
        }

        /// See [`SequencedCollection::insert_all()`](trait.SequencedCollection.html#method.insert_all).
        #[inline(always)]
        pub fn insert_all<C>(
            &mut self,
            other: &C,
        ) -> Result<(), $crate::Error<()>>
        where
            C: $crate::SequencedCollection<Element = $element> + ?Sized,
            $element: Clone,
        {
            $crate::SequencedCollection::insert_all(self, other)
        }

        /// See [`SequencedCollection::remove_all()`](trait.SequencedCollection.html#method.remove_all).
        #[inline(always)]
        pub fn remove_all<C>(&mut self, other: &C) -> usize
        where
            C: $crate::SequencedCollection<Element = $element> + ?Sized,
            $element: PartialEq,
        {
            $crate::SequencedCollection::remove_all(self, other)
        }

        /// See [`SequencedCollection::contains_all()`](trait.SequencedCollection.html#method.contains_all).
        #[inline(always)]
        pub fn contains_all<C>(&self, other: &C) -> bool
        where
            C: $crate::SequencedCollection<Element = $element> + ?Sized,
            $element: PartialEq,
        {
            $crate::SequencedCollection::contains_all(self, other)
        }
    };
}
