// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw memory routines.
//!
//! The functions in this module operate directly on raw addresses and form
//! the basis for all element management performed by the collections in this
//! crate. Byte-level routines work on untyped memory, while the
//! `construct_*()`, `destruct_*()`, `move_construct_*()`, and
//! `copy_construct_*()` routines manage the lifetimes of typed elements
//! stored at a given address.
//!
//! All routines return an [`ErrorKind::InvalidArgument`] error if given a
//! null address. Operations on zero bytes or zero elements are no-ops.
//!
//! [`ErrorKind::InvalidArgument`]: ../enum.ErrorKind.html#variant.InvalidArgument

use core::mem::{needs_drop, size_of};
use core::ptr;
use core::slice;

use super::{Error, ErrorKind};

/// Returns an `InvalidArgument` error if the given address is null.
#[inline(always)]
fn check_address<T>(address: *const T) -> Result<(), Error<()>> {
    if address.is_null() {
        Err(Error::new(ErrorKind::InvalidArgument, ()))
    } else {
        Ok(())
    }
}

/// Returns whether values of the given type can be created and discarded
/// using plain byte operations.
///
/// A type is considered trivial if dropping it has no side effects. Values
/// of trivial types are destroyed by zeroing their memory instead of running
/// their destructors.
///
/// # Examples
///
/// ```
/// use seqarray::memory::is_trivial;
///
/// assert!(is_trivial::<u32>());
/// assert!(is_trivial::<(u8, f64)>());
/// assert!(!is_trivial::<String>());
/// ```
#[inline(always)]
pub const fn is_trivial<T>() -> bool {
    !needs_drop::<T>()
}

/// Sets `size` bytes starting at `destination` to zero.
///
/// # Safety
///
/// `destination` must be valid for writes of `size` bytes.
#[inline]
pub unsafe fn memory_zero(
    destination: *mut u8,
    size: usize,
) -> Result<(), Error<()>> {
    memory_set(destination, 0, size)
}

/// Sets `size` bytes starting at `destination` to `value`.
///
/// # Safety
///
/// `destination` must be valid for writes of `size` bytes.
///
/// # Examples
///
/// ```
/// use seqarray::memory::memory_set;
///
/// let mut bytes = [0u8; 4];
/// unsafe { memory_set(bytes.as_mut_ptr(), 0xA5, 3).unwrap() };
/// assert_eq!(bytes, [0xA5, 0xA5, 0xA5, 0]);
/// ```
#[inline]
pub unsafe fn memory_set(
    destination: *mut u8,
    value: u8,
    size: usize,
) -> Result<(), Error<()>> {
    check_address(destination)?;
    ptr::write_bytes(destination, value, size);
    Ok(())
}

/// Copies `size` bytes from `source` to `destination`.
///
/// # Safety
///
/// Both ranges must be valid for `size` bytes and must not overlap. Use
/// [`memory_move()`] for overlapping ranges.
///
/// [`memory_move()`]: fn.memory_move.html
#[inline]
pub unsafe fn memory_copy(
    destination: *mut u8,
    source: *const u8,
    size: usize,
) -> Result<(), Error<()>> {
    check_address(destination)?;
    check_address(source)?;
    ptr::copy_nonoverlapping(source, destination, size);
    Ok(())
}

/// Copies `size` bytes from `source` to `destination`, allowing the two
/// ranges to overlap.
///
/// # Safety
///
/// Both ranges must be valid for `size` bytes.
///
/// # Examples
///
/// ```
/// use seqarray::memory::memory_move;
///
/// let mut bytes = [1u8, 2, 3, 4, 5];
/// let base = bytes.as_mut_ptr();
/// unsafe { memory_move(base.add(1), base, 4).unwrap() };
/// assert_eq!(bytes, [1, 1, 2, 3, 4]);
/// ```
#[inline]
pub unsafe fn memory_move(
    destination: *mut u8,
    source: *const u8,
    size: usize,
) -> Result<(), Error<()>> {
    check_address(destination)?;
    check_address(source)?;
    ptr::copy(source, destination, size);
    Ok(())
}

/// Returns whether the `size` bytes at `first` and `second` are equal.
///
/// # Safety
///
/// Both ranges must be valid for reads of `size` bytes.
#[inline]
pub unsafe fn memory_compare(
    first: *const u8,
    second: *const u8,
    size: usize,
) -> Result<bool, Error<()>> {
    check_address(first)?;
    check_address(second)?;
    Ok(slice::from_raw_parts(first, size)
        == slice::from_raw_parts(second, size))
}

/// Constructs a default value at the given address.
///
/// # Safety
///
/// `destination` must be valid for writes and properly aligned for `T`. Any
/// value previously stored at the address is overwritten without being
/// dropped.
#[inline]
pub unsafe fn construct_object<T>(destination: *mut T) -> Result<(), Error<()>>
where
    T: Default,
{
    check_address(destination)?;
    ptr::write(destination, T::default());
    Ok(())
}

/// Constructs `count` default values in consecutive slots starting at the
/// given address.
///
/// # Safety
///
/// Same as [`construct_object()`], for every slot in the range.
///
/// [`construct_object()`]: fn.construct_object.html
pub unsafe fn construct_array<T>(
    destination: *mut T,
    count: usize,
) -> Result<(), Error<()>>
where
    T: Default,
{
    check_address(destination)?;

    let mut guard = ConstructGuard {
        start: destination,
        constructed: 0,
    };
    while guard.constructed < count {
        ptr::write(destination.add(guard.constructed), T::default());
        guard.constructed += 1;
    }
    guard.disarm();

    Ok(())
}

/// Destroys the value stored at the given address.
///
/// Values of [trivial] types are zeroed instead.
///
/// # Safety
///
/// `destination` must point to a valid, initialized value of type `T`. The
/// slot is left logically uninitialized.
///
/// [trivial]: fn.is_trivial.html
#[inline]
pub unsafe fn destruct_object<T>(
    destination: *mut T,
) -> Result<(), Error<()>> {
    destruct_array(destination, 1)
}

/// Destroys `count` consecutive values starting at the given address.
///
/// Values of [trivial] types are zeroed in bulk instead.
///
/// # Safety
///
/// Same as [`destruct_object()`], for every slot in the range.
///
/// [`destruct_object()`]: fn.destruct_object.html
/// [trivial]: fn.is_trivial.html
pub unsafe fn destruct_array<T>(
    destination: *mut T,
    count: usize,
) -> Result<(), Error<()>> {
    check_address(destination)?;
    destruct_range(destination, count);
    Ok(())
}

/// Destroys `count` consecutive values at an address known to be non-null.
#[inline]
pub(crate) unsafe fn destruct_range<T>(destination: *mut T, count: usize) {
    if is_trivial::<T>() {
        ptr::write_bytes(destination as *mut u8, 0, count * size_of::<T>());
    } else {
        ptr::drop_in_place(slice::from_raw_parts_mut(destination, count));
    }
}

/// Moves `value` into the slot at the given address.
///
/// # Safety
///
/// `destination` must be valid for writes and properly aligned for `T`. Any
/// value previously stored at the address is overwritten without being
/// dropped.
#[inline]
pub unsafe fn move_construct_object<T>(
    destination: *mut T,
    value: T,
) -> Result<(), Error<T>> {
    if destination.is_null() {
        return Err(Error::new(ErrorKind::InvalidArgument, value));
    }

    ptr::write(destination, value);
    Ok(())
}

/// Relocates `count` consecutive values from `source` to `destination`.
///
/// The source slots are left logically uninitialized; their values must not
/// be dropped afterward.
///
/// # Safety
///
/// Both ranges must be valid for `count` elements, properly aligned, and
/// non-overlapping, and every source slot must hold an initialized value.
#[inline]
pub unsafe fn move_construct_array<T>(
    destination: *mut T,
    source: *const T,
    count: usize,
) -> Result<(), Error<()>> {
    check_address(destination)?;
    check_address(source)?;
    ptr::copy_nonoverlapping(source, destination, count);
    Ok(())
}

/// Constructs a clone of `value` at the given address.
///
/// # Safety
///
/// `destination` must be valid for writes and properly aligned for `T`.
#[inline]
pub unsafe fn copy_construct_object<T>(
    destination: *mut T,
    value: &T,
) -> Result<(), Error<()>>
where
    T: Clone,
{
    check_address(destination)?;
    ptr::write(destination, value.clone());
    Ok(())
}

/// Constructs clones of `count` consecutive values from `source` at
/// `destination`.
///
/// If cloning panics, every element already constructed by this call is
/// dropped before the panic propagates.
///
/// # Safety
///
/// Both ranges must be valid for `count` elements, properly aligned, and
/// non-overlapping, and every source slot must hold an initialized value.
///
/// # Examples
///
/// ```
/// use seqarray::memory::copy_construct_array;
/// use std::mem::MaybeUninit;
///
/// let source = [String::from("a"), String::from("b")];
/// let mut destination =
///     [MaybeUninit::<String>::uninit(), MaybeUninit::uninit()];
/// unsafe {
///     copy_construct_array(
///         destination.as_mut_ptr() as *mut String,
///         source.as_ptr(),
///         2,
///     )
///     .unwrap();
///
///     let [a, b] = destination;
///     assert_eq!(a.assume_init(), "a");
///     assert_eq!(b.assume_init(), "b");
/// }
/// ```
pub unsafe fn copy_construct_array<T>(
    destination: *mut T,
    source: *const T,
    count: usize,
) -> Result<(), Error<()>>
where
    T: Clone,
{
    check_address(destination)?;
    check_address(source)?;

    let mut guard = ConstructGuard {
        start: destination,
        constructed: 0,
    };
    while guard.constructed < count {
        let index = guard.constructed;
        ptr::write(destination.add(index), (*source.add(index)).clone());
        guard.constructed += 1;
    }
    guard.disarm();

    Ok(())
}

/// Drops partially constructed ranges if element construction panics.
struct ConstructGuard<T> {
    start: *mut T,
    constructed: usize,
}

impl<T> ConstructGuard<T> {
    #[inline(always)]
    fn disarm(mut self) {
        self.constructed = 0;
    }
}

impl<T> Drop for ConstructGuard<T> {
    fn drop(&mut self) {
        if self.constructed > 0 {
            unsafe {
                ptr::drop_in_place(slice::from_raw_parts_mut(
                    self.start,
                    self.constructed,
                ));
            }
        }
    }
}
