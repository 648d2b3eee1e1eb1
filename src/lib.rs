// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Growable and fixed-capacity arrays built directly over raw memory.
//!
//! # Table of Contents
//!
//! - [Overview](#overview)
//! - [Crate Features](#crate-features)
//! - [Examples](#examples)
//! - [Allocation Policies](#allocation-policies)
//! - [Error Handling](#error-handling)
//! - [Cursors](#cursors)
//! - [Logging](#logging)
//!
//! # Overview
//!
//! This crate provides two contiguous array containers sharing a common set
//! of operations:
//!
//! - [`DynamicArray`] stores its elements in memory obtained from an
//!   [`AllocationPolicy`] and grows geometrically when it runs out of room.
//! - [`StaticArray`] stores up to `N` elements inline and reports an error
//!   instead of growing.
//!
//! Both implement the [`Collection`] and [`SequencedCollection`] traits,
//! which provide indexed access, insertion and removal at either end or at
//! arbitrary positions, range operations, and bulk operations across
//! collections. The same operations are also available as inherent methods,
//! so the traits only need to be imported when writing code that is generic
//! over the collection type.
//!
//! [`StaticQueue`] and [`StaticStack`] wrap a [`StaticArray`] to provide
//! first-in-first-out and last-in-first-out access, respectively.
//!
//! Element lifetimes are managed using the raw routines in the [`memory`]
//! module, which are also available for direct use.
//!
//! # Crate Features
//!
//! The following optional features can be set when building this crate:
//!
//! - **`std`**: Implements [`std::error::Error`] for [`Error`]. Enabled by
//!   default; can be disabled to build the crate with `#![no_std]`. Implies
//!   `alloc`.
//! - **`alloc`**: Provides [`HeapAllocation`] and [`DynamicArray`] using the
//!   `alloc` library. Without it, only fixed-capacity containers are
//!   available.
//!
//! # Examples
//!
//! ```
//! use seqarray::{dynamic_array, static_array, ErrorKind};
//!
//! let mut array = dynamic_array![1, 2, 3, 4, 5].unwrap();
//! assert_eq!(*array.front().unwrap(), 1);
//! assert_eq!(*array.back().unwrap(), 5);
//!
//! array.insert_range(0, &[6, 7, 8, 9, 10]).unwrap();
//! assert_eq!(array, [6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
//!
//! let mut fixed = static_array![5; 1, 2, 3, 4, 5].unwrap();
//! let error = fixed.push_back(6).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::LengthError);
//! assert_eq!(fixed.count(), 5);
//! ```
//!
//! # Allocation Policies
//!
//! A [`DynamicArray`] normally owns an instance of its policy, created
//! along with the array. Arrays can instead borrow a policy instance from
//! the caller using the `*_in()` constructors, allowing several arrays to
//! share the same policy (and any bookkeeping it performs):
//!
//! ```
//! use seqarray::{DynamicArray, HeapAllocation};
//!
//! let heap = HeapAllocation::new();
//! let mut first = DynamicArray::<u8>::new_in(&heap);
//! let mut second = DynamicArray::<u16>::new_in(&heap);
//!
//! first.resize(16).unwrap();
//! second.resize(16).unwrap();
//! assert_eq!(heap.allocated_bytes(), 48);
//!
//! drop(first);
//! drop(second);
//! assert_eq!(heap.allocated_bytes(), 0);
//! ```
//!
//! The [`NoAllocation`] policy never provides memory. It is used by
//! [`StaticArray`], and can be combined with [`DynamicArray`] to get an array
//! that fails with [`ErrorKind::LogicError`] whenever it would need to grow.
//!
//! # Error Handling
//!
//! All fallible operations return an [`Error`] describing the
//! [category][`ErrorKind`] of failure. Operations that take ownership of a
//! value return that value inside the error if they fail, so nothing is lost:
//!
//! ```
//! use seqarray::{ErrorKind, StaticArray};
//!
//! let mut array = StaticArray::<Vec<u8>, 1>::new();
//! array.push_back(vec![1]).unwrap();
//!
//! let (rejected,) = array.push_back(vec![2]).unwrap_err().unwrap_args();
//! assert_eq!(rejected, [2]);
//! ```
//!
//! Failed operations leave the collection unchanged.
//!
//! # Cursors
//!
//! A [`Cursor`] is a lightweight position within a collection's storage,
//! used to describe ranges of elements. Cursors are plain addresses and are
//! not tied to the lifetime of a collection, so reading through one is
//! `unsafe`. Any operation that changes a collection's structure invalidates
//! cursors previously obtained from it.
//!
//! # Logging
//!
//! Storage changes made by [`DynamicArray`] are reported through the [`log`]
//! crate at the `trace` level, and allocation failures at the `debug` level.
//! No logger is installed by this crate.
//!
//! [`AllocationPolicy`]: trait.AllocationPolicy.html
//! [`Collection`]: trait.Collection.html
//! [`Cursor`]: struct.Cursor.html
//! [`DynamicArray`]: struct.DynamicArray.html
//! [`Error`]: struct.Error.html
//! [`ErrorKind`]: enum.ErrorKind.html
//! [`ErrorKind::LogicError`]: enum.ErrorKind.html#variant.LogicError
//! [`HeapAllocation`]: struct.HeapAllocation.html
//! [`NoAllocation`]: struct.NoAllocation.html
//! [`SequencedCollection`]: trait.SequencedCollection.html
//! [`StaticArray`]: struct.StaticArray.html
//! [`StaticQueue`]: struct.StaticQueue.html
//! [`StaticStack`]: struct.StaticStack.html
//! [`log`]: https://docs.rs/log
//! [`memory`]: memory/index.html
//! [`std::error::Error`]: https://doc.rust-lang.org/std/error/trait.Error.html

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod traits;

mod array_iter;
mod cursor;
#[cfg(feature = "alloc")]
mod dynamic_array;
mod error;
pub mod memory;
mod policy;
mod static_array;
mod static_queue;
mod static_stack;

pub use array_iter::IntoIter;
pub use cursor::Cursor;
#[cfg(feature = "alloc")]
pub use dynamic_array::DynamicArray;
pub use error::{Error, ErrorKind};
#[cfg(feature = "alloc")]
pub use policy::HeapAllocation;
pub use policy::{AllocationPolicy, NoAllocation};
pub use static_array::StaticArray;
pub use static_queue::StaticQueue;
pub use static_stack::StaticStack;
pub use traits::{Collection, SequencedCollection};

/// Creates a [`DynamicArray`] holding the given values.
///
/// Evaluates to a `Result`, failing if storage cannot be allocated.
///
/// # Examples
///
/// ```
/// use seqarray::dynamic_array;
///
/// let array = dynamic_array![1, 2, 3].unwrap();
/// assert_eq!(array.count(), 3);
/// assert!(array.capacity() >= 3);
/// ```
///
/// [`DynamicArray`]: struct.DynamicArray.html
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! dynamic_array {
    ($($value:expr),+ $(,)?) => {
        $crate::DynamicArray::from_values([$($value),+])
    };
}

/// Creates a [`StaticArray`] with the given capacity holding the given
/// values.
///
/// Evaluates to a `Result`, failing if there are more values than the
/// capacity.
///
/// # Examples
///
/// ```
/// use seqarray::static_array;
///
/// let array = static_array![8; 'a', 'b'].unwrap();
/// assert_eq!(array.count(), 2);
/// assert_eq!(array.capacity(), 8);
/// ```
///
/// [`StaticArray`]: struct.StaticArray.html
#[macro_export]
macro_rules! static_array {
    ($capacity:expr; $($value:expr),+ $(,)?) => {
        $crate::StaticArray::<_, { $capacity }>::from_values([$($value),+])
    };
}

#[cfg(test)]
mod tests;
