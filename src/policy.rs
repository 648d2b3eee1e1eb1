// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Allocation policies.

use core::ptr;

use super::{Error, ErrorKind};

#[cfg(feature = "alloc")]
use alloc::alloc::{alloc, alloc_zeroed, dealloc, realloc, Layout};
#[cfg(feature = "alloc")]
use core::sync::atomic::{AtomicUsize, Ordering};

/// Strategy used by a collection to obtain and release raw memory.
///
/// All methods take `&self` so that a single policy instance can be shared
/// by any number of collections at once. Implementations that need to track
/// state should use interior mutability.
///
/// Arrays borrowing a shared policy can only be sent to another thread if
/// the policy is [`Sync`].
///
/// [`Sync`]: https://doc.rust-lang.org/core/marker/trait.Sync.html
///
/// # Safety
///
/// Memory returned by [`allocate()`], [`callocate()`], and [`reallocate()`]
/// must be valid for reads and writes of the requested size, aligned to the
/// requested alignment, and must not overlap any other live block returned
/// by the same policy. Implementations with [`ALLOCATES`] set to `false` must
/// never be asked to provide memory by a collection, and are expected to
/// return null addresses.
///
/// [`ALLOCATES`]: #associatedconstant.ALLOCATES
/// [`allocate()`]: #tymethod.allocate
/// [`callocate()`]: #tymethod.callocate
/// [`reallocate()`]: #tymethod.reallocate
pub unsafe trait AllocationPolicy {
    /// Whether the policy actually provides memory.
    ///
    /// Collections backed by a non-allocating policy keep their elements in
    /// inline storage, and report their [size] based on capacity rather
    /// than element count.
    ///
    /// [size]: trait.Collection.html#method.size
    const ALLOCATES: bool;

    /// Prepares the policy for use by a collection expecting roughly
    /// `capacity` elements.
    #[inline]
    fn initialize(&self, capacity: usize) {
        let _ = capacity;
    }

    /// Allocates a block of `size` bytes aligned to `alignment`.
    fn allocate(&self, size: usize, alignment: usize)
        -> Result<*mut u8, Error<()>>;

    /// Allocates a block of `size` bytes aligned to `alignment`, with each
    /// byte set to `value`.
    fn callocate(
        &self,
        size: usize,
        value: u8,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>>;

    /// Resizes a block previously returned by this policy, preserving the
    /// first `min(old_size, new_size)` bytes of its contents.
    ///
    /// The returned address may differ from `address`, in which case the
    /// old block is no longer valid. If an error is returned, the old block
    /// is left untouched.
    ///
    /// # Safety
    ///
    /// `address` must have been returned by this policy with the given
    /// `old_size` and `alignment`, and must not have been released yet.
    unsafe fn reallocate(
        &self,
        address: *mut u8,
        old_size: usize,
        new_size: usize,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>>;

    /// Releases a block previously returned by this policy. Null addresses
    /// are ignored.
    ///
    /// # Safety
    ///
    /// `address` must have been returned by this policy with the given
    /// `size` and `alignment`, and must not have been released yet.
    unsafe fn deallocate(
        &self,
        address: *mut u8,
        size: usize,
        alignment: usize,
    );

    /// Resets any bookkeeping maintained by the policy.
    #[inline]
    fn reset(&self) {}

    /// Releases any resources held by the policy itself. Called by a
    /// collection that owns its policy instance when the collection is
    /// dropped.
    #[inline]
    fn deinitialize(&self) {}
}

/// Policy for collections whose storage never comes from an allocator.
///
/// Every method is a no-op returning a null address. This is the policy
/// used by [`StaticArray`], and it can also be used with a [`DynamicArray`]
/// to obtain an array that refuses to grow.
///
/// [`DynamicArray`]: struct.DynamicArray.html
/// [`StaticArray`]: struct.StaticArray.html
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoAllocation;

unsafe impl AllocationPolicy for NoAllocation {
    const ALLOCATES: bool = false;

    #[inline(always)]
    fn allocate(&self, _: usize, _: usize) -> Result<*mut u8, Error<()>> {
        Ok(ptr::null_mut())
    }

    #[inline(always)]
    fn callocate(
        &self,
        _: usize,
        _: u8,
        _: usize,
    ) -> Result<*mut u8, Error<()>> {
        Ok(ptr::null_mut())
    }

    #[inline(always)]
    unsafe fn reallocate(
        &self,
        _: *mut u8,
        _: usize,
        _: usize,
        _: usize,
    ) -> Result<*mut u8, Error<()>> {
        Ok(ptr::null_mut())
    }

    #[inline(always)]
    unsafe fn deallocate(&self, _: *mut u8, _: usize, _: usize) {}
}

/// Policy backed by the global heap allocator.
///
/// `HeapAllocation` keeps track of the number of bytes and blocks it has
/// handed out that have not yet been released, which makes it easy to check
/// that collections sharing an instance return all of their memory. The
/// counters are atomic, so an instance can be shared between threads.
///
/// # Examples
///
/// ```
/// use seqarray::{DynamicArray, HeapAllocation};
///
/// let heap = HeapAllocation::new();
/// {
///     let mut array =
///         DynamicArray::<u32>::with_capacity_in(8, &heap).unwrap();
///     array.push_back(1).unwrap();
///     assert_eq!(heap.allocated_bytes(), 32);
///     assert_eq!(heap.allocation_count(), 1);
/// }
/// assert_eq!(heap.allocated_bytes(), 0);
/// assert_eq!(heap.allocation_count(), 0);
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Default)]
pub struct HeapAllocation {
    /// Bytes currently handed out.
    allocated_bytes: AtomicUsize,
    /// Blocks currently handed out.
    allocation_count: AtomicUsize,
}

#[cfg(feature = "alloc")]
impl HeapAllocation {
    /// Creates a new heap allocation policy with no outstanding blocks.
    #[inline]
    pub const fn new() -> Self {
        HeapAllocation {
            allocated_bytes: AtomicUsize::new(0),
            allocation_count: AtomicUsize::new(0),
        }
    }

    /// Returns the number of bytes allocated through this policy that have
    /// not been released.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.allocated_bytes.load(Ordering::Relaxed)
    }

    /// Returns the number of blocks allocated through this policy that have
    /// not been released.
    #[inline]
    pub fn allocation_count(&self) -> usize {
        self.allocation_count.load(Ordering::Relaxed)
    }

    /// Validates an allocation request, returning its layout.
    fn layout(size: usize, alignment: usize) -> Result<Layout, Error<()>> {
        if size == 0 || !alignment.is_power_of_two() {
            return Err(Error::new(ErrorKind::InvalidArgument, ()));
        }

        Layout::from_size_align(size, alignment)
            .map_err(|_| Error::new(ErrorKind::Overflow, ()))
    }

    /// Records a block of `size` bytes as handed out, returning it.
    #[inline]
    fn track(
        &self,
        address: *mut u8,
        size: usize,
    ) -> Result<*mut u8, Error<()>> {
        if address.is_null() {
            return Err(Error::new(ErrorKind::OutOfMemory, ()));
        }

        self.allocated_bytes.fetch_add(size, Ordering::Relaxed);
        self.allocation_count.fetch_add(1, Ordering::Relaxed);
        Ok(address)
    }

    /// Records a block of `size` bytes as released.
    #[inline]
    fn untrack(&self, size: usize) {
        Self::adjust(&self.allocated_bytes, |bytes| {
            bytes.saturating_sub(size)
        });
        Self::adjust(&self.allocation_count, |count| {
            count.saturating_sub(1)
        });
    }

    /// Atomically replaces a counter with the result of `op`.
    #[inline]
    fn adjust<F>(counter: &AtomicUsize, op: F)
    where
        F: Fn(usize) -> usize,
    {
        // The closure never declines the update.
        let _ = counter.fetch_update(
            Ordering::Relaxed,
            Ordering::Relaxed,
            |value| Some(op(value)),
        );
    }
}

#[cfg(feature = "alloc")]
unsafe impl AllocationPolicy for HeapAllocation {
    const ALLOCATES: bool = true;

    fn allocate(
        &self,
        size: usize,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>> {
        let layout = Self::layout(size, alignment)?;
        self.track(unsafe { alloc(layout) }, size)
    }

    fn callocate(
        &self,
        size: usize,
        value: u8,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>> {
        let layout = Self::layout(size, alignment)?;
        let address = unsafe {
            if value == 0 {
                alloc_zeroed(layout)
            } else {
                let address = alloc(layout);
                if !address.is_null() {
                    ptr::write_bytes(address, value, size);
                }
                address
            }
        };

        self.track(address, size)
    }

    unsafe fn reallocate(
        &self,
        address: *mut u8,
        old_size: usize,
        new_size: usize,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>> {
        if address.is_null() {
            return Err(Error::new(ErrorKind::InvalidArgument, ()));
        }

        let old_layout = Self::layout(old_size, alignment)?;
        Self::layout(new_size, alignment)?;

        let new_address = realloc(address, old_layout, new_size);
        if new_address.is_null() {
            return Err(Error::new(ErrorKind::OutOfMemory, ()));
        }

        Self::adjust(&self.allocated_bytes, |bytes| {
            bytes.saturating_sub(old_size).wrapping_add(new_size)
        });
        Ok(new_address)
    }

    unsafe fn deallocate(
        &self,
        address: *mut u8,
        size: usize,
        alignment: usize,
    ) {
        if address.is_null() {
            return;
        }

        // Blocks only ever come from a validated layout, so this can only
        // fail if the caller broke the safety contract.
        if let Ok(layout) = Self::layout(size, alignment) {
            dealloc(address, layout);
            self.untrack(size);
        }
    }

    #[inline]
    fn reset(&self) {
        self.allocated_bytes.store(0, Ordering::Relaxed);
        self.allocation_count.store(0, Ordering::Relaxed);
    }

    #[inline]
    fn deinitialize(&self) {
        self.reset();
    }
}
