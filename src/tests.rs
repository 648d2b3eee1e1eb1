// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::*;
use arrayvec::ArrayVec;
use core::mem::{align_of, size_of};
use core::ptr;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// Element type that keeps a count of its live instances.
#[derive(Debug)]
struct Tracked {
    value: i32,
    live: Rc<Cell<isize>>,
}

impl Tracked {
    fn new(value: i32, live: &Rc<Cell<isize>>) -> Self {
        live.set(live.get() + 1);
        Tracked {
            value,
            live: live.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.value, &self.live)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn values<C>(collection: &C) -> Vec<i32>
where
    C: SequencedCollection<Element = Tracked>,
{
    collection.as_slice().iter().map(|x| x.value).collect()
}

#[test]
fn front_back_and_count() {
    let dynamic = dynamic_array![1, 2, 3, 4, 5].unwrap();
    assert_eq!(*dynamic.front().unwrap(), 1);
    assert_eq!(*dynamic.back().unwrap(), 5);
    assert_eq!(dynamic.count(), 5);

    let fixed = static_array![8; 1, 2, 3, 4, 5].unwrap();
    assert_eq!(*fixed.front().unwrap(), 1);
    assert_eq!(*fixed.back().unwrap(), 5);
    assert_eq!(fixed.count(), 5);
    assert_eq!(fixed.capacity(), 8);
}

#[test]
fn remove_shifts_following_elements() {
    let mut dynamic = dynamic_array![1, 2, 3, 4, 5].unwrap();
    assert_eq!(dynamic.remove(2).unwrap(), 3);
    assert_eq!(dynamic, [1, 2, 4, 5]);

    let mut fixed = static_array![5; 1, 2, 3, 4, 5].unwrap();
    assert_eq!(fixed.remove(2).unwrap(), 3);
    assert_eq!(fixed, [1, 2, 4, 5]);
    assert_eq!(fixed.remove(3).unwrap(), 5);
    assert_eq!(fixed.remove(0).unwrap(), 1);
    assert_eq!(fixed, [2, 4]);
}

#[test]
fn remove_range_closes_gap() {
    let mut dynamic = dynamic_array![1, 2, 3, 4, 5].unwrap();
    let begin = dynamic.begin_cursor();
    dynamic.remove_range(begin, begin + 2).unwrap();
    assert_eq!(dynamic, [3, 4, 5]);

    let mut fixed = static_array![8; 1, 2, 3, 4, 5].unwrap();
    let begin = fixed.begin_cursor();
    fixed.remove_range(begin + 1, begin + 4).unwrap();
    assert_eq!(fixed, [1, 5]);

    // Removing up to the end cursor and removing an empty range.
    let mut fixed = static_array![8; 1, 2, 3, 4, 5].unwrap();
    let end = fixed.final_cursor();
    fixed.remove_range(end - 2, end).unwrap();
    assert_eq!(fixed, [1, 2, 3]);
    let begin = fixed.begin_cursor();
    fixed.remove_range(begin + 1, begin + 1).unwrap();
    assert_eq!(fixed, [1, 2, 3]);
}

#[test]
fn remove_range_rejects_invalid_cursors() {
    let mut array = dynamic_array![1, 2, 3, 4, 5].unwrap();
    let begin = array.begin_cursor();
    let end = array.final_cursor();

    for &(first, last) in &[
        (begin + 3, begin + 1),
        (end, end),
        (begin, end + 1),
        (begin - 1, begin + 2),
        (Cursor::null(), Cursor::null()),
    ] {
        let error = array.remove_range(first, last).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
        assert_eq!(array, [1, 2, 3, 4, 5]);
    }

    // Misaligned addresses never refer to an element.
    let misaligned =
        Cursor::new((begin.as_ptr() as *mut u8).wrapping_add(1) as *mut i32);
    let error = array.remove_range(misaligned, end).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);

    let mut empty = StaticArray::<i32, 4>::new();
    let begin = empty.begin_cursor();
    let error = empty.remove_range(begin, begin).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
}

#[test]
fn insert_range_at_front() {
    let mut dynamic = dynamic_array![1, 2, 3, 4, 5].unwrap();
    dynamic.insert_range(0, &[6, 7, 8, 9, 10]).unwrap();
    assert_eq!(dynamic, [6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
    assert_eq!(dynamic.count(), 10);

    let mut fixed = static_array![10; 1, 2, 3, 4, 5].unwrap();
    fixed.insert_range(0, &[6, 7, 8, 9, 10]).unwrap();
    assert_eq!(fixed, [6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
    assert_eq!(fixed.count(), 10);
}

#[test]
fn insert_range_in_middle() {
    let mut fixed = static_array![10; 1, 2, 3, 4, 5].unwrap();
    fixed.insert_range(3, &[7, 8]).unwrap();
    assert_eq!(fixed, [1, 2, 3, 7, 8, 4, 5]);
    fixed.insert_range(6, &[9]).unwrap();
    assert_eq!(fixed, [1, 2, 3, 7, 8, 4, 9, 5]);
    fixed.insert_range(1, &[]).unwrap();
    assert_eq!(fixed.count(), 8);
}

#[test]
fn insert_range_failures_leave_array_untouched() {
    let mut fixed = static_array![6; 1, 2, 3, 4].unwrap();
    let error = fixed.insert_range(1, &[7, 8, 9]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
    assert_eq!(fixed, [1, 2, 3, 4]);

    let error = fixed.insert_range(4, &[7]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    assert_eq!(fixed, [1, 2, 3, 4]);

    let mut full = static_array![2; 1, 2].unwrap();
    let error = full.insert_range(5, &[]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
}

#[test]
fn queue_pops_oldest_element() {
    let mut queue = StaticQueue::<i32, 4>::new();
    queue.push(1).unwrap();
    queue.push(2).unwrap();
    queue.push(3).unwrap();

    assert_eq!(queue.pop().unwrap(), 1);
    assert_eq!(*queue.peek().unwrap(), 2);
    assert_eq!(queue.count(), 2);
    assert_eq!(queue.capacity(), 4);

    queue.push(4).unwrap();
    queue.push(5).unwrap();
    assert!(queue.is_full());
    assert_eq!(queue.push(6).unwrap_err().unwrap_args(), (6,));

    *queue.peek_mut().unwrap() = 20;
    assert_eq!(queue.pop().unwrap(), 20);
    assert_eq!(queue.pop().unwrap(), 3);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.pop().unwrap_err().kind(), ErrorKind::LengthError);
    assert_eq!(queue.peek().unwrap_err().kind(), ErrorKind::LengthError);
}

#[test]
fn stack_pops_newest_element() {
    let mut stack = StaticStack::<i32, 3>::from_slice(&[1, 2]).unwrap();
    stack.push(3).unwrap();
    assert_eq!(stack.push(4).unwrap_err().kind(), ErrorKind::LengthError);

    assert_eq!(*stack.peek().unwrap(), 3);
    assert_eq!(stack.pop().unwrap(), 3);
    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert_eq!(stack.pop().unwrap_err().kind(), ErrorKind::LengthError);

    let mut source = StaticStack::<i32, 3>::from_values(0..3).unwrap();
    let taken = source.take();
    assert!(source.is_empty());
    assert_eq!(taken.count(), 3);
    assert_eq!(Collection::size(&taken), 3 * size_of::<i32>());
}

#[test]
fn dynamic_growth() {
    let mut array = DynamicArray::with_capacity(2).unwrap();
    array.push_back(1i32).unwrap();
    array.push_back(2).unwrap();
    assert_eq!(array.capacity(), 2);

    array.push_back(3).unwrap();
    assert_eq!(array.capacity(), 4);
    assert!(array.capacity() >= 3);
    assert_eq!(array.capacity() % align_of::<i32>(), 0);

    // Growth by one and a half times once that exceeds the requirement.
    let mut array = DynamicArray::<u8>::with_capacity(10).unwrap();
    array.resize(11).unwrap();
    assert_eq!(array.capacity(), 15);

    // Growth to the requirement when it exceeds one and a half times.
    array.resize(100).unwrap();
    assert_eq!(array.capacity(), 100);

    // No change when the capacity already suffices.
    array.resize(50).unwrap();
    assert_eq!(array.capacity(), 100);
}

#[test]
fn dynamic_growth_from_empty() {
    let mut array = DynamicArray::<u64>::new();
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());

    for value in 0..20 {
        array.push_back(value).unwrap();
        assert!(array.count() <= array.capacity());
        assert_eq!(array.capacity() % align_of::<u64>(), 0);
    }

    assert_eq!(array.count(), 20);
    assert!(array.iter().copied().eq(0..20));
}

#[test]
fn reserve_sets_exact_capacity() {
    let live = Rc::new(Cell::new(0));
    let mut array =
        DynamicArray::from_values((0..6).map(|x| Tracked::new(x, &live)))
            .unwrap();
    assert_eq!(live.get(), 6);

    array.reserve(20).unwrap();
    assert_eq!(array.capacity(), 20);
    assert_eq!(values(&array), [0, 1, 2, 3, 4, 5]);

    array.reserve(4).unwrap();
    assert_eq!(array.capacity(), 4);
    assert_eq!(values(&array), [0, 1, 2, 3]);
    assert_eq!(live.get(), 4);

    array.reserve(0).unwrap();
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());
    assert_eq!(live.get(), 0);

    array.push_back(Tracked::new(9, &live)).unwrap();
    assert_eq!(values(&array), [9]);
}

#[test]
fn reserve_zero_releases_storage() {
    let heap = HeapAllocation::new();
    let mut array = DynamicArray::from_slice_in(&[1u32, 2, 3], &heap).unwrap();
    assert_eq!(heap.allocated_bytes(), 12);

    array.reserve(0).unwrap();
    assert_eq!(heap.allocated_bytes(), 0);
    assert_eq!(heap.allocation_count(), 0);
}

#[test]
fn compact_rounds_to_alignment() {
    let mut array = DynamicArray::<u32>::with_capacity(64).unwrap();
    for value in 0..5 {
        array.push_back(value).unwrap();
    }

    array.compact().unwrap();
    assert_eq!(array.capacity(), 8);
    assert_eq!(array, [0, 1, 2, 3, 4]);

    // Never grows.
    let mut array = DynamicArray::<u32>::with_capacity(5).unwrap();
    array.push_back(1).unwrap();
    array.compact().unwrap();
    assert_eq!(array.capacity(), 4);
    array.push_back(2).unwrap();
    array.push_back(3).unwrap();
    array.push_back(4).unwrap();
    array.push_back(5).unwrap();
    let capacity = array.capacity();
    array.compact().unwrap();
    assert!(array.capacity() <= capacity);
    assert!(array.capacity() >= array.count());

    let mut array = DynamicArray::<u32>::with_capacity(5).unwrap();
    array.compact().unwrap();
    assert_eq!(array.capacity(), 0);
}

#[test]
fn push_and_pop_at_both_ends() {
    let mut array = StaticArray::<i32, 4>::new();
    array.push_back(2).unwrap();
    array.push_front(1).unwrap();
    array.push_back(3).unwrap();
    array.push_front(0).unwrap();
    assert_eq!(array, [0, 1, 2, 3]);

    assert_eq!(array.pop_front().unwrap(), 0);
    assert_eq!(array.pop_back().unwrap(), 3);
    assert_eq!(array, [1, 2]);

    let mut array = DynamicArray::new();
    array.push_front("b").unwrap();
    array.push_front("a").unwrap();
    array.push_back("c").unwrap();
    assert_eq!(array, ["a", "b", "c"]);
}

#[test]
fn full_static_array_rejects_push() {
    let mut array = static_array![3; 1, 2, 3].unwrap();
    assert!(array.is_full());

    let error = array.push_back(4).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
    assert_eq!(error.unwrap_args(), (4,));

    let error = array.push_front(0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);

    let error = array.insert(1, 9).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);

    assert_eq!(array.count(), 3);
    assert_eq!(array, [1, 2, 3]);
}

#[test]
fn empty_collections_reject_access() {
    let mut array = DynamicArray::<i32>::new();
    assert_eq!(array.pop_back().unwrap_err().kind(), ErrorKind::LengthError);
    assert_eq!(array.pop_front().unwrap_err().kind(), ErrorKind::LengthError);
    assert_eq!(array.front().unwrap_err().kind(), ErrorKind::LengthError);
    assert_eq!(array.back_mut().unwrap_err().kind(), ErrorKind::LengthError);
    assert_eq!(array.remove(0).unwrap_err().kind(), ErrorKind::LengthError);
    assert_eq!(array.at(0).unwrap_err().kind(), ErrorKind::OutOfRange);

    let error = array.assign(0, 5).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
    assert_eq!(error.unwrap_args(), (5,));

    let error = array.assign_range(0, &[1]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);

    // Insertion requires an existing element at the index.
    let error = array.insert(0, 5).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    let error = array.insert_range(0, &[5]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    assert!(array.is_empty());
}

#[test]
fn indexed_access() {
    let mut array = static_array![4; 10, 20, 30].unwrap();
    assert_eq!(*array.at(1).unwrap(), 20);
    assert_eq!(array.at(3).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(array.at(100).unwrap_err().kind(), ErrorKind::OutOfRange);

    *array.at_mut(2).unwrap() = 35;
    *array.front_mut().unwrap() += 1;
    assert_eq!(array, [11, 20, 35]);
    assert_eq!(array.remove(3).unwrap_err().kind(), ErrorKind::OutOfRange);

    assert_eq!(array.raw_data(), array.as_ptr());
    assert_eq!(array.final_cursor() - array.begin_cursor(), 3);
}

#[test]
fn assign_replaces_elements() {
    let mut array = dynamic_array![1, 2, 3, 4].unwrap();
    assert_eq!(array.assign(1, 20).unwrap(), 2);
    assert_eq!(array, [1, 20, 3, 4]);

    let error = array.assign(4, 50).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    assert_eq!(error.unwrap_args(), (50,));

    array.assign_range(2, &[30, 40]).unwrap();
    assert_eq!(array, [1, 20, 30, 40]);

    let error = array.assign_range(3, &[7, 8]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    let error = array.assign_range(4, &[]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    let error = array.assign_range(usize::MAX, &[1]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    assert_eq!(array, [1, 20, 30, 40]);
}

#[test]
fn insert_all_appends_other_collection() {
    let mut dynamic = dynamic_array![1, 2].unwrap();
    let fixed = static_array![4; 3, 4, 5].unwrap();
    dynamic.insert_all(&fixed).unwrap();
    assert_eq!(dynamic, [1, 2, 3, 4, 5]);

    let mut small = static_array![4; 1, 2].unwrap();
    let error = small.insert_all(&fixed).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
    assert_eq!(small, [1, 2]);

    let other = static_array![4; 9, 9].unwrap();
    small.insert_all(&other).unwrap();
    assert_eq!(small, [1, 2, 9, 9]);

    let mut empty = StaticArray::<i32, 4>::new();
    empty.insert_all(&other).unwrap();
    assert_eq!(empty, [9, 9]);

    // A full collection rejects even an empty source.
    let nothing = StaticArray::<i32, 4>::new();
    let error = small.insert_all(&nothing).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);
    assert_eq!(small, [1, 2, 9, 9]);

    let mut full_pair = static_array![2; 1, 2].unwrap();
    let error = full_pair
        .insert_all(&StaticArray::<i32, 2>::new())
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LengthError);

    dynamic.insert_all(&nothing).unwrap();
    assert_eq!(dynamic, [1, 2, 3, 4, 5]);
}

#[test]
fn remove_all_and_contains_all() {
    let mut array = dynamic_array![1, 2, 3, 2, 1].unwrap();
    let wanted = static_array![3; 3, 1].unwrap();
    let missing = static_array![3; 3, 7].unwrap();
    assert!(array.contains_all(&wanted));
    assert!(!array.contains_all(&missing));

    let unwanted = dynamic_array![2, 1, 9].unwrap();
    assert_eq!(array.remove_all(&unwanted), 2);
    assert_eq!(array, [3, 2, 1]);

    assert_eq!(array.remove_all(&unwanted), 2);
    assert_eq!(array, [3]);
    assert!(!array.contains_all(&wanted));
}

#[test]
fn clear_is_idempotent() {
    let live = Rc::new(Cell::new(0));
    let mut array = StaticArray::<Tracked, 4>::with_fill(
        Tracked::new(7, &live),
        3,
    )
    .unwrap();
    assert_eq!(live.get(), 3);

    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 4);
    assert_eq!(live.get(), 0);

    array.clear();
    assert!(array.is_empty());
    assert_eq!(live.get(), 0);

    let mut array = DynamicArray::with_capacity(8).unwrap();
    array.push_back(Tracked::new(1, &live)).unwrap();
    array.clear();
    array.clear();
    assert_eq!(array.capacity(), 8);
    assert_eq!(live.get(), 0);
}

#[test]
fn constructors_validate_counts() {
    let error = DynamicArray::<i32>::with_capacity(0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let error = DynamicArray::with_fill(String::from("x"), 0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.unwrap_args().0, "x");

    let error = DynamicArray::<i32>::from_slice(&[]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    let error = DynamicArray::from_values(core::iter::empty::<i32>())
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let error = StaticArray::<i32, 2>::with_fill(1, 0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    let error = StaticArray::<i32, 2>::with_fill(1, 3).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    let error = StaticArray::<i32, 2>::from_slice(&[1, 2, 3]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    let error = StaticArray::<i32, 2>::from_values(None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let array = StaticArray::<i32, 2>::with_fill(1, 2).unwrap();
    assert_eq!(array, [1, 1]);
    let array = DynamicArray::with_fill(5u8, 3).unwrap();
    assert_eq!(array, [5, 5, 5]);
    assert_eq!(array.capacity(), 3);
}

#[test]
fn take_leaves_empty_source() {
    let mut source = DynamicArray::with_capacity(10).unwrap();
    source.push_back(1).unwrap();
    let destination = source.take();
    assert_eq!(destination, [1]);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 10);
    assert_eq!(destination.capacity(), 10);
    assert_ne!(source.as_ptr(), destination.as_ptr());
    assert!(!source.has_external_allocator());
    assert!(!destination.has_external_allocator());

    source.push_back(4).unwrap();
    assert_eq!(source, [4]);
    assert_eq!(destination, [1]);

    let mut source = dynamic_array![1, 2, 3].unwrap();
    let capacity = source.capacity();
    let destination = source.try_take().unwrap();
    assert_eq!(destination, [1, 2, 3]);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), capacity);

    let mut source = DynamicArray::<u8>::new();
    let destination = source.take();
    assert_eq!(source.capacity(), 0);
    assert_eq!(destination.capacity(), 0);

    let mut source = static_array![6; 1, 2, 3].unwrap();
    let destination = source.take();
    assert_eq!(destination, [1, 2, 3]);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 6);
    assert_eq!(destination.capacity(), 6);
}

#[test]
fn take_preserves_external_allocator() {
    let heap = HeapAllocation::new();
    let mut source = DynamicArray::from_values_in(0..4u64, &heap).unwrap();
    let bytes = heap.allocated_bytes();

    let destination = source.take();
    assert!(source.has_external_allocator());
    assert!(destination.has_external_allocator());
    assert!(ptr::eq(source.allocator(), &heap));
    assert_eq!(source.capacity(), destination.capacity());
    assert_eq!(heap.allocated_bytes(), bytes * 2);
    assert_eq!(heap.allocation_count(), 2);

    source.push_back(10).unwrap();
    drop(destination);
    assert_eq!(
        heap.allocated_bytes(),
        source.capacity() * size_of::<u64>()
    );
    drop(source);
    assert_eq!(heap.allocated_bytes(), 0);
}

// Heap policy refusing to keep more than `LIMIT` bytes outstanding.
#[derive(Debug, Default)]
struct LimitedHeap<const LIMIT: usize> {
    heap: HeapAllocation,
}

impl<const LIMIT: usize> LimitedHeap<LIMIT> {
    fn check(&self, additional: usize) -> Result<(), Error<()>> {
        if self.heap.allocated_bytes() + additional > LIMIT {
            Err(Error::new(ErrorKind::OutOfMemory, ()))
        } else {
            Ok(())
        }
    }
}

unsafe impl<const LIMIT: usize> AllocationPolicy for LimitedHeap<LIMIT> {
    const ALLOCATES: bool = true;

    fn allocate(
        &self,
        size: usize,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>> {
        self.check(size)?;
        self.heap.allocate(size, alignment)
    }

    fn callocate(
        &self,
        size: usize,
        value: u8,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>> {
        self.check(size)?;
        self.heap.callocate(size, value, alignment)
    }

    unsafe fn reallocate(
        &self,
        address: *mut u8,
        old_size: usize,
        new_size: usize,
        alignment: usize,
    ) -> Result<*mut u8, Error<()>> {
        self.check(new_size.saturating_sub(old_size))?;
        self.heap.reallocate(address, old_size, new_size, alignment)
    }

    unsafe fn deallocate(
        &self,
        address: *mut u8,
        size: usize,
        alignment: usize,
    ) {
        self.heap.deallocate(address, size, alignment)
    }
}

#[test]
fn failed_take_leaves_source_untouched() {
    let policy = LimitedHeap::<24>::default();
    let mut source = DynamicArray::from_slice_in(&[1u32, 2, 3, 4], &policy)
        .unwrap();

    let error = source.try_take().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfMemory);
    assert_eq!(source, [1, 2, 3, 4]);
    assert_eq!(source.capacity(), 4);
    assert_eq!(policy.heap.allocated_bytes(), 16);

    source.reserve(2).unwrap();
    let destination = source.try_take().unwrap();
    assert_eq!(destination, [1, 2]);
    assert_eq!(source.capacity(), 2);
    assert_eq!(policy.heap.allocated_bytes(), 16);
}

#[test]
#[should_panic]
fn take_panics_without_replacement_storage() {
    let policy = LimitedHeap::<16>::default();
    let mut source =
        DynamicArray::with_capacity_in(4, &policy).unwrap();
    source.push_back(1u32).unwrap();
    let _ = source.take();
}

#[test]
fn dynamic_array_crosses_threads() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<DynamicArray<'static, i32>>();
    assert_sync::<DynamicArray<'static, i32>>();
    assert_send::<DynamicArray<'static, String, NoAllocation>>();
    assert_send::<IntoIter<DynamicArray<'static, i32>>>();
    assert_send::<HeapAllocation>();
    assert_sync::<HeapAllocation>();

    let shared = std::sync::Arc::new(std::sync::Mutex::new(
        DynamicArray::<usize>::new(),
    ));
    let workers: Vec<_> = (0..4)
        .map(|id| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..8 {
                    shared.lock().unwrap().push_back(id).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let array = shared.lock().unwrap().take();
    assert_eq!(array.count(), 32);
    for id in 0..4 {
        assert_eq!(array.iter().filter(|&&x| x == id).count(), 8);
    }

    // Arrays sharing one policy can be moved to separate threads.
    let heap = HeapAllocation::new();
    std::thread::scope(|scope| {
        for id in 0..3u64 {
            let mut array = DynamicArray::new_in(&heap);
            array.push_back(id).unwrap();
            scope.spawn(move || {
                for value in 1..100 {
                    array.push_back(value * id).unwrap();
                }
                assert_eq!(array.count(), 100);
            });
        }
    });
    assert_eq!(heap.allocated_bytes(), 0);
    assert_eq!(heap.allocation_count(), 0);
}

#[test]
fn clone_is_deep_and_keeps_allocator_kind() {
    let heap = HeapAllocation::new();
    let values = [String::from("a"), String::from("b")];
    let original = DynamicArray::from_slice_in(&values, &heap).unwrap();
    let mut copy = original.try_clone().unwrap();
    assert!(copy.has_external_allocator());
    assert_eq!(copy.capacity(), original.capacity());
    assert_eq!(heap.allocation_count(), 2);

    copy.push_back(String::from("c")).unwrap();
    copy[0].push('!');
    assert_eq!(original, ["a", "b"]);
    assert_eq!(copy, ["a!", "b", "c"]);

    drop(copy);
    drop(original);
    assert_eq!(heap.allocated_bytes(), 0);

    let original = dynamic_array![1, 2, 3].unwrap();
    let copy = original.clone();
    assert!(!copy.has_external_allocator());
    assert!(!ptr::eq(copy.allocator(), original.allocator()));
    assert_eq!(copy, original);
    assert_ne!(copy.as_ptr(), original.as_ptr());

    let fixed = static_array![4; 1, 2].unwrap();
    let mut fixed_copy = fixed.clone();
    fixed_copy.push_back(3).unwrap();
    assert_eq!(fixed, [1, 2]);
    assert_eq!(fixed_copy, [1, 2, 3]);
}

#[test]
fn non_allocating_dynamic_array_cannot_grow() {
    let mut array: DynamicArray<i32, NoAllocation> = DynamicArray::default();
    let error = array.push_back(1).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LogicError);
    assert_eq!(error.unwrap_args(), (1,));
    assert_eq!(array.resize(1).unwrap_err().kind(), ErrorKind::LogicError);
    assert_eq!(array.reserve(1).unwrap_err().kind(), ErrorKind::LogicError);
    assert_eq!(array.capacity(), 0);
    assert_eq!(Collection::size(&array), 0);

    let policy = NoAllocation;
    let error = DynamicArray::<i32, _>::with_capacity_in(4, &policy)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LogicError);
}

#[test]
fn size_depends_on_policy() {
    let mut dynamic = DynamicArray::<u16>::with_capacity(10).unwrap();
    dynamic.push_back(1).unwrap();
    dynamic.push_back(2).unwrap();
    assert_eq!(dynamic.size(), 4);

    let mut fixed = StaticArray::<u16, 10>::new();
    assert_eq!(fixed.size(), 20);
    fixed.push_back(1).unwrap();
    assert_eq!(fixed.size(), 20);
}

#[test]
fn elements_dropped_exactly_once() {
    let live = Rc::new(Cell::new(0));
    {
        let mut array = DynamicArray::new();
        for value in 0..10 {
            array.push_back(Tracked::new(value, &live)).unwrap();
        }
        array.push_front(Tracked::new(-1, &live)).unwrap();
        array.insert(3, Tracked::new(100, &live)).unwrap();
        let inserted = [Tracked::new(50, &live), Tracked::new(51, &live)];
        array.insert_range(1, &inserted).unwrap();
        drop(inserted);
        assert_eq!(live.get(), 14);

        drop(array.remove(0).unwrap());
        drop(array.pop_back().unwrap());
        drop(array.pop_front().unwrap());
        let begin = array.begin_cursor();
        array.remove_range(begin + 2, begin + 5).unwrap();
        assert_eq!(live.get(), array.count() as isize);
        assert_eq!(values(&array), [51, 0, 3, 4, 5, 6, 7, 8]);

        drop(array.assign(0, Tracked::new(1, &live)).unwrap());
        array.compact().unwrap();
        assert_eq!(live.get(), 8);

        let copy = array.clone();
        assert_eq!(live.get(), 16);
        drop(copy);
    }
    assert_eq!(live.get(), 0);

    {
        let mut array = StaticArray::<Tracked, 6>::new();
        for value in 0..6 {
            array.push_back(Tracked::new(value, &live)).unwrap();
        }
        let error = array.push_back(Tracked::new(6, &live)).unwrap_err();
        assert_eq!(live.get(), 7);
        drop(error);
        assert_eq!(live.get(), 6);

        let end = array.final_cursor();
        array.remove_range(end - 3, end).unwrap();
        assert_eq!(live.get(), 3);
        let taken = array.take();
        assert_eq!(live.get(), 3);
        assert_eq!(values(&taken), [0, 1, 2]);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn into_iter_drops_unconsumed_elements() {
    let live = Rc::new(Cell::new(0));
    let array =
        DynamicArray::from_values((0..5).map(|x| Tracked::new(x, &live)))
            .unwrap();

    let mut iter = array.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next().unwrap().value, 0);
    assert_eq!(iter.next_back().unwrap().value, 4);
    assert_eq!(iter.as_slice().len(), 3);
    assert_eq!(live.get(), 3);
    drop(iter);
    assert_eq!(live.get(), 0);

    let fixed = static_array![4; 1, 2, 3].unwrap();
    let collected: Vec<i32> = fixed.into_iter().rev().collect();
    assert_eq!(collected, [3, 2, 1]);

    let mut fixed = static_array![4; 1, 2, 3].unwrap();
    for value in &mut fixed {
        *value *= 2;
    }
    assert_eq!((&fixed).into_iter().sum::<i32>(), 12);
}

#[test]
fn shared_allocator_returns_all_memory() {
    let heap = HeapAllocation::new();
    {
        let mut first = DynamicArray::<u32>::new_in(&heap);
        let mut second =
            DynamicArray::<u32>::with_capacity_in(3, &heap).unwrap();
        for value in 0..50 {
            first.push_back(value).unwrap();
            second.push_front(value).unwrap();
        }
        assert_eq!(heap.allocation_count(), 2);
        assert_eq!(
            heap.allocated_bytes(),
            (first.capacity() + second.capacity()) * size_of::<u32>()
        );

        let mut third = DynamicArray::with_fill_in(0u32, 4, &heap).unwrap();
        third.insert_all(&first).unwrap();
        assert_eq!(third.count(), 54);
        assert_eq!(heap.allocation_count(), 3);
    }
    assert_eq!(heap.allocated_bytes(), 0);
    assert_eq!(heap.allocation_count(), 0);
}

#[test]
fn zero_sized_elements() {
    let heap = HeapAllocation::new();
    let mut array = DynamicArray::<(), _>::new_in(&heap);
    for _ in 0..5 {
        array.push_back(()).unwrap();
    }
    array.insert(2, ()).unwrap();
    assert_eq!(array.count(), 6);
    assert!(array.capacity() >= 6);
    assert_eq!(heap.allocated_bytes(), 0);

    array.pop_front().unwrap();
    array.remove(0).unwrap();
    assert_eq!(array.count(), 4);

    let begin = array.begin_cursor();
    assert_eq!(array.final_cursor() - begin, 4);
    array.remove_range(begin + 1, begin + 3).unwrap();
    assert_eq!(array.count(), 2);

    let begin = array.begin_cursor();
    let end = array.final_cursor();
    let error = array.remove_range(end, end).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    let error = array.remove_range(begin, end + 1).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    array.remove_range(begin, end).unwrap();
    assert!(array.is_empty());
}

thread_local! {
    static TOKEN_DROPS: Cell<usize> = Cell::new(0);
}

// Zero-sized element with a destructor and a large alignment.
#[derive(Clone, Debug)]
#[repr(align(8))]
struct Token;

impl Drop for Token {
    fn drop(&mut self) {
        TOKEN_DROPS.with(|drops| drops.set(drops.get() + 1));
    }
}

#[test]
fn zero_sized_range_removal() {
    let mut array = StaticArray::<Token, 4>::new();
    for _ in 0..3 {
        array.push_back(Token).unwrap();
    }

    let begin = array.begin_cursor();
    let end = array.final_cursor();
    assert_eq!(end - begin, 3);
    assert_eq!((begin + 1).as_ptr() as usize % 8, 0);

    TOKEN_DROPS.with(|drops| drops.set(0));
    array.remove_range(begin, begin + 2).unwrap();
    assert_eq!(array.count(), 1);
    assert_eq!(TOKEN_DROPS.with(Cell::get), 2);

    // Cursors that fall between positions are rejected.
    let begin = array.begin_cursor();
    let between =
        Cursor::new((begin.as_ptr() as *mut u8).wrapping_add(4) as *mut Token);
    let error = array.remove_range(begin, between).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);

    drop(array);
    assert_eq!(TOKEN_DROPS.with(Cell::get), 3);
}

#[test]
fn stable_deref_address() {
    fn assert_stable_deref<T: stable_deref_trait::StableDeref>(_: &T) {}

    let array = dynamic_array![1, 2, 3].unwrap();
    assert_stable_deref(&array);

    let address = array.as_ptr();
    let moved = Some(array);
    assert_eq!(moved.unwrap().as_ptr(), address);
}

#[test]
fn debug_output() {
    let array = dynamic_array![1, 2].unwrap();
    assert_eq!(format!("{:?}", array), "[1, 2]");

    let queue = StaticQueue::<i32, 2>::from_slice(&[3]).unwrap();
    assert_eq!(format!("{:?}", queue), "StaticQueue { elements: [3] }");
}

#[test]
fn error_display() {
    let error = Error::new(ErrorKind::OutOfRange, ());
    assert_eq!(error.to_string(), "index out of range");
    assert_eq!(
        ErrorKind::LengthError.to_string(),
        "invalid collection length"
    );

    let error: Box<dyn std::error::Error> =
        Box::new(Error::new(ErrorKind::OutOfMemory, (1u8,)));
    assert_eq!(error.to_string(), "memory allocation failed");
}

#[test]
fn memory_routines_reject_null() {
    unsafe {
        let mut bytes = [0u8; 4];
        let valid = bytes.as_mut_ptr();
        let null = ptr::null_mut::<u8>();

        for result in &[
            memory::memory_zero(null, 4),
            memory::memory_set(null, 1, 4),
            memory::memory_copy(null, valid, 4),
            memory::memory_copy(valid, null, 4),
            memory::memory_move(valid, null, 4),
            memory::destruct_array(ptr::null_mut::<String>(), 1),
            memory::construct_object(ptr::null_mut::<u32>()),
            memory::copy_construct_array(null, valid, 4),
        ] {
            assert_eq!(
                result.as_ref().unwrap_err().kind(),
                ErrorKind::InvalidArgument
            );
        }

        let error = memory::memory_compare(null, valid, 4).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);

        let error = memory::move_construct_object(
            ptr::null_mut::<String>(),
            String::from("kept"),
        )
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.unwrap_args(), "kept");
    }
}

#[test]
fn memory_routines_manage_elements() {
    unsafe {
        let first = [1u8, 2, 3, 4];
        let mut second = [0u8; 4];
        memory::memory_copy(second.as_mut_ptr(), first.as_ptr(), 4).unwrap();
        assert!(memory::memory_compare(first.as_ptr(), second.as_ptr(), 4)
            .unwrap());
        memory::memory_zero(second.as_mut_ptr(), 2).unwrap();
        assert_eq!(second, [0, 0, 3, 4]);
        assert!(!memory::memory_compare(first.as_ptr(), second.as_ptr(), 4)
            .unwrap());

        let mut trivial = [0xDEAD_BEEFu32; 3];
        memory::destruct_array(trivial.as_mut_ptr(), 2).unwrap();
        assert_eq!(trivial, [0, 0, 0xDEAD_BEEF]);

        let mut slots = [0u32; 3];
        memory::construct_array(slots.as_mut_ptr(), 3).unwrap();
        assert_eq!(slots, [0, 0, 0]);

        let live = Rc::new(Cell::new(0));
        let source = [Tracked::new(1, &live), Tracked::new(2, &live)];
        let mut copies = core::mem::MaybeUninit::<[Tracked; 2]>::uninit();
        let copies_ptr = copies.as_mut_ptr() as *mut Tracked;
        memory::copy_construct_array(copies_ptr, source.as_ptr(), 2).unwrap();
        assert_eq!(live.get(), 4);
        memory::destruct_object(copies_ptr).unwrap();
        assert_eq!(live.get(), 3);
        memory::destruct_object(copies_ptr.add(1)).unwrap();
        assert_eq!(live.get(), 2);

        let mut moved = core::mem::MaybeUninit::<[Tracked; 2]>::uninit();
        let moved_ptr = moved.as_mut_ptr() as *mut Tracked;
        let source = core::mem::ManuallyDrop::new(source);
        memory::move_construct_array(moved_ptr, source.as_ptr(), 2).unwrap();
        let moved = moved.assume_init();
        assert_eq!(moved[1].value, 2);
        drop(moved);
        assert_eq!(live.get(), 0);
    }

    assert!(memory::is_trivial::<u64>());
    assert!(!memory::is_trivial::<Tracked>());
}

#[test]
fn heap_allocation_requests() {
    let heap = HeapAllocation::new();

    let error = heap.allocate(0, 8).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    let error = heap.allocate(8, 3).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    let error = heap.allocate(usize::MAX, 8).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Overflow);
    assert_eq!(heap.allocation_count(), 0);

    unsafe {
        let block = heap.callocate(16, 0xAB, 8).unwrap();
        assert_eq!(block as usize % 8, 0);
        assert_eq!(heap.allocated_bytes(), 16);
        assert!((0..16).all(|i| *block.add(i) == 0xAB));

        let block = heap.reallocate(block, 16, 64, 8).unwrap();
        assert!((0..16).all(|i| *block.add(i) == 0xAB));
        assert_eq!(heap.allocated_bytes(), 64);
        assert_eq!(heap.allocation_count(), 1);

        heap.deallocate(block, 64, 8);
        heap.deallocate(ptr::null_mut(), 64, 8);
    }
    assert_eq!(heap.allocated_bytes(), 0);
    assert_eq!(heap.allocation_count(), 0);

    let block = heap.callocate(4, 0, 4).unwrap();
    heap.reset();
    assert_eq!(heap.allocated_bytes(), 0);
    unsafe {
        assert_eq!(*(block as *const u32), 0);
        heap.deallocate(block, 4, 4);
    }
}

#[test]
fn no_allocation_provides_nothing() {
    let policy = NoAllocation;
    assert!(policy.allocate(16, 8).unwrap().is_null());
    assert!(policy.callocate(16, 1, 8).unwrap().is_null());
    unsafe {
        let block = policy.reallocate(ptr::null_mut(), 0, 16, 8).unwrap();
        assert!(block.is_null());
        policy.deallocate(ptr::null_mut(), 16, 8);
    }
}

#[test]
fn cursor_arithmetic() {
    let mut data = [10u32, 20, 30, 40];
    let begin = Cursor::new(data.as_mut_ptr());
    let mut cursor = begin;

    assert_eq!(unsafe { *cursor.post_increment().get() }, 10);
    assert_eq!(unsafe { *cursor.get() }, 20);
    cursor += 2;
    assert_eq!(unsafe { *cursor.get() }, 40);
    assert_eq!(cursor - begin, 3);
    assert_eq!(begin - cursor, -3);
    assert!(begin < cursor);

    cursor.decrement();
    assert_eq!(cursor, begin + 2);
    assert_eq!(cursor.post_decrement(), begin + 2);
    assert_eq!(cursor, begin + 1);
    cursor -= 1;
    assert_eq!(cursor, begin);
    cursor.increment().increment();
    assert_eq!(cursor - 2, begin);

    unsafe {
        *cursor.get_mut() = 31;
    }
    assert_eq!(data[2], 31);

    let mut source = begin;
    let copied = source;
    let moved = source.take();
    assert!(source.is_null());
    assert_eq!(moved, copied);
    assert_eq!(Cursor::<u32>::default(), Cursor::null());

    let zero_sized = Cursor::new(ptr::NonNull::<()>::dangling().as_ptr());
    assert_eq!((zero_sized + 5) - zero_sized, 5);
    assert_ne!(zero_sized + 1, zero_sized);
    let mut moving = zero_sized;
    moving += 3;
    moving -= 1;
    assert_eq!(moving - zero_sized, 2);
}

#[derive(Clone, Debug)]
enum Operation {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Insert(usize, i32),
    InsertRange(usize, Vec<i32>),
    Remove(usize),
    RemoveRange(usize, usize),
    Assign(usize, i32),
    Clear,
    Reserve(usize),
    Compact,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i32>().prop_map(Operation::PushBack),
        any::<i32>().prop_map(Operation::PushFront),
        Just(Operation::PopBack),
        Just(Operation::PopFront),
        (0usize..12, any::<i32>()).prop_map(|(i, x)| Operation::Insert(i, x)),
        (0usize..12, prop::collection::vec(any::<i32>(), 0..5))
            .prop_map(|(i, x)| Operation::InsertRange(i, x)),
        (0usize..12).prop_map(Operation::Remove),
        (0usize..12, 0usize..12)
            .prop_map(|(a, b)| Operation::RemoveRange(a, b)),
        (0usize..12, any::<i32>()).prop_map(|(i, x)| Operation::Assign(i, x)),
        Just(Operation::Clear),
        (0usize..24).prop_map(Operation::Reserve),
        Just(Operation::Compact),
    ]
}

// Expected error (if any) for an operation on a model of `len` elements with
// room for `capacity` elements.
fn expected_error(
    op: &Operation,
    len: usize,
    capacity: Option<usize>,
) -> Option<ErrorKind> {
    let full = capacity.map_or(false, |capacity| len == capacity);
    let fits = |extra: usize| capacity.map_or(true, |c| len + extra <= c);
    match *op {
        Operation::PushBack(_) | Operation::PushFront(_) if full => {
            Some(ErrorKind::LengthError)
        }
        Operation::PopBack | Operation::PopFront if len == 0 => {
            Some(ErrorKind::LengthError)
        }
        Operation::Insert(..) | Operation::InsertRange(..) if full => {
            Some(ErrorKind::LengthError)
        }
        Operation::Insert(i, _) | Operation::InsertRange(i, _) if i >= len => {
            Some(ErrorKind::OutOfRange)
        }
        Operation::InsertRange(_, ref values) if !fits(values.len()) => {
            Some(ErrorKind::LengthError)
        }
        Operation::Remove(_)
        | Operation::Assign(..)
        | Operation::RemoveRange(..)
            if len == 0 =>
        {
            Some(ErrorKind::LengthError)
        }
        Operation::Remove(i) | Operation::Assign(i, _) if i >= len => {
            Some(ErrorKind::OutOfRange)
        }
        Operation::RemoveRange(a, b) if a >= len || b > len || a > b => {
            Some(ErrorKind::OutOfRange)
        }
        _ => None,
    }
}

fn apply<C>(collection: &mut C, op: &Operation) -> Result<(), ErrorKind>
where
    C: SequencedCollection<Element = i32>,
{
    match *op {
        Operation::PushBack(x) => {
            collection.push_back(x).map_err(|e| e.kind())
        }
        Operation::PushFront(x) => {
            collection.push_front(x).map_err(|e| e.kind())
        }
        Operation::PopBack => {
            collection.pop_back().map(|_| ()).map_err(|e| e.kind())
        }
        Operation::PopFront => {
            collection.pop_front().map(|_| ()).map_err(|e| e.kind())
        }
        Operation::Insert(i, x) => {
            collection.insert(i, x).map_err(|e| e.kind())
        }
        Operation::InsertRange(i, ref values) => {
            collection.insert_range(i, values).map_err(|e| e.kind())
        }
        Operation::Remove(i) => {
            collection.remove(i).map(|_| ()).map_err(|e| e.kind())
        }
        Operation::RemoveRange(a, b) => {
            let begin = collection.begin_cursor();
            collection
                .remove_range(begin + a, begin + b)
                .map_err(|e| e.kind())
        }
        Operation::Assign(i, x) => {
            collection.assign(i, x).map(|_| ()).map_err(|e| e.kind())
        }
        Operation::Clear => {
            collection.clear();
            Ok(())
        }
        Operation::Reserve(_) | Operation::Compact => Ok(()),
    }
}

proptest! {
    #[test]
    fn dynamic_array_matches_vec(
        ops in prop::collection::vec(operation(), 0..64)
    ) {
        let heap = HeapAllocation::new();
        {
            let mut array = DynamicArray::<i32>::new_in(&heap);
            let mut model: Vec<i32> = Vec::new();

            for op in &ops {
                let expected = expected_error(op, model.len(), None);
                let result = match *op {
                    Operation::Reserve(capacity) => {
                        model.truncate(capacity);
                        let result =
                            array.reserve(capacity).map_err(|e| e.kind());
                        prop_assert_eq!(array.capacity(), capacity);
                        result
                    }
                    Operation::Compact => {
                        array.compact().map_err(|e| e.kind())
                    }
                    _ => apply(&mut array, op),
                };
                prop_assert_eq!(result.err(), expected);

                if expected.is_none() {
                    match *op {
                        Operation::PushBack(x) => model.push(x),
                        Operation::PushFront(x) => model.insert(0, x),
                        Operation::PopBack => { model.pop(); }
                        Operation::PopFront => { model.remove(0); }
                        Operation::Insert(i, x) => model.insert(i, x),
                        Operation::InsertRange(i, ref values) => {
                            model.splice(i..i, values.iter().copied());
                        }
                        Operation::Remove(i) => { model.remove(i); }
                        Operation::RemoveRange(a, b) => { model.drain(a..b); }
                        Operation::Assign(i, x) => model[i] = x,
                        Operation::Clear => model.clear(),
                        Operation::Reserve(_) | Operation::Compact => {}
                    }
                }

                prop_assert!(array.count() <= array.capacity());
                prop_assert_eq!(array.as_slice(), &model[..]);
                prop_assert_eq!(
                    heap.allocated_bytes(),
                    array.capacity() * size_of::<i32>()
                );
            }
        }
        prop_assert_eq!(heap.allocated_bytes(), 0);
    }

    #[test]
    fn static_array_matches_arrayvec(
        ops in prop::collection::vec(operation(), 0..64)
    ) {
        let mut array = StaticArray::<i32, 8>::new();
        let mut model = ArrayVec::<i32, 8>::new();

        for op in &ops {
            let expected = expected_error(op, model.len(), Some(8));
            prop_assert_eq!(apply(&mut array, op).err(), expected);

            if expected.is_none() {
                match *op {
                    Operation::PushBack(x) => model.push(x),
                    Operation::PushFront(x) => model.insert(0, x),
                    Operation::PopBack => { model.pop(); }
                    Operation::PopFront => { model.remove(0); }
                    Operation::Insert(i, x) => model.insert(i, x),
                    Operation::InsertRange(i, ref values) => {
                        for (offset, &x) in values.iter().enumerate() {
                            model.insert(i + offset, x);
                        }
                    }
                    Operation::Remove(i) => { model.remove(i); }
                    Operation::RemoveRange(a, b) => { model.drain(a..b); }
                    Operation::Assign(i, x) => model[i] = x,
                    Operation::Clear => model.clear(),
                    Operation::Reserve(_) | Operation::Compact => {}
                }
            }

            prop_assert_eq!(array.capacity(), 8);
            prop_assert_eq!(array.is_full(), model.is_full());
            prop_assert_eq!(array.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn queue_and_stack_order(
        values in prop::collection::vec(any::<i32>(), 1..16)
    ) {
        let mut queue = StaticQueue::<i32, 16>::new();
        let mut stack = StaticStack::<i32, 16>::new();
        for &value in &values {
            queue.push(value).unwrap();
            stack.push(value).unwrap();
        }

        let mut from_queue = Vec::new();
        while let Ok(value) = queue.pop() {
            from_queue.push(value);
        }
        let mut from_stack = Vec::new();
        while let Ok(value) = stack.pop() {
            from_stack.push(value);
        }
        from_stack.reverse();

        prop_assert_eq!(&from_queue, &values);
        prop_assert_eq!(&from_stack, &values);
    }
}
