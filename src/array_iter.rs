// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Consuming iterator for sequenced collections.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use super::memory;
use super::SequencedCollection;

/// Consuming iterator for sequenced collections.
///
/// The source collection is emptied up front, so its storage is released
/// normally once the iterator is dropped. Elements that were never yielded
/// are dropped along with the iterator.
///
/// # Examples
///
/// ```
/// use seqarray::dynamic_array;
///
/// let array = dynamic_array![String::from("a"), String::from("b")].unwrap();
/// let mut iter = array.into_iter();
///
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.next_back().as_deref(), Some("b"));
/// assert_eq!(iter.next().as_deref(), Some("a"));
/// assert_eq!(iter.next(), None);
/// ```
pub struct IntoIter<C>
where
    C: SequencedCollection,
{
    /// Source collection being consumed, with its count cleared.
    source: C,
    /// Index of the next element to yield from the front.
    index: usize,
    /// One past the index of the next element to yield from the back.
    end: usize,
}

impl<C> IntoIter<C>
where
    C: SequencedCollection,
{
    /// Creates a new iterator consuming all elements in the given
    /// collection.
    pub fn new(mut source: C) -> Self {
        let end = source.count();
        unsafe {
            source.set_count(0);
        }

        IntoIter {
            source,
            index: 0,
            end,
        }
    }

    /// Returns a slice of the elements that have not been yielded yet.
    #[inline]
    pub fn as_slice(&self) -> &[C::Element] {
        unsafe {
            slice::from_raw_parts(
                self.source.as_ptr().add(self.index),
                self.end - self.index,
            )
        }
    }
}

impl<C> Iterator for IntoIter<C>
where
    C: SequencedCollection,
{
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.end {
            let index = self.index;
            self.index = index + 1;

            Some(unsafe { self.source.as_ptr().add(index).read() })
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<C> DoubleEndedIterator for IntoIter<C>
where
    C: SequencedCollection,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index < self.end {
            self.end -= 1;

            Some(unsafe { self.source.as_ptr().add(self.end).read() })
        } else {
            None
        }
    }
}

impl<C> ExactSizeIterator for IntoIter<C> where C: SequencedCollection {}

impl<C> FusedIterator for IntoIter<C> where C: SequencedCollection {}

impl<C> fmt::Debug for IntoIter<C>
where
    C: SequencedCollection,
    C::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<C> Drop for IntoIter<C>
where
    C: SequencedCollection,
{
    fn drop(&mut self) {
        // Drop all unconsumed elements; the source releases its storage.
        let remaining = self.end - self.index;
        unsafe {
            let start = self.source.as_mut_ptr().add(self.index);
            memory::destruct_range(start, remaining);
        }
    }
}
