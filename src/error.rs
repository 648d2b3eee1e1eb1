// Copyright 2018-2026 Theodore Cipicchio
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error support.

use core::fmt;

/// Categories of errors that can occur.
///
/// Every fallible operation in this crate reports exactly one of these
/// categories through an [`Error`] value.
///
/// [`Error`]: struct.Error.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was rejected outright, such as a zero capacity or element
    /// count passed to a constructor, a null address passed to a raw memory
    /// routine, or an invalid allocation request.
    InvalidArgument,
    /// An index or cursor refers to a position outside of the live elements
    /// of a collection.
    OutOfRange,
    /// The collection has too few or too many elements for the operation
    /// (e.g. popping from an empty collection or pushing onto a full
    /// fixed-capacity collection).
    LengthError,
    /// The operation is not supported by the collection in its current
    /// configuration, such as growing a dynamic array whose allocation
    /// policy cannot allocate memory.
    LogicError,
    /// The allocation policy failed to provide the requested memory.
    OutOfMemory,
    /// Integer overflow detected (typically due to a very large capacity or
    /// element size).
    Overflow,
}

impl ErrorKind {
    /// Returns a short description of the error category.
    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "index out of range",
            ErrorKind::LengthError => "invalid collection length",
            ErrorKind::LogicError => {
                "operation not supported by this collection"
            }
            ErrorKind::OutOfMemory => "memory allocation failed",
            ErrorKind::Overflow => "integer overflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrapper for values that could not be consumed by a failed operation.
///
/// Operations that take ownership of their arguments (such as
/// [`push_back()`]) return those arguments back to the caller inside the
/// error so that nothing is lost when the operation fails. The arguments are
/// stored as a tuple, which is empty for operations that don't consume
/// anything.
///
/// # Examples
///
/// ```
/// use seqarray::{ErrorKind, StaticArray};
///
/// let mut array = StaticArray::<String, 1>::new();
/// array.push_back(String::from("first")).unwrap();
///
/// let error = array.push_back(String::from("second")).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::LengthError);
///
/// let (value,) = error.unwrap_args();
/// assert_eq!(value, "second");
/// ```
///
/// [`push_back()`]: trait.SequencedCollection.html#method.push_back
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error<T> {
    /// Error category.
    kind: ErrorKind,
    /// Arguments that were not consumed by the failed operation.
    args: T,
}

impl<T> Error<T> {
    /// Creates a new error with the given category and unconsumed
    /// arguments.
    #[inline]
    pub fn new(kind: ErrorKind, args: T) -> Self {
        Error { kind, args }
    }

    /// Returns the error category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns a reference to the arguments that were not consumed.
    #[inline]
    pub fn args(&self) -> &T {
        &self.args
    }

    /// Consumes the error, returning the arguments that were not consumed.
    #[inline]
    pub fn unwrap_args(self) -> T {
        self.args
    }

    /// Maps the unconsumed arguments to a different value, keeping the error
    /// category.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqarray::{Error, ErrorKind};
    ///
    /// let error = Error::new(ErrorKind::OutOfRange, ());
    /// let error = error.map(|()| (42,));
    /// assert_eq!(error.kind(), ErrorKind::OutOfRange);
    /// assert_eq!(error.args(), &(42,));
    /// ```
    #[inline]
    pub fn map<F, U>(self, op: F) -> Error<U>
    where
        F: FnOnce(T) -> U,
    {
        Error {
            kind: self.kind,
            args: op(self.args),
        }
    }
}

impl<T> fmt::Display for Error<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(feature = "std")]
impl<T> ::std::error::Error for Error<T> where T: fmt::Debug {}
