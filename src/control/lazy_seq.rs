//! Lazy, possibly-infinite cons sequences.
//!
//! This module provides [`LazySeq`], an ordered sequence whose tail is a
//! deferred computation. Elements are produced on demand as the consumer
//! forces each tail, so a sequence may be infinite; finite sequences
//! terminate in an empty tail.
//!
//! Forcing a tail may fail: effect-backed sequences (such as the result of
//! sequencing deferred effects) run one deferred computation per forced
//! cell, and that computation can fail. Tails therefore return
//! `Result<LazySeq<T, E>, E>`, and the draining helpers ([`collect`],
//! [`for_each`]) surface the first failure as a value. Purely-built
//! sequences never fail to force.
//!
//! Consumption is left-to-right and by value: decomposing a sequence with
//! [`uncons`] consumes it. A sequence is restartable only by rebuilding it
//! from a pure generator; effect-backed sources make no such guarantee.
//!
//! [`collect`]: LazySeq::collect
//! [`for_each`]: LazySeq::for_each
//! [`uncons`]: LazySeq::uncons
//!
//! # Examples
//!
//! ```rust
//! use iolite::control::LazySeq;
//!
//! let seq: LazySeq<i32, String> = LazySeq::from_vec(vec![1, 2, 3]);
//! let doubled = seq.map(|x| x * 2);
//! assert_eq!(doubled.collect(), Ok(vec![2, 4, 6]));
//! ```
//!
//! ```rust
//! use iolite::control::LazySeq;
//!
//! // Infinite sequence; only the forced prefix is ever produced
//! let naturals: LazySeq<u64, String> = {
//!     fn from(n: u64) -> LazySeq<u64, String> {
//!         LazySeq::cons(n, move || Ok(from(n + 1)))
//!     }
//!     from(0)
//! };
//! assert_eq!(naturals.take(4).collect(), Ok(vec![0, 1, 2, 3]));
//! ```

use std::fmt;
use std::rc::Rc;

/// The deferred tail of a [`LazySeq`] cell.
///
/// Invoking the thunk produces the rest of the sequence, or fails if the
/// deferred work backing the next cell fails.
pub type Tail<T, E> = Box<dyn FnOnce() -> Result<LazySeq<T, E>, E>>;

/// An ordered, possibly-infinite lazy sequence.
///
/// A `LazySeq` is either empty ([`Nil`]) or a head element followed by a
/// deferred tail ([`Cons`]). The tail is not computed until forced, which
/// is what allows infinite sequences and on-demand element production.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `E` - The error type surfaced when forcing a tail fails
///
/// # Time Complexity
///
/// | Operation | Complexity        |
/// |-----------|-------------------|
/// | `cons`    | O(1)              |
/// | `uncons`  | O(1)              |
/// | `map`     | O(1), lazy        |
/// | `take`    | O(1), lazy        |
/// | `collect` | O(n), iterative   |
///
/// [`Nil`]: LazySeq::Nil
/// [`Cons`]: LazySeq::Cons
pub enum LazySeq<T, E> {
    /// The empty sequence.
    Nil,
    /// A head element followed by a deferred tail.
    Cons(T, Tail<T, E>),
}

impl<T: 'static, E: 'static> LazySeq<T, E> {
    /// Creates the empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<i32, String> = LazySeq::empty();
    /// assert!(seq.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::Nil
    }

    /// Prepends an element onto a deferred rest-of-sequence.
    ///
    /// The tail thunk is not invoked until the resulting sequence is
    /// consumed past the head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<i32, String> =
    ///     LazySeq::cons(1, || Ok(LazySeq::cons(2, || Ok(LazySeq::empty()))));
    /// assert_eq!(seq.collect(), Ok(vec![1, 2]));
    /// ```
    #[inline]
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Result<Self, E> + 'static,
    {
        Self::Cons(head, Box::new(tail))
    }

    /// Creates a one-element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<&str, String> = LazySeq::singleton("only");
    /// assert_eq!(seq.collect(), Ok(vec!["only"]));
    /// ```
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self::cons(value, || Ok(Self::Nil))
    }

    /// Builds a finite sequence from a vector, preserving order.
    ///
    /// The cells unfold lazily, though the elements themselves already
    /// exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<i32, String> = LazySeq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.collect(), Ok(vec![1, 2, 3]));
    /// ```
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_iterator(values.into_iter())
    }

    fn from_iterator<I>(mut iterator: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        match iterator.next() {
            None => Self::Nil,
            Some(head) => Self::cons(head, move || Ok(Self::from_iterator(iterator))),
        }
    }

    /// Creates an infinite sequence repeating a cloneable value.
    ///
    /// Each forced cell yields a fresh clone of the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<&str, String> = LazySeq::repeat("again");
    /// assert_eq!(seq.take(3).collect(), Ok(vec!["again", "again", "again"]));
    /// ```
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        let next = value.clone();
        Self::cons(value, move || Ok(Self::repeat(next)))
    }

    /// Creates an infinite sequence whose elements are produced by a
    /// generator.
    ///
    /// The generator runs once per materialized cell, as the sequence
    /// unfolds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let counter = Rc::new(Cell::new(0));
    /// let generator_counter = counter.clone();
    /// let seq: LazySeq<i32, String> = LazySeq::repeat_with(move || {
    ///     generator_counter.set(generator_counter.get() + 1);
    ///     generator_counter.get()
    /// });
    /// assert_eq!(seq.take(3).collect(), Ok(vec![1, 2, 3]));
    /// ```
    pub fn repeat_with<G>(generator: G) -> Self
    where
        G: Fn() -> T + 'static,
    {
        Self::unfold_with(Rc::new(generator))
    }

    fn unfold_with(generator: Rc<dyn Fn() -> T>) -> Self {
        let head = generator();
        Self::cons(head, move || Ok(Self::unfold_with(generator)))
    }

    /// Returns `true` if this is the empty sequence.
    ///
    /// Does not force any tail.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Decomposes the sequence into its head and deferred tail.
    ///
    /// Returns `None` for the empty sequence. The returned tail thunk has
    /// not been forced; invoking it produces the rest of the sequence or
    /// the failure raised while producing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<i32, String> = LazySeq::from_vec(vec![1, 2]);
    /// let (head, tail) = seq.uncons().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(tail().unwrap().collect(), Ok(vec![2]));
    /// ```
    #[inline]
    pub fn uncons(self) -> Option<(T, Tail<T, E>)> {
        match self {
            Self::Nil => None,
            Self::Cons(head, tail) => Some((head, tail)),
        }
    }

    /// Keeps at most the first `count` elements, lazily.
    ///
    /// No tail is forced by calling `take` itself; truncation happens as
    /// the consumer forces cells.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<i32, String> = LazySeq::repeat(7);
    /// assert_eq!(seq.take(2).collect(), Ok(vec![7, 7]));
    /// ```
    pub fn take(self, count: usize) -> Self {
        if count == 0 {
            return Self::Nil;
        }
        match self {
            Self::Nil => Self::Nil,
            Self::Cons(head, tail) => Self::cons(head, move || Ok(tail()?.take(count - 1))),
        }
    }

    /// Transforms each element with a function, lazily.
    ///
    /// The function is applied to each element as its cell materializes;
    /// un-forced cells are never mapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::LazySeq;
    ///
    /// let seq: LazySeq<i32, String> = LazySeq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.map(|x| x * 10).collect(), Ok(vec![10, 20, 30]));
    /// ```
    pub fn map<U, F>(self, function: F) -> LazySeq<U, E>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        self.map_shared(Rc::new(function))
    }

    fn map_shared<U: 'static>(self, function: Rc<dyn Fn(T) -> U>) -> LazySeq<U, E> {
        match self {
            Self::Nil => LazySeq::Nil,
            Self::Cons(head, tail) => {
                let mapped = function(head);
                LazySeq::cons(mapped, move || Ok(tail()?.map_shared(function)))
            }
        }
    }

    /// Drains the sequence left-to-right into a vector.
    ///
    /// Forces every tail in order; the first forcing failure is returned
    /// and consumption stops. The drain is an iterative loop, so stack use
    /// is constant in the sequence length.
    ///
    /// Does not terminate on an infinite sequence.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while forcing a tail.
    pub fn collect(self) -> Result<Vec<T>, E> {
        let mut values = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Nil => return Ok(values),
                Self::Cons(head, tail) => {
                    values.push(head);
                    current = tail()?;
                }
            }
        }
    }

    /// Applies an action to each element, left-to-right.
    ///
    /// Forces every tail in order with constant stack use, like
    /// [`collect`](Self::collect). Does not terminate on an infinite
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while forcing a tail.
    pub fn for_each<F>(self, mut action: F) -> Result<(), E>
    where
        F: FnMut(T),
    {
        let mut current = self;
        loop {
            match current {
                Self::Nil => return Ok(()),
                Self::Cons(head, tail) => {
                    action(head);
                    current = tail()?;
                }
            }
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for LazySeq<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("LazySeq::Nil"),
            Self::Cons(head, _) => formatter
                .debug_tuple("LazySeq::Cons")
                .field(head)
                .field(&"<deferred>")
                .finish(),
        }
    }
}
