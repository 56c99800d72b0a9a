//! Control structures for deferred computation.
//!
//! This module provides the data types the effect system composes over:
//!
//! - [`Either`]: a value that is one of two alternatives, used as the
//!   container returned by `IO::safe_run` (failure on the left, success
//!   on the right)
//! - [`LazySeq`]: an ordered, possibly-infinite lazy sequence whose
//!   elements are produced on demand
//!
//! # Examples
//!
//! ```rust
//! use iolite::control::{Either, LazySeq};
//!
//! let outcome: Either<String, i32> = Either::Right(42);
//! assert_eq!(outcome.fold(|_| 0, |n| n), 42);
//!
//! let seq: LazySeq<i32, String> = LazySeq::from_vec(vec![1, 2, 3]);
//! assert_eq!(seq.collect(), Ok(vec![1, 2, 3]));
//! ```

mod either;
mod lazy_seq;

pub use either::Either;
pub use lazy_seq::{LazySeq, Tail};
