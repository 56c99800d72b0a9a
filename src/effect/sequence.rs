//! Sequencing and traversal of deferred effects.
//!
//! This module lifts a lazy sequence of [`IO`] actions (or a per-element
//! effect-producing function) into a single deferred effect producing a
//! lazy sequence of results, preserving input order and laziness.
//!
//! Running the lifted effect executes the first element's action; each
//! further element's action runs only when the consumer forces the
//! corresponding tail of the result sequence. Side effects therefore
//! happen in whatever order the consumer forces elements, which for an
//! eager left-to-right drain is simply input order. Each forced tail
//! performs exactly one element step, and draining is an iterative loop,
//! so stack use stays constant in the sequence length.
//!
//! # Examples
//!
//! ```rust
//! use iolite::control::LazySeq;
//! use iolite::effect::{sequence, IO};
//!
//! let actions = LazySeq::from_vec(vec![IO::pure(1), IO::pure(2), IO::pure(3)]);
//! let lifted = sequence(actions);
//!
//! let results = lifted.run().unwrap();
//! assert_eq!(results.collect(), Ok(vec![1, 2, 3]));
//! ```

use std::rc::Rc;

use crate::control::LazySeq;

use super::error::EffectError;
use super::IO;

/// A lazy sequence of effect results, as produced by [`sequence`] and
/// [`traverse`].
///
/// Forcing a tail runs the next element's deferred effect, so forcing can
/// fail with that effect's failure.
pub type EffectSeq<T> = LazySeq<T, EffectError>;

/// Lifts a lazy sequence of IO actions into one IO action producing a
/// lazy sequence of results.
///
/// Element actions run left-to-right in forcing order: running the
/// returned effect runs the first element's action; forcing each tail of
/// the result runs the next one. Un-forced elements never run.
///
/// The input sequence is consumed by the first run, because its tails are
/// one-shot thunks. Running the returned action a second time fails with
/// a raised "sequence already consumed" error rather than replaying
/// effects that no longer exist.
///
/// # Examples
///
/// ```rust
/// use iolite::control::LazySeq;
/// use iolite::effect::{sequence, IO};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let executed = Rc::new(Cell::new(0));
/// let count_runs = |value: i32| {
///     let executed = executed.clone();
///     IO::new(move || {
///         executed.set(executed.get() + 1);
///         value
///     })
/// };
///
/// let lifted = sequence(LazySeq::from_vec(vec![count_runs(1), count_runs(2)]));
/// assert_eq!(executed.get(), 0); // nothing ran at construction
///
/// let results = lifted.run().unwrap();
/// assert_eq!(executed.get(), 1); // running the outer effect ran the first
/// assert_eq!(results.collect(), Ok(vec![1, 2]));
/// assert_eq!(executed.get(), 2); // draining ran the rest
/// ```
pub fn sequence<T: 'static>(actions: LazySeq<IO<T>, EffectError>) -> IO<EffectSeq<T>> {
    let cell = Rc::new(std::cell::RefCell::new(Some(actions)));
    IO::suspend(move || {
        let actions = cell
            .borrow_mut()
            .take()
            .ok_or_else(|| EffectError::raised("sequence already consumed"))?;
        step(actions)
    })
}

fn step<T: 'static>(actions: LazySeq<IO<T>, EffectError>) -> Result<EffectSeq<T>, EffectError> {
    match actions.uncons() {
        None => Ok(LazySeq::empty()),
        Some((action, rest)) => {
            let value = action.run()?;
            Ok(LazySeq::cons(value, move || step(rest()?)))
        }
    }
}

/// Applies an effect-producing function to each element of a lazy
/// sequence, then sequences the results.
///
/// Derived as `sequence(elements.map(function))`: the function is applied
/// element-wise as cells materialize, and the produced actions run in
/// forcing order like [`sequence`].
///
/// # Examples
///
/// ```rust
/// use iolite::control::LazySeq;
/// use iolite::effect::{traverse, IO};
///
/// let elements = LazySeq::from_vec(vec!["foo1", "bar2", "foobar3"]);
/// let lifted = traverse(elements, |s| IO::pure(s.len()));
///
/// assert_eq!(lifted.run().unwrap().collect(), Ok(vec![4, 4, 7]));
/// ```
pub fn traverse<A, B, F>(elements: LazySeq<A, EffectError>, function: F) -> IO<EffectSeq<B>>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> IO<B> + 'static,
{
    sequence(elements.map(function))
}

/// Runs element actions left-to-right while their results satisfy a
/// predicate, including the first failing element.
///
/// Each element's action runs and its result is appended to the output;
/// as soon as a result fails the predicate, that result is still included
/// and no further element runs. This is how a source is read up to and
/// including a terminator.
///
/// Does not terminate on an infinite sequence whose results always
/// satisfy the predicate; it is a plain left-to-right consuming loop.
/// Like [`sequence`], the input sequence is consumed by the first run.
///
/// # Examples
///
/// ```rust
/// use iolite::control::LazySeq;
/// use iolite::effect::{sequence_while, IO};
///
/// let actions = LazySeq::from_vec(vec![
///     IO::pure("foo1"),
///     IO::pure("bar2"),
///     IO::pure("foobar3"),
///     IO::pure("never run"),
/// ]);
/// let lifted = sequence_while(actions, |s| *s != "foobar3");
///
/// let results = lifted.run().unwrap();
/// assert_eq!(results.collect(), Ok(vec!["foo1", "bar2", "foobar3"]));
/// ```
pub fn sequence_while<T, P>(actions: LazySeq<IO<T>, EffectError>, predicate: P) -> IO<EffectSeq<T>>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    let cell = Rc::new(std::cell::RefCell::new(Some(actions)));
    IO::suspend(move || {
        let actions = cell
            .borrow_mut()
            .take()
            .ok_or_else(|| EffectError::raised("sequence already consumed"))?;
        step_while(actions, predicate.clone())
    })
}

fn step_while<T: 'static>(
    actions: LazySeq<IO<T>, EffectError>,
    predicate: Rc<dyn Fn(&T) -> bool>,
) -> Result<EffectSeq<T>, EffectError> {
    match actions.uncons() {
        None => Ok(LazySeq::empty()),
        Some((action, rest)) => {
            let value = action.run()?;
            if predicate(&value) {
                Ok(LazySeq::cons(value, move || {
                    step_while(rest()?, predicate)
                }))
            } else {
                // The element that ended the run is still part of the
                // output; nothing after it is executed.
                Ok(LazySeq::singleton(value))
            }
        }
    }
}

/// Runs the same action `count` times, collecting the results in
/// execution order.
///
/// The action's side effect re-executes on every repetition; nothing is
/// cached between repetitions. A count of zero yields an empty vector
/// without running the action at all.
///
/// # Examples
///
/// ```rust
/// use iolite::effect::{replicate, IO};
///
/// let action = IO::pure("foo");
/// assert_eq!(
///     replicate(&action, 3).run(),
///     Ok(vec!["foo", "foo", "foo"])
/// );
/// assert_eq!(replicate(&action, 0).run(), Ok(vec![]));
/// ```
pub fn replicate<T: 'static>(action: &IO<T>, count: usize) -> IO<Vec<T>> {
    let action = action.clone();
    IO::suspend(move || {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(action.run()?);
        }
        Ok(values)
    })
}
