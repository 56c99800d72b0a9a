//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects
//! and may fail. Side effects are not executed until [`IO::run`] is
//! called, maintaining referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Execution
//! happens only via `run`, which should be called at the program's "edge"
//! (e.g., in the `main` function). Failure is a value, not an unwinding:
//! `run` returns `Result<A, EffectError>`, failures short-circuit through
//! combinator chains, and [`IO::safe_run`] captures a failure as an
//! [`Either`] for callers that want to branch instead of propagating.
//!
//! An `IO` is re-runnable: the same instance can be executed any number of
//! times, and each run re-executes the underlying side effect. Nothing is
//! memoized.
//!
//! # Examples
//!
//! ```rust
//! use iolite::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::pure(42);
//! assert_eq!(io.run(), Ok(42));
//!
//! // Chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run(), Ok(21));
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use iolite::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let observer = executed.clone();
//!
//! let io = IO::new(move || {
//!     observer.set(true);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.get());
//!
//! // Execute the IO action
//! assert_eq!(io.run(), Ok(42));
//! assert!(executed.get());
//! ```

use std::rc::Rc;

use crate::control::Either;

use super::error::{EffectError, TryFailure};

/// A monad representing deferred, possibly-failing side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until `run` is
/// called, and running it again re-executes the side effect: an `IO`
/// carries no internal mutable state and memoizes nothing. Its identity is
/// the captured closure and environment.
///
/// Cloning an `IO` is cheap; the clone shares the same description of the
/// computation. The wrapped closure is reference-counted with `Rc`, so
/// `IO` values are deliberately neither `Send` nor `Sync`: execution is
/// single-threaded and single-owner by design.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the IO action.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws, observed by comparing run results:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    /// The wrapped computation producing a value of type `A` or a failure.
    run_io: Rc<dyn Fn() -> Result<A, EffectError>>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("IO").field(&"<deferred>").finish()
    }
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from an infallible closure.
    ///
    /// The closure will not be executed until `run` is called.
    ///
    /// # Arguments
    ///
    /// * `action` - A closure that produces a value of type `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// assert_eq!(io.run(), Ok(42));
    /// // Now "Side effect!" is printed
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(move || Ok(action())),
        }
    }

    /// Creates a new IO action from a fallible closure.
    ///
    /// Like [`IO::new`], but the closure decides success or failure each
    /// run. This is the constructor the combinators and adapters build on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::{EffectError, IO};
    ///
    /// let io: IO<i32> = IO::suspend(|| Err(EffectError::raised("broken")));
    /// assert_eq!(io.run(), Err(EffectError::raised("broken")));
    /// ```
    pub fn suspend<F>(action: F) -> Self
    where
        F: Fn() -> Result<A, EffectError> + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// This creates an IO action that returns the given value without
    /// performing any side effects. The value must be `Clone` because the
    /// action can be run more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run(), Ok(42));
    /// assert_eq!(io.run(), Ok(42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Creates an IO action that always fails with the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::{EffectError, IO};
    ///
    /// let io: IO<i32> = IO::fail(EffectError::raised("OoO"));
    /// assert_eq!(io.run(), Err(EffectError::raised("OoO")));
    /// ```
    pub fn fail(error: EffectError) -> Self {
        Self::suspend(move || Err(error.clone()))
    }

    /// Executes the IO action, producing its value or its failure.
    ///
    /// This is the only way side effects actually happen. Running the same
    /// instance again re-executes the underlying side effect; nothing is
    /// cached between runs.
    ///
    /// # Errors
    ///
    /// Returns the failure the wrapped computation produced, propagated
    /// through however many combinators the action was composed from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run(), Ok(42));
    /// ```
    pub fn run(&self) -> Result<A, EffectError> {
        (self.run_io)()
    }

    /// Executes the IO action, capturing failure as a value.
    ///
    /// Where [`run`](Self::run) is meant to be propagated with `?`,
    /// `safe_run` is the explicit opt-in capture: the failure lands on the
    /// left of an [`Either`] so the caller can branch on the outcome
    /// without aborting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::control::Either;
    /// use iolite::effect::{EffectError, IO};
    ///
    /// let success = IO::pure(42);
    /// assert_eq!(success.safe_run(), Either::Right(42));
    ///
    /// let failure: IO<i32> = IO::fail(EffectError::raised("OoO"));
    /// assert!(failure.safe_run().is_left());
    /// ```
    pub fn safe_run(&self) -> Either<EffectError, A> {
        self.run().into()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// This is the `fmap` operation from Functor. The function is applied
    /// lazily at run time, never at construction; a failure skips it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run(), Ok(42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::suspend(move || {
            let value = self.run()?;
            Ok(function(value))
        })
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// This is the `bind` operation from Monad and the sole sequencing
    /// primitive; every other sequencing combinator in this crate derives
    /// from it. A failure in either step short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run(), Ok(20));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::suspend(move || {
            let value = self.run()?;
            function(value).run()
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(10).and_then(|x| IO::pure(x + 5));
    /// assert_eq!(io.run(), Ok(15));
    /// ```
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run(), Ok(20));
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two IO actions using a function.
    ///
    /// Both actions run, left first, and their results are combined; the
    /// first failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run(), Ok(30));
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::suspend(move || {
            let left = self.run()?;
            let right = other.run()?;
            Ok(function(left, right))
        })
    }

    /// Combines two IO actions into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::IO;
    ///
    /// let io = IO::pure(10).product(IO::pure("hello"));
    /// assert_eq!(io.run(), Ok((10, "hello")));
    /// ```
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl IO<()> {
    /// Adapts a failable procedure into an IO action.
    ///
    /// The procedure reports failure through its return value; a failure
    /// is wrapped in a [`TryFailure`] carrying the original message
    /// verbatim, so callers can match on the adapted kind while reading
    /// the message unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iolite::effect::{EffectError, IO};
    ///
    /// let succeeding = IO::from_failable(|| Ok::<(), String>(()));
    /// assert_eq!(succeeding.run(), Ok(()));
    ///
    /// let failing = IO::from_failable(|| Err("failure".to_string()));
    /// match failing.run() {
    ///     Err(EffectError::Try(wrapped)) => assert_eq!(wrapped.message, "failure"),
    ///     other => panic!("expected an adapted failure, got {other:?}"),
    /// }
    /// ```
    pub fn from_failable<F, E>(procedure: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'static,
        E: std::fmt::Display,
    {
        Self::suspend(move || {
            procedure().map_err(|error| EffectError::Try(TryFailure::new(error.to_string())))
        })
    }
}
