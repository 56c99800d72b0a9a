//! Resource-safe execution of effects.
//!
//! This module provides [`bracket`], the acquire/use/release combinator:
//! a resource is acquired, used, and released so that the release action
//! runs on every exit path except a failed acquisition, and so that the
//! diagnostically relevant failure (the one from the work being done) is
//! never masked by a secondary failure during teardown.
//!
//! # Examples
//!
//! ```rust
//! use iolite::effect::{bracket, close_handle, IO};
//! use std::cell::RefCell;
//! use std::io::BufRead;
//! use std::rc::Rc;
//!
//! let handle = Rc::new(RefCell::new(Some(std::io::Cursor::new("Read OK"))));
//!
//! let acquired = handle.clone();
//! let bracketed = bracket(
//!     IO::new(move || acquired.clone()),
//!     close_handle,
//!     |h| {
//!         IO::suspend(move || {
//!             let mut line = String::new();
//!             let mut borrowed = h.borrow_mut();
//!             let reader = borrowed.as_mut().expect("open handle");
//!             reader
//!                 .read_line(&mut line)
//!                 .map_err(|e| iolite::effect::EffectError::raised(e.to_string()))?;
//!             Ok(line)
//!         })
//!     },
//! );
//!
//! assert_eq!(bracketed.run(), Ok("Read OK".to_string()));
//! assert!(handle.borrow().is_none()); // released
//! ```

use super::IO;

/// Acquires a resource, uses it, and guarantees its release.
///
/// Nothing happens at construction; the protocol below runs each time the
/// returned effect is run:
///
/// 1. `acquire` runs to obtain the resource. If it fails, that failure
///    propagates immediately and `release` is never invoked.
/// 2. `use_fn` runs on the resource; its outcome is captured rather than
///    propagated yet.
/// 3. `release` runs on the resource regardless of step 2's outcome, so
///    the resource is released exactly once per run on every path past
///    acquisition.
/// 4. Failure precedence: if `use_fn` failed, that failure is the one the
///    caller sees, and any failure from `release` is suppressed. If
///    `use_fn` succeeded but `release` failed, the release failure
///    propagates. If both succeeded, the use result is returned.
///
/// The resource type must be `Clone` because both the use and the release
/// action need access to it; resources are typically cheap shared handles
/// such as `Rc<RefCell<_>>` (see [`close_handle`](super::close_handle)).
///
/// # Examples
///
/// Use-failure wins over release-failure:
///
/// ```rust
/// use iolite::effect::{bracket, EffectError, IO};
///
/// let bracketed: IO<String> = bracket(
///     IO::pure(()),
///     |()| IO::fail(EffectError::raised("Should be suppressed")),
///     |()| IO::fail(EffectError::raised("OoO")),
/// );
///
/// assert_eq!(bracketed.run(), Err(EffectError::raised("OoO")));
/// ```
pub fn bracket<R, T, Use, Release>(acquire: IO<R>, release: Release, use_fn: Use) -> IO<T>
where
    R: Clone + 'static,
    T: 'static,
    Use: Fn(R) -> IO<T> + 'static,
    Release: Fn(R) -> IO<()> + 'static,
{
    IO::suspend(move || {
        let resource = acquire.run()?;
        let outcome = use_fn(resource.clone()).run();
        let released = release(resource).run();
        match outcome {
            Ok(value) => {
                released?;
                Ok(value)
            }
            // The use failure wins; a release failure on this path is
            // suppressed.
            Err(error) => Err(error),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectError;
    use std::cell::Cell;
    use std::rc::Rc;

    fn release_counter(closed: &Rc<Cell<u32>>) -> impl Fn(()) -> IO<()> + 'static {
        let closed = closed.clone();
        move |()| {
            let closed = closed.clone();
            IO::new(move || closed.set(closed.get() + 1))
        }
    }

    #[test]
    fn test_bracket_happy_path_releases_once() {
        let closed = Rc::new(Cell::new(0));

        let bracketed = bracket(IO::pure(()), release_counter(&closed), |()| {
            IO::pure("Read OK".to_string())
        });

        assert_eq!(bracketed.run(), Ok("Read OK".to_string()));
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_bracket_acquire_failure_skips_release() {
        let closed = Rc::new(Cell::new(0));

        let acquire: IO<()> = IO::fail(EffectError::raised("no resource"));
        let bracketed = bracket(acquire, release_counter(&closed), |()| IO::pure(1));

        assert_eq!(bracketed.run(), Err(EffectError::raised("no resource")));
        assert_eq!(closed.get(), 0);
    }

    #[test]
    fn test_bracket_use_failure_still_releases() {
        let closed = Rc::new(Cell::new(0));

        let bracketed: IO<i32> = bracket(IO::pure(()), release_counter(&closed), |()| {
            IO::fail(EffectError::raised("OoO"))
        });

        assert_eq!(bracketed.run(), Err(EffectError::raised("OoO")));
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_bracket_release_failure_suppressed_by_use_failure() {
        let bracketed: IO<i32> = bracket(
            IO::pure(()),
            |()| IO::fail(EffectError::raised("Should be suppressed")),
            |()| IO::fail(EffectError::raised("OoO")),
        );

        assert_eq!(bracketed.run(), Err(EffectError::raised("OoO")));
    }

    #[test]
    fn test_bracket_release_failure_propagates_after_success() {
        let bracketed = bracket(
            IO::pure(()),
            |()| IO::fail(EffectError::raised("close failed")),
            |()| IO::pure(7),
        );

        assert_eq!(bracketed.run(), Err(EffectError::raised("close failed")));
    }

    #[test]
    fn test_bracket_rerun_releases_each_time() {
        let closed = Rc::new(Cell::new(0));

        let bracketed = bracket(IO::pure(()), release_counter(&closed), |()| IO::pure(1));

        assert_eq!(bracketed.run(), Ok(1));
        assert_eq!(bracketed.run(), Ok(1));
        assert_eq!(closed.get(), 2);
    }
}
