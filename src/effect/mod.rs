//! The IO effect system: deferred, composable side effects.
//!
//! This module provides the deferred-effect core and everything that
//! composes it:
//!
//! - [`IO`]: a deferred, re-runnable, possibly-failing computation.
//!   Construction never performs work; only `run` does.
//! - [`bracket`]: acquire/use/release resource safety with deterministic
//!   failure precedence.
//! - [`sequence`], [`traverse`], [`sequence_while`], [`replicate`]:
//!   lifting sequences of effects into one effect producing a sequence of
//!   results, preserving order and laziness.
//! - Primitive adapters ([`stdout_print`], [`read_line_from`],
//!   [`close_handle`], ...): thin wrappers around single external
//!   effects.
//! - [`EffectError`]: the typed failure surfaced by `run`, with
//!   [`RaisedError`] and [`TryFailure`] as its kinds.
//!
//! # IO Monad
//!
//! The [`IO`] type represents a computation that may perform side
//! effects. Side effects are deferred until `run` is called, maintaining
//! referential transparency in pure code, and failures are values
//! propagated through `Result`:
//!
//! ```rust
//! use iolite::effect::IO;
//!
//! // Create and chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! // Side effects don't occur until run is called
//! assert_eq!(io.run(), Ok(21));
//! ```
//!
//! # Resource safety
//!
//! ```rust
//! use iolite::effect::{bracket, close_handle, handle, IO};
//!
//! let h = handle(std::io::Cursor::new("payload"));
//! let acquired = h.clone();
//!
//! let guarded = bracket(
//!     IO::new(move || acquired.clone()),
//!     close_handle,
//!     |_h| IO::pure("worked"),
//! );
//!
//! assert_eq!(guarded.run(), Ok("worked"));
//! assert!(h.borrow().is_none()); // released on every path past acquire
//! ```

mod error;

pub use error::{EffectError, RaisedError, TryFailure};

mod io;

pub use io::IO;

mod bracket;

pub use bracket::bracket;

mod sequence;

pub use sequence::{replicate, sequence, sequence_while, traverse, EffectSeq};

mod console;

pub use console::{
    close_handle, handle, read_line_from, stdin_read_line, stdout_print, stdout_println, Handle,
};
