//! # iolite
//!
//! A lazily-evaluated IO effect library for Rust.
//!
//! ## Overview
//!
//! This library provides a composable "deferred effect" abstraction: an
//! [`effect::IO`] value describes a side-effecting computation without
//! performing it. Construction is separated from execution; building an IO
//! value never does work, and only an explicit `run` triggers it. It
//! includes:
//!
//! - **IO Monad**: deferred, re-runnable, possibly-failing computations
//! - **Bracket**: acquire/use/release resource safety with deterministic
//!   failure precedence
//! - **Sequencing**: lifting lazy sequences of effects into one effect
//!   producing a lazy sequence of results
//! - **Lazy Sequences**: an ordered, possibly-infinite cons sequence whose
//!   elements are produced on demand
//!
//! ## Feature Flags
//!
//! - `control`: control structures (`Either`, `LazySeq`)
//! - `effect`: the IO effect system (requires `control`)
//!
//! ## Example
//!
//! ```rust
//! use iolite::effect::IO;
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! // Side effects don't occur until run is called
//! assert_eq!(io.run(), Ok(21));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and combinators.
///
/// # Usage
///
/// ```rust
/// use iolite::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
