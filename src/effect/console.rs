//! Primitive effect adapters for console and reader I/O.
//!
//! These are thin wrappers: each constructor builds an [`IO`] that
//! performs exactly one external effect when run, exactly once per run.
//! They carry no contract beyond that; composition and safety come from
//! the combinators ([`bracket`](super::bracket),
//! [`sequence_while`](super::sequence_while), ...).

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use super::error::EffectError;
use super::IO;

/// A shared, closeable resource handle.
///
/// The `Option` is the open/closed state: [`close_handle`] takes the
/// resource out and drops it. Cloning the handle clones the `Rc`, so a
/// bracket's use and release actions both reach the same resource.
pub type Handle<R> = Rc<RefCell<Option<R>>>;

/// Wraps a resource in a shared handle suitable for [`bracket`].
///
/// [`bracket`]: super::bracket
///
/// # Examples
///
/// ```rust
/// use iolite::effect::{close_handle, handle};
///
/// let h = handle(std::io::Cursor::new("data"));
/// assert!(h.borrow().is_some());
/// close_handle(h.clone()).run().unwrap();
/// assert!(h.borrow().is_none());
/// ```
pub fn handle<R>(resource: R) -> Handle<R> {
    Rc::new(RefCell::new(Some(resource)))
}

/// Creates an IO action that writes a string to standard output with no
/// trailing separator.
///
/// The write happens only on run, and is flushed so partial lines appear
/// immediately.
///
/// # Examples
///
/// ```rust,no_run
/// use iolite::effect::stdout_print;
///
/// let io = stdout_print("no newline");
/// io.run().unwrap();
/// ```
pub fn stdout_print(text: impl Into<String>) -> IO<()> {
    let text = text.into();
    IO::suspend(move || {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|error| EffectError::raised(error.to_string()))
    })
}

/// Creates an IO action that writes a string plus a newline to standard
/// output.
///
/// # Examples
///
/// ```rust,no_run
/// use iolite::effect::stdout_println;
///
/// let io = stdout_println("a whole line");
/// io.run().unwrap();
/// ```
pub fn stdout_println(text: impl Into<String>) -> IO<()> {
    let text = text.into();
    IO::suspend(move || {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{text}").map_err(|error| EffectError::raised(error.to_string()))
    })
}

/// Creates an IO action that reads one line from standard input.
///
/// The trailing line terminator is stripped. Nothing is read until run.
///
/// # Examples
///
/// ```rust,no_run
/// use iolite::effect::stdin_read_line;
///
/// let io = stdin_read_line();
/// let line = io.run().unwrap();
/// println!("You entered: {line}");
/// ```
pub fn stdin_read_line() -> IO<String> {
    IO::suspend(|| {
        let mut buffer = String::new();
        std::io::stdin()
            .read_line(&mut buffer)
            .map_err(|error| EffectError::raised(error.to_string()))?;
        trim_line_ending(&mut buffer);
        Ok(buffer)
    })
}

/// Creates an IO action that reads one line from a shared reader handle.
///
/// Each run reads the reader's next line with the terminator stripped, so
/// repeating this action walks through the source line by line - the
/// per-element effect for [`sequence_while`](super::sequence_while) with
/// a terminator predicate.
///
/// Fails with a raised "unexpected end of input" error if the source is
/// exhausted.
///
/// # Examples
///
/// ```rust
/// use iolite::effect::read_line_from;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let source = Rc::new(RefCell::new(std::io::Cursor::new("foo1\nbar2\n")));
/// let io = read_line_from(source);
///
/// assert_eq!(io.run(), Ok("foo1".to_string()));
/// assert_eq!(io.run(), Ok("bar2".to_string()));
/// assert!(io.run().is_err());
/// ```
pub fn read_line_from<R>(source: Rc<RefCell<R>>) -> IO<String>
where
    R: BufRead + 'static,
{
    IO::suspend(move || {
        let mut buffer = String::new();
        let bytes_read = source
            .borrow_mut()
            .read_line(&mut buffer)
            .map_err(|error| EffectError::raised(error.to_string()))?;
        if bytes_read == 0 {
            return Err(EffectError::raised("unexpected end of input"));
        }
        trim_line_ending(&mut buffer);
        Ok(buffer)
    })
}

/// Creates an IO action that closes a shared resource handle.
///
/// Running the action takes the resource out of the handle and drops it;
/// running it again on an already-closed handle is a no-op. This is the
/// release argument for [`bracket`](super::bracket) over closeable
/// resources.
///
/// # Examples
///
/// ```rust
/// use iolite::effect::{close_handle, handle};
///
/// let h = handle(vec![1, 2, 3]);
/// close_handle(h.clone()).run().unwrap();
/// assert!(h.borrow().is_none());
/// ```
pub fn close_handle<R: 'static>(handle: Handle<R>) -> IO<()> {
    IO::new(move || {
        handle.borrow_mut().take();
    })
}

fn trim_line_ending(buffer: &mut String) {
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
}
