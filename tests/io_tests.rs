//! Integration tests for the IO core and primitive adapters.
//!
//! These tests exercise deferral, re-execution, failure capture, and the
//! adapter constructors through the public API. Output-producing effects
//! write into an in-test buffer sink rather than real stdout, so ordering
//! is observable.

use iolite::control::{Either, LazySeq};
use iolite::effect::{read_line_from, sequence, EffectError, IO};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A print-adapter writing into a shared buffer, standing in for stdout.
fn print_to(buffer: &Rc<RefCell<String>>, text: impl Into<String>) -> IO<()> {
    let buffer = buffer.clone();
    let text = text.into();
    IO::new(move || buffer.borrow_mut().push_str(&text))
}

#[rstest]
fn construction_performs_no_work() {
    let executed = Rc::new(Cell::new(false));
    let observer = executed.clone();

    let io = IO::new(move || observer.set(true));
    let composed = io.fmap(|()| 1).flat_map(|n| IO::pure(n + 1));

    // Building and composing must not execute anything
    assert!(!executed.get());

    assert_eq!(composed.run(), Ok(2));
    assert!(executed.get());
}

#[rstest]
fn running_twice_reexecutes_the_side_effect() {
    let counter = Rc::new(Cell::new(0));
    let observer = counter.clone();

    let io = IO::new(move || {
        observer.set(observer.get() + 1);
    });

    io.run().unwrap();
    io.run().unwrap();
    assert_eq!(counter.get(), 2);
}

#[rstest]
fn read_then_transform_then_emit() {
    let source = Rc::new(RefCell::new(std::io::Cursor::new("foo\n")));
    let buffer = Rc::new(RefCell::new(String::new()));
    let sink = buffer.clone();

    let read_name = read_line_from(source);
    let emit_upper = move |name: String| {
        let upper = name.to_uppercase();
        print_to(&sink, upper.clone()).fmap(move |()| upper.clone())
    };

    let read_and_emit = read_name.flat_map(emit_upper);
    assert_eq!(read_and_emit.run(), Ok("FOO".to_string()));
    assert_eq!(buffer.borrow().as_str(), "FOO");
}

#[rstest]
fn safe_run_captures_instead_of_propagating() {
    let failing: IO<i32> = IO::fail(EffectError::raised("OoO"));
    match failing.safe_run() {
        Either::Left(error) => assert_eq!(error.message(), "OoO"),
        Either::Right(_) => panic!("expected the failure to be captured"),
    }

    let succeeding = IO::pure(5);
    assert_eq!(succeeding.safe_run(), Either::Right(5));
}

#[rstest]
fn foreach_over_captured_results() {
    let buffer = Rc::new(RefCell::new(String::new()));
    let sink = buffer.clone();

    let repeated: LazySeq<IO<&str>, EffectError> = LazySeq::repeat(IO::pure("foo1")).take(2);
    let lifted = sequence(repeated);

    // Branch on the outcome, then emit each captured result
    lifted
        .safe_run()
        .fold(
            |error| panic!("unexpected failure: {error}"),
            |results| {
                results
                    .for_each(|s| {
                        print_to(&sink, s).run().unwrap();
                    })
                    .unwrap();
            },
        );

    assert_eq!(buffer.borrow().as_str(), "foo1foo1");
}

#[rstest]
fn from_failable_wraps_the_message_verbatim() {
    let io = IO::from_failable(|| Err("failure".to_string()));
    match io.run() {
        Err(EffectError::Try(wrapped)) => assert_eq!(wrapped.message, "failure"),
        other => panic!("expected an adapted failure, got {other:?}"),
    }
}

#[rstest]
fn from_failable_success_yields_unit() {
    let io = IO::from_failable(|| Ok::<(), String>(()));
    assert_eq!(io.run(), Ok(()));
}

#[rstest]
fn failure_short_circuits_a_chain() {
    let reached = Rc::new(Cell::new(false));
    let observer = reached.clone();

    let chain = IO::pure(1)
        .flat_map(|_| IO::<i32>::fail(EffectError::raised("midway")))
        .fmap(move |n| {
            observer.set(true);
            n
        });

    assert_eq!(chain.run(), Err(EffectError::raised("midway")));
    assert!(!reached.get());
}
