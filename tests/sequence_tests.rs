//! Integration tests for sequencing, traversal, and replication.
//!
//! Ordering and laziness are observed through shared counters and a
//! buffer sink: side effects must happen exactly when and in the order
//! the consumer forces them.

use iolite::control::LazySeq;
use iolite::effect::{
    read_line_from, replicate, sequence, sequence_while, traverse, EffectError, IO,
};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::io::BufRead;
use std::rc::Rc;

/// A print-adapter writing into a shared buffer, standing in for stdout.
fn print_to(buffer: &Rc<RefCell<String>>, text: impl Into<String>) -> IO<()> {
    let buffer = buffer.clone();
    let text = text.into();
    IO::new(move || buffer.borrow_mut().push_str(&text))
}

#[rstest]
fn sequence_preserves_input_order_when_drained() {
    let buffer = Rc::new(RefCell::new(String::new()));
    let sink = buffer.clone();

    let inputs = LazySeq::from_vec(vec!["foo1", "bar2", "foobar3"]);
    let lifted = traverse(inputs, move |s| print_to(&sink, s).fmap(move |()| s));

    let results = lifted.run().unwrap();
    assert_eq!(
        results.collect(),
        Ok(vec!["foo1", "bar2", "foobar3"])
    );
    // Eager left-to-right drain emits in input order
    assert_eq!(buffer.borrow().as_str(), "foo1bar2foobar3");
}

#[rstest]
fn caller_driven_forcing_order_controls_side_effects() {
    let buffer = Rc::new(RefCell::new(String::new()));
    let sink = buffer.clone();

    let inputs = LazySeq::from_vec(vec!["foo1", "bar2", "foobar3"]);
    let lifted = traverse(inputs, |s| IO::pure(s));

    // Materialize the results, then emit them last-to-first: output
    // follows the caller's forcing order, not the input order.
    let results = lifted.run().unwrap().collect().unwrap();
    for s in results.into_iter().rev() {
        print_to(&sink, s).run().unwrap();
    }

    assert_eq!(buffer.borrow().as_str(), "foobar3bar2foo1");
}

#[rstest]
fn sequence_runs_elements_only_as_forced() {
    let executed = Rc::new(Cell::new(0));
    let effect = |value: &'static str| {
        let executed = executed.clone();
        IO::new(move || {
            executed.set(executed.get() + 1);
            value
        })
    };

    let actions = LazySeq::from_vec(vec![effect("a"), effect("b"), effect("c")]);
    let lifted = sequence(actions);
    assert_eq!(executed.get(), 0);

    let results = lifted.run().unwrap();
    // Running the outer effect runs exactly the first element
    assert_eq!(executed.get(), 1);

    let (first, tail) = results.uncons().unwrap();
    assert_eq!(first, "a");
    assert_eq!(executed.get(), 1);

    // Forcing the tail runs exactly one more element
    let rest = tail().unwrap();
    assert_eq!(executed.get(), 2);
    drop(rest);
    assert_eq!(executed.get(), 2);
}

#[rstest]
fn sequence_while_reads_until_terminator_inclusive() {
    let source = Rc::new(RefCell::new(std::io::Cursor::new(
        "foo1\nbar2\nfoobar3\nbeyond",
    )));
    let line_reader = read_line_from(source.clone());

    let actions: LazySeq<IO<String>, EffectError> = LazySeq::repeat(line_reader);
    let lifted = sequence_while(actions, |line: &String| line.as_str() != "foobar3");

    let results = lifted.run().unwrap();
    assert_eq!(
        results.collect(),
        Ok(vec![
            "foo1".to_string(),
            "bar2".to_string(),
            "foobar3".to_string()
        ])
    );

    // Nothing past the terminator was consumed from the source
    let mut remaining = String::new();
    source
        .borrow_mut()
        .read_line(&mut remaining)
        .unwrap();
    assert_eq!(remaining, "beyond");
}

#[rstest]
fn sequence_while_stops_running_after_predicate_fails() {
    let executed = Rc::new(Cell::new(0));
    let effect = |value: &'static str| {
        let executed = executed.clone();
        IO::new(move || {
            executed.set(executed.get() + 1);
            value
        })
    };

    let actions = LazySeq::from_vec(vec![
        effect("foo1"),
        effect("bar2"),
        effect("foobar3"),
        effect("never"),
    ]);

    let results = sequence_while(actions, |s| *s != "foobar3").run().unwrap();
    assert_eq!(results.collect(), Ok(vec!["foo1", "bar2", "foobar3"]));
    assert_eq!(executed.get(), 3);
}

#[rstest]
fn replicate_reexecutes_and_collects_in_order() {
    let action = IO::suspend(|| {
        // A fresh reader per run, so each repetition re-reads "foo"
        let mut reader = std::io::Cursor::new("foo\nbar");
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|error| EffectError::raised(error.to_string()))?;
        Ok(line.trim_end().to_string())
    });

    assert_eq!(
        replicate(&action, 3).run(),
        Ok(vec![
            "foo".to_string(),
            "foo".to_string(),
            "foo".to_string()
        ])
    );
}

#[rstest]
fn replicate_zero_never_runs_the_effect() {
    let executed = Rc::new(Cell::new(0));
    let observer = executed.clone();
    let action = IO::new(move || {
        observer.set(observer.get() + 1);
        "foo"
    });

    assert_eq!(replicate(&action, 0).run(), Ok(vec![]));
    assert_eq!(executed.get(), 0);
}

#[rstest]
fn sequence_failure_while_forcing_surfaces_as_value() {
    let actions: LazySeq<IO<i32>, EffectError> = LazySeq::from_vec(vec![
        IO::pure(1),
        IO::fail(EffectError::raised("second failed")),
        IO::pure(3),
    ]);

    let results = sequence(actions).run().unwrap();
    assert_eq!(results.collect(), Err(EffectError::raised("second failed")));
}

#[rstest]
fn long_sequence_drains_without_stack_growth() {
    let values: Vec<IO<u32>> = (0..100_000).map(IO::pure).collect();
    let lifted = sequence(LazySeq::from_vec(values));

    let collected = lifted.run().unwrap().collect().unwrap();
    assert_eq!(collected.len(), 100_000);
    assert_eq!(collected.first(), Some(&0));
    assert_eq!(collected.last(), Some(&99_999));
}
