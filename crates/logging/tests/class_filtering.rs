//! Integration tests for class-visibility filtering.
//!
//! Exactly one gating set is authoritative at any time: the explicit filter
//! installed via `filter("class", …)` when non-empty, otherwise the
//! allow-list of class names registered at logger construction.

use std::sync::{Arc, Mutex};

use logging::{Logger, LoggerOptions, LoggingContext};

fn capturing_context() -> (Arc<LoggingContext>, Arc<Mutex<Vec<String>>>) {
    let context = Arc::new(LoggingContext::new());
    let classes = Arc::new(Mutex::new(Vec::new()));
    let sink_classes = Arc::clone(&classes);
    context.set_sink(Arc::new(move |_formatted, record| {
        sink_classes.lock().unwrap().push(record.class_name.clone());
        Ok(())
    }));
    (context, classes)
}

fn logger(context: &Arc<LoggingContext>, class: &str) -> Logger {
    Logger::with_context(class, LoggerOptions::default(), Arc::clone(context))
}

// ============================================================================
// Explicit Filter Semantics
// ============================================================================

/// Verifies a filtered-out class is suppressed even when severity passes.
#[test]
fn filter_suppresses_unlisted_classes() {
    let (context, classes) = capturing_context();
    context.filter("class", ["A", "B"]);

    let a = logger(&context, "A");
    let b = logger(&context, "B");
    let c = logger(&context, "C");

    a.error("x").unwrap();
    b.error("x").unwrap();
    c.error("x").unwrap();

    assert_eq!(*classes.lock().unwrap(), vec!["A", "B"]);
}

/// Verifies duplicate names in the filter collapse under set semantics.
#[test]
fn filter_deduplicates_names() {
    let (context, classes) = capturing_context();
    context.filter("class", ["A", "A", "A"]);

    let a = logger(&context, "A");
    a.error("once").unwrap();

    assert_eq!(classes.lock().unwrap().len(), 1);
}

/// Verifies an empty filter hands gating back to the allow-list.
#[test]
fn empty_filter_restores_allow_list() {
    let (context, classes) = capturing_context();

    let c = logger(&context, "C");
    context.filter("class", ["A"]);
    c.error("suppressed").unwrap();
    assert!(classes.lock().unwrap().is_empty());

    context.filter("class", Vec::<String>::new());
    c.error("visible").unwrap();
    assert_eq!(*classes.lock().unwrap(), vec!["C"]);
}

/// Verifies replacing the filter drops previously listed classes.
#[test]
fn filter_replaces_rather_than_accumulates() {
    let (context, classes) = capturing_context();
    let a = logger(&context, "A");
    let b = logger(&context, "B");

    context.filter("class", ["A"]);
    context.filter("class", ["B"]);

    a.error("x").unwrap();
    b.error("x").unwrap();

    assert_eq!(*classes.lock().unwrap(), vec!["B"]);
}

// ============================================================================
// Unknown Filter Kinds
// ============================================================================

/// Verifies an unknown filter kind changes nothing.
#[test]
fn unknown_kind_is_a_no_op() {
    let (context, classes) = capturing_context();
    let a = logger(&context, "A");

    context.filter("collection", ["B"]);
    a.error("still visible").unwrap();

    assert_eq!(*classes.lock().unwrap(), vec!["A"]);
}

// ============================================================================
// Construction-Time Registration
// ============================================================================

/// Verifies construction registers the class into the allow-list.
#[test]
fn construction_registers_class() {
    let (context, classes) = capturing_context();
    let a = logger(&context, "A");

    a.error("x").unwrap();

    assert_eq!(*classes.lock().unwrap(), vec!["A"]);
}

/// Verifies a class named by the active filter is not added to the
/// allow-list at construction.
#[test]
fn registration_skips_filtered_names() {
    let (context, classes) = capturing_context();
    context.filter("class", ["A"]);

    let a = logger(&context, "A");
    let b = logger(&context, "B");

    // Clearing the filter exposes what registration recorded: B only.
    context.filter("class", Vec::<String>::new());
    a.error("x").unwrap();
    b.error("x").unwrap();

    assert_eq!(*classes.lock().unwrap(), vec!["B"]);
}

/// Verifies both gates must pass: severity alone is not enough.
#[test]
fn severity_pass_does_not_bypass_class_gate() {
    let (context, classes) = capturing_context();
    context.set_level_name("debug").unwrap();
    context.filter("class", ["A"]);

    let c = logger(&context, "C");
    c.debug("x").unwrap();
    c.error("x").unwrap();

    assert!(classes.lock().unwrap().is_empty());
}
