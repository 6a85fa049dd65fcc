//! Integration tests for suite registration and execution.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use gatecheck::{CaseOutcome, RunnableTest, Suite, SuiteConfig, SuiteError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Uniform execution
// ============================================================================

#[test]
fn checks_run_in_registration_order() {
    init_tracing();
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut suite = Suite::new();
    for name in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        suite
            .register_fn(name, move || order.lock().expect("lock poisoned").push(name))
            .expect("unique name");
    }

    let report = suite.run();

    assert!(report.all_passed());
    assert_eq!(*order.lock().expect("lock poisoned"), vec!["first", "second", "third"]);
    let names: Vec<&str> = report.cases().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn heterogeneous_checks_run_through_one_suite() {
    struct BumpCheck {
        hits: Arc<AtomicUsize>,
    }

    impl RunnableTest for BumpCheck {
        fn run(&self) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    let hits = Arc::new(AtomicUsize::new(0));
    let mut suite = Suite::new();
    suite
        .register(
            "struct_check",
            Box::new(BumpCheck {
                hits: Arc::clone(&hits),
            }),
        )
        .expect("unique name");
    let closure_hits = Arc::clone(&hits);
    suite
        .register_fn("closure_check", move || {
            closure_hits.fetch_add(10, Ordering::SeqCst);
        })
        .expect("unique name");

    let report = suite.run();

    assert!(report.all_passed());
    assert_eq!(hits.load(Ordering::SeqCst), 11);
}

// ============================================================================
// Panic capture
// ============================================================================

#[test]
fn panicking_check_does_not_stop_the_run() {
    init_tracing();
    let ran_after = Arc::new(AtomicUsize::new(0));
    let mut suite = Suite::new();
    suite.register_fn("ok_before", || {}).expect("unique name");
    suite
        .register_fn("boom", || panic!("document was empty"))
        .expect("unique name");
    let ran = Arc::clone(&ran_after);
    suite
        .register_fn("ok_after", move || {
            ran.fetch_add(1, Ordering::SeqCst);
        })
        .expect("unique name");

    let report = suite.run();

    assert_eq!(report.passed(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(ran_after.load(Ordering::SeqCst), 1);
    assert_eq!(
        report.cases()[1].outcome,
        CaseOutcome::Panicked("document was empty".to_string())
    );
    assert!(!report.all_passed());
}

#[test]
fn stop_on_fail_skips_the_remainder() {
    let ran_after = Arc::new(AtomicUsize::new(0));
    let mut suite = Suite::new();
    suite.register_fn("ok", || {}).expect("unique name");
    suite.register_fn("boom", || panic!("boom")).expect("unique name");
    let ran = Arc::clone(&ran_after);
    suite
        .register_fn("never_runs", move || {
            ran.fetch_add(1, Ordering::SeqCst);
        })
        .expect("unique name");

    let report = suite.run_with(&SuiteConfig::new().with_stop_on_fail(true));

    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(ran_after.load(Ordering::SeqCst), 0);
    assert_eq!(report.cases()[2].outcome, CaseOutcome::Skipped);
}

// ============================================================================
// Keyword filtering
// ============================================================================

#[test]
fn keyword_selects_by_name_substring() {
    let mut suite = Suite::new();
    suite.register_fn("gate_smoke", || {}).expect("unique name");
    suite.register_fn("suite_smoke", || {}).expect("unique name");
    suite.register_fn("gate_deep", || {}).expect("unique name");

    let report = suite.run_with(&SuiteConfig::new().with_keyword("gate"));

    assert_eq!(report.cases().len(), 2);
    assert_eq!(report.filtered_out(), 1);
    let names: Vec<&str> = report.cases().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["gate_smoke", "gate_deep"]);
}

#[test]
fn keyword_matching_nothing_runs_nothing() {
    let mut suite = Suite::new();
    suite.register_fn("gate_smoke", || {}).expect("unique name");

    let report = suite.run_with(&SuiteConfig::new().with_keyword("nope"));

    assert!(report.cases().is_empty());
    assert_eq!(report.filtered_out(), 1);
    assert!(report.all_passed());
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn duplicate_names_are_rejected() {
    let mut suite = Suite::new();
    suite.register_fn("smoke", || {}).expect("unique name");
    assert_eq!(
        suite.register_fn("smoke", || {}),
        Err(SuiteError::DuplicateCase("smoke".to_string()))
    );
}
