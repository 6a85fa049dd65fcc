//! Uniform execution of runnable checks.
//!
//! A [`Suite`] holds heterogeneous check objects behind the [`RunnableTest`]
//! capability and runs them in registration order. Each check runs under
//! `catch_unwind`, so one panicking check is reported as a failure without
//! taking down the rest of the run.
//!
//! There is deliberately no discovery mechanism, no CLI, and no output format
//! here: callers register checks by hand and inspect the returned
//! [`SuiteReport`]. Log output goes through `tracing`.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};

use thiserror::Error;

use gatecheck_core::run::RunnableTest;

/// Errors that occur while assembling a suite.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuiteError {
    #[error("duplicate check name: {0}")]
    DuplicateCase(String),
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The check returned normally.
    Passed,
    /// The check panicked; the payload message is preserved.
    Panicked(String),
    /// The check was not run because an earlier failure stopped the suite.
    Skipped,
}

/// Result of one check in a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

/// Result of a whole suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    cases: Vec<CaseReport>,
    filtered_out: usize,
}

impl SuiteReport {
    /// The per-check reports, in the order the checks ran.
    pub fn cases(&self) -> &[CaseReport] {
        &self.cases
    }

    /// How many registered checks did not match the keyword filter.
    pub fn filtered_out(&self) -> usize {
        self.filtered_out
    }

    /// Count the checks that passed.
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Passed))
    }

    /// Count the checks that panicked.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Panicked(_)))
    }

    /// Count the checks skipped after a stop-on-fail halt.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Skipped))
    }

    /// Check whether no check panicked.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.cases.iter().filter(|c| pred(&c.outcome)).count()
    }
}

/// Configuration for a suite run.
///
/// Plain builder, same shape as the host-side tool flags: stop at the first
/// failure, or narrow the run to checks whose name contains a keyword.
#[derive(Debug, Clone, Default)]
pub struct SuiteConfig {
    /// Stop running after the first panicking check; the rest are reported skipped.
    pub stop_on_fail: bool,
    /// Only run checks whose name contains this substring.
    pub keyword: Option<String>,
}

impl SuiteConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the run stops at the first failure.
    pub fn with_stop_on_fail(mut self, stop: bool) -> Self {
        self.stop_on_fail = stop;
        self
    }

    /// Restrict the run to checks whose name contains `keyword`.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

struct Case {
    name: String,
    check: Box<dyn RunnableTest>,
}

/// An ordered collection of named runnable checks.
///
/// Names are unique within a suite; registration order is run order.
#[derive(Default)]
pub struct Suite {
    cases: Vec<Case>,
}

impl Suite {
    /// Create an empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named check.
    ///
    /// ## Errors
    ///
    /// Returns [`SuiteError::DuplicateCase`] if a check with the same name is
    /// already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        check: Box<dyn RunnableTest>,
    ) -> Result<(), SuiteError> {
        let name = name.into();
        if self.cases.iter().any(|c| c.name == name) {
            return Err(SuiteError::DuplicateCase(name));
        }
        self.cases.push(Case { name, check });
        Ok(())
    }

    /// Register a closure as a named check.
    ///
    /// ## Errors
    ///
    /// Returns [`SuiteError::DuplicateCase`] if a check with the same name is
    /// already registered.
    pub fn register_fn(
        &mut self,
        name: impl Into<String>,
        check: impl Fn() + 'static,
    ) -> Result<(), SuiteError> {
        self.register(name, Box::new(check))
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check whether the suite has no registered checks.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every check with the default configuration.
    pub fn run(&self) -> SuiteReport {
        self.run_with(&SuiteConfig::default())
    }

    /// Run the checks selected by `config`, in registration order.
    ///
    /// Each check runs under `catch_unwind`; a panic is recorded as
    /// [`CaseOutcome::Panicked`] and, unless `stop_on_fail` is set, later
    /// checks still run.
    #[tracing::instrument(skip_all, fields(case_count = self.cases.len()))]
    pub fn run_with(&self, config: &SuiteConfig) -> SuiteReport {
        let selected: Vec<&Case> = match &config.keyword {
            Some(keyword) => self
                .cases
                .iter()
                .filter(|c| c.name.contains(keyword.as_str()))
                .collect(),
            None => self.cases.iter().collect(),
        };
        let filtered_out = self.cases.len() - selected.len();
        if filtered_out > 0 {
            tracing::debug!(filtered_out, "checks excluded by keyword");
        }

        let mut reports = Vec::with_capacity(selected.len());
        let mut halted = false;
        for case in selected {
            if halted {
                reports.push(CaseReport {
                    name: case.name.clone(),
                    outcome: CaseOutcome::Skipped,
                    duration: Duration::ZERO,
                });
                continue;
            }

            let start = Instant::now();
            let result = catch_unwind(AssertUnwindSafe(|| case.check.run()));
            let duration = start.elapsed();

            let outcome = match result {
                Ok(()) => {
                    tracing::debug!(name = %case.name, ?duration, "check passed");
                    CaseOutcome::Passed
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    tracing::warn!(name = %case.name, %message, "check panicked");
                    if config.stop_on_fail {
                        halted = true;
                    }
                    CaseOutcome::Panicked(message)
                }
            };
            reports.push(CaseReport {
                name: case.name.clone(),
                outcome,
                duration,
            });
        }

        SuiteReport {
            cases: reports,
            filtered_out,
        }
    }
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
