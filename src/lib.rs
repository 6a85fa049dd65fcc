#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Selection gating and runnable checks for CAD-automation plugins.
//!
//! A plugin running inside a host CAD application sits on two contracts this
//! library covers:
//!
//! - **Selection gating**: during an interactive pick the host consults a
//!   [`SelectionFilter`] before highlighting or accepting a candidate. The
//!   constant filters [`RejectAll`] and [`AcceptAll`] cover the common cases;
//!   [`Traced`] adds logging around any filter.
//! - **Runnable checks**: ad-hoc check routines implement [`RunnableTest`] and
//!   a [`Suite`] collects and runs them uniformly, capturing panics per check.
//!
//! The host's geometry kernel, document model, and picking loop stay on the
//! host's side of the boundary; this library only supplies the plugin half.
//!
//! ## Panic Policy
//!
//! Library code returns `Result` where an operation can fail and never calls
//! `unwrap`/`expect`. Checks executed by a [`Suite`] may panic; the suite
//! captures those panics and reports them as check failures.

pub mod observe;
pub mod suite;

pub use gatecheck_core::geom::Point3;
pub use gatecheck_core::handle::{ElementHandle, ReferenceHandle};
pub use gatecheck_core::run::RunnableTest;
pub use gatecheck_core::select::{AcceptAll, RejectAll, SelectionFilter};

pub use observe::Traced;
pub use suite::{CaseOutcome, CaseReport, Suite, SuiteConfig, SuiteError, SuiteReport};
