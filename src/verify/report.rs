//! Mismatch diagnostics and failure reporting
//!
//! The comparators themselves only produce a `Mismatch`; what happens next is
//! reporting policy. `CheckReporter` makes that policy injectable: the same
//! comparison core serves an embedded test harness (`AssertReporter`) and a
//! standalone diagnostic mode (`StandaloneReporter`).

use super::element::{Component, NearViolation};
use crate::dtype::Element;
use std::fmt;
use std::io::Write;
use std::process;

/// How a comparison failed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MismatchKind {
    /// Exact equality failed
    Exact,
    /// Reference is NaN but candidate is not
    NanExpected,
    /// Reference is infinite but candidate is not
    InfExpected,
    /// Absolute difference met or exceeded the derived tolerance
    Tolerance(NearViolation),
}

/// Diagnostic attached to the first failing element of a comparison
///
/// Carries the element location, both values rendered for display, and the
/// failure kind (including the exceeded margin for tolerance mode).
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Row index of the failing element
    pub row: usize,
    /// Column index of the failing element
    pub col: usize,
    /// Reference value, rendered
    pub expected: String,
    /// Candidate value, rendered
    pub actual: String,
    /// Failure kind
    pub kind: MismatchKind,
}

impl Mismatch {
    pub(crate) fn new<T: Element>(
        row: usize,
        col: usize,
        expected: T,
        actual: T,
        kind: MismatchKind,
    ) -> Self {
        Self {
            row,
            col,
            expected: expected.to_string(),
            actual: actual.to_string(),
            kind,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mismatch at ({}, {}): expected {}, got {}",
            self.row, self.col, self.expected, self.actual
        )?;
        match &self.kind {
            MismatchKind::Exact => Ok(()),
            MismatchKind::NanExpected => write!(f, " (reference is NaN, candidate is not)"),
            MismatchKind::InfExpected => write!(f, " (reference is infinite, candidate is not)"),
            MismatchKind::Tolerance(v) => {
                write!(f, " (|diff| {:e} exceeds tolerance {:e}", v.diff, v.tol)?;
                match v.component {
                    Some(Component::Real) => write!(f, " in real part)"),
                    Some(Component::Imag) => write!(f, " in imaginary part)"),
                    None => write!(f, ")"),
                }
            }
        }
    }
}

impl std::error::Error for Mismatch {}

/// Injectable failure-reporting policy for the comparators
///
/// `record_pass` is called once per successful comparison, `record_failure`
/// once with the first (fail-fast) mismatch.
pub trait CheckReporter {
    /// A whole-region comparison passed
    fn record_pass(&mut self);

    /// A comparison failed with the given diagnostic
    fn record_failure(&mut self, mismatch: &Mismatch);
}

/// Test-harness reporter: panics with the diagnostic on failure
///
/// Inside `#[test]` functions the panic is recorded by the harness as a test
/// failure and the run continues with the next case.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssertReporter;

impl CheckReporter for AssertReporter {
    fn record_pass(&mut self) {}

    fn record_failure(&mut self, mismatch: &Mismatch) {
        panic!("{}", mismatch);
    }
}

/// Standalone reporter: writes the diagnostic to stderr and exits the process
/// with a failure status
///
/// Successful comparisons produce no output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandaloneReporter;

impl CheckReporter for StandaloneReporter {
    fn record_pass(&mut self) {}

    fn record_failure(&mut self, mismatch: &Mismatch) {
        let mut stderr = std::io::stderr().lock();
        // Ignore write errors; the process is exiting anyway
        let _ = writeln!(stderr, "{}", mismatch);
        let _ = stderr.flush();
        process::exit(1);
    }
}
