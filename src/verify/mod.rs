//! Numerical verification engine
//!
//! Validates accelerator-computed buffers against host reference buffers
//! under two equality regimes:
//!
//! - [`unit_check`]: bit-exact comparison. NaN reference elements require a
//!   NaN candidate; everything else must be exactly equal (component-wise for
//!   complex kinds).
//! - [`near_check`]: tolerance comparison for floating kinds, used when
//!   summation order or fused-multiply-add differences between host and
//!   accelerator make bit-exact agreement impossible. NaN and Infinity in the
//!   reference require the same in the candidate, with no magnitude check.
//!
//! Both comparators stream through the logical m x n region in column-major
//! order, never allocate proportionally to the buffers, and fail fast at the
//! first mismatching element. The per-kind equality relation, NaN/Infinity
//! predicates, and tolerance derivation are supplied by the [`ExactCheck`]
//! and [`NearCheck`] traits; the scan is written once.
//!
//! # Example
//!
//! ```
//! use sparsekit::verify::{MatrixRef, near_check};
//!
//! let host = [1.0f64, 2.0, 3.0, 4.0];
//! let device = [1.0f64, 2.0, 3.0, 4.0 + 1e-12];
//! let reference = MatrixRef::from_column_major(&host, 2, 2)?;
//! let candidate = MatrixRef::from_column_major(&device, 2, 2)?;
//! near_check(&reference, &candidate)?;
//! # Ok::<(), sparsekit::error::Error>(())
//! ```

mod element;
mod matrix;
mod report;

pub use element::{Component, ExactCheck, NearCheck, NearViolation, REL_TOL_F32, REL_TOL_F64};
pub use matrix::MatrixRef;
pub use report::{AssertReporter, CheckReporter, Mismatch, MismatchKind, StandaloneReporter};

use crate::error::{Error, Result};

fn check_dims<T: ExactCheck>(reference: &MatrixRef<'_, T>, candidate: &MatrixRef<'_, T>) -> Result<()> {
    if reference.dims() != candidate.dims() {
        return Err(Error::shape_mismatch(reference.dims(), candidate.dims()));
    }
    Ok(())
}

/// Verify that every element of `candidate` is exactly equal to `reference`
///
/// NaN reference elements only require the candidate to be NaN; no further
/// numeric comparison is performed for them. Fails fast with a [`Mismatch`]
/// diagnostic at the first differing element. A zero-sized region passes
/// trivially.
///
/// # Errors
///
/// `ShapeMismatch` if the views disagree on (m, n, lda); `Mismatch` on the
/// first differing element.
pub fn unit_check<T: ExactCheck>(
    reference: &MatrixRef<'_, T>,
    candidate: &MatrixRef<'_, T>,
) -> Result<()> {
    check_dims(reference, candidate)?;
    for j in 0..reference.n() {
        for i in 0..reference.m() {
            let r = reference.get(i, j);
            let c = candidate.get(i, j);
            if r.is_nan() {
                if !c.is_nan() {
                    return Err(Mismatch::new(i, j, r, c, MismatchKind::NanExpected).into());
                }
            } else if !r.exact_eq(c) {
                return Err(Mismatch::new(i, j, r, c, MismatchKind::Exact).into());
            }
        }
    }
    Ok(())
}

/// Verify that every element of `candidate` matches `reference` within a
/// kind- and magnitude-dependent tolerance
///
/// The tolerance for each element is derived from the reference value as
/// `max(|r| * rel, 10 * epsilon)` with the kind's relative factor
/// ([`REL_TOL_F32`] / [`REL_TOL_F64`]) and machine epsilon, applied
/// component-wise for complex kinds. NaN and infinite reference elements
/// require the candidate to be NaN or infinite respectively, with no
/// magnitude comparison. Fails fast at the first violation.
///
/// Integer kinds do not implement [`NearCheck`], so calling this on them is
/// a compile-time error.
///
/// # Errors
///
/// `ShapeMismatch` if the views disagree on (m, n, lda); `Mismatch` on the
/// first violating element, carrying the exceeded margin.
pub fn near_check<T: NearCheck>(
    reference: &MatrixRef<'_, T>,
    candidate: &MatrixRef<'_, T>,
) -> Result<()> {
    check_dims(reference, candidate)?;
    for j in 0..reference.n() {
        for i in 0..reference.m() {
            let r = reference.get(i, j);
            let c = candidate.get(i, j);
            if r.is_nan() {
                if !c.is_nan() {
                    return Err(Mismatch::new(i, j, r, c, MismatchKind::NanExpected).into());
                }
            } else if r.is_inf() {
                if !c.is_inf() {
                    return Err(Mismatch::new(i, j, r, c, MismatchKind::InfExpected).into());
                }
            } else if let Some(v) = r.near_violation(c) {
                return Err(Mismatch::new(i, j, r, c, MismatchKind::Tolerance(v)).into());
            }
        }
    }
    Ok(())
}

/// [`unit_check`] with the outcome routed through an injected reporter
///
/// The reporter records one pass per successful call or the first mismatch;
/// the result is also returned so callers can chain with `?`.
pub fn unit_check_with<T, R>(
    reference: &MatrixRef<'_, T>,
    candidate: &MatrixRef<'_, T>,
    reporter: &mut R,
) -> Result<()>
where
    T: ExactCheck,
    R: CheckReporter + ?Sized,
{
    report(unit_check(reference, candidate), reporter)
}

/// [`near_check`] with the outcome routed through an injected reporter
pub fn near_check_with<T, R>(
    reference: &MatrixRef<'_, T>,
    candidate: &MatrixRef<'_, T>,
    reporter: &mut R,
) -> Result<()>
where
    T: NearCheck,
    R: CheckReporter + ?Sized,
{
    report(near_check(reference, candidate), reporter)
}

fn report<R: CheckReporter + ?Sized>(result: Result<()>, reporter: &mut R) -> Result<()> {
    match &result {
        Ok(()) => reporter.record_pass(),
        Err(Error::Mismatch(m)) => reporter.record_failure(m),
        Err(_) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex64, Complex128};

    fn matrix<T: crate::dtype::Element>(data: &[T], m: usize, n: usize) -> MatrixRef<'_, T> {
        MatrixRef::from_column_major(data, m, n).unwrap()
    }

    #[test]
    fn test_unit_identical_f32() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        assert!(unit_check(&matrix(&a, 2, 2), &matrix(&a, 2, 2)).is_ok());
    }

    #[test]
    fn test_unit_mismatch_location() {
        let a = [1.0f64, 2.0, 3.0, 4.0];
        let b = [1.0f64, 2.0, 3.5, 4.0];
        let err = unit_check(&matrix(&a, 2, 2), &matrix(&b, 2, 2)).unwrap_err();
        match err {
            Error::Mismatch(m) => {
                assert_eq!((m.row, m.col), (0, 1));
                assert_eq!(m.kind, MismatchKind::Exact);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unit_integer_kinds() {
        let a = [1i32, 2, 3, 4];
        let b = [1i32, 2, 3, 5];
        assert!(unit_check(&matrix(&a, 2, 2), &matrix(&a, 2, 2)).is_ok());
        assert!(unit_check(&matrix(&a, 2, 2), &matrix(&b, 2, 2)).is_err());

        let s = [10u64, 20];
        assert!(unit_check(&matrix(&s, 2, 1), &matrix(&s, 2, 1)).is_ok());
    }

    #[test]
    fn test_unit_nan_requires_nan() {
        let r = [f32::NAN, 1.0];
        let good = [f32::NAN, 1.0];
        let bad = [0.0f32, 1.0];
        assert!(unit_check(&matrix(&r, 2, 1), &matrix(&good, 2, 1)).is_ok());
        let err = unit_check(&matrix(&r, 2, 1), &matrix(&bad, 2, 1)).unwrap_err();
        match err {
            Error::Mismatch(m) => assert_eq!(m.kind, MismatchKind::NanExpected),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unit_complex_nan_either_component() {
        let r = [Complex64::new(1.0, f32::NAN)];
        let good = [Complex64::new(f32::NAN, 5.0)];
        let bad = [Complex64::new(1.0, 2.0)];
        // Any NaN candidate satisfies a NaN reference, regardless of the
        // other component's value
        assert!(unit_check(&matrix(&r, 1, 1), &matrix(&good, 1, 1)).is_ok());
        assert!(unit_check(&matrix(&r, 1, 1), &matrix(&bad, 1, 1)).is_err());
    }

    #[test]
    fn test_unit_inf_exact_equal() {
        // Unit mode has no Inf branch: Inf == Inf holds exactly
        let r = [f64::INFINITY, f64::NEG_INFINITY];
        assert!(unit_check(&matrix(&r, 2, 1), &matrix(&r, 2, 1)).is_ok());
        let flipped = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        assert!(unit_check(&matrix(&r, 2, 1), &matrix(&flipped, 2, 1)).is_err());
    }

    #[test]
    fn test_unit_shape_mismatch() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let wide = matrix(&a, 1, 4);
        let tall = matrix(&a, 4, 1);
        assert!(matches!(
            unit_check(&wide, &tall),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_unit_ignores_padding() {
        let r = [1.0f32, 2.0, 99.0, 3.0, 4.0, -99.0];
        let c = [1.0f32, 2.0, -5.0, 3.0, 4.0, 5.0];
        let rv = MatrixRef::new(&r, 2, 2, 3).unwrap();
        let cv = MatrixRef::new(&c, 2, 2, 3).unwrap();
        assert!(unit_check(&rv, &cv).is_ok());
    }

    #[test]
    fn test_near_half_and_threefold_tolerance() {
        let r = [2.0f32];
        let tol = (2.0f32 * REL_TOL_F32).abs().max(10.0 * f32::EPSILON);
        let pass = [2.0f32 + 0.5 * tol];
        let fail = [2.0f32 + 1.5 * tol];
        assert!(near_check(&matrix(&r, 1, 1), &matrix(&pass, 1, 1)).is_ok());
        assert!(near_check(&matrix(&r, 1, 1), &matrix(&fail, 1, 1)).is_err());
    }

    #[test]
    fn test_near_inf_requires_inf() {
        let r = [f64::INFINITY];
        let good = [f64::NEG_INFINITY]; // no magnitude or sign check
        let bad = [1e308f64];
        assert!(near_check(&matrix(&r, 1, 1), &matrix(&good, 1, 1)).is_ok());
        let err = near_check(&matrix(&r, 1, 1), &matrix(&bad, 1, 1)).unwrap_err();
        match err {
            Error::Mismatch(m) => assert_eq!(m.kind, MismatchKind::InfExpected),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_near_complex_imaginary_only_violation() {
        let r = [Complex128::new(1.0, 1.0)];
        let c = [Complex128::new(1.0, 1.5)];
        let err = near_check(&matrix(&r, 1, 1), &matrix(&c, 1, 1)).unwrap_err();
        match err {
            Error::Mismatch(m) => match m.kind {
                MismatchKind::Tolerance(v) => assert_eq!(v.component, Some(Component::Imag)),
                other => panic!("unexpected kind: {other:?}"),
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_sized_regions_pass() {
        let empty: [f64; 0] = [];
        let a = matrix(&empty, 0, 3);
        let b = matrix(&empty, 0, 3);
        assert!(unit_check(&a, &b).is_ok());
        assert!(near_check(&a, &b).is_ok());
    }

    #[test]
    fn test_fail_fast_reports_first_in_scan_order() {
        // Column-major scan: (1, 0) comes before (0, 1)
        let r = [1.0f64, 2.0, 3.0, 4.0];
        let c = [1.0f64, -2.0, -3.0, 4.0];
        let err = unit_check(&matrix(&r, 2, 2), &matrix(&c, 2, 2)).unwrap_err();
        match err {
            Error::Mismatch(m) => assert_eq!((m.row, m.col), (1, 0)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reporter_records_outcomes() {
        #[derive(Default)]
        struct Recording {
            passes: usize,
            failures: Vec<Mismatch>,
        }

        impl CheckReporter for Recording {
            fn record_pass(&mut self) {
                self.passes += 1;
            }

            fn record_failure(&mut self, mismatch: &Mismatch) {
                self.failures.push(mismatch.clone());
            }
        }

        let a = [1.0f32, 2.0];
        let b = [1.0f32, 2.5];
        let mut rec = Recording::default();
        assert!(unit_check_with(&matrix(&a, 2, 1), &matrix(&a, 2, 1), &mut rec).is_ok());
        assert!(unit_check_with(&matrix(&a, 2, 1), &matrix(&b, 2, 1), &mut rec).is_err());
        assert_eq!(rec.passes, 1);
        assert_eq!(rec.failures.len(), 1);
        assert_eq!((rec.failures[0].row, rec.failures[0].col), (1, 0));
    }
}
