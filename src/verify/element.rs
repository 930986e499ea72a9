//! Per-kind comparison dispatch traits
//!
//! The comparators in this module's parent are generic over two traits:
//! `ExactCheck` (bit-exact equality plus a NaN predicate) and `NearCheck`
//! (tolerance comparison plus an Infinity predicate). Each supported element
//! kind supplies its own predicates and tolerance derivation; the scan
//! algorithm is written once. Integer kinds implement only `ExactCheck`, so
//! a tolerance comparison over them is rejected at compile time.

use crate::dtype::{Complex64, Complex128, Element};

/// Relative tolerance factor for single-precision comparison
///
/// Single precision carries ~7 decimal digits, so the relative bound is
/// coarser than the double-precision one.
pub const REL_TOL_F32: f32 = 1e-3;

/// Relative tolerance factor for double-precision comparison
pub const REL_TOL_F64: f64 = 1e-10;

/// Which component of a complex value violated the tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Real part
    Real,
    /// Imaginary part
    Imag,
}

/// A tolerance violation: the absolute difference that met or exceeded the
/// derived tolerance, widened to f64 for reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearViolation {
    /// Absolute difference between reference and candidate
    pub diff: f64,
    /// Tolerance derived from the reference value
    pub tol: f64,
    /// Failing component for complex kinds, None for real kinds
    pub component: Option<Component>,
}

impl NearViolation {
    fn tag(mut self, component: Component) -> Self {
        self.component = Some(component);
        self
    }
}

/// Exact comparison dispatch: bit-exact equality and the NaN predicate
pub trait ExactCheck: Element {
    /// True if the value is NaN (either component for complex kinds)
    ///
    /// Integer kinds have no NaN representation and keep the default.
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    /// Kind-appropriate exact equality
    ///
    /// Complex kinds compare real and imaginary parts independently; both
    /// must hold.
    #[inline]
    fn exact_eq(self, other: Self) -> bool {
        self == other
    }
}

/// Tolerance comparison dispatch for floating kinds
///
/// The tolerance is derived per element from the reference value:
/// `max(|r| * rel, 10 * epsilon)` with the kind's relative factor and machine
/// epsilon. The `10 * epsilon` floor guards near-zero reference values where
/// a purely relative bound would demand impossibly tight agreement.
pub trait NearCheck: ExactCheck {
    /// True if the value is infinite (either component for complex kinds)
    fn is_inf(self) -> bool;

    /// Compare `self` (the reference) against `candidate` within tolerance
    ///
    /// Returns the first violating component, or None when the candidate is
    /// within tolerance. The comparison passes only when the absolute
    /// difference is strictly below the derived tolerance.
    fn near_violation(self, candidate: Self) -> Option<NearViolation>;
}

impl ExactCheck for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl ExactCheck for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

impl ExactCheck for Complex64 {
    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl ExactCheck for Complex128 {
    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl ExactCheck for i32 {}

impl ExactCheck for u64 {}

impl NearCheck for f32 {
    #[inline]
    fn is_inf(self) -> bool {
        self.is_infinite()
    }

    #[inline]
    fn near_violation(self, candidate: Self) -> Option<NearViolation> {
        let tol = (self * REL_TOL_F32).abs().max(10.0 * f32::EPSILON);
        let diff = (self - candidate).abs();
        if diff >= tol {
            Some(NearViolation {
                diff: diff as f64,
                tol: tol as f64,
                component: None,
            })
        } else {
            None
        }
    }
}

impl NearCheck for f64 {
    #[inline]
    fn is_inf(self) -> bool {
        self.is_infinite()
    }

    #[inline]
    fn near_violation(self, candidate: Self) -> Option<NearViolation> {
        let tol = (self * REL_TOL_F64).abs().max(10.0 * f64::EPSILON);
        let diff = (self - candidate).abs();
        if diff >= tol {
            Some(NearViolation {
                diff,
                tol,
                component: None,
            })
        } else {
            None
        }
    }
}

impl NearCheck for Complex64 {
    #[inline]
    fn is_inf(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    #[inline]
    fn near_violation(self, candidate: Self) -> Option<NearViolation> {
        // Real and imaginary parts carry independent tolerances; both must
        // hold. The first failing component is reported.
        if let Some(v) = self.re.near_violation(candidate.re) {
            return Some(v.tag(Component::Real));
        }
        self.im
            .near_violation(candidate.im)
            .map(|v| v.tag(Component::Imag))
    }
}

impl NearCheck for Complex128 {
    #[inline]
    fn is_inf(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    #[inline]
    fn near_violation(self, candidate: Self) -> Option<NearViolation> {
        if let Some(v) = self.re.near_violation(candidate.re) {
            return Some(v.tag(Component::Real));
        }
        self.im
            .near_violation(candidate.im)
            .map(|v| v.tag(Component::Imag))
    }
}
