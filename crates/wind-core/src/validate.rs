// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Validate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Consistency checks comparing a completed run against analytic
//! references.
//!
//! Tests 1 and 2 pin the run's critical radius to a closed form; test 3
//! is a conservation check with no closed form: in steady state the mass
//! flux through every shell must be identical.

use std::fmt;

use ndarray::Array1;
use serde::Serialize;

use wind_math::critical::{constant_force_critical_radius, parker_critical_radius};
use wind_types::constants::{G0_CONST, REL_TOL};
use wind_types::error::{WindError, WindResult};

/// Acceptance thresholds for one validation invocation.
///
/// Passed explicitly to every check so tests can tighten or loosen them;
/// nothing reads process-global state.
#[derive(Debug, Clone, Copy)]
pub struct Tolerances {
    /// Relative-error pass threshold for every check.
    pub rel_tol: f64,
    /// Uniform outward acceleration [cm/s²] the constant-force run used.
    pub g0: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            rel_tol: REL_TOL,
            g0: G0_CONST,
        }
    }
}

/// Which consistency check produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationTest {
    /// Zero-force run: the critical radius must sit at the Parker radius.
    ZeroForce,
    /// Constant-force run: the critical radius must match the quadratic root.
    ConstantForce,
    /// Steady run with any force field: mass flux must be radius-independent.
    MdotConstancy,
}

impl ValidationTest {
    /// Resolve the CLI-facing test number (1, 2 or 3).
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::ZeroForce),
            2 => Some(Self::ConstantForce),
            3 => Some(Self::MdotConstancy),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Self::ZeroForce => 1,
            Self::ConstantForce => 2,
            Self::MdotConstancy => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ZeroForce => "parker point",
            Self::ConstantForce => "constant force",
            Self::MdotConstancy => "mdot constancy",
        }
    }
}

/// Outcome of one consistency check. Built once, printed, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationVerdict {
    pub test: ValidationTest,
    pub measured: f64,
    pub reference: f64,
    pub relative_error: f64,
    pub passed: bool,
}

impl fmt::Display for ValidationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(
            f,
            "{status} test {} ({}): rel_err = {:.3e} (measured {:.6e}, reference {:.6e})",
            self.test.id(),
            self.test.label(),
            self.relative_error,
            self.measured,
            self.reference
        )
    }
}

/// Normalized discrepancy |measured − reference| / reference.
pub fn relative_error(measured: f64, reference: f64) -> WindResult<f64> {
    if reference == 0.0 {
        return Err(WindError::Domain(
            "relative error undefined for zero reference".into(),
        ));
    }
    Ok((measured - reference).abs() / reference)
}

fn verdict(
    test: ValidationTest,
    measured: f64,
    reference: f64,
    rel_tol: f64,
) -> WindResult<ValidationVerdict> {
    let err = relative_error(measured, reference)?;
    Ok(ValidationVerdict {
        test,
        measured,
        reference,
        relative_error: err,
        passed: err < rel_tol,
    })
}

/// Test 1: with every force term zero the run's critical radius must
/// coincide with the classical Parker radius.
pub fn check_parker_consistency(
    cs_kms: f64,
    gm: f64,
    rcrit: f64,
    tol: &Tolerances,
) -> WindResult<ValidationVerdict> {
    let reference = parker_critical_radius(gm, cs_kms)?;
    verdict(ValidationTest::ZeroForce, rcrit, reference, tol.rel_tol)
}

/// Test 2: with a uniform outward acceleration `tol.g0` the critical
/// radius must match the analytic quadratic root.
pub fn check_constant_force_consistency(
    cs_kms: f64,
    gm: f64,
    rcrit: f64,
    tol: &Tolerances,
) -> WindResult<ValidationVerdict> {
    let reference = constant_force_critical_radius(gm, cs_kms, tol.g0)?;
    verdict(ValidationTest::ConstantForce, rcrit, reference, tol.rel_tol)
}

/// Test 3: the normalized spread (max − min) / min of the mass-loss-rate
/// column must stay below tolerance — continuity demands a
/// radius-independent flux whatever the force field looks like.
///
/// The verdict stores max as measured and min as reference, so the
/// relative-error field is exactly the spread.
pub fn check_mdot_constancy(
    mdot: &Array1<f64>,
    tol: &Tolerances,
) -> WindResult<ValidationVerdict> {
    if mdot.is_empty() {
        return Err(WindError::EmptyInput("mdot array is empty".into()));
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &m in mdot.iter() {
        min = min.min(m);
        max = max.max(m);
    }
    if min <= 0.0 {
        return Err(WindError::Domain(format!(
            "min(mdot) = {min:.3e} g/s is not positive; the upstream solution is unphysical"
        )));
    }
    let spread = (max - min) / min;
    Ok(ValidationVerdict {
        test: ValidationTest::MdotConstancy,
        measured: max,
        reference: min,
        relative_error: spread,
        passed: spread < tol.rel_tol,
    })
}
