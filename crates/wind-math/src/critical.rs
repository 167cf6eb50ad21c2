// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Critical
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form critical radii of the transonic wind equation.
//!
//! Two force configurations admit an analytic sonic point: the classical
//! zero-force Parker wind, and a uniform outward acceleration g0 where
//! the critical condition reduces to a quadratic in r.

use wind_types::constants::KMS_TO_CMS;
use wind_types::error::{WindError, WindResult};

/// Parker critical (sonic) radius.
///
/// r_c = GM / (2 c_s²) with c_s in cm/s.
///
/// - `gm`: gravitational parameter GM [cm³/s²]
/// - `cs_kms`: isothermal sound speed [km/s]
///
/// Returns the sonic radius [cm].
pub fn parker_critical_radius(gm: f64, cs_kms: f64) -> WindResult<f64> {
    if cs_kms == 0.0 {
        return Err(WindError::Domain(
            "Parker radius undefined for zero sound speed".into(),
        ));
    }
    let cs = cs_kms * KMS_TO_CMS;
    Ok(gm / (2.0 * cs * cs))
}

/// Critical radius under a uniform outward acceleration `g0` [cm/s²].
///
/// The critical condition g0 r² + 2 c_s² r − GM = 0 has one positive
/// root:
///
/// r_c = (−2 c_s² + sqrt(4 c_s⁴ + 4 g0 GM)) / (2 g0)
///
/// A negative discriminant means no real sonic point exists for this
/// parameter combination. `g0 = 0` degenerates to the Parker case and
/// is rejected; use [`parker_critical_radius`] there instead.
pub fn constant_force_critical_radius(gm: f64, cs_kms: f64, g0: f64) -> WindResult<f64> {
    if g0 == 0.0 {
        return Err(WindError::Domain(
            "g0 = 0 degenerates to the Parker case; use parker_critical_radius".into(),
        ));
    }
    let cs2 = (cs_kms * KMS_TO_CMS).powi(2);
    let discriminant = 4.0 * cs2 * cs2 + 4.0 * g0 * gm;
    if discriminant < 0.0 {
        return Err(WindError::Domain(format!(
            "no real critical point: discriminant = {discriminant:.3e}"
        )));
    }
    Ok((-2.0 * cs2 + discriminant.sqrt()) / (2.0 * g0))
}
