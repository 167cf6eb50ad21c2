// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Sound speed unit conversion: setup files carry cs in km/s,
/// all radii and accelerations are cgs.
pub const KMS_TO_CMS: f64 = 1.0e5;

/// Default relative-error acceptance threshold for the consistency checks.
///
/// The analytic references are closed forms, so the only discrepancy a
/// healthy run shows is discretization error; 1e-4 rejects anything
/// coarser than that.
pub const REL_TOL: f64 = 1e-4;

/// Uniform outward acceleration (cm/s²) of the constant-force reference
/// run. Must match the force namelist the run was produced with.
pub const G0_CONST: f64 = 1e-5;
