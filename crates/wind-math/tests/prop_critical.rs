// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Property-Based Tests (proptest) for wind-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for wind-math using proptest.
//!
//! Covers: Parker radius positivity and GM-linearity, convergence of the
//! constant-force root to the Parker radius, nearest-index invariants.

use ndarray::Array1;
use proptest::prelude::*;
use wind_math::critical::{constant_force_critical_radius, parker_critical_radius};
use wind_math::grid::nearest_index;
use wind_types::constants::KMS_TO_CMS;

// ── Parker Radius Properties ─────────────────────────────────────────

proptest! {
    /// r_c > 0 for any positive sound speed and gravitational parameter.
    #[test]
    fn parker_radius_positive(
        gm in 1.0e20f64..1.0e26,
        cs_kms in 0.5f64..100.0,
    ) {
        let r = parker_critical_radius(gm, cs_kms).unwrap();
        prop_assert!(r > 0.0, "r = {}", r);
        prop_assert!(r.is_finite());
    }

    /// Scaling GM by k scales the radius by k (linearity in GM).
    #[test]
    fn parker_radius_linear_in_gm(
        gm in 1.0e20f64..1.0e26,
        cs_kms in 0.5f64..100.0,
        k in 0.1f64..100.0,
    ) {
        let r1 = parker_critical_radius(gm, cs_kms).unwrap();
        let rk = parker_critical_radius(k * gm, cs_kms).unwrap();
        prop_assert!(
            (rk - k * r1).abs() / (k * r1) < 1e-12,
            "r(k·GM) = {}, k·r(GM) = {}", rk, k * r1
        );
    }
}

// ── Constant-Force Root Properties ───────────────────────────────────

proptest! {
    /// The quadratic root converges to the Parker radius as g0 → 0⁺.
    ///
    /// g0 is parameterized through x = g0·GM/c⁴ so the leading correction
    /// x/4 stays small while staying far above sqrt rounding noise.
    #[test]
    fn constant_force_root_converges_to_parker(
        gm in 1.0e21f64..1.0e25,
        cs_kms in 1.0f64..50.0,
        x in 1.0e-6f64..1.0e-4,
    ) {
        let c4 = (cs_kms * KMS_TO_CMS).powi(4);
        let g0 = x * c4 / gm;

        let parker = parker_critical_radius(gm, cs_kms).unwrap();
        let r = constant_force_critical_radius(gm, cs_kms, g0).unwrap();

        prop_assert!(
            (r - parker).abs() / parker < x,
            "r = {}, parker = {}, x = {}", r, parker, x
        );
    }

    /// The root always undercuts the Parker radius for an outward force.
    #[test]
    fn constant_force_root_below_parker(
        gm in 1.0e21f64..1.0e25,
        cs_kms in 1.0f64..50.0,
        x in 1.0e-4f64..1.0,
    ) {
        let c4 = (cs_kms * KMS_TO_CMS).powi(4);
        let g0 = x * c4 / gm;

        let parker = parker_critical_radius(gm, cs_kms).unwrap();
        let r = constant_force_critical_radius(gm, cs_kms, g0).unwrap();

        prop_assert!(r > 0.0);
        prop_assert!(r < parker, "r = {} should sit below parker = {}", r, parker);
    }
}

// ── Nearest-Index Properties ─────────────────────────────────────────

proptest! {
    /// A single-element array maps every target to index 0.
    #[test]
    fn nearest_index_single_element(
        r0 in 1.0e9f64..1.0e13,
        target in -1.0e13f64..1.0e13,
    ) {
        let rad = Array1::from_vec(vec![r0]);
        prop_assert_eq!(nearest_index(&rad, target).unwrap(), 0);
    }

    /// On a uniform grid the chosen sample lies within half a spacing
    /// of any in-range target.
    #[test]
    fn nearest_index_within_half_spacing(
        n in 2usize..200,
        t in 0.0f64..1.0,
    ) {
        let r_min = 1.0e10;
        let r_max = 1.0e12;
        let rad = Array1::linspace(r_min, r_max, n);
        let dr = (r_max - r_min) / (n as f64 - 1.0);
        let target = r_min + t * (r_max - r_min);

        let idx = nearest_index(&rad, target).unwrap();
        prop_assert!(
            (rad[idx] - target).abs() <= dr / 2.0 * (1.0 + 1e-12),
            "idx = {}, |rad[idx] - target| = {}, dr/2 = {}",
            idx, (rad[idx] - target).abs(), dr / 2.0
        );
    }

    /// The returned index is a true argmin over the whole array.
    #[test]
    fn nearest_index_is_argmin(
        values in prop::collection::vec(1.0e9f64..1.0e13, 1..64),
        target in 1.0e9f64..1.0e13,
    ) {
        let rad = Array1::from_vec(values);
        let idx = nearest_index(&rad, target).unwrap();
        let best = (rad[idx] - target).abs();
        for &r in rad.iter() {
            prop_assert!((r - target).abs() >= best);
        }
    }
}
