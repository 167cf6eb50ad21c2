// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lookups on the discretized radial grid.
//!
//! The analytic critical radius rarely lands on a grid point; these
//! helpers locate the nearest sample and read profile values there.

use ndarray::Array1;

use wind_types::error::{WindError, WindResult};

/// Index of the grid point closest to `target`.
///
/// Linear scan with a strict `<` comparison, so the first (lowest)
/// index wins when two distances tie exactly.
pub fn nearest_index(rad: &Array1<f64>, target: f64) -> WindResult<usize> {
    if rad.is_empty() {
        return Err(WindError::EmptyInput(
            "nearest_index on an empty radius array".into(),
        ));
    }
    let mut best = 0usize;
    let mut diff = f64::INFINITY;
    for (i, &r) in rad.iter().enumerate() {
        let d = (target - r).abs();
        if d < diff {
            diff = d;
            best = i;
        }
    }
    Ok(best)
}

/// Density sample at a located critical index.
pub fn critical_density(density: &Array1<f64>, index: usize) -> WindResult<f64> {
    density
        .get(index)
        .copied()
        .ok_or(WindError::IndexOutOfBounds {
            index,
            len: density.len(),
        })
}
