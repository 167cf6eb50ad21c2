// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial profile files written at the end of an escape run.
//!
//! Format: line 1 is `<label> <nrad>`, line 2 names the columns, the
//! remaining lines are whitespace-separated numeric rows. Both profile
//! variants go through one named-column parser; only the required
//! column set differs.

use ndarray::Array1;

use crate::error::{WindError, WindResult};

/// Radius, force and velocity samples on the radial grid.
#[derive(Debug, Clone)]
pub struct VelocityProfile {
    pub nrad: usize,
    pub rad: Array1<f64>,   // radius [cm]
    pub force: Array1<f64>, // extra outward acceleration [cm/s²]
    pub vel: Array1<f64>,   // wind velocity [km/s]
}

impl VelocityProfile {
    /// Load from a velocity profile file (columns `rad`, `force`, `vel`).
    pub fn from_file(path: &str) -> WindResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let (nrad, mut cols) = parse_named_columns(&contents, path, &["rad", "force", "vel"])?;
        let vel = cols.pop().unwrap_or_default();
        let force = cols.pop().unwrap_or_default();
        let rad = cols.pop().unwrap_or_default();
        Ok(VelocityProfile {
            nrad,
            rad,
            force,
            vel,
        })
    }
}

/// Radius, density and mass-loss-rate samples on the radial grid.
#[derive(Debug, Clone)]
pub struct DensityProfile {
    pub nrad: usize,
    pub rad: Array1<f64>,     // radius [cm]
    pub density: Array1<f64>, // mass density [g/cm³]
    pub mdot: Array1<f64>,    // mass-loss rate through the shell [g/s]
}

impl DensityProfile {
    /// Load from a density profile file (columns `rad`, `density`, `mdot`).
    pub fn from_file(path: &str) -> WindResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let (nrad, mut cols) = parse_named_columns(&contents, path, &["rad", "density", "mdot"])?;
        let mdot = cols.pop().unwrap_or_default();
        let density = cols.pop().unwrap_or_default();
        let rad = cols.pop().unwrap_or_default();
        Ok(DensityProfile {
            nrad,
            rad,
            density,
            mdot,
        })
    }
}

/// Parse a named-column profile table.
///
/// Returns the header-declared sample count and one array per entry of
/// `required`, in the order requested. The file may carry extra columns;
/// they are ignored. Any missing required column, ragged or non-numeric
/// row, or row count differing from the declared count is a schema error.
fn parse_named_columns(
    contents: &str,
    origin: &str,
    required: &[&str],
) -> WindResult<(usize, Vec<Array1<f64>>)> {
    let mut lines = contents.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| WindError::Schema(format!("{origin}: empty profile file")))?;
    let mut header_toks = header.split_whitespace();
    let _label = header_toks
        .next()
        .ok_or_else(|| WindError::Schema(format!("{origin}: blank header line")))?;
    let nrad: usize = header_toks
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or_else(|| {
            WindError::Schema(format!("{origin}: header must be '<label> <nrad>'"))
        })?;

    let (_, names_line) = lines
        .next()
        .ok_or_else(|| WindError::Schema(format!("{origin}: missing column-name row")))?;
    let names: Vec<&str> = names_line.split_whitespace().collect();

    // Resolve each required column to its position in the table.
    let mut positions = Vec::with_capacity(required.len());
    for name in required {
        let pos = names.iter().position(|n| n == name).ok_or_else(|| {
            WindError::Schema(format!("{origin}: missing required column '{name}'"))
        })?;
        positions.push(pos);
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(nrad); required.len()];
    let mut rows = 0usize;
    for (lineno, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() != names.len() {
            return Err(WindError::Schema(format!(
                "{origin}:{}: expected {} columns, found {}",
                lineno + 1,
                names.len(),
                values.len()
            )));
        }
        for (slot, &pos) in positions.iter().enumerate() {
            let value: f64 = values[pos].parse().map_err(|_| {
                WindError::Schema(format!(
                    "{origin}:{}: non-numeric value '{}' in column '{}'",
                    lineno + 1,
                    values[pos],
                    required[slot]
                ))
            })?;
            columns[slot].push(value);
        }
        rows += 1;
    }

    if rows != nrad {
        return Err(WindError::Schema(format!(
            "{origin}: header declares {nrad} samples, found {rows} rows"
        )));
    }

    Ok((nrad, columns.into_iter().map(Array1::from_vec).collect()))
}
