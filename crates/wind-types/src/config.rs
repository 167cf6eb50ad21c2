// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{WindError, WindResult};

/// Number of scalar rows a setup file must carry.
const SETUP_ROWS: usize = 9;

/// Scalar parameters of one completed escape run, read from its
/// `setup.data` file.
///
/// The file is a whitespace-delimited two-column table; the second
/// column holds, in fixed row order:
/// `[nrad, -, -, temperature, adiabatic_index, planet_mass, cs, GM, rcrit]`.
/// Rows 1 and 2 are reserved and not consumed.
#[derive(Debug, Clone)]
pub struct SetupParameters {
    /// Radial grid point count.
    pub nrad: usize,
    /// Wind temperature [K].
    pub temperature: f64,
    /// Adiabatic index.
    pub adiabatic_index: f64,
    /// Planet mass [g].
    pub planet_mass: f64,
    /// Isothermal sound speed [km/s].
    pub sound_speed_kms: f64,
    /// Gravitational parameter GM [cm³/s²].
    pub gm: f64,
    /// Critical radius located by the run [cm].
    pub rcrit: f64,
}

impl SetupParameters {
    /// Load from a setup file.
    pub fn from_file(path: &str) -> WindResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, path)
    }

    /// Parse setup-file contents. `origin` only labels error messages.
    fn parse(contents: &str, origin: &str) -> WindResult<Self> {
        // Collect the second-column token of every non-empty row.
        let mut tokens: Vec<(usize, &str)> = Vec::with_capacity(SETUP_ROWS);
        for (lineno, line) in contents.lines().enumerate() {
            let mut cols = line.split_whitespace();
            let Some(_label) = cols.next() else {
                continue; // blank line
            };
            let Some(value) = cols.next() else {
                return Err(WindError::Parse(format!(
                    "{origin}:{}: expected two columns",
                    lineno + 1
                )));
            };
            tokens.push((lineno + 1, value));
        }

        if tokens.len() < SETUP_ROWS {
            return Err(WindError::Parse(format!(
                "{origin}: expected {SETUP_ROWS} scalar rows, found {}",
                tokens.len()
            )));
        }

        // Rows 1-2 are reserved: present in the file but never consumed,
        // so they are not required to parse.
        let numeric = |row: usize| -> WindResult<f64> {
            let (lineno, tok) = tokens[row];
            let value: f64 = tok.parse().map_err(|_| {
                WindError::Parse(format!("{origin}:{lineno}: non-numeric value '{tok}'"))
            })?;
            if !value.is_finite() {
                return Err(WindError::Parse(format!(
                    "{origin}:{lineno}: non-finite value '{tok}'"
                )));
            }
            Ok(value)
        };

        let nrad_raw = numeric(0)?;
        if nrad_raw < 1.0 || nrad_raw.fract() != 0.0 {
            return Err(WindError::Parse(format!(
                "{origin}: nrad must be a positive integer, got '{}'",
                tokens[0].1
            )));
        }

        Ok(SetupParameters {
            nrad: nrad_raw as usize,
            temperature: numeric(3)?,
            adiabatic_index: numeric(4)?,
            planet_mass: numeric(5)?,
            sound_speed_kms: numeric(6)?,
            gm: numeric(7)?,
            rcrit: numeric(8)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Build path relative to the workspace root.
    /// CARGO_MANIFEST_DIR points to crates/wind-types/ at compile time,
    /// so we go up 2 levels to reach the repository root.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn setup_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    const GOOD_SETUP: &str = "\
nrad        200
rmin        7.0e9
rmax        7.0e12
temp        1.0e4
adia        1.0
mplan       1.898e30
cs          10.0
gm          1.0e23
rcrit       5.0e10
";

    #[test]
    fn test_parse_good_setup() {
        let setup = SetupParameters::parse(GOOD_SETUP, "inline").unwrap();
        assert_eq!(setup.nrad, 200);
        assert!((setup.temperature - 1.0e4).abs() < 1e-10);
        assert!((setup.adiabatic_index - 1.0).abs() < 1e-12);
        assert!((setup.planet_mass - 1.898e30).abs() < 1e20);
        assert!((setup.sound_speed_kms - 10.0).abs() < 1e-12);
        assert!((setup.gm - 1.0e23).abs() < 1e13);
        assert!((setup.rcrit - 5.0e10).abs() < 1.0);
    }

    #[test]
    fn test_short_file_rejected() {
        let contents = "nrad 200\nrmin 7.0e9\n";
        let err = SetupParameters::parse(contents, "inline").unwrap_err();
        assert!(matches!(err, WindError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_non_numeric_required_row_rejected() {
        let bad = GOOD_SETUP.replace("10.0", "ten");
        let err = SetupParameters::parse(&bad, "inline").unwrap_err();
        assert!(matches!(err, WindError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_reserved_rows_may_be_non_numeric() {
        // Rows 1-2 are reserved; a placeholder there must not fail the read.
        let contents = GOOD_SETUP
            .replace("rmin        7.0e9", "rmin        auto")
            .replace("rmax        7.0e12", "rmax        auto");
        let setup = SetupParameters::parse(&contents, "inline").unwrap();
        assert_eq!(setup.nrad, 200);
    }

    #[test]
    fn test_zero_nrad_rejected() {
        let bad = GOOD_SETUP.replace("nrad        200", "nrad        0");
        let err = SetupParameters::parse(&bad, "inline").unwrap_err();
        assert!(matches!(err, WindError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_second_column_rejected() {
        let bad = GOOD_SETUP.replace("cs          10.0", "cs");
        let err = SetupParameters::parse(&bad, "inline").unwrap_err();
        assert!(matches!(err, WindError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_load_all_shipped_setups() {
        let setups = [
            "validation/zero_force/setup.data",
            "validation/constant_force/setup.data",
            "validation/poly_force/setup.data",
        ];
        for relative in &setups {
            let path = setup_path(relative);
            let result = SetupParameters::from_file(&path);
            assert!(result.is_ok(), "Failed to load setup: {path}");
        }
    }

    #[test]
    fn test_zero_force_setup_values() {
        let setup =
            SetupParameters::from_file(&setup_path("validation/zero_force/setup.data")).unwrap();
        assert_eq!(setup.nrad, 16);
        assert!((setup.sound_speed_kms - 10.0).abs() < 1e-12);
        assert!((setup.gm - 1.0e23).abs() < 1e13);
        assert!((setup.rcrit - 5.0e10).abs() < 1.0);
    }
}
