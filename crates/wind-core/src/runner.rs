// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Runner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wires a run's setup and profile files to the matching consistency
//! check. Tests 1 and 2 read the velocity profile, test 3 the density
//! profile; either way the profile's declared grid size must agree with
//! the setup file before any physics is compared.

use std::fmt;

use serde::Serialize;

use crate::validate::{
    check_constant_force_consistency, check_mdot_constancy, check_parker_consistency, Tolerances,
    ValidationTest, ValidationVerdict,
};
use wind_types::config::SetupParameters;
use wind_types::error::{WindError, WindResult};
use wind_types::profile::{DensityProfile, VelocityProfile};

fn require_matching_grid(setup_nrad: usize, profile_nrad: usize, origin: &str) -> WindResult<()> {
    if setup_nrad != profile_nrad {
        return Err(WindError::Schema(format!(
            "{origin}: profile declares {profile_nrad} samples but setup says nrad = {setup_nrad}"
        )));
    }
    Ok(())
}

/// Run one validation test against a completed run.
///
/// Loads the profile file the selected test needs and hands the scalars
/// to the matching check.
pub fn run_test(
    test: ValidationTest,
    setup: &SetupParameters,
    profile_path: &str,
    tol: &Tolerances,
) -> WindResult<ValidationVerdict> {
    match test {
        ValidationTest::ZeroForce => {
            let profile = VelocityProfile::from_file(profile_path)?;
            require_matching_grid(setup.nrad, profile.nrad, profile_path)?;
            check_parker_consistency(setup.sound_speed_kms, setup.gm, setup.rcrit, tol)
        }
        ValidationTest::ConstantForce => {
            let profile = VelocityProfile::from_file(profile_path)?;
            require_matching_grid(setup.nrad, profile.nrad, profile_path)?;
            check_constant_force_consistency(setup.sound_speed_kms, setup.gm, setup.rcrit, tol)
        }
        ValidationTest::MdotConstancy => {
            let profile = DensityProfile::from_file(profile_path)?;
            require_matching_grid(setup.nrad, profile.nrad, profile_path)?;
            check_mdot_constancy(&profile.mdot, tol)
        }
    }
}

/// Named collection of verdicts from one validation invocation.
#[derive(Debug, Clone, Serialize)]
pub struct TestSummary {
    pub name: String,
    pub verdicts: Vec<ValidationVerdict>,
}

impl TestSummary {
    pub fn new(name: &str) -> Self {
        TestSummary {
            name: name.to_string(),
            verdicts: Vec::new(),
        }
    }

    pub fn push(&mut self, verdict: ValidationVerdict) {
        self.verdicts.push(verdict);
    }

    pub fn passed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.verdicts.len()
    }

    /// True when every verdict passed. The binary maps this to its exit
    /// code.
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }
}

impl fmt::Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "═══ {}: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        )?;
        for v in &self.verdicts {
            writeln!(f, "  {v}")?;
        }
        Ok(())
    }
}
