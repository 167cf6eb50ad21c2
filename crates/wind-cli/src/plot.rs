// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — Plot
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Diagnostic plot emission.
//!
//! Each diagnostic is written as a gnuplot script plus a companion data
//! table; rendering the PNG is an external `gnuplot <script>` call. The
//! suite itself only writes text artifacts.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use wind_math::critical::parker_critical_radius;
use wind_math::grid::{critical_density, nearest_index};
use wind_types::config::SetupParameters;
use wind_types::profile::{DensityProfile, VelocityProfile};

fn write_artifacts(out_dir: &Path, stem: &str, dat: &str, gp: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let dat_path = out_dir.join(format!("{stem}.dat"));
    fs::write(&dat_path, dat).with_context(|| format!("writing {}", dat_path.display()))?;

    let gp_path = out_dir.join(format!("{stem}.gp"));
    fs::write(&gp_path, gp).with_context(|| format!("writing {}", gp_path.display()))?;

    info!("wrote {} and {}", dat_path.display(), gp_path.display());
    Ok(gp_path)
}

/// Velocity throughout the atmosphere, with the sound speed, the
/// analytic Parker point and the run's critical point marked.
pub fn plot_velocity(
    setup: &SetupParameters,
    profile: &VelocityProfile,
    out_dir: &Path,
) -> Result<PathBuf> {
    let parker = parker_critical_radius(setup.gm, setup.sound_speed_kms)?;

    let mut dat = String::from("# rad[cm]  vel[km/s]\n");
    for (&r, &v) in profile.rad.iter().zip(profile.vel.iter()) {
        writeln!(dat, "{r:.6e}  {v:.6e}")?;
    }

    let mut gp = String::new();
    writeln!(gp, "set terminal pngcairo size 900,600")?;
    writeln!(gp, "set output 'velocity_plot.png'")?;
    writeln!(gp, "set logscale x")?;
    writeln!(gp, "set grid")?;
    writeln!(gp, "set key top left")?;
    writeln!(gp, "set xlabel 'r [cm]'")?;
    writeln!(gp, "set ylabel 'v [km/s]'")?;
    writeln!(gp, "set yrange [-0.5:20]")?;
    writeln!(gp, "set title 'velocity, nrad={}'", profile.nrad)?;
    writeln!(
        gp,
        "set arrow from {parker:.6e}, graph 0 to {parker:.6e}, graph 1 nohead dashtype 2 lc rgb 'green'"
    )?;
    writeln!(gp, "set label 'parker point' at {parker:.6e}, graph 0.95")?;
    writeln!(
        gp,
        "set arrow from {0:.6e}, graph 0 to {0:.6e}, graph 1 nohead dashtype 3 lc rgb 'blue'",
        setup.rcrit
    )?;
    writeln!(gp, "set label 'critical point' at {:.6e}, graph 0.90", setup.rcrit)?;
    writeln!(
        gp,
        "plot 'velocity_plot.dat' using 1:2 with lines lc rgb 'blue' title 'velocity', \\"
    )?;
    writeln!(
        gp,
        "     {:.6e} with lines lc rgb 'red' title 'sound speed'",
        setup.sound_speed_kms
    )?;

    write_artifacts(out_dir, "velocity_plot", &dat, &gp)
}

/// Density throughout the atmosphere, log-log, with the critical radius
/// and the density sampled there marked.
pub fn plot_density(
    setup: &SetupParameters,
    profile: &DensityProfile,
    out_dir: &Path,
) -> Result<PathBuf> {
    let indx = nearest_index(&profile.rad, setup.rcrit)?;
    let rho_crit = critical_density(&profile.density, indx)?;

    let mut dat = String::from("# rad[cm]  density[g/cm3]\n");
    for (&r, &rho) in profile.rad.iter().zip(profile.density.iter()) {
        writeln!(dat, "{r:.6e}  {rho:.6e}")?;
    }

    let mut gp = String::new();
    writeln!(gp, "set terminal pngcairo size 900,600")?;
    writeln!(gp, "set output 'density_plot.png'")?;
    writeln!(gp, "set logscale xy")?;
    writeln!(gp, "set grid")?;
    writeln!(gp, "set key top right")?;
    writeln!(gp, "set xlabel 'r [cm]'")?;
    writeln!(gp, "set ylabel 'rho [g/cm^3]'")?;
    writeln!(gp, "set title 'density, nrad={}'", profile.nrad)?;
    writeln!(
        gp,
        "set arrow from {0:.6e}, graph 0 to {0:.6e}, graph 1 nohead dashtype 3 lc rgb 'blue'",
        setup.rcrit
    )?;
    writeln!(gp, "set label 'critical point' at {:.6e}, graph 0.95", setup.rcrit)?;
    writeln!(
        gp,
        "plot 'density_plot.dat' using 1:2 with lines lc rgb 'blue' title 'density', \\"
    )?;
    writeln!(
        gp,
        "     {rho_crit:.6e} with lines lc rgb 'red' title 'critical density'"
    )?;

    write_artifacts(out_dir, "density_plot", &dat, &gp)
}

/// Mass-loss rate throughout the atmosphere; flat in steady state.
pub fn plot_mdot(profile: &DensityProfile, out_dir: &Path) -> Result<PathBuf> {
    let mut dat = String::from("# rad[cm]  mdot[g/s]\n");
    for (&r, &m) in profile.rad.iter().zip(profile.mdot.iter()) {
        writeln!(dat, "{r:.6e}  {m:.6e}")?;
    }

    let mut gp = String::new();
    writeln!(gp, "set terminal pngcairo size 900,600")?;
    writeln!(gp, "set output 'mdot_plot.png'")?;
    writeln!(gp, "set logscale x")?;
    writeln!(gp, "set grid")?;
    writeln!(gp, "set xlabel 'r [cm]'")?;
    writeln!(gp, "set ylabel 'Mdot [g/s]'")?;
    writeln!(gp, "set title 'mdot, nrad={}'", profile.nrad)?;
    writeln!(
        gp,
        "plot 'mdot_plot.dat' using 1:2 with lines lc rgb 'blue' title 'mdot'"
    )?;

    write_artifacts(out_dir, "mdot_plot", &dat, &gp)
}
