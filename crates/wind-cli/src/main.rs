// ─────────────────────────────────────────────────────────────────────
// SCPN Parker Wind — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! wind-cli — plotting and validation front-end for escape runs.
//!
//! `wind-cli plot -i final_velocity.data -p velocity` renders a
//! diagnostic; `wind-cli test -t 1 -i final_velocity.data` validates the
//! run against its analytic reference and exits non-zero on failure.

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use wind_core::runner::{run_test, TestSummary};
use wind_core::validate::{Tolerances, ValidationTest};
use wind_types::config::SetupParameters;
use wind_types::constants::{G0_CONST, REL_TOL};
use wind_types::profile::{DensityProfile, VelocityProfile};

mod plot;

#[derive(Parser, Debug)]
#[command(name = "wind-cli")]
#[command(version)]
#[command(about = "Post-processing and validation for 1-D atmospheric-escape runs")]
struct Args {
    /// Path to the run's setup file
    #[arg(short, long, global = true, default_value = "setup.data")]
    setup: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a diagnostic plot from a profile file
    Plot {
        /// Input profile file
        #[arg(short, long)]
        infile: String,

        /// Which diagnostic to render
        #[arg(short, long, value_enum)]
        plot: PlotKind,

        /// Output directory for the gnuplot artifacts
        #[arg(short, long, default_value = ".")]
        out: String,
    },
    /// Validate a run against its analytic reference
    Test {
        /// Test number: 1 = parker point, 2 = constant force, 3 = mdot constancy
        #[arg(short, long)]
        test: u8,

        /// Input profile file (velocity for tests 1-2, density for test 3)
        #[arg(short, long)]
        infile: String,

        /// Write a machine-readable summary to this path
        #[arg(long)]
        json: Option<String>,

        /// Also write the plot artifact for the loaded profile
        #[arg(long)]
        emit_plot: bool,

        /// Relative-error pass threshold
        #[arg(long, default_value_t = REL_TOL)]
        rel_tol: f64,

        /// Constant outward acceleration for test 2 [cm/s²]
        #[arg(long, default_value_t = G0_CONST)]
        g0: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlotKind {
    Velocity,
    Density,
    Mdot,
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let args = Args::parse();

    let setup = SetupParameters::from_file(&args.setup)
        .with_context(|| format!("reading setup file {}", args.setup))?;
    info!("setup: {} (nrad = {})", args.setup, setup.nrad);

    match args.command {
        Commands::Plot { infile, plot, out } => {
            info!("infile: {infile}");
            info!("plotting: {plot:?}");
            let out_dir = Path::new(&out);
            let script = match plot {
                PlotKind::Velocity => {
                    let profile = VelocityProfile::from_file(&infile)
                        .with_context(|| format!("reading velocity profile {infile}"))?;
                    plot::plot_velocity(&setup, &profile, out_dir)?
                }
                PlotKind::Density => {
                    let profile = DensityProfile::from_file(&infile)
                        .with_context(|| format!("reading density profile {infile}"))?;
                    plot::plot_density(&setup, &profile, out_dir)?
                }
                PlotKind::Mdot => {
                    let profile = DensityProfile::from_file(&infile)
                        .with_context(|| format!("reading density profile {infile}"))?;
                    plot::plot_mdot(&profile, out_dir)?
                }
            };
            println!("render with: gnuplot {}", script.display());
            Ok(true)
        }
        Commands::Test {
            test,
            infile,
            json,
            emit_plot,
            rel_tol,
            g0,
        } => {
            let Some(test) = ValidationTest::from_id(test) else {
                bail!("test number must be 1, 2 or 3, got {test}");
            };
            info!("infile: {infile}");
            info!("running test {} ({})", test.id(), test.label());

            let tol = Tolerances { rel_tol, g0 };
            let verdict = run_test(test, &setup, &infile, &tol)?;

            let mut summary = TestSummary::new("wind validation");
            summary.push(verdict);
            print!("{summary}");

            if let Some(path) = json {
                let file = File::create(&path)
                    .with_context(|| format!("creating summary file {path}"))?;
                serde_json::to_writer_pretty(file, &summary)
                    .with_context(|| format!("writing summary file {path}"))?;
                info!("wrote {path}");
            }

            if emit_plot {
                let out_dir = Path::new(".");
                match test {
                    ValidationTest::ZeroForce | ValidationTest::ConstantForce => {
                        let profile = VelocityProfile::from_file(&infile)?;
                        plot::plot_velocity(&setup, &profile, out_dir)?;
                    }
                    ValidationTest::MdotConstancy => {
                        let profile = DensityProfile::from_file(&infile)?;
                        plot::plot_mdot(&profile, out_dir)?;
                    }
                }
            }

            Ok(summary.all_passed())
        }
    }
}
