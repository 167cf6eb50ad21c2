//! Validation engine for completed escape runs.
//!
//! Compares a run's critical radius and mass-loss rate against the
//! analytic references that the force configuration admits.

pub mod runner;
pub mod validate;
