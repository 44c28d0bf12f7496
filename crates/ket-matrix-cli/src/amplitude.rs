//! `amplitude` jobs: expand a state vector over a pair of kets.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ket_matrix::{Basis, Vector};

use crate::util::load_json;

/// Parameters for an amplitude job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmplitudeJob {
    pub state: Vec<i64>,
    pub ket1: Vec<i64>,
    pub ket2: Vec<i64>,
    /// Refuse kets that are not an orthonormal pair.
    pub require_orthonormal: bool,
}

impl Default for AmplitudeJob {
    fn default() -> Self {
        Self {
            state: vec![0, 0],
            ket1: vec![1, 0],
            ket2: vec![0, 1],
            require_orthonormal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmplitudeReport {
    pub x1: i64,
    pub x2: i64,
    pub orthonormal: bool,
}

pub fn load_amplitude_job<P: AsRef<Path>>(path: P) -> Result<AmplitudeJob> {
    load_json(path)
}

pub fn run_amplitude(job: &AmplitudeJob) -> Result<AmplitudeReport> {
    let (ket1, ket2) = (Vector::from(job.ket1.as_slice()), Vector::from(job.ket2.as_slice()));
    let basis = if job.require_orthonormal {
        Basis::checked(ket1, ket2)
    } else {
        Basis::new(ket1, ket2)
    }
    .context("Invalid basis")?;

    let orthonormal = basis.is_orthonormal()?;
    if !orthonormal {
        log::warn!("Kets are not orthonormal; amplitudes are aT * v only");
    }

    let state = Vector::from(job.state.as_slice());
    let (x1, x2) = basis
        .amplitudes(&state)
        .with_context(|| format!("Cannot expand state {}", state))?;
    log::info!("Amplitudes of {}: ({}, {})", state, x1, x2);

    Ok(AmplitudeReport { x1, x2, orthonormal })
}
