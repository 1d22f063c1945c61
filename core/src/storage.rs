use std::path::Path;

use log::{info, warn};
use serde_path_to_error as spte;

use crate::error::{Result, TrackerError};
use crate::types::WorkoutSample;

/// Innebygde pakker – det samme datasettet som binæren kjører uten konfig.
pub fn default_packages() -> Vec<WorkoutSample> {
    vec![
        WorkoutSample::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutSample::new("RUN", &[15000.0, 1.0, 75.0]),
        WorkoutSample::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser pakker fra JSON: `[["RUN", [15000, 1, 75]], ...]`.
/// Feil rapporteres med JSON-sti (f.eks. `[1][1][2]`).
pub fn parse_packages(json_in: &str, path: &Path) -> Result<Vec<WorkoutSample>> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| TrackerError::PackagesParse {
        path: path.to_path_buf(),
        at: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Leser pakker fra disk (JSON).
/// Hvis filen ikke finnes, returneres de innebygde pakkene.
pub fn load_packages(path: &Path) -> Result<Vec<WorkoutSample>> {
    if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|source| TrackerError::PackagesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let packages = parse_packages(&contents, path)?;
        info!("lastet {} pakker fra {}", packages.len(), path.display());
        Ok(packages)
    } else {
        warn!(
            "fant ikke pakkefil {}, bruker innebygde pakker",
            path.display()
        );
        Ok(default_packages())
    }
}
