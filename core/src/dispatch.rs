use log::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::training::{Base, Workout};
use crate::types::{WorkoutCode, WorkoutSample};

const BASE_ARITY: usize = 3;

fn expected_arity(code: &WorkoutCode) -> Option<usize> {
    match code {
        WorkoutCode::Run => Some(BASE_ARITY),
        WorkoutCode::Walk => Some(BASE_ARITY + 1),
        WorkoutCode::Swim => Some(BASE_ARITY + 2),
        WorkoutCode::Other(_) => None,
    }
}

fn finite(code: &WorkoutCode, data: &[f64], index: usize) -> Result<f64> {
    let value = data[index];
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrackerError::InvalidParameter { code: code.to_string(), index, value })
    }
}

/// Les sensorpakke: velg økttype fra koden og bind parametrene posisjonelt.
///
/// For få parametre gir `ArityMismatch`; ekstra felt bakerst ignoreres.
/// Ukjent kode faller tilbake til `Workout::Training` (0 kcal) og bruker bare
/// de tre første feltene.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let code = WorkoutCode::parse(code);

    match expected_arity(&code) {
        Some(n) if data.len() < n => {
            return Err(TrackerError::ArityMismatch {
                code: code.to_string(),
                expected: n,
                got: data.len(),
            });
        }
        None if data.len() < BASE_ARITY => {
            return Err(TrackerError::ArityMismatch {
                code: code.to_string(),
                expected: BASE_ARITY,
                got: data.len(),
            });
        }
        Some(n) if data.len() > n => {
            warn!("{code}: ignorerer {} ekstra parametre", data.len() - n);
        }
        _ => {}
    }

    let base = Base {
        action: finite(&code, data, 0)?,
        duration: finite(&code, data, 1)?,
        weight: finite(&code, data, 2)?,
    };

    let workout = match &code {
        WorkoutCode::Swim => {
            if base.duration == 0.0 {
                return Err(TrackerError::ZeroDuration { code: code.to_string() });
            }
            Workout::Swimming {
                base,
                length_pool: finite(&code, data, 3)?,
                count_pool: finite(&code, data, 4)?,
            }
        }
        WorkoutCode::Run => Workout::Running(base),
        WorkoutCode::Walk => Workout::SportsWalking {
            base,
            height: finite(&code, data, 3)?,
        },
        WorkoutCode::Other(raw) => {
            warn!("ukjent treningskode {raw:?}, bruker standardøkt (0 kcal)");
            if data.len() > BASE_ARITY {
                warn!("{raw:?}: ignorerer {} ekstra parametre", data.len() - BASE_ARITY);
            }
            Workout::Training(base)
        }
    };

    debug!("{} -> {} {:?}", code, workout.label(), data);
    Ok(workout)
}

pub fn read_sample(sample: &WorkoutSample) -> Result<Workout> {
    read_package(sample.code().as_str(), sample.params())
}
