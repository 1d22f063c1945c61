use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Typekode fra sensorpakken. Ukjente koder beholdes som `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutCode {
    Run,
    Walk,
    Swim,
    Other(String),
}

impl WorkoutCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "RUN" => WorkoutCode::Run,
            "WLK" => WorkoutCode::Walk,
            "SWM" => WorkoutCode::Swim,
            other => WorkoutCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WorkoutCode::Run => "RUN",
            WorkoutCode::Walk => "WLK",
            WorkoutCode::Swim => "SWM",
            WorkoutCode::Other(s) => s,
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WorkoutCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkoutCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(WorkoutCode::parse(&s))
    }
}

/// En pakke fra sensoren: kode + posisjonelle tallfelt.
/// [action, duration_h, weight_kg, ...ekstra] – ekstra er høyde (WLK)
/// eller bassenglengde + antall lengder (SWM).
///
/// Serialiseres som `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample(pub WorkoutCode, pub Vec<f64>);

impl WorkoutSample {
    pub fn new(code: &str, params: &[f64]) -> Self {
        Self(WorkoutCode::parse(code), params.to_vec())
    }

    pub fn code(&self) -> &WorkoutCode {
        &self.0
    }

    pub fn params(&self) -> &[f64] {
        &self.1
    }
}

/// Ferdig beregnet økt. Tallene er rundet til 3 desimaler ved konstruksjon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}
