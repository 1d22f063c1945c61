use std::fmt;

use crate::types::TrainingResult;

// --- RoundTo trait (offentlig, brukt av InfoMessage) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

/// Runder via desimalrepresentasjonen, så halvveis-verdier som 1.0005
/// (egentlig 1.000499…) havner på riktig side.
impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if !self.is_finite() { return self; }
        format!("{:.*}", dp as usize, self).parse().unwrap_or(self)
    }
}

/// Antall desimaler i meldingen.
pub const MESSAGE_DP: u32 = 3;

/// Informasjonsmelding om en gjennomført økt.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    result: TrainingResult,
}

impl InfoMessage {
    pub fn new(training_type: &str, duration: f64, distance: f64, speed: f64, calories: f64) -> Self {
        Self {
            result: TrainingResult {
                training_type: training_type.to_string(),
                duration_h: duration.round_to(MESSAGE_DP),
                distance_km: distance.round_to(MESSAGE_DP),
                speed_kmh: speed.round_to(MESSAGE_DP),
                calories_kcal: calories.round_to(MESSAGE_DP),
            },
        }
    }

    pub fn result(&self) -> &TrainingResult {
        &self.result
    }

    pub fn into_result(self) -> TrainingResult {
        self.result
    }

    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Én linje JSON (for `TRACKER_OUTPUT=json`).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.result)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            r.training_type, r.duration_h, r.distance_km, r.speed_kmh, r.calories_kcal
        )
    }
}
