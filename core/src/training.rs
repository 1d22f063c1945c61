// core/src/training.rs
use crate::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;     // meter per km
pub const MIN_IN_H: f64 = 60.0;      // minutter per time
pub const LEN_STEP: f64 = 0.65;      // skrittlengde (m) – gange/løp/standard
pub const LEN_STEP_SWIMMING: f64 = 1.38; // taklengde (m) – svømming

// Løp
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

// Sportsgange
const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Svømming
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Felles felt for alle økttyper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Base {
    pub action: f64,      // antall skritt/tak
    pub duration: f64,    // timer
    pub weight: f64,      // kg
}

/// Økt etter type. Hver variant bærer sine egne parametre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Ukjent kode: bare grunnfeltene, kalorier er alltid 0.
    Training(Base),
    Running(Base),
    SportsWalking {
        base: Base,
        height: f64,      // cm
    },
    Swimming {
        base: Base,
        length_pool: f64, // meter
        count_pool: f64,  // antall lengder
    },
}

impl Workout {
    pub fn base(&self) -> &Base {
        match self {
            Workout::Training(b) | Workout::Running(b) => b,
            Workout::SportsWalking { base, .. } | Workout::Swimming { base, .. } => base,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Workout::Training(_) => "Training",
            Workout::Running(_) => "Running",
            Workout::SportsWalking { .. } => "SportsWalking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    fn step_len(&self) -> f64 {
        match self {
            Workout::Swimming { .. } => LEN_STEP_SWIMMING,
            _ => LEN_STEP,
        }
    }

    /// Distanse i km.
    pub fn get_distance(&self) -> f64 {
        self.base().action * self.step_len() / M_IN_KM
    }

    /// Snittfart i km/t.
    ///
    /// Svømming regnes fra bassenglengde og antall lengder, ikke fra antall tak.
    /// Svømming har ingen vakt mot varighet 0: `read_package` avviser slike
    /// pakker, men en `Workout::Swimming` bygget direkte gir `inf`.
    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Workout::Swimming { base, length_pool, count_pool } => {
                length_pool * count_pool / M_IN_KM / base.duration
            }
            _ => {
                let duration = self.base().duration;
                if duration > 0.0 {
                    self.get_distance() / duration
                } else {
                    0.0
                }
            }
        }
    }

    /// Forbrente kalorier (kcal).
    pub fn get_spent_calories(&self) -> f64 {
        let speed = self.get_mean_speed();
        match self {
            Workout::Training(_) => 0.0,
            Workout::Running(b) => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * b.weight / M_IN_KM
                    * (b.duration * MIN_IN_H)
            }
            Workout::SportsWalking { base, height } => {
                if *height > 0.0 {
                    // heltallsdivisjon (floor) av fart² på høyde
                    let ratio = (speed.powi(2) / height).floor();
                    (WALK_WEIGHT_MULTIPLIER * base.weight
                        + ratio * WALK_SPEED_HEIGHT_MULTIPLIER * base.weight)
                        * (base.duration * MIN_IN_H)
                } else {
                    0.0
                }
            }
            Workout::Swimming { base, .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * base.weight
            }
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.label(),
            self.base().duration,
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}
