pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod storage;
pub mod training;
pub mod types;

// Re-eksporter det binæren og testene bruker mest
pub use cli::{print_training_report, render_package};
pub use config::{Config, OutputFormat};
pub use dispatch::{read_package, read_sample};
pub use error::{Result, TrackerError};
pub use message::{InfoMessage, RoundTo};
pub use storage::{default_packages, load_packages};
pub use training::{Base, Workout};
pub use types::{TrainingResult, WorkoutCode, WorkoutSample};
