use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("{code}: forventet {expected} parametre, fikk {got}")]
    ArityMismatch {
        code: String,
        expected: usize,
        got: usize,
    },
    #[error("{code}: ugyldig verdi {value} på posisjon {index}")]
    InvalidParameter {
        code: String,
        index: usize,
        value: f64,
    },
    #[error("{code}: varighet er 0, kan ikke beregne snittfart")]
    ZeroDuration { code: String },
    #[error("kunne ikke lese pakker fra {}: {source}", path.display())]
    PackagesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("pakkefil {} feil ved {at}: {message}", path.display())]
    PackagesParse {
        path: PathBuf,
        at: String,
        message: String,
    },
    #[error("ukjent output-format: {0} (bruk text eller json)")]
    UnknownOutputFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
