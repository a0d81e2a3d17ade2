use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown intake type: {0}")]
    UnknownIntakeType(String),

    #[error("intake data submitted without an intake type")]
    MissingIntakeType,

    #[error("intake payload for '{intake_type}' is not an object")]
    IntakeNotObject { intake_type: String },
}
