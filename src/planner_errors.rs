use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Invalid date: {0}")]
    InvalidDateError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameterError(String),

    #[error("Coordinate transform failed: {0}")]
    TransformError(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to parse configuration file: {0}")]
    ConfigParsingError(#[from] toml::de::Error),
}

impl From<ordered_float::FloatIsNan> for PlannerError {
    fn from(_: ordered_float::FloatIsNan) -> Self {
        PlannerError::ConfigurationError("NaN is not a valid value".into())
    }
}

impl PartialEq for PlannerError {
    fn eq(&self, other: &Self) -> bool {
        use PlannerError::*;
        match (self, other) {
            (ConfigurationError(a), ConfigurationError(b)) => a == b,
            (InvalidDateError(a), InvalidDateError(b)) => a == b,
            (InvalidParameterError(a), InvalidParameterError(b)) => a == b,
            (TransformError(a), TransformError(b)) => a == b,

            // foreign payloads: same variant is enough
            (IoError(_), IoError(_)) => true,
            (ConfigParsingError(_), ConfigParsingError(_)) => true,

            _ => false,
        }
    }
}
