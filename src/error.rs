/// Error types for the dashboard
///
/// Every error here can end up inside an iced `Message`, so they are all
/// `Clone` and carry their details as owned strings.

use thiserror::Error;

/// Loading the dataset failed (transport, status or schema)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadFailure {
    /// The file or HTTP transport failed before any payload arrived
    #[error("could not read dataset from {origin}: {reason}")]
    Read { origin: String, reason: String },

    /// The endpoint answered with a non-success status
    #[error("dataset endpoint {url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    /// The payload is not JSON of the expected shape
    #[error("dataset does not match the expected schema: {0}")]
    Parse(String),

    /// Two locations share the same id
    #[error("dataset lists target id '{0}' more than once")]
    DuplicateId(String),
}

/// Rejected "add target" draft (only raised when strict validation is on)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("target name is empty")]
    EmptyName,

    #[error("latitude '{0}' is not a number")]
    InvalidLatitude(String),

    #[error("longitude '{0}' is not a number")]
    InvalidLongitude(String),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// The derived id is already used by a loaded target
    #[error("target id '{0}' already exists")]
    IdCollision(String),
}

/// Startup configuration problems
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("could not read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("config file is not valid: {0}")]
    Parse(String),

    #[error("submission_url is required but was not set")]
    MissingSubmissionUrl,

    #[error("submission_url '{0}' still contains the placeholder repository")]
    PlaceholderSubmissionUrl(String),

    #[error("submission_url '{url}' is not an absolute http(s) URL: {reason}")]
    InvalidSubmissionUrl { url: String, reason: String },
}

/// The external "open URL" action failed
#[derive(Debug, Clone, Error, PartialEq)]
#[error("could not open submission page: {0}")]
pub struct NavigationError(pub String);
