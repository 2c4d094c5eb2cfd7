use thiserror::Error;

/// Error types for the dashboard core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never produced a response (connection refused, CORS, aborted)
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("HTTP error {status} from {endpoint}")]
    Http { endpoint: &'static str, status: u16 },

    /// The response body is not the expected JSON object
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The `plot` field does not hold a valid serialized chart
    #[error("Invalid chart specification: {0}")]
    ChartSpec(String),

    /// A form value is missing, unparsable, or outside its slider range
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },

    /// The parameters carry a horizon that does not match the requested mode
    #[error("Expected a '{expected}' value for this request")]
    HorizonMismatch { expected: &'static str },

    /// A required element of the host page could not be found
    #[error("Missing page element: #{0}")]
    MissingElement(String),
}

impl DashboardError {
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        DashboardError::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::Decode(error.to_string())
    }
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
