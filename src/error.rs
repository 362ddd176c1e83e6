use std::fmt;

/// Result type for curvecast operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// Main error type for curvecast
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// A utility module could not be merged into the namespace
    ModuleLoad {
        module: String,
        reason: String,
    },

    /// Value is neither a history record nor an object exposing one
    Shape(String),

    /// Skip count leaves nothing to draw for a metric
    SkipOutOfRange {
        metric: String,
        skip: usize,
        len: usize,
    },

    /// Series lengths disagree
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Errors raised by the drawing backend
    Render(String),

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::ModuleLoad { module, reason } => {
                write!(f, "Failed to load utility module '{}': {}", module, reason)
            }
            PlotError::Shape(msg) => write!(f, "Shape error: {}", msg),
            PlotError::SkipOutOfRange { metric, skip, len } => {
                write!(
                    f,
                    "Cannot skip {} epochs of '{}': only {} recorded",
                    skip, metric, len
                )
            }
            PlotError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            PlotError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            PlotError::Render(msg) => write!(f, "Render error: {}", msg),
            PlotError::IoError(msg) => write!(f, "IO error: {}", msg),
            PlotError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {}

// Conversion from std::io::Error
impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> Self {
        PlotError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl PlotError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        PlotError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        PlotError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn module_load<S: Into<String>>(module: S, reason: S) -> Self {
        PlotError::ModuleLoad {
            module: module.into(),
            reason: reason.into(),
        }
    }

    /// Wrap any backend error that can be displayed
    pub fn render<E: fmt::Display>(err: E) -> Self {
        PlotError::Render(err.to_string())
    }
}
