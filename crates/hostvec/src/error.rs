use thiserror::Error;

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Error class a host maps onto its own exception hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
}

/// Failures raised by vector operations.
///
/// Every failing call produces exactly one of these and pushes no results.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VectorError {
    /// An operand is not of the expected kind.
    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// Operands have the right kind but incompatible shapes.
    #[error("ValueError: {message}")]
    ValueError { message: String },
}

impl VectorError {
    pub fn type_error(message: impl Into<String>) -> Self {
        VectorError::TypeError {
            message: message.into(),
        }
    }

    pub fn value_error(message: impl Into<String>) -> Self {
        VectorError::ValueError {
            message: message.into(),
        }
    }

    /// Error raised when the argument at `position` has the wrong type.
    pub fn bad_arg(fn_name: &str, position: usize, expected: &str, actual: &str) -> Self {
        Self::type_error(format!(
            "{} expected arg in position {} to be of type {}, got arg of type {}.",
            fn_name, position, expected, actual
        ))
    }

    /// Error raised when two vector operands differ in length.
    pub fn length_mismatch(fn_name: &str, left: usize, right: usize) -> Self {
        Self::value_error(format!(
            "{} expects two vectors of the same len, got two vectors of lens {} and {}.",
            fn_name, left, right
        ))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::TypeError { .. } => ErrorKind::Type,
            VectorError::ValueError { .. } => ErrorKind::Value,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            VectorError::TypeError { message } | VectorError::ValueError { message } => {
                message.as_str()
            }
        }
    }
}
