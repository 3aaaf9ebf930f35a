use thiserror::Error;

/// Coarse failure class, for callers that branch on the kind of failure
/// rather than matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    NotFound,
    WrongContainer,
    IndexOutOfBounds,
    TypeMismatch,
    UnsupportedType,
}

/// Every way a lookup can fail. Message texts are stable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonGetError {
    #[error("invalid JSON path '{path}'")]
    Syntax { path: String },

    /// The requested key is missing. Carries the full path as requested.
    #[error("JSON path '{path}' not found")]
    NotFound { path: String },

    /// A key step hit a non-object. `path` points at the offending value.
    #[error("JSON path '{path}' is not an object")]
    NotAnObject { path: String },

    /// An index step hit a non-array. `path` points at the offending value.
    #[error("JSON path '{path}' is not an array")]
    NotAnArray { path: String },

    #[error("JSON array '{path}' too small ({len} <= {index})")]
    IndexOutOfBounds {
        path: String,
        len: usize,
        index: usize,
    },

    #[error("wrong JSON type {expected} != {actual}")]
    TypeMismatch {
        expected: String,
        actual: &'static str,
    },

    /// Descriptor text that names no known type. A caller bug, not a data problem.
    #[error("unsupported type '{0}'")]
    UnsupportedType(String),
}

impl JsonGetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsonGetError::Syntax { .. } => ErrorKind::Syntax,
            JsonGetError::NotFound { .. } => ErrorKind::NotFound,
            JsonGetError::NotAnObject { .. } | JsonGetError::NotAnArray { .. } => {
                ErrorKind::WrongContainer
            }
            JsonGetError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            JsonGetError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            JsonGetError::UnsupportedType(_) => ErrorKind::UnsupportedType,
        }
    }

    /// True when the path simply does not exist in the document.
    pub fn is_absent(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotFound | ErrorKind::IndexOutOfBounds
        )
    }
}

// Type alias for results that use `JsonGetError` as the error type
pub type Result<T> = std::result::Result<T, JsonGetError>;
