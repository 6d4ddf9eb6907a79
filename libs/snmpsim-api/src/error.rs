use std::fmt;

/// Error kind for codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A line or payload does not have the expected shape.
    Format,
    /// A tag or kind cannot be resolved through the tag table.
    Decode,
}

/// Codec error returned by all grammar and tag table operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CodecError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Format, message: msg.into() }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Decode, message: msg.into() }
    }

    pub fn is_format(&self) -> bool {
        self.kind == ErrorKind::Format
    }

    pub fn is_decode(&self) -> bool {
        self.kind == ErrorKind::Decode
    }

    /// Add context to the error, preserving the original ErrorKind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CodecError {}

impl From<std::str::Utf8Error> for CodecError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::format(e.to_string())
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        Self::format(format!("hex payload: {e}"))
    }
}

impl From<std::num::ParseIntError> for CodecError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::format(e.to_string())
    }
}
