use snmpsim_api::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("no grammar registered for '{0}'")]
    UnknownGrammar(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Add context to the error.
    ///
    /// For `Codec` variant, context is added to the inner `CodecError`.
    /// For other string variants, context is prepended to the message.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Codec(e) => EngineError::Codec(e.with_context(ctx)),
            EngineError::Config(msg) => EngineError::Config(format!("{ctx}: {msg}")),
            EngineError::Io(e) => EngineError::Io(std::io::Error::new(e.kind(), format!("{ctx}: {e}"))),
            other => other,
        }
    }

    /// The codec error behind this failure, if any.
    pub fn as_codec(&self) -> Option<&CodecError> {
        match self {
            EngineError::Codec(e) => Some(e),
            _ => None,
        }
    }
}
