use snmpsim_engine::{BridgeError, EngineError};

#[derive(Debug, thiserror::Error)]
pub enum DatafileError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Bridge(#[from] BridgeError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{failed} of {total} files failed")]
    Check { failed: usize, total: usize },
}
