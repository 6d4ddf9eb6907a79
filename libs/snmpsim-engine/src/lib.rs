pub mod bridge;
pub mod config;
pub mod error;
pub mod registry;
pub mod store;

pub use bridge::{run_in_new_runtime, run_in_new_runtime_with_return, BridgeError};
pub use config::{BadLinePolicy, DatafileConfig};
pub use error::EngineError;
pub use registry::GrammarRegistry;
pub use store::{DataStore, LoadReport};
