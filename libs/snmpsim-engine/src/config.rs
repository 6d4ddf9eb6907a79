use serde::Deserialize;

use crate::error::EngineError;

/// What the loader does with a line that fails to parse or decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadLinePolicy {
    /// Stop at the first bad line and return its error.
    #[default]
    Abort,
    /// Log the bad line, count it and continue.
    Skip,
}

/// Data store configuration, parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatafileConfig {
    /// Grammar name. When unset, resolved from the file extension.
    pub grammar: Option<String>,

    pub on_bad_line: BadLinePolicy,

    /// Sort loaded records by OID.
    pub sort: bool,
}

impl Default for DatafileConfig {
    fn default() -> Self {
        Self {
            grammar: None,
            on_bad_line: BadLinePolicy::Abort,
            sort: true,
        }
    }
}

impl DatafileConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }
}
