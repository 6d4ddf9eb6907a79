pub mod check;
pub mod convert;
pub mod dump;
pub mod error;

use std::io::Write;
use std::path::Path;

use snmpsim_api::TypeTagTable;
use snmpsim_engine::{
    BadLinePolicy, DataStore, DatafileConfig, GrammarRegistry, LoadReport, run_in_new_runtime_with_return,
};

use error::DatafileError;

/// Effective settings: config file overlaid with CLI flags.
pub struct Options {
    pub config: DatafileConfig,
    pub registry: GrammarRegistry,
}

impl Options {
    pub fn new(
        config_path: Option<&str>,
        grammar: Option<String>,
        skip_bad_lines: bool,
    ) -> Result<Self, DatafileError> {
        let mut config = match config_path {
            Some(path) => DatafileConfig::load(path)?,
            None => DatafileConfig::default(),
        };
        if grammar.is_some() {
            config.grammar = grammar;
        }
        if skip_bad_lines {
            config.on_bad_line = BadLinePolicy::Skip;
        }
        Ok(Self {
            config,
            registry: GrammarRegistry::with_defaults(),
        })
    }

    pub fn store_for(&self, path: &Path) -> Result<DataStore, DatafileError> {
        Ok(DataStore::for_path(&self.registry, &self.config, path)?)
    }

    /// Load `path` from this blocking context through the sync bridge.
    pub fn load_blocking(&self, path: &Path) -> Result<(DataStore, LoadReport), DatafileError> {
        let store = self.store_for(path)?;
        let worker_store = store.clone();
        let path = path.to_path_buf();
        let report = run_in_new_runtime_with_return(async move { worker_store.load(path).await })??;
        Ok((store, report))
    }
}

pub fn print_tags() -> Result<(), DatafileError> {
    let mut out = std::io::stdout().lock();
    for (kind, tag) in TypeTagTable::standard().iter() {
        writeln!(out, "{tag:>4}  {kind}")?;
    }
    Ok(())
}
