use std::path::Path;
use std::sync::Arc;

use snmpsim_api::Grammar;
use snmpsim_grammar_snmprec::SnmprecGrammar;

use crate::error::EngineError;

/// Grammars known to the engine, looked up by name or file extension.
#[derive(Clone)]
pub struct GrammarRegistry {
    grammars: Vec<Arc<dyn Grammar>>,
}

impl std::fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.grammars.iter().map(|g| g.name()))
            .finish()
    }
}

impl GrammarRegistry {
    pub fn empty() -> Self {
        Self { grammars: Vec::new() }
    }

    /// Registry with the built-in `snmprec` grammar.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(SnmprecGrammar::new()));
        registry
    }

    /// Register a grammar. A later registration with the same name wins.
    pub fn register(&mut self, grammar: Arc<dyn Grammar>) {
        self.grammars.retain(|g| g.name() != grammar.name());
        tracing::debug!(grammar = %grammar.name(), extension = %grammar.extension(), "registered grammar");
        self.grammars.push(grammar);
    }

    pub fn by_name(&self, name: &str) -> Result<Arc<dyn Grammar>, EngineError> {
        self.grammars
            .iter()
            .find(|g| g.name() == name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownGrammar(name.to_string()))
    }

    /// Grammar whose extension matches `path`.
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn Grammar>, EngineError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| EngineError::UnknownGrammar(path.display().to_string()))?;
        self.grammars
            .iter()
            .find(|g| g.extension() == ext)
            .cloned()
            .ok_or_else(|| EngineError::UnknownGrammar(format!(".{ext}")))
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_name_and_extension() {
        let registry = GrammarRegistry::with_defaults();
        assert_eq!(registry.by_name("snmprec").unwrap().name(), "snmprec");
        let g = registry.for_path(Path::new("data/public.snmprec")).unwrap();
        assert_eq!(g.name(), "snmprec");
    }

    #[test]
    fn unknown_grammar() {
        let registry = GrammarRegistry::with_defaults();
        assert!(matches!(registry.by_name("sapwalk"), Err(EngineError::UnknownGrammar(_))));
        assert!(matches!(
            registry.for_path(Path::new("public.walk")),
            Err(EngineError::UnknownGrammar(_))
        ));
        assert!(matches!(
            registry.for_path(Path::new("no-extension")),
            Err(EngineError::UnknownGrammar(_))
        ));
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let registry = GrammarRegistry::empty();
        assert!(matches!(registry.by_name("snmprec"), Err(EngineError::UnknownGrammar(_))));
    }
}
