use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

use snmpsim_api::record::compare_oids;
use snmpsim_api::{CodecError, Grammar, Record};

use crate::config::{BadLinePolicy, DatafileConfig};
use crate::error::EngineError;
use crate::registry::GrammarRegistry;

// ════════════════════════════════════════════════════════════════
//  DataStore
// ════════════════════════════════════════════════════════════════

/// Records loaded from one data file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<Record>,
    /// Lines dropped under [`BadLinePolicy::Skip`].
    pub skipped: usize,
}

/// Loads and writes data files through a [`Grammar`].
///
/// Every stored line goes through `parse()` and `decode()`, so a loaded
/// record always has a resolvable tag and a valid payload. Blank lines and
/// `#` comments are ignored.
#[derive(Clone)]
pub struct DataStore {
    grammar: Arc<dyn Grammar>,
    policy: BadLinePolicy,
    sort: bool,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("grammar", &self.grammar.name())
            .field("policy", &self.policy)
            .field("sort", &self.sort)
            .finish()
    }
}

impl DataStore {
    pub fn new(grammar: Arc<dyn Grammar>, config: &DatafileConfig) -> Self {
        Self {
            grammar,
            policy: config.on_bad_line,
            sort: config.sort,
        }
    }

    /// Store for `path`: grammar from config, or from the file extension.
    pub fn for_path(
        registry: &GrammarRegistry,
        config: &DatafileConfig,
        path: &Path,
    ) -> Result<Self, EngineError> {
        let grammar = match &config.grammar {
            Some(name) => registry.by_name(name)?,
            None => registry.for_path(path)?,
        };
        Ok(Self::new(grammar, config))
    }

    pub fn grammar(&self) -> &Arc<dyn Grammar> {
        &self.grammar
    }

    // ── Load ──

    pub async fn load(&self, path: impl AsRef<Path>) -> Result<LoadReport, EngineError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let f = tokio::fs::File::open(path)
            .await
            .map_err(|e| EngineError::from(e).with_context(format!("open {source}")))?;
        let mut reader = BufReader::new(f);

        let mut report = LoadReport::default();
        let mut lineno = 0usize;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| EngineError::from(e).with_context(format!("read {source}")))?;
            if n == 0 {
                break;
            }
            lineno += 1;
            let line = std::str::from_utf8(&buf).map_err(CodecError::from);
            self.accept_line(line, &source, lineno, &mut report)?;
        }

        self.finish(&mut report);
        tracing::info!(
            file = %source,
            grammar = %self.grammar.name(),
            records = report.records.len(),
            skipped = report.skipped,
            "loaded data file"
        );
        Ok(report)
    }

    /// Same as [`load`](Self::load) over in-memory content.
    pub fn load_str(&self, content: &str, source: &str) -> Result<LoadReport, EngineError> {
        let mut report = LoadReport::default();
        for (i, line) in content.lines().enumerate() {
            self.accept_line(Ok(line), source, i + 1, &mut report)?;
        }
        self.finish(&mut report);
        Ok(report)
    }

    /// Apply the bad-line policy to one raw line (or its decoding failure).
    fn accept_line(
        &self,
        line: Result<&str, CodecError>,
        source: &str,
        lineno: usize,
        report: &mut LoadReport,
    ) -> Result<(), EngineError> {
        let result = match line {
            Ok(line) if is_blank_or_comment(line) => return Ok(()),
            Ok(line) => self.read_record(line),
            Err(e) => Err(e),
        };

        match result {
            Ok(record) => {
                report.records.push(record);
                Ok(())
            }
            Err(e) => {
                let e = e.with_context(format!("{source}:{lineno}"));
                match self.policy {
                    BadLinePolicy::Abort => Err(e.into()),
                    BadLinePolicy::Skip => {
                        tracing::warn!(error = %e, "skipping bad record");
                        report.skipped += 1;
                        Ok(())
                    }
                }
            }
        }
    }

    fn read_record(&self, line: &str) -> Result<Record, CodecError> {
        let record = self.grammar.parse(line)?;
        self.grammar.decode(&record)?;
        Ok(record)
    }

    fn finish(&self, report: &mut LoadReport) {
        if self.sort {
            report.records.sort_by(|a, b| compare_oids(&a.oid, &b.oid));
        }
    }

    // ── Write ──

    /// Write `records` to `path`, replacing it atomically.
    ///
    /// Every record must pass [`Grammar::check_writable`] before anything
    /// touches the disk. The temp file is removed if any later step fails.
    pub async fn write(&self, path: impl AsRef<Path>, records: &[Record]) -> Result<usize, EngineError> {
        let path = path.as_ref();
        for record in records {
            self.grammar
                .check_writable(record)
                .map_err(|e| e.with_context(format!("write {}", path.display())))?;
        }

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        // Deleted on drop unless persisted.
        let tmp = tempfile::Builder::new()
            .prefix(".snmpsim-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| EngineError::from(e).with_context(format!("create temp file in {}", dir.display())))?;

        let f = tokio::fs::File::from_std(tmp.reopen()?);
        let mut w = BufWriter::new(f);
        for record in records {
            w.write_all(self.grammar.build_record(record).as_bytes()).await?;
        }
        w.flush().await?;
        w.into_inner().sync_all().await?;

        tmp.persist(path).map_err(|e| {
            EngineError::from(e.error).with_context(format!("rename to {}", path.display()))
        })?;

        tracing::info!(file = %path.display(), records = records.len(), "wrote data file");
        Ok(records.len())
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
