use std::io::Write;
use std::path::PathBuf;

use snmpsim_api::{Grammar, Record, Value, ValueKind};

use super::Options;
use super::error::DatafileError;

#[derive(serde::Serialize)]
struct DumpLine<'a> {
    #[serde(flatten)]
    record: &'a Record,
    kind: ValueKind,
    /// Decoded payload when it is printable text.
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

pub fn run(opts: &Options, file: PathBuf) -> Result<(), DatafileError> {
    let (store, report) = opts.load_blocking(&file)?;
    let grammar = store.grammar();

    let mut out = std::io::stdout().lock();
    for record in &report.records {
        let value = grammar.decode(record).map_err(snmpsim_engine::EngineError::from)?;
        let text = match &value {
            Value::IpAddress(ip) => Some(ip.to_string()),
            Value::OctetString(b) | Value::Opaque(b) => std::str::from_utf8(b).ok().map(str::to_string),
            _ => None,
        };
        let line = DumpLine { record, kind: value.kind(), text };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}
