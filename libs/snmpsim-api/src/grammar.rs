use crate::error::CodecError;
use crate::record::Record;
use crate::value::Value;

/// On-disk record format. Builds and parses one line per record.
///
/// - `build()`: total, never fails on well-formed arguments, returns a single
///   line terminated by `\n`.
/// - `parse()`: splits a line into exactly three fields. The split stops
///   after the second delimiter, so the value may contain the delimiter.
///   Fewer than three fields is a `Format` error.
/// - `encode()` / `decode()`: typed layer that resolves tags through the
///   grammar's tag table and applies its payload escaping.
///
/// The data store only knows this trait; concrete formats are registered by
/// name and file extension.
pub trait Grammar: Send + Sync {
    /// Registry name, e.g. `snmprec`.
    fn name(&self) -> &str;

    /// Data file extension without the dot.
    fn extension(&self) -> &str;

    fn build(&self, oid: &str, tag: &str, value: &str) -> String;

    fn parse(&self, line: &str) -> Result<Record, CodecError>;

    /// Typed value → record with tag and escaped payload.
    fn encode(&self, oid: &str, value: &Value) -> Result<Record, CodecError>;

    /// Record → typed value. Fails on unknown tags and invalid payloads.
    fn decode(&self, record: &Record) -> Result<Value, CodecError>;

    /// Check that `build()` of `record` parses back to the same record.
    ///
    /// Default: no field holds a line break and the record decodes.
    fn check_writable(&self, record: &Record) -> Result<(), CodecError> {
        reject_line_breaks(record)?;
        self.decode(record).map(|_| ())
    }

    /// Convenience: `build()` over an existing record.
    fn build_record(&self, record: &Record) -> String {
        self.build(&record.oid, &record.tag, &record.value)
    }
}

/// Line-oriented grammars cannot persist `\n` or `\r` inside a field.
pub fn reject_line_breaks(record: &Record) -> Result<(), CodecError> {
    for (name, field) in [("OID", &record.oid), ("tag", &record.tag), ("value", &record.value)] {
        if field.contains(['\n', '\r']) {
            return Err(CodecError::format(format!(
                "OID {}: line break in {name} {field:?}",
                record.oid
            )));
        }
    }
    Ok(())
}
