//! `snmprec` grammar: `OID|TAG|VALUE`, one record per line.
//!
//! ```text
//! 1.3.6.1.2.1.1.1.0|4|Linux zeus 4.8.6
//! 1.3.6.1.2.1.1.3.0|67|233425120
//! 1.3.6.1.2.1.2.2.1.6.2|4x|00127962f940
//! ```
//!
//! Octet-based payloads that are not safe as text are hex-encoded and
//! their tag carries an `x` suffix.

mod hex;

use std::net::Ipv4Addr;
use std::str::FromStr;

use snmpsim_api::grammar::reject_line_breaks;
use snmpsim_api::record::validate_oid;
use snmpsim_api::{CodecError, Grammar, Record, TagCode, TypeTagTable, Value, ValueKind};

pub use hex::{from_hex, hexify_octets, to_hex};

/// Field delimiter.
pub const DELIMITER: char = '|';

// ═══════════════════════════════════════════════════════════════
//  SnmprecGrammar
// ═══════════════════════════════════════════════════════════════

/// Reference grammar. Stateless apart from a shared, read-only tag table.
#[derive(Debug, Clone, Copy)]
pub struct SnmprecGrammar<'t> {
    table: &'t TypeTagTable,
}

impl SnmprecGrammar<'static> {
    pub fn new() -> Self {
        Self { table: TypeTagTable::standard() }
    }
}

impl Default for SnmprecGrammar<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> SnmprecGrammar<'t> {
    pub fn with_table(table: &'t TypeTagTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t TypeTagTable {
        self.table
    }

    /// Tag registered for `kind`. No fallback: an absent kind is an error.
    pub fn tag_for_kind(&self, kind: ValueKind) -> Result<&'t str, CodecError> {
        self.table.tag_for_kind(kind)
    }

    /// Persisted payload for `value`.
    ///
    /// Octet-based kinds are hex-encoded when unsafe as text (see
    /// [`hexify_octets`]); everything else is its printable form.
    pub fn hexify_value(&self, value: &Value) -> String {
        escape_value(value).0
    }
}

/// Returns the payload and whether it was hex-encoded.
fn escape_value(value: &Value) -> (String, bool) {
    if let Some(octets) = value.octets() {
        if let Some(hex) = hexify_octets(&octets) {
            return (hex, true);
        }
    }
    (value.to_text(), false)
}

impl Grammar for SnmprecGrammar<'_> {
    fn name(&self) -> &str {
        "snmprec"
    }

    fn extension(&self) -> &str {
        "snmprec"
    }

    fn build(&self, oid: &str, tag: &str, value: &str) -> String {
        format!("{oid}{DELIMITER}{tag}{DELIMITER}{value}\n")
    }

    fn parse(&self, line: &str) -> Result<Record, CodecError> {
        let line = line.trim();
        let mut fields = line.splitn(3, DELIMITER);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(oid), Some(tag), Some(value)) => Ok(Record::new(oid, tag, value)),
            _ => Err(CodecError::format(format!(
                "expected OID{DELIMITER}TAG{DELIMITER}VALUE, got {line:?}"
            ))),
        }
    }

    fn encode(&self, oid: &str, value: &Value) -> Result<Record, CodecError> {
        validate_oid(oid)?;
        let (payload, hexified) = escape_value(value);
        let tag = self.table.render_tag(TagCode { kind: value.kind(), hexified })?;
        Ok(Record::new(oid, tag, payload))
    }

    /// Plain octet payloads must already be in the form `encode()` would
    /// produce: anything [`hexify_octets`] would escape needs the `x` tag.
    fn check_writable(&self, record: &Record) -> Result<(), CodecError> {
        reject_line_breaks(record)?;
        let code = self
            .table
            .parse_tag(&record.tag)
            .map_err(|e| e.with_context(format!("OID {}", record.oid)))?;
        let plain_octets = matches!(code.kind, ValueKind::OctetString | ValueKind::Opaque);
        if plain_octets && !code.hexified && hexify_octets(record.value.as_bytes()).is_some() {
            return Err(CodecError::format(format!(
                "OID {}: {} payload {:?} must be hex-encoded",
                record.oid, code.kind, record.value
            )));
        }
        self.decode(record).map(|_| ())
    }

    fn decode(&self, record: &Record) -> Result<Value, CodecError> {
        let ctx = || format!("OID {}", record.oid);
        validate_oid(&record.oid)?;
        let code = self.table.parse_tag(&record.tag).map_err(|e| e.with_context(ctx()))?;
        decode_payload(code, &record.value).map_err(|e| e.with_context(ctx()))
    }
}

fn decode_payload(code: TagCode, payload: &str) -> Result<Value, CodecError> {
    if code.hexified {
        let bytes = from_hex(payload)?;
        return match code.kind {
            ValueKind::OctetString => Ok(Value::OctetString(bytes)),
            ValueKind::Opaque => Ok(Value::Opaque(bytes)),
            ValueKind::IpAddress => {
                let octets: [u8; 4] = bytes.try_into().map_err(|b: Vec<u8>| {
                    CodecError::format(format!("IpAddress needs 4 octets, got {}", b.len()))
                })?;
                Ok(Value::IpAddress(Ipv4Addr::from(octets)))
            }
            other => Err(CodecError::decode(format!("hex payload not allowed for {other}"))),
        };
    }

    match code.kind {
        ValueKind::OctetString => Ok(Value::OctetString(payload.as_bytes().to_vec())),
        ValueKind::Opaque => Ok(Value::Opaque(payload.as_bytes().to_vec())),
        ValueKind::IpAddress => Ipv4Addr::from_str(payload)
            .map(Value::IpAddress)
            .map_err(|e| CodecError::format(format!("IpAddress {payload:?}: {e}"))),
        ValueKind::Integer32 => Ok(Value::Integer32(payload.parse()?)),
        ValueKind::Gauge32 => Ok(Value::Gauge32(payload.parse()?)),
        ValueKind::Counter32 => Ok(Value::Counter32(payload.parse()?)),
        ValueKind::TimeTicks => Ok(Value::TimeTicks(payload.parse()?)),
        ValueKind::Counter64 => Ok(Value::Counter64(payload.parse()?)),
        ValueKind::ObjectIdentifier => {
            validate_oid(payload)?;
            Ok(Value::ObjectIdentifier(payload.to_string()))
        }
        ValueKind::Null => empty_payload(payload, Value::Null),
        ValueKind::NoSuchObject => empty_payload(payload, Value::NoSuchObject),
        ValueKind::NoSuchInstance => empty_payload(payload, Value::NoSuchInstance),
        ValueKind::EndOfMibView => empty_payload(payload, Value::EndOfMibView),
    }
}

fn empty_payload(payload: &str, value: Value) -> Result<Value, CodecError> {
    if payload.is_empty() {
        Ok(value)
    } else {
        Err(CodecError::format(format!(
            "{} carries no payload, got {payload:?}",
            value.kind()
        )))
    }
}
