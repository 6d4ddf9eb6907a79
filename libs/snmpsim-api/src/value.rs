use std::borrow::Cow;
use std::net::Ipv4Addr;

use crate::kind::ValueKind;

/// Typed value carried by a record, one variant per [`ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Gauge32(u32),
    Integer32(i32),
    IpAddress(Ipv4Addr),
    Null,
    /// Dotted-numeric form.
    ObjectIdentifier(String),
    /// Raw octets, not necessarily UTF-8.
    OctetString(Vec<u8>),
    TimeTicks(u32),
    Opaque(Vec<u8>),
    Counter32(u32),
    Counter64(u64),
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Gauge32(_) => ValueKind::Gauge32,
            Value::Integer32(_) => ValueKind::Integer32,
            Value::IpAddress(_) => ValueKind::IpAddress,
            Value::Null => ValueKind::Null,
            Value::ObjectIdentifier(_) => ValueKind::ObjectIdentifier,
            Value::OctetString(_) => ValueKind::OctetString,
            Value::TimeTicks(_) => ValueKind::TimeTicks,
            Value::Opaque(_) => ValueKind::Opaque,
            Value::Counter32(_) => ValueKind::Counter32,
            Value::Counter64(_) => ValueKind::Counter64,
            Value::NoSuchObject => ValueKind::NoSuchObject,
            Value::NoSuchInstance => ValueKind::NoSuchInstance,
            Value::EndOfMibView => ValueKind::EndOfMibView,
        }
    }

    /// Raw octets for octet-based kinds, `None` otherwise.
    pub fn octets(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Value::OctetString(b) | Value::Opaque(b) => Some(Cow::Borrowed(b)),
            Value::IpAddress(ip) => Some(Cow::Owned(ip.octets().to_vec())),
            _ => None,
        }
    }

    /// Printable textual form, without any escaping.
    ///
    /// Octet strings are rendered lossily; callers that persist values go
    /// through the grammar, which hex-encodes anything not printable.
    pub fn to_text(&self) -> String {
        match self {
            Value::Gauge32(n) | Value::TimeTicks(n) | Value::Counter32(n) => n.to_string(),
            Value::Integer32(n) => n.to_string(),
            Value::Counter64(n) => n.to_string(),
            Value::IpAddress(ip) => ip.to_string(),
            Value::ObjectIdentifier(oid) => oid.clone(),
            Value::OctetString(b) | Value::Opaque(b) => String::from_utf8_lossy(b).into_owned(),
            Value::Null | Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
                String::new()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(s.as_bytes().to_vec())
    }
}
