use std::fmt;

/// Closed set of value kinds a data file can carry.
///
/// Mirrors the SMIv2 application types plus the three SNMPv2 exception
/// markers. The set is fixed; adding a member requires a new tag in
/// [`TypeTagTable`](crate::tag::TypeTagTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum ValueKind {
    Gauge32,
    Integer32,
    IpAddress,
    Null,
    ObjectIdentifier,
    OctetString,
    TimeTicks,
    Opaque,
    Counter32,
    Counter64,
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl ValueKind {
    pub const ALL: [ValueKind; 13] = [
        ValueKind::Gauge32,
        ValueKind::Integer32,
        ValueKind::IpAddress,
        ValueKind::Null,
        ValueKind::ObjectIdentifier,
        ValueKind::OctetString,
        ValueKind::TimeTicks,
        ValueKind::Opaque,
        ValueKind::Counter32,
        ValueKind::Counter64,
        ValueKind::NoSuchObject,
        ValueKind::NoSuchInstance,
        ValueKind::EndOfMibView,
    ];

    /// Kinds whose payload is a raw octet sequence and may need hex escaping.
    pub fn is_octet_based(self) -> bool {
        matches!(self, ValueKind::OctetString | ValueKind::Opaque | ValueKind::IpAddress)
    }

    /// Exception markers carry no payload.
    pub fn is_exception(self) -> bool {
        matches!(
            self,
            ValueKind::NoSuchObject | ValueKind::NoSuchInstance | ValueKind::EndOfMibView
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Gauge32 => "Gauge32",
            ValueKind::Integer32 => "Integer32",
            ValueKind::IpAddress => "IpAddress",
            ValueKind::Null => "Null",
            ValueKind::ObjectIdentifier => "ObjectIdentifier",
            ValueKind::OctetString => "OctetString",
            ValueKind::TimeTicks => "TimeTicks",
            ValueKind::Opaque => "Opaque",
            ValueKind::Counter32 => "Counter32",
            ValueKind::Counter64 => "Counter64",
            ValueKind::NoSuchObject => "NoSuchObject",
            ValueKind::NoSuchInstance => "NoSuchInstance",
            ValueKind::EndOfMibView => "EndOfMibView",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
