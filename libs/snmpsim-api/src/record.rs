use std::cmp::Ordering;

use crate::error::CodecError;

/// One persisted `(oid, tag, value)` triple.
///
/// All three fields are kept in their textual, on-disk form; the value is
/// already escaped by the grammar that produced it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    pub oid: String,
    pub tag: String,
    pub value: String,
}

impl Record {
    pub fn new(oid: impl Into<String>, tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Check that `oid` is a non-empty dotted-numeric identifier.
pub fn validate_oid(oid: &str) -> Result<(), CodecError> {
    if oid.is_empty() {
        return Err(CodecError::format("empty OID"));
    }
    for arc in oid.split('.') {
        if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::format(format!("malformed OID {oid:?}")));
        }
        arc.parse::<u64>()
            .map_err(|e| CodecError::format(format!("OID {oid:?}: {e}")))?;
    }
    Ok(())
}

/// Order OIDs by numeric sub-identifiers (`1.3.6.1.2` < `1.3.6.1.10`).
///
/// Arcs that are not numbers compare after numeric ones, lexically.
pub fn compare_oids(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
