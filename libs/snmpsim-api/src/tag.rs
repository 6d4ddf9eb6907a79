use std::sync::OnceLock;

use crate::error::CodecError;
use crate::kind::ValueKind;

/// Suffix appended to a tag when the payload is hex-encoded (`4x`, `68x`).
pub const HEX_SUFFIX: char = 'x';

/// Tag codes persisted in data files, version 1.
///
/// Frozen: these numbers are what existing `.snmprec` files contain.
/// New kinds get new codes; existing codes never move.
const STANDARD_TAGS: [(ValueKind, &str); 13] = [
    (ValueKind::Integer32, "2"),
    (ValueKind::OctetString, "4"),
    (ValueKind::Null, "5"),
    (ValueKind::ObjectIdentifier, "6"),
    (ValueKind::IpAddress, "64"),
    (ValueKind::Counter32, "65"),
    (ValueKind::Gauge32, "66"),
    (ValueKind::TimeTicks, "67"),
    (ValueKind::Opaque, "68"),
    (ValueKind::Counter64, "70"),
    (ValueKind::NoSuchObject, "128"),
    (ValueKind::NoSuchInstance, "129"),
    (ValueKind::EndOfMibView, "130"),
];

static STANDARD: OnceLock<TypeTagTable> = OnceLock::new();

/// Bijection between [`ValueKind`] and its persisted tag code.
///
/// Construction rejects duplicate kinds and duplicate tags, so every
/// instance is a true bijection. Instances are immutable.
#[derive(Debug, Clone)]
pub struct TypeTagTable {
    entries: Vec<(ValueKind, String)>,
}

impl TypeTagTable {
    /// The process-wide table, built on first access and read-only after.
    pub fn standard() -> &'static TypeTagTable {
        STANDARD.get_or_init(|| TypeTagTable {
            entries: STANDARD_TAGS
                .iter()
                .map(|(kind, tag)| (*kind, (*tag).to_string()))
                .collect(),
        })
    }

    /// Build a table from explicit entries.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (ValueKind, S)>,
        S: Into<String>,
    {
        let mut table = Self { entries: Vec::new() };
        for (kind, tag) in entries {
            let tag = tag.into();
            if tag.is_empty() || tag.ends_with(HEX_SUFFIX) {
                return Err(CodecError::format(format!("invalid tag {tag:?} for {kind}")));
            }
            if table.entries.iter().any(|(k, _)| *k == kind) {
                return Err(CodecError::decode(format!("kind {kind} registered twice")));
            }
            if table.entries.iter().any(|(_, t)| *t == tag) {
                return Err(CodecError::decode(format!("tag {tag:?} registered twice")));
            }
            table.entries.push((kind, tag));
        }
        Ok(table)
    }

    /// Reverse lookup: the tag registered for `kind`.
    pub fn tag_for_kind(&self, kind: ValueKind) -> Result<&str, CodecError> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, t)| t.as_str())
            .ok_or_else(|| CodecError::decode(format!("unknown type {kind}")))
    }

    pub fn kind_for_tag(&self, tag: &str) -> Result<ValueKind, CodecError> {
        self.entries
            .iter()
            .find(|(_, t)| t == tag)
            .map(|(k, _)| *k)
            .ok_or_else(|| CodecError::decode(format!("unknown tag {tag:?}")))
    }

    /// Resolve a persisted tag, honouring the hex suffix.
    ///
    /// The suffix is only legal on octet-based kinds.
    pub fn parse_tag(&self, tag: &str) -> Result<TagCode, CodecError> {
        let (base, hexified) = match tag.strip_suffix(HEX_SUFFIX) {
            Some(base) => (base, true),
            None => (tag, false),
        };
        let kind = self.kind_for_tag(base)?;
        if hexified && !kind.is_octet_based() {
            return Err(CodecError::decode(format!(
                "tag {tag:?}: hex encoding not allowed for {kind}"
            )));
        }
        Ok(TagCode { kind, hexified })
    }

    /// Persisted form of `code`, e.g. `4x` for a hex-encoded OctetString.
    pub fn render_tag(&self, code: TagCode) -> Result<String, CodecError> {
        let base = self.tag_for_kind(code.kind)?;
        Ok(if code.hexified {
            format!("{base}{HEX_SUFFIX}")
        } else {
            base.to_string()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValueKind, &str)> {
        self.entries.iter().map(|(k, t)| (*k, t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A resolved tag: the kind plus whether the payload is hex-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCode {
    pub kind: ValueKind,
    pub hexified: bool,
}
