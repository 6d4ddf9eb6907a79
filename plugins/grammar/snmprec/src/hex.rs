use snmpsim_api::CodecError;

/// Hex-encode `bytes` if they are not safe to persist verbatim.
///
/// Unsafe means: last byte is a space (text tools trim it) or any byte lies
/// outside printable ASCII `[32, 126]`. Returns `None` for safe sequences,
/// and always for the empty sequence.
pub fn hexify_octets(bytes: &[u8]) -> Option<String> {
    let last = *bytes.last()?;
    if last == b' ' || bytes.iter().any(|b| !(32..=126).contains(b)) {
        Some(to_hex(bytes))
    } else {
        None
    }
}

/// Lowercase two-digit hex per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Inverse of [`to_hex`]; accepts either case.
pub fn from_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_space_triggers_hex() {
        assert_eq!(hexify_octets(&[0x41, 0x20]).as_deref(), Some("4120"));
    }

    #[test]
    fn printable_left_alone() {
        assert_eq!(hexify_octets(b"AB"), None);
        assert_eq!(hexify_octets(b" leading space is fine"), None);
        assert_eq!(hexify_octets(b"~|pipes|too"), None);
    }

    #[test]
    fn empty_never_hexified() {
        assert_eq!(hexify_octets(&[]), None);
    }

    #[test]
    fn non_printable_hexifies_whole_sequence() {
        assert_eq!(hexify_octets(&[0x41, 0x0a, 0x42]).as_deref(), Some("410a42"));
        assert_eq!(hexify_octets(&[0x7f]).as_deref(), Some("7f"));
        assert_eq!(hexify_octets(&[0xff, 0x00]).as_deref(), Some("ff00"));
        assert_eq!(hexify_octets(&[0x1f]).as_deref(), Some("1f"));
    }

    #[test]
    fn from_hex_accepts_both_cases() {
        assert_eq!(from_hex("c0A8").unwrap(), vec![0xc0, 0xa8]);
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(from_hex("abc").unwrap_err().is_format());
        assert!(from_hex("zz").unwrap_err().is_format());
    }

    #[test]
    fn to_hex_is_lowercase_pairs() {
        assert_eq!(to_hex(&[0xab, 0x01, 0xf0]), "ab01f0");
        assert_eq!(to_hex(&[]), "");
    }
}
