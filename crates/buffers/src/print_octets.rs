//! Debug utility for printing octets as hex strings.

/// Formats a byte slice as a hex string for debugging.
///
/// At most `max` bytes are shown; the rest are summarized as `... (N more)`.
///
/// # Example
///
/// ```
/// use cbor_fixture_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x83, 0x01, 0x02, 0x03], 16), "83 01 02 03");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let shown: Vec<String> = octets
        .iter()
        .take(max)
        .map(|byte| format!("{byte:02x}"))
        .collect();
    let mut result = shown.join(" ");

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats a byte slice as a hex string with default max of 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_octets_empty() {
        assert_eq!(print_octets(&[], 16), "");
    }

    #[test]
    fn test_print_octets_single() {
        assert_eq!(print_octets(&[0x01], 16), "01");
    }

    #[test]
    fn test_print_octets_array_header_and_items() {
        assert_eq!(print_octets_default(&[0x82, 0x02, 0x02]), "82 02 02");
    }

    #[test]
    fn test_print_octets_truncated() {
        let data: Vec<u8> = (0..20).collect();
        let result = print_octets(&data, 10);
        assert!(result.starts_with("00 01 02"));
        assert!(result.ends_with("09... (10 more)"));
    }
}
