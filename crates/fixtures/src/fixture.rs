//! The fixture table.

use std::path::PathBuf;

use cbor_fixture_buffers::print_octets_default;
use cbor_fixture_pack::CborEncoder;

/// One output file: an integer sequence and the name it is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub file_name: &'static str,
    pub values: &'static [u64],
    /// When set, the encoded bytes are announced on stdout under this label.
    pub label: Option<&'static str>,
}

pub const FIXTURES: [Fixture; 3] = [
    Fixture {
        file_name: "payload1.cbor",
        values: &[1, 2],
        label: Some("This is the cbor data with 1"),
    },
    Fixture {
        file_name: "payload1long.cbor",
        values: &[1, 2, 3],
        label: None,
    },
    Fixture {
        file_name: "payload2.cbor",
        values: &[2, 2],
        label: Some("This is the cbor data with 2"),
    },
];

impl Fixture {
    /// Canonical CBOR array encoding of [`Fixture::values`].
    pub fn encode(&self) -> Vec<u8> {
        CborEncoder::new().encode_u64_seq(self.values)
    }
}

/// A fixture that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFixture {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub label: Option<&'static str>,
}

impl WrittenFixture {
    /// `"<label> <hex bytes>"` for labelled fixtures.
    pub fn announcement(&self) -> Option<String> {
        self.label
            .map(|label| format!("{label} {}", print_octets_default(&self.bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_encodings() {
        let encoded: Vec<Vec<u8>> = FIXTURES.iter().map(Fixture::encode).collect();
        assert_eq!(
            encoded,
            vec![
                vec![0x82, 0x01, 0x02],
                vec![0x83, 0x01, 0x02, 0x03],
                vec![0x82, 0x02, 0x02],
            ]
        );
    }

    #[test]
    fn two_fixtures_are_announced() {
        let labelled = FIXTURES.iter().filter(|f| f.label.is_some()).count();
        assert_eq!(labelled, 2);
    }

    #[test]
    fn announcement_renders_hex() {
        let written = WrittenFixture {
            path: PathBuf::from("payload1.cbor"),
            bytes: FIXTURES[0].encode(),
            label: FIXTURES[0].label,
        };
        assert_eq!(
            written.announcement().as_deref(),
            Some("This is the cbor data with 1 82 01 02")
        );

        let silent = WrittenFixture {
            label: None,
            ..written
        };
        assert_eq!(silent.announcement(), None);
    }
}
