//! The encoder must agree with ciborium's preferred serialization.

use cbor_fixture_pack::{encode, CborEncoder, PackValue};
use proptest::prelude::*;

fn ciborium_bytes<T: serde::Serialize>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    ciborium::into_writer(value, &mut out).expect("ciborium encode");
    out
}

proptest! {
    #[test]
    fn u64_sequences_match_ciborium(values in proptest::collection::vec(any::<u64>(), 0..40)) {
        let ours = CborEncoder::new().encode_u64_seq(&values);
        prop_assert_eq!(&ours, &ciborium_bytes(&values));

        let decoded: Vec<u64> = ciborium::from_reader(ours.as_slice()).expect("decode");
        prop_assert_eq!(decoded, values);
    }

    #[test]
    fn signed_integers_match_ciborium(int in any::<i64>()) {
        prop_assert_eq!(encode(&PackValue::Integer(int)), ciborium_bytes(&int));
    }

    #[test]
    fn encoding_is_deterministic(values in proptest::collection::vec(0u64..1000, 0..10)) {
        let value = PackValue::from(values.as_slice());
        prop_assert_eq!(encode(&value), encode(&value));
    }
}
