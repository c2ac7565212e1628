use num_bigint::BigUint;
use proptest::prelude::*;
use unl_codec::{base58, checksum, RIPPLED_ALPHABET};
use unl_keys::derive;

// Property-based tests for validation key derivation.
// The encoded identifier must be reproducible, alphabet-clean, and carry a
// checksum that survives a decode round trip.

fn arbitrary_key_hex() -> impl Strategy<Value = String> {
    // ED-prefixed keys of varying byte length; derivation must not assume a
    // fixed key size beyond valid hex
    proptest::collection::vec(any::<u8>(), 1..48)
        .prop_map(|bytes| format!("ED{}", hex::encode(bytes)))
}

proptest! {
    #[test]
    fn derivation_is_deterministic(key in arbitrary_key_hex()) {
        let first = derive(&key).expect("valid hex should derive");
        let second = derive(&key).expect("valid hex should derive");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_uses_only_alphabet_characters(key in arbitrary_key_hex()) {
        let encoded = derive(&key).expect("valid hex should derive");
        for b in encoded.bytes() {
            prop_assert!(RIPPLED_ALPHABET.contains(&b));
        }
    }

    #[test]
    fn checksum_survives_decode_roundtrip(key in arbitrary_key_hex()) {
        let encoded = derive(&key).expect("valid hex should derive");
        let value = base58::decode(&encoded).expect("derived key should decode");

        // Reconstruct payload || checksum from the integer. Leading zero
        // bytes cannot occur because the payload starts with 0x1C.
        let framed = value.to_bytes_be();
        prop_assert!(framed.len() > 4);
        prop_assert_eq!(framed[0], 0x1C);

        let (payload, trailing) = framed.split_at(framed.len() - 4);
        let expected = checksum(payload);
        prop_assert_eq!(trailing, expected.as_slice());
    }

    #[test]
    fn distinct_keys_never_collide(
        a in arbitrary_key_hex(),
        b in arbitrary_key_hex(),
    ) {
        prop_assume!(a.to_uppercase() != b.to_uppercase());
        prop_assert_ne!(derive(&a).unwrap(), derive(&b).unwrap());
    }
}

#[test]
fn value_reconstruction_matches_fixture() {
    let encoded = derive("ED0000000000000000000000000000000000000000000000000000000000000000")
        .expect("zero key should derive");
    let value = base58::decode(&encoded).expect("derived key should decode");

    let expected = hex::decode(format!("1CED{}0d722377", "00".repeat(32)))
        .expect("fixture hex should decode");
    assert_eq!(value, BigUint::from_bytes_be(&expected));
}
