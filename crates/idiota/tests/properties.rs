use idiota::{Base36, Error, IotaId, IotaId36, Scalar, TextCodec};
use proptest::prelude::*;

fn text_roundtrip<C: TextCodec>(ts: u32, rand: u32) -> Result<(), TestCaseError> {
    let id = IotaId::<C>::from_parts(ts, rand);
    let text = id.encode();
    prop_assert!(text.len() <= 13);
    prop_assert_eq!(IotaId::<C>::decode(&text)?, id);
    prop_assert_eq!(IotaId::<C>::from_scalar(&id.to_scalar())?, id);
    Ok(())
}

proptest! {
    #[test]
    fn packed_value_is_timestamp_then_random(ts: u32, rand: u32) {
        let id = IotaId36::from_parts(ts, rand);
        prop_assert_eq!(id.to_u64(), (u64::from(ts) << 32) | u64::from(rand));
        prop_assert_eq!(IotaId36::from_u64(id.to_u64()), id);
        prop_assert_eq!(id.timestamp(), ts);
        prop_assert_eq!(id.random(), rand);
    }

    #[test]
    fn binary_roundtrip(raw: u64) {
        let id = IotaId36::from_u64(raw);
        prop_assert_eq!(IotaId36::from_bytes(&id.to_bytes())?, id);
    }

    #[test]
    fn base36_text_is_fixed_width(raw: u64) {
        prop_assert_eq!(IotaId36::from_u64(raw).encode().len(), 13);
    }

    #[test]
    fn base36_text_roundtrip(ts: u32, rand: u32) {
        text_roundtrip::<Base36>(ts, rand)?;
    }

    #[cfg(feature = "base58")]
    #[test]
    fn base58_text_roundtrip(ts: u32, rand: u32) {
        text_roundtrip::<idiota::Base58>(ts, rand)?;
    }

    #[test]
    fn base36_text_order_matches_id_order(a: u64, b: u64) {
        let (x, y) = (IotaId36::from_u64(a), IotaId36::from_u64(b));
        prop_assert_eq!(x.cmp(&y), x.encode().cmp(&y.encode()));
    }

    #[test]
    fn wrong_binary_length_is_rejected(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assume!(bytes.len() != 8);
        prop_assert_eq!(
            IotaId36::from_bytes(&bytes),
            Err(Error::InvalidByteLength { len: bytes.len() })
        );
    }

    #[test]
    fn long_text_is_rejected(text in "[0-9a-z]{14,32}") {
        prop_assert_eq!(
            IotaId36::decode(&text),
            Err(Error::InvalidStringLength { len: text.len() })
        );
    }

    #[test]
    fn u64_scalar_never_fails(raw: u64) {
        prop_assert_eq!(IotaId36::from_scalar(&Scalar::U64(raw))?.to_u64(), raw);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_roundtrip(raw: u64) {
        let id = IotaId36::from_u64(raw);
        prop_assert_eq!(IotaId36::from_json(&id.to_json()).unwrap(), id);
    }
}
