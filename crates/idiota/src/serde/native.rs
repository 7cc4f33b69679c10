/// Serializes an [`IotaId`](crate::IotaId) as its packed `u64`.
///
/// Useful for stores that compare strings case-insensitively or index
/// integers more cheaply than text.
///
/// ```
/// use idiota::{IotaId36, serde::as_native};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_native")]
///     id: IotaId36,
/// }
///
/// let row = Row { id: IotaId36::from_u64(42) };
/// assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"id":42}"#);
/// ```
pub mod as_native {
    use crate::IotaId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<C, S>(id: &IotaId<C>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_u64().serialize(s)
    }

    pub fn deserialize<'de, C, D>(d: D) -> Result<IotaId<C>, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(IotaId::from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::as_native;
    use crate::IotaId36;
    use serde::{Deserialize, Serialize};

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_native")]
        event_id: IotaId36,
    }

    #[test]
    fn native_roundtrip() {
        let row = Row {
            event_id: IotaId36::from_parts(1, 2),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":4294967298}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn native_max() {
        let json = format!(r#"{{"event_id":{}}}"#, u64::MAX);
        let row: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(row.event_id.to_u64(), u64::MAX);
    }

    #[test]
    fn native_rejects_negative() {
        assert!(serde_json::from_str::<Row>(r#"{"event_id":-1}"#).is_err());
    }
}
