//! Adapter between identifiers and the loosely typed values a storage driver
//! exchanges.

use crate::{BINARY_LEN, Error, IotaId, Result, TextCodec};
use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A value crossing a database or serialization boundary.
///
/// Mirrors the handful of shapes SQL drivers hand back for a column. Only
/// `Bytes`, `Text` and `U64` can hold an identifier; the remaining variants
/// exist so that a driver can pass through whatever it received and get a
/// precise error back.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Scalar {
    /// SQL `NULL`, or an absent value.
    Null,
    /// A raw byte sequence, either binary or text depending on length.
    Bytes(Vec<u8>),
    /// A string column.
    Text(String),
    /// An unsigned 64-bit integer, read as the packed id value.
    U64(u64),
    /// A signed 64-bit integer.
    I64(i64),
    /// A floating point number.
    F64(f64),
    /// A boolean.
    Bool(bool),
    /// A timestamp column.
    Timestamp(SystemTime),
}

impl Scalar {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::U64(_) => "u64",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

impl<C: TextCodec> IotaId<C> {
    /// Produces the value stored for this id: always the canonical text form.
    #[must_use]
    pub fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.encode())
    }

    /// Reads an id back from a driver value.
    ///
    /// - `Null` fails with [`Error::NilScalar`].
    /// - `Bytes` of exactly 8 bytes are raw binary when the strategy allows it
    ///   ([`TextCodec::BINARY_SCALARS`]); all other byte sequences are text.
    /// - `Text` is decoded with [`IotaId::decode`].
    /// - `U64` is the packed value and never fails.
    /// - Anything else fails with [`Error::UnsupportedScalarType`].
    ///
    /// # Errors
    ///
    /// See above, plus every error [`IotaId::decode`] and
    /// [`IotaId::from_bytes`] can return.
    ///
    /// # Example
    /// ```
    /// use idiota::{Error, IotaId36, Scalar};
    ///
    /// let id = IotaId36::from_parts(1_700_000_000, 123_456_789);
    /// assert_eq!(IotaId36::from_scalar(&id.to_scalar()), Ok(id));
    /// assert_eq!(IotaId36::from_scalar(&Scalar::U64(id.to_u64())), Ok(id));
    /// assert_eq!(IotaId36::from_scalar(&Scalar::Null), Err(Error::NilScalar));
    /// ```
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(value), fields(kind = value.kind()), err)
    )]
    pub fn from_scalar(value: &Scalar) -> Result<Self> {
        match value {
            Scalar::Null => Err(Error::NilScalar),
            Scalar::Bytes(bytes) if C::BINARY_SCALARS && bytes.len() == BINARY_LEN => {
                Self::from_bytes(bytes)
            }
            Scalar::Bytes(bytes) => Self::decode(bytes),
            Scalar::Text(text) => Self::decode(text),
            Scalar::U64(raw) => Ok(Self::from_u64(*raw)),
            other => Err(Error::UnsupportedScalarType { kind: other.kind() }),
        }
    }
}

impl<C: TextCodec> From<IotaId<C>> for Scalar {
    fn from(id: IotaId<C>) -> Self {
        id.to_scalar()
    }
}

impl<C: TextCodec> TryFrom<&Scalar> for IotaId<C> {
    type Error = Error;

    fn try_from(value: &Scalar) -> Result<Self> {
        Self::from_scalar(value)
    }
}

impl<C: TextCodec> TryFrom<Scalar> for IotaId<C> {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        Self::from_scalar(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IotaId36;
    use std::time::UNIX_EPOCH;

    const ID: IotaId36 = IotaId36::from_parts(1_700_000_000, 123_456_789);

    #[test]
    fn produces_canonical_text() {
        assert_eq!(ID.to_scalar(), Scalar::Text("1jh0y113ytr85".to_string()));
        assert_eq!(Scalar::from(ID), ID.to_scalar());
    }

    #[test]
    fn scans_text() {
        assert_eq!(IotaId36::from_scalar(&Scalar::Text(ID.encode())), Ok(ID));
    }

    #[test]
    fn scans_text_bytes() {
        let bytes = Scalar::Bytes(ID.encode().into_bytes());
        assert_eq!(IotaId36::from_scalar(&bytes), Ok(ID));
    }

    #[test]
    fn scans_binary_bytes() {
        let bytes = Scalar::Bytes(ID.to_bytes().to_vec());
        assert_eq!(IotaId36::from_scalar(&bytes), Ok(ID));
    }

    #[test]
    fn scans_u64() {
        let raw = (1_700_000_000_u64 << 32) | 123_456_789;
        let id = IotaId36::from_scalar(&Scalar::U64(raw)).unwrap();
        assert_eq!(id.to_u64(), raw);
        assert_eq!(id.timestamp(), 1_700_000_000);
        assert_eq!(id.random(), 123_456_789);
        assert_eq!(IotaId36::from_scalar(&Scalar::U64(u64::MAX)).unwrap().to_u64(), u64::MAX);
    }

    #[test]
    fn rejects_null() {
        assert_eq!(IotaId36::from_scalar(&Scalar::Null), Err(Error::NilScalar));
    }

    #[test]
    fn rejects_unsupported_shapes() {
        let cases = [
            (Scalar::I64(1), "i64"),
            (Scalar::F64(1.5), "f64"),
            (Scalar::Bool(true), "bool"),
            (Scalar::Timestamp(UNIX_EPOCH), "timestamp"),
        ];
        for (value, kind) in cases {
            assert_eq!(
                IotaId36::from_scalar(&value),
                Err(Error::UnsupportedScalarType { kind })
            );
        }
    }

    #[test]
    fn rejects_long_bytes() {
        let bytes = Scalar::Bytes(vec![b'0'; 14]);
        assert_eq!(
            IotaId36::from_scalar(&bytes),
            Err(Error::InvalidStringLength { len: 14 })
        );
    }

    #[test]
    fn rejects_garbage_text() {
        assert!(matches!(
            IotaId36::from_scalar(&Scalar::Text("??".to_string())),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn try_from_conversions() {
        assert_eq!(IotaId36::try_from(ID.to_scalar()), Ok(ID));
        assert_eq!(IotaId36::try_from(&Scalar::Null), Err(Error::NilScalar));
    }

    #[test]
    fn error_message_names_the_shape() {
        let err = IotaId36::from_scalar(&Scalar::Bool(false)).unwrap_err();
        assert_eq!(err.to_string(), "unable to scan bool into an id");
    }

    #[cfg(feature = "base58")]
    #[test]
    fn base58_reads_eight_bytes_as_text() {
        use crate::IotaId58;

        let zero = IotaId58::from_u64(0);
        let text = zero.encode();
        assert_eq!(text.len(), 8);
        assert_eq!(IotaId58::from_scalar(&Scalar::Bytes(text.into_bytes())), Ok(zero));

        // Raw binary is not accepted as a byte scalar for base58.
        let binary = Scalar::Bytes(ID.to_bytes().to_vec());
        assert!(IotaId58::from_scalar(&binary).is_err());
    }
}
