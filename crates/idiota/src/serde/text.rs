use crate::{IotaId, TextCodec};
use core::{fmt, marker::PhantomData};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl<C: TextCodec> Serialize for IotaId<C> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.encode())
    }
}

impl<'de, C: TextCodec> Deserialize<'de> for IotaId<C> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextVisitor<C>(PhantomData<fn() -> C>);

        impl<C: TextCodec> de::Visitor<'_> for TextVisitor<C> {
            type Value = IotaId<C>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a {} encoded id string", C::NAME)
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                IotaId::decode(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(TextVisitor(PhantomData))
    }
}
