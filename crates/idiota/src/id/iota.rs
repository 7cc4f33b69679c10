use crate::{
    Base36, BINARY_LEN, Error, GlobalRandom, MAX_TEXT_LEN, RandSource, Result, SystemClock,
    TextCodec, TimeSource, from_unix_secs, unix_secs,
};
use core::{cmp::Ordering, fmt, hash::Hash, marker::PhantomData, str::FromStr};
use std::time::SystemTime;

#[cfg(feature = "base58")]
use crate::Base58;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A compact, sortable identifier: a 32-bit Unix timestamp in seconds followed
/// by 32 random bits, packed into one `u64`.
///
/// ```text
///  Bit Index:  63              32 31            0
///              +-----------------+--------------+
///  Field:      | timestamp (32)  | random (32)  |
///              +-----------------+--------------+
/// ```
///
/// The packed value is the only thing stored; the binary, numeric and text
/// forms are all projections of it. Ordering follows the packed value, so ids
/// sort by timestamp first and random bits second.
///
/// The type parameter `C` selects the [`TextCodec`] used for the text, JSON
/// and scalar forms. Pick one per deployment, usually through [`IotaId36`] or
/// `IotaId58`.
#[repr(transparent)]
pub struct IotaId<C = Base36> {
    id: u64,
    _codec: PhantomData<fn() -> C>,
}

/// An [`IotaId`] with fixed-width, 13-character base36 text.
pub type IotaId36 = IotaId<Base36>;

/// An [`IotaId`] with variable-width base58 text.
#[cfg(feature = "base58")]
pub type IotaId58 = IotaId<Base58>;

impl<C> IotaId<C> {
    const RANDOM_BITS: u32 = 32;
    const RANDOM_SHIFT: u32 = 0;
    const TIMESTAMP_SHIFT: u32 = Self::RANDOM_SHIFT + Self::RANDOM_BITS;

    const RANDOM_MASK: u64 = (1 << Self::RANDOM_BITS) - 1;

    /// Builds an id from an explicit timestamp and random value.
    #[must_use]
    pub const fn from_parts(timestamp: u32, random: u32) -> Self {
        Self::from_u64(((timestamp as u64) << Self::TIMESTAMP_SHIFT) | random as u64)
    }

    /// Builds an id from its packed 64-bit value.
    ///
    /// Every `u64` splits into a legal `(timestamp, random)` pair, so this
    /// never fails.
    #[must_use]
    pub const fn from_u64(raw: u64) -> Self {
        Self {
            id: raw,
            _codec: PhantomData,
        }
    }

    /// Returns the packed value, `(timestamp << 32) | random`.
    #[must_use]
    pub const fn to_u64(&self) -> u64 {
        self.id
    }

    /// Extracts the timestamp, in seconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        (self.id >> Self::TIMESTAMP_SHIFT) as u32
    }

    /// Extracts the random field.
    #[must_use]
    pub const fn random(&self) -> u32 {
        ((self.id >> Self::RANDOM_SHIFT) & Self::RANDOM_MASK) as u32
    }

    /// Returns the timestamp as a [`SystemTime`].
    #[must_use]
    pub fn time(&self) -> SystemTime {
        from_unix_secs(self.timestamp())
    }

    /// Creates an id from an optional time and an optional random value.
    ///
    /// A missing time means now; a missing random value is drawn from the
    /// process-wide default source (see [`GlobalRandom`]). Times are truncated
    /// to whole seconds and wrapped into 32 bits, see [`unix_secs`].
    #[must_use]
    pub fn new(time: Option<SystemTime>, random: Option<u32>) -> Self {
        let timestamp = time.map_or_else(|| SystemClock.current_secs(), unix_secs);
        let random = random.unwrap_or_else(|| GlobalRandom.rand());
        Self::from_parts(timestamp, random)
    }

    /// Creates an id for the current second using the default random source.
    #[must_use]
    pub fn now() -> Self {
        Self::new(None, None)
    }

    /// Creates an id for the given time using the default random source.
    #[must_use]
    pub fn from_datetime(datetime: SystemTime) -> Self {
        Self::from_datetime_and_rand(datetime, &GlobalRandom)
    }

    /// Creates an id for the given time with a custom [`RandSource`].
    #[must_use]
    pub fn from_datetime_and_rand<R>(datetime: SystemTime, rng: &R) -> Self
    where
        R: RandSource<u32> + ?Sized,
    {
        Self::from_timestamp_and_rand(unix_secs(datetime), rng)
    }

    /// Creates an id for the given Unix second using the default random
    /// source.
    #[must_use]
    pub fn from_timestamp(timestamp: u32) -> Self {
        Self::from_timestamp_and_rand(timestamp, &GlobalRandom)
    }

    /// Creates an id for the given Unix second with a custom [`RandSource`].
    #[must_use]
    pub fn from_timestamp_and_rand<R>(timestamp: u32, rng: &R) -> Self
    where
        R: RandSource<u32> + ?Sized,
    {
        Self::from_parts(timestamp, rng.rand())
    }

    /// Returns the 8-byte big-endian binary form, timestamp first.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; BINARY_LEN] {
        self.id.to_be_bytes()
    }

    /// Builds an id from its 8-byte big-endian binary form.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; BINARY_LEN]) -> Self {
        Self::from_u64(u64::from_be_bytes(bytes))
    }

    /// Decodes the binary form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidByteLength`] unless `bytes` is exactly 8 bytes
    /// long. Shorter input is never padded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; BINARY_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidByteLength { len: bytes.len() })?;
        Ok(Self::from_be_bytes(array))
    }
}

impl<C: TextCodec> IotaId<C> {
    /// Encodes this id as text using the strategy `C`.
    ///
    /// # Example
    /// ```
    /// use idiota::IotaId36;
    ///
    /// let id = IotaId36::from_u64(0);
    /// assert_eq!(id.encode(), "0000000000000");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        C::encode(&self.to_bytes())
    }

    /// Decodes text produced by [`IotaId::encode`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStringLength`] if the input is longer than 13 bytes
    /// - [`Error::Decode`] if the strategy rejects the input
    /// - [`Error::InvalidByteLength`] if the decoded bytes are not exactly 8
    ///
    /// # Example
    /// ```
    /// use idiota::{Error, IotaId36};
    ///
    /// let id = IotaId36::decode("1jh0y113ytr85").unwrap();
    /// assert_eq!(id.timestamp(), 1_700_000_000);
    /// assert_eq!(id.random(), 123_456_789);
    ///
    /// assert_eq!(
    ///     IotaId36::decode("00000000000000"),
    ///     Err(Error::InvalidStringLength { len: 14 })
    /// );
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, err))]
    pub fn decode(text: impl AsRef<[u8]>) -> Result<Self> {
        let text = text.as_ref();
        if text.len() > MAX_TEXT_LEN {
            return Err(Error::InvalidStringLength { len: text.len() });
        }
        let bytes = C::decode(text)?;
        Self::from_bytes(&bytes)
    }
}

impl<C> Clone for IotaId<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for IotaId<C> {}

impl<C> PartialEq for IotaId<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for IotaId<C> {}

impl<C> PartialOrd for IotaId<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for IotaId<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<C> Hash for IotaId<C> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<C> fmt::Debug for IotaId<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IotaId")
            .field("timestamp", &self.timestamp())
            .field("random", &self.random())
            .finish()
    }
}

impl<C: TextCodec> fmt::Display for IotaId<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<C: TextCodec> FromStr for IotaId<C> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl<C: TextCodec> TryFrom<&str> for IotaId<C> {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl<C> TryFrom<&[u8]> for IotaId<C> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl<C> From<[u8; BINARY_LEN]> for IotaId<C> {
    fn from(bytes: [u8; BINARY_LEN]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl<C> From<IotaId<C>> for [u8; BINARY_LEN] {
    fn from(id: IotaId<C>) -> Self {
        id.to_bytes()
    }
}

impl<C> From<u64> for IotaId<C> {
    fn from(raw: u64) -> Self {
        Self::from_u64(raw)
    }
}

impl<C> From<IotaId<C>> for u64 {
    fn from(id: IotaId<C>) -> Self {
        id.to_u64()
    }
}

impl<C: TextCodec> From<IotaId<C>> for String {
    fn from(id: IotaId<C>) -> Self {
        id.encode()
    }
}

impl<C: TextCodec> PartialEq<str> for IotaId<C> {
    fn eq(&self, other: &str) -> bool {
        Self::decode(other).is_ok_and(|id| id == *self)
    }
}

impl<C: TextCodec> PartialEq<&str> for IotaId<C> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl<C: TextCodec> PartialEq<IotaId<C>> for &str {
    fn eq(&self, other: &IotaId<C>) -> bool {
        other == *self
    }
}
