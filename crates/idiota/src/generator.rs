use core::marker::PhantomData;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Base36, GlobalRandom, IotaId, RandSource, SystemClock, TimeSource};

/// An identifier generator with explicitly injected time and random sources.
///
/// This is the dependency-injected counterpart of [`IotaId::now`]: nothing is
/// read from process-wide state, so tests can pin both fields. The generator
/// holds no mutable state and is `Sync` whenever its sources are.
///
/// Ids from the same second differ only by their random field; two ids built
/// in the same second may collide, and nothing orders ids within a second.
///
/// # Example
/// ```
/// use idiota::{IotaGenerator, IotaId36, ThreadRandom, SystemClock};
///
/// let generator = IotaGenerator::new(SystemClock, ThreadRandom);
/// let id: IotaId36 = generator.next_id();
/// assert_eq!(id.encode().len(), 13);
/// ```
pub struct IotaGenerator<C = Base36, T = SystemClock, R = GlobalRandom>
where
    T: TimeSource,
    R: RandSource<u32>,
{
    time: T,
    rng: R,
    _codec: PhantomData<fn() -> C>,
}

impl<C, T, R> IotaGenerator<C, T, R>
where
    T: TimeSource,
    R: RandSource<u32>,
{
    /// Creates a generator reading timestamps from `time` and random fields
    /// from `rng`.
    pub const fn new(time: T, rng: R) -> Self {
        Self {
            time,
            rng,
            _codec: PhantomData,
        }
    }

    /// Generates a new id for the current second of the time source.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> IotaId<C> {
        IotaId::from_parts(self.time.current_secs(), self.rng.rand())
    }

    /// Returns the time source.
    pub const fn time(&self) -> &T {
        &self.time
    }

    /// Returns the random source.
    pub const fn rng(&self) -> &R {
        &self.rng
    }
}

impl<C> Default for IotaGenerator<C, SystemClock, GlobalRandom> {
    fn default() -> Self {
        Self::new(SystemClock, GlobalRandom)
    }
}

/// Generates a base36 id from the system clock and the process-wide default
/// random source.
///
/// # Example
/// ```
/// let id = idiota::iota();
/// assert_eq!(id.to_string().len(), 13);
/// ```
#[must_use]
pub fn iota() -> IotaId<Base36> {
    IotaId::now()
}
