use crate::rand::{RandSource, ThreadRandom};
use std::sync::OnceLock;

/// Boxed random source that can be shared across threads.
pub type SharedRandSource = Box<dyn RandSource<u32> + Send + Sync>;

/// The process-wide default random source.
///
/// Written at most once: either by [`set_default_rand`] or, on first read, with
/// [`ThreadRandom`].
static DEFAULT_RAND: OnceLock<SharedRandSource> = OnceLock::new();

/// Installs the process-wide default random source used when an identifier is
/// built without an explicit random value.
///
/// This is configuration, meant to run once at process start before any
/// identifier is created. It fails, handing the source back, if a default is
/// already installed or has already been read (which pins [`ThreadRandom`]).
///
/// # Example
/// ```
/// use idiota::{IotaId36, RandSource, set_default_rand};
///
/// struct Fixed;
/// impl RandSource<u32> for Fixed {
///     fn rand(&self) -> u32 {
///         42
///     }
/// }
///
/// set_default_rand(Fixed).ok().expect("first install succeeds");
/// assert_eq!(IotaId36::now().random(), 42);
/// assert!(set_default_rand(Fixed).is_err());
/// ```
pub fn set_default_rand<R>(source: R) -> Result<(), SharedRandSource>
where
    R: RandSource<u32> + Send + Sync + 'static,
{
    let result = DEFAULT_RAND.set(Box::new(source));
    #[cfg(feature = "tracing")]
    match &result {
        Ok(()) => tracing::debug!("installed default random source"),
        Err(_) => tracing::debug!("default random source already initialized"),
    }
    result
}

fn default_rand() -> &'static (dyn RandSource<u32> + Send + Sync) {
    &**DEFAULT_RAND.get_or_init(|| Box::new(ThreadRandom) as SharedRandSource)
}

/// A [`RandSource`] that delegates to the process-wide default.
///
/// This is the source used by [`IotaId::new`](crate::IotaId::new),
/// [`IotaId::now`](crate::IotaId::now) and the other constructors that do not
/// take an explicit random source.
#[derive(Default, Clone, Copy, Debug)]
pub struct GlobalRandom;

impl RandSource<u32> for GlobalRandom {
    fn rand(&self) -> u32 {
        default_rand().rand()
    }
}
