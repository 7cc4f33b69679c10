/// Supplies the random half of an id.
///
/// The identifier layout draws a single `u32` per id. Implement this for
/// `u32` to feed [`IotaGenerator`](crate::IotaGenerator) or to install a
/// deterministic source with [`set_default_rand`](crate::set_default_rand).
///
/// # Example
/// ```
/// use idiota::rand::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u32> for FixedRand {
///     fn rand(&self) -> u32 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedRand.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Draws the next value.
    fn rand(&self) -> T;
}

impl<T, R> RandSource<T> for &R
where
    R: RandSource<T> + ?Sized,
{
    fn rand(&self) -> T {
        (**self).rand()
    }
}
