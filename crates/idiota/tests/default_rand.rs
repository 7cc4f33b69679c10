//! Installing the process-wide default random source. Lives in its own test
//! binary because the default can only be set once per process.

use idiota::{IotaGenerator, IotaId36, RandSource, SystemClock, set_default_rand};

struct FixedRand(u32);

impl RandSource<u32> for FixedRand {
    fn rand(&self) -> u32 {
        self.0
    }
}

#[test]
fn installed_default_is_used_everywhere() {
    assert!(set_default_rand(FixedRand(0xdead_beef)).is_ok());

    assert_eq!(IotaId36::now().random(), 0xdead_beef);
    assert_eq!(IotaId36::new(None, None).random(), 0xdead_beef);
    assert_eq!(IotaId36::from_timestamp(1).random(), 0xdead_beef);
    assert_eq!(idiota::iota().random(), 0xdead_beef);

    let generator: IotaGenerator = IotaGenerator::default();
    assert_eq!(generator.next_id().random(), 0xdead_beef);

    // Explicit values still win.
    assert_eq!(IotaId36::new(None, Some(7)).random(), 7);
    let generator = IotaGenerator::<idiota::Base36, _, _>::new(SystemClock, FixedRand(3));
    assert_eq!(generator.next_id().random(), 3);

    // The default is set once.
    assert!(set_default_rand(FixedRand(1)).is_err());
    assert_eq!(IotaId36::now().random(), 0xdead_beef);
}
