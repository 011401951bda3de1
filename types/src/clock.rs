//! Clock abstraction.
//!
//! All engine operations take the current time from a `Clock` rather than
//! calling into the system directly, so tests can drive time explicitly
//! (see the `vigil-nullables` crate).

use crate::time::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
