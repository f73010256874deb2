//! Best-effort "keep the screen on" capability.

use core::convert::Infallible;

/// Platform wake lock. Either call may fail or do nothing; the player logs
/// failures and carries on.
pub trait WakeLock {
    type Error: core::fmt::Debug;

    fn acquire(&mut self) -> Result<(), Self::Error>;
    fn release(&mut self) -> Result<(), Self::Error>;
}

/// For platforms without a wake lock.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoWakeLock;

impl NoWakeLock {
    pub const fn new() -> Self {
        Self
    }
}

impl WakeLock for NoWakeLock {
    type Error = Infallible;

    fn acquire(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
