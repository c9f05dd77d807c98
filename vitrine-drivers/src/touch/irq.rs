//! Touch interrupt latch

use embedded_hal_async::digital::Wait;
use portable_atomic::{AtomicBool, Ordering};

/// Set when the touch interrupt line falls, taken by the frame loop
///
/// A set that lands between a take and the next read is picked up on the
/// following frame; two edges before a take collapse into one report.
pub struct TouchIrqFlag(AtomicBool);

impl TouchIrqFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Return and clear the flag
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl Default for TouchIrqFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for the next falling edge on `pin` and set `flag`
pub async fn latch_next_edge<P: Wait>(pin: &mut P, flag: &TouchIrqFlag) -> Result<(), P::Error> {
    pin.wait_for_falling_edge().await?;
    flag.set();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embassy_futures::block_on;

    /// Edge arrives immediately
    struct Ready(u32);

    impl embedded_hal::digital::ErrorType for Ready {
        type Error = Infallible;
    }

    impl Wait for Ready {
        async fn wait_for_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        async fn wait_for_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
            self.0 += 1;
            Ok(())
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    #[test]
    fn test_take_clears() {
        let flag = TouchIrqFlag::new();
        assert!(!flag.take());
        flag.set();
        flag.set();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_edge_sets_flag() {
        let flag = TouchIrqFlag::new();
        let mut pin = Ready(0);
        block_on(latch_next_edge(&mut pin, &flag)).unwrap();
        assert_eq!(pin.0, 1);
        assert!(flag.take());
    }
}
