//! # Time Sources
//!
//! The shim's pseudo-animation reads time through this trait so previews can
//! use the wall clock while tests pin it.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    /// Current time in seconds.
    fn seconds(&self) -> f64;
}

/// Wall-clock time since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// A manually advanced clock.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    now: Cell<f64>,
}

impl FixedClock {
    pub fn new(seconds: f64) -> Self {
        Self {
            now: Cell::new(seconds),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for FixedClock {
    fn seconds(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn seconds(&self) -> f64 {
        (**self).seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::new(1.5);
        assert_eq!(clock.seconds(), 1.5);
        clock.advance(0.5);
        assert_eq!(clock.seconds(), 2.0);
        clock.set(0.0);
        assert_eq!(clock.seconds(), 0.0);
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        assert!(SystemClock.seconds() > 0.0);
    }
}
