use hubfee_core::gateways::rate_limit::RateLimiter;
use std::{thread, time::Duration};

/// Waits the same amount of time after each lookup.
#[derive(Debug, Clone)]
pub struct FixedInterval {
    delay: Duration,
}

impl FixedInterval {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl RateLimiter for FixedInterval {
    fn pause(&mut self) {
        if self.delay.is_zero() {
            return;
        }
        log::trace!("Wait {:?} before the next lookup", self.delay);
        thread::sleep(self.delay);
    }
}
