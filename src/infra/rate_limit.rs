use governor::clock::{Clock, DefaultClock};
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;

use crate::error::AppError;

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// Per-client-IP quotas for the public submission endpoints. Purely
/// in-process state; admins and read endpoints are never limited.
pub struct ApiRateLimiter {
    contact: KeyedLimiter,
    bookings: KeyedLimiter,
    clock: DefaultClock,
}

impl ApiRateLimiter {
    pub fn new(contact_per_hour: u32, bookings_per_hour: u32) -> Self {
        Self {
            contact: RateLimiter::keyed(Quota::per_hour(
                NonZeroU32::new(contact_per_hour.max(1)).unwrap(),
            )),
            bookings: RateLimiter::keyed(Quota::per_hour(
                NonZeroU32::new(bookings_per_hour.max(1)).unwrap(),
            )),
            clock: DefaultClock::default(),
        }
    }

    pub fn check_contact(&self, client_ip: &str) -> Result<(), AppError> {
        self.check(&self.contact, client_ip)
    }

    pub fn check_booking(&self, client_ip: &str) -> Result<(), AppError> {
        self.check(&self.bookings, client_ip)
    }

    fn check(&self, limiter: &KeyedLimiter, client_ip: &str) -> Result<(), AppError> {
        limiter.check_key(&client_ip.to_string()).map_err(|not_until| {
            let wait = not_until.wait_time_from(self.clock.now());
            AppError::RateLimited {
                retry_after_secs: wait.as_secs().max(1),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_exhaustion_yields_retry_after() {
        let limiter = ApiRateLimiter::new(2, 1);

        assert!(limiter.check_contact("1.2.3.4").is_ok());
        assert!(limiter.check_contact("1.2.3.4").is_ok());

        match limiter.check_contact("1.2.3.4") {
            Err(AppError::RateLimited { retry_after_secs }) => assert!(retry_after_secs >= 1),
            other => panic!("expected RateLimited, got {:?}", other.err()),
        }

        // Other identities are unaffected.
        assert!(limiter.check_contact("5.6.7.8").is_ok());
    }

    #[test]
    fn scopes_are_independent() {
        let limiter = ApiRateLimiter::new(1, 1);
        assert!(limiter.check_contact("1.2.3.4").is_ok());
        assert!(limiter.check_booking("1.2.3.4").is_ok());
        assert!(limiter.check_contact("1.2.3.4").is_err());
    }
}
