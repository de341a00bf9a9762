/// Gate between two consecutive lookups.
pub trait RateLimiter {
    /// Block until the next lookup is allowed.
    fn pause(&mut self);
}
