pub mod geocode;
pub mod rate_limit;
