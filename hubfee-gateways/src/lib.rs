pub mod nominatim;
pub mod rate_limit;
