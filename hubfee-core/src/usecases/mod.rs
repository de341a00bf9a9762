mod error;
mod estimate_delivery_fees;
mod locate_district;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, estimate_delivery_fees::*, locate_district::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{geocode::GeoCodingGateway, rate_limit::RateLimiter},
    };
}
