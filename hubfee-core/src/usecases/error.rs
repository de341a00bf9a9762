use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("The district '{0}' is configured more than once")]
    DuplicateDistrict(String),
    #[error("Invalid road factor {0}")]
    RoadFactor(f64),
}
