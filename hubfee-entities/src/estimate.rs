use crate::fee::Fee;

/// Estimated delivery distance and fee of a single district.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryEstimate {
    pub district: String,
    /// Estimated road distance from the hub in km.
    ///
    /// `None` if the district could not be located.
    pub km: Option<f64>,
    pub fee: Fee,
}

impl DeliveryEstimate {
    pub const fn is_located(&self) -> bool {
        self.km.is_some()
    }
}
