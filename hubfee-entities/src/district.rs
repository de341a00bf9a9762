use crate::fee::Fee;

/// A named group of neighborhoods sharing the same fallback fee.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name          : String,
    pub fee           : Fee,
    pub neighborhoods : Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    pub name: String,
    /// Fee of the zone the district belongs to.
    pub base_fee: Fee,
}

/// Flatten zones into districts, keeping zone order
/// and the order of the neighborhoods within each zone.
pub fn districts_from_zones(zones: &[Zone]) -> Vec<District> {
    zones
        .iter()
        .flat_map(|zone| {
            zone.neighborhoods.iter().map(|name| District {
                name: name.clone(),
                base_fee: zone.fee,
            })
        })
        .collect()
}
