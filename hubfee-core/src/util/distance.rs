use crate::entities::*;

/// Default multiplier between straight-line and road distance.
pub const DEFAULT_ROAD_FACTOR: f64 = 1.3;

/// Round to one decimal place, halves away from zero.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimated road distance in km between `hub` and `target`.
///
/// The great-circle distance is stretched by `road_factor`
/// to account for the detours of the road network.
pub fn road_distance_km(hub: MapPoint, target: MapPoint, road_factor: f64) -> f64 {
    let straight_km = MapPoint::distance(hub, target).to_km();
    round_to_one_decimal(straight_km * road_factor)
}

/// Map a distance to the fee of its tier or `None` if no tier matches.
pub fn distance_to_zone(schedule: &FeeSchedule, km: f64) -> Option<Fee> {
    schedule.fee_for_distance(km)
}
