use super::{locate_district, prelude::*, GeocoderParams};
use crate::util::distance::{distance_to_zone, road_distance_km, DEFAULT_ROAD_FACTOR};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct BatchParams {
    /// Origin of all deliveries.
    pub hub: MapPoint,
    pub road_factor: f64,
    pub fee_schedule: FeeSchedule,
    pub geocoder: GeocoderParams,
}

impl BatchParams {
    pub fn new(hub: MapPoint) -> Self {
        Self {
            hub,
            road_factor: DEFAULT_ROAD_FACTOR,
            fee_schedule: FeeSchedule::default(),
            geocoder: GeocoderParams::default(),
        }
    }
}

/// Progress of a running batch, reported twice per district:
/// before the lookup and after the estimate is known.
///
/// `index` starts at 1.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Locating {
        index: usize,
        total: usize,
        district: &'a District,
    },
    Estimated {
        index: usize,
        total: usize,
        estimate: &'a DeliveryEstimate,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// One estimate per district in input order.
    pub estimates: Vec<DeliveryEstimate>,
    /// Names of the districts that could not be located.
    pub failed: Vec<String>,
}

pub fn estimate_delivery_fee(
    params: &BatchParams,
    district: &District,
    pos: Option<MapPoint>,
) -> DeliveryEstimate {
    let District { name, base_fee } = district;
    let (km, fee) = match pos {
        Some(pos) => {
            let km = road_distance_km(params.hub, pos, params.road_factor);
            let fee = distance_to_zone(&params.fee_schedule, km).unwrap_or(*base_fee);
            (Some(km), fee)
        }
        None => (None, *base_fee),
    };
    DeliveryEstimate {
        district: name.clone(),
        km,
        fee,
    }
}

pub fn estimate_delivery_fees<G, L, F>(
    gateway: &G,
    rate_limiter: &mut L,
    params: &BatchParams,
    districts: &[District],
    mut on_progress: F,
) -> Result<BatchOutcome>
where
    G: GeoCodingGateway,
    L: RateLimiter,
    F: FnMut(Progress<'_>),
{
    validate_params(params)?;
    validate_districts(districts)?;

    let total = districts.len();
    log::info!("Estimate delivery fees of {total} districts");

    let mut estimates = Vec::with_capacity(total);
    let mut failed = vec![];

    for (i, district) in districts.iter().enumerate() {
        let index = i + 1;
        on_progress(Progress::Locating {
            index,
            total,
            district,
        });
        let pos = locate_district(gateway, &params.geocoder, &district.name);
        let estimate = estimate_delivery_fee(params, district, pos);
        if !estimate.is_located() {
            log::debug!("Could not locate '{}'", district.name);
            failed.push(district.name.clone());
        }
        on_progress(Progress::Estimated {
            index,
            total,
            estimate: &estimate,
        });
        estimates.push(estimate);
        rate_limiter.pause();
    }

    Ok(BatchOutcome { estimates, failed })
}

fn validate_params(params: &BatchParams) -> Result<()> {
    if !params.road_factor.is_finite() || params.road_factor <= 0.0 {
        return Err(Error::RoadFactor(params.road_factor));
    }
    Ok(())
}

fn validate_districts(districts: &[District]) -> Result<()> {
    let mut names = HashSet::new();
    for district in districts {
        if !names.insert(district.name.as_str()) {
            return Err(Error::DuplicateDistrict(district.name.clone()));
        }
    }
    Ok(())
}
