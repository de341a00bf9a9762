use super::prelude::*;
use std::collections::HashMap;

pub const DEFAULT_QUERY_SUFFIX: &str = "Riyadh Saudi Arabia";

#[derive(Debug, Clone)]
pub struct GeocoderParams {
    /// Known locations that are never looked up.
    pub overrides: HashMap<String, MapPoint>,
    /// Search queries to use instead of the district name.
    pub fallback_queries: HashMap<String, String>,
    /// Appended to the district name if no fallback query exists.
    pub query_suffix: String,
}

impl Default for GeocoderParams {
    fn default() -> Self {
        Self {
            overrides: HashMap::new(),
            fallback_queries: HashMap::new(),
            query_suffix: DEFAULT_QUERY_SUFFIX.to_string(),
        }
    }
}

pub fn geocoding_query(params: &GeocoderParams, district: &str) -> String {
    match params.fallback_queries.get(district) {
        Some(query) => query.clone(),
        None if params.query_suffix.is_empty() => district.to_string(),
        None => format!("{district} {}", params.query_suffix),
    }
}

pub fn locate_district<G>(gateway: &G, params: &GeocoderParams, district: &str) -> Option<MapPoint>
where
    G: GeoCodingGateway,
{
    if let Some(pos) = params.overrides.get(district) {
        log::debug!("Use manual location of '{district}': {pos}");
        return Some(*pos);
    }
    let query = geocoding_query(params, district);
    if params.fallback_queries.contains_key(district) {
        log::debug!("Use fallback query for '{district}': {query}");
    }
    gateway.resolve_query(&query)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockGeoCoder, *};

    fn params() -> GeocoderParams {
        let mut params = GeocoderParams::default();
        params.overrides.insert(
            "Al Malqa".into(),
            MapPoint::try_from_lat_lng_deg(24.8008, 46.5978).unwrap(),
        );
        params.fallback_queries.insert(
            "KAFD".into(),
            "King Abdullah Financial District Riyadh Saudi Arabia".into(),
        );
        params
    }

    #[test]
    fn default_query() {
        assert_eq!(
            "Al Olaya Riyadh Saudi Arabia",
            geocoding_query(&params(), "Al Olaya")
        );
    }

    #[test]
    fn fallback_query() {
        assert_eq!(
            "King Abdullah Financial District Riyadh Saudi Arabia",
            geocoding_query(&params(), "KAFD")
        );
    }

    #[test]
    fn query_without_suffix() {
        let params = GeocoderParams {
            query_suffix: String::new(),
            ..Default::default()
        };
        assert_eq!("Al Olaya", geocoding_query(&params, "Al Olaya"));
    }

    #[test]
    fn manual_override_is_never_looked_up() {
        let gw = MockGeoCoder::default();
        let pos = locate_district(&gw, &params(), "Al Malqa");
        assert_eq!(
            Some(MapPoint::try_from_lat_lng_deg(24.8008, 46.5978).unwrap()),
            pos
        );
        assert!(gw.queries.borrow().is_empty());
    }

    #[test]
    fn look_up_districts_without_override() {
        let gw = MockGeoCoder::default();
        let olaya = MapPoint::try_from_lat_lng_deg(24.69, 46.68).unwrap();
        gw.results
            .borrow_mut()
            .insert("Al Olaya Riyadh Saudi Arabia".into(), olaya);
        assert_eq!(Some(olaya), locate_district(&gw, &params(), "Al Olaya"));
        assert_eq!(None, locate_district(&gw, &params(), "KAFD"));
        assert_eq!(
            vec![
                "Al Olaya Riyadh Saudi Arabia".to_string(),
                "King Abdullah Financial District Riyadh Saudi Arabia".to_string(),
            ],
            *gw.queries.borrow()
        );
    }
}
