use crate::config;
use anyhow::Result;
use hubfee_core::{entities::MapPoint, gateways::geocode::GeoCodingGateway};
use hubfee_gateways::nominatim::Nominatim;

pub fn geocoding_gateway(cfg: Option<config::GeocodingGateway>) -> Result<GeoCoderGw> {
    let gw = match cfg {
        Some(config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            viewbox,
            timeout,
        }) => {
            log::info!("Use Nominatim at {base_url} (viewbox = {viewbox})");
            GeoCoderGw::new(Nominatim::try_new(base_url, &user_agent, viewbox, timeout)?)
        }
        None => {
            log::warn!("Geocoding is disabled: only manual locations are known");
            GeoCoderGw::new(DummyGeoCoderGw)
        }
    };
    Ok(gw)
}

struct DummyGeoCoderGw;

impl GeoCodingGateway for DummyGeoCoderGw {
    fn resolve_query(&self, query: &str) -> Option<MapPoint> {
        log::debug!("Cannot resolve '{query}' because geocoding is disabled");
        None
    }
}

pub struct GeoCoderGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoCoderGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoCoderGw {
    fn resolve_query(&self, query: &str) -> Option<MapPoint> {
        self.0.resolve_query(query)
    }
}
