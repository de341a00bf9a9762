use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::{collections::HashMap, path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("hubfee.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub hub: Option<Point>,
    pub distance: Option<Distance>,
    pub rate_limit: Option<RateLimit>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub output: Option<Output>,
    pub fee_tiers: Option<Vec<FeeTier>>,
    pub overrides: Option<HashMap<String, Point>>,
    pub fallback_queries: Option<HashMap<String, String>>,
    pub zones: Option<Vec<Zone>>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Clone, Copy, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Default for Point {
    fn default() -> Self {
        Config::default().hub.expect("Hub configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Distance {
    pub road_factor: f64,
}

impl Default for Distance {
    fn default() -> Self {
        Config::default()
            .distance
            .expect("Distance configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RateLimit {
    #[serde(deserialize_with = "deserialize_duration")]
    pub delay: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Config::default()
            .rate_limit
            .expect("Rate limit configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub query_suffix: Option<String>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    /// Only manual locations are known.
    None,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub viewbox: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Nominatim {
    fn default() -> Self {
        Gateway::default()
            .nominatim
            .expect("Nominatim gateway configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub path: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Config::default().output.expect("Output configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeeTier {
    pub max_km: f64,
    pub fee: u32,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Zone {
    pub name: String,
    pub fee: u32,
    pub neighborhoods: Vec<String>,
}
