use anyhow::{anyhow, Result};
use hubfee_core::entities::{Fee, FeeSchedule, FeeTier, MapBbox, MapPoint, Zone};
use std::{
    collections::HashMap,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "hubfee.toml";

const ENV_NAME_NOMINATIM_BASE_URL: &str = "NOMINATIM_BASE_URL";
const ENV_NAME_OUTPUT: &str = "HUBFEE_OUTPUT";

const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = "DistrictFlowers-DeliveryCalc/1.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_VIEWBOX: &str = "46.4,24.4,47.2,25.4";

pub struct Config {
    pub hub: MapPoint,
    pub road_factor: f64,
    pub rate_limit: RateLimit,
    pub geocoding: Geocoding,
    pub fee_schedule: FeeSchedule,
    pub zones: Vec<Zone>,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(base_url) = env::var(ENV_NAME_NOMINATIM_BASE_URL) {
            if let Some(GeocodingGateway::Nominatim { base_url: url, .. }) =
                &mut cfg.geocoding.gateway
            {
                *url = base_url;
            }
        }
        if let Ok(path) = env::var(ENV_NAME_OUTPUT) {
            cfg.output.path = PathBuf::from(path);
        }
        Ok(cfg)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(s)?;
        Self::try_from(raw_config)
    }
}

pub struct RateLimit {
    /// Pause after each lookup.
    pub delay: Duration,
}

pub struct Geocoding {
    /// `None` if geocoding was disabled.
    pub gateway: Option<GeocodingGateway>,
    pub query_suffix: String,
    pub overrides: HashMap<String, MapPoint>,
    pub fallback_queries: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
        viewbox: MapBbox,
        timeout: Duration,
    },
}

pub struct Output {
    /// JSON report file
    pub path: PathBuf,
}

fn map_point(point: raw::Point, what: &str) -> Result<MapPoint> {
    let raw::Point { lat, lng } = point;
    MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid {what} location: lat = {lat}, lng = {lng}"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            hub,
            distance,
            rate_limit,
            geocoding,
            gateway,
            output,
            fee_tiers,
            overrides,
            fallback_queries,
            zones,
        } = from;

        let hub = map_point(hub.unwrap_or_default(), "hub")?;

        let raw::Distance { road_factor } = distance.unwrap_or_default();

        let raw::RateLimit { delay } = rate_limit.unwrap_or_default();
        let rate_limit = RateLimit { delay };

        let raw::Geocoding {
            gateway: gateway_name,
            query_suffix,
        } = geocoding.unwrap_or_default();
        let geo_gateway = match gateway_name.unwrap_or(raw::GeocodingGateway::Nominatim) {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim {
                    base_url,
                    user_agent,
                    viewbox,
                    timeout,
                } = gateway.unwrap_or_default().nominatim.unwrap_or_default();
                let viewbox = viewbox.unwrap_or_else(|| DEFAULT_VIEWBOX.to_string());
                let viewbox = MapBbox::from_viewbox_str(&viewbox)
                    .map_err(|err| anyhow!("Invalid viewbox: {err}"))?;
                log::info!("Use Nominatim gateway");
                Some(GeocodingGateway::Nominatim {
                    base_url: base_url.unwrap_or_else(|| DEFAULT_NOMINATIM_BASE_URL.to_string()),
                    user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                    viewbox,
                    timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
                })
            }
            raw::GeocodingGateway::None => {
                log::info!("Geocoding is disabled");
                None
            }
        };

        let overrides: HashMap<_, _> = overrides
            .unwrap_or_default()
            .into_iter()
            .map(|(name, point)| {
                let pos = map_point(point, &format!("'{name}'"))?;
                Ok((name, pos))
            })
            .collect::<Result<_>>()?;

        let geocoding = Geocoding {
            gateway: geo_gateway,
            query_suffix: query_suffix
                .unwrap_or_else(|| hubfee_core::usecases::DEFAULT_QUERY_SUFFIX.to_string()),
            overrides,
            fallback_queries: fallback_queries.unwrap_or_default(),
        };

        let fee_schedule = match fee_tiers {
            Some(tiers) => {
                let tiers = tiers
                    .into_iter()
                    .map(|raw::FeeTier { max_km, fee }| FeeTier {
                        max_km,
                        fee: Fee::new(fee),
                    })
                    .collect();
                FeeSchedule::try_new(tiers)?
            }
            None => FeeSchedule::default(),
        };

        let zones: Vec<_> = zones
            .unwrap_or_default()
            .into_iter()
            .map(|zone| {
                let raw::Zone {
                    name,
                    fee,
                    neighborhoods,
                } = zone;
                Zone {
                    name,
                    fee: Fee::new(fee),
                    neighborhoods,
                }
            })
            .collect();
        if zones.iter().all(|z| z.neighborhoods.is_empty()) {
            return Err(anyhow!("No districts defined"));
        }

        let raw::Output { path } = output.unwrap_or_default();
        let output = Output { path };

        Ok(Self {
            hub,
            road_factor,
            rate_limit,
            geocoding,
            fee_schedule,
            zones,
            output,
        })
    }
}
