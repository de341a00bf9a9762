use itertools::Itertools;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
    #[error("Failed to parse '{0}'")]
    Format(String),
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location given in degrees.
///
/// The value is validated on construction and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    pub fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| ParseError::Lat(lat_deg_str.to_string()))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| ParseError::Lng(lng_deg_str.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Great-circle distance on the surface of the earth
    /// using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// Boxes crossing the antimeridian are not supported.
    pub fn is_valid(&self) -> bool {
        self.sw.lat() <= self.ne.lat() && self.sw.lng() <= self.ne.lng()
    }

    /// Inclusive on all edges.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        (self.sw.lat()..=self.ne.lat()).contains(&pt.lat())
            && (self.sw.lng()..=self.ne.lng()).contains(&pt.lng())
    }

    /// Parse the `<min_lng>,<min_lat>,<max_lng>,<max_lat>` notation
    /// used by search services for their `viewbox` parameter.
    pub fn from_viewbox_str(s: &str) -> Result<Self, ParseError> {
        let (sw_lng, sw_lat, ne_lng, ne_lat) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| ParseError::Format(s.to_string()))?;
        let sw = MapPoint::parse_lat_lng_deg(sw_lat, sw_lng)?;
        let ne = MapPoint::parse_lat_lng_deg(ne_lat, ne_lng)?;
        let bbox = Self::new(sw, ne);
        if !bbox.is_valid() {
            return Err(ParseError::Format(s.to_string()));
        }
        Ok(bbox)
    }

    pub fn to_viewbox_string(&self) -> String {
        format!(
            "{},{},{},{}",
            self.sw.lng(),
            self.sw.lat(),
            self.ne.lng(),
            self.ne.lat()
        )
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
