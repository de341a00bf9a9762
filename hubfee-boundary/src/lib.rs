use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult {
    /// Estimated road distance in km, `null` if the district
    /// could not be located.
    #[serde(serialize_with = "serialize_km")]
    pub km: Option<f64>,
    pub fee: u32,
}

// Whole kilometers are written without a fraction, e.g. `17` instead of `17.0`.
fn serialize_km<S>(km: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match km {
        Some(km) if km.fract() == 0.0 && km.abs() < 1e15 => {
            serializer.serialize_some(&(*km as i64))
        }
        Some(km) => serializer.serialize_some(km),
        None => serializer.serialize_none(),
    }
}

/// Delivery estimates keyed by district name.
///
/// Serialized as a JSON object that keeps the order of the districts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Report(IndexMap<String, DistanceResult>);

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the result of a district.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, district: String, result: DistanceResult) {
        self.0.insert(district, result);
    }

    pub fn get(&self, district: &str) -> Option<&DistanceResult> {
        self.0.get(district)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
