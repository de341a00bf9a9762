use super::prelude::*;
use std::{cell::RefCell, collections::HashMap};

/// Geocoder that records all queries and only knows the
/// results that have been registered in advance.
#[derive(Default)]
pub struct MockGeoCoder {
    pub results: RefCell<HashMap<String, MapPoint>>,
    pub queries: RefCell<Vec<String>>,
}

impl GeoCodingGateway for MockGeoCoder {
    fn resolve_query(&self, query: &str) -> Option<MapPoint> {
        self.queries.borrow_mut().push(query.to_string());
        self.results.borrow().get(query).copied()
    }
}

#[derive(Default)]
pub struct CountingRateLimiter {
    pub pauses: usize,
}

impl RateLimiter for CountingRateLimiter {
    fn pause(&mut self) {
        self.pauses += 1;
    }
}
