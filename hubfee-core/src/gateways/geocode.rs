use hubfee_entities::geo::MapPoint;

pub trait GeoCodingGateway {
    /// Resolve a free-text query to the location of the best match.
    ///
    /// Any kind of failure results in `None`.
    fn resolve_query(&self, query: &str) -> Option<MapPoint>;
}
