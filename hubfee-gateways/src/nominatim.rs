use anyhow::{anyhow, Result};
use hubfee_core::{
    entities::{MapBbox, MapPoint},
    gateways::geocode::GeoCodingGateway,
};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "DistrictFlowers-DeliveryCalc/1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A geocoding gateway based on the search API of Nominatim (OpenStreetMap).
///
/// Every query is restricted to `viewbox` and yields at most one match.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::blocking::Client,
    base_url: String,
    viewbox: MapBbox,
}

impl Nominatim {
    pub fn try_new(
        base_url: impl Into<String>,
        user_agent: &str,
        viewbox: MapBbox,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            viewbox,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    fn search(&self, query: &str) -> Result<MapPoint> {
        let viewbox = self.viewbox.to_viewbox_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&search_params(query, &viewbox))
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Unexpected response status {status}"));
        }
        let body = response.text()?;
        parse_search_response(&body, &self.viewbox)
    }
}

fn search_params<'a>(query: &'a str, viewbox: &'a str) -> [(&'static str, &'a str); 5] {
    [
        ("format", "json"),
        ("q", query),
        ("limit", "1"),
        ("viewbox", viewbox),
        ("bounded", "1"),
    ]
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn parse_search_response(body: &str, viewbox: &MapBbox) -> Result<MapPoint> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    let Place { lat, lon } = places
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No match"))?;
    let pos = MapPoint::parse_lat_lng_deg(&lat, &lon)?;
    // The search is bounded, so anything else is a broken response.
    if !viewbox.contains_point(pos) {
        return Err(anyhow!("Match {pos} is outside of the viewbox {viewbox}"));
    }
    Ok(pos)
}

impl GeoCodingGateway for Nominatim {
    fn resolve_query(&self, query: &str) -> Option<MapPoint> {
        match self.search(query) {
            Ok(pos) => {
                log::debug!("Resolved location of '{query}': {pos}");
                Some(pos)
            }
            Err(err) => {
                log::warn!("Failed to resolve location of '{query}': {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    fn riyadh() -> MapBbox {
        MapBbox::from_viewbox_str("46.4,24.4,47.2,25.4").unwrap()
    }

    fn parse(body: &str) -> Result<MapPoint> {
        parse_search_response(body, &riyadh())
    }

    /// Answer a single HTTP request with `status` and `body`
    /// and return the received request head.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line.is_empty() || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            head
        });
        (base_url, handle)
    }

    fn gateway(base_url: &str) -> Nominatim {
        Nominatim::try_new(
            base_url,
            DEFAULT_USER_AGENT,
            riyadh(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn parse_first_match() {
        let body = r#"[
          {
            "place_id": 1234,
            "lat": "24.6907",
            "lon": "46.6855",
            "display_name": "Al Olaya, Riyadh, Saudi Arabia"
          },
          {
            "lat": "1.0",
            "lon": "2.0"
          }
        ]"#;
        let pos = parse(body).unwrap();
        assert_eq!((24.6907, 46.6855), pos.to_lat_lng_deg());
    }

    #[test]
    fn parse_empty_result() {
        assert!(parse("[]").is_err());
    }

    #[test]
    fn parse_malformed_payloads() {
        assert!(parse(r#"{"error":"Unable to geocode"}"#).is_err());
        assert!(parse(r#"[{"lat":"north","lon":"46.6"}]"#).is_err());
        assert!(parse(r#"[{"lat":"24.6"}]"#).is_err());
        assert!(parse(r#"[{"lat":"124.6","lon":"46.6"}]"#).is_err());
        assert!(parse("<html></html>").is_err());
    }

    #[test]
    fn reject_match_outside_of_viewbox() {
        assert!(parse(r#"[{"lat":"21.4858","lon":"39.1925"}]"#).is_err());
        assert!(parse(r#"[{"lat":"24.4","lon":"46.4"}]"#).is_ok());
    }

    #[test]
    fn query_parameters() {
        let viewbox = riyadh().to_viewbox_string();
        assert_eq!(
            [
                ("format", "json"),
                ("q", "KAFD Riyadh Saudi Arabia"),
                ("limit", "1"),
                ("viewbox", "46.4,24.4,47.2,25.4"),
                ("bounded", "1"),
            ],
            search_params("KAFD Riyadh Saudi Arabia", &viewbox)
        );
    }

    #[test]
    fn search_url_without_trailing_slash() {
        let gw = Nominatim::try_new(
            "http://localhost:8080/",
            DEFAULT_USER_AGENT,
            riyadh(),
            DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert_eq!("http://localhost:8080/search", gw.search_url());
    }

    #[test]
    fn resolve_first_match() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"place_id":1,"lat":"24.6907","lon":"46.6855"}]"#,
        );
        let pos = gateway(&base_url).resolve_query("Al Olaya Riyadh Saudi Arabia");
        assert_eq!(
            Some((24.6907, 46.6855)),
            pos.map(MapPoint::to_lat_lng_deg)
        );

        let head = server.join().unwrap();
        let mut lines = head.lines();
        assert_eq!(
            Some(
                "GET /search?format=json&q=Al+Olaya+Riyadh+Saudi+Arabia&limit=1\
                 &viewbox=46.4%2C24.4%2C47.2%2C25.4&bounded=1 HTTP/1.1"
            ),
            lines.next()
        );
        let user_agent = lines.find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("user-agent")
                .then(|| value.trim().to_string())
        });
        assert_eq!(Some(DEFAULT_USER_AGENT.to_string()), user_agent);
    }

    #[test]
    fn unsuccessful_response_is_no_match() {
        let (base_url, server) = serve_once("503 Service Unavailable", "");
        assert_eq!(
            None,
            gateway(&base_url).resolve_query("Al Olaya Riyadh Saudi Arabia")
        );
        server.join().unwrap();
    }

    #[test]
    fn empty_response_is_no_match() {
        let (base_url, server) = serve_once("200 OK", "[]");
        assert_eq!(
            None,
            gateway(&base_url).resolve_query("Nowhere Riyadh Saudi Arabia")
        );
        server.join().unwrap();
    }

    #[test]
    fn unreachable_service_is_no_match() {
        // Nothing listens on port 9 (discard) of the loopback interface.
        let gw = Nominatim::try_new(
            "http://127.0.0.1:9",
            DEFAULT_USER_AGENT,
            riyadh(),
            Duration::from_secs(2),
        )
        .unwrap();
        assert_eq!(None, gw.resolve_query("Al Olaya Riyadh Saudi Arabia"));
    }
}
