//! Reqwest-backed geocoding tier (Nominatim search API).
//!
//! This adapter owns transport details only: query parameters, timeout and
//! HTTP error mapping, and JSON decoding into an address record. Throttling
//! is applied by the resolver before `lookup` is called.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{AddressSource, SourceTier};
use crate::{
    address::{synthesize_street, synthesize_zip, AddressQuery, AddressRecord},
    error::SourceError,
    name_generator::NameGenerator,
    rng::IdentityRng,
    types::COUNTRY,
};

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "US-Fake-Data-Generator/1.0";
pub const DEFAULT_CANDIDATE_LIMIT: usize = 5;

/// Outbound identity and result-size settings for geocoding requests.
pub struct NominatimIdentity {
    pub user_agent: String,
    pub candidate_limit: usize,
}

impl Default for NominatimIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

pub struct NominatimSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
    candidate_limit: usize,
}

impl NominatimSource {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, NominatimIdentity::default())
    }

    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: NominatimIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            candidate_limit: identity.candidate_limit.max(1),
        })
    }

    fn query_params(&self, query: &AddressQuery) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_owned()),
            ("country", COUNTRY.to_owned()),
            ("state", query.state.clone()),
            ("limit", self.candidate_limit.to_string()),
            ("addressdetails", "1".to_owned()),
            ("dedupe", "1".to_owned()),
        ]
    }
}

#[async_trait]
impl AddressSource for NominatimSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Geocoding
    }

    fn requires_throttle(&self) -> bool {
        true
    }

    async fn lookup(
        &self,
        query: &AddressQuery,
        rng: &mut IdentityRng,
    ) -> Result<Option<AddressRecord>, SourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status: status.as_u16() });
        }
        let body = response.bytes().await.map_err(map_transport_error)?;

        let candidates = parse_candidates(body.as_ref())?;
        Ok(choose_address(candidates, query, self.candidate_limit, rng))
    }
}

// ── Response decoding ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CandidateDto {
    #[serde(default)]
    address: Option<AddressDetailsDto>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressDetailsDto {
    road: Option<String>,
    pedestrian: Option<String>,
    footway: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    postcode: Option<String>,
}

impl AddressDetailsDto {
    fn street(&self) -> Option<&str> {
        first_present([&self.road, &self.pedestrian, &self.footway])
    }

    fn city(&self) -> Option<&str> {
        first_present([&self.city, &self.town, &self.village, &self.county])
    }

    fn postcode(&self) -> Option<&str> {
        first_present([&self.postcode])
    }
}

fn first_present<const N: usize>(fields: [&Option<String>; N]) -> Option<&str> {
    fields
        .into_iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .find(|value| !value.is_empty())
}

fn parse_candidates(body: &[u8]) -> Result<Vec<CandidateDto>, SourceError> {
    serde_json::from_slice(body)
        .map_err(|error| SourceError::decode(format!("invalid geocoding JSON payload: {error}")))
}

/// Pick one of the first `limit` candidates uniformly, then fill gaps.
///
/// Draw order: candidate index, then street, city, ZIP fallbacks as needed.
/// The record's state is always the requested code, never the response's.
fn choose_address(
    candidates: Vec<CandidateDto>,
    query: &AddressQuery,
    limit: usize,
    rng: &mut IdentityRng,
) -> Option<AddressRecord> {
    if candidates.is_empty() {
        return None;
    }
    let top = &candidates[..candidates.len().min(limit)];
    let details = rng.pick(top).address.as_ref()?;

    let street = match details.street() {
        Some(street) => street.to_owned(),
        None => synthesize_street(rng),
    };
    let city = match (details.city(), &query.city) {
        (Some(found), _) => found.to_owned(),
        (None, Some(requested)) => requested.clone(),
        (None, None) => NameGenerator::generate_city_name(rng),
    };
    let zip_code = match details.postcode() {
        Some(zip) => zip.to_owned(),
        None => synthesize_zip(rng),
    };
    Some(AddressRecord::new(street, city, &query.state, zip_code))
}

fn map_transport_error(error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::timeout(error.to_string())
    } else {
        SourceError::transport(error.to_string())
    }
}


#[cfg(test)]
mod loopback_tests {
    //! `lookup` against a one-shot HTTP server on 127.0.0.1.

    use super::*;
    use crate::rng::StreamSlot;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response and hand back the raw request head.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });
        let endpoint = Url::parse(&format!("http://{addr}/search")).expect("endpoint");
        (endpoint, handle)
    }

    fn california() -> AddressQuery {
        AddressQuery {
            state: "CA".into(),
            city: None,
        }
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let (endpoint, server) = serve_once("503 Service Unavailable", "").await;
        let source = NominatimSource::new(endpoint, Duration::from_secs(5)).expect("client");
        let mut rng = IdentityRng::new(1, StreamSlot::Address);

        let result = source.lookup(&california(), &mut rng).await;
        assert_eq!(result, Err(SourceError::Status { status: 503 }));
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn request_carries_parameters_and_user_agent() {
        let body = r#"[{ "address": { "road": "R", "city": "C", "postcode": "90001" } }]"#;
        let (endpoint, server) = serve_once("200 OK", body).await;
        let source = NominatimSource::new(endpoint, Duration::from_secs(5)).expect("client");
        let mut rng = IdentityRng::new(1, StreamSlot::Address);

        let record = source
            .lookup(&california(), &mut rng)
            .await
            .expect("lookup")
            .expect("address");
        assert_eq!(record.street, "R");
        assert_eq!(record.city, "C");
        assert_eq!(record.state, "CA");
        assert_eq!(record.zip_code, "90001");

        let request = server.await.expect("server task");
        let request_line = request.lines().next().expect("request line");
        assert_eq!(
            request_line,
            "GET /search?format=json&country=United+States&state=CA&limit=5&addressdetails=1&dedupe=1 HTTP/1.1"
        );
        let lowered = request.to_ascii_lowercase();
        assert!(
            lowered.contains("user-agent: us-fake-data-generator/1.0"),
            "missing user agent in {request}"
        );
    }

    #[tokio::test]
    async fn empty_candidate_list_is_no_result() {
        let (endpoint, server) = serve_once("200 OK", "[]").await;
        let source = NominatimSource::new(endpoint, Duration::from_secs(5)).expect("client");
        let mut rng = IdentityRng::new(1, StreamSlot::Address);

        assert_eq!(source.lookup(&california(), &mut rng).await, Ok(None));
        server.await.expect("server task");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (endpoint, server) = serve_once("200 OK", "not json").await;
        let source = NominatimSource::new(endpoint, Duration::from_secs(5)).expect("client");
        let mut rng = IdentityRng::new(1, StreamSlot::Address);

        let result = source.lookup(&california(), &mut rng).await;
        assert!(matches!(result, Err(SourceError::Decode { .. })), "{result:?}");
        server.await.expect("server task");
    }
}
