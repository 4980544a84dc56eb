use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    WidgetError,
    model::{Coordinates, Place},
};

use super::{Geocoder, truncate_body};

/// Open-Meteo geocoding search, always asking for the single best match.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    endpoint: String,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn with_client(http: Client, endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_string(), http }
    }
}

#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    #[serde(default)]
    results: Option<Vec<GeoCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeoCandidate {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
}

impl From<GeoCandidate> for Place {
    fn from(c: GeoCandidate) -> Self {
        let display_name = match c.country {
            Some(country) if !country.is_empty() => format!("{}, {}", c.name, country),
            _ => c.name,
        };
        Place::new(Coordinates::new(c.latitude, c.longitude), display_name)
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, city: &str) -> Result<Place, WidgetError> {
        let city = city.trim();
        debug!(city, "geocoding");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            debug!(%status, "geocoding request rejected");
            return Err(WidgetError::NotFound);
        }

        let body = res.text().await?;
        let parsed: GeoSearchResponse = serde_json::from_str(&body).map_err(|e| {
            WidgetError::decode(format!("geocoding JSON ({e}): {}", truncate_body(&body)))
        })?;

        let candidate = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(WidgetError::NotFound)?;

        let place = Place::from(candidate);
        info!(
            place = %place.display_name,
            latitude = place.coordinates.latitude,
            longitude = place.coordinates.longitude,
            "resolved city"
        );
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn geocoder_for(server: &MockServer) -> OpenMeteoGeocoder {
        OpenMeteoGeocoder::with_client(Client::new(), &format!("{}/v1/search", server.uri()))
    }

    #[tokio::test]
    async fn resolves_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Paris"))
            .and(query_param("count", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "latitude": 48.85, "longitude": 2.35, "name": "Paris", "country": "France" },
                    { "latitude": 33.66, "longitude": -95.55, "name": "Paris", "country": "United States" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let place = geocoder_for(&server).resolve("  Paris ").await.expect("resolve");

        assert_eq!(place.display_name, "Paris, France");
        assert_eq!(place.coordinates, Coordinates::new(48.85, 2.35));
    }

    #[tokio::test]
    async fn missing_results_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "generationtime_ms": 0.5 })),
            )
            .mount(&server)
            .await;

        let err = geocoder_for(&server).resolve("Nowhere").await.unwrap_err();
        assert!(matches!(err, WidgetError::NotFound));
        assert_eq!(err.to_string(), "City not found");
    }

    #[tokio::test]
    async fn empty_results_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
            .mount(&server)
            .await;

        let err = geocoder_for(&server).resolve("Nowhere").await.unwrap_err();
        assert!(matches!(err, WidgetError::NotFound));
    }

    #[tokio::test]
    async fn error_status_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = geocoder_for(&server).resolve("Paris").await.unwrap_err();
        assert!(matches!(err, WidgetError::NotFound));
    }

    #[tokio::test]
    async fn candidate_without_country_uses_bare_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [ { "latitude": 0.0, "longitude": 0.0, "name": "Null Island" } ]
            })))
            .mount(&server)
            .await;

        let place = geocoder_for(&server).resolve("Null Island").await.expect("resolve");
        assert_eq!(place.display_name, "Null Island");
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = geocoder_for(&server).resolve("Paris").await.unwrap_err();
        assert!(matches!(err, WidgetError::Decode(_)));
    }
}
