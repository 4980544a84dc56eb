use crate::{
    Config, WidgetError,
    model::{Coordinates, Forecast, Place},
    provider::{geocoding::OpenMeteoGeocoder, open_meteo::OpenMeteoForecast},
};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, sync::Arc};

pub mod geocoding;
pub mod open_meteo;

const USER_AGENT: &str = concat!("weather-widget/", env!("CARGO_PKG_VERSION"));

/// Resolves a free-text place name to a single best match.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<Place, WidgetError>;
}

/// Fetches current conditions and a one-day hourly series.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, at: Coordinates) -> Result<Forecast, WidgetError>;
}

/// Shared HTTP client for both Open-Meteo endpoints. No explicit timeout:
/// requests rely on the transport's defaults.
pub fn http_client() -> Result<Client, WidgetError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Construct the Open-Meteo geocoder and forecast source from config.
pub fn providers_from_config(
    config: &Config,
) -> Result<(Arc<dyn Geocoder>, Arc<dyn ForecastSource>), WidgetError> {
    let http = http_client()?;

    let geocoder = OpenMeteoGeocoder::with_client(http.clone(), &config.endpoints.geocoding);
    let forecasts = OpenMeteoForecast::with_client(http, &config.endpoints.forecast);

    Ok((Arc::new(geocoder), Arc::new(forecasts)))
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
