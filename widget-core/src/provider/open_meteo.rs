use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    WidgetError,
    model::{Coordinates, CurrentConditions, Forecast, ForecastPoint},
};

use super::{ForecastSource, truncate_body};

/// Open-Meteo returns local times without offset or seconds.
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Open-Meteo forecast endpoint: current weather plus today's hourly series.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    endpoint: String,
    http: Client,
}

impl OpenMeteoForecast {
    pub fn with_client(http: Client, endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_string(), http }
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    /// Missing samples come back as `null`.
    temperature_2m: Vec<Option<f64>>,
    weathercode: Vec<Option<i32>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
    hourly: OmHourly,
}

impl TryFrom<OmForecastResponse> for Forecast {
    type Error = WidgetError;

    fn try_from(parsed: OmForecastResponse) -> Result<Self, Self::Error> {
        let current = CurrentConditions {
            temperature_celsius: parsed.current_weather.temperature,
            wind_speed_kmh: parsed.current_weather.windspeed,
            weather_code: parsed.current_weather.weathercode,
        };

        let OmHourly { time, temperature_2m, weathercode } = parsed.hourly;

        let hourly = time
            .iter()
            .zip(temperature_2m)
            .zip(weathercode)
            .filter_map(|((ts, temp), code)| Some((ts, temp?, code?)))
            .map(|(ts, temperature_celsius, weather_code)| {
                let timestamp = NaiveDateTime::parse_from_str(ts, HOURLY_TIME_FORMAT)
                    .map_err(|e| WidgetError::decode(format!("hourly time {ts:?}: {e}")))?;
                Ok(ForecastPoint { timestamp, temperature_celsius, weather_code })
            })
            .collect::<Result<Vec<_>, WidgetError>>()?;

        Ok(Forecast { current, hourly })
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    async fn fetch(&self, at: Coordinates) -> Result<Forecast, WidgetError> {
        debug!(latitude = at.latitude, longitude = at.longitude, "fetching forecast");

        let latitude = at.latitude.to_string();
        let longitude = at.longitude.to_string();

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("hourly", "temperature_2m,weathercode"),
                ("current_weather", "true"),
                ("forecast_days", "1"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            debug!(%status, "forecast request rejected");
            return Err(WidgetError::Fetch);
        }

        let body = res.text().await?;
        let parsed: OmForecastResponse = serde_json::from_str(&body).map_err(|e| {
            WidgetError::decode(format!("forecast JSON ({e}): {}", truncate_body(&body)))
        })?;

        let forecast = Forecast::try_from(parsed)?;
        debug!(hours = forecast.hourly.len(), "forecast received");
        Ok(forecast)
    }
}
