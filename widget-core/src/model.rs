use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A resolved location, ready to be handed to a forecast source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub coordinates: Coordinates,
    pub display_name: String,
}

impl Place {
    pub fn new(coordinates: Coordinates, display_name: impl Into<String>) -> Self {
        Self { coordinates, display_name: display_name.into() }
    }

    /// Build a place from a raw device position. There is no reverse
    /// geocoding, so the label is the rounded coordinates.
    pub fn from_position(coordinates: Coordinates) -> Self {
        let display_name =
            format!("Lat {:.2}, Lon {:.2}", coordinates.latitude, coordinates.longitude);
        Self { coordinates, display_name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_celsius: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
}

/// One hourly entry. The timestamp is wall-clock time at the location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub temperature_celsius: f64,
    pub weather_code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentConditions,
    /// Time-ascending, as returned by the service.
    pub hourly: Vec<ForecastPoint>,
}
