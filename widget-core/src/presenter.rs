//! Turns fetched weather into display regions.
//!
//! The presenter formats values and decides which regions are visible; the
//! [`RenderSurface`] only stores what it is given. Every call replaces a
//! region wholesale, so overlapping renders never leave a half-written region.

use chrono::Timelike;
use serde::Serialize;
use std::fmt;

use crate::{
    codes::{describe, icon_for},
    model::{CurrentConditions, ForecastPoint, Place},
};

/// Cards in the forecast strip.
pub const FORECAST_SLOTS: usize = 6;

/// The data source has no humidity reading.
pub const HUMIDITY_UNAVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    pub location: String,
    pub temperature: String,
    pub description: String,
    pub wind_speed: String,
    pub humidity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub hour: String,
    pub icon: String,
    pub temperature: String,
}

/// Output regions of the widget.
pub trait RenderSurface {
    fn show_current(&mut self, view: CurrentView);
    fn hide_current(&mut self);
    fn show_forecast(&mut self, cards: Vec<ForecastCard>);
    fn hide_forecast(&mut self);
    fn show_error(&mut self, message: String);
    fn hide_error(&mut self);
}

pub fn render_current<S>(surface: &mut S, place: &Place, current: &CurrentConditions)
where
    S: RenderSurface + ?Sized,
{
    surface.hide_error();
    surface.show_current(CurrentView {
        location: place.display_name.clone(),
        temperature: celsius(current.temperature_celsius),
        description: describe(current.weather_code).to_string(),
        wind_speed: format!("{:.1}", current.wind_speed_kmh),
        humidity: HUMIDITY_UNAVAILABLE.to_string(),
    });
}

/// Renders entries 1..=6. Entry 0 is the current hour and is skipped.
pub fn render_forecast<S>(surface: &mut S, points: &[ForecastPoint])
where
    S: RenderSurface + ?Sized,
{
    let cards = points
        .iter()
        .skip(1)
        .take(FORECAST_SLOTS)
        .map(|p| ForecastCard {
            hour: hour_label(p.timestamp.hour()),
            icon: icon_for(p.weather_code).to_string(),
            temperature: celsius(p.temperature_celsius),
        })
        .collect();

    surface.show_forecast(cards);
}

pub fn render_error<S>(surface: &mut S, message: &str)
where
    S: RenderSurface + ?Sized,
{
    surface.hide_current();
    surface.hide_forecast();
    surface.show_error(message.to_string());
}

/// 12-hour clock label, e.g. `12AM`, `1PM`.
pub fn hour_label(hour: u32) -> String {
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{h12}{suffix}")
}

fn celsius(value: f64) -> String {
    format!("{value:.1}\u{00b0}C")
}

/// In-memory page. A region is visible when it holds content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub current: Option<CurrentView>,
    pub forecast: Option<Vec<ForecastCard>>,
    pub error: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_result_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_error_visible(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_blank(&self) -> bool {
        self.current.is_none() && self.forecast.is_none() && self.error.is_none()
    }
}

impl RenderSurface for Page {
    fn show_current(&mut self, view: CurrentView) {
        self.current = Some(view);
    }

    fn hide_current(&mut self) {
        self.current = None;
    }

    fn show_forecast(&mut self, cards: Vec<ForecastCard>) {
        self.forecast = Some(cards);
    }

    fn hide_forecast(&mut self) {
        self.forecast = None;
    }

    fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn hide_error(&mut self) {
        self.error = None;
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.error {
            writeln!(f, "Error: {msg}")?;
        }

        if let Some(cur) = &self.current {
            writeln!(f, "{}", cur.location)?;
            writeln!(f, "  {}  {}", cur.temperature, cur.description)?;
            writeln!(f, "  Wind: {} km/h   Humidity: {}", cur.wind_speed, cur.humidity)?;
        }

        if let Some(cards) = &self.forecast {
            writeln!(f)?;
            for card in cards {
                writeln!(f, "  {:>4}  {}  {}", card.hour, card.icon, card.temperature)?;
            }
        }

        Ok(())
    }
}
