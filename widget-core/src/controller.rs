//! Wires the search and load triggers to the geocoder, forecast source and
//! presenter.
//!
//! Triggers take `&self` and may overlap. There is no request token: whichever
//! render runs last owns the display.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    WidgetError,
    locate::Geolocator,
    model::{Forecast, Place},
    presenter::{RenderSurface, render_current, render_error, render_forecast},
    provider::{ForecastSource, Geocoder},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UiState {
    Idle,
    Loading,
    Result,
    Error,
}

#[derive(Debug)]
struct Screen<S> {
    surface: S,
    state: UiState,
}

#[derive(Debug)]
pub struct Controller<S> {
    geocoder: Arc<dyn Geocoder>,
    forecasts: Arc<dyn ForecastSource>,
    screen: Mutex<Screen<S>>,
}

impl<S: RenderSurface> Controller<S> {
    pub fn new(geocoder: Arc<dyn Geocoder>, forecasts: Arc<dyn ForecastSource>, surface: S) -> Self {
        Self {
            geocoder,
            forecasts,
            screen: Mutex::new(Screen { surface, state: UiState::Idle }),
        }
    }

    pub fn state(&self) -> UiState {
        self.screen.lock().state
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.screen.lock().surface)
    }

    pub fn into_surface(self) -> S {
        self.screen.into_inner().surface
    }

    /// Search button. Returns the state this trigger ended in, which may
    /// already have been overwritten by an overlapping trigger.
    pub async fn search(&self, input: &str) -> UiState {
        let city = input.trim();
        if city.is_empty() {
            return self.fail(&WidgetError::EmptyInput);
        }

        self.screen.lock().state = UiState::Loading;

        match self.lookup(city).await {
            Ok((place, forecast)) => self.show(&place, &forecast),
            Err(e) => {
                debug!(city, error = %e, "search failed");
                self.fail(&e)
            }
        }
    }

    /// Page-load trigger. Every failure here is logged and kept off screen,
    /// and the state is only touched once a forecast is ready to render.
    pub async fn on_load(&self, locator: &dyn Geolocator) {
        if !locator.is_available() {
            debug!("geolocation unavailable, skipping automatic lookup");
            return;
        }

        let coordinates = match locator.current_position().await {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "geolocation failed");
                return;
            }
        };

        let place = Place::from_position(coordinates);
        match self.forecasts.fetch(place.coordinates).await {
            Ok(forecast) => {
                self.show(&place, &forecast);
            }
            Err(e) => warn!(place = %place.display_name, error = %e, "automatic forecast failed"),
        }
    }

    async fn lookup(&self, city: &str) -> Result<(Place, Forecast), WidgetError> {
        let place = self.geocoder.resolve(city).await?;
        let forecast = self.forecasts.fetch(place.coordinates).await?;
        Ok((place, forecast))
    }

    fn show(&self, place: &Place, forecast: &Forecast) -> UiState {
        let mut screen = self.screen.lock();
        render_current(&mut screen.surface, place, &forecast.current);
        render_forecast(&mut screen.surface, &forecast.hourly);
        screen.state = UiState::Result;
        info!(place = %place.display_name, "rendered forecast");
        UiState::Result
    }

    fn fail(&self, err: &WidgetError) -> UiState {
        let mut screen = self.screen.lock();
        render_error(&mut screen.surface, &err.to_string());
        screen.state = UiState::Error;
        UiState::Error
    }
}
