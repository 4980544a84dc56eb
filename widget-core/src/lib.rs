//! Core library for the `weather` widget.
//!
//! This crate defines:
//! - Geocoding and forecast lookups against Open-Meteo
//! - Weather code tables
//! - The presenter and its render surface abstraction
//! - The controller that drives search and load triggers
//! - Configuration (endpoints, saved position)
//!
//! It is used by `weather-widget-cli`, but any front end that implements
//! [`RenderSurface`] can drive it.

pub mod codes;
pub mod config;
pub mod controller;
pub mod error;
pub mod locate;
pub mod model;
pub mod presenter;
pub mod provider;

pub use config::{Config, Endpoints};
pub use controller::{Controller, UiState};
pub use error::WidgetError;
pub use locate::{ConfiguredPosition, FixedPosition, Geolocator};
pub use model::{Coordinates, CurrentConditions, Forecast, ForecastPoint, Place};
pub use presenter::{Page, RenderSurface};
pub use provider::{ForecastSource, Geocoder, providers_from_config};
