//! Device position sources for the automatic load path.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, WidgetError, model::Coordinates};

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    /// Whether this source can provide positions at all. When false the load
    /// path does nothing, not even log an error.
    fn is_available(&self) -> bool;

    /// One-shot position request.
    async fn current_position(&self) -> Result<Coordinates, WidgetError>;
}

/// Always answers with the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl Geolocator for FixedPosition {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates, WidgetError> {
        Ok(self.0)
    }
}

/// Reports the position saved by `weather configure`.
///
/// The capability is always present; a missing position behaves like a user
/// declining the permission prompt.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredPosition {
    position: Option<Coordinates>,
}

impl ConfiguredPosition {
    pub fn from_config(config: &Config) -> Self {
        Self { position: config.position }
    }
}

#[async_trait]
impl Geolocator for ConfiguredPosition {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates, WidgetError> {
        self.position
            .ok_or_else(|| WidgetError::geolocation("no position configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configured_position_is_reported() {
        let mut cfg = Config::default();
        cfg.set_position(Coordinates::new(52.52, 13.41));

        let pos = ConfiguredPosition::from_config(&cfg).current_position().await.expect("position");
        assert_eq!(pos, Coordinates::new(52.52, 13.41));
    }

    #[tokio::test]
    async fn missing_position_is_geolocation_error() {
        let locator = ConfiguredPosition::from_config(&Config::default());

        assert!(locator.is_available());
        let err = locator.current_position().await.unwrap_err();
        assert!(matches!(err, WidgetError::Geolocation(_)));
    }
}
