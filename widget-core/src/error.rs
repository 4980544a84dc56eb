use thiserror::Error;

/// Failures a widget interaction can end in.
///
/// The `Display` text is what the error region shows, so the messages are
/// written for the user rather than for a log.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The search box was blank after trimming.
    #[error("Please enter a city name.")]
    EmptyInput,

    /// Geocoding returned a non-success status or no candidates.
    #[error("City not found")]
    NotFound,

    /// The forecast endpoint returned a non-success status.
    #[error("Weather fetch failed")]
    Fetch,

    /// The device declined or failed to provide a position.
    #[error("Geolocation error: {0}")]
    Geolocation(String),

    /// The request never produced a response, or its body could not be read.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body could not be interpreted.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl WidgetError {
    pub fn geolocation<S: Into<String>>(message: S) -> Self {
        Self::Geolocation(message.into())
    }

    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_are_verbatim() {
        assert_eq!(WidgetError::EmptyInput.to_string(), "Please enter a city name.");
        assert_eq!(WidgetError::NotFound.to_string(), "City not found");
        assert_eq!(WidgetError::Fetch.to_string(), "Weather fetch failed");
    }

    #[test]
    fn geolocation_error_carries_reason() {
        let err = WidgetError::geolocation("User denied Geolocation");
        assert_eq!(err.to_string(), "Geolocation error: User denied Geolocation");
    }
}
