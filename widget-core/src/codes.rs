//! WMO weather code tables used by Open-Meteo.

/// Shown for codes the table does not know.
pub const FALLBACK_DESCRIPTION: &str = "Weather";
pub const FALLBACK_ICON: &str = "\u{2753}";

/// Converts a weather code to a human-readable description.
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        80 => "Rain showers",
        95 => "Thunderstorm",
        _ => FALLBACK_DESCRIPTION,
    }
}

/// Converts a weather code to a short glyph for forecast cards.
pub fn icon_for(code: i32) -> &'static str {
    match code {
        0 => "\u{2600}\u{fe0f}",
        1 => "\u{1f324}",
        2 => "\u{26c5}\u{fe0f}",
        3 => "\u{2601}\u{fe0f}",
        45 | 48 => "\u{1f32b}\u{fe0f}",
        51 | 53 => "\u{1f326}\u{fe0f}",
        55 | 61 | 63 | 65 | 80 => "\u{1f327}\u{fe0f}",
        95 => "\u{26c8}\u{fe0f}",
        _ => FALLBACK_ICON,
    }
}
