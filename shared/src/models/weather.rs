//! Weather animation shown behind the city detail panel

use serde::{Deserialize, Serialize};

/// Directory the animation files are served from, relative to the page
pub const ANIMATIONS_DIR: &str = "animations";

/// Precipitation (mm) from which rain or snow is shown
pub const HEAVY_PRECIPITATION_MM: f64 = 10.0;

/// Wind strength (km/h) above which wind is shown
pub const WINDY_KMH: f64 = 5.0;

/// Background animation for a city's current weather
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherAnimation {
    Rain,
    Snow,
    Wind,
    Sun,
}

impl WeatherAnimation {
    pub fn name(&self) -> &'static str {
        match self {
            WeatherAnimation::Rain => "rain",
            WeatherAnimation::Snow => "snow",
            WeatherAnimation::Wind => "wind",
            WeatherAnimation::Sun => "sun",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            WeatherAnimation::Rain => "rain.gif",
            WeatherAnimation::Snow => "snow.gif",
            WeatherAnimation::Wind => "wind.gif",
            WeatherAnimation::Sun => "sun.gif",
        }
    }

    /// Path of the animation file under `dir`
    pub fn asset_path(&self, dir: &str) -> String {
        format!("{}/{}", dir.trim_end_matches('/'), self.file_name())
    }
}

impl std::fmt::Display for WeatherAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the animation for a set of readings.
///
/// Rules are tried in order and the first match wins. They overlap and do not
/// cover every input: negative precipitation with calm wind, or any NaN
/// reading, selects nothing.
pub fn select_animation(
    mm_zrazky: f64,
    teplota: f64,
    sila_vetra: f64,
) -> Option<WeatherAnimation> {
    if mm_zrazky >= HEAVY_PRECIPITATION_MM && teplota > 0.0 {
        Some(WeatherAnimation::Rain)
    } else if mm_zrazky >= HEAVY_PRECIPITATION_MM && teplota <= 0.0 {
        Some(WeatherAnimation::Snow)
    } else if mm_zrazky <= HEAVY_PRECIPITATION_MM && sila_vetra > WINDY_KMH {
        Some(WeatherAnimation::Wind)
    } else if mm_zrazky >= 0.0 && sila_vetra <= WINDY_KMH {
        Some(WeatherAnimation::Sun)
    } else {
        None
    }
}
