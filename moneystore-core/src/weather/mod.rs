//! Weather updates from the phone
//!
//! The phone sends the current temperature and conditions as keyed values.
//! This module turns them into the single line shown on the weather layer.

pub mod report;

pub use report::{
    weather_refresh_due, WeatherError, WeatherField, WeatherReport, KEY_CONDITIONS,
    KEY_TEMPERATURE, MAX_CONDITIONS_LEN, TEMPERATURE_TEXT_LEN, WEATHER_LINE_LEN,
    WEATHER_REFRESH_MINUTES,
};
