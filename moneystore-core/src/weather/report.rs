//! Weather report accumulated from phone messages

use core::fmt::Write;

use heapless::String;

use crate::config::TemperatureUnit;

/// Message key carrying the temperature (integer degrees)
pub const KEY_TEMPERATURE: u32 = 0;

/// Message key carrying the conditions text
pub const KEY_CONDITIONS: u32 = 1;

/// Maximum stored conditions length in bytes
pub const MAX_CONDITIONS_LEN: usize = 31;

/// Maximum weather line length in bytes
pub const WEATHER_LINE_LEN: usize = 31;

/// Maximum length of the temperature part (`"-12C"`) in bytes
pub const TEMPERATURE_TEXT_LEN: usize = 7;

/// Minutes between weather requests to the phone
pub const WEATHER_REFRESH_MINUTES: u8 = 30;

/// Check if a weather request is due at this minute of the hour
pub const fn weather_refresh_due(minute: u8) -> bool {
    minute % WEATHER_REFRESH_MINUTES == 0
}

/// Weather message errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherError {
    /// Message key not recognized
    UnknownKey(u32),
    /// Key known but value has the wrong type
    WrongType(u32),
}

/// One keyed value of a weather message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherField<'a> {
    /// Temperature in whole degrees, already in the display unit
    Temperature(i32),
    /// Short conditions text ("Clouds", "Rain", ...)
    Conditions(&'a str),
}

impl<'a> WeatherField<'a> {
    /// Build a field from an integer value under `key`
    pub fn from_int(key: u32, value: i32) -> Result<Self, WeatherError> {
        match key {
            KEY_TEMPERATURE => Ok(WeatherField::Temperature(value)),
            KEY_CONDITIONS => Err(WeatherError::WrongType(key)),
            _ => Err(WeatherError::UnknownKey(key)),
        }
    }

    /// Build a field from a text value under `key`
    pub fn from_text(key: u32, value: &'a str) -> Result<Self, WeatherError> {
        match key {
            KEY_CONDITIONS => Ok(WeatherField::Conditions(value)),
            KEY_TEMPERATURE => Err(WeatherError::WrongType(key)),
            _ => Err(WeatherError::UnknownKey(key)),
        }
    }

    /// Message key of this field
    pub const fn key(&self) -> u32 {
        match self {
            WeatherField::Temperature(_) => KEY_TEMPERATURE,
            WeatherField::Conditions(_) => KEY_CONDITIONS,
        }
    }
}

/// Latest known weather
///
/// Fields keep their last received value; a message carrying only one of
/// them leaves the other as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherReport {
    temperature: Option<i32>,
    conditions: String<MAX_CONDITIONS_LEN>,
}

impl WeatherReport {
    /// Create an empty report
    pub const fn new() -> Self {
        Self {
            temperature: None,
            conditions: String::new(),
        }
    }

    /// Record one received field
    pub fn apply(&mut self, field: WeatherField<'_>) {
        match field {
            WeatherField::Temperature(value) => self.temperature = Some(value),
            WeatherField::Conditions(text) => {
                self.conditions.clear();
                push_truncated(&mut self.conditions, text);
            }
        }
    }

    /// Last received temperature
    pub fn temperature(&self) -> Option<i32> {
        self.temperature
    }

    /// Last received conditions text
    pub fn conditions(&self) -> &str {
        &self.conditions
    }

    /// Check if nothing has been received yet
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.conditions.is_empty()
    }

    /// Text for the weather layer, e.g. `"12C, Clouds"`
    ///
    /// Parts not received yet render empty. The temperature part is cut at
    /// [`TEMPERATURE_TEXT_LEN`] bytes and the whole line at
    /// [`WEATHER_LINE_LEN`] bytes.
    pub fn line(&self, unit: TemperatureUnit) -> String<WEATHER_LINE_LEN> {
        let mut temperature: String<TEMPERATURE_TEXT_LEN> = String::new();
        if let Some(value) = self.temperature {
            // i32 plus suffix always fits in 12 bytes
            let mut full: String<12> = String::new();
            let _ = write!(full, "{}{}", value, unit.suffix());
            push_truncated(&mut temperature, &full);
        }

        let mut line = String::new();
        push_truncated(&mut line, &temperature);
        push_truncated(&mut line, ", ");
        push_truncated(&mut line, &self.conditions);
        line
    }
}

/// Append as much of `text` as fits, never splitting a character
fn push_truncated<const N: usize>(out: &mut String<N>, text: &str) {
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
}
