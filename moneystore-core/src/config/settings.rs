//! Watch settings
//!
//! User preferences for the watch face. The record is serialized with
//! postcard when the `serde` feature is enabled; where the bytes are kept is
//! up to the platform.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest postcard encoding of [`WatchSettings`]
pub const MAX_SETTINGS_SIZE: usize = 8;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Suffix shown after a temperature reading
    pub const fn suffix(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }
}

/// Watch face settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchSettings {
    /// Show temperatures in Celsius (Fahrenheit otherwise)
    pub celsius: bool,
    /// Vibrate on Bluetooth disconnect
    pub bt_vibe: bool,
    /// Vibrate on the hour
    pub hour_vibe: bool,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            celsius: true,
            bt_vibe: true,
            hour_vibe: true,
        }
    }
}

impl WatchSettings {
    /// Unit to show temperatures in
    pub const fn temperature_unit(&self) -> TemperatureUnit {
        if self.celsius {
            TemperatureUnit::Celsius
        } else {
            TemperatureUnit::Fahrenheit
        }
    }

    /// Check if the hourly vibration should fire at this time of day
    pub const fn hour_vibe_due(&self, minute: u8, second: u8) -> bool {
        self.hour_vibe && minute == 0 && second == 0
    }

    /// Serialize into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard bytes
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("settings: {} bytes did not decode", bytes.len());
            ConfigError::Deserialize
        })
    }
}
