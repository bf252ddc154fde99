// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration.
//!
//! The configuration is a JSON document. Every field has a default, so an
//! empty object (`{}`) describes the standard five-by-four auditorium.

use cineseat::BookingRules;
use cineseat_domain::{DiscountRules, DomainError, ScreeningSchedule, SeatGrid};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The longest reminder lead time accepted, one day.
pub const MAX_REMINDER_LEAD_MINUTES: u16 = 24 * 60;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON, or a value failed its own checks.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is well-formed but breaks an engine rule.
    #[error("Invalid configuration: {0}")]
    Domain(#[from] DomainError),

    /// A discount time range ends before it starts.
    #[error("Discount time range starting at {from} must end after it starts (ends at {until})")]
    EmptyTimeRange { from: String, until: String },

    /// The reminder lead time is too long.
    #[error("Reminder lead time must be at most {max} minutes (found {found})")]
    ReminderLeadTooLong { max: u16, found: u16 },
}

/// Seat grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: u16,
    /// Seats per row.
    pub columns: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 4,
        }
    }
}

/// Base price and discounts.
///
/// Omitting `discounts` enables both standard discounts; an explicit
/// `"discounts": {}` disables them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price of one seat before discounts.
    pub base_price_per_seat: u64,
    /// Enabled discounts.
    pub discounts: DiscountRules,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price_per_seat: 10_000,
            discounts: DiscountRules::standard(),
        }
    }
}

/// The full engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seat grid dimensions.
    pub grid: GridConfig,
    /// Base price and discounts.
    pub pricing: PricingConfig,
    /// Daily screening timetable.
    pub schedule: ScreeningSchedule,
    /// Minutes before the showtime that a reminder fires.
    pub reminder_lead_minutes: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            pricing: PricingConfig::default(),
            schedule: ScreeningSchedule::default(),
            reminder_lead_minutes: 30,
        }
    }
}

/// A validated configuration, ready to serve requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    /// The rules every booking session runs under.
    pub rules: BookingRules,
    /// Minutes before the showtime that a reminder fires.
    pub reminder_lead_minutes: u16,
}

impl EngineConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents: String =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&contents)
    }

    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or fails validation.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty, a discount time range is
    /// empty, or the reminder lead time is longer than a day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        SeatGrid::new(self.grid.rows, self.grid.columns)?;

        if let Some(time_discount) = &self.pricing.discounts.time {
            for range in &time_discount.ranges {
                if let Some(until) = range.until.filter(|until| *until <= range.from) {
                    return Err(ConfigError::EmptyTimeRange {
                        from: range.from.to_string(),
                        until: until.to_string(),
                    });
                }
            }
        }

        if self.reminder_lead_minutes > MAX_REMINDER_LEAD_MINUTES {
            return Err(ConfigError::ReminderLeadTooLong {
                max: MAX_REMINDER_LEAD_MINUTES,
                found: self.reminder_lead_minutes,
            });
        }

        Ok(())
    }

    /// Validates the configuration and builds the engine it describes.
    ///
    /// # Errors
    ///
    /// See [`EngineConfig::validate`].
    pub fn build(&self) -> Result<Engine, ConfigError> {
        self.validate()?;
        let grid: SeatGrid = SeatGrid::new(self.grid.rows, self.grid.columns)?;
        Ok(Engine {
            rules: BookingRules {
                grid,
                base_price_per_seat: self.pricing.base_price_per_seat,
                discounts: self.pricing.discounts.clone(),
                schedule: self.schedule,
            },
            reminder_lead_minutes: self.reminder_lead_minutes,
        })
    }
}
