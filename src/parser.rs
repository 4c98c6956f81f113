//! Cron expression field parser
//!
//! Decomposes 6-field cron syntax into named fields:
//! ```text
//! ┌───────────── second (0-59)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31)
//! │ │ │ │ ┌───────────── month (1-12 or JAN-DEC)
//! │ │ │ │ │ ┌───────────── day of week (0-6 or SUN-SAT)
//! │ │ │ │ │ │
//! * * * * * *
//! ```
//!
//! Each field holds either `*` or a single literal: an integer within the
//! field's range, or a three-letter name for the month and day-of-week
//! fields. Names match case-insensitively.

use crate::types::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names accepted in the month field
const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Day names accepted in the day-of-week field
const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// The six decomposed fields of a cron expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronFields {
    /// Seconds (0-59 or `*`)
    pub seconds: String,
    /// Minutes (0-59 or `*`)
    pub minutes: String,
    /// Hours (0-23 or `*`)
    pub hours: String,
    /// Day of month (1-31 or `*`)
    pub day_of_month: String,
    /// Month (1-12, JAN-DEC, or `*`)
    pub month: String,
    /// Day of week (0-6, SUN-SAT, or `*`)
    pub day_of_week: String,
}

impl Default for CronFields {
    fn default() -> Self {
        Self {
            seconds: "*".to_string(),
            minutes: "*".to_string(),
            hours: "*".to_string(),
            day_of_month: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
        }
    }
}

impl CronFields {
    /// Parse a cron expression string
    ///
    /// Leading, trailing, and repeated interior whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_recurrence::CronFields;
    ///
    /// let fields = CronFields::parse("0 15 12 1 JAN MON").unwrap();
    /// assert_eq!(fields.seconds, "0");
    /// assert_eq!(fields.month, "JAN");
    ///
    /// assert!(CronFields::parse("0 15 12 1 JAN").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        Self::from_parts(&parts)
    }

    /// Build fields from pre-split tokens
    ///
    /// Tokens are stored verbatim; symbolic names are matched
    /// case-insensitively but not rewritten.
    pub fn from_parts(parts: &[&str]) -> Result<Self> {
        if parts.len() != 6 {
            return Err(ParseError::InvalidExpression(format!(
                "Expected 6 fields, got {}",
                parts.len()
            )));
        }

        validate_field(parts[0], 0, 59, &[], "seconds")?;
        validate_field(parts[1], 0, 59, &[], "minutes")?;
        validate_field(parts[2], 0, 23, &[], "hours")?;
        validate_field(parts[3], 1, 31, &[], "day of month")?;
        validate_field(parts[4], 1, 12, &MONTH_NAMES, "month")?;
        validate_field(parts[5], 0, 6, &DAY_NAMES, "day of week")?;

        Ok(Self {
            seconds: parts[0].to_string(),
            minutes: parts[1].to_string(),
            hours: parts[2].to_string(),
            day_of_month: parts[3].to_string(),
            month: parts[4].to_string(),
            day_of_week: parts[5].to_string(),
        })
    }

    /// Check pre-split tokens without building fields
    pub fn validate(parts: &[&str]) -> bool {
        Self::from_parts(parts).is_ok()
    }

    /// Activity flags for these fields, true where the value is not `*`
    pub fn activity(&self) -> FieldActivity {
        FieldActivity {
            seconds: self.seconds != "*",
            minutes: self.minutes != "*",
            hours: self.hours != "*",
            day_of_month: self.day_of_month != "*",
            month: self.month != "*",
            day_of_week: self.day_of_week != "*",
        }
    }
}

impl fmt::Display for CronFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.seconds, self.minutes, self.hours, self.day_of_month, self.month, self.day_of_week
        )
    }
}

/// Which fields of a parsed expression carry a non-wildcard value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldActivity {
    pub seconds: bool,
    pub minutes: bool,
    pub hours: bool,
    pub day_of_month: bool,
    pub month: bool,
    pub day_of_week: bool,
}

/// Stateful cron input handler backing an expression input field
///
/// Retains the raw input verbatim for redisplay and keeps the decomposed
/// fields in lockstep with their activity flags: after every input they are
/// either fully populated from a valid expression or fully reset to the
/// all-wildcard default, never partial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CronFieldParser {
    expression: String,
    fields: CronFields,
    activity: FieldActivity,
}

impl CronFieldParser {
    /// Create a parser in the all-wildcard default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a change to the expression input
    ///
    /// Invalid input (wrong field count, out-of-range value, unrecognized
    /// symbol) resets the fields and activity flags to their defaults
    /// instead of reporting an error.
    pub fn set_expression(&mut self, raw: &str) {
        self.expression = raw.to_string();

        match CronFields::parse(raw) {
            Ok(fields) => {
                self.activity = fields.activity();
                self.fields = fields;
            }
            Err(e) => {
                tracing::debug!("Resetting cron fields: {}", e);
                self.fields = CronFields::default();
                self.activity = FieldActivity::default();
            }
        }
    }

    /// The raw expression as last entered
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The decomposed fields
    pub fn fields(&self) -> &CronFields {
        &self.fields
    }

    /// Activity flags for the decomposed fields
    pub fn activity(&self) -> &FieldActivity {
        &self.activity
    }
}

/// Validate a single field against its range and symbolic names
fn validate_field(value: &str, min: u32, max: u32, names: &[&str], field: &str) -> Result<()> {
    if value == "*" {
        return Ok(());
    }

    let upper = value.to_ascii_uppercase();
    if names.contains(&upper.as_str()) {
        return Ok(());
    }

    let num: u32 = value.parse().map_err(|_| {
        ParseError::InvalidExpression(format!("Invalid value '{}' in {}", value, field))
    })?;
    if num < min || num > max {
        return Err(ParseError::InvalidExpression(format!(
            "Value {} out of range ({}-{}) in {}",
            num, min, max, field
        )));
    }

    Ok(())
}
