//! Recurrence pattern description
//!
//! Maintains a pattern/time/day/date selection and renders it into a
//! natural-language sentence, e.g. "Runs every week on Monday, Friday at
//! 08:30." Includes 12/24-hour clock conversion and ordinal day formatting.

use crate::types::{DaySelection, ParseError, Pattern, Result, Weekday};
use serde::{Deserialize, Serialize};

/// Convert a 24-hour `HH:MM` time to its 12-hour `hh:mm am|pm` form
///
/// # Examples
///
/// ```
/// use cron_recurrence::to_12_hour;
///
/// assert_eq!(to_12_hour("00:00").unwrap(), "12:00 am");
/// assert_eq!(to_12_hour("12:00").unwrap(), "12:00 pm");
/// assert_eq!(to_12_hour("14:30").unwrap(), "02:30 pm");
/// ```
pub fn to_12_hour(time24: &str) -> Result<String> {
    let (hours, minutes) = split_hhmm(time24)?;
    let suffix = if hours >= 12 { "pm" } else { "am" };
    let hours12 = (hours + 11) % 12 + 1;
    Ok(format!("{:02}:{:02} {}", hours12, minutes, suffix))
}

/// Convert a 12-hour `hh:mm am|pm` time to its canonical 24-hour `HH:MM` form
///
/// Accepts one or two hour digits, exactly two minute digits, an optional
/// single space before the meridiem, and any casing. Anything else is an
/// [`ParseError::InvalidTimeFormat`].
///
/// # Examples
///
/// ```
/// use cron_recurrence::to_24_hour;
///
/// assert_eq!(to_24_hour("12:00 am").unwrap(), "00:00");
/// assert_eq!(to_24_hour("2:30pm").unwrap(), "14:30");
/// assert!(to_24_hour("14:30").is_err());
/// ```
pub fn to_24_hour(time12: &str) -> Result<String> {
    let invalid = || ParseError::InvalidTimeFormat(time12.to_string());

    let cleaned = time12.trim().to_ascii_lowercase();
    let (rest, pm) = if let Some(rest) = cleaned.strip_suffix("am") {
        (rest, false)
    } else if let Some(rest) = cleaned.strip_suffix("pm") {
        (rest, true)
    } else {
        return Err(invalid());
    };
    let rest = rest.strip_suffix(char::is_whitespace).unwrap_or(rest);

    let (hour_str, minute_str) = rest.split_once(':').ok_or_else(invalid)?;
    if hour_str.is_empty()
        || hour_str.len() > 2
        || minute_str.len() != 2
        || !hour_str.bytes().all(|b| b.is_ascii_digit())
        || !minute_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let mut hours: u32 = hour_str.parse().map_err(|_| invalid())?;
    let minutes: u32 = minute_str.parse().map_err(|_| invalid())?;

    if pm && hours != 12 {
        hours += 12;
    }
    if !pm && hours == 12 {
        hours = 0;
    }

    Ok(format!("{:02}:{:02}", hours, minutes))
}

/// Split a `HH:MM` string into its hour and minute values
fn split_hhmm(time: &str) -> Result<(u32, u32)> {
    let invalid = || ParseError::InvalidTimeFormat(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    Ok((hours, minutes))
}

/// Append the English ordinal suffix to a number (1st, 2nd, 3rd, 4th, ...)
///
/// The teens (11-13) always take "th".
pub fn ordinal(n: u32) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}

/// Selection state behind a recurrence form, plus its generated description
///
/// The description is regenerated after every mutation, so it is always a
/// pure function of the current pattern, time, day, and date selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceDescriber {
    pattern: Pattern,
    /// Canonical 24-hour time
    time: String,
    /// 12-hour display text, edited freely and committed on blur
    formatted_time: String,
    /// Day of month for monthly patterns
    date: String,
    selected_days: DaySelection,
    description: String,
}

impl Default for RecurrenceDescriber {
    fn default() -> Self {
        Self::new()
    }
}

impl RecurrenceDescriber {
    /// Create a describer with the default daily-at-noon selection
    pub fn new() -> Self {
        let mut describer = Self {
            pattern: Pattern::Daily,
            time: "12:00".to_string(),
            formatted_time: "12:00 pm".to_string(),
            date: "1".to_string(),
            selected_days: DaySelection::default(),
            description: String::new(),
        };
        describer.regenerate();
        describer
    }

    /// Switch the recurrence pattern
    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
        self.regenerate();
    }

    /// Set the canonical 24-hour time
    pub fn set_time(&mut self, time: &str) {
        self.time = time.to_string();
        self.regenerate();
    }

    /// Replace the 12-hour display text without committing it
    pub fn set_formatted_time(&mut self, text: &str) {
        self.formatted_time = text.to_string();
    }

    /// Commit the 12-hour display text back to the canonical time
    ///
    /// Substitutes midnight when the display text does not parse.
    pub fn commit_time(&mut self) {
        match to_24_hour(&self.formatted_time) {
            Ok(time) => self.time = time,
            Err(e) => {
                tracing::warn!("Falling back to 00:00: {}", e);
                self.time = "00:00".to_string();
            }
        }
        self.regenerate();
    }

    /// Flip a weekday selection
    pub fn toggle_day(&mut self, day: Weekday) {
        self.selected_days.toggle(day);
        self.regenerate();
    }

    /// Set the day of month for monthly patterns
    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
        self.regenerate();
    }

    /// The active recurrence pattern
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The canonical 24-hour time
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The 12-hour display text
    pub fn formatted_time(&self) -> &str {
        &self.formatted_time
    }

    /// The day of month for monthly patterns
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The weekday selection for weekly patterns
    pub fn selected_days(&self) -> &DaySelection {
        &self.selected_days
    }

    /// The generated natural-language description
    pub fn description(&self) -> &str {
        &self.description
    }

    fn regenerate(&mut self) {
        self.description = match self.pattern {
            Pattern::Daily => format!("Runs every day at {}.", self.time),
            Pattern::Weekly => {
                let days: Vec<&str> = self.selected_days.iter().map(Weekday::name).collect();
                if days.is_empty() {
                    format!("Runs every week at {}.", self.time)
                } else {
                    format!("Runs every week on {} at {}.", days.join(", "), self.time)
                }
            }
            Pattern::Monthly => {
                // The date input is bounded to 1-31 by the form control
                let day: u32 = self.date.parse().unwrap_or(1);
                format!("Runs every month on the {} day at {}.", ordinal(day), self.time)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour("00:00").unwrap(), "12:00 am");
        assert_eq!(to_12_hour("00:05").unwrap(), "12:05 am");
        assert_eq!(to_12_hour("01:00").unwrap(), "01:00 am");
        assert_eq!(to_12_hour("11:59").unwrap(), "11:59 am");
        assert_eq!(to_12_hour("12:00").unwrap(), "12:00 pm");
        assert_eq!(to_12_hour("13:45").unwrap(), "01:45 pm");
        assert_eq!(to_12_hour("23:59").unwrap(), "11:59 pm");
    }

    #[test]
    fn test_to_12_hour_invalid() {
        assert!(to_12_hour("noon").is_err());
        assert!(to_12_hour("12").is_err());
        assert!(to_12_hour("ab:cd").is_err());
    }

    #[test]
    fn test_to_24_hour() {
        assert_eq!(to_24_hour("12:00 am").unwrap(), "00:00");
        assert_eq!(to_24_hour("12:00 pm").unwrap(), "12:00");
        assert_eq!(to_24_hour("01:00 am").unwrap(), "01:00");
        assert_eq!(to_24_hour("2:30 pm").unwrap(), "14:30");
        assert_eq!(to_24_hour("11:59 pm").unwrap(), "23:59");
    }

    #[test]
    fn test_to_24_hour_lenient_spacing_and_case() {
        assert_eq!(to_24_hour("2:30pm").unwrap(), "14:30");
        assert_eq!(to_24_hour("02:30 PM").unwrap(), "14:30");
        assert_eq!(to_24_hour("  06:30 Pm  ").unwrap(), "18:30");
    }

    #[test]
    fn test_to_24_hour_invalid() {
        assert!(to_24_hour("14:30").is_err());
        assert!(to_24_hour("2:30").is_err());
        assert!(to_24_hour("2:3 pm").is_err());
        assert!(to_24_hour("123:00 pm").is_err());
        assert!(to_24_hour(":30 pm").is_err());
        assert!(to_24_hour("ab:cd pm").is_err());
        assert!(to_24_hour("half past nine").is_err());
        assert!(to_24_hour("").is_err());
    }

    #[test]
    fn test_time_round_trip() {
        for hours in 0..24 {
            for minutes in 0..60 {
                let time = format!("{:02}:{:02}", hours, minutes);
                let twelve = to_12_hour(&time).unwrap();
                assert_eq!(to_24_hour(&twelve).unwrap(), time);
            }
        }
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(31), "31st");
    }

    #[test]
    fn test_default_state() {
        let describer = RecurrenceDescriber::new();
        assert_eq!(describer.pattern(), Pattern::Daily);
        assert_eq!(describer.time(), "12:00");
        assert_eq!(describer.formatted_time(), "12:00 pm");
        assert_eq!(describer.date(), "1");
        assert!(describer.selected_days().is_empty());
        assert_eq!(describer.description(), "Runs every day at 12:00.");
    }

    #[test]
    fn test_daily_description() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_time("10:30");
        assert_eq!(describer.description(), "Runs every day at 10:30.");
    }

    #[test]
    fn test_weekly_description_with_days() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_pattern(Pattern::Weekly);
        describer.set_time("08:30");
        describer.toggle_day(Weekday::Monday);
        describer.toggle_day(Weekday::Friday);

        assert_eq!(
            describer.description(),
            "Runs every week on Monday, Friday at 08:30."
        );
    }

    #[test]
    fn test_weekly_description_day_order() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_pattern(Pattern::Weekly);
        describer.set_time("08:30");
        // Toggled out of order; the sentence stays Monday-first
        describer.toggle_day(Weekday::Friday);
        describer.toggle_day(Weekday::Monday);

        assert_eq!(
            describer.description(),
            "Runs every week on Monday, Friday at 08:30."
        );
    }

    #[test]
    fn test_weekly_description_no_days() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_pattern(Pattern::Weekly);
        describer.set_time("18:30");

        assert_eq!(describer.description(), "Runs every week at 18:30.");
    }

    #[test]
    fn test_toggle_day_twice_deselects() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_pattern(Pattern::Weekly);
        describer.set_time("18:30");
        describer.toggle_day(Weekday::Tuesday);
        describer.toggle_day(Weekday::Tuesday);

        assert_eq!(describer.description(), "Runs every week at 18:30.");
    }

    #[test]
    fn test_monthly_description() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_pattern(Pattern::Monthly);
        describer.set_time("09:00");
        describer.set_date("15");

        assert_eq!(
            describer.description(),
            "Runs every month on the 15th day at 09:00."
        );
    }

    #[test]
    fn test_monthly_description_ordinals() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_pattern(Pattern::Monthly);
        describer.set_time("09:00");

        describer.set_date("1");
        assert_eq!(
            describer.description(),
            "Runs every month on the 1st day at 09:00."
        );

        describer.set_date("22");
        assert_eq!(
            describer.description(),
            "Runs every month on the 22nd day at 09:00."
        );
    }

    #[test]
    fn test_commit_time() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_formatted_time("06:30 pm");
        describer.commit_time();

        assert_eq!(describer.time(), "18:30");
        assert_eq!(describer.description(), "Runs every day at 18:30.");
    }

    #[test]
    fn test_commit_time_invalid_falls_back_to_midnight() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_formatted_time("half past nine");
        describer.commit_time();

        assert_eq!(describer.time(), "00:00");
        assert_eq!(describer.description(), "Runs every day at 00:00.");
    }

    #[test]
    fn test_set_formatted_time_does_not_touch_canonical_time() {
        let mut describer = RecurrenceDescriber::new();
        describer.set_formatted_time("03:45 pm");

        assert_eq!(describer.time(), "12:00");
        assert_eq!(describer.description(), "Runs every day at 12:00.");
    }
}
