//! Cron field parsing and recurrence description
//!
//! Two small text-processing components for schedule form UIs:
//! - [`CronFieldParser`] validates a 6-field cron expression and decomposes
//!   it into named fields with per-field activity flags, resetting to the
//!   all-wildcard default whenever the input is invalid
//! - [`RecurrenceDescriber`] holds a pattern/time/day/date selection and
//!   renders it into a natural-language sentence, with 12/24-hour clock
//!   conversion and ordinal day formatting
//!
//! Both are pure, synchronous, and free of I/O; they are meant to be driven
//! directly from UI event handlers.
//!
//! ## Quick Start
//!
//! ```
//! use cron_recurrence::{CronFieldParser, Pattern, RecurrenceDescriber, Weekday};
//!
//! let mut parser = CronFieldParser::new();
//! parser.set_expression("0 15 12 1 JAN MON");
//! assert_eq!(parser.fields().month, "JAN");
//! assert!(parser.activity().seconds);
//!
//! let mut describer = RecurrenceDescriber::new();
//! describer.set_pattern(Pattern::Weekly);
//! describer.set_time("08:30");
//! describer.toggle_day(Weekday::Monday);
//! assert_eq!(describer.description(), "Runs every week on Monday at 08:30.");
//! ```

mod parser;
mod recurrence;
mod types;

pub use parser::{CronFieldParser, CronFields, FieldActivity};
pub use recurrence::{ordinal, to_12_hour, to_24_hour, RecurrenceDescriber};
pub use types::{DaySelection, ParseError, Pattern, Result, Weekday};
