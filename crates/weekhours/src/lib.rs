//! # weekhours
//!
//! A compact weekly schedule of active hours: 7 days × 24 hours, one bit per
//! slot, stored hour-major in at most 24 bytes.
//!
//! [Hours] converts losslessly to and from two text forms:
//!
//! - the flat string, 168 `'1'`/`'0'` characters with Sunday first, or `"*"`
//!   when every hour is active ([canonical]);
//! - the structured [WeekSchedule], one shortcut string per weekday
//!   ([schedule]).
//!
//! The all-active schedule is the [Hours::AllActive] sentinel and carries no
//! storage until a slot is switched off.
//!
//! ## Example
//!
//! ```
//! use chrono::Weekday;
//! use weekhours::{Hours, WeekSchedule, range::active_hours_range};
//!
//! let mut schedule = WeekSchedule::default();
//! for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
//!     schedule.set_day(day, Some(active_hours_range(9, 17)));
//! }
//! let hours = schedule.to_hours().unwrap();
//!
//! assert!(hours.test_hour(Weekday::Wed, 9));
//! assert!(!hours.test_hour(Weekday::Sat, 9));
//! assert_eq!(Hours::parse(&hours.to_string()).unwrap(), hours);
//! ```
//!
//! Enable the `serde` feature for serde support of both forms.

pub mod bits;
pub mod canonical;
pub mod errors;
pub mod hours;
pub mod range;
pub mod schedule;
#[cfg(feature = "serde")]
pub mod serde;
pub mod store;

pub use errors::{DecodeError, ScanError};
pub use hours::Hours;
pub use schedule::{HoursObject, WeekSchedule};
pub use store::StoredValue;
