//! Structured form: one optional shortcut string per weekday.
//!
//! A day string is `"*"` (every hour active), absent or empty (no hour
//! active), or an explicit `'1'`/`'0'` string of up to 24 hours.

use std::ops::{Deref, DerefMut};

use chrono::Weekday;

use crate::{
    bits::{self, DayFill, HOURS_PER_DAY, WEEKDAYS},
    canonical::{ACTIVE_DAY_HOURS, ALL_ACTIVE_HOURS},
    errors::DecodeError,
    hours::Hours,
};

/// Per-weekday description of a schedule. Days without active hours are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekSchedule {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tue: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub wed: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub thu: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fri: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sat: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sun: Option<String>,
}

impl WeekSchedule {
    /// The shortcut string for `day`, if any.
    pub fn day(&self, day: Weekday) -> Option<&str> {
        self.slot(day).as_deref()
    }

    /// Replaces the shortcut string for `day`.
    pub fn set_day(&mut self, day: Weekday, hours: Option<String>) {
        *self.slot_mut(day) = hours;
    }

    fn slot(&self, day: Weekday) -> &Option<String> {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    fn slot_mut(&mut self, day: Weekday) -> &mut Option<String> {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        }
    }

    /// Builds an explicit 24-byte table. Never produces the all-active sentinel.
    pub fn to_hours(&self) -> Result<Hours, DecodeError> {
        let mut table = vec![0u8; HOURS_PER_DAY];

        for day in WEEKDAYS {
            match self.day(day) {
                None | Some("") => bits::fill_day(&mut table, day, false),
                Some(ALL_ACTIVE_HOURS) | Some(ACTIVE_DAY_HOURS) => {
                    bits::fill_day(&mut table, day, true)
                }
                Some(hours) => {
                    let len = hours.chars().count();
                    if len > HOURS_PER_DAY {
                        log::debug!("rejecting {len} hours for {day}");
                        return Err(DecodeError::TooManyDayHours { day, len });
                    }
                    bits::write_day(&mut table, day, hours);
                }
            }
        }

        Ok(Hours::Explicit(table))
    }

    /// Describes `hours` using the shortest string for each day.
    pub fn from_hours(hours: &Hours) -> Self {
        let mut schedule = WeekSchedule::default();

        for day in WEEKDAYS {
            let value = match hours.as_bytes() {
                None => Some(ALL_ACTIVE_HOURS.to_string()),
                Some(table) => match bits::classify_day(table, day) {
                    DayFill::All => Some(ALL_ACTIVE_HOURS.to_string()),
                    DayFill::None => None,
                    DayFill::Mixed => Some(bits::read_day(table, day)),
                },
            };
            schedule.set_day(day, value);
        }

        schedule
    }
}

impl From<&Hours> for WeekSchedule {
    fn from(hours: &Hours) -> Self {
        WeekSchedule::from_hours(hours)
    }
}

impl TryFrom<&WeekSchedule> for Hours {
    type Error = DecodeError;

    fn try_from(schedule: &WeekSchedule) -> Result<Self, Self::Error> {
        schedule.to_hours()
    }
}

/// [Hours] that travel in the structured per-weekday form.
///
/// Dereferences to [Hours], so every slot operation is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoursObject(pub Hours);

impl HoursObject {
    /// The shortest per-weekday description of these hours.
    pub fn schedule(&self) -> WeekSchedule {
        WeekSchedule::from_hours(&self.0)
    }

    /// Decodes a structured schedule into an explicit table.
    pub fn from_schedule(schedule: &WeekSchedule) -> Result<Self, DecodeError> {
        schedule.to_hours().map(HoursObject)
    }

    /// Unwraps the plain [Hours].
    pub fn into_inner(self) -> Hours {
        self.0
    }
}

impl From<Hours> for HoursObject {
    fn from(hours: Hours) -> Self {
        HoursObject(hours)
    }
}

impl Deref for HoursObject {
    type Target = Hours;

    fn deref(&self) -> &Hours {
        &self.0
    }
}

impl DerefMut for HoursObject {
    fn deref_mut(&mut self) -> &mut Hours {
        &mut self.0
    }
}
