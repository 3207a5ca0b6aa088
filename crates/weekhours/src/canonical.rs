//! Flat string form: 168 `'1'`/`'0'` characters, day-major, Sunday first.
//!
//! Character `d * 24 + h` is the slot for weekday `d` at hour `h`. The
//! all-active sentinel renders as `"*"`.

use std::{fmt, str::FromStr};

use crate::{
    bits::{self, HOURS_PER_DAY, WEEK_HOURS, WEEKDAYS},
    errors::DecodeError,
    hours::Hours,
};

/// A day with every hour active.
pub const ACTIVE_DAY_HOURS: &str = "111111111111111111111111";
/// A day with no hour active.
pub const DISABLED_DAY_HOURS: &str = "000000000000000000000000";
/// Short form of the all-active sentinel.
pub const ALL_ACTIVE_HOURS: &str = "*";
/// Every hour of the week active, spelled out.
pub const ACTIVE_WEEK_HOURS: &str = concat!(
    "111111111111111111111111",
    "111111111111111111111111",
    "111111111111111111111111",
    "111111111111111111111111",
    "111111111111111111111111",
    "111111111111111111111111",
    "111111111111111111111111",
);

impl Hours {
    /// Decodes the flat string form.
    ///
    /// `""`, `"*"` and [ACTIVE_WEEK_HOURS] decode to [Hours::AllActive].
    /// Anything else becomes a 24-byte table where each `'1'` marks a slot;
    /// shorter inputs leave the remaining slots inactive. Inputs longer than
    /// a week fail with [DecodeError::TooManyHours].
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        if s.is_empty() || s == ALL_ACTIVE_HOURS || s == ACTIVE_WEEK_HOURS {
            return Ok(Hours::AllActive);
        }

        let len = s.chars().count();
        if len > WEEK_HOURS {
            log::debug!("rejecting hours string of {len} characters");
            return Err(DecodeError::TooManyHours { len });
        }

        let mut table = vec![0u8; HOURS_PER_DAY];
        for (i, c) in s.chars().enumerate() {
            if c == '1' {
                table[i % HOURS_PER_DAY] |= 1 << (i / HOURS_PER_DAY);
            }
        }

        Ok(Hours::Explicit(table))
    }

    /// Like [Hours::parse] but panics on invalid input.
    ///
    /// # Panics
    ///
    /// Panics when `s` is longer than a week. Only meant for trusted literals.
    pub fn must_parse(s: &str) -> Self {
        match Hours::parse(s) {
            Ok(hours) => hours,
            Err(err) => panic!("invalid hours literal {s:?}: {err}"),
        }
    }
}

impl FromStr for Hours {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hours::parse(s)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(table) = self.as_bytes() else {
            return f.write_str(ALL_ACTIVE_HOURS);
        };

        for day in WEEKDAYS {
            f.write_str(&bits::read_day(table, day))?;
        }

        Ok(())
    }
}
