//! Low-level bit helpers for hour tables.
//!
//! Tables are hour-major: byte `h` carries one bit per weekday for hour `h`,
//! bit 0 = Sunday through bit 6 = Saturday. Bit 7 is never meaningful.

use chrono::Weekday;

/// Low 7 bits of an hour byte, one per weekday.
pub const DAYS_MASK: u8 = 0x7f;
pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;
/// Number of slots in a full week.
pub const WEEK_HOURS: usize = HOURS_PER_DAY * DAYS_PER_WEEK;

/// Weekdays in table order, Sunday first.
pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// How the hours of one weekday are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFill {
    All,
    None,
    Mixed,
}

/// Bit selecting `day` inside an hour byte.
pub fn day_bit(day: Weekday) -> u8 {
    1 << day.num_days_from_sunday()
}

/// Reads the slot for `day` at `hour`. Hours past the end of `table` read as inactive.
pub fn read_bit(table: &[u8], day: Weekday, hour: usize) -> bool {
    table.get(hour).is_some_and(|byte| byte & day_bit(day) != 0)
}

/// Sets or clears the slot for `day` at `hour`. The caller guarantees `hour < table.len()`.
pub fn write_bit(table: &mut [u8], day: Weekday, hour: usize, active: bool) {
    if active {
        table[hour] |= day_bit(day);
    } else {
        table[hour] &= !day_bit(day);
    }
}

/// Sets or clears `day` across every hour of `table`.
pub fn fill_day(table: &mut [u8], day: Weekday, active: bool) {
    for hour in 0..table.len() {
        write_bit(table, day, hour, active);
    }
}

/// Writes a `'1'`/`'0'` day string into the `day` bit of consecutive hours.
///
/// Any character other than `'1'` clears the bit. Characters past the end of
/// `table` are ignored; callers validate the length first.
pub fn write_day(table: &mut [u8], day: Weekday, hours: &str) {
    for (hour, c) in hours.chars().enumerate().take(table.len()) {
        write_bit(table, day, hour, c == '1');
    }
}

/// Renders the 24 hours of `day` as a `'1'`/`'0'` string.
pub fn read_day(table: &[u8], day: Weekday) -> String {
    (0..HOURS_PER_DAY)
        .map(|hour| if read_bit(table, day, hour) { '1' } else { '0' })
        .collect()
}

/// Classifies the 24 hours of `day`, stopping as soon as the day is known to be mixed.
pub fn classify_day(table: &[u8], day: Weekday) -> DayFill {
    let mut all = true;
    let mut none = true;

    for hour in 0..HOURS_PER_DAY {
        if read_bit(table, day, hour) {
            none = false;
        } else {
            all = false;
        }

        if !all && !none {
            return DayFill::Mixed;
        }
    }

    if all { DayFill::All } else { DayFill::None }
}
