//! Builds day strings for a contiguous range of active hours.

use crate::canonical::{ACTIVE_DAY_HOURS, DISABLED_DAY_HOURS};

/// Day string with hours `[from, to)` active.
///
/// A range starting at midnight and reaching hour 23 or later is the whole
/// day. Empty, inverted, and out-of-day ranges give a fully disabled day.
/// The trailing inactive block is only written when `to < 23`.
pub fn active_hours_range(from: u8, to: u8) -> String {
    if from == 0 && to >= 23 {
        return ACTIVE_DAY_HOURS.to_string();
    }
    if from > 23 || from >= to {
        return DISABLED_DAY_HOURS.to_string();
    }

    let (from, to) = (from as usize, to as usize);
    let mut out = String::with_capacity(24);
    out.push_str(&"0".repeat(from));
    out.push_str(&"1".repeat(to - from));
    if to < 23 {
        out.push_str(&"0".repeat(24 - to));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_midnight() {
        assert_eq!(active_hours_range(0, 10), format!("{}{}", "1".repeat(10), "0".repeat(14)));
    }

    #[test]
    fn test_to_end_of_day() {
        assert_eq!(active_hours_range(10, 24), format!("{}{}", "0".repeat(10), "1".repeat(14)));
    }

    #[test]
    fn test_whole_day() {
        assert_eq!(active_hours_range(0, 24), ACTIVE_DAY_HOURS);
        assert_eq!(active_hours_range(0, 23), ACTIVE_DAY_HOURS);
        assert_eq!(active_hours_range(0, 255), ACTIVE_DAY_HOURS);
    }

    #[test]
    fn test_disabled() {
        assert_eq!(active_hours_range(20, 10), DISABLED_DAY_HOURS);
        assert_eq!(active_hours_range(25, 30), DISABLED_DAY_HOURS);
        assert_eq!(active_hours_range(7, 7), DISABLED_DAY_HOURS);
        assert_eq!(active_hours_range(0, 0), DISABLED_DAY_HOURS);
    }

    #[test]
    fn test_middle_of_day() {
        assert_eq!(active_hours_range(9, 17), "000000000111111110000000");
        assert_eq!(active_hours_range(0, 1), format!("1{}", "0".repeat(23)));
    }

    #[test]
    fn test_no_trailing_block_at_23() {
        assert_eq!(active_hours_range(22, 23), format!("{}1", "0".repeat(22)));
    }
}
