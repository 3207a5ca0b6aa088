//! The weekly hour table and its slot-level operations.

use std::ops::BitOrAssign;

use chrono::{Datelike, Timelike, Weekday};

use crate::bits::{self, DAYS_MASK, HOURS_PER_DAY};

/// A weekly schedule of active hours, one slot per (weekday, hour).
///
/// [Hours::AllActive] is the sentinel for "every slot active" and needs no
/// storage. [Hours::Explicit] holds one byte per hour of day, with bit `d`
/// set when weekday `d` (0 = Sunday) is active at that hour. A definite
/// schedule has 24 bytes; a shorter table treats the missing hours as
/// inactive. An empty `Explicit` table behaves exactly like the sentinel.
#[derive(Debug, Clone, Default)]
pub enum Hours {
    /// Every slot is active.
    #[default]
    AllActive,
    /// Hour-major bit table.
    Explicit(Vec<u8>),
}

impl Hours {
    /// A 24-byte table with nothing active.
    pub fn inactive() -> Self {
        Hours::Explicit(vec![0; HOURS_PER_DAY])
    }

    /// Wraps raw table bytes. An empty table is the all-active sentinel.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            Hours::AllActive
        } else {
            Hours::Explicit(bytes)
        }
    }

    /// Table storage, or `None` for the all-active sentinel.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Hours::Explicit(table) if !table.is_empty() => Some(table),
            _ => None,
        }
    }

    /// Whether this value carries no storage and so means "all active".
    pub fn is_sentinel(&self) -> bool {
        self.as_bytes().is_none()
    }

    /// Tests the slot for `day` at `hour`.
    ///
    /// The sentinel reports every slot active. An explicit table that does not
    /// reach `hour` reports it inactive.
    pub fn test_hour(&self, day: Weekday, hour: u8) -> bool {
        match self.as_bytes() {
            None => true,
            Some(table) => bits::read_bit(table, day, hour as usize),
        }
    }

    /// Tests the slot holding `time`, by its weekday and hour of day.
    pub fn test_time<T: Datelike + Timelike>(&self, time: &T) -> bool {
        if self.is_sentinel() {
            return true;
        }
        // hour() is always < 24
        self.test_hour(time.weekday(), time.hour() as u8)
    }

    /// Marks the slot for `day` at `hour` as active or inactive.
    ///
    /// Nothing is written when the slot already has the requested state, so
    /// the sentinel is only materialized into a 24-byte table when the change
    /// is observable. Hours of 24 or more are outside the day and leave the
    /// table untouched.
    pub fn set_hour(&mut self, day: Weekday, hour: u8, active: bool) {
        if hour as usize >= HOURS_PER_DAY {
            log::debug!("ignoring set of {day} hour {hour}, outside the day");
            return;
        }
        if self.test_hour(day, hour) == active {
            return;
        }

        if self.is_sentinel() {
            log::trace!("materializing all-active hours to set {day} {hour}:00");
            *self = Hours::inactive();
        }

        if let Hours::Explicit(table) = self {
            let hour = hour as usize;
            if hour >= table.len() {
                table.resize(hour + 1, 0);
            }
            bits::write_bit(table, day, hour, active);
        }
    }

    /// True for the sentinel, or a table of at least 24 hours with every weekday active.
    pub fn is_all_active(&self) -> bool {
        match self.as_bytes() {
            None => true,
            Some(table) if table.len() < HOURS_PER_DAY => false,
            Some(table) => table.iter().all(|byte| byte & DAYS_MASK == DAYS_MASK),
        }
    }

    /// True for an explicit table with no active slot. The sentinel is never "no active".
    pub fn is_no_active(&self) -> bool {
        match self.as_bytes() {
            None => false,
            Some(table) => table.iter().all(|byte| byte & DAYS_MASK == 0),
        }
    }

    /// Unions `other` into `self`.
    ///
    /// Merging into the sentinel changes nothing. Merging the sentinel into an
    /// explicit table turns every byte fully on. Otherwise bytes are OR-ed over
    /// the receiver's length, with hours missing from a shorter `other`
    /// treated as inactive.
    pub fn merge(&mut self, other: &Hours) {
        let Hours::Explicit(table) = self else {
            return;
        };
        if table.is_empty() {
            return;
        }

        match other.as_bytes() {
            None => table.fill(0xff),
            Some(src) => {
                for (dst, src) in table.iter_mut().zip(src) {
                    *dst |= src;
                }
            }
        }
    }
}

impl PartialEq for Hours {
    fn eq(&self, other: &Self) -> bool {
        let (all_a, all_b) = (self.is_all_active(), other.is_all_active());
        if all_a || all_b {
            return all_a && all_b;
        }

        // neither side is the sentinel once both are known not all-active
        let a = self.as_bytes().unwrap_or_default();
        let b = other.as_bytes().unwrap_or_default();
        let common = a.len().min(b.len());

        let tail = if a.len() > common { &a[common..] } else { &b[common..] };
        if tail.iter().any(|byte| byte & DAYS_MASK != 0) {
            return false;
        }

        a[..common]
            .iter()
            .zip(&b[..common])
            .all(|(x, y)| x & DAYS_MASK == y & DAYS_MASK)
    }
}

impl Eq for Hours {}

impl BitOrAssign<&Hours> for Hours {
    fn bitor_assign(&mut self, rhs: &Hours) {
        self.merge(rhs);
    }
}
