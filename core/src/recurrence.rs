// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::datetime::utc_local_day_offset;

/// How often an event repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRate {
    /// A single, non-repeating event.
    #[default]
    #[serde(rename = "noRecurr")]
    NoRecurrence,

    /// Repeats every week on the selected weekdays.
    #[serde(rename = "weekly")]
    Weekly,
}

/// A recurrence rule over local weekday indices (0 = Sunday .. 6 = Saturday),
/// as selected in the UI. The indices stay local for the lifetime of the
/// form; only the submission payload carries the UTC-relative encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurrenceRule {
    rate: RecurrenceRate,
    days: Vec<u8>,
}

impl RecurrenceRule {
    /// The repetition rate.
    pub fn rate(&self) -> RecurrenceRate {
        self.rate
    }

    /// Selected local weekday indices, in selection order.
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    /// Switches the rate. Dropping back to `NoRecurrence` clears the day
    /// selection, keeping the rule consistent.
    pub fn set_rate(&mut self, rate: RecurrenceRate) {
        self.rate = rate;
        if rate == RecurrenceRate::NoRecurrence {
            self.days.clear();
        }
    }

    /// Selects the weekday if absent, deselects it if present. The selection
    /// behaves as a set: toggling twice restores the previous state and
    /// never duplicates an index.
    pub fn toggle_day(&mut self, day: u8) {
        debug_assert!(day < 7, "weekday index out of range: {day}");
        match self.days.iter().position(|&d| d == day) {
            Some(i) => {
                self.days.remove(i);
            }
            None => self.days.push(day),
        }
    }
}

/// Re-expresses local weekday indices relative to UTC, so the backend can
/// expand the series without knowing the user's timezone. Each index maps to
/// `(day + offset + 7) % 7`; the `+ 7` keeps the result in `0..=6` when the
/// offset is negative. Selection order is preserved.
///
/// `reference` must be the first occurrence's start instant. The offset is
/// computed once from it and applied to the whole series, so a DST
/// transition between the first and last occurrence can shift later
/// occurrences by a day. Kept for backend compatibility.
pub fn encode<Tz: TimeZone>(days: &[u8], reference: &DateTime<Tz>) -> Vec<u8> {
    let offset = utc_local_day_offset(reference);
    days.iter()
        .map(|&d| ((i32::from(d) + offset + 7) % 7) as u8)
        .collect()
}
