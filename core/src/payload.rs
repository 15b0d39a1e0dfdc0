// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::TimeZone;
use serde::Serialize;

use crate::datetime::combine;
use crate::error::SubmitError;
use crate::form::FormState;
use crate::recurrence::{RecurrenceRate, encode};

/// The recurrence rule as transmitted to the backend expansion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringPayload {
    /// The repetition rate, serialized as `"noRecurr"` or `"weekly"`.
    pub rate: RecurrenceRate,

    /// Canonical (UTC-relative) weekday indices, string-encoded on the wire.
    pub days: Vec<String>,
}

/// Request body for event creation. Key names and units are the backend wire
/// contract: camelCase keys, timestamps in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub discord_name: String,

    /// Start of the first occurrence, epoch milliseconds.
    pub first_event_start: i64,

    /// End of the first occurrence, epoch milliseconds.
    pub first_event_end: i64,

    /// Start of the last occurrence, epoch milliseconds.
    pub last_event_start: i64,

    pub recurring: RecurringPayload,
}

/// Builds the submission payload from a validated form, normalizing the
/// entered dates and times in `tz` and re-expressing the selected weekdays
/// relative to UTC.
///
/// The form itself is left untouched; its weekdays stay local so the UI can
/// keep showing the user's selection after a failed submission.
///
/// Validation is expected to have run: missing fields or a weekly rule
/// without days are reported as [`SubmitError::Invariant`] rather than
/// producing a malformed payload.
pub fn assemble<Tz: TimeZone>(form: &FormState, tz: &Tz) -> Result<SubmissionPayload, SubmitError> {
    let initial_date = form
        .initial_date()
        .ok_or(SubmitError::Invariant("start date missing at assembly"))?;
    let final_date = form
        .final_date()
        .ok_or(SubmitError::Invariant("end date missing at assembly"))?;
    let start_time = form
        .start_time()
        .ok_or(SubmitError::Invariant("start time missing at assembly"))?;
    let end_time = form
        .end_time()
        .ok_or(SubmitError::Invariant("end time missing at assembly"))?;

    let first_event_start = combine(tz, initial_date, start_time);
    let first_event_end = combine(tz, initial_date, end_time);
    let last_event_start = combine(tz, final_date, start_time);

    let rule = form.recurring();
    let days = match rule.rate() {
        RecurrenceRate::Weekly => {
            if rule.days().is_empty() {
                return Err(SubmitError::Invariant("weekly recurrence with no days"));
            }
            encode(rule.days(), &first_event_start)
        }
        RecurrenceRate::NoRecurrence => Vec::new(),
    };

    Ok(SubmissionPayload {
        title: form.title.clone(),
        description: form.description.clone(),
        location: form.location.clone(),
        discord_name: form.discord_name().to_string(),
        first_event_start: first_event_start.timestamp_millis(),
        first_event_end: first_event_end.timestamp_millis(),
        last_event_start: last_event_start.timestamp_millis(),
        recurring: RecurringPayload {
            rate: rule.rate(),
            days: days.iter().map(u8::to_string).collect(),
        },
    })
}
