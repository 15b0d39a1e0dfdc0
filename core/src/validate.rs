// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Local;

use crate::config::Config;
use crate::datetime::combine;
use crate::form::FormState;
use crate::recurrence::RecurrenceRate;
use crate::wizard::Step;

/// Runs every rule for the given step and returns the violations, in rule
/// order, as user-facing messages. No short-circuiting: the UI shows all of
/// them at once. An empty result permits advancing past the step.
///
/// The message order is a contract; the UI and the tests rely on it.
pub fn validate(step: Step, form: &FormState, config: &Config) -> Vec<String> {
    match step {
        Step::Description => validate_description(form),
        Step::Schedule => validate_schedule(form, config),
        Step::Confirm | Step::Success => Vec::new(),
    }
}

fn validate_description(form: &FormState) -> Vec<String> {
    let mut errors = Vec::new();
    if form.title.is_empty() {
        errors.push("title field can't be empty".to_string());
    }
    if form.description.is_empty() {
        errors.push("description field can't be empty".to_string());
    }
    if form.location.is_empty() {
        errors.push("location field can't be empty".to_string());
    }
    errors
}

fn validate_schedule(form: &FormState, config: &Config) -> Vec<String> {
    let mut errors = Vec::new();
    if form.initial_date().is_none() {
        errors.push("Start Date field can't be empty".to_string());
    }
    if form.final_date().is_none() {
        errors.push("End Date field can't be empty".to_string());
    }
    if form.start_time().is_none() {
        errors.push("Start Time field can't be empty".to_string());
    }
    if form.end_time().is_none() {
        errors.push("End Time field can't be empty".to_string());
    }
    if form.recurring().rate() == RecurrenceRate::Weekly && form.recurring().days().is_empty() {
        errors.push("Weekly recurring event MUST include at least one day of the week".to_string());
    }

    // Cross-field rules only make sense once all four fields exist.
    if let (Some(initial_date), Some(final_date), Some(start_time), Some(end_time)) = (
        form.initial_date(),
        form.final_date(),
        form.start_time(),
        form.end_time(),
    ) {
        // Last occurrence's end vs first occurrence's start, so an end date
        // earlier than the start date trips this too.
        let first_start = combine(&Local, initial_date, start_time);
        let last_end = combine(&Local, final_date, end_time);
        if last_end < first_start {
            errors.push("End time is before Start time".to_string());
        }

        let span = (final_date - initial_date).num_days();
        if span > i64::from(config.max_span_days) {
            errors.push(format!(
                "Start date and End date cannot be more than {} days apart",
                config.max_span_days
            ));
        }
    }

    errors
}
