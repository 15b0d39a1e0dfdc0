// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};

use crate::recurrence::{RecurrenceRate, RecurrenceRule};

/// Accumulated state of one event-creation session, owned by its wizard.
///
/// Text fields are freely editable; the scheduling fields go through setters
/// so the end-date autofill and the recurrence-rule invariants hold.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// The event title, required before leaving the description step.
    pub title: String,

    /// The event description, required before leaving the description step.
    pub description: String,

    /// The event location, required before leaving the description step.
    pub location: String,

    discord_name: String,
    initial_date: Option<NaiveDate>,
    final_date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    recurring: RecurrenceRule,
}

impl FormState {
    /// Creates an empty form for the authenticated user. The handle comes
    /// from the identity collaborator and is never edited here.
    pub fn new(discord_name: impl Into<String>) -> Self {
        Self {
            discord_name: discord_name.into(),
            ..Self::default()
        }
    }

    /// The authenticated user's Discord handle.
    pub fn discord_name(&self) -> &str {
        &self.discord_name
    }

    /// The first occurrence's date.
    pub fn initial_date(&self) -> Option<NaiveDate> {
        self.initial_date
    }

    /// Sets the first occurrence's date. For a single (non-recurring) event
    /// with the end date still unset, the end date is autofilled with the
    /// same value; it stays independently editable afterwards. A weekly
    /// series spans several days, so its end date is never autofilled.
    pub fn set_initial_date(&mut self, date: Option<NaiveDate>) {
        if let Some(d) = date
            && self.final_date.is_none()
            && self.recurring.rate() == RecurrenceRate::NoRecurrence
        {
            self.final_date = Some(d);
        }
        self.initial_date = date;
    }

    /// The last occurrence's date.
    pub fn final_date(&self) -> Option<NaiveDate> {
        self.final_date
    }

    /// Sets the last occurrence's date.
    pub fn set_final_date(&mut self, date: Option<NaiveDate>) {
        self.final_date = date;
    }

    /// The clock time every occurrence starts at.
    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    /// Sets the start time.
    pub fn set_start_time(&mut self, time: Option<NaiveTime>) {
        self.start_time = time;
    }

    /// The clock time every occurrence ends at.
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    /// Sets the end time.
    pub fn set_end_time(&mut self, time: Option<NaiveTime>) {
        self.end_time = time;
    }

    /// The recurrence rule, with weekdays in local indices.
    pub fn recurring(&self) -> &RecurrenceRule {
        &self.recurring
    }

    /// Switches the recurrence rate.
    pub fn set_rate(&mut self, rate: RecurrenceRate) {
        self.recurring.set_rate(rate);
    }

    /// Toggles a local weekday (0 = Sunday .. 6 = Saturday) in the rule.
    pub fn toggle_day(&mut self, day: u8) {
        self.recurring.toggle_day(day);
    }

    /// Clears everything entered by the user, keeping the identity.
    pub(crate) fn clear(&mut self) {
        let discord_name = std::mem::take(&mut self.discord_name);
        *self = Self::new(discord_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn autofills_end_date_on_first_start_date() {
        let mut form = FormState::new("100Dever#0001");
        form.set_initial_date(Some(date(10)));
        assert_eq!(form.final_date(), Some(date(10)));
    }

    #[test]
    fn keeps_an_already_edited_end_date() {
        let mut form = FormState::new("100Dever#0001");
        form.set_final_date(Some(date(20)));
        form.set_initial_date(Some(date(10)));
        assert_eq!(form.final_date(), Some(date(20)));
    }

    #[test]
    fn does_not_autofill_end_date_for_a_weekly_series() {
        let mut form = FormState::new("100Dever#0001");
        form.set_rate(RecurrenceRate::Weekly);
        form.toggle_day(2);
        form.set_initial_date(Some(date(10)));
        assert_eq!(form.final_date(), None);

        // The end date still has to be entered by hand.
        form.set_final_date(Some(date(17)));
        assert_eq!(form.final_date(), Some(date(17)));
    }

    #[test]
    fn changing_start_date_does_not_refill_end_date() {
        let mut form = FormState::new("100Dever#0001");
        form.set_initial_date(Some(date(10)));
        form.set_initial_date(Some(date(12)));
        assert_eq!(form.final_date(), Some(date(10)));
    }

    #[test]
    fn clear_keeps_the_identity() {
        let mut form = FormState::new("100Dever#0001");
        form.title = "Test Title".to_string();
        form.set_initial_date(Some(date(10)));
        form.set_rate(RecurrenceRate::Weekly);
        form.toggle_day(2);

        form.clear();
        assert_eq!(form.discord_name(), "100Dever#0001");
        assert!(form.title.is_empty());
        assert_eq!(form.initial_date(), None);
        assert_eq!(form.recurring(), &RecurrenceRule::default());
    }
}
