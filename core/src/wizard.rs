// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Local;

use crate::config::Config;
use crate::error::SubmitError;
use crate::form::FormState;
use crate::payload::assemble;
use crate::service::{EventSink, EventTransport};
use crate::validate::validate;

/// The four stations of the event-creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Description,
    Schedule,
    Confirm,
    Success,
}

impl Step {
    /// The 1-based step number shown in the UI.
    pub fn number(self) -> u8 {
        match self {
            Step::Description => 1,
            Step::Schedule => 2,
            Step::Confirm => 3,
            Step::Success => 4,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Description => Some(Step::Schedule),
            Step::Schedule => Some(Step::Confirm),
            Step::Confirm => Some(Step::Success),
            Step::Success => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Description => None,
            Step::Schedule => Some(Step::Description),
            Step::Confirm => Some(Step::Schedule),
            Step::Success => Some(Step::Confirm),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
}

/// Drives one event-creation session: gates forward navigation on
/// validation, lets backward navigation through unconditionally, and runs
/// the submission pipeline on the final transition.
///
/// The session owns its [`FormState`]; dropping the wizard (or the future
/// returned by [`advance`](Wizard::advance)) while a submission is in flight
/// discards the result — the form and step stay as they were, and the
/// session keeps accepting calls.
pub struct Wizard<T: EventTransport, S: EventSink> {
    config: Config,
    form: FormState,
    step: Step,
    phase: Phase,
    description_errors: Vec<String>,
    schedule_errors: Vec<String>,
    transport: T,
    sink: S,
}

impl<T: EventTransport, S: EventSink> Wizard<T, S> {
    /// Opens a fresh session for the authenticated user.
    pub fn new(config: Config, discord_name: impl Into<String>, transport: T, sink: S) -> Self {
        Self {
            config,
            form: FormState::new(discord_name),
            step: Step::Description,
            phase: Phase::Idle,
            description_errors: Vec::new(),
            schedule_errors: Vec::new(),
            transport,
            sink,
        }
    }

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The session's form.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access to the session's form, for field edits.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// The validation messages recorded for a step on its last attempted
    /// advance, in rule order.
    pub fn errors(&self, step: Step) -> &[String] {
        match step {
            Step::Description => &self.description_errors,
            Step::Schedule => &self.schedule_errors,
            Step::Confirm | Step::Success => &[],
        }
    }

    /// Validates the current step and moves forward if it is clean; past the
    /// last step this is a no-op. Returns the step the wizard is on after
    /// the call, so a blocked advance reports the unchanged step and leaves
    /// its messages in [`errors`](Wizard::errors).
    ///
    /// Leaving the confirm step submits the event: the payload is assembled,
    /// sent through the transport, and the created events are handed to the
    /// sink before the move commits. On a transport failure the wizard stays
    /// on the confirm step, the form untouched, and the error is returned.
    #[tracing::instrument(skip(self))]
    pub async fn advance(&mut self) -> Result<Step, SubmitError> {
        if self.phase == Phase::Submitting {
            return Err(SubmitError::SubmissionInFlight);
        }
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };

        let errors = validate(self.step, &self.form, &self.config);
        if !errors.is_empty() {
            tracing::debug!(step = self.step.number(), count = errors.len(), "advance blocked");
            self.set_errors(self.step, errors);
            return Ok(self.step);
        }
        self.set_errors(self.step, Vec::new());

        if next == Step::Success {
            self.submit().await?;
        }
        self.step = next;
        Ok(self.step)
    }

    /// Moves one step back, without validation and without touching the
    /// recorded errors or the form. A no-op on the first step and while a
    /// submission is in flight. Returns the resulting step.
    pub fn retreat(&mut self) -> Step {
        if self.phase == Phase::Submitting {
            return self.step;
        }
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Resets to a fresh session after success: first step, cleared errors
    /// and fields, default recurrence. The identity is retained.
    pub fn reset(&mut self) {
        self.form.clear();
        self.description_errors.clear();
        self.schedule_errors.clear();
        self.step = Step::Description;
        self.phase = Phase::Idle;
    }

    fn set_errors(&mut self, step: Step, errors: Vec<String>) {
        match step {
            Step::Description => self.description_errors = errors,
            Step::Schedule => self.schedule_errors = errors,
            Step::Confirm | Step::Success => (),
        }
    }

    async fn submit(&mut self) -> Result<(), SubmitError> {
        let payload = assemble(&self.form, &Local)?;

        self.phase = Phase::Submitting;
        // The guard restores `Idle` on every exit path, including the
        // in-flight future being dropped at the await below.
        let guard = PhaseReset(&mut self.phase);
        let result = self.transport.create(&payload).await;
        drop(guard);

        let response = result.map_err(|e| {
            tracing::warn!(error = %e, "event submission failed");
            SubmitError::from(e)
        })?;

        tracing::debug!(events = response.events.len(), "event submission accepted");
        self.sink.add_events(response.events).await;
        Ok(())
    }
}

struct PhaseReset<'a>(&'a mut Phase);

impl Drop for PhaseReset<'_> {
    fn drop(&mut self) {
        *self.0 = Phase::Idle;
    }
}
