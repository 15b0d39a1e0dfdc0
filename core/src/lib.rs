// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

mod config;
mod datetime;
mod error;
mod form;
mod payload;
mod recurrence;
mod service;
mod validate;
mod wizard;

pub use crate::config::Config;
pub use crate::datetime::{combine, utc_local_day_offset};
pub use crate::error::SubmitError;
pub use crate::form::FormState;
pub use crate::payload::{RecurringPayload, SubmissionPayload, assemble};
pub use crate::recurrence::{RecurrenceRate, RecurrenceRule, encode};
pub use crate::service::{CreateResponse, CreatedEvent, EventSink, EventTransport, TransportError};
pub use crate::validate::validate;
pub use crate::wizard::{Step, Wizard};
