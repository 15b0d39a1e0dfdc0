// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::service::TransportError;

/// Errors surfaced by the submit transition.
///
/// Validation problems are not errors: they are ordinary return values of
/// [`validate`](crate::validate) that block a step change.
#[non_exhaustive]
#[derive(Debug)]
pub enum SubmitError {
    /// The transport collaborator rejected or failed the request. The wizard
    /// stays on the confirm step so the user can retry.
    Transport(String),

    /// A submission is already in flight for this session.
    SubmissionInFlight,

    /// A field that validation guarantees was missing or inconsistent at
    /// assembly time. Not expected in correct operation.
    Invariant(&'static str),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "submission failed: {e}"),
            Self::SubmissionInFlight => write!(f, "a submission is already in flight"),
            Self::Invariant(what) => write!(f, "invariant violated: {what}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e.to_string())
    }
}
