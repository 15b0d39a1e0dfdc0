// SPDX-FileCopyrightText: 2026 Commcal Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Boundary contracts for the external collaborators. The core never talks
//! HTTP itself; a client crate implements these traits.

use std::fmt;

use async_trait::async_trait;

use crate::payload::SubmissionPayload;

/// A created-event record as returned by the backend. Its document shape
/// belongs to the persistence layer; the core forwards it to the sink
/// untouched.
pub type CreatedEvent = serde_json::Value;

/// Successful response of the event-creation endpoint: the concrete events
/// the backend expanded the submitted rule into.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateResponse {
    /// The created events, in occurrence order.
    pub events: Vec<CreatedEvent>,
}

/// Failure reported by the transport collaborator.
#[non_exhaustive]
#[derive(Debug)]
pub enum TransportError {
    /// The backend could not be reached.
    Network(String),

    /// The backend answered but rejected the request.
    Rejected(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Rejected(e) => write!(f, "request rejected: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Client for the event-creation endpoint. Called exactly once per
/// successful submit transition; the core never retries on its own.
#[async_trait]
pub trait EventTransport {
    /// Submits the payload and returns the created-event records.
    async fn create(&self, payload: &SubmissionPayload) -> Result<CreateResponse, TransportError>;
}

/// Receiver for created-event records after a successful submission, so they
/// can be reflected elsewhere (e.g. the calendar view). The core's
/// responsibility ends at this call.
#[async_trait]
pub trait EventSink {
    /// Accepts the created events.
    async fn add_events(&mut self, events: Vec<CreatedEvent>);
}
