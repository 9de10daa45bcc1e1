// SPDX-License-Identifier: MPL-2.0
//! Remote collection port definition.
//!
//! This module defines the [`CollectionTransport`] trait consumed by the list
//! synchronization controller, together with the single error type every
//! transport failure is normalized to.

use crate::domain::{Attachment, Entity, EntityId};
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Broad classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request could not be built (bad URL, bad attachment metadata).
    Request,
    /// The request never produced a response (DNS, connection, TLS...).
    Network,
    /// The server answered with a non-success status.
    Status,
    /// The response body was missing, not JSON, or not the expected shape.
    Decode,
}

/// A failed remote call.
///
/// Carries the server-supplied `message` when the response body had one, so
/// callers can show it verbatim and fall back to a generic text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    status: Option<u16>,
    server_message: Option<String>,
    detail: String,
}

impl FetchError {
    /// Creates an error for a request that could not be built.
    pub fn request(detail: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Request, None, None, detail)
    }

    /// Creates an error for a request that never got a response.
    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Network, None, None, detail)
    }

    /// Creates an error for a non-success HTTP status.
    pub fn status(status: u16, server_message: Option<String>) -> Self {
        Self::new(
            FetchErrorKind::Status,
            Some(status),
            server_message,
            format!("HTTP status {status}"),
        )
    }

    /// Creates an error for a malformed or missing response body.
    pub fn decode(detail: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Decode, None, None, detail)
    }

    fn new(
        kind: FetchErrorKind,
        status: Option<u16>,
        server_message: Option<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            status,
            server_message: server_message.filter(|m| !m.trim().is_empty()),
            detail: detail.into(),
        }
    }

    /// Returns the failure class.
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    /// Returns the HTTP status, if the server answered.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the message supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    /// Returns the diagnostic detail (meant for logs, not for users).
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the text to show the user: the server message when present,
    /// `fallback` otherwise.
    #[must_use]
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.server_message {
            Some(message) => write!(f, "{}: {message}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// Replies
// =============================================================================

/// A successful response: the optional server `message` and the decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub message: Option<String>,
    pub payload: T,
}

impl<T> Reply<T> {
    /// Wraps a payload without a server message.
    pub fn new(payload: T) -> Self {
        Self {
            message: None,
            payload,
        }
    }

    /// Attaches a server message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Reply of the toggle-favorite endpoint.
///
/// `favorited` is only set when the server states the resulting membership
/// explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteAck {
    pub message: Option<String>,
    pub favorited: Option<bool>,
}

// =============================================================================
// CollectionTransport Trait
// =============================================================================

/// Port for a remote collection resource.
///
/// Infrastructure adapters implement this trait over HTTP; tests implement it
/// in memory.
#[async_trait]
pub trait CollectionTransport<E: Entity>: Send + Sync {
    /// Fetches the whole collection.
    async fn list(&self) -> Result<Reply<Vec<E>>, FetchError>;

    /// Fetches a single entity.
    async fn detail(&self, id: &EntityId) -> Result<Reply<E>, FetchError>;

    /// Creates an entity. The server may echo the created entity.
    async fn create(
        &self,
        draft: &E::Draft,
        attachment: Option<&Attachment>,
    ) -> Result<Reply<Option<E>>, FetchError>;

    /// Updates an entity. The server may echo the fields it accepted; fields
    /// absent from the echo are `None` in the returned patch.
    async fn edit(
        &self,
        id: &EntityId,
        patch: &E::Patch,
        attachment: Option<&Attachment>,
    ) -> Result<Reply<Option<E::Patch>>, FetchError>;

    /// Deletes an entity.
    async fn delete(&self, id: &EntityId) -> Result<Reply<()>, FetchError>;

    /// Toggles the favorite flag of an entity.
    async fn toggle_favorite(&self, id: &EntityId) -> Result<FavoriteAck, FetchError>;
}
