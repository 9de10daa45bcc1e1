// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`http`]: Remote collections over HTTP/JSON (implements [`CollectionTransport`])
//!
//! [`CollectionTransport`]: crate::application::port::CollectionTransport

pub mod http;

pub use http::{build_client, Endpoints, ReqwestTransport, WireResource};
