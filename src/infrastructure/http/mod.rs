// SPDX-License-Identifier: MPL-2.0
//! HTTP/JSON adapter for remote collections.
//!
//! - [`endpoints`]: URL templates per collection operation
//! - [`envelope`]: Response decoding and error normalization
//! - [`wire`]: Wire DTOs and their mapping to domain entities
//! - [`client`]: The `reqwest`-backed [`CollectionTransport`] implementation
//!
//! [`CollectionTransport`]: crate::application::port::CollectionTransport

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod wire;

pub use client::{build_client, ReqwestTransport};
pub use endpoints::Endpoints;
pub use wire::WireResource;
