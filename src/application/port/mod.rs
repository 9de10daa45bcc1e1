// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, ensuring the application layer remains
//! independent of the HTTP stack.
//!
//! # Available Ports
//!
//! - [`collection`]: Remote collection endpoints (list, detail, create, edit,
//!   delete, toggle-favorite)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so controllers can run requests on spawned tasks
//! - Methods are `async` (via `async-trait`) and return [`FetchError`] on any
//!   transport, status or decoding failure

pub mod collection;

pub use collection::{CollectionTransport, FavoriteAck, FetchError, FetchErrorKind, Reply};
