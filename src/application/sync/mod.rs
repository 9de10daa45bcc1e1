// SPDX-License-Identifier: MPL-2.0
//! Keeps a local ordered collection loosely synchronized with a remote one.
//!
//! Every mutation is a two-phase protocol: issue the network call, then apply
//! the local effect only once the server confirmed it. Outcomes are reported
//! both as a `Result` and as one toast on the screen's notification queue.

mod controller;
mod error;

pub use controller::ListSyncController;
pub use error::SyncError;
