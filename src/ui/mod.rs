// SPDX-License-Identifier: MPL-2.0
//! Presentation-side state shared by every screen.
//!
//! - [`notifications`] - Toast notification queue for user feedback

pub mod notifications;
