// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification queue following
//! toast/snackbar UX patterns. Notifications inform users about the outcome
//! of an action (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its kind
//! - [`queue`] - `NotificationQueue` for ordering and timed expiry
//! - [`lifetime`] - `ToastLifetime`, the validated expiry delay
//!
//! # Usage
//!
//! ```ignore
//! use admin_console::ui::notifications::{NotificationQueue, ToastKind};
//!
//! let queue = NotificationQueue::new();
//! let id = queue.push("User updated successfully", ToastKind::Success);
//!
//! // Render `queue.visible()`, or watch `queue.subscribe()` for changes.
//! queue.dismiss(id);
//! ```
//!
//! # Design Considerations
//!
//! - Every toast expires after the same fixed delay (4s by default)
//! - Display order is insertion order; no cap and no de-duplication

mod lifetime;
mod notification;
mod queue;

pub use lifetime::ToastLifetime;
pub use notification::{Notification, NotificationId, ToastKind};
pub use queue::NotificationQueue;
