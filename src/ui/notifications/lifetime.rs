// SPDX-License-Identifier: MPL-2.0
//! Toast lifetime domain type.
//!
//! This module provides a type-safe wrapper for the delay after which a
//! toast removes itself.

use crate::config::{DEFAULT_TOAST_LIFETIME_MS, MAX_TOAST_LIFETIME_MS, MIN_TOAST_LIFETIME_MS};
use std::time::Duration;

/// Toast lifetime in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–60 seconds).
///
/// # Example
///
/// ```
/// use admin_console::ui::notifications::ToastLifetime;
///
/// let lifetime = ToastLifetime::new(4000);
/// assert_eq!(lifetime.millis(), 4000);
///
/// // Values outside range are clamped
/// let too_high = ToastLifetime::new(600_000);
/// assert_eq!(too_high.millis(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLifetime(u64);

impl ToastLifetime {
    /// Creates a new lifetime, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TOAST_LIFETIME_MS, MAX_TOAST_LIFETIME_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastLifetime {
    fn default() -> Self {
        Self(DEFAULT_TOAST_LIFETIME_MS)
    }
}
