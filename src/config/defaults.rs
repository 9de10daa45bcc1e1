// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Remote endpoint location and client identity
//! - **Notifications**: Toast expiry delay
//! - **Lists**: Pagination of list screens

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL every collection endpoint is resolved against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("AdminConsole/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed by the HTTP client.
pub const MAX_REDIRECTS: usize = 10;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay after which a toast removes itself (in milliseconds).
pub const DEFAULT_TOAST_LIFETIME_MS: u64 = 4000;

/// Minimum toast lifetime (in milliseconds).
pub const MIN_TOAST_LIFETIME_MS: u64 = 500;

/// Maximum toast lifetime (in milliseconds).
pub const MAX_TOAST_LIFETIME_MS: u64 = 60_000;

// ==========================================================================
// List Defaults
// ==========================================================================

/// Default number of rows per page on list screens.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum rows per page.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum rows per page.
pub const MAX_PAGE_SIZE: usize = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_LIFETIME_MS > 0);
    assert!(MAX_TOAST_LIFETIME_MS >= MIN_TOAST_LIFETIME_MS);
    assert!(DEFAULT_TOAST_LIFETIME_MS >= MIN_TOAST_LIFETIME_MS);
    assert!(DEFAULT_TOAST_LIFETIME_MS <= MAX_TOAST_LIFETIME_MS);

    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    assert!(MAX_REDIRECTS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_LIFETIME_MS, 4000);
        assert!(DEFAULT_TOAST_LIFETIME_MS >= MIN_TOAST_LIFETIME_MS);
        assert!(DEFAULT_TOAST_LIFETIME_MS <= MAX_TOAST_LIFETIME_MS);
    }

    #[test]
    fn page_size_defaults_are_valid() {
        assert_eq!(DEFAULT_PAGE_SIZE, 10);
        assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    }

    #[test]
    fn base_url_ends_with_slash() {
        assert!(DEFAULT_BASE_URL.ends_with('/'));
    }
}
