// SPDX-License-Identifier: MPL-2.0
//! `admin_console` is the client core of a small administration front end.
//!
//! It keeps paginated user and product lists in sync with a REST backend and
//! reports every outcome through transient toast notifications, with
//! localized messages and file-based preferences.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
