// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`validation`]: Pre-flight checks run before any network activity
//! - [`sync`]: The list synchronization controller
//! - [`query`]: Read-side helpers (pagination)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Screen state containers use application layer services

pub mod port;
pub mod query;
pub mod sync;
pub mod validation;
