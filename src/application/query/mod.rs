// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These helpers do not modify list state; they provide read-only views of it.
//!
//! # Available Services
//!
//! - [`pagination`]: Page slicing for list screens (`Paginator`)

pub mod pagination;

pub use pagination::{PageInfo, PageSize, Paginator};
