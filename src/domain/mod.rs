// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains the entities managed by the console and the value
//! objects they are built from. It has no dependencies on external crates
//! (except `std`) so that list-synchronization rules stay testable without
//! a network stack.
//!
//! # Modules
//!
//! - [`entity`]: Canonical identifiers and the [`Entity`](entity::Entity) contract
//! - [`user`]: Admin users ([`User`](user::User), [`UserPatch`](user::UserPatch),
//!   [`NewUser`](user::NewUser))
//! - [`product`]: Catalog products ([`Product`](product::Product),
//!   [`ProductPatch`](product::ProductPatch), [`NewProduct`](product::NewProduct))
//! - [`attachment`]: Opaque binary uploads ([`Attachment`](attachment::Attachment))

pub mod attachment;
pub mod entity;
pub mod product;
pub mod user;

pub use attachment::Attachment;
pub use entity::{merge_field, merge_text, Entity, EntityId, EntityKind, MissingId};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User, UserPatch};
