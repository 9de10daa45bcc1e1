// SPDX-License-Identifier: MPL-2.0
//! Entity identity and the merge contract shared by every listed resource.
//!
//! Remote collections tolerate two spellings of the identifier field. They
//! are resolved once at the ingestion boundary into an [`EntityId`]; the rest
//! of the crate only ever sees the canonical form.

use std::fmt;

/// Error returned when an identifier is empty or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingId;

impl fmt::Display for MissingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "identifier is missing")
    }
}

impl std::error::Error for MissingId {}

/// Canonical identifier of a remote entity.
///
/// This newtype enforces validity at the type level: an `EntityId` is never
/// empty and never carries surrounding whitespace.
///
/// # Example
///
/// ```
/// use admin_console::domain::EntityId;
///
/// let id = EntityId::parse(" 42 ").unwrap();
/// assert_eq!(id.as_str(), "42");
/// assert!(EntityId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    /// Parses a raw identifier, rejecting empty or blank input.
    ///
    /// # Errors
    ///
    /// Returns [`MissingId`] when the trimmed input is empty.
    pub fn parse(raw: &str) -> Result<Self, MissingId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MissingId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which collection an entity belongs to. Used to pick message labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Product,
}

impl EntityKind {
    /// Returns the i18n key naming this kind of entity.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            EntityKind::User => "entity-user",
            EntityKind::Product => "entity-product",
        }
    }
}

/// Contract for an item held in a synchronized list.
///
/// `Patch` carries independently editable fields, each optional. `Draft` is
/// the payload of a creation form.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Partial update where `None` means "leave unchanged".
    type Patch: Clone + fmt::Debug + Default + Send + Sync + 'static;
    /// Creation payload.
    type Draft: Clone + fmt::Debug + Default + Send + Sync + 'static;

    /// Collection this entity belongs to.
    const KIND: EntityKind;

    /// Canonical identifier.
    fn id(&self) -> &EntityId;

    /// Applies a patch with field-level fallback: a missing or blank incoming
    /// value keeps the prior one.
    fn merge(&mut self, patch: &Self::Patch);

    /// Every mutable field of this entity expressed as a patch (edit form
    /// prefill).
    fn as_patch(&self) -> Self::Patch;
}

/// Merges one optional text field, ignoring `None` and blank values.
pub fn merge_text(target: &mut String, incoming: Option<&String>) {
    if let Some(value) = incoming.filter(|v| !v.trim().is_empty()) {
        target.clone_from(value);
    }
}

/// Merges one optional non-text field, ignoring `None`.
pub fn merge_field<T: Clone>(target: &mut T, incoming: Option<&T>) {
    if let Some(value) = incoming {
        target.clone_from(value);
    }
}
