// SPDX-License-Identifier: MPL-2.0
//! Admin user entity.

use super::entity::{merge_text, Entity, EntityId, EntityKind};

/// A user account as listed on the users screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
}

impl User {
    /// Creates a user with the required fields; optional ones start empty.
    pub fn new(id: EntityId, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            phone_number: String::new(),
            role: String::new(),
        }
    }
}

/// Independently editable user fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
}

impl UserPatch {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.role.is_none()
    }
}

/// Payload of the signup / "add admin user" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

impl Entity for User {
    type Patch = UserPatch;
    type Draft = NewUser;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn merge(&mut self, patch: &UserPatch) {
        merge_text(&mut self.full_name, patch.full_name.as_ref());
        merge_text(&mut self.email, patch.email.as_ref());
        merge_text(&mut self.phone_number, patch.phone_number.as_ref());
        merge_text(&mut self.role, patch.role.as_ref());
    }

    fn as_patch(&self) -> UserPatch {
        UserPatch {
            full_name: Some(self.full_name.clone()),
            email: Some(self.email.clone()),
            phone_number: Some(self.phone_number.clone()),
            role: Some(self.role.clone()),
        }
    }
}
