// SPDX-License-Identifier: MPL-2.0
//! State container of a creation form (signup / add admin user, add product).

use crate::application::sync::{ListSyncController, SyncError};
use crate::application::validation::Validate;
use crate::domain::{Attachment, Entity};
use crate::ui::notifications::NotificationQueue;

#[derive(Debug)]
pub struct FormScreen<E: Entity> {
    controller: ListSyncController<E>,
    draft: E::Draft,
    attachment: Option<Attachment>,
}

impl<E> FormScreen<E>
where
    E: Entity,
    E::Patch: Validate,
    E::Draft: Validate,
{
    #[must_use]
    pub fn new(controller: ListSyncController<E>) -> Self {
        Self {
            controller,
            draft: E::Draft::default(),
            attachment: None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    /// Field state bound to the form inputs.
    pub fn draft_mut(&mut self) -> &mut E::Draft {
        &mut self.draft
    }

    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
        self.attachment = attachment;
    }

    /// Validates and sends the form. On success the fields are cleared;
    /// on failure they are kept so the user can correct them.
    ///
    /// # Errors
    ///
    /// Propagates the controller error.
    pub async fn submit(&mut self) -> Result<Option<E>, SyncError> {
        let result = self
            .controller
            .create(self.draft.clone(), self.attachment.clone())
            .await;
        if result.is_ok() {
            self.draft = E::Draft::default();
            self.attachment = None;
        }
        result
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        self.controller.notifications()
    }
}
