// SPDX-License-Identifier: MPL-2.0
//! State container of a collection list screen (users, products).
//!
//! The screen owns its controller (and therefore its toast queue), a
//! paginator, and the entity currently open in the detail view. Actions
//! delegate to the controller; this type only keeps the view state coherent
//! with the collection (page bounds, stale detail).

use crate::application::query::{PageInfo, PageSize, Paginator};
use crate::application::sync::{ListSyncController, SyncError};
use crate::application::validation::Validate;
use crate::domain::{Attachment, Entity};
use crate::ui::notifications::NotificationQueue;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<E> {
    pub item: E,
    pub favorited: bool,
}

#[derive(Debug)]
pub struct ListScreen<E: Entity> {
    controller: ListSyncController<E>,
    paginator: Paginator,
    detail: Option<E>,
}

impl<E> ListScreen<E>
where
    E: Entity,
    E::Patch: Validate,
    E::Draft: Validate,
{
    #[must_use]
    pub fn new(controller: ListSyncController<E>, page_size: PageSize) -> Self {
        Self {
            controller,
            paginator: Paginator::new(page_size),
            detail: None,
        }
    }

    /// Reloads the collection, keeping the current page in bounds.
    ///
    /// # Errors
    ///
    /// Propagates the controller error; the previous rows stay visible.
    pub async fn refresh(&mut self) -> Result<usize, SyncError> {
        let total = self.controller.load_all().await?;
        self.paginator.clamp(total);
        Ok(total)
    }

    /// Rows of the current page, in collection order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<E>> {
        let items = self.controller.items();
        let favorites = self.controller.favorites();
        self.paginator
            .page(&items)
            .iter()
            .map(|item| Row {
                favorited: favorites.contains(item.id()),
                item: item.clone(),
            })
            .collect()
    }

    /// Opens the detail view of `id` with fresh server data.
    ///
    /// # Errors
    ///
    /// Propagates the controller error; the previous detail stays open.
    pub async fn view(&mut self, id: &str) -> Result<&E, SyncError> {
        let entity = self.controller.fetch_detail(id).await?;
        Ok(self.detail.insert(entity))
    }

    #[must_use]
    pub fn detail(&self) -> Option<&E> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Current values of `id`, to prefill the edit modal.
    #[must_use]
    pub fn edit_form(&self, id: &str) -> Option<E::Patch> {
        self.controller.get(id).map(|item| item.as_patch())
    }

    /// Submits the edit modal.
    ///
    /// # Errors
    ///
    /// Propagates the controller error.
    pub async fn edit(
        &mut self,
        id: &str,
        patch: E::Patch,
        attachment: Option<Attachment>,
    ) -> Result<(), SyncError> {
        self.controller.apply_edit(id, patch, attachment).await?;
        if self.is_detail(id) {
            self.detail = self.controller.get(id);
        }
        Ok(())
    }

    /// Confirms a delete.
    ///
    /// # Errors
    ///
    /// Propagates the controller error; rows are unchanged on failure.
    pub async fn delete(&mut self, id: &str) -> Result<(), SyncError> {
        self.controller.apply_delete(id).await?;
        if self.is_detail(id) {
            self.detail = None;
        }
        self.paginator.clamp(self.controller.len());
        Ok(())
    }

    /// Toggles the favorite flag of a row.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Busy`] while another toggle is in flight.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, SyncError> {
        self.controller.toggle_favorite(id).await
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next(self.controller.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.paginator.previous()
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.paginator.info(self.controller.len())
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        self.controller.notifications()
    }

    #[must_use]
    pub fn controller(&self) -> &ListSyncController<E> {
        &self.controller
    }

    fn is_detail(&self, id: &str) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|detail| detail.id().as_str() == id.trim())
    }
}
