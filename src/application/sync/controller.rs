// SPDX-License-Identifier: MPL-2.0
use super::SyncError;
use crate::application::port::CollectionTransport;
use crate::application::validation::{require_id, Validate};
use crate::domain::{Attachment, Entity, EntityId};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::NotificationQueue;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, warn};

/// Mediates between a remote collection endpoint and a local ordered list.
///
/// The controller is a cheap handle: clones share the same local state, so
/// operations on different ids can run concurrently. The last one to complete
/// wins on local state. Favorite toggles are serialized through a single
/// system-wide slot.
///
/// Each operation runs to completion on a spawned task. Dropping the caller's
/// future (e.g., closing a modal) neither aborts the request nor skips the
/// local apply.
pub struct ListSyncController<E: Entity> {
    shared: Arc<Shared<E>>,
}

struct Shared<E: Entity> {
    transport: Arc<dyn CollectionTransport<E>>,
    notifications: NotificationQueue,
    i18n: Arc<I18n>,
    state: Mutex<SyncState<E>>,
}

struct SyncState<E> {
    items: Vec<E>,
    /// Client-only favorite membership.
    favorites: HashSet<EntityId>,
    /// Id whose favorite toggle is in flight, if any.
    favoriting: Option<EntityId>,
    /// Number of `load_all` calls in flight.
    loading: usize,
}

impl<E> Default for SyncState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            favorites: HashSet::new(),
            favoriting: None,
            loading: 0,
        }
    }
}

impl<E: Entity> Clone for ListSyncController<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<E: Entity> fmt::Debug for ListSyncController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_state(|state| {
            f.debug_struct("ListSyncController")
                .field("kind", &E::KIND)
                .field("items", &state.items.len())
                .field("favorites", &state.favorites.len())
                .field("favoriting", &state.favoriting)
                .field("loading", &state.loading)
                .finish()
        })
    }
}

/// Runs a state reset when dropped, including on panic inside a task.
struct Release<E: Entity> {
    shared: Arc<Shared<E>>,
    reset: fn(&mut SyncState<E>),
}

impl<E: Entity> Drop for Release<E> {
    fn drop(&mut self) {
        let mut state = self.shared.state();
        (self.reset)(&mut state);
    }
}

impl<E: Entity> Shared<E> {
    fn state(&self) -> MutexGuard<'_, SyncState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> ListSyncController<E>
where
    E: Entity,
    E::Patch: Validate,
    E::Draft: Validate,
{
    /// Creates a controller with an empty local collection.
    pub fn new(
        transport: Arc<dyn CollectionTransport<E>>,
        notifications: NotificationQueue,
        i18n: Arc<I18n>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                transport,
                notifications,
                i18n,
                state: Mutex::new(SyncState::default()),
            }),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replaces the local collection with the server's.
    ///
    /// On failure the previous collection is kept. Favorites whose entity
    /// disappeared are dropped. Returns the number of items loaded.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Fetch`] if the request fails.
    pub async fn load_all(&self) -> Result<usize, SyncError> {
        self.with_state(|state| state.loading += 1);
        let loading = self.release(|state| state.loading = state.loading.saturating_sub(1));
        let this = self.clone();
        self.run(async move {
            let _loading = loading;
            let reply = this
                .shared
                .transport
                .list()
                .await
                .map_err(|err| this.fail(err.into()))?;

            let count = reply.payload.len();
            this.with_state(|state| {
                state.items = reply.payload;
                let SyncState {
                    items, favorites, ..
                } = state;
                favorites.retain(|id| items.iter().any(|item| item.id() == id));
            });
            debug!(kind = ?E::KIND, count, "collection loaded");
            Ok(count)
        })
        .await
    }

    /// Fetches one entity for the detail view. The local list is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] for an empty id, or
    /// [`SyncError::Fetch`] if the request fails.
    pub async fn fetch_detail(&self, id: &str) -> Result<E, SyncError> {
        let id = self.checked_id(id)?;
        let this = self.clone();
        self.run(async move {
            let reply = this
                .shared
                .transport
                .detail(&id)
                .await
                .map_err(|err| this.fail(err.into()))?;
            Ok(reply.payload)
        })
        .await
    }

    /// Creates an entity on the server.
    ///
    /// The new entity is not inserted locally; it shows up on the next
    /// [`load_all`](Self::load_all). Returns the entity if the server echoed it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] if the draft is invalid, or
    /// [`SyncError::Fetch`] if the request fails.
    pub async fn create(
        &self,
        draft: E::Draft,
        attachment: Option<Attachment>,
    ) -> Result<Option<E>, SyncError> {
        if let Err(err) = draft.validate() {
            return Err(self.fail(err.into()));
        }
        let this = self.clone();
        self.run(async move {
            let reply = this
                .shared
                .transport
                .create(&draft, attachment.as_ref())
                .await
                .map_err(|err| this.fail(err.into()))?;
            this.notify_success(reply.message.as_deref(), "toast-created");
            Ok(reply.payload)
        })
        .await
    }

    /// Updates an entity and merges the accepted fields into the local item.
    ///
    /// The fields echoed by the server are merged when present, otherwise the
    /// patch that was sent. Fields the echo leaves out, and blank ones, keep
    /// their prior value.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] for an empty id or an invalid patch
    /// (no network call is made), or [`SyncError::Fetch`] if the request fails.
    pub async fn apply_edit(
        &self,
        id: &str,
        patch: E::Patch,
        attachment: Option<Attachment>,
    ) -> Result<(), SyncError> {
        let id = self.checked_id(id)?;
        if let Err(err) = patch.validate() {
            return Err(self.fail(err.into()));
        }
        let this = self.clone();
        self.run(async move {
            let reply = this
                .shared
                .transport
                .edit(&id, &patch, attachment.as_ref())
                .await
                .map_err(|err| this.fail(err.into()))?;

            let accepted = reply.payload.unwrap_or(patch);
            let merged = this.with_state(|state| {
                state
                    .items
                    .iter_mut()
                    .find(|item| item.id() == &id)
                    .map(|item| item.merge(&accepted))
                    .is_some()
            });
            if !merged {
                warn!(kind = ?E::KIND, %id, "edited entity is not in the local collection");
            }
            this.notify_success(reply.message.as_deref(), "toast-updated");
            Ok(())
        })
        .await
    }

    /// Deletes an entity and removes it from the local collection and from
    /// the favorites.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] for an empty id (no network call is
    /// made), or [`SyncError::Fetch`] if the request fails.
    pub async fn apply_delete(&self, id: &str) -> Result<(), SyncError> {
        let id = self.checked_id(id)?;
        let this = self.clone();
        self.run(async move {
            let reply = this
                .shared
                .transport
                .delete(&id)
                .await
                .map_err(|err| this.fail(err.into()))?;

            let removed = this.with_state(|state| {
                state.favorites.remove(&id);
                let position = state.items.iter().position(|item| item.id() == &id);
                position.map(|pos| state.items.remove(pos)).is_some()
            });
            if !removed {
                warn!(kind = ?E::KIND, %id, "deleted entity is not in the local collection");
            }
            this.notify_success(reply.message.as_deref(), "toast-deleted");
            Ok(())
        })
        .await
    }

    /// Toggles the favorite membership of an entity.
    ///
    /// Only one toggle may be in flight at a time, whatever the id; a second
    /// request is rejected with [`SyncError::Busy`] without a toast. When the
    /// server states the resulting membership it is applied as is, otherwise
    /// the local membership is flipped. Returns the new membership.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Busy`], [`SyncError::Validation`] for an empty id,
    /// or [`SyncError::Fetch`] if the request fails.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, SyncError> {
        let id = self.checked_id(id)?;
        let claimed = self.with_state(|state| {
            if state.favoriting.is_some() {
                return false;
            }
            state.favoriting = Some(id.clone());
            true
        });
        if !claimed {
            debug!(kind = ?E::KIND, %id, "favorite toggle rejected, another one is in flight");
            return Err(SyncError::Busy);
        }
        let slot = self.release(|state| state.favoriting = None);

        let this = self.clone();
        self.run(async move {
            let _slot = slot;
            let ack = this
                .shared
                .transport
                .toggle_favorite(&id)
                .await
                .map_err(|err| this.fail(err.into()))?;

            let favorited = this.with_state(|state| {
                let favorited = ack
                    .favorited
                    .unwrap_or_else(|| !state.favorites.contains(&id));
                if favorited {
                    state.favorites.insert(id.clone());
                } else {
                    state.favorites.remove(&id);
                }
                favorited
            });
            let key = if favorited {
                "toast-favorite-added"
            } else {
                "toast-favorite-removed"
            };
            this.notify_success(ack.message.as_deref(), key);
            Ok(favorited)
        })
        .await
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Returns a snapshot of the local collection in server order.
    #[must_use]
    pub fn items(&self) -> Vec<E> {
        self.with_state(|state| state.items.clone())
    }

    /// Returns the local item with this id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<E> {
        let id = id.trim();
        self.with_state(|state| {
            state
                .items
                .iter()
                .find(|item| item.id().as_str() == id)
                .cloned()
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.with_state(|state| state.items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_state(|state| state.items.is_empty())
    }

    /// Returns a snapshot of the favorite ids.
    #[must_use]
    pub fn favorites(&self) -> HashSet<EntityId> {
        self.with_state(|state| state.favorites.clone())
    }

    #[must_use]
    pub fn is_favorited(&self, id: &str) -> bool {
        let id = id.trim();
        self.with_state(|state| state.favorites.iter().any(|fav| fav.as_str() == id))
    }

    /// Returns `true` while any [`load_all`](Self::load_all) is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.with_state(|state| state.loading > 0)
    }

    /// Returns the id whose favorite toggle is in flight.
    #[must_use]
    pub fn favoriting(&self) -> Option<EntityId> {
        self.with_state(|state| state.favoriting.clone())
    }

    /// Returns the queue outcomes are reported to.
    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.shared.notifications
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn checked_id(&self, raw: &str) -> Result<EntityId, SyncError> {
        require_id(raw).map_err(|err| self.fail(err.into()))
    }

    /// Runs `operation` on its own task and waits for it.
    async fn run<T, F>(&self, operation: F) -> Result<T, SyncError>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, SyncError>> + Send + 'static,
    {
        match tokio::spawn(operation).await {
            Ok(result) => result,
            Err(join_error) => {
                error!(kind = ?E::KIND, error = %join_error, "list operation aborted");
                Err(self.fail(SyncError::Unknown(join_error.to_string())))
            }
        }
    }

    /// Logs the failure and reports it as an error toast.
    fn fail(&self, err: SyncError) -> SyncError {
        let i18n = &self.shared.i18n;
        let entity = i18n.tr(E::KIND.label_key());
        let generic = i18n.tr("error-generic");
        let text = match &err {
            SyncError::Validation(validation) => {
                debug!(kind = ?E::KIND, error = %validation, "rejected before sending");
                let field = validation.field_key().map(|key| i18n.tr(key));
                i18n.tr_with_args(
                    validation.i18n_key(),
                    &[
                        ("entity", entity.as_str()),
                        ("field", field.as_deref().unwrap_or_default()),
                    ],
                )
            }
            SyncError::Fetch(fetch) => {
                warn!(kind = ?E::KIND, error = %fetch, "request failed");
                fetch.user_message(&generic).to_owned()
            }
            SyncError::Unknown(_) => generic,
            SyncError::Busy => return err,
        };
        self.shared.notifications.error(text);
        err
    }

    fn notify_success(&self, server_message: Option<&str>, key: &str) {
        let text = match server_message.filter(|m| !m.trim().is_empty()) {
            Some(message) => message.to_owned(),
            None => {
                let entity = self.shared.i18n.tr(E::KIND.label_key());
                self.shared
                    .i18n
                    .tr_with_args(key, &[("entity", entity.as_str())])
            }
        };
        self.shared.notifications.success(text);
    }
}

impl<E: Entity> ListSyncController<E> {
    fn with_state<R>(&self, f: impl FnOnce(&mut SyncState<E>) -> R) -> R {
        let mut state = self.shared.state();
        f(&mut state)
    }

    fn release(&self, reset: fn(&mut SyncState<E>)) -> Release<E> {
        Release {
            shared: Arc::clone(&self.shared),
            reset,
        }
    }
}
