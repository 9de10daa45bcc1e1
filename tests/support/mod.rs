// SPDX-License-Identifier: MPL-2.0
//! Scripted in-memory transport shared by the integration tests.

#![allow(dead_code)]

use admin_console::application::port::{CollectionTransport, FavoriteAck, FetchError, Reply};
use admin_console::application::sync::ListSyncController;
use admin_console::application::validation::Validate;
use admin_console::config::Config;
use admin_console::domain::{Attachment, Entity, EntityId};
use admin_console::i18n::fluent::I18n;
use admin_console::ui::notifications::NotificationQueue;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Canned results, returned (cloned) on every call.
pub struct Script<E: Entity> {
    pub list: Result<Reply<Vec<E>>, FetchError>,
    pub detail: Result<Reply<E>, FetchError>,
    pub create: Result<Reply<Option<E>>, FetchError>,
    pub edit: Result<Reply<Option<E::Patch>>, FetchError>,
    pub delete: Result<Reply<()>, FetchError>,
    pub favorite: Result<FavoriteAck, FetchError>,
}

impl<E: Entity> Default for Script<E> {
    fn default() -> Self {
        Self {
            list: Ok(Reply::new(Vec::new())),
            detail: Err(FetchError::status(404, None)),
            create: Ok(Reply::new(None)),
            edit: Ok(Reply::new(None)),
            delete: Ok(Reply::new(())),
            favorite: Ok(FavoriteAck::default()),
        }
    }
}

pub struct FakeTransport<E: Entity> {
    script: Mutex<Script<E>>,
    calls: AtomicUsize,
    edits: Mutex<Vec<(EntityId, E::Patch)>>,
    list_gate: Mutex<Option<Arc<Notify>>>,
    favorite_gate: Mutex<Option<Arc<Notify>>>,
    panic_on_delete: AtomicBool,
}

impl<E: Entity> FakeTransport<E> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(Script::default()),
            calls: AtomicUsize::new(0),
            edits: Mutex::new(Vec::new()),
            list_gate: Mutex::new(None),
            favorite_gate: Mutex::new(None),
            panic_on_delete: AtomicBool::new(false),
        })
    }

    pub fn script(&self, f: impl FnOnce(&mut Script<E>)) {
        f(&mut self.script.lock().unwrap());
    }

    /// Number of transport calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn edits(&self) -> Vec<(EntityId, E::Patch)> {
        self.edits.lock().unwrap().clone()
    }

    /// Holds every list call until the returned handle is notified.
    pub fn gate_lists(&self) -> Arc<Notify> {
        install_gate(&self.list_gate)
    }

    /// Holds every favorite toggle until the returned handle is notified.
    pub fn gate_favorites(&self) -> Arc<Notify> {
        install_gate(&self.favorite_gate)
    }

    pub fn panic_on_delete(&self) {
        self.panic_on_delete.store(true, Ordering::SeqCst);
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<E: Entity> CollectionTransport<E> for FakeTransport<E> {
    async fn list(&self) -> Result<Reply<Vec<E>>, FetchError> {
        self.record();
        wait_at(&self.list_gate).await;
        self.script.lock().unwrap().list.clone()
    }

    async fn detail(&self, _id: &EntityId) -> Result<Reply<E>, FetchError> {
        self.record();
        self.script.lock().unwrap().detail.clone()
    }

    async fn create(
        &self,
        _draft: &E::Draft,
        _attachment: Option<&Attachment>,
    ) -> Result<Reply<Option<E>>, FetchError> {
        self.record();
        self.script.lock().unwrap().create.clone()
    }

    async fn edit(
        &self,
        id: &EntityId,
        patch: &E::Patch,
        _attachment: Option<&Attachment>,
    ) -> Result<Reply<Option<E::Patch>>, FetchError> {
        self.record();
        self.edits.lock().unwrap().push((id.clone(), patch.clone()));
        self.script.lock().unwrap().edit.clone()
    }

    async fn delete(&self, _id: &EntityId) -> Result<Reply<()>, FetchError> {
        self.record();
        if self.panic_on_delete.load(Ordering::SeqCst) {
            panic!("transport exploded");
        }
        self.script.lock().unwrap().delete.clone()
    }

    async fn toggle_favorite(&self, _id: &EntityId) -> Result<FavoriteAck, FetchError> {
        self.record();
        wait_at(&self.favorite_gate).await;
        self.script.lock().unwrap().favorite.clone()
    }
}

fn install_gate(slot: &Mutex<Option<Arc<Notify>>>) -> Arc<Notify> {
    let gate = Arc::new(Notify::new());
    *slot.lock().unwrap() = Some(Arc::clone(&gate));
    gate
}

async fn wait_at(slot: &Mutex<Option<Arc<Notify>>>) {
    let gate = slot.lock().unwrap().clone();
    if let Some(gate) = gate {
        gate.notified().await;
    }
}

pub fn english() -> Arc<I18n> {
    Arc::new(I18n::new(Some("en-US".to_string()), &Config::default()))
}

/// A controller over `transport` with an English catalog and a fresh queue.
pub fn controller<E>(transport: &Arc<FakeTransport<E>>) -> ListSyncController<E>
where
    E: Entity,
    E::Patch: Validate,
    E::Draft: Validate,
{
    let transport: Arc<dyn CollectionTransport<E>> = transport.clone();
    ListSyncController::new(transport, NotificationQueue::new(), english())
}

/// Texts of the visible toasts, oldest first.
pub fn toast_texts(queue: &NotificationQueue) -> Vec<String> {
    queue.visible().iter().map(|t| t.text().to_owned()).collect()
}
