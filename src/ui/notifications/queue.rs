// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationQueue` keeps the ordered list of active toasts and arms
//! one expiry timer per toast. A manual dismissal cancels that timer.

use super::lifetime::ToastLifetime;
use super::notification::{Notification, NotificationId, ToastKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Ordered, self-expiring list of toasts.
///
/// The queue is a cheap handle: clones share the same entries, so the
/// controller that pushes and the view that renders see one list.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Active notifications in insertion order.
    entries: watch::Sender<Vec<Notification>>,
    /// Pending expiry timers, keyed by the toast they remove.
    timers: Mutex<HashMap<NotificationId, AbortHandle>>,
    lifetime: ToastLifetime,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    /// Creates an empty queue with the default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lifetime(ToastLifetime::default())
    }

    /// Creates an empty queue whose toasts expire after `lifetime`.
    #[must_use]
    pub fn with_lifetime(lifetime: ToastLifetime) -> Self {
        let (entries, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                entries,
                timers: Mutex::new(HashMap::new()),
                lifetime,
            }),
        }
    }

    /// Returns the delay after which a toast removes itself.
    #[must_use]
    pub fn lifetime(&self) -> ToastLifetime {
        self.inner.lifetime
    }

    /// Appends a toast and schedules its removal.
    ///
    /// The toast is visible as soon as this returns. Must be called from
    /// within a Tokio runtime for the expiry timer to be armed; otherwise the
    /// toast stays until it is dismissed.
    pub fn push(&self, text: impl Into<String>, kind: ToastKind) -> NotificationId {
        let notification = Notification::new(kind, text);
        let id = notification.id();
        tracing::debug!(%id, kind = kind.as_str(), text = notification.text(), "toast pushed");

        self.inner.entries.send_modify(|entries| entries.push(notification));
        self.arm_timer(id);
        id
    }

    /// Shorthand for `push(text, ToastKind::Success)`.
    pub fn success(&self, text: impl Into<String>) -> NotificationId {
        self.push(text, ToastKind::Success)
    }

    /// Shorthand for `push(text, ToastKind::Error)`.
    pub fn error(&self, text: impl Into<String>) -> NotificationId {
        self.push(text, ToastKind::Error)
    }

    /// Shorthand for `push(text, ToastKind::Info)`.
    pub fn info(&self, text: impl Into<String>) -> NotificationId {
        self.push(text, ToastKind::Info)
    }

    /// Removes a toast and cancels its timer.
    ///
    /// Returns `true` if the toast was still visible. Dismissing an unknown
    /// or already expired id is a no-op.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        if let Some(timer) = self.inner.timers().remove(&id) {
            timer.abort();
        }
        self.inner.remove(id)
    }

    /// Removes every toast and cancels all timers.
    pub fn clear(&self) {
        for (_, timer) in self.inner.timers().drain() {
            timer.abort();
        }
        self.inner.entries.send_if_modified(|entries| {
            let changed = !entries.is_empty();
            entries.clear();
            changed
        });
    }

    /// Returns a snapshot of the visible toasts in insertion order.
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.inner.entries.borrow().clone()
    }

    /// Returns the number of visible toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    /// Returns whether no toast is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    /// Returns whether a toast with this id is visible.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.inner.entries.borrow().iter().any(|n| n.id() == id)
    }

    /// Subscribes to changes of the visible list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.entries.subscribe()
    }

    fn arm_timer(&self, id: NotificationId) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(%id, "no tokio runtime; toast will stay until dismissed");
            return;
        };

        let weak = Arc::downgrade(&self.inner);
        let delay = self.inner.lifetime.as_duration();

        // Held while spawning so the timer cannot fire before it is registered.
        let mut timers = self.inner.timers();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.timers().remove(&id);
                if inner.remove(id) {
                    tracing::trace!(%id, "toast expired");
                }
            }
        });
        timers.insert(id, task.abort_handle());
    }
}

impl Inner {
    fn timers(&self) -> MutexGuard<'_, HashMap<NotificationId, AbortHandle>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: NotificationId) -> bool {
        self.entries.send_if_modified(|entries| {
            match entries.iter().position(|n| n.id() == id) {
                Some(pos) => {
                    entries.remove(pos);
                    true
                }
                None => false,
            }
        })
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let timers = self.timers.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, timer) in timers.drain() {
            timer.abort();
        }
    }
}
