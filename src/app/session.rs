// SPDX-License-Identifier: MPL-2.0
//! Per-run wiring: configuration, message catalog, and the shared HTTP client.
//!
//! Screens never share state. Each navigation builds a fresh container with
//! its own controller and toast queue, so toasts from a screen the user left
//! are dropped with it.

use super::form_screen::FormScreen;
use super::list_screen::ListScreen;
use super::screen::Screen;
use crate::application::port::CollectionTransport;
use crate::application::sync::ListSyncController;
use crate::application::validation::Validate;
use crate::config::Config;
use crate::domain::{Product, User};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::http::{build_client, ReqwestTransport, WireResource};
use crate::ui::notifications::NotificationQueue;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    i18n: Arc<I18n>,
    client: reqwest::Client,
}

/// State of the screen currently on display.
#[derive(Debug)]
pub enum ScreenState {
    Users(ListScreen<User>),
    Products(ListScreen<Product>),
    AddUser(FormScreen<User>),
    AddProduct(FormScreen<Product>),
}

impl ScreenState {
    #[must_use]
    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::Users(_) => Screen::Users,
            ScreenState::Products(_) => Screen::Products,
            ScreenState::AddUser(_) => Screen::AddUser,
            ScreenState::AddProduct(_) => Screen::AddProduct,
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        match self {
            ScreenState::Users(screen) => screen.notifications(),
            ScreenState::Products(screen) => screen.notifications(),
            ScreenState::AddUser(screen) => screen.notifications(),
            ScreenState::AddProduct(screen) => screen.notifications(),
        }
    }
}

impl Session {
    /// Builds the HTTP client from the `[api]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: Config, i18n: I18n) -> Result<Self> {
        let client = build_client(&config.api.user_agent)?;
        Ok(Self {
            config,
            i18n: Arc::new(i18n),
            client,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn i18n(&self) -> &Arc<I18n> {
        &self.i18n
    }

    /// Builds a fresh state container for `screen`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn open(&self, screen: Screen) -> Result<ScreenState> {
        let page_size = self.config.lists.page_size();
        Ok(match screen {
            Screen::Users => ScreenState::Users(ListScreen::new(self.controller()?, page_size)),
            Screen::Products => {
                ScreenState::Products(ListScreen::new(self.controller()?, page_size))
            }
            Screen::AddUser => ScreenState::AddUser(FormScreen::new(self.controller()?)),
            Screen::AddProduct => ScreenState::AddProduct(FormScreen::new(self.controller()?)),
        })
    }

    /// Builds a controller for `E` over HTTP, with its own toast queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn controller<E>(&self) -> Result<ListSyncController<E>>
    where
        E: WireResource,
        E::Patch: Validate,
        E::Draft: Validate,
    {
        let transport = ReqwestTransport::<E>::new(self.client.clone(), &self.config.api.base_url)?;
        Ok(self.controller_with(Arc::new(transport)))
    }

    /// Builds a controller for `E` over an arbitrary transport.
    #[must_use]
    pub fn controller_with<E>(
        &self,
        transport: Arc<dyn CollectionTransport<E>>,
    ) -> ListSyncController<E>
    where
        E: crate::domain::Entity,
        E::Patch: Validate,
        E::Draft: Validate,
    {
        let queue = NotificationQueue::with_lifetime(self.config.notifications.lifetime());
        ListSyncController::new(transport, queue, Arc::clone(&self.i18n))
    }
}
