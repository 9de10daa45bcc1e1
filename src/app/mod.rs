// SPDX-License-Identifier: MPL-2.0
//! Screen state containers and per-run wiring.
//!
//! - [`list_screen`]: paginated users / products tables
//! - [`form_screen`]: creation forms
//! - [`session`]: builds one container per navigation
//! - [`paths`]: config directory resolution

pub mod form_screen;
pub mod list_screen;
pub mod paths;
mod screen;
pub mod session;

pub use form_screen::FormScreen;
pub use list_screen::{ListScreen, Row};
pub use screen::Screen;
pub use session::{ScreenState, Session};
