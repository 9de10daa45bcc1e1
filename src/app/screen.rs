// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Users,
    Products,
    AddUser,
    AddProduct,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Users,
        Screen::Products,
        Screen::AddUser,
        Screen::AddProduct,
    ];

    /// Localization key of the screen title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Users => "screen-users",
            Screen::Products => "screen-products",
            Screen::AddUser => "screen-add-user",
            Screen::AddProduct => "screen-add-product",
        }
    }

    /// Returns `true` for the paginated table screens.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, Screen::Users | Screen::Products)
    }
}
