//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use earsip_api::User;
use earsip_core::Route;

use crate::model::ScreenMessage;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Open a page; the guard decides what is actually shown.
    Navigate(Route),
    /// Toggle sidebar visibility.
    ToggleSidebar,

    // Session
    /// Startup probe finished.
    SessionProbed(Option<User>),
    /// Login request finished.
    LoggedIn(Result<User, String>),
    /// Logout pressed.
    Logout,
    /// Logout request finished (whatever the server said).
    LoggedOut,

    // Settings
    /// Switch between light and dark palettes.
    ToggleTheme,
    /// Settings written to disk.
    SettingsSaved(Result<(), String>),

    // Notifications
    /// Once a second while notifications are visible.
    Tick,
    /// Close button on a notification.
    DismissNotification(u64),

    // Page
    /// Message for the page opened at the given generation.
    Screen(u64, ScreenMessage),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Any other keyboard event.
    KeyIgnored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Refetch the current page (F5).
    Refresh,
    /// Close dialog or inline edit (Escape).
    Cancel,
    /// Submit the form in focus (Ctrl+Enter).
    Submit,
    /// Toggle sidebar (Ctrl+B).
    ToggleSidebar,
    /// Toggle light/dark palette (Ctrl+D).
    ToggleTheme,
    /// Previous list page (Page Up).
    PrevPage,
    /// Next list page (Page Down).
    NextPage,
}
