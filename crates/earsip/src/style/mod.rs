//! Styling for the application.

pub mod widgets;
