//! Widget styles shared by every view.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{
    danger_button_style, ghost_button_style, nav_button_selected_style, nav_button_style,
    page_button_style, primary_button_style, secondary_button_style,
};
pub use containers::{
    backdrop_style, badge_style, card_style, content_style, dialog_style, header_style,
    sidebar_style, table_header_style, table_row_style, toast_style,
};
pub use inputs::{input_error_style, input_style, scrollable_style};
