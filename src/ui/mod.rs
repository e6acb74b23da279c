//! UI components module.
//!
//! Contains ratatui widgets for the console screens and modal overlays.

pub mod confirm;
pub mod dashboard;
pub mod details;
pub mod form;
pub mod list;
pub mod placeholder;
pub mod search;
pub mod tabs;
pub mod transactions;

pub use confirm::render_confirm_delete;
pub use dashboard::render_dashboard;
pub use details::render_details;
pub use form::render_form;
pub use list::render_list;
pub use placeholder::render_placeholder;
pub use search::render_search;
pub use tabs::render_tabs;
pub use transactions::render_transactions;

use ratatui::layout::Rect;

/// Centered popup area taking the given percentages of the parent.
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = ((u32::from(area.width) * u32::from(percent_x) / 100) as u16).max(1);
    let height = ((u32::from(area.height) * u32::from(percent_y) / 100) as u16).max(1);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
