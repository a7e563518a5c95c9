use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title bar at the top
    pub header_area: Rect,
    /// Breed selector
    pub selector_area: Rect,
    /// One-line caption naming the breed
    pub caption_area: Rect,
    /// Image grid (or loading indicator)
    pub gallery_area: Rect,
    /// Attribution footer
    pub footer_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (border, title, border)
            Constraint::Length(3),             // Selector (border, options, border)
            Constraint::Length(1),             // Caption
            Constraint::Min(3),                // Gallery
            Constraint::Length(3),             // Footer (top border + 2 lines)
            Constraint::Length(legend_height), // Legend (dynamic height, exact fit for wrapped content)
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        selector_area: chunks[1],
        caption_area: chunks[2],
        gallery_area: chunks[3],
        footer_area: chunks[4],
        legend_area: chunks[5],
    }
}
