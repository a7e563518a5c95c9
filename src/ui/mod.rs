// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, selector, caption, gallery, footer, legend)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the title bar
// - selector: Renders the breed selector
// - gallery: Renders the image grid or the loading indicator
// - footer: Renders the Dog API attribution
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod footer;
pub mod gallery;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod selector;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
