use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Cute Dog Images";

/// Render the title bar
pub fn render_header(f: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::White).bg(Color::DarkGray);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        style.add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).style(style))
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}
