use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::Breed;

/// Render the breed selector with the current option highlighted
pub fn render_selector(f: &mut Frame, area: Rect, selected: Breed) {
    let mut spans = Vec::with_capacity(Breed::ALL.len() * 2);

    for (idx, breed) in Breed::ALL.iter().enumerate() {
        let text = format!(" {} {} ", idx + 1, breed.label());
        let style = if *breed == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
    }

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Breed ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(selector, area);
}
