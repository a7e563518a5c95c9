use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, can_open_links: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("h/l", Style::default().fg(Color::Yellow)),
            Span::raw(":Breed  "),
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(":Scroll  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Breed  "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Scroll  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("1/2", Style::default().fg(Color::Yellow)),
        Span::raw(":Shiba/Akita  "),
    ]);

    if can_open_links {
        hotkey_spans.extend(vec![
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(":Donate to Dog API  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Calculate the legend height (including borders) for a terminal width
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, can_open_links: bool) -> u16 {
    let content_width: usize = build_hotkey_spans(vim_mode, can_open_links)
        .iter()
        .map(|span| span.content.width())
        .sum();

    // Account for left and right borders
    let available = terminal_width.saturating_sub(2).max(1) as usize;
    let lines = content_width.div_ceil(available).max(1);

    lines as u16 + 2
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, can_open_links: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, can_open_links)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hotkeys")
                .border_style(Style::default().fg(Color::Gray)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(legend, area);
}
