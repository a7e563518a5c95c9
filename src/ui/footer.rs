use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const ATTRIBUTION: &str = "Dog images are retrieved from Dog API";
pub const DONATE_URL: &str = "https://dog.ceo/dog-api/about";

/// Render the attribution footer
pub fn render_footer(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(ATTRIBUTION),
        Line::from(vec![
            Span::raw("Donate to Dog API: "),
            Span::styled(
                DONATE_URL,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let footer = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
