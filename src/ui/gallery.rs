use std::collections::HashMap;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use crate::logic::gallery::{
    card_height_for_width, clamp_scroll, columns_for_width, row_count, visible_card_range,
    visible_rows,
};
use crate::model::ImageList;
use crate::{ImageMetadata, ImagePreviewState};

/// Shown in place of the grid until the first fetch lands
pub const LOADING_TEXT: &str = "Loading...";

/// Shown while a single card's image is being downloaded or decoded
pub const IMAGE_LOADING_TEXT: &str = "Loading image...";

/// Alt text for cards without a drawable image
pub const ALT_TEXT: &str = "cute dog";

/// Render the image grid
///
/// `scroll` is clamped in place so it never points past the last row.
pub fn render_gallery(
    f: &mut Frame,
    area: Rect,
    images: &ImageList,
    scroll: &mut usize,
    image_states: &mut HashMap<String, ImagePreviewState>,
    previews_enabled: bool,
) {
    let Some(urls) = images.urls() else {
        f.render_widget(
            Paragraph::new(LOADING_TEXT).style(Style::default().fg(Color::Gray)),
            area,
        );
        return;
    };

    if urls.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let columns = columns_for_width(area.width);
    let card_width = area.width / columns as u16;
    let card_height = card_height_for_width(card_width);
    let rows = visible_rows(area.height, card_height);
    *scroll = clamp_scroll(*scroll, row_count(urls.len(), columns), rows);

    let first = *scroll * columns;
    for idx in visible_card_range(urls.len(), columns, *scroll, rows) {
        let offset = idx - first;
        let x = area.x + (offset % columns) as u16 * card_width;
        let y = area.y + (offset / columns) as u16 * card_height;
        let height = card_height.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }

        let url = &urls[idx];
        render_card(
            f,
            Rect::new(x, y, card_width, height),
            idx,
            url,
            image_states.get_mut(url),
            previews_enabled,
        );
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    index: usize,
    url: &str,
    state: Option<&mut ImagePreviewState>,
    previews_enabled: bool,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" #{} ", index + 1));

    if let Some(ImagePreviewState::Ready { metadata, .. }) = state.as_deref() {
        block = block.title_bottom(format!(" {} ", format_metadata(metadata)));
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    match state {
        Some(ImagePreviewState::Ready { protocol, .. }) if previews_enabled => {
            f.render_stateful_widget(StatefulImage::default(), inner, protocol);
        }
        Some(ImagePreviewState::Loading) | None if previews_enabled => {
            f.render_widget(
                Paragraph::new(IMAGE_LOADING_TEXT).style(Style::default().fg(Color::Gray)),
                inner,
            );
        }
        _ => {
            let alt = Paragraph::new(vec![
                Line::from(Span::styled(
                    ALT_TEXT,
                    Style::default().add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(url, Style::default().fg(Color::DarkGray))),
            ])
            .wrap(Wrap { trim: true });
            f.render_widget(alt, inner);
        }
    }
}

/// Bottom-border caption for a decoded image (e.g. "640x480 · 52.30 KB")
pub fn format_metadata(metadata: &ImageMetadata) -> String {
    let size = crate::utils::format_bytes(metadata.file_size);
    match metadata.dimensions {
        Some((w, h)) => format!("{}x{} · {}", w, h, size),
        None => size,
    }
}
