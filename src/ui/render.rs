use std::collections::HashMap;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::{footer, gallery, header, layout, legend, selector, toast};
use crate::model::Model;
use crate::ImagePreviewState;

/// Main render function - orchestrates all UI rendering
pub fn render(
    f: &mut Frame,
    model: &mut Model,
    image_states: &mut HashMap<String, ImagePreviewState>,
) {
    let size = f.area();

    let legend_height =
        legend::calculate_legend_height(size.width, model.ui.vim_mode, model.ui.can_open_links);
    let layout_info = layout::calculate_layout(size, legend_height);

    header::render_header(f, layout_info.header_area);

    selector::render_selector(f, layout_info.selector_area, model.ui.selector.selected);

    let caption = Paragraph::new(crate::logic::ui::breed_caption(model.gallery.breed)).style(
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(caption, layout_info.caption_area);

    gallery::render_gallery(
        f,
        layout_info.gallery_area,
        &model.gallery.images,
        &mut model.ui.gallery_scroll,
        image_states,
        model.ui.image_preview_enabled,
    );

    footer::render_footer(f, layout_info.footer_area);

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.can_open_links,
    );

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
