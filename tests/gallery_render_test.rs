//! Render tests for the gallery screen
//!
//! Draws the full UI into a ratatui TestBackend and inspects the text grid.

use std::collections::HashMap;

use dogtui::model::Model;
use dogtui::ui;
use dogtui::Breed;
use ratatui::{backend::TestBackend, Terminal};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn render_to_string(model: &mut Model) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let mut image_states = HashMap::new();

    terminal
        .draw(|f| ui::render(f, model, &mut image_states))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn urls(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("url{}", i)).collect()
}

#[test]
fn test_unloaded_renders_only_loading_indicator() {
    let mut model = Model::new(false);
    let screen = render_to_string(&mut model);

    assert!(screen.contains("Loading..."));
    assert!(!screen.contains(" #1 "), "no cards before the first fetch");
    assert!(!screen.contains("cute dog"));
}

#[test]
fn test_one_card_per_url_in_order() {
    let mut model = Model::new(false);
    model.apply_images(urls(3));
    let screen = render_to_string(&mut model);

    assert!(!screen.contains("Loading..."));
    assert_eq!(screen.matches("cute dog").count(), 3);
    assert!(!screen.contains(" #4 "));

    let positions: Vec<usize> = [" #1 ", " #2 ", " #3 "]
        .iter()
        .map(|title| screen.find(title).expect("card title rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let url_positions: Vec<usize> = ["url1", "url2", "url3"]
        .iter()
        .map(|url| screen.find(url).expect("card url rendered"))
        .collect();
    assert!(url_positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_result_renders_no_cards_and_no_indicator() {
    let mut model = Model::new(false);
    model.apply_images(vec![]);
    let screen = render_to_string(&mut model);

    assert!(!screen.contains("Loading..."));
    assert!(!screen.contains(" #1 "));
}

#[test]
fn test_caption_follows_breed_before_images_arrive() {
    let mut model = Model::new(false);
    model.apply_images(urls(3));
    assert!(render_to_string(&mut model).contains("These are shiba pictures"));

    model.choose_breed(Breed::Akita);
    let screen = render_to_string(&mut model);

    assert!(screen.contains("These are akita pictures"));
    // Old images stay until the akita fetch lands
    assert_eq!(screen.matches("cute dog").count(), 3);
}

#[test]
fn test_scroll_is_clamped_to_last_row() {
    let mut model = Model::new(false);
    model.apply_images(urls(12));

    for _ in 0..10 {
        model.ui.scroll_down();
    }
    let screen = render_to_string(&mut model);

    // 4 columns, one row of cards fits: the last row holds cards 9-12
    assert_eq!(model.ui.gallery_scroll, 2);
    assert!(screen.contains(" #9 "));
    assert!(screen.contains(" #12 "));
    assert!(!screen.contains(" #8 "));

    model.ui.scroll_up();
    let screen = render_to_string(&mut model);
    assert!(screen.contains(" #5 "));
    assert!(!screen.contains(" #9 "));
}

#[test]
fn test_header_footer_and_selector_rendered() {
    let mut model = Model::new(false);
    let screen = render_to_string(&mut model);

    assert!(screen.contains("Cute Dog Images"));
    assert!(screen.contains("Dog images are retrieved from Dog API"));
    assert!(screen.contains("https://dog.ceo/dog-api/about"));
    assert!(screen.contains("1 Shiba"));
    assert!(screen.contains("2 Akita"));
}
