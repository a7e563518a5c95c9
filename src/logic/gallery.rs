//! Gallery grid calculations
//!
//! Pure functions for laying out image cards in a responsive grid and for
//! keeping card previews in step with the image list.

use std::collections::HashSet;

/// Minimum width (in cells) for a four-column grid
const FOUR_COLUMN_MIN_WIDTH: u16 = 96;

/// Minimum width (in cells) for a two-column grid
const TWO_COLUMN_MIN_WIDTH: u16 = 48;

const MIN_CARD_HEIGHT: u16 = 6;
const MAX_CARD_HEIGHT: u16 = 20;

/// Number of card columns that fit in the given width
///
/// # Examples
/// ```
/// use dogtui::logic::gallery::columns_for_width;
///
/// assert_eq!(columns_for_width(120), 4);
/// assert_eq!(columns_for_width(60), 2);
/// assert_eq!(columns_for_width(30), 1);
/// ```
pub fn columns_for_width(width: u16) -> usize {
    if width >= FOUR_COLUMN_MIN_WIDTH {
        4
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Card height for a given card width
///
/// Terminal cells are roughly twice as tall as they are wide, so half the
/// width keeps cards close to the 4:3 photos the API serves.
pub fn card_height_for_width(card_width: u16) -> u16 {
    (card_width / 2).clamp(MIN_CARD_HEIGHT, MAX_CARD_HEIGHT)
}

/// Number of grid rows needed for `count` cards
pub fn row_count(count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    count.div_ceil(columns)
}

/// Number of whole rows that fit in the available height (at least one)
pub fn visible_rows(area_height: u16, card_height: u16) -> usize {
    if card_height == 0 {
        return 1;
    }
    ((area_height / card_height) as usize).max(1)
}

/// Clamp a row scroll offset so the last row stays reachable
pub fn clamp_scroll(scroll: usize, total_rows: usize, visible_rows: usize) -> usize {
    scroll.min(total_rows.saturating_sub(visible_rows))
}

/// Index range of cards visible for a scroll offset
pub fn visible_card_range(
    count: usize,
    columns: usize,
    scroll: usize,
    visible_rows: usize,
) -> std::ops::Range<usize> {
    let start = (scroll * columns).min(count);
    let end = ((scroll + visible_rows) * columns).min(count);
    start..end
}

/// Preview bookkeeping needed after the image list is replaced
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PreviewPlan {
    /// URLs with preview state that are no longer displayed (sorted)
    pub drop: Vec<String>,

    /// Displayed URLs with no preview state yet, in list order
    pub fetch: Vec<String>,
}

/// Diff the displayed URLs against the URLs that already have preview state
pub fn preview_plan<'a>(
    current: &[String],
    known: impl IntoIterator<Item = &'a String>,
) -> PreviewPlan {
    let displayed: HashSet<&str> = current.iter().map(String::as_str).collect();
    let known: HashSet<&str> = known.into_iter().map(String::as_str).collect();

    let mut drop: Vec<String> = known
        .iter()
        .filter(|url| !displayed.contains(*url))
        .map(|url| url.to_string())
        .collect();
    drop.sort();

    // The API may repeat a URL; download it once
    let mut queued = HashSet::new();
    let fetch = current
        .iter()
        .filter(|url| !known.contains(url.as_str()) && queued.insert(url.as_str()))
        .cloned()
        .collect();

    PreviewPlan { drop, fetch }
}
