use crate::ui::model::{Entry, Model, CHROME_LINES, LINES_PER_ENTRY};
use crate::ui::render::util::{truncate, Line};

pub const TITLE_READY: &str = "Zellij";
pub const TITLE_LOADING: &str = "Starting Zellij...";
const SELECTED_BAR: &str = "│ ";
const UNSELECTED_BAR: &str = "  ";

pub fn inner_width(m: &Model) -> usize {
    m.screen_width.saturating_sub(2 * m.theme.margin_x)
}

pub fn render_title(m: &Model) -> Line {
    let title = if m.is_loading() {
        TITLE_LOADING
    } else {
        TITLE_READY
    };
    let padded = truncate(&format!(" {title} "), inner_width(m));
    Line::styled(&m.theme.title, &padded)
}

pub fn render_status(m: &Model, visible: &[Entry]) -> Line {
    let width = inner_width(m);
    if m.filtering || !m.filter.is_empty() {
        let prompt = truncate("Filter: ", width);
        let mut line = Line::styled(&m.theme.filter_prompt, &prompt);
        let rest = width.saturating_sub(line.width);
        let mut text = m.filter.clone();
        if m.filtering {
            text.push('█');
        }
        line.push(Line::styled(&m.theme.filter_text, &truncate(&text, rest)));
        return line;
    }
    if let Some(status) = &m.status {
        return Line::styled(&m.theme.status, &truncate(status, width));
    }
    let noun = if visible.len() == 1 { "item" } else { "items" };
    Line::styled(
        &m.theme.status,
        &truncate(&format!("{} {noun}", visible.len()), width),
    )
}

fn render_entry(m: &Model, entry: &Entry, selected: bool) -> Vec<Line> {
    let text_width = inner_width(m).saturating_sub(SELECTED_BAR.chars().count());
    let title = truncate(entry.title(), text_width);
    let desc = truncate(&entry.description(), text_width);
    if selected {
        let mut first = Line::styled(&m.theme.selected_bar, SELECTED_BAR);
        first.push(Line::styled(&m.theme.selected_title, &title));
        let mut second = Line::styled(&m.theme.selected_bar, SELECTED_BAR);
        second.push(Line::styled(&m.theme.selected_desc, &desc));
        vec![first, second]
    } else {
        let mut first = Line::plain(UNSELECTED_BAR);
        first.push(Line::styled(&m.theme.item_title, &title));
        let mut second = Line::plain(UNSELECTED_BAR);
        second.push(Line::styled(&m.theme.item_desc, &desc));
        vec![first, second]
    }
}

/// Renders the current page of entries, padded to every row the chrome leaves
/// free so the footer stays on the bottom rows.
pub fn render_entries(m: &Model, visible: &[Entry]) -> Vec<Line> {
    let block = usize::max(
        m.per_page * LINES_PER_ENTRY,
        m.screen_height.saturating_sub(CHROME_LINES),
    );
    let mut lines: Vec<Line> = Vec::with_capacity(block);
    if visible.is_empty() {
        let msg = if m.is_loading() { "Loading..." } else { "No items." };
        lines.push(Line::styled(&m.theme.status, &truncate(msg, inner_width(m))));
    }
    let start = m.page() * m.per_page;
    for (idx, entry) in visible.iter().enumerate().skip(start).take(m.per_page) {
        lines.extend(render_entry(m, entry, idx == m.cursor));
        lines.push(Line::blank());
    }
    lines.truncate(block);
    while lines.len() < block {
        lines.push(Line::blank());
    }
    lines
}
