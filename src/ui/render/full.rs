use crate::ui::model::Model;
use crate::ui::render::footer::{render_help, render_pagination};
use crate::ui::render::list::{inner_width, render_entries, render_status, render_title};
use crate::ui::render::util::{frame, truncate, Line};

pub fn render_error(m: &Model, err: &str) -> String {
    let text = truncate(&format!("An error occurred: {err}"), inner_width(m));
    let lines = vec![Line::blank(), Line::styled(&m.theme.error, &text), Line::blank()];
    frame(
        lines,
        m.screen_width,
        m.screen_height,
        m.theme.margin_x,
        0,
    )
}

pub fn render_full(m: &Model) -> String {
    if let Some(err) = &m.err {
        return render_error(m, err);
    }
    let visible = m.visible_entries();
    let mut lines = vec![render_title(m), render_status(m, &visible), Line::blank()];
    lines.extend(render_entries(m, &visible));
    lines.push(render_pagination(m));
    lines.push(Line::blank());
    lines.push(render_help(m));
    frame(
        lines,
        m.screen_width,
        m.screen_height,
        m.theme.margin_x,
        m.theme.margin_y,
    )
}
