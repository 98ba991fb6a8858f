use crate::ui::model::Model;
use crate::ui::render::list::inner_width;
use crate::ui::render::util::{truncate, Line};

const HELP_SEPARATOR: &str = " • ";

pub fn render_pagination(m: &Model) -> Line {
    let total_pages = m.total_pages();
    if total_pages <= 1 {
        return Line::blank();
    }
    let width = inner_width(m);
    let page = m.page();
    // one dot per page when they fit, otherwise an "x/y" counter
    if total_pages <= width {
        let mut line = Line::blank();
        for i in 0..total_pages {
            if i == page {
                line.push(Line::styled(&m.theme.page_active, "•"));
            } else {
                line.push(Line::styled(&m.theme.page_inactive, "•"));
            }
        }
        line
    } else {
        let counter = format!("{}/{}", page + 1, total_pages);
        Line::styled(&m.theme.page_active, &truncate(&counter, width))
    }
}

pub fn help_pairs(m: &Model) -> Vec<(&'static str, &'static str)> {
    if m.filtering {
        vec![("enter", "confirm"), ("esc", "clear filter")]
    } else {
        vec![
            ("↑/k", "up"),
            ("↓/j", "down"),
            ("enter", "confirm"),
            ("/", "filter"),
            ("r", "reload"),
            ("q", "quit"),
        ]
    }
}

/// Key help, dropping the rightmost pairs until the line fits.
pub fn render_help(m: &Model) -> Line {
    let width = inner_width(m);
    let sep_width = HELP_SEPARATOR.chars().count();
    let mut line = Line::blank();
    for (i, (key, desc)) in help_pairs(m).into_iter().enumerate() {
        let pair_width = key.chars().count() + 1 + desc.chars().count();
        let needed = if i == 0 { pair_width } else { sep_width + pair_width };
        if line.width + needed > width {
            break;
        }
        if i > 0 {
            line.push(Line::styled(&m.theme.help_desc, HELP_SEPARATOR));
        }
        line.push(Line::styled(&m.theme.help_key, key));
        line.push(Line::plain(" "));
        line.push(Line::styled(&m.theme.help_desc, desc));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::model::initial_model;
    use crate::ui::Msg;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn help_fits_narrow_screens() {
        let mut m = initial_model(&Config::default());
        for width in [10usize, 24, 40, 120] {
            m.update(Msg::WindowSize { width, height: 20 });
            let help = render_help(&m);
            assert!(help.width <= inner_width(&m));
            assert_eq!(strip_ansi(&help.text).chars().count(), help.width);
        }
        m.update(Msg::WindowSize { width: 120, height: 20 });
        assert!(strip_ansi(&render_help(&m).text).ends_with("q quit"));
    }

    #[test]
    fn help_switches_in_filter_mode() {
        let mut m = initial_model(&Config::default());
        m.update(Msg::Rune('/'));
        assert_eq!(
            strip_ansi(&render_help(&m).text),
            "enter confirm • esc clear filter"
        );
    }

    #[test]
    fn pagination_dots_mark_current_page() {
        let mut m = initial_model(&Config::default());
        m.update(Msg::WindowSize { width: 40, height: 8 + 3 });
        m.update(Msg::SessionsLoaded(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(m.total_pages(), 4);
        assert_eq!(strip_ansi(&render_pagination(&m).text), "••••");
        assert_eq!(render_pagination(&m).width, 4);
    }

    #[test]
    fn single_page_has_no_pagination() {
        let m = initial_model(&Config::default());
        assert_eq!(render_pagination(&m).width, 0);
    }
}
