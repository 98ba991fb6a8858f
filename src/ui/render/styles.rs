use lipgloss::{Color, Style};

/// Styles used by the renderer. Built once and stored on the model.
#[derive(Clone)]
pub struct Theme {
    pub title: Style,
    pub status: Style,
    pub error: Style,
    pub item_title: Style,
    pub item_desc: Style,
    pub selected_title: Style,
    pub selected_desc: Style,
    pub selected_bar: Style,
    pub filter_prompt: Style,
    pub filter_text: Style,
    pub page_active: Style,
    pub page_inactive: Style,
    pub help_key: Style,
    pub help_desc: Style,
    // outer frame around the whole view
    pub margin_x: usize,
    pub margin_y: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: Style::new()
                .background(Color::from_rgb(98, 37, 247))
                .foreground(Color::from_rgb(255, 255, 221))
                .bold(true),
            status: Style::new().foreground(Color::from_rgb(168, 168, 168)),
            error: Style::new()
                .foreground(Color::from_rgb(238, 60, 60))
                .bold(true),
            item_title: Style::new().foreground(Color::from_rgb(221, 221, 221)),
            item_desc: Style::new().foreground(Color::from_rgb(119, 119, 119)),
            selected_title: Style::new()
                .foreground(Color::from_rgb(238, 111, 248))
                .bold(true),
            selected_desc: Style::new().foreground(Color::from_rgb(173, 88, 180)),
            selected_bar: Style::new().foreground(Color::from_rgb(238, 111, 248)),
            filter_prompt: Style::new().foreground(Color::from_rgb(236, 253, 101)),
            filter_text: Style::new().foreground(Color::from_rgb(238, 111, 248)),
            page_active: Style::new().foreground(Color::from_rgb(221, 221, 221)),
            page_inactive: Style::new().faint(true),
            help_key: Style::new().foreground(Color::from_rgb(98, 98, 98)),
            help_desc: Style::new().foreground(Color::from_rgb(74, 74, 74)),
            margin_x: 2,
            margin_y: 1,
        }
    }
}
