use lipgloss::Style;

/// A rendered line together with its printable width.
#[derive(Clone, Debug, Default)]
pub struct Line {
    pub text: String,
    pub width: usize,
}

impl Line {
    pub fn blank() -> Self {
        Line::default()
    }

    pub fn plain(s: &str) -> Self {
        Line {
            text: s.to_string(),
            width: s.chars().count(),
        }
    }

    pub fn styled(style: &Style, s: &str) -> Self {
        if s.is_empty() {
            return Line::blank();
        }
        Line {
            text: style.render(s),
            width: s.chars().count(),
        }
    }

    pub fn push(&mut self, other: Line) {
        self.text.push_str(&other.text);
        self.width += other.width;
    }
}

/// Cuts `s` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

// Indents every line by the horizontal margin, pads it to `total_width` and
// fills or cuts the block to exactly `total_height` lines.
pub fn frame(
    lines: Vec<Line>,
    total_width: usize,
    total_height: usize,
    margin_x: usize,
    margin_y: usize,
) -> String {
    let blank = " ".repeat(total_width);
    let mut out: Vec<String> = Vec::with_capacity(total_height);
    for _ in 0..margin_y {
        out.push(blank.clone());
    }
    for line in lines {
        let used = margin_x + line.width;
        let pad = total_width.saturating_sub(used);
        out.push(format!("{}{}{}", " ".repeat(margin_x), line.text, " ".repeat(pad)));
    }
    out.truncate(total_height);
    while out.len() < total_height {
        out.push(blank.clone());
    }
    out.join("\n")
}
