//! Header bar widget
//!
//! App title, server address, and the most used keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const TITLE: &str = "Sentinel Console";

const KEY_HINTS: &[(&str, &str)] = &[
    ("p", "Pause"),
    ("c", "Clear"),
    ("/", "Filter"),
    ("Tab", "Focus"),
    ("r", "Retry"),
    ("x", "Cancel"),
    ("q", "Quit"),
];

/// Main header showing app title, server, and keybindings
pub struct MainHeader<'a> {
    server: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(server: &'a str) -> Self {
        Self { server }
    }

    fn hints() -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!("[{key}]"), styles::accent_bold()));
            spans.push(Span::styled(format!(" {action}"), styles::text_secondary()));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(self.server.to_string(), styles::text_primary()),
        ]);
        Paragraph::new(title).render(inner, buf);

        // Hints are right-aligned and dropped when they would overlap the title
        let hints = Line::from(Self::hints());
        let hints_width = hints.width() as u16;
        let title_width = (TITLE.len() + self.server.len() + 5) as u16;
        if hints_width + title_width < inner.width {
            let x = inner.x + inner.width - hints_width - 1;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
