use crate::locale::Strings;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_BUSY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    strings: &'static Strings,
    busy: bool,
}

impl Header {
    pub fn new(strings: &'static Strings, busy: bool) -> Self {
        Self { strings, busy }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", title_style),
            Span::styled(self.strings.app_title, title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.strings.app_subtitle, Style::default().fg(MUTED_TEXT)),
        ];
        if self.busy {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                self.strings.capturing,
                Style::default().fg(STATUS_BUSY),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
