use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::text::Span;

use crate::locale::{Locale, Strings};

const CARD_MAX_WIDTH: u16 = 76;
const NEW_CARD_HEIGHT: u16 = 6;
const LATEST_CARD_HEIGHT: u16 = 8;
const EMPTY_LATEST_CARD_HEIGHT: u16 = 3;
const PREFERENCES_CARD_HEIGHT: u16 = 5;
const CHIP_GAP: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Where the cards and their clickable parts sit inside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub new_card: Rect,
    pub latest_card: Rect,
    pub preferences_card: Rect,
    pub create_button: Rect,
    pub delete_button: Option<Rect>,
    pub chips: Vec<(Locale, Rect)>,
}

/// What a click on the main screen landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTarget {
    Create,
    Delete,
    Chip(Locale),
}

impl ScreenLayout {
    pub fn new(body: Rect, strings: &Strings, has_entry: bool) -> Self {
        let width = body.width.min(CARD_MAX_WIDTH);
        let column = Rect {
            x: body.x + (body.width - width) / 2,
            width,
            ..body
        };
        let latest_height = if has_entry {
            LATEST_CARD_HEIGHT
        } else {
            EMPTY_LATEST_CARD_HEIGHT
        };
        let [new_card, latest_card, preferences_card, _] = Layout::vertical([
            Constraint::Length(NEW_CARD_HEIGHT),
            Constraint::Length(latest_height),
            Constraint::Length(PREFERENCES_CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(column);

        let create_button = button_rect(card_inner(new_card), 3, strings.create_button);
        let delete_button =
            has_entry.then(|| button_rect(card_inner(latest_card), 5, strings.delete_button));

        let chip_row = card_inner(preferences_card);
        let mut x = chip_row.x;
        let chips = Locale::ALL
            .into_iter()
            .map(|locale| {
                let width = Span::raw(chip_label(locale)).width() as u16 + 2;
                let rect = Rect::new(x, chip_row.y + 2, width, 1).intersection(chip_row);
                x = x.saturating_add(width + CHIP_GAP);
                (locale, rect)
            })
            .collect();

        Self {
            new_card,
            latest_card,
            preferences_card,
            create_button,
            delete_button,
            chips,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ScreenTarget> {
        let position = Position::new(column, row);
        if self.create_button.contains(position) {
            return Some(ScreenTarget::Create);
        }
        if self
            .delete_button
            .is_some_and(|rect| rect.contains(position))
        {
            return Some(ScreenTarget::Delete);
        }
        self.chips
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(locale, _)| ScreenTarget::Chip(*locale))
    }
}

/// Card content area: border plus one column of padding.
pub fn card_inner(card: Rect) -> Rect {
    card.inner(Margin::new(2, 1))
}

pub fn chip_label(locale: Locale) -> String {
    locale.tag().replace('-', " ")
}

fn button_rect(inner: Rect, row: u16, label: &str) -> Rect {
    let width = Span::raw(label).width() as u16 + 4;
    Rect::new(inner.x, inner.y.saturating_add(row), width, 1).intersection(inner)
}
