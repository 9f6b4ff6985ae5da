use chrono::Local;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::capture::{DeviceLocale, Entry};
use crate::locale::{format_coords, format_datetime, format_place, Locale, Strings};
use crate::ui::app::App;
use crate::ui::dialog::Clock;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_inner, chip_label, layout_regions, ScreenLayout};
use crate::ui::theme::{
    ACCENT, CHIP_ACTIVE_BG, CHIP_BG, GHOST_BG, GLOBAL_BORDER, MUTED_TEXT, PRIMARY_TEXT,
    SCREEN_BG, SCREEN_TEXT, SECTION_TITLE, STATUS_BUSY,
};

pub fn draw<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(SCREEN_BG).fg(SCREEN_TEXT)),
        area,
    );

    let (header, body, footer) = layout_regions(area);
    let strings = app.strings();
    frame.render_widget(
        Header::new(strings, app.capture_in_progress()).widget(),
        header,
    );

    let layout = ScreenLayout::new(body, strings, app.entry().is_some());
    draw_new_card(frame, &layout, strings, app.capture_in_progress());
    draw_latest_card(frame, &layout, strings, app.entry(), app.locale());
    draw_preferences_card(frame, &layout, strings, app.locale(), app.device());

    frame.render_widget(Footer::new(strings).widget(footer), footer);

    app.dialog().render(frame, area, &app.dialog_request());
}

fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(SECTION_TITLE)
                .add_modifier(Modifier::BOLD),
        ))
}

fn button(frame: &mut Frame<'_>, rect: Rect, label: &str, style: Style) {
    frame.render_widget(
        Paragraph::new(label.to_string())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD)),
        rect,
    );
}

fn row(inner: Rect, offset: u16) -> Rect {
    Rect {
        y: inner.y.saturating_add(offset),
        height: 1,
        ..inner
    }
    .intersection(inner)
}

fn draw_new_card(frame: &mut Frame<'_>, layout: &ScreenLayout, strings: &Strings, busy: bool) {
    frame.render_widget(card(strings.new_section), layout.new_card);
    let inner = card_inner(layout.new_card);
    let description = Rect {
        height: inner.height.min(2),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(strings.new_description)
            .style(Style::default().fg(SCREEN_TEXT))
            .wrap(Wrap { trim: true }),
        description,
    );

    button(
        frame,
        layout.create_button,
        strings.create_button,
        Style::default().bg(ACCENT).fg(PRIMARY_TEXT),
    );
    if busy {
        let status = Rect {
            x: layout.create_button.right().saturating_add(2),
            ..row(inner, 3)
        }
        .intersection(inner);
        frame.render_widget(
            Paragraph::new(strings.capturing).style(Style::default().fg(STATUS_BUSY)),
            status,
        );
    }
}

fn key_value(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", key),
            Style::default()
                .fg(SCREEN_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(SCREEN_TEXT)),
    ])
}

fn draw_latest_card(
    frame: &mut Frame<'_>,
    layout: &ScreenLayout,
    strings: &Strings,
    entry: Option<&Entry>,
    locale: Locale,
) {
    frame.render_widget(card(strings.latest_section), layout.latest_card);
    let inner = card_inner(layout.latest_card);

    let Some(entry) = entry else {
        frame.render_widget(
            Paragraph::new(strings.empty_state).style(Style::default().fg(MUTED_TEXT)),
            row(inner, 0),
        );
        return;
    };

    let photo = entry
        .photo
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.photo.path.display().to_string());
    let captured_at = entry.captured_at.with_timezone(&Local);
    let lines = vec![
        key_value(
            strings.photo_label,
            format!("{} ({}×{})", photo, entry.photo.width, entry.photo.height),
        ),
        key_value(strings.place_label, format_place(&entry.address)),
        key_value(strings.coords_label, format_coords(entry.coords)),
        key_value(strings.datetime_label, format_datetime(locale, &captured_at)),
    ];
    let details = Rect {
        height: inner.height.min(4),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), details);

    if let Some(rect) = layout.delete_button {
        button(
            frame,
            rect,
            strings.delete_button,
            Style::default().bg(GHOST_BG).fg(SCREEN_TEXT),
        );
    }
}

fn draw_preferences_card(
    frame: &mut Frame<'_>,
    layout: &ScreenLayout,
    strings: &Strings,
    active: Locale,
    device: &DeviceLocale,
) {
    frame.render_widget(card(strings.preferences_section), layout.preferences_card);
    let inner = card_inner(layout.preferences_card);
    frame.render_widget(
        Paragraph::new(format!(
            "{}: {} · {}",
            strings.device_label, device.language_tag, device.timezone
        ))
        .style(Style::default().fg(MUTED_TEXT)),
        row(inner, 0),
    );

    for (locale, rect) in &layout.chips {
        let style = if *locale == active {
            Style::default().bg(CHIP_ACTIVE_BG).fg(PRIMARY_TEXT)
        } else {
            Style::default().bg(CHIP_BG).fg(SCREEN_TEXT)
        };
        button(frame, *rect, &chip_label(*locale), style);
    }
}
