//! Layout and drawing of the dialog card.
//!
//! [`DialogView::build`] is a pure function of the request, the current pose
//! and the focused button; the same view is used for drawing and for mouse
//! hit-testing so both always agree on where the buttons are.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{
    blend, BACKDROP, BACKDROP_ALPHA, CARD_BG, CARD_TEXT, GHOST_BG, PRIMARY_TEXT, SCREEN_BG,
    SCREEN_TEXT,
};

use super::request::DialogRequest;
use super::state::DialogButton;
use super::transition::Pose;

const CARD_WIDTH_PERCENT: u32 = 86;
const CARD_MAX_WIDTH: u16 = 56;
const CARD_MIN_WIDTH: u16 = 24;
/// Borders, header row, two spacer rows and the button row.
const CHROME_ROWS: u16 = 6;
/// Border plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
const BUTTON_MIN_WIDTH: u16 = 10;
const BUTTON_GAP: u16 = 2;
/// Offset units per terminal row.
const OFFSET_UNITS_PER_ROW: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub kind: DialogButton,
    pub label: String,
    pub rect: Rect,
    pub focused: bool,
}

/// What a point on screen belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Button(DialogButton),
    Card,
    Backdrop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogView {
    pub backdrop: Rect,
    pub backdrop_opacity: f32,
    pub card: Rect,
    pub icon: &'static str,
    pub accent: Color,
    pub title: String,
    pub body: Text<'static>,
    /// Left to right: cancel (if any), then confirm.
    pub buttons: Vec<ButtonView>,
}

impl DialogView {
    pub fn build<H>(
        request: &DialogRequest<H>,
        pose: Pose,
        focus: DialogButton,
        area: Rect,
    ) -> Self {
        let theme = request.severity.theme();
        let body = request.body();

        let preferred = (u32::from(area.width) * CARD_WIDTH_PERCENT / 100) as u16;
        let base_width = preferred.clamp(CARD_MIN_WIDTH.min(area.width), CARD_MAX_WIDTH);
        let text_width = base_width.saturating_sub(HORIZONTAL_CHROME).max(1);
        let base_height = CHROME_ROWS
            .saturating_add(wrapped_rows(&body, text_width))
            .min(area.height);

        let width = scale_len(base_width, pose.scale).min(area.width);
        let height = scale_len(base_height, pose.scale).min(area.height);
        let x = area.x + (area.width - width) / 2;
        let centered_y = i32::from(area.y) + i32::from((area.height - height) / 2);
        let offset_rows = (pose.offset / OFFSET_UNITS_PER_ROW).round() as i32;
        let max_y = i32::from(area.y + area.height - height);
        let y = (centered_y + offset_rows).clamp(i32::from(area.y), max_y) as u16;
        let card = Rect::new(x, y, width, height);

        let mut buttons = Vec::with_capacity(2);
        let row = card.bottom().saturating_sub(2);
        let mut right = card.right().saturating_sub(2);
        let mut labels = vec![(DialogButton::Confirm, request.confirm_label().to_string())];
        if let Some(label) = request.cancel_label() {
            labels.push((DialogButton::Cancel, label.to_string()));
        }
        for (kind, label) in labels {
            let button_width = (Line::from(label.as_str()).width() as u16)
                .saturating_add(2)
                .max(BUTTON_MIN_WIDTH);
            let left = right.saturating_sub(button_width);
            let rect = Rect::new(left, row, right - left, 1).intersection(card);
            buttons.push(ButtonView {
                kind,
                label,
                rect,
                focused: kind == focus,
            });
            right = left.saturating_sub(BUTTON_GAP);
        }
        buttons.reverse();

        Self {
            backdrop: area,
            backdrop_opacity: pose.opacity,
            card,
            icon: theme.icon,
            accent: theme.accent,
            title: request.resolved_title().to_string(),
            body,
            buttons,
        }
    }

    pub fn button(&self, kind: DialogButton) -> Option<&ButtonView> {
        self.buttons.iter().find(|button| button.kind == kind)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);
        if let Some(button) = self
            .buttons
            .iter()
            .find(|button| button.rect.contains(position))
        {
            return HitTarget::Button(button.kind);
        }
        if self.card.contains(position) {
            HitTarget::Card
        } else {
            HitTarget::Backdrop
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        dim_backdrop(frame.buffer_mut(), self.backdrop, self.backdrop_opacity);
        if self.card.is_empty() {
            return;
        }

        frame.render_widget(Clear, self.card);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.accent))
            .style(Style::default().bg(CARD_BG).fg(CARD_TEXT));
        let inner = block.inner(self.card);
        frame.render_widget(block, self.card);

        let content = inner.inner(Margin::new(1, 0));
        let header = Line::from(vec![
            Span::styled(
                self.icon,
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.title.clone(),
                Style::default().fg(CARD_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(header),
            Rect {
                height: content.height.min(1),
                ..content
            },
        );

        let body_area = Rect::new(
            content.x,
            content.y.saturating_add(2),
            content.width,
            content.height.saturating_sub(4),
        );
        if !body_area.is_empty() {
            frame.render_widget(
                Paragraph::new(self.body.clone()).wrap(Wrap { trim: false }),
                body_area,
            );
        }

        for button in &self.buttons {
            if button.rect.is_empty() {
                continue;
            }
            frame.render_widget(
                Paragraph::new(button.label.clone())
                    .style(self.button_style(button))
                    .alignment(Alignment::Center),
                button.rect,
            );
        }
    }

    fn button_style(&self, button: &ButtonView) -> Style {
        let style = match button.kind {
            DialogButton::Confirm => Style::default()
                .fg(PRIMARY_TEXT)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD),
            DialogButton::Cancel => Style::default().fg(CARD_TEXT).bg(GHOST_BG),
        };
        if button.focused {
            style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            style
        }
    }
}

fn scale_len(len: u16, scale: f32) -> u16 {
    if len == 0 {
        return 0;
    }
    ((f32::from(len) * scale).round() as u16).max(1)
}

/// Rows `text` occupies when wrapped at `width` columns.
fn wrapped_rows(text: &Text<'_>, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    rows.min(usize::from(u16::MAX)) as u16
}

fn dim_backdrop(buf: &mut Buffer, area: Rect, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    let alpha = BACKDROP_ALPHA * opacity.min(1.0);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = blend(resolve(cell.bg, SCREEN_BG), BACKDROP, alpha);
                let fg = blend(resolve(cell.fg, SCREEN_TEXT), BACKDROP, alpha);
                cell.set_bg(bg);
                cell.set_fg(fg);
            }
        }
    }
}

fn resolve(color: Color, fallback: Color) -> Color {
    match color {
        Color::Reset => fallback,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialog::request::DialogAction;
    use crate::ui::dialog::severity::Severity;

    type Request = DialogRequest<()>;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn confirm_only_when_cancel_missing() {
        let request = Request::new(true).message("Hello");
        let view = DialogView::build(&request, Pose::SHOWN, DialogButton::Confirm, area());
        assert_eq!(view.buttons.len(), 1);
        assert_eq!(view.buttons[0].kind, DialogButton::Confirm);
        assert_eq!(view.buttons[0].label, "Accept");
    }

    #[test]
    fn cancel_sits_left_of_confirm() {
        let request = Request::new(true)
            .confirm(DialogAction::new("Delete"))
            .cancel(DialogAction::new("Keep"));
        let view = DialogView::build(&request, Pose::SHOWN, DialogButton::Cancel, area());
        let cancel = view.button(DialogButton::Cancel).unwrap();
        let confirm = view.button(DialogButton::Confirm).unwrap();
        assert!(cancel.rect.right() < confirm.rect.left());
        assert!(cancel.focused);
        assert!(!confirm.focused);
        assert_eq!(confirm.rect.right(), view.card.right() - 2);
    }

    #[test]
    fn danger_uses_danger_theme() {
        let request = Request::new(true).severity(Severity::Danger);
        let view = DialogView::build(&request, Pose::SHOWN, DialogButton::Confirm, area());
        assert_eq!(view.title, "Error");
        assert_eq!(view.icon, Severity::Danger.theme().icon);
        assert_eq!(view.accent, Severity::Danger.theme().accent);
    }

    #[test]
    fn shown_card_is_centered_and_capped() {
        let request = Request::new(true).message("Short");
        let view = DialogView::build(&request, Pose::SHOWN, DialogButton::Confirm, area());
        assert_eq!(view.card.width, CARD_MAX_WIDTH);
        assert_eq!(view.card.height, CHROME_ROWS + 1);
        assert_eq!(view.card.x, (100 - CARD_MAX_WIDTH) / 2);
        assert_eq!(view.card.y, (30 - view.card.height) / 2);
    }

    #[test]
    fn hidden_pose_shrinks_and_lowers_card() {
        let request = Request::new(true).message("Short");
        let shown = DialogView::build(&request, Pose::SHOWN, DialogButton::Confirm, area());
        let hidden = DialogView::build(&request, Pose::HIDDEN, DialogButton::Confirm, area());
        assert!(hidden.card.width < shown.card.width);
        assert!(hidden.card.y > shown.card.y);
        assert_eq!(hidden.backdrop_opacity, 0.0);
    }

    #[test]
    fn long_message_wraps_into_more_rows() {
        let request = Request::new(true).message("word ".repeat(40));
        let view = DialogView::build(&request, Pose::SHOWN, DialogButton::Confirm, area());
        assert!(view.card.height > CHROME_ROWS + 1);
    }

    #[test]
    fn tiny_area_never_overflows() {
        let request = Request::new(true)
            .message("word ".repeat(40))
            .cancel(DialogAction::unlabeled());
        let small = Rect::new(0, 0, 12, 4);
        let view = DialogView::build(&request, Pose::HIDDEN, DialogButton::Confirm, small);
        assert!(view.card.right() <= small.right());
        assert!(view.card.bottom() <= small.bottom());
        for button in &view.buttons {
            assert!(button.rect.right() <= view.card.right());
        }
    }

    #[test]
    fn hit_test_distinguishes_regions() {
        let request = Request::new(true).cancel(DialogAction::unlabeled());
        let view = DialogView::build(&request, Pose::SHOWN, DialogButton::Confirm, area());
        let confirm = view.button(DialogButton::Confirm).unwrap().rect;
        let cancel = view.button(DialogButton::Cancel).unwrap().rect;

        assert_eq!(
            view.hit_test(confirm.x, confirm.y),
            HitTarget::Button(DialogButton::Confirm)
        );
        assert_eq!(
            view.hit_test(cancel.x, cancel.y),
            HitTarget::Button(DialogButton::Cancel)
        );
        assert_eq!(view.hit_test(view.card.x, view.card.y), HitTarget::Card);
        assert_eq!(view.hit_test(0, 0), HitTarget::Backdrop);
    }
}
