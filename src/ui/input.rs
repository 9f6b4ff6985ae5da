use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::locale::Locale;
use crate::ui::app::App;
use crate::ui::dialog::Clock;

pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.modal().visible {
        app.dialog_key(key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('n') | KeyCode::Char('c') => app.open_create(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete(),
        KeyCode::Char('l') => app.cycle_locale(),
        KeyCode::Char('1') => app.set_locale(Locale::EsAr),
        KeyCode::Char('2') => app.set_locale(Locale::EnUs),
        KeyCode::Char('3') => app.set_locale(Locale::PtBr),
        _ => {}
    }
}

pub fn handle_mouse<C: Clock>(app: &mut App<C>, mouse: MouseEvent) {
    if app.modal().visible {
        app.dialog_mouse(mouse);
        return;
    }
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.screen_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
