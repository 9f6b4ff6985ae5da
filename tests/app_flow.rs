mod common;

use common::{
    char_key, key, working_pipeline, CameraScript, FakeCamera, FakeGeocoder, FakeLocator,
    TestApp,
};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::atomic::Ordering;
use worldtag::capture::{CapturePipeline, Permission};
use worldtag::config::DialogConfig;
use worldtag::locale::Locale;
use worldtag::ui::app::ModalMode;
use worldtag::ui::dialog::Severity;
use worldtag::ui::input::{handle_key, handle_mouse};

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn create_entry(test: &mut TestApp) {
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));
    test.finish_capture();
}

#[test]
fn create_confirm_stores_entry_and_closes() {
    let mut test = TestApp::new(working_pipeline());

    handle_key(&mut test.app, char_key('n'));
    assert!(test.app.modal().visible);
    assert_eq!(test.app.modal().mode, Some(ModalMode::Create));

    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));
    assert!(!test.app.modal().visible);
    assert!(test.app.capture_in_progress());

    test.finish_capture();
    assert!(!test.app.capture_in_progress());
    let entry = test.app.entry().expect("entry stored");
    assert_eq!(entry.address.city.as_deref(), Some("Buenos Aires"));
    assert_eq!(entry.photo.width, 640);
}

#[test]
fn create_cancel_runs_nothing() {
    let (camera, calls) = FakeCamera::new(CameraScript::Photo);
    let pipeline = CapturePipeline::new(
        Box::new(camera),
        Box::new(common::granted_locator()),
        Box::new(FakeGeocoder { address: None }),
    );
    let mut test = TestApp::new(pipeline);

    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Esc));

    assert!(!test.app.modal().visible);
    assert!(!test.app.capture_in_progress());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn delete_requires_an_entry() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('d'));
    assert!(!test.app.modal().visible);
}

#[test]
fn delete_confirm_clears_entry() {
    let mut test = TestApp::new(working_pipeline());
    create_entry(&mut test);
    test.settle();

    handle_key(&mut test.app, char_key('d'));
    assert_eq!(test.app.modal().mode, Some(ModalMode::Delete));
    test.settle();
    handle_key(&mut test.app, char_key('y'));

    assert!(test.app.entry().is_none());
    assert!(!test.app.modal().visible);
}

#[test]
fn delete_cancel_keeps_entry() {
    let mut test = TestApp::new(working_pipeline());
    create_entry(&mut test);
    test.settle();

    handle_key(&mut test.app, char_key('d'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Left));
    handle_key(&mut test.app, key(KeyCode::Enter));

    assert!(test.app.entry().is_some());
    assert!(!test.app.modal().visible);
}

#[test]
fn cancelled_capture_is_silent() {
    let (camera, _) = FakeCamera::new(CameraScript::Cancel);
    let pipeline = CapturePipeline::new(
        Box::new(camera),
        Box::new(common::granted_locator()),
        Box::new(FakeGeocoder { address: None }),
    );
    let mut test = TestApp::new(pipeline);
    create_entry(&mut test);

    assert!(test.app.entry().is_none());
    assert!(!test.app.modal().visible);
}

#[test]
fn denied_location_raises_warning_alert() {
    let (camera, _) = FakeCamera::new(CameraScript::Photo);
    let pipeline = CapturePipeline::new(
        Box::new(camera),
        Box::new(FakeLocator {
            permission: Permission::Denied,
            coords: None,
        }),
        Box::new(FakeGeocoder { address: None }),
    );
    let mut test = TestApp::new(pipeline);
    create_entry(&mut test);

    assert!(test.app.entry().is_none());
    assert!(test.app.modal().visible);
    match &test.app.modal().mode {
        Some(ModalMode::Alert {
            severity, message, ..
        }) => {
            assert_eq!(*severity, Severity::Warning);
            assert_eq!(message, Locale::EsAr.strings().location_denied);
        }
        other => panic!("expected alert, got {:?}", other),
    }

    let request = test.app.dialog_request();
    assert!(!request.has_cancel());
    assert_eq!(request.confirm_label(), "Accept");

    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));
    assert!(!test.app.modal().visible);
}

#[test]
fn missing_camera_raises_danger_alert() {
    let (camera, _) = FakeCamera::new(CameraScript::Missing);
    let pipeline = CapturePipeline::new(
        Box::new(camera),
        Box::new(common::granted_locator()),
        Box::new(FakeGeocoder { address: None }),
    );
    let mut test = TestApp::new(pipeline);
    create_entry(&mut test);

    match &test.app.modal().mode {
        Some(ModalMode::Alert { severity, .. }) => assert_eq!(*severity, Severity::Danger),
        other => panic!("expected alert, got {:?}", other),
    }
}

#[test]
fn busy_capture_surfaces_action_error() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));
    assert!(test.app.capture_in_progress());

    test.settle();
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));

    let strings = Locale::EsAr.strings();
    assert!(test.app.modal().visible);
    assert_eq!(
        test.app.modal().mode,
        Some(ModalMode::Alert {
            severity: Severity::Danger,
            title: strings.action_failed_title.to_string(),
            message: strings.capture_busy.to_string(),
        })
    );
    test.finish_capture();
}

#[test]
fn action_errors_stay_quiet_when_not_surfaced() {
    let config = DialogConfig {
        surface_action_errors: false,
        ..DialogConfig::default()
    };
    let mut test = TestApp::with_config(working_pipeline(), &config);
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));
    test.settle();
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Enter));

    assert!(!test.app.modal().visible);
    test.finish_capture();
}

#[test]
fn backdrop_click_closes_unless_disabled() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_mouse(&mut test.app, click(0, 0));
    assert!(!test.app.modal().visible);

    let config = DialogConfig {
        dismiss_on_backdrop: false,
        ..DialogConfig::default()
    };
    let mut test = TestApp::with_config(working_pipeline(), &config);
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_mouse(&mut test.app, click(0, 0));
    assert!(test.app.modal().visible);
}

#[test]
fn clicking_dialog_button_confirms() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('n'));
    test.settle();

    let view = test
        .app
        .dialog()
        .view(test.app.area(), &test.app.dialog_request())
        .expect("dialog on screen");
    let confirm = view
        .button(worldtag::ui::dialog::DialogButton::Confirm)
        .expect("confirm button")
        .rect;
    handle_mouse(&mut test.app, click(confirm.x + 1, confirm.y));

    assert!(!test.app.modal().visible);
    assert!(test.app.capture_in_progress());
    test.finish_capture();
}

#[test]
fn screen_buttons_and_chips_respond_to_clicks() {
    let mut test = TestApp::new(working_pipeline());
    let layout = test.app.screen_layout();

    let (locale, chip) = layout.chips[1];
    assert_eq!(locale, Locale::EnUs);
    handle_mouse(&mut test.app, click(chip.x, chip.y));
    assert_eq!(test.app.locale(), Locale::EnUs);

    let create = test.app.screen_layout().create_button;
    handle_mouse(&mut test.app, click(create.x, create.y));
    assert_eq!(test.app.modal().mode, Some(ModalMode::Create));
    assert_eq!(
        test.app.dialog_request().confirm_label(),
        Locale::EnUs.strings().create_confirm
    );
}

#[test]
fn locale_keys_switch_and_cycle() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('3'));
    assert_eq!(test.app.locale(), Locale::PtBr);
    handle_key(&mut test.app, char_key('l'));
    assert_eq!(test.app.locale(), Locale::EsAr);
    handle_key(&mut test.app, char_key('2'));
    assert_eq!(test.app.locale(), Locale::EnUs);
}

#[test]
fn keys_go_to_dialog_while_open() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, char_key('q'));
    handle_key(&mut test.app, char_key('3'));

    assert!(!test.app.should_quit());
    assert_eq!(test.app.locale(), Locale::EsAr);
    assert!(test.app.modal().visible);
}

#[test]
fn quit_keys() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('q'));
    assert!(test.app.should_quit());

    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('n'));
    handle_key(
        &mut test.app,
        crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(test.app.should_quit());
}

#[test]
fn closed_modal_keeps_content_for_exit_transition() {
    let mut test = TestApp::new(working_pipeline());
    handle_key(&mut test.app, char_key('n'));
    test.settle();
    handle_key(&mut test.app, key(KeyCode::Esc));

    assert!(!test.app.modal().visible);
    assert_eq!(test.app.modal().mode, Some(ModalMode::Create));
    assert!(test.app.dialog().is_presented());
    assert!(test
        .app
        .dialog()
        .view(test.app.area(), &test.app.dialog_request())
        .is_some());

    test.settle();
    assert!(!test.app.dialog().is_presented());
}
