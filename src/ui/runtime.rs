use crate::capture::{CapturePipeline, DeviceLocale};
use crate::config::DialogConfig;
use crate::locale::Locale;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Redraw interval while the dialog is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

pub struct RuntimeOptions {
    pub dialog: DialogConfig,
    pub locale: Locale,
    pub device: DeviceLocale,
    pub pipeline: Arc<CapturePipeline>,
}

pub fn run(options: RuntimeOptions, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(shutdown);
    let mut app = App::new(
        &options.dialog,
        options.locale,
        options.device,
        options.pipeline,
        events.sender(),
    );
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::CaptureFinished(result)) => app.on_capture_finished(result),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick();
    }

    tracing::info!("Exiting");
    drop(guard);
    Ok(())
}
