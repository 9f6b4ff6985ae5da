//! Shared test utilities and scripted device capabilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use worldtag::capture::{
    Address, Camera, CaptureError, CaptureOutcome, CapturePipeline, Coordinates, DeviceLocale,
    GeocodeError, Geocoder, LocationError, Locator, Permission, Photo,
};
use worldtag::config::DialogConfig;
use worldtag::locale::Locale;
use worldtag::ui::app::App;
use worldtag::ui::dialog::ManualClock;
use worldtag::ui::events::AppEvent;

/// Long enough for every dialog channel, spring included, to come to rest.
pub const SETTLE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy)]
pub enum CameraScript {
    Photo,
    Cancel,
    Missing,
}

pub struct FakeCamera {
    script: CameraScript,
    calls: Arc<AtomicUsize>,
}

impl FakeCamera {
    pub fn new(script: CameraScript) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                script,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Camera for FakeCamera {
    fn capture(&self) -> Result<CaptureOutcome, CaptureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            CameraScript::Photo => Ok(CaptureOutcome::Captured(photo())),
            CameraScript::Cancel => Ok(CaptureOutcome::Cancelled),
            CameraScript::Missing => Err(CaptureError::Unavailable {
                command: "fake-camera".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

pub struct FakeLocator {
    pub permission: Permission,
    pub coords: Option<Coordinates>,
}

impl Locator for FakeLocator {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.coords
            .ok_or_else(|| LocationError::Unavailable("no fix".to_string()))
    }
}

pub struct FakeGeocoder {
    pub address: Option<Address>,
}

impl Geocoder for FakeGeocoder {
    fn reverse(&self, _coords: Coordinates) -> Result<Address, GeocodeError> {
        self.address
            .clone()
            .ok_or_else(|| GeocodeError::NotFound("offline".to_string()))
    }
}

pub fn photo() -> Photo {
    Photo {
        path: PathBuf::from("/tmp/worldtag-test.jpg"),
        width: 640,
        height: 480,
    }
}

pub fn buenos_aires() -> Coordinates {
    Coordinates::new(-34.6037, -58.3816)
}

pub fn buenos_aires_address() -> Address {
    Address {
        city: Some("Buenos Aires".to_string()),
        region: Some("Ciudad Autónoma de Buenos Aires".to_string()),
        country: Some("Argentina".to_string()),
    }
}

pub fn granted_locator() -> FakeLocator {
    FakeLocator {
        permission: Permission::Granted,
        coords: Some(buenos_aires()),
    }
}

pub fn working_pipeline() -> CapturePipeline {
    let (camera, _) = FakeCamera::new(CameraScript::Photo);
    CapturePipeline::new(
        Box::new(camera),
        Box::new(granted_locator()),
        Box::new(FakeGeocoder {
            address: Some(buenos_aires_address()),
        }),
    )
}

pub struct TestApp {
    pub app: App<ManualClock>,
    pub clock: ManualClock,
    pub events: Receiver<AppEvent>,
}

impl TestApp {
    pub fn new(pipeline: CapturePipeline) -> Self {
        Self::with_config(pipeline, &DialogConfig::default())
    }

    pub fn with_config(pipeline: CapturePipeline, config: &DialogConfig) -> Self {
        let (tx, events) = mpsc::channel();
        let clock = ManualClock::new();
        let mut app = App::with_clock(
            config,
            Locale::EsAr,
            DeviceLocale::default(),
            Arc::new(pipeline),
            tx,
            clock.clone(),
        );
        app.on_resize(100, 40);
        Self { app, clock, events }
    }

    pub fn settle(&mut self) {
        self.clock.advance(SETTLE);
        self.app.on_tick();
    }

    /// Waits for the capture worker and feeds its result back to the app.
    pub fn finish_capture(&mut self) {
        match self.events.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::CaptureFinished(result)) => self.app.on_capture_finished(result),
            Ok(other) => panic!("unexpected event {:?}", other),
            Err(err) => panic!("capture did not finish: {}", err),
        }
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(ch: char) -> KeyEvent {
    key(KeyCode::Char(ch))
}
