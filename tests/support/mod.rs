//! In-memory platform for driving the coordinator without a GUI.
//!
//! Every window call is appended to a shared journal so tests can assert on
//! ordering; the set of live labels tracks the single-overlay invariant.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use screen_shot_lib::capture::{Bounds, EncodedImage};
use screen_shot_lib::error::{Result, ScreenShotError};
use screen_shot_lib::events::ScreenShotEvent;
use screen_shot_lib::messages::{mailbox, Inbox, Message};
use screen_shot_lib::overlay::{OverlayOptions, OverlayWindow};
use screen_shot_lib::platform::{Platform, SaveCallback, SaveRequest};
use screen_shot_lib::{ScreenShot, ScreenShotOptions};

#[derive(Clone, Default)]
pub struct Shared {
    pub journal: Arc<Mutex<Vec<String>>>,
    pub live: Arc<Mutex<Vec<String>>>,
    pub max_live: Arc<Mutex<usize>>,
    pub clipboard: Arc<Mutex<Vec<EncodedImage>>>,
    pub save_requests: Arc<Mutex<Vec<SaveRequest>>>,
    /// Answer the fake dialog gives; `None` = cancel.
    pub save_choice: Arc<Mutex<Option<PathBuf>>>,
    pub fail_open: Arc<Mutex<bool>>,
    /// Geometry the fake platform reports; tests mutate it to simulate a reset.
    pub geometry: Arc<Mutex<Bounds>>,
}

impl Shared {
    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    pub fn live(&self) -> Vec<String> {
        self.live.lock().unwrap().clone()
    }

    fn log(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

pub struct FakeWindow {
    label: String,
    shared: Shared,
}

impl OverlayWindow for FakeWindow {
    fn label(&self) -> &str {
        &self.label
    }

    fn show(&self) -> Result<()> {
        self.shared.log(format!("show:{}", self.label));
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.shared.log(format!("hide:{}", self.label));
        Ok(())
    }

    fn focus(&self) -> Result<()> {
        self.shared.log(format!("focus:{}", self.label));
        Ok(())
    }

    fn set_bounds(&self, bounds: Bounds) -> Result<()> {
        *self.shared.geometry.lock().unwrap() = bounds;
        self.shared.log(format!(
            "bounds:{}:{},{},{},{}",
            self.label, bounds.x, bounds.y, bounds.width, bounds.height
        ));
        Ok(())
    }

    fn bounds(&self) -> Result<Bounds> {
        Ok(*self.shared.geometry.lock().unwrap())
    }

    fn leave_fullscreen(&self) -> Result<()> {
        self.shared.log(format!("windowed:{}", self.label));
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.shared.live.lock().unwrap().retain(|l| l != &self.label);
        self.shared.log(format!("close:{}", self.label));
        Ok(())
    }
}

pub struct FakePlatform {
    pub shared: Shared,
}

impl Platform for FakePlatform {
    type Window = FakeWindow;

    fn open_overlay(&self, label: &str, _options: &OverlayOptions) -> Result<FakeWindow> {
        if *self.shared.fail_open.lock().unwrap() {
            return Err(ScreenShotError::Window("no display".to_string()));
        }
        let mut live = self.shared.live.lock().unwrap();
        live.push(label.to_string());
        let mut max = self.shared.max_live.lock().unwrap();
        *max = (*max).max(live.len());
        self.shared.log(format!("open:{}", label));
        Ok(FakeWindow {
            label: label.to_string(),
            shared: self.shared.clone(),
        })
    }

    fn write_clipboard_image(&self, image: &EncodedImage) -> Result<()> {
        self.shared.clipboard.lock().unwrap().push(image.clone());
        Ok(())
    }

    fn choose_save_path(&self, request: SaveRequest, done: SaveCallback) {
        self.shared.save_requests.lock().unwrap().push(request);
        let choice = self.shared.save_choice.lock().unwrap().clone();
        done(choice);
    }
}

/// Coordinator wired to a fake platform, plus everything tests inspect.
pub struct Harness {
    pub coordinator: ScreenShot<FakePlatform>,
    pub inbox: Inbox,
    pub shared: Shared,
    pub events: Arc<Mutex<Vec<ScreenShotEvent>>>,
}

pub fn harness(use_clipboard: bool, save_file: bool) -> Harness {
    let shared = Shared::default();
    let (tx, inbox) = mailbox();
    let options = ScreenShotOptions {
        use_clipboard,
        save_file,
        ..ScreenShotOptions::default()
    };
    let mut coordinator = ScreenShot::new(
        options,
        FakePlatform {
            shared: shared.clone(),
        },
        tx,
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    coordinator.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    Harness {
        coordinator,
        inbox,
        shared,
        events,
    }
}

impl Harness {
    pub fn events(&self) -> Vec<ScreenShotEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Wait for the next message the coordinator posted to itself.
    pub async fn next_message(&mut self) -> Option<Message> {
        tokio::time::timeout(Duration::from_secs(5), self.inbox.recv())
            .await
            .ok()
            .flatten()
    }

    /// Handle posted messages until none arrives for a short while.
    pub async fn settle(&mut self) -> Vec<Result<()>> {
        let mut results = Vec::new();
        while let Ok(Some(message)) =
            tokio::time::timeout(Duration::from_secs(1), self.inbox.recv()).await
        {
            results.push(self.coordinator.handle(message));
        }
        results
    }
}

/// Unique scratch path under the system temp dir.
pub fn scratch_path(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("screen-shot-test-{}-{}-{}", std::process::id(), nanos, name))
}
