//! Typed messages between the overlay, the host, and the coordinator.
//!
//! The overlay webview talks to the host through four topics. The bridge
//! parses them into `Message`s and posts them to the coordinator's mailbox;
//! platform signals and save completions travel the same way, so the
//! coordinator only ever runs on its own dispatcher task.

use std::path::PathBuf;

use serde::Deserialize;
use tokio::sync::mpsc;

use crate::capture::{Bounds, CapturePayload, EncodedImage};
use crate::error::{Result, ScreenShotError};

pub const TOPIC_SHOW: &str = "ScreenShot::SHOW";
pub const TOPIC_HIDE: &str = "ScreenShot::HIDE";
pub const TOPIC_CAPTURE: &str = "ScreenShot::CAPTURE";
pub const TOPIC_SAVEFILE: &str = "ScreenShot::SAVEFILE";

/// Every topic the overlay may send.
pub const OVERLAY_TOPICS: [&str; 4] = [TOPIC_SHOW, TOPIC_HIDE, TOPIC_CAPTURE, TOPIC_SAVEFILE];

#[derive(Debug)]
pub enum Message {
    /// Open a fresh overlay (hotkey, tray, or command).
    ScreenShot,
    Show(Bounds),
    Hide,
    Capture(CapturePayload),
    SaveFile { data_url: String },
    /// Platform reported the window with this label as shown.
    OverlayShown { label: String },
    /// Platform destroyed the window with this label.
    OverlayClosed { label: String },
    /// Save dialog finished; `None` means the user cancelled.
    SaveTarget {
        path: Option<PathBuf>,
        image: EncodedImage,
    },
    /// Background file write finished.
    SaveFinished {
        path: PathBuf,
        result: Result<()>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SaveFileBody {
    Bare(String),
    #[serde(rename_all = "camelCase")]
    Wrapped { data_url: String },
}

/// Parse an overlay topic and its JSON payload.
pub fn parse_topic(topic: &str, payload: &str) -> Result<Message> {
    let bad_payload = |e: serde_json::Error| ScreenShotError::InvalidPayload {
        topic: topic.to_string(),
        reason: e.to_string(),
    };

    match topic {
        TOPIC_SHOW => Ok(Message::Show(serde_json::from_str(payload).map_err(bad_payload)?)),
        TOPIC_HIDE => Ok(Message::Hide),
        TOPIC_CAPTURE => Ok(Message::Capture(
            serde_json::from_str(payload).map_err(bad_payload)?,
        )),
        TOPIC_SAVEFILE => {
            let data_url = match serde_json::from_str(payload).map_err(bad_payload)? {
                SaveFileBody::Bare(url) => url,
                SaveFileBody::Wrapped { data_url } => data_url,
            };
            Ok(Message::SaveFile { data_url })
        }
        other => Err(ScreenShotError::UnknownTopic(other.to_string())),
    }
}

/// Sending half of the coordinator's mailbox. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Mailbox {
    tx: mpsc::UnboundedSender<Message>,
}

/// Receiving half, owned by the dispatcher task.
#[derive(Debug)]
pub struct Inbox {
    rx: mpsc::UnboundedReceiver<Message>,
}

pub fn mailbox() -> (Mailbox, Inbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Mailbox { tx }, Inbox { rx })
}

impl Mailbox {
    /// Post a message. Returns false once the dispatcher has stopped.
    pub fn send(&self, message: Message) -> bool {
        match self.tx.send(message) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[DISPATCH] Coordinator stopped, dropping {:?}", e.0);
                false
            }
        }
    }
}

impl Inbox {
    pub async fn recv(&mut self) -> Option<Message> {
        self.rx.recv().await
    }

    /// Non-blocking receive, used by tests to drain synchronously.
    pub fn try_recv(&mut self) -> Option<Message> {
        self.rx.try_recv().ok()
    }
}
