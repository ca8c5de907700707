use crate::capture::Bounds;

use super::OverlayWindow;

/// The single live overlay plus what was last asked of it.
#[derive(Debug)]
pub struct OpenOverlay<W> {
    pub window: W,
    /// Bounds from the last `show`; re-applied when the platform resets them.
    pub bounds: Option<Bounds>,
}

/// Overlay lifecycle. There is never more than one `Open` window.
#[derive(Debug)]
pub enum OverlayState<W> {
    Idle,
    Open(OpenOverlay<W>),
}

impl<W> Default for OverlayState<W> {
    fn default() -> Self {
        OverlayState::Idle
    }
}

impl<W: OverlayWindow> OverlayState<W> {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn current(&self) -> Option<&OpenOverlay<W>> {
        match self {
            OverlayState::Open(open) => Some(open),
            OverlayState::Idle => None,
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut OpenOverlay<W>> {
        match self {
            OverlayState::Open(open) => Some(open),
            OverlayState::Idle => None,
        }
    }

    /// The open overlay, only if it carries `label`.
    pub fn current_labelled(&mut self, label: &str) -> Option<&mut OpenOverlay<W>> {
        self.current_mut().filter(|open| open.window.label() == label)
    }

    /// Move to `Idle`, handing back the window that was open.
    pub fn take(&mut self) -> Option<OpenOverlay<W>> {
        match std::mem::take(self) {
            OverlayState::Open(open) => Some(open),
            OverlayState::Idle => None,
        }
    }

    /// Install a fresh window. The previous one must already be torn down.
    pub fn open(&mut self, window: W) {
        debug_assert!(!self.is_open(), "overlay opened while another is live");
        *self = OverlayState::Open(OpenOverlay {
            window,
            bounds: None,
        });
    }
}
