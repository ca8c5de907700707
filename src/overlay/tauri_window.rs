//! Overlay window on top of Tauri's `WebviewWindow`.

use tauri::{LogicalPosition, LogicalSize, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use super::{OverlayOptions, OverlaySource, OverlayWindow};
use crate::capture::Bounds;
use crate::error::{Result, ScreenShotError};

/// Build (but do not show) an overlay window from the fixed record.
pub fn build_overlay_window<R: Runtime, M: tauri::Manager<R>>(
    manager: &M,
    label: &str,
    options: &OverlayOptions,
) -> Result<WebviewWindow<R>> {
    let url = match &options.source {
        OverlaySource::DevServer(url) => WebviewUrl::External(
            url.parse::<tauri::Url>()
                .map_err(|e| ScreenShotError::Config(format!("Bad dev server URL {}: {}", url, e)))?,
        ),
        OverlaySource::Bundled(page) => WebviewUrl::App(page.into()),
    };

    let (r, g, b, a) = options.background;
    let (x, y) = options.position;
    let (width, height) = options.size;

    let window = WebviewWindowBuilder::new(manager, label, url)
        .title(&options.title)
        .position(x, y)
        .inner_size(width, height)
        .visible(options.visible)
        .decorations(options.decorations)
        .fullscreen(options.fullscreen)
        .resizable(options.resizable)
        .minimizable(options.minimizable)
        .maximizable(options.maximizable)
        .focused(options.focused)
        .transparent(options.transparent)
        .always_on_top(options.always_on_top)
        .skip_taskbar(options.skip_taskbar)
        .background_color(tauri::window::Color(r, g, b, a))
        .build()?;

    Ok(window)
}

impl<R: Runtime> OverlayWindow for WebviewWindow<R> {
    fn label(&self) -> &str {
        WebviewWindow::label(self)
    }

    fn show(&self) -> Result<()> {
        Ok(WebviewWindow::show(self)?)
    }

    fn hide(&self) -> Result<()> {
        Ok(WebviewWindow::hide(self)?)
    }

    fn focus(&self) -> Result<()> {
        Ok(WebviewWindow::set_focus(self)?)
    }

    fn set_bounds(&self, bounds: Bounds) -> Result<()> {
        WebviewWindow::set_position(self, LogicalPosition::new(bounds.x as f64, bounds.y as f64))?;
        WebviewWindow::set_size(self, LogicalSize::new(bounds.width as f64, bounds.height as f64))?;
        Ok(())
    }

    fn bounds(&self) -> Result<Bounds> {
        let scale = WebviewWindow::scale_factor(self)?;
        let position = WebviewWindow::outer_position(self)?.to_logical::<f64>(scale);
        let size = WebviewWindow::inner_size(self)?.to_logical::<f64>(scale);
        Ok(Bounds::new(
            position.x.round() as i32,
            position.y.round() as i32,
            size.width.round() as u32,
            size.height.round() as u32,
        ))
    }

    fn leave_fullscreen(&self) -> Result<()> {
        Ok(WebviewWindow::set_fullscreen(self, false)?)
    }

    fn close(&self) -> Result<()> {
        Ok(WebviewWindow::destroy(self)?)
    }
}
