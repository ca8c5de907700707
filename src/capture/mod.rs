//! Capture domain — payload types exchanged with the overlay.
//!
//! The overlay webview draws the selection and produces a data URL plus
//! the selected region. This module owns those shapes and the data URL
//! codec. External code should only use the items exported here.

mod data_url;

pub use data_url::{decode_data_url, EncodedImage};

use serde::{Deserialize, Deserializer, Serialize};

/// Screen region in logical pixels.
///
/// Webviews report fractional coordinates on scaled displays; they are
/// rounded to the nearest pixel on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    #[serde(deserialize_with = "rounded_coord")]
    pub x: i32,
    #[serde(deserialize_with = "rounded_coord")]
    pub y: i32,
    #[serde(deserialize_with = "rounded_extent")]
    pub width: u32,
    #[serde(deserialize_with = "rounded_extent")]
    pub height: u32,
}

fn rounded_coord<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

/// Negative extents collapse to zero.
fn rounded_extent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, u32::MAX as f64) as u32)
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// One finished capture gesture, as sent by the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturePayload {
    pub data_url: String,
    pub bounds: Bounds,
}
