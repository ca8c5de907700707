//! `data:image/...;base64,...` decoding.

use crate::error::{Result, ScreenShotError};
use base64::Engine;

/// Raw encoded image bytes (PNG, JPEG, ...) with their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// File extension suggested for this media type.
    pub fn extension(&self) -> &str {
        match self.mime.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            other => match other.strip_prefix("image/") {
                Some(sub) if !sub.is_empty() && sub.bytes().all(|b| b.is_ascii_alphanumeric()) => {
                    sub
                }
                _ => "png",
            },
        }
    }
}

/// Decode an image data URL into its bytes.
///
/// Only base64 image URLs are accepted; the overlay never sends anything else.
pub fn decode_data_url(url: &str) -> Result<EncodedImage> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ScreenShotError::InvalidDataUrl("missing `data:` scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ScreenShotError::InvalidDataUrl("missing `,` separator".to_string()))?;

    let mut params = header.split(';');
    let mime = params.next().unwrap_or_default().trim().to_ascii_lowercase();
    if !mime.starts_with("image/") {
        return Err(ScreenShotError::InvalidDataUrl(format!(
            "not an image media type: {:?}",
            mime
        )));
    }
    if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(ScreenShotError::InvalidDataUrl(
            "payload is not base64-encoded".to_string(),
        ));
    }

    // Line-wrapped base64 is common in data URLs.
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
    if bytes.is_empty() {
        return Err(ScreenShotError::EmptyImage);
    }

    Ok(EncodedImage { mime, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_payload() {
        let image = decode_data_url("data:image/png;base64,AAAA").unwrap();
        assert_eq!(image.mime, "image/png");
        assert_eq!(image.bytes, vec![0, 0, 0]);
        assert_eq!(image.extension(), "png");
    }

    #[test]
    fn jpeg_maps_to_jpg_extension() {
        let image = decode_data_url("data:image/jpeg;base64,/9j/").unwrap();
        assert_eq!(image.extension(), "jpg");
        assert_eq!(image.bytes, vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn media_type_is_case_insensitive() {
        let image = decode_data_url("data:IMAGE/GIF;BASE64,R0lG").unwrap();
        assert_eq!(image.mime, "image/gif");
        assert_eq!(image.extension(), "gif");
    }

    #[test]
    fn subtypes_unfit_for_file_names_fall_back_to_png() {
        let svg = EncodedImage {
            mime: "image/svg+xml".to_string(),
            bytes: vec![1],
        };
        assert_eq!(svg.extension(), "png");

        let webp = EncodedImage {
            mime: "image/webp".to_string(),
            bytes: vec![1],
        };
        assert_eq!(webp.extension(), "webp");

        let bare = EncodedImage {
            mime: "image/".to_string(),
            bytes: vec![1],
        };
        assert_eq!(bare.extension(), "png");
    }

    #[test]
    fn embedded_whitespace_in_payload_is_ignored() {
        let image = decode_data_url("data:image/png;base64,AA\r\nA A\t").unwrap();
        assert_eq!(image.bytes, vec![0, 0, 0]);
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = decode_data_url("image/png;base64,AAAA").unwrap_err();
        assert!(matches!(err, ScreenShotError::InvalidDataUrl(_)));
    }

    #[test]
    fn rejects_non_image_media_type() {
        let err = decode_data_url("data:text/plain;base64,AAAA").unwrap_err();
        assert!(matches!(err, ScreenShotError::InvalidDataUrl(_)));
    }

    #[test]
    fn rejects_percent_encoded_payload() {
        let err = decode_data_url("data:image/svg+xml,%3Csvg%3E").unwrap_err();
        assert!(matches!(err, ScreenShotError::InvalidDataUrl(_)));
    }

    #[test]
    fn rejects_bad_base64() {
        let err = decode_data_url("data:image/png;base64,@@@@").unwrap_err();
        assert!(matches!(err, ScreenShotError::Base64(_)));
    }

    #[test]
    fn rejects_empty_payload() {
        let err = decode_data_url("data:image/png;base64,").unwrap_err();
        assert!(matches!(err, ScreenShotError::EmptyImage));
    }
}
