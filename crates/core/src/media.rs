//! Media upload validation.
//!
//! Every upload is validated here before any byte reaches the media store:
//! size ceiling first (per call site), then a magic-byte format sniff and a
//! header-only dimension read via the `image` crate. Declared MIME types and
//! file extensions from the client are ignored — the bytes decide.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::CoreError;

/// One mebibyte.
const MIB: u64 = 1024 * 1024;

/// Image formats accepted for upload.
const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
];

/// Upload call sites, each with its own size ceiling and storage folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Homepage hero slide.
    Slide,
    /// Photo album picture.
    Photo,
    /// Blog post cover image.
    PostCover,
    /// Priest portrait.
    Priest,
    /// Announcement popup.
    Popup,
}

impl MediaKind {
    /// All upload call sites.
    pub const ALL: &'static [MediaKind] = &[
        MediaKind::Slide,
        MediaKind::Photo,
        MediaKind::PostCover,
        MediaKind::Priest,
        MediaKind::Popup,
    ];

    /// Parse from the `kind` query parameter.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "slide" => Ok(Self::Slide),
            "photo" => Ok(Self::Photo),
            "post_cover" => Ok(Self::PostCover),
            "priest" => Ok(Self::Priest),
            "popup" => Ok(Self::Popup),
            other => Err(CoreError::Validation(format!(
                "Unknown media kind '{other}'. Must be one of: slide, photo, post_cover, priest, popup"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Photo => "photo",
            Self::PostCover => "post_cover",
            Self::Priest => "priest",
            Self::Popup => "popup",
        }
    }

    /// Size ceiling for this call site.
    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Slide => 10 * MIB,
            Self::Photo => 8 * MIB,
            Self::PostCover => 5 * MIB,
            Self::Priest => 2 * MIB,
            Self::Popup => MIB,
        }
    }

    /// Folder hint passed to the media store.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Slide => "slides",
            Self::Photo => "albums",
            Self::PostCover => "posts",
            Self::Priest => "priests",
            Self::Popup => "popups",
        }
    }
}

/// Metadata extracted from a validated upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Canonical file extension for the sniffed format.
    pub fn extension(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::WebP => "webp",
            ImageFormat::Gif => "gif",
            // Unreachable for allowed formats; fall back to the crate's name.
            other => other.extensions_str().first().copied().unwrap_or("bin"),
        }
    }
}

/// Validate an upload for a call site: ceiling, format sniff, header read.
///
/// The size check runs before anything touches the bytes, so an oversized
/// file is rejected without decoding and without any media-store call.
pub fn validate_image_upload(kind: MediaKind, bytes: &[u8]) -> Result<ImageInfo, CoreError> {
    let max = kind.max_bytes();
    if bytes.len() as u64 > max {
        return Err(CoreError::Validation(format!(
            "File of {} bytes exceeds the {} limit of {max} bytes",
            bytes.len(),
            kind.name()
        )));
    }

    if bytes.is_empty() {
        return Err(CoreError::Validation("File is empty".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("File is not a recognized image".to_string()))?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(CoreError::Validation(format!(
            "Image format {format:?} is not allowed. Accepted: JPEG, PNG, WebP, GIF"
        )));
    }

    // Header-only dimension read; no full decode.
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| CoreError::Validation(format!("Unreadable image header: {e}")))?;

    Ok(ImageInfo {
        format,
        width,
        height,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest well-formed 1x1 PNG.
    fn tiny_png() -> Vec<u8> {
        vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
            0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', // IHDR length + type
            0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
            0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, // bit depth etc + crc
            0x89, 0x00, 0x00, 0x00, 0x0A, b'I', b'D', b'A', // IDAT
            b'T', 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
            0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
            0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, // IEND
            0x42, 0x60, 0x82,
        ]
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in MediaKind::ALL {
            assert_eq!(MediaKind::from_name(kind.name()).unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_kind_rejects() {
        assert!(MediaKind::from_name("video").is_err());
    }

    #[test]
    fn ceilings_span_one_to_ten_mib() {
        assert_eq!(MediaKind::Popup.max_bytes(), MIB);
        assert_eq!(MediaKind::Slide.max_bytes(), 10 * MIB);
        for kind in MediaKind::ALL {
            assert!(kind.max_bytes() >= MIB && kind.max_bytes() <= 10 * MIB);
        }
    }

    #[test]
    fn valid_png_passes() {
        let info = validate_image_upload(MediaKind::Photo, &tiny_png()).unwrap();
        assert_eq!(info.format, ImageFormat::Png);
        assert_eq!((info.width, info.height), (1, 1));
        assert_eq!(info.extension(), "png");
    }

    #[test]
    fn oversized_file_rejects_before_sniffing() {
        // Garbage bytes past the popup ceiling: the size error must win,
        // proving no decode was attempted.
        let oversized = vec![0u8; (MIB + 1) as usize];
        let err = validate_image_upload(MediaKind::Popup, &oversized).unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");
    }

    #[test]
    fn file_at_the_ceiling_is_sniffed_not_size_rejected() {
        // Exactly at the limit: passes the size gate, fails as a non-image.
        let at_limit = vec![0u8; MIB as usize];
        let err = validate_image_upload(MediaKind::Popup, &at_limit).unwrap_err();
        assert!(!err.to_string().contains("exceeds"), "{err}");
    }

    #[test]
    fn non_image_bytes_reject() {
        let err = validate_image_upload(MediaKind::Slide, b"<!DOCTYPE html>").unwrap_err();
        assert!(err.to_string().contains("not a recognized image"), "{err}");
    }

    #[test]
    fn empty_file_rejects() {
        assert!(validate_image_upload(MediaKind::Photo, &[]).is_err());
    }
}
