//! Image dimensions derived from photo URLs.
//!
//! Placeholder image hosts encode the square image size as the first path
//! segment (`https://via.placeholder.com/600/92c952`). Dimensions are never
//! stored on a [`Photo`](crate::photo::Photo); they are computed on demand.

use serde::Serialize;
use url::Url;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Fallback size for a full-size image whose URL carries no size segment.
pub const DEFAULT_FULL_SIZE: Dimensions = Dimensions {
    width: 600,
    height: 600,
};

/// Fallback size for a thumbnail whose URL carries no size segment.
pub const DEFAULT_THUMBNAIL_SIZE: Dimensions = Dimensions {
    width: 150,
    height: 150,
};

/* --------------------------------------------------------------------------
Dimensions
-------------------------------------------------------------------------- */

/// Width and height of an image in pixels. Both sides are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Build dimensions, rejecting a zero width or height.
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        if width == 0 {
            return Err(CoreError::Validation(
                "Width must be greater than zero".to_string(),
            ));
        }
        if height == 0 {
            return Err(CoreError::Validation(
                "Height must be greater than zero".to_string(),
            ));
        }
        Ok(Self { width, height })
    }

    /// Square dimensions of `side` x `side`.
    pub fn square(side: u32) -> Result<Self, CoreError> {
        Self::new(side, side)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/* --------------------------------------------------------------------------
Derivation
-------------------------------------------------------------------------- */

/// Derive square dimensions from the first path segment of `url`.
///
/// The segment must consist of ASCII digits only and parse to a non-zero
/// `u32`. Anything else (no segment, text, a sign, zero, overflow) yields
/// `fallback` unchanged. This function never fails.
pub fn derive_dimensions(url: &Url, fallback: Dimensions) -> Dimensions {
    leading_size(url)
        .and_then(|side| Dimensions::square(side).ok())
        .unwrap_or(fallback)
}

fn leading_size(url: &Url) -> Option<u32> {
    let segment = url.path().trim_matches('/').split('/').next()?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    // -- Dimensions::new --

    #[test]
    fn accepts_positive_sides() {
        let dims = Dimensions::new(150, 200).unwrap();
        assert_eq!(dims.width(), 150);
        assert_eq!(dims.height(), 200);
    }

    #[test]
    fn accepts_smallest_sides() {
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn rejects_zero_width() {
        let err = Dimensions::new(0, 200).unwrap_err();
        assert_eq!(err.to_string(), "Width must be greater than zero");
    }

    #[test]
    fn rejects_zero_height() {
        let err = Dimensions::new(150, 0).unwrap_err();
        assert_eq!(err.to_string(), "Height must be greater than zero");
    }

    // -- derive_dimensions --

    #[test]
    fn derives_square_from_leading_segment() {
        let dims = derive_dimensions(
            &url("https://via.placeholder.com/640/92c952"),
            DEFAULT_FULL_SIZE,
        );
        assert_eq!(dims, Dimensions::square(640).unwrap());
    }

    #[test]
    fn derives_for_any_positive_size() {
        for n in [1_u32, 7, 150, 600, 4096, u32::MAX] {
            let dims = derive_dimensions(
                &url(&format!("https://host/{n}/anything")),
                DEFAULT_THUMBNAIL_SIZE,
            );
            assert_eq!(dims.width(), n);
            assert_eq!(dims.height(), n);
        }
    }

    #[test]
    fn derives_from_single_segment_with_trailing_slash() {
        let dims = derive_dimensions(&url("https://host/320/"), DEFAULT_FULL_SIZE);
        assert_eq!(dims, Dimensions::square(320).unwrap());
    }

    #[test]
    fn falls_back_without_numeric_segment() {
        let dims = derive_dimensions(&url("https://example.com/cat.jpg"), DEFAULT_FULL_SIZE);
        assert_eq!(dims, DEFAULT_FULL_SIZE);
    }

    #[test]
    fn falls_back_on_empty_path() {
        let dims = derive_dimensions(&url("https://example.com"), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(dims, DEFAULT_THUMBNAIL_SIZE);
    }

    #[test]
    fn falls_back_on_zero_segment() {
        let dims = derive_dimensions(&url("https://host/0/abc"), DEFAULT_FULL_SIZE);
        assert_eq!(dims, DEFAULT_FULL_SIZE);
    }

    #[test]
    fn falls_back_on_signed_segment() {
        let fallback = Dimensions::new(10, 20).unwrap();
        assert_eq!(derive_dimensions(&url("https://host/-5/abc"), fallback), fallback);
        assert_eq!(derive_dimensions(&url("https://host/+5/abc"), fallback), fallback);
    }

    #[test]
    fn falls_back_on_mixed_segment() {
        let dims = derive_dimensions(&url("https://host/600x400/abc"), DEFAULT_FULL_SIZE);
        assert_eq!(dims, DEFAULT_FULL_SIZE);
    }

    #[test]
    fn falls_back_on_overflowing_segment() {
        let dims = derive_dimensions(&url("https://host/99999999999/abc"), DEFAULT_FULL_SIZE);
        assert_eq!(dims, DEFAULT_FULL_SIZE);
    }

    #[test]
    fn only_the_first_segment_counts() {
        let dims = derive_dimensions(&url("https://host/images/600/abc"), DEFAULT_FULL_SIZE);
        assert_eq!(dims, DEFAULT_FULL_SIZE);
    }
}
