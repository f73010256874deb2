//! Camera capture and text recognition seams, plus the fixed binarization
//! applied before recognition.

use core::fmt::Display;

use image::{GrayImage, Luma, RgbaImage};
use thiserror::Error;

/// Pixels with a luma strictly above this become white, all others black.
pub const BINARIZE_THRESHOLD: f32 = 100.0;
pub const DEFAULT_LANGUAGE_HINT: &str = "eng";

const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScanError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Camera-like frame producer. `open` acquires the device, `close` must be
/// safe to call whether or not `open` succeeded.
pub trait FrameSource {
    type Error: Display;

    fn open(&mut self) -> Result<(), Self::Error>;
    fn capture_frame(&mut self) -> Result<RgbaImage, Self::Error>;
    fn close(&mut self);
}

/// Black-box OCR service.
pub trait TextRecognizer {
    type Error: Display;

    fn recognize(&mut self, image: &GrayImage, language_hint: &str) -> Result<String, Self::Error>;
}

/// Rec. 709 luma of an RGB triple, alpha ignored.
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Grayscale then fixed-threshold the frame to pure black and white.
pub fn binarize(frame: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        let [r, g, b, _] = frame.get_pixel(x, y).0;
        if luma(r, g, b) > BINARIZE_THRESHOLD {
            Luma([u8::MAX])
        } else {
            Luma([0])
        }
    })
}

/// Recognized text with line breaks turned into spaces, ready for the word
/// store.
pub fn flatten_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn binarize_splits_on_weighted_luma() {
        let mut frame = RgbaImage::new(4, 1);
        // Pure green is bright under Rec. 709 weights, pure blue is dark.
        frame.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        frame.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        frame.put_pixel(2, 0, Rgba([90, 90, 90, 255]));
        frame.put_pixel(3, 0, Rgba([101, 101, 101, 0]));

        let out = binarize(&frame);
        let values: Vec<u8> = out.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, [255, 0, 0, 255]);
    }

    #[test]
    fn binarize_keeps_dimensions() {
        let frame = RgbaImage::new(7, 3);
        let out = binarize(&frame);
        assert_eq!(out.dimensions(), (7, 3));
    }

    #[test]
    fn flatten_lines_replaces_all_breaks() {
        assert_eq!(flatten_lines("a\nb\r\nc\rd"), "a b c d");
    }
}
