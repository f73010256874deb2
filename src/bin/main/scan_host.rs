use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{Context, Result, anyhow, bail};
use image::{GrayImage, ImageFormat, RgbaImage};
use log::debug;
use steno_core::scan::{FrameSource, TextRecognizer};

/// Treats an image file as the camera: `open` checks it exists, each capture
/// decodes it.
pub(super) struct ImageFileCamera {
    path: PathBuf,
    opened: bool,
}

impl ImageFileCamera {
    pub(super) fn new(path: PathBuf) -> Self {
        Self {
            path,
            opened: false,
        }
    }
}

impl FrameSource for ImageFileCamera {
    type Error = anyhow::Error;

    fn open(&mut self) -> Result<()> {
        if !self.path.is_file() {
            bail!("no image at {}", self.path.display());
        }
        self.opened = true;
        Ok(())
    }

    fn capture_frame(&mut self) -> Result<RgbaImage> {
        if !self.opened {
            return Err(anyhow!("camera not open"));
        }
        let frame = image::open(&self.path)
            .with_context(|| format!("decoding {}", self.path.display()))?;
        Ok(frame.to_rgba8())
    }

    fn close(&mut self) {
        self.opened = false;
    }
}

/// Recognition through the `tesseract` command line tool.
pub(super) struct TesseractRecognizer {
    program: String,
}

impl TesseractRecognizer {
    pub(super) fn new(program: String) -> Self {
        Self { program }
    }
}

impl TextRecognizer for TesseractRecognizer {
    type Error = anyhow::Error;

    fn recognize(&mut self, image: &GrayImage, language_hint: &str) -> Result<String> {
        let input = tempfile::Builder::new()
            .prefix("steno-scan-")
            .suffix(".png")
            .tempfile()
            .context("creating scan file")?;
        image
            .save_with_format(input.path(), ImageFormat::Png)
            .context("writing scan file")?;

        debug!(
            "scan: running {} on {} lang={}",
            self.program,
            input.path().display(),
            language_hint
        );
        let output = Command::new(&self.program)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(language_hint)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("running {}", self.program))?;

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn missing_image_fails_to_open() {
        let mut camera = ImageFileCamera::new(PathBuf::from("/nonexistent/page.png"));
        assert!(camera.open().is_err());
        camera.close();
    }

    #[test]
    fn image_file_is_decoded_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        let mut source = RgbaImage::new(3, 2);
        source.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
        source.save(&path).unwrap();

        let mut camera = ImageFileCamera::new(path);
        assert!(camera.capture_frame().is_err());
        camera.open().unwrap();
        let frame = camera.capture_frame().unwrap();
        assert_eq!(frame.dimensions(), (3, 2));
        assert_eq!(frame.get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    }
}
