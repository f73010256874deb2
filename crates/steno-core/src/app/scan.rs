impl<IN, B, D, W, S> Player<IN, B, D, W, S>
where
    IN: InputProvider,
    B: NarrationBackend,
    D: DisplaySink,
    W: WakeLock,
    S: SettingsStore,
{
    /// Capture a frame, binarize it and load the recognized text.
    ///
    /// Every failure is reported through [`DisplaySink::notice`] and leaves the
    /// current text untouched. The capture UI is closed on every path.
    pub fn scan<C, R>(
        &mut self,
        camera: &mut C,
        recognizer: &mut R,
    ) -> Result<usize, ScanError>
    where
        C: FrameSource,
        R: TextRecognizer,
    {
        self.display.set_capture_open(true);

        if let Err(err) = camera.open() {
            warn!("scan: camera open failed err={}", err);
            self.display.notice(CAMERA_ERROR_NOTICE);
            camera.close();
            self.display.set_capture_open(false);
            return Err(ScanError::CameraUnavailable(err.to_string()));
        }

        let recognized = self.recognize_frame(camera, recognizer);
        camera.close();
        self.display.set_capture_open(false);

        match recognized {
            Ok(text) => {
                let len = self.set_text(&text);
                info!("scan: recognized words={}", len);
                Ok(len)
            }
            Err(err) => {
                warn!("scan: {}", err);
                self.display.notice(&err.to_string());
                Err(err)
            }
        }
    }

    fn recognize_frame<C, R>(
        &mut self,
        camera: &mut C,
        recognizer: &mut R,
    ) -> Result<String, ScanError>
    where
        C: FrameSource,
        R: TextRecognizer,
    {
        let frame = camera
            .capture_frame()
            .map_err(|err| ScanError::Capture(err.to_string()))?;
        debug!("scan: frame {}x{}", frame.width(), frame.height());

        self.display.set_scan_status(SCAN_PROCESSING_STATUS);
        let prepared = scan::binarize(&frame);
        let text = recognizer
            .recognize(&prepared, &self.language_hint)
            .map_err(|err| ScanError::Recognition(err.to_string()))?;

        Ok(scan::flatten_lines(&text))
    }
}
