impl<IN, B, D, W, S> Player<IN, B, D, W, S>
where
    IN: InputProvider,
    B: NarrationBackend,
    D: DisplaySink,
    W: WakeLock,
    S: SettingsStore,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(err) => {
                    warn!("input: poll failed err={:?}", err);
                    break;
                }
            }
        }
    }

    /// Apply one control event immediately.
    pub fn apply_input_event(&mut self, event: ControlEvent, now_ms: u64) {
        debug!("input: event={:?} status={:?}", event, self.status);

        match event {
            ControlEvent::TogglePlay => self.toggle_play(now_ms),
            ControlEvent::Reset => self.reset(),
            ControlEvent::SpeedUp => {
                let step = self.cadence.step as i32;
                self.adjust_wpm(step);
            }
            ControlEvent::SpeedDown => {
                let step = self.cadence.step as i32;
                self.adjust_wpm(-step);
            }
            ControlEvent::SetSpeed(wpm) => {
                self.set_wpm(wpm);
            }
            ControlEvent::Seek(index) => {
                if let Err(err) = self.seek(index) {
                    debug!("input: seek rejected err={}", err);
                }
            }
            ControlEvent::SetText(text) => {
                self.set_text(&text);
            }
            ControlEvent::ToggleTheme => self.toggle_theme(),
            ControlEvent::SelectVoice(name) => {
                self.speech.select_voice(&name);
            }
        }
    }

    /// Set the rate. A pending tick keeps its delay; the new rate applies from
    /// the next word.
    pub fn set_wpm(&mut self, wpm: u16) -> bool {
        let changed = self.cadence.set_wpm(wpm);
        if changed {
            debug!("player: wpm={}", self.cadence.wpm);
            self.publish_transport();
        }
        changed
    }

    pub fn adjust_wpm(&mut self, delta: i32) -> bool {
        let changed = self.cadence.adjust(delta);
        if changed {
            debug!("player: wpm={} delta={}", self.cadence.wpm, delta);
            self.publish_transport();
        }
        changed
    }

    /// Replace the text buffer. Playback is not interrupted; the cursor is
    /// kept when it still names a word.
    pub fn set_text(&mut self, text: &str) -> usize {
        let len = self.words.load(text);
        if let Err(err) = self.settings.set(TEXT_KEY, text) {
            warn!("settings: text save failed err={:?}", err);
        }

        info!(
            "player: text loaded words={} cursor={} status={:?}",
            len,
            self.words.cursor(),
            self.status
        );
        self.display.render_words(self.words.words());
        self.publish_transport();
        len
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.settings.set(THEME_KEY, self.theme.as_str()) {
            warn!("settings: theme save failed err={:?}", err);
        }
        self.display.set_theme(self.theme);
    }
}
