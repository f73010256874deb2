impl<IN, B, D, W, S> Player<IN, B, D, W, S>
where
    IN: InputProvider,
    B: NarrationBackend,
    D: DisplaySink,
    W: WakeLock,
    S: SettingsStore,
{
    /// Build a player and restore the theme and last text from `settings`.
    pub fn new(
        input: IN,
        backend: B,
        display: D,
        wake_lock: W,
        settings: S,
        config: PlayerConfig,
    ) -> Self {
        let mut speech = SpeechDriver::new(backend);
        if let Some(voice) = config.voice.as_deref() {
            speech.select_voice(voice);
        }

        let theme = match settings.get(THEME_KEY) {
            Ok(value) => value.as_deref().map(Theme::from_stored).unwrap_or_default(),
            Err(err) => {
                warn!("settings: theme read failed err={:?}", err);
                Theme::default()
            }
        };

        let words = match settings.get(TEXT_KEY) {
            Ok(Some(text)) => WordStore::from_text(&text),
            Ok(None) => WordStore::new(),
            Err(err) => {
                warn!("settings: text read failed err={:?}", err);
                WordStore::new()
            }
        };

        let mut player = Self {
            input,
            speech,
            display,
            wake_lock,
            settings,
            words,
            cadence: config.cadence.normalized(),
            language_hint: config.language_hint,
            status: PlaybackStatus::Idle,
            pending_tick: None,
            theme,
            words_since_drain: 0,
        };

        info!(
            "player: ready words={} wpm={} theme={}",
            player.words.len(),
            player.cadence.wpm,
            player.theme.as_str()
        );
        player.display.set_theme(player.theme);
        player.display.render_words(player.words.words());
        player.publish_transport();
        player
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn cursor(&self) -> usize {
        self.words.cursor()
    }

    pub fn words(&self) -> &WordStore {
        &self.words
    }

    pub fn wpm(&self) -> u16 {
        self.cadence.wpm
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn speech(&self) -> &SpeechDriver<B> {
        &self.speech
    }

    pub fn speech_mut(&mut self) -> &mut SpeechDriver<B> {
        &mut self.speech
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn wake_lock(&self) -> &W {
        &self.wake_lock
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn transport_label(&self) -> TransportLabel {
        match self.status {
            PlaybackStatus::Idle => TransportLabel::Play,
            PlaybackStatus::Playing => TransportLabel::Pause,
            PlaybackStatus::Paused => TransportLabel::Resume,
        }
    }

    pub fn transport_view(&self) -> TransportView {
        TransportView {
            label: self.transport_label(),
            wpm: self.cadence.wpm,
            word_count: self.words.len(),
            cursor: self.words.cursor(),
        }
    }

    /// Words narrated since the previous call.
    pub fn drain_word_updates(&mut self) -> u32 {
        core::mem::take(&mut self.words_since_drain)
    }

    fn publish_transport(&mut self) {
        let view = self.transport_view();
        self.display.show_transport(view);
    }
}
