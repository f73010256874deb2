impl<IN, B, D, W, S> Player<IN, B, D, W, S>
where
    IN: InputProvider,
    B: NarrationBackend,
    D: DisplaySink,
    W: WakeLock,
    S: SettingsStore,
{
    /// Drain pending input, pick up voice list changes, then fire the
    /// scheduled tick if it is due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.speech.refresh_voices();

        match self.pending_tick {
            Some(pending) if now_ms >= pending.due_ms => {
                self.pending_tick = None;
                self.run_tick(now_ms)
            }
            _ => TickResult::NoTick,
        }
    }

    /// When the host should call [`Player::tick`] next, `None` while nothing
    /// is scheduled.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending_tick.map(|pending| pending.due_ms)
    }

    pub fn toggle_play(&mut self, now_ms: u64) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now_ms);
        }
    }

    /// Start or resume from the cursor. Returns `false` when already playing.
    pub fn play(&mut self, now_ms: u64) -> bool {
        if self.is_playing() {
            return false;
        }

        if let Err(err) = self.wake_lock.acquire() {
            debug!("player: wake lock unavailable err={:?}", err);
        }

        info!(
            "player: play from={:?} cursor={} len={} wpm={}",
            self.status,
            self.words.cursor(),
            self.words.len(),
            self.cadence.wpm
        );
        self.status = PlaybackStatus::Playing;
        self.schedule_tick(now_ms);
        self.publish_transport();
        true
    }

    /// Stop narrating and keep the cursor. Returns `false` unless playing.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.speech.cancel_all();
        self.cancel_tick();
        self.release_wake_lock();
        self.status = PlaybackStatus::Paused;

        info!("player: pause cursor={}", self.words.cursor());
        self.publish_transport();
        true
    }

    /// Back to a fresh idle state at the first word.
    pub fn reset(&mut self) {
        self.speech.cancel_all();
        self.cancel_tick();
        self.release_wake_lock();
        self.words.reset();
        self.status = PlaybackStatus::Idle;

        debug!("player: reset len={}", self.words.len());
        self.display.render_words(self.words.words());
        self.display.clear_highlight();
        self.publish_transport();
    }

    /// Move the cursor to `index` without narrating.
    ///
    /// Ignored while playing, returning `Ok(false)`, so a click cannot race the
    /// tick loop's own advancement.
    pub fn seek(&mut self, index: usize) -> Result<bool, SeekError> {
        if self.is_playing() {
            debug!("player: seek ignored while playing index={}", index);
            return Ok(false);
        }

        self.words.seek(index)?;
        self.display.highlight(index);
        self.display.scroll_into_view(index);
        self.publish_transport();
        Ok(true)
    }

    fn run_tick(&mut self, now_ms: u64) -> TickResult {
        let index = self.words.cursor();
        let Some(word) = self.words.current() else {
            info!("player: end of text words={}", self.words.len());
            self.reset();
            return TickResult::Completed;
        };

        // Read fresh so slider moves apply from this word on.
        let cadence = self.cadence.cadence();
        self.speech.speak(word, cadence.tier);
        self.display.highlight(index);
        self.display.mark_past(index);
        self.display.scroll_into_view(index);

        self.words.advance();
        self.words_since_drain = self.words_since_drain.saturating_add(1);
        self.schedule_tick(now_ms.saturating_add(cadence.delay_ms as u64));
        self.publish_transport();
        TickResult::Narrated(index)
    }

    fn schedule_tick(&mut self, due_ms: u64) {
        self.pending_tick = Some(PendingTick { due_ms });
    }

    fn cancel_tick(&mut self) {
        if let Some(pending) = self.pending_tick.take() {
            debug!("player: cancelled tick due_ms={}", pending.due_ms);
        }
    }

    fn release_wake_lock(&mut self) {
        if let Err(err) = self.wake_lock.release() {
            debug!("player: wake lock release failed err={:?}", err);
        }
    }
}
