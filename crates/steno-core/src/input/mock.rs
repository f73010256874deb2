use std::collections::VecDeque;

use super::{ControlEvent, InputProvider};

/// Input source fed programmatically, one event per poll.
#[derive(Default, Debug, Clone)]
pub struct QueuedInput {
    events: VecDeque<ControlEvent>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ControlEvent) {
        self.events.push_back(event);
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<ControlEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
