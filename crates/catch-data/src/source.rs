use std::collections::VecDeque;

use catch_core::{Result, SessionRecord};

/// Anything that can enumerate the active sessions of a server.
///
/// Implementations must return sessions ordered by elapsed time, longest
/// first, and must already exclude idle (`Sleep`) sessions. The pipeline
/// preserves the order it is given and never re-filters on command kind.
pub trait SessionSource {
    fn fetch(&mut self) -> Result<Vec<SessionRecord>>;
}

impl<S: SessionSource + ?Sized> SessionSource for Box<S> {
    fn fetch(&mut self) -> Result<Vec<SessionRecord>> {
        (**self).fetch()
    }
}

/// In-memory source that hands out queued poll results in order.
///
/// Once the queue is drained every further poll returns an empty batch.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    polls: VecDeque<Result<Vec<SessionRecord>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful poll.
    pub fn push_batch(mut self, batch: Vec<SessionRecord>) -> Self {
        self.polls.push_back(Ok(batch));
        self
    }

    /// Queue a failing poll.
    pub fn push_error(mut self, message: &str) -> Self {
        self.polls
            .push_back(Err(catch_core::CatchError::DataSource(message.to_string())));
        self
    }

    /// Polls still queued.
    pub fn remaining(&self) -> usize {
        self.polls.len()
    }
}

impl SessionSource for ScriptedSource {
    fn fetch(&mut self) -> Result<Vec<SessionRecord>> {
        self.polls.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
