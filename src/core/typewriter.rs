use crate::core::scheduler::{TickFlow, TickTask};
use crate::domain::ports::Animated;
use crate::utils::error::Result;
use crate::utils::validation::validate_tick_interval;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

const UNIT: &str = "typewriter";

#[derive(Debug)]
struct TypewriterState {
    text: String,
    // Byte offset after each char; `ends[n - 1]` closes the first n chars.
    ends: Vec<usize>,
    cursor: usize,
    epoch: u64,
}

impl TypewriterState {
    fn new(text: String) -> Self {
        let ends = text
            .char_indices()
            .map(|(offset, ch)| offset + ch.len_utf8())
            .collect();
        Self {
            text,
            ends,
            cursor: 0,
            epoch: 0,
        }
    }

    fn is_complete(&self) -> bool {
        self.cursor == self.ends.len()
    }

    fn advance(&mut self) -> TickFlow {
        if !self.is_complete() {
            self.cursor += 1;
        }
        if self.is_complete() {
            TickFlow::Finished
        } else {
            TickFlow::Continue
        }
    }

    fn revealed(&self) -> &str {
        match self.cursor {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }
}

/// Reveals a string one character per tick, then holds the full text.
#[derive(Debug)]
pub struct TypewriterRevealer {
    state: Arc<Mutex<TypewriterState>>,
    speed: Duration,
    task: Option<TickTask>,
    // Whether `start` was requested; `reset` only restarts an active revealer.
    active: bool,
}

impl TypewriterRevealer {
    pub fn new(text: impl Into<String>, speed: Duration) -> Result<Self> {
        validate_tick_interval(UNIT, speed)?;
        Ok(Self {
            state: Arc::new(Mutex::new(TypewriterState::new(text.into()))),
            speed,
            task: None,
            active: false,
        })
    }

    /// Reveals one more character, as one timer tick would. No-op once complete.
    pub fn tick(&self) {
        self.state.lock().advance();
    }

    pub fn revealed(&self) -> String {
        self.state.lock().revealed().to_string()
    }

    pub fn is_complete(&self) -> bool {
        self.state.lock().is_complete()
    }

    pub fn cursor(&self) -> usize {
        self.state.lock().cursor
    }

    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    /// Hides the text again and, if the revealer was started, types it anew.
    pub fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        {
            let mut state = self.state.lock();
            state.cursor = 0;
            state.epoch += 1;
        }
        tracing::debug!("typewriter reset");
        if self.active {
            self.spawn_ticker();
        }
    }

    fn spawn_ticker(&mut self) {
        let epoch = {
            let state = self.state.lock();
            if state.is_complete() {
                tracing::debug!("typewriter has nothing left to reveal");
                return;
            }
            state.epoch
        };
        let state = Arc::clone(&self.state);
        self.task = TickTask::spawn(UNIT, self.speed, move || {
            let mut state = state.lock();
            if state.epoch != epoch {
                return TickFlow::Finished;
            }
            let flow = state.advance();
            if flow == TickFlow::Finished {
                tracing::debug!(chars = state.cursor, "typewriter complete");
            }
            flow
        });
    }
}

impl Animated for TypewriterRevealer {
    fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.active = true;
        self.spawn_ticker();
    }

    fn stop(&mut self) {
        self.active = false;
        if let Some(task) = self.task.take() {
            self.state.lock().epoch += 1;
            task.cancel();
        }
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(TickTask::is_active)
    }
}

impl Drop for TypewriterRevealer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let typewriter = TypewriterRevealer::new("Hi", Duration::from_millis(100)).unwrap();
        assert_eq!(typewriter.revealed(), "");
        assert!(!typewriter.is_complete());

        typewriter.tick();
        assert_eq!(typewriter.revealed(), "H");

        typewriter.tick();
        assert_eq!(typewriter.revealed(), "Hi");
        assert!(typewriter.is_complete());

        typewriter.tick();
        assert_eq!(typewriter.revealed(), "Hi");
        assert_eq!(typewriter.cursor(), 2);
    }

    #[test]
    fn test_empty_text_is_complete_immediately() {
        let typewriter = TypewriterRevealer::new("", Duration::from_millis(100)).unwrap();
        assert!(typewriter.is_complete());
        assert_eq!(typewriter.revealed(), "");
        typewriter.tick();
        assert_eq!(typewriter.cursor(), 0);
    }

    #[test]
    fn test_multibyte_chars_reveal_whole() {
        let typewriter = TypewriterRevealer::new("héllo", Duration::from_millis(10)).unwrap();
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.revealed(), "hé");
    }

    #[test]
    fn test_reset_without_start_rewinds_only() {
        let mut typewriter = TypewriterRevealer::new("Hi", Duration::from_millis(100)).unwrap();
        typewriter.tick();
        typewriter.reset();
        assert_eq!(typewriter.revealed(), "");
        assert!(!typewriter.is_running());
    }

    #[test]
    fn test_start_and_reset_outside_runtime_do_not_panic() {
        let mut typewriter = TypewriterRevealer::new("Hi", Duration::from_millis(10)).unwrap();
        typewriter.start();
        assert!(!typewriter.is_running());
        typewriter.tick();
        typewriter.reset();
        assert_eq!(typewriter.revealed(), "");
        assert!(!typewriter.is_running());
    }
}
