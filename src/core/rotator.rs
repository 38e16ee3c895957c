use crate::core::cycle::CircularIndex;
use crate::core::scheduler::{TickFlow, TickTask};
use crate::domain::ports::Animated;
use crate::utils::error::Result;
use crate::utils::validation::validate_tick_interval;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

const UNIT: &str = "role rotator";

#[derive(Debug)]
struct RotatorState {
    roles: Vec<String>,
    position: CircularIndex,
    // Bumped on every start/stop; ticks from an older run are ignored.
    epoch: u64,
}

/// Cycles through role labels on a fixed interval.
#[derive(Debug)]
pub struct RoleRotator {
    state: Arc<Mutex<RotatorState>>,
    interval: Duration,
    task: Option<TickTask>,
}

impl RoleRotator {
    pub fn new<I, S>(roles: I, interval: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        let position = CircularIndex::new(UNIT, roles.len())?;
        validate_tick_interval(UNIT, interval)?;

        Ok(Self {
            state: Arc::new(Mutex::new(RotatorState {
                roles,
                position,
                epoch: 0,
            })),
            interval,
            task: None,
        })
    }

    /// Advances to the next role, as one timer tick would.
    pub fn tick(&self) {
        self.state.lock().position.advance();
    }

    pub fn current(&self) -> String {
        let state = self.state.lock();
        state.roles[state.position.get()].clone()
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().position.get()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Animated for RoleRotator {
    fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let epoch = {
            let mut state = self.state.lock();
            state.epoch += 1;
            state.epoch
        };
        let state = Arc::clone(&self.state);
        self.task = TickTask::spawn(UNIT, self.interval, move || {
            let mut state = state.lock();
            if state.epoch != epoch {
                return TickFlow::Finished;
            }
            let index = state.position.advance();
            tracing::trace!(index, role = %state.roles[index], "role rotated");
            TickFlow::Continue
        });
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            self.state.lock().epoch += 1;
            task.cancel();
        }
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(TickTask::is_active)
    }
}

impl Drop for RoleRotator {
    fn drop(&mut self) {
        self.stop();
    }
}
