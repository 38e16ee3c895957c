/// A unit driven by its own repeating timer.
///
/// `start` outside a tokio runtime logs a warning and leaves the unit idle.
/// `stop` is idempotent and guarantees no tick mutates the unit after it returns.
pub trait Animated {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}
