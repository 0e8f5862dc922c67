// src/progress.rs
/// Lightweight progress reporting for batch resolution.
/// Frontends (CLI, tests) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of race numbers to resolve.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One race number resolved into a participant.
    fn item_done(&mut self, _race_number: u32, _name: &str) {}

    /// One race number could not be resolved.
    fn item_failed(&mut self, _race_number: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
