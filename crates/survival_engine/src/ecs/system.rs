//! System trait

/// System processing entities and components once per frame.
///
/// `S` is the simulation state the system runs against; systems that need
/// private state across frames (timers, random generators) keep it in `self`.
pub trait System<S> {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Run the system for one frame
    fn run(&mut self, state: &mut S, delta_time: f32);
}
