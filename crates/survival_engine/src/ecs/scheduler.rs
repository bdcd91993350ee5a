//! System Scheduling
//!
//! Provides a deterministic execution order. Systems are grouped into phases
//! that run in order; inside a phase they run in registration order. Everything
//! executes sequentially on the calling thread against one mutable state, so no
//! locking is involved.

use super::System;

/// System execution phases with explicit ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemPhase {
    /// Input processing
    PreUpdate = 0,
    /// Game logic: movement, AI, spawning
    Update = 1,
    /// Collision resolution and entity destruction
    PostUpdate = 2,
}

struct ScheduledSystem<S> {
    phase: SystemPhase,
    system: Box<dyn System<S>>,
}

/// Ordered list of systems run once per frame
pub struct Scheduler<S> {
    systems: Vec<ScheduledSystem<S>>,
}

impl<S> Default for Scheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Scheduler<S> {
    /// Create an empty scheduler
    pub const fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Register a system in a phase, after every system already in that phase
    pub fn add_system<T>(&mut self, phase: SystemPhase, system: T) -> &mut Self
    where
        T: System<S> + 'static,
    {
        let index = self.systems.partition_point(|scheduled| scheduled.phase <= phase);
        self.systems.insert(
            index,
            ScheduledSystem {
                phase,
                system: Box::new(system),
            },
        );
        self
    }

    /// Run every system once, in execution order
    pub fn run(&mut self, state: &mut S, delta_time: f32) {
        for scheduled in &mut self.systems {
            log::trace!(
                "running system '{}' ({:?})",
                scheduled.system.name(),
                scheduled.phase
            );
            scheduled.system.run(state, delta_time);
        }
    }

    /// System names in the order they run
    pub fn execution_order(&self) -> Vec<&'static str> {
        self.systems
            .iter()
            .map(|scheduled| scheduled.system.name())
            .collect()
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no system is registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
