//! Game loop driver
//!
//! [`Game::tick`] runs one frame: measure the frame time, drain window events,
//! update the simulation unless the game is over, then draw. The caller owns
//! the outer loop and presents the frame after each tick.

use std::fmt;

use survival_engine::prelude::*;

use crate::config::GameConfig;
use crate::render;
use crate::simulation::Simulation;
use crate::systems::{self, input::MOVEMENT_KEYS};

/// Why the game loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The window close button was pressed
    WindowClosed,
    /// Escape was pressed
    EscapePressed,
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowClosed => write!(f, "window closed"),
            Self::EscapePressed => write!(f, "escape pressed"),
        }
    }
}

/// Owns the simulation, the system schedule and the two game clocks
pub struct Game<C: Clock = Stopwatch> {
    simulation: Simulation,
    scheduler: Scheduler<Simulation>,
    frame_clock: C,
    game_clock: C,
    exit_reason: Option<ExitReason>,
}

impl Game<Stopwatch> {
    /// Create a game timed by the wall clock
    pub fn new(config: &GameConfig) -> Self {
        Self::with_clocks(config, Stopwatch::start_new(), Stopwatch::start_new())
    }
}

impl<C: Clock> Game<C> {
    /// Create a game with explicit frame and total-time clocks
    pub fn with_clocks(config: &GameConfig, frame_clock: C, game_clock: C) -> Self {
        let simulation = Simulation::new(config);
        let scheduler = systems::build_schedule(config.gameplay.seed);
        log::info!(
            "Game started: {}x{}, systems {:?}",
            config.window.width,
            config.window.height,
            scheduler.execution_order()
        );

        Self {
            simulation,
            scheduler,
            frame_clock,
            game_clock,
            exit_reason: None,
        }
    }

    /// Run one frame. Returns `false` once the game should shut down.
    pub fn tick<P>(&mut self, platform: &mut P) -> bool
    where
        P: Platform + ?Sized,
    {
        let delta_time = self.frame_clock.restart();

        self.handle_events(platform);
        // The quitting frame is not drawn; the window closes right after
        if !self.is_running() {
            return false;
        }

        if !self.simulation.game_over {
            self.simulation
                .input
                .capture(&MOVEMENT_KEYS, |key| platform.is_key_down(key));
            self.scheduler.run(&mut self.simulation, delta_time);

            if self.simulation.game_over {
                log::info!(
                    "Game over after {:.1}s",
                    self.game_clock.elapsed_seconds()
                );
            }
        }

        render::render_frame(platform, &self.simulation, self.game_clock.elapsed_seconds());
        true
    }

    fn handle_events<P>(&mut self, platform: &mut P)
    where
        P: Platform + ?Sized,
    {
        while let Some(event) = platform.poll_event() {
            match event {
                AppEvent::WindowCloseRequested => self.quit(ExitReason::WindowClosed),
                AppEvent::KeyPressed(KeyCode::Escape) => self.quit(ExitReason::EscapePressed),
                AppEvent::KeyPressed(_) => {}
            }
        }
    }

    /// Stop the loop; the first reason given is kept
    pub fn quit(&mut self, reason: ExitReason) {
        if self.exit_reason.is_none() {
            log::info!("Quitting: {reason}");
            self.exit_reason = Some(reason);
        }
    }

    /// Whether the loop should keep going
    pub const fn is_running(&self) -> bool {
        self.exit_reason.is_none()
    }

    /// Why the loop stopped, if it has
    pub const fn exit_reason(&self) -> Option<ExitReason> {
        self.exit_reason
    }

    /// Whether the player has died
    pub const fn is_game_over(&self) -> bool {
        self.simulation.game_over
    }

    /// Current simulation state
    pub const fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Mutable simulation state
    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// Seconds since the game started
    pub fn elapsed_seconds(&self) -> f32 {
        self.game_clock.elapsed_seconds()
    }
}
