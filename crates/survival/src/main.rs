//! Top-down survival game binary
//!
//! Usage: `survival [CONFIG]`. Without an argument `survival.toml` is read from
//! the working directory if present; an explicit config file must be valid.

use ::macroquad::prelude::{next_frame, Conf};
use survival::config::CONFIG_PATH;
use survival::platform::MacroquadPlatform;
use survival::{Game, GameConfig, GameResult};
use survival_engine::foundation::logging;
use survival_engine::foundation::time::FrameLimiter;
use survival_engine::prelude::*;

fn load_config() -> GameResult<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(GameConfig::load_from_file(path)?),
        None => Ok(GameConfig::load_or_default(CONFIG_PATH)),
    }
}

fn window_conf() -> Conf {
    // Logging is not up yet; problems are reported again from `run`
    let window = load_config().unwrap_or_default().window;

    Conf {
        window_title: window.title,
        window_width: i32::try_from(window.width).unwrap_or(i32::MAX),
        window_height: i32::try_from(window.height).unwrap_or(i32::MAX),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> GameResult<()> {
    let config = load_config()?;
    let mut platform = MacroquadPlatform::new(&config.assets)?;
    let mut game = Game::new(&config);
    let mut limiter = FrameLimiter::new(config.window.frame_rate_limit);

    loop {
        limiter.begin_frame();
        platform.begin_frame();

        if !game.tick(&mut platform) {
            break;
        }

        limiter.wait();
        next_frame().await;
    }

    log::info!(
        "Shut down after {:.1}s ({})",
        game.elapsed_seconds(),
        game.exit_reason()
            .map_or_else(|| "unknown".to_string(), |reason| reason.to_string())
    );
    Ok(())
}
