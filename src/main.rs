//! Galaxy Runner entry point
//!
//! Native builds have no window; they play one headless run with the
//! autopilot steering and log how far it got.

use galaxy_runner::audio::LogBackend;
use galaxy_runner::consts::TICK_DT;
use galaxy_runner::sim::{GamePhase, Intent, Viewport, autopilot};
use galaxy_runner::{Game, Settings, Tuning};

const SEED_ENV: &str = "GALAXY_SEED";
const TICKS_ENV: &str = "GALAXY_TICKS";
const TUNING_PATH_ENV: &str = "GALAXY_TUNING";
const DEFAULT_TICKS: u64 = 3600;

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn load_tuning() -> Tuning {
    let Ok(path) = std::env::var(TUNING_PATH_ENV) else {
        return Tuning::default();
    };
    match Tuning::load_from(&path) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("{} - using default tuning", e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Galaxy Runner (native) starting...");

    let settings = Settings::load();
    let tuning = load_tuning();
    let seed = env_parse(SEED_ENV).unwrap_or_else(rand::random::<u64>);
    let max_ticks = env_parse(TICKS_ENV).unwrap_or(DEFAULT_TICKS);

    let mut game = match Game::new(seed, tuning, settings, LogBackend) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    let viewport = Viewport::default();
    game.handle_intent(Intent::StartOrRestart);

    let mut ticks = 0;
    while ticks < max_ticks && game.phase() == GamePhase::Running {
        let desired = autopilot::desired_steer(game.state(), &viewport);
        for intent in autopilot::steer_intents(game.state().steer(), desired) {
            game.handle_intent(intent);
        }
        game.update(TICK_DT, &viewport);
        ticks += 1;
    }

    // Let the game over voice cue play out
    if game.phase() == GamePhase::GameOver {
        let linger = (game.state().tuning.game_over_voice_delay / TICK_DT).ceil() as u64 + 1;
        for _ in 0..linger {
            game.update(TICK_DT, &viewport);
        }
    }

    log::info!(
        "Finished after {} ticks: {:?}, {}",
        ticks,
        game.phase(),
        game.score_text()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds drive `Game` from the host page
}
