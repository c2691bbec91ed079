//! Headless arena driver
//!
//! Runs a session at a fixed timestep with a scripted pilot standing in for a
//! human player, logging the HUD as it goes.
//!
//! Usage: `bebop [config.toml|config.ron] [seconds]`

use std::path::PathBuf;

use bebop::components::{Enemy, Transform};
use bebop::{ArenaConfig, GameSession};
use bebop_engine::config::Config;
use bebop_engine::foundation::logging;
use bebop_engine::input::{InputManager, KeyCode, MouseButton, SharedInput};

const TIMESTEP: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 60.0;
const HUD_INTERVAL: u32 = 60;

/// Keys held in turn so the pilot circles the arena
const CIRCLE: [KeyCode; 4] = [KeyCode::D, KeyCode::S, KeyCode::A, KeyCode::W];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let seconds = match args.next() {
        Some(raw) => raw.parse::<f32>()?,
        None => DEFAULT_SECONDS,
    };

    let config = ArenaConfig::load_or_default(config_path.as_deref()).map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        e
    })?;

    let input = InputManager::shared();
    let mut session = GameSession::new(config, input.clone()).map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        e
    })?;

    let frames = (seconds / TIMESTEP).ceil() as u32;
    log::info!("Running {} frames ({:.1}s simulated)", frames, seconds);

    for frame in 0..frames {
        if session.is_game_over() {
            break;
        }
        pilot(&session, &input, frame);
        session.tick(TIMESTEP);

        if frame % HUD_INTERVAL == 0 {
            let hud = session.hud();
            log::info!(
                "t={:>5.1}s health {:>5.1}/{:.0} ({:>3.0}%) score {:>5} entities {}",
                frame as f32 * TIMESTEP,
                hud.health,
                hud.max_health,
                hud.health_fraction() * 100.0,
                hud.score,
                session.world().entity_count()
            );
        }
    }

    let hud = session.hud();
    if hud.game_over {
        log::info!("Player destroyed. Final score: {}", hud.score);
    } else {
        log::info!("Survived the run. Final score: {}", hud.score);
    }
    Ok(())
}

/// Steer in a slow circle and shoot at the nearest enemy
fn pilot(session: &GameSession, input: &SharedInput, frame: u32) {
    let world = session.world();
    let Some(origin) = world
        .get_component::<Transform>(session.player())
        .map(|t| t.position)
    else {
        return;
    };

    let nearest = world
        .entities_with_component::<Enemy>()
        .into_iter()
        .filter_map(|e| world.get_component::<Transform>(e).map(|t| t.position))
        .min_by(|a, b| (a - origin).norm().total_cmp(&(b - origin).norm()));

    let mut input = input.borrow_mut();
    input.clear();
    let leg = (frame / HUD_INTERVAL) as usize % CIRCLE.len();
    input.handle_key_input(CIRCLE[leg], true);

    if let Some(target) = nearest {
        input.handle_mouse_move(target.x, target.y);
        input.handle_mouse_button(MouseButton::Left, true);
    }
}
