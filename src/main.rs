//! Headless session bootstrap.
//! Creates one session, drives a short scripted walk through it and logs
//! the resulting state as JSON. A host runtime replaces the script with
//! real input and draws from `Game` each frame.

use anyhow::{Context, Result};
use tilecraft::{Game, GameConfig, InputEvent, KeyCode, MouseButton, RecipeButtonLayout};

const CONFIG_ENV: &str = "TILECRAFT_CONFIG";
const DEMO_FRAMES: u64 = 600;

fn load_config() -> Result<GameConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("loading config from {}", CONFIG_ENV)),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let mut game = Game::new(&config).context("starting session")?;
    let layout = RecipeButtonLayout::new();
    let tile = config.tile_size as f32;

    let script = [KeyCode::KeyD, KeyCode::KeyD, KeyCode::KeyS, KeyCode::KeyA, KeyCode::KeyW];
    for frame in 0..DEMO_FRAMES {
        game.update();

        if frame % 60 == 0 {
            let key = script[(frame / 60) as usize % script.len()];
            game.handle_input(InputEvent::KeyDown(key), &layout);

            // Mine the tile to the right of the player
            let (px, py) = game.player().position();
            let click = InputEvent::MouseClick {
                x: (px + 1) as f32 * tile + tile / 2.0,
                y: py as f32 * tile + tile / 2.0,
                button: MouseButton::Left,
            };
            game.handle_input(click, &layout);
        }
    }

    let snapshot = serde_json::to_string_pretty(&game.snapshot())?;
    log::info!("Session state after {} frames:\n{}", DEMO_FRAMES, snapshot);
    Ok(())
}
