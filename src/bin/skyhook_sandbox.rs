//! Skyhook Sandbox - Headless Movement Playground
//!
//! Run with: `RUST_LOG=info cargo run --bin skyhook-sandbox [config.json]`
//!
//! Drives one character through a scripted run at 60 Hz and logs every
//! gameplay event:
//! - Sprint forward, double jump, a rejected third jump
//! - Double-tap forward to dash, wait out the cooldown
//! - Grapple onto the tower, release, fire
//!
//! Use `RUST_LOG=debug` (or `trace`) to see controller internals.

use std::path::PathBuf;
use std::process::ExitCode;

use glam::Vec3;
use log::{error, info};

use skyhook_engine::physics::Aabb;
use skyhook_engine::{
    CharacterBody, CharacterConfig, CharacterEvent, DashDirection, DoubleTapDetector,
    FirstPersonCharacter, InputAction, KinematicBody, StaticWorld,
};

const TICK: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u32 = 480;

/// What the script does on a given frame.
enum Step {
    Act(InputAction),
    /// Raw directional key press, fed through the double-tap detector
    Tap(DashDirection),
}

fn script(frame: u32) -> Vec<Step> {
    match frame {
        0 => vec![Step::Act(InputAction::SprintPressed)],
        30 | 45 | 50 => vec![Step::Act(InputAction::Jump)],
        150 | 158 => vec![Step::Tap(DashDirection::Forward)],
        170 => vec![Step::Act(InputAction::SprintReleased)],
        230 => vec![
            Step::Act(InputAction::Turn(-20.0)),
            Step::Act(InputAction::LookUp(25.0)),
        ],
        240 | 300 => vec![Step::Act(InputAction::GrappleToggle)],
        320 => vec![Step::Act(InputAction::Fire)],
        _ => Vec::new(),
    }
}

fn build_world() -> StaticWorld {
    StaticWorld::with_boxes(vec![
        // Tower ahead and to the left of the spawn
        Aabb::new(Vec3::new(4000.0, -1500.0, 0.0), Vec3::new(4600.0, -900.0, 4000.0)),
        // Low wall far down the run
        Aabb::new(Vec3::new(9000.0, -2000.0, 0.0), Vec3::new(9200.0, 2000.0, 300.0)),
    ])
}

fn log_event(frame: u32, event: &CharacterEvent) {
    let t = frame as f32 * TICK;
    match event {
        CharacterEvent::Jumped { count } => info!("[{t:5.2}s] jump #{count}"),
        CharacterEvent::DashStarted { direction, impulse } => {
            info!("[{t:5.2}s] dash {direction} impulse {impulse:.0}")
        }
        CharacterEvent::DashEnded => info!("[{t:5.2}s] dash ended, cooling down"),
        CharacterEvent::DashReady => info!("[{t:5.2}s] dash ready"),
        CharacterEvent::GrappleAttached { anchor } => {
            info!("[{t:5.2}s] grapple attached at {anchor:.0}")
        }
        CharacterEvent::GrappleReleased => info!("[{t:5.2}s] grapple released"),
        CharacterEvent::FireRequested { origin, direction } => {
            info!("[{t:5.2}s] fire from {origin:.0} along {direction:.2}")
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match CharacterConfig::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => CharacterConfig::default(),
    };

    let world = build_world();
    let mut character = FirstPersonCharacter::with_config(&config);
    let mut body = KinematicBody::new(Vec3::ZERO);
    let mut taps = DoubleTapDetector::with_window(config.double_tap_window);

    info!(
        "Sandbox: {} static boxes, grapple mode {:?}",
        world.len(),
        character.grapple().force_mode()
    );

    for frame in 0..TOTAL_FRAMES {
        taps.advance(TICK);

        for step in script(frame) {
            let action = match step {
                Step::Act(action) => Some(action),
                Step::Tap(direction) => taps.press(direction),
            };
            let Some(action) = action else { continue };
            if let Some(event) = character.handle_action(action, &mut body, &world, TICK) {
                log_event(frame, &event);
            } else if matches!(
                action,
                InputAction::Jump | InputAction::Dash(_) | InputAction::GrappleToggle
            ) {
                info!("[{:5.2}s] {:?} rejected", frame as f32 * TICK, action);
            }
        }

        // Hold forward for the whole run
        character.handle_action(InputAction::MoveForward(1.0), &mut body, &world, TICK);
        body.set_facing(character.look().flat_forward());

        character.tick(TICK, &mut body);
        if body.step(TICK) {
            info!("[{:5.2}s] landed", frame as f32 * TICK);
            character.on_landed();
        }
        for event in character.drain_events() {
            log_event(frame, &event);
        }

        if frame % 60 == 0 {
            info!(
                "[{:5.2}s] pos {:.0} vel {:.0} speed cap {:.0} jumps {}/{}",
                frame as f32 * TICK,
                body.position(),
                body.velocity(),
                character.movement().current_speed(),
                character.movement().jump_count(),
                character.movement().jump_limit(),
            );
        }
    }

    info!("Final position {:.0}", body.position());
    ExitCode::SUCCESS
}
