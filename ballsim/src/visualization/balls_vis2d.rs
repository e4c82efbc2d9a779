use std::time::{Duration, Instant};

use bevy::app::AppExit;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::render::view::screenshot::ScreenshotManager;
use bevy::window::{CursorMoved, PrimaryWindow, WindowCloseRequested, WindowResolution};
use bevy_rapier2d::prelude::*;

use crate::simulation::controller::{InputEvent, Key, SessionAction, SessionController};
use crate::simulation::engine::{spawn_body, spawn_enclosure, world_configuration};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BallSpawn, ScreenPoint};

pub fn run_2d(scenario: Scenario) {
    let p = &scenario.parameters;
    let window = Window {
        title: "fps: 0".to_string(),
        resolution: WindowResolution::new(p.extent, p.extent),
        resizable: false,
        ..default()
    };
    let session = SessionController::from_parameters(p);
    let rapier_cfg = world_configuration(p);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            // closing goes through the session so it is handled like escape
            close_when_requested: false,
            ..default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin::default())
        .insert_resource(rapier_cfg)
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(session)
        .insert_resource(scenario)
        .add_plugins(SessionPlugin)
        .add_systems(Startup, setup_scene_system)
        .add_systems(Update, save_snapshot_system.after(apply_input_system))
        .add_systems(Update, fps_title_system)
        .add_systems(Last, frame_pacing_system)
        .run();
}

fn setup_scene_system(mut commands: Commands, scenario: Res<Scenario>) {
    let p = &scenario.parameters;
    info!(
        "run_2d: {}x{} box, dt = {:.4}, cap = {} balls",
        p.extent, p.extent, p.dt, p.max_bodies
    );
    let half = p.extent / 2.0;

    // shift the camera so world origin sits at the bottom-left corner of the window
    let mut camera = Camera2dBundle::default();
    camera.transform.translation.x = half;
    camera.transform.translation.y = half;
    commands.spawn(camera);

    spawn_enclosure(&mut commands, &scenario.enclosure, p);
}

pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::KeyP => Key::Snapshot,
        _ => Key::Other,
    }
}

/// Session-side frame loop: window input in, session actions and ball spawns out.
/// Needs `Scenario`, `SessionController` and `RapierConfiguration` resources.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WindowCloseRequested>()
            .add_event::<KeyboardInput>()
            .add_event::<CursorMoved>()
            .add_event::<MouseButtonInput>()
            .add_event::<InputEvent>()
            .add_event::<BallSpawn>()
            .add_event::<SnapshotRequest>()
            .add_systems(
                Update,
                (poll_input_system, apply_input_system, spawn_balls_system).chain(),
            );
    }
}

/// The session asked for the current frame to be written to disk
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotRequest;

/// Translates this frame's window events into session input.
pub fn poll_input_system(
    mut close_requests: EventReader<WindowCloseRequested>,
    mut keys: EventReader<KeyboardInput>,
    mut cursor_moves: EventReader<CursorMoved>,
    mut buttons: EventReader<MouseButtonInput>,
    mut pointer: Local<Option<Vec2>>,
    mut polled: EventWriter<InputEvent>,
) {
    for _ in close_requests.read() {
        polled.send(InputEvent::Quit);
    }

    for ev in keys.read() {
        if ev.state == ButtonState::Pressed {
            polled.send(InputEvent::KeyDown(key_from_code(ev.key_code)));
        }
    }

    // Window::cursor_position() goes to None once the cursor leaves, but winit keeps
    // reporting moves while a button is held, so a drag may end outside the window
    for ev in cursor_moves.read() {
        *pointer = Some(ev.position);
    }

    for ev in buttons.read() {
        let Some(cursor) = *pointer else {
            debug!("poll_input: {:?} {:?} before any cursor movement, ignored", ev.button, ev.state);
            continue;
        };
        let point = ScreenPoint::new(cursor.x, cursor.y);
        polled.send(match ev.state {
            ButtonState::Pressed => InputEvent::PointerDown(point),
            ButtonState::Released => InputEvent::PointerUp(point),
        });
    }
}

/// Feeds polled input to the session and carries out what it asks for.
pub fn apply_input_system(
    mut session: ResMut<SessionController>,
    mut rapier_cfg: ResMut<RapierConfiguration>,
    mut polled: EventReader<InputEvent>,
    mut spawns: EventWriter<BallSpawn>,
    mut snapshots: EventWriter<SnapshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    if !session.is_running() {
        polled.clear();
        return;
    }

    for &event in polled.read() {
        let before = session.live_bodies();
        let action = session.handle_event(event);

        match action {
            Some(SessionAction::Spawn(spawn)) => {
                spawns.send(spawn);
            }
            Some(SessionAction::SaveSnapshot) => {
                snapshots.send(SnapshotRequest);
            }
            Some(SessionAction::Exit) => {
                info!("apply_input: exit requested");
                // the runner only exits after this frame, which would still step the world
                rapier_cfg.physics_pipeline_active = false;
                exit.send(AppExit::Success);
                break;
            }
            None => {
                if matches!(event, InputEvent::PointerUp(_)) && before >= session.max_bodies() {
                    info!("apply_input: ball cap of {} reached, gesture dropped", before);
                }
            }
        }
    }
}

fn save_snapshot_system(
    mut requests: EventReader<SnapshotRequest>,
    scenario: Res<Scenario>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut screenshots: ResMut<ScreenshotManager>,
) {
    for _ in requests.read() {
        let path = &scenario.parameters.snapshot_path;
        let Ok(window) = windows.get_single() else {
            warn!("save_snapshot: no primary window to snapshot");
            continue;
        };
        // the file is written once the frame has rendered
        match screenshots.save_screenshot_to_disk(window, path) {
            Ok(()) => info!("save_snapshot: snapshot requested, writing {}", path),
            Err(e) => warn!("save_snapshot: snapshot to {} failed: {}", path, e),
        }
    }
}

/// Hands every ball requested this frame to the engine.
pub fn spawn_balls_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut spawns: EventReader<BallSpawn>,
) {
    for spawn in spawns.read() {
        let entity = spawn_body(&mut commands, &scenario.parameters, spawn);
        info!(
            "spawn: ball {:?} at ({:.1}, {:.1}) with velocity ({:.1}, {:.1})",
            entity, spawn.position.x, spawn.position.y, spawn.velocity.x, spawn.velocity.y
        );
    }
}

fn fps_title_system(
    diagnostics: Res<DiagnosticsStore>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
    else {
        return;
    };
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = format!("fps: {fps:.1}");
    }
}

/// Sleeps off whatever is left of the frame budget so the loop runs at the target rate.
fn frame_pacing_system(scenario: Res<Scenario>, mut last_frame: Local<Option<Instant>>) {
    let budget = Duration::from_secs_f32(1.0 / scenario.parameters.fps);

    if let Some(last) = *last_frame {
        let elapsed = last.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
    }
    *last_frame = Some(Instant::now());
}
