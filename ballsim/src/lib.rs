pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{BallSpawn, DragGesture, ScreenPoint, SimPoint, SimVec};
pub use simulation::params::{Parameters, Surface};
pub use simulation::controller::{coordinate_flip, InputEvent, Key, SessionAction, SessionController};
pub use simulation::engine::{disc_inertia, enclosure_segments, spawn_body, spawn_enclosure, world_configuration, EnclosureWall, SpawnedBall};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BallConfig, DemoConfig, PhysicsConfig, WallConfig, WindowConfig};

pub use visualization::balls_vis2d::{run_2d, SessionPlugin, SnapshotRequest};
