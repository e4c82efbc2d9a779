pub mod states;
pub mod params;
pub mod engine;
pub mod controller;
pub mod scenario;
